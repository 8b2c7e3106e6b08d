/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

#![warn(missing_docs)]

//! Small object basics exercises that sit next to the robot explorer: a robot on a wrap-around
//! field, a cage of hamsters looked up by name, and an adapter between a class and a library
//! interface.

pub mod adapter;
pub mod cage;
pub mod field_robot;

pub use adapter::{LibType, MyClass, MyClassAdaptedForLib, Trace};
pub use cage::{Cage, CageError, Hamster};
pub use field_robot::{FieldError, FieldRobot};
