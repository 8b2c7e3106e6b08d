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

//! A robot on a square field whose edges wrap around: walking off one side brings the robot back
//! in on the opposite side.

/// Field robot error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A field needs at least one cell.
    #[error("field size must be positive, got {0}")]
    EmptyField(i32),
}

/// Robot on a `field_size` by `field_size` torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRobot {
    field_size: i32,
    x: i32,
    y: i32,
}

impl FieldRobot {
    /// Create a robot at (x, y). The starting coordinates are wrapped onto the field as well.
    pub fn new(field_size: i32, x: i32, y: i32) -> Result<Self, FieldError> {
        if field_size <= 0 {
            return Err(FieldError::EmptyField(field_size));
        }
        Ok(Self {
            field_size,
            x: x.rem_euclid(field_size),
            y: y.rem_euclid(field_size),
        })
    }

    // Sums are taken in i64 so any step count wraps instead of overflowing.
    fn cross_boundary(&self, coordinate: i64) -> i32 {
        // The result is in 0..field_size, which always fits in an i32.
        coordinate.rem_euclid(i64::from(self.field_size)) as i32
    }

    /// Move towards larger x.
    pub fn right(&mut self, steps: i32) {
        self.x = self.cross_boundary(i64::from(self.x) + i64::from(steps));
    }

    /// Move towards smaller x.
    pub fn left(&mut self, steps: i32) {
        self.x = self.cross_boundary(i64::from(self.x) - i64::from(steps));
    }

    /// Move towards larger y.
    pub fn down(&mut self, steps: i32) {
        self.y = self.cross_boundary(i64::from(self.y) + i64::from(steps));
    }

    /// Move towards smaller y.
    pub fn up(&mut self, steps: i32) {
        self.y = self.cross_boundary(i64::from(self.y) - i64::from(steps));
    }

    /// Current (x, y).
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Current location as "(x, y)".
    pub fn location(&self) -> String {
        format!("({}, {})", self.x, self.y)
    }
}
