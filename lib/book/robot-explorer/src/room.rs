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

use slotmap::{new_key_type, SlotMap};

use crate::actor::{Actor, Teleport};
use crate::urge::Urge;
use crate::HashMap;

new_key_type! { pub struct RoomKey; }

/// Arena holding every room of a stage. Doors and teleports refer to rooms by key.
pub type Rooms = SlotMap<RoomKey, Room>;

/// A single grid cell and the actor occupying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub row: i32,
    pub col: i32,
    pub actor: Actor,
    pub doors: Doors,
}

impl Room {
    /// A room with no doors yet. Doors are connected once the whole grid is known.
    pub fn new(row: i32, col: i32, actor: Actor) -> Self {
        Self {
            row,
            col,
            actor,
            doors: Doors::default(),
        }
    }
}

// e.g. "Wall #(0, 3)"
impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}({}, {})",
            self.actor.name(),
            self.actor.symbol(),
            self.row,
            self.col
        )
    }
}

/// Describe the room at `key` for logs. A paired teleport shows where it leads rather than where
/// it is, e.g. "Teleport: a(3, 1)".
pub fn describe(rooms: &Rooms, key: RoomKey) -> String {
    let room = &rooms[key];
    match room.actor {
        Actor::Teleport(Teleport {
            symbol,
            target: Some(target),
        }) => {
            let target = &rooms[target];
            format!(
                "{}: {}({}, {})",
                room.actor.name(),
                symbol,
                target.row,
                target.col
            )
        }
        _ => room.to_string(),
    }
}

/// Neighbouring rooms of a room. A missing door is the edge of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Doors {
    north: Option<RoomKey>,
    south: Option<RoomKey>,
    east: Option<RoomKey>,
    west: Option<RoomKey>,
}

impl Doors {
    /// The room behind the door in the direction of `urge`, if there is one.
    pub fn open(&self, urge: Urge) -> Option<RoomKey> {
        match urge {
            Urge::North => self.north,
            Urge::South => self.south,
            Urge::East => self.east,
            Urge::West => self.west,
        }
    }

    /// Wire up the doors of the room at (row, col) using an index of every room by coordinates.
    /// Rows grow southwards and columns grow eastwards.
    pub fn connect(&mut self, row: i32, col: i32, grid: &HashMap<(i32, i32), RoomKey>) {
        self.north = grid.get(&(row - 1, col)).copied();
        self.south = grid.get(&(row + 1, col)).copied();
        self.east = grid.get(&(row, col + 1)).copied();
        self.west = grid.get(&(row, col - 1)).copied();
    }
}
