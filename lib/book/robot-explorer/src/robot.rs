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

use tracing::debug;

use crate::actor::interact;
use crate::room::{describe, RoomKey, Rooms};
use crate::urge::Urge;

/// The one movable actor on a stage. The robot is not stored in the room it stands in; it only
/// remembers which room that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub room: RoomKey,

    /// Only ever grows, by one for each Food eaten.
    pub energy: u32,
}

impl Robot {
    pub fn new(room: RoomKey) -> Self {
        Self { room, energy: 0 }
    }

    /// Try to go through the door in the direction of `urge`. The actor behind the door decides
    /// where the robot lands. At the edge of the grid there is no door and the robot stays put.
    pub fn move_to(&mut self, urge: Urge, rooms: &mut Rooms) {
        let Some(next_room) = rooms[self.room].doors.open(urge) else {
            debug!(%urge, "no door, staying put");
            return;
        };
        let landed = interact(rooms, next_room, self);
        debug!(
            %urge,
            tried = %describe(rooms, next_room),
            landed = %describe(rooms, landed),
            energy = self.energy,
            "robot moved"
        );
        self.room = landed;
    }
}
