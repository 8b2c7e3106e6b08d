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

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::actor::{Actor, ActorKind, Teleport};
use crate::robot::Robot;
use crate::room::{Room, RoomKey, Rooms};
use crate::urge::{parse_solution, Urge};
use crate::{ExplorerError, HashMap};

/// A maze built from text, together with the robot exploring it.
///
/// Each character of the maze text is one room: the line is the row and the position within the
/// line is the column. Lines may have different lengths.
#[derive(Debug, Clone)]
pub struct Stage {
    rooms: Rooms,
    grid: HashMap<(i32, i32), RoomKey>,
    row_widths: Vec<i32>,
    robot: Robot,
}

impl Stage {
    pub fn build(maze: &str) -> Result<Self, ExplorerError> {
        let mut rooms = Rooms::with_key();
        let mut grid = HashMap::default();
        let mut row_widths = Vec::new();
        let mut robot_rooms = Vec::new();
        let mut teleports: BTreeMap<char, Vec<RoomKey>> = BTreeMap::new();

        for (row, line) in maze.lines().enumerate() {
            let row = row as i32;
            let mut width = 0;
            for (col, ch) in line.chars().enumerate() {
                let col = col as i32;
                let room = parse_room(ch, row, col)?;
                let kind = room.actor.kind();
                let key = rooms.insert(room);
                grid.insert((row, col), key);
                match kind {
                    ActorKind::Robot => robot_rooms.push(key),
                    ActorKind::Teleport => teleports.entry(ch).or_default().push(key),
                    _ => {}
                }
                width = col + 1;
            }
            row_widths.push(width);
        }

        if rooms.is_empty() {
            return Err(ExplorerError::EmptyMaze);
        }

        let start = match robot_rooms[..] {
            [] => return Err(ExplorerError::MissingRobot),
            [start] => start,
            _ => {
                return Err(ExplorerError::MultipleRobots {
                    count: robot_rooms.len(),
                })
            }
        };
        // The robot is tracked on its own; the room it starts in is just an empty room.
        rooms[start].actor = Actor::Empty;

        pair_teleports(&mut rooms, &teleports)?;

        for (_, room) in rooms.iter_mut() {
            let (row, col) = (room.row, room.col);
            room.doors.connect(row, col, &grid);
        }

        info!(
            rooms = rooms.len(),
            rows = row_widths.len(),
            teleports = teleports.len(),
            "stage built"
        );

        Ok(Self {
            rooms,
            grid,
            row_widths,
            robot: Robot::new(start),
        })
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// The room the robot is currently in.
    pub fn robot_room(&self) -> &Room {
        &self.rooms[self.robot.room]
    }

    /// The room built for the maze character at (row, col).
    pub fn room_at(&self, row: i32, col: i32) -> Option<&Room> {
        self.grid.get(&(row, col)).map(|key| &self.rooms[*key])
    }

    pub fn rooms(&self) -> &Rooms {
        &self.rooms
    }

    /// Whether the robot has reached an EndGame room.
    pub fn is_over(&self) -> bool {
        self.robot_room().actor == Actor::EndGame
    }

    pub fn step(&mut self, urge: Urge) {
        self.robot.move_to(urge, &mut self.rooms);
    }

    /// Replay a solution such as "eessw". The whole solution is checked before the robot moves.
    /// Stops early once the game is over. Returns how many moves were made.
    pub fn run(&mut self, solution: &str) -> Result<usize, ExplorerError> {
        let urges = parse_solution(solution)?;
        let mut moves = 0;
        for urge in urges {
            if self.is_over() {
                debug!(moves, "game over, ignoring the rest of the solution");
                break;
            }
            self.step(urge);
            moves += 1;
        }
        Ok(moves)
    }
}

fn parse_room(ch: char, row: i32, col: i32) -> Result<Room, ExplorerError> {
    ActorKind::PROTOTYPES
        .iter()
        .find_map(|kind| Option::<Room>::from(kind.create(ch, row, col)))
        .ok_or(ExplorerError::UnknownSymbol {
            symbol: ch,
            row,
            col,
        })
}

// Each teleport letter must appear exactly twice. Each end targets the room of the other end.
fn pair_teleports(
    rooms: &mut Rooms,
    teleports: &BTreeMap<char, Vec<RoomKey>>,
) -> Result<(), ExplorerError> {
    for (&symbol, ends) in teleports {
        let (a, b) = match ends[..] {
            [a, b] => (a, b),
            [_] => return Err(ExplorerError::UnpairedTeleport(symbol)),
            _ => {
                return Err(ExplorerError::OverfullTeleport {
                    symbol,
                    count: ends.len(),
                })
            }
        };
        rooms[a].actor = Actor::Teleport(Teleport {
            symbol,
            target: Some(b),
        });
        rooms[b].actor = Actor::Teleport(Teleport {
            symbol,
            target: Some(a),
        });
    }
    Ok(())
}

// Print the maze as it is now, with the robot drawn as 'R'.
impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let robot_room = self.robot_room();
        let robot_at = (robot_room.row, robot_room.col);
        let mut s = String::new();
        for (row, width) in self.row_widths.iter().enumerate() {
            let row = row as i32;
            if row > 0 {
                s.push('\n');
            }
            for col in 0..*width {
                if (row, col) == robot_at {
                    s.push(ActorKind::Robot.symbol());
                } else if let Some(room) = self.room_at(row, col) {
                    s.push(room.actor.symbol());
                }
            }
        }
        write!(f, "{}", s)
    }
}
