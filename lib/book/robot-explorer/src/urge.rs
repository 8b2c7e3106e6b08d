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

use crate::ExplorerError;

/// Direction the robot wants to move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urge {
    North,
    South,
    East,
    West,
}

impl Urge {
    pub const ALL: [Urge; 4] = [Urge::North, Urge::South, Urge::East, Urge::West];

    pub fn to_char(self) -> char {
        match self {
            Urge::North => 'n',
            Urge::South => 's',
            Urge::East => 'e',
            Urge::West => 'w',
        }
    }
}

impl TryFrom<char> for Urge {
    type Error = ExplorerError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'n' => Ok(Urge::North),
            's' => Ok(Urge::South),
            'e' => Ok(Urge::East),
            'w' => Ok(Urge::West),
            _ => Err(ExplorerError::UnknownUrge(ch)),
        }
    }
}

impl std::fmt::Display for Urge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parse a solution string such as "eessw" into urges. Whitespace is ignored so solutions can be
/// split over several lines.
pub fn parse_solution(solution: &str) -> Result<Vec<Urge>, ExplorerError> {
    solution
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(Urge::try_from)
        .collect()
}
