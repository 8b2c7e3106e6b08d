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

use std::collections::VecDeque;

use crate::stage::Stage;
use crate::urge::{parse_solution, Urge};
use crate::{Agent, Environment, ExplorerError};

/// A small maze that uses every kind of actor, and a solution that eats all the food on the way to
/// the end.
pub const DEMO_MAZE: &str = "\
##########
#R.._#..a#
#_##_#_###
#.__.#__!#
#a#######~";

pub const DEMO_SOLUTION: &str = "eeesswwwswwssee";

/// What the explorer sees before each move: where the robot is, what it is standing on and how
/// much energy it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerPercept {
    pub row: i32,
    pub col: i32,
    pub symbol: char,
    pub energy: u32,
}

impl Environment for Stage {
    type Action = Urge;
    type Percept = ExplorerPercept;
    type Score = u32;

    fn percept(&self) -> Self::Percept {
        let room = self.robot_room();
        ExplorerPercept {
            row: room.row,
            col: room.col,
            symbol: room.actor.symbol(),
            energy: self.robot().energy,
        }
    }

    fn execute_action(&mut self, action: &Self::Action) {
        self.step(*action);
    }

    fn score(&self) -> Self::Score {
        self.robot().energy
    }

    fn is_terminal(&self) -> bool {
        self.is_over()
    }
}

/// Replays a fixed list of urges, ignoring what it perceives.
#[derive(Debug, Clone, Default)]
pub struct ScriptedExplorer {
    urges: VecDeque<Urge>,
}

impl ScriptedExplorer {
    pub fn new(urges: Vec<Urge>) -> Self {
        Self {
            urges: urges.into(),
        }
    }

    pub fn from_solution(solution: &str) -> Result<Self, ExplorerError> {
        Ok(Self::new(parse_solution(solution)?))
    }

    pub fn remaining(&self) -> usize {
        self.urges.len()
    }
}

impl Agent for ScriptedExplorer {
    type Action = Urge;
    type Percept = ExplorerPercept;

    fn act(&mut self, _percept: &Self::Percept) -> Option<Self::Action> {
        self.urges.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Simulation;

    #[test]
    fn test_demo_solution_reaches_the_end() {
        let stage = Stage::build(DEMO_MAZE).expect("build failed");
        let explorer = ScriptedExplorer::from_solution(DEMO_SOLUTION).expect("bad solution");
        let mut simulation = Simulation::new(stage, explorer, 1000);
        simulation.run();

        assert!(simulation.environment().is_terminal());
        assert_eq!(simulation.steps(), DEMO_SOLUTION.len());
        assert_eq!(simulation.score(), 6);
        assert_eq!(simulation.score_gained(), 6);
        let percept = simulation.environment().percept();
        assert_eq!((percept.row, percept.col), (3, 8));
        assert_eq!(percept.symbol, '!');
    }

    #[test]
    fn test_demo_stage_renders_as_maze() {
        let stage = Stage::build(DEMO_MAZE).expect("build failed");
        assert_eq!(stage.to_string(), DEMO_MAZE);
    }

    #[test]
    fn test_demo_stage_after_solution() {
        let mut stage = Stage::build(DEMO_MAZE).expect("build failed");
        stage.run(DEMO_SOLUTION).expect("run failed");
        assert_eq!(
            stage.to_string(),
            "\
##########
#____#__a#
#_##_#_###
#____#__R#
#a#######~"
        );
    }

    #[test]
    fn test_simulation_stops_after_max_steps() {
        let stage = Stage::build(DEMO_MAZE).expect("build failed");
        let explorer = ScriptedExplorer::from_solution(DEMO_SOLUTION).expect("bad solution");
        let mut simulation = Simulation::new(stage, explorer, 3);
        simulation.run();

        assert_eq!(simulation.steps(), 3);
        assert_eq!(simulation.score(), 2);
        assert!(!simulation.environment().is_terminal());
    }

    #[test]
    fn test_explorer_runs_out_of_urges() {
        let mut explorer = ScriptedExplorer::from_solution("ns").expect("bad solution");
        let percept = ExplorerPercept {
            row: 0,
            col: 0,
            symbol: '_',
            energy: 0,
        };
        assert_eq!(explorer.act(&percept), Some(Urge::North));
        assert_eq!(explorer.remaining(), 1);
        assert_eq!(explorer.act(&percept), Some(Urge::South));
        assert_eq!(explorer.act(&percept), None);
    }

    #[test]
    fn test_percept_shows_starting_room() {
        let stage = Stage::build(DEMO_MAZE).expect("build failed");
        assert_eq!(
            stage.percept(),
            ExplorerPercept {
                row: 1,
                col: 1,
                symbol: '_',
                energy: 0,
            }
        );
    }
}
