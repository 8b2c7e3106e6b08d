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

// Robot explorer
//
// A robot wanders a maze of rooms. Every room holds exactly one actor, and the actor in the room the
// robot tries to enter decides where the robot actually ends up.

use num_traits::Zero;
use tracing::info;

pub mod actor;
pub mod config;
pub mod explorer;
pub mod robot;
pub mod room;
pub mod stage;
pub mod urge;

pub use actor::{interact, Actor, ActorKind, Parsed, Teleport};
pub use config::ExplorerConfig;
pub use explorer::{ExplorerPercept, ScriptedExplorer};
pub use robot::Robot;
pub use room::{Doors, Room, RoomKey, Rooms};
pub use stage::Stage;
pub use urge::{parse_solution, Urge};

pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Errors from building a stage out of maze text, or from reading a solution or config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExplorerError {
    /// No actor claims this character.
    #[error("unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: i32, col: i32 },

    /// The maze has no rooms at all.
    #[error("maze is empty")]
    EmptyMaze,

    #[error("maze has no robot")]
    MissingRobot,

    #[error("maze has {count} robots, expected exactly one")]
    MultipleRobots { count: usize },

    /// A teleport letter that appears only once.
    #[error("teleport {0:?} has no partner")]
    UnpairedTeleport(char),

    /// A teleport letter that appears more than twice.
    #[error("teleport {symbol:?} appears {count} times, expected exactly two")]
    OverfullTeleport { symbol: char, count: usize },

    #[error("unknown urge {0:?}, expected one of n, s, e, w")]
    UnknownUrge(char),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// An Agent acts in a perceive-act cycle. For a given Percept, the Agent returns the next Action,
/// or None once it has nothing left to do.
///
/// Notice that the Agent is not aware of an Environment, it's only interface is the Percept coming
/// in then the Action going out.
pub trait Agent {
    type Action;
    type Percept;

    fn act(&mut self, percept: &Self::Percept) -> Option<Self::Action>;
}

/// An Environment runs a single Agent in a perceive-act cycle.
///
/// Notice that the Environment is not aware of an Agent.
pub trait Environment {
    type Action;
    type Percept;
    type Score: num_traits::NumAssign + Copy;

    fn percept(&self) -> Self::Percept;
    fn execute_action(&mut self, action: &Self::Action);

    /// Returns the score of the Environment at the current state. This is not cumulative.
    fn score(&self) -> Self::Score;

    /// Once terminal, no further actions are executed.
    fn is_terminal(&self) -> bool;
}

/// A Simulation runs a single Agent against an Environment until the Environment is terminal, the
/// Agent runs out of actions, or `max_steps` actions have been executed.
///
/// The Agent's generic Action and Percept come from the Environment. The Agent still does not need
/// to know that the Environment exists.
pub struct Simulation<_Environment, _Agent>
where
    _Environment: Environment,
    _Agent: Agent<Action = _Environment::Action, Percept = _Environment::Percept>,
{
    environment: _Environment,
    agent: _Agent,
    max_steps: usize,
    steps: usize,
    score_gained: _Environment::Score,
}

impl<_Environment, _Agent> Simulation<_Environment, _Agent>
where
    _Environment: Environment,
    _Agent: Agent<Action = _Environment::Action, Percept = _Environment::Percept>,
{
    pub fn new(environment: _Environment, agent: _Agent, max_steps: usize) -> Self {
        Self {
            environment,
            agent,
            max_steps,
            steps: 0,
            score_gained: _Environment::Score::zero(),
        }
    }

    pub fn run(&mut self) {
        self.run_with(|_, _| {});
    }

    /// Like `run`, calling `on_step` with the Environment and the Action just executed after
    /// every step.
    pub fn run_with<F>(&mut self, mut on_step: F)
    where
        F: FnMut(&_Environment, &_Environment::Action),
    {
        let starting_score = self.environment.score();
        while self.steps < self.max_steps && !self.environment.is_terminal() {
            let percept = self.environment.percept();
            let Some(action) = self.agent.act(&percept) else {
                break;
            };
            self.environment.execute_action(&action);
            self.steps += 1;
            on_step(&self.environment, &action);
        }
        let mut gained = self.environment.score();
        gained -= starting_score;
        self.score_gained = gained;
        info!(
            steps = self.steps,
            terminal = self.environment.is_terminal(),
            "simulation finished"
        );
    }

    /// Score of the Environment as it is now.
    pub fn score(&self) -> <_Environment as Environment>::Score {
        self.environment.score()
    }

    /// How much the score grew during the last `run`.
    pub fn score_gained(&self) -> <_Environment as Environment>::Score {
        self.score_gained
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn environment(&self) -> &_Environment {
        &self.environment
    }
}
