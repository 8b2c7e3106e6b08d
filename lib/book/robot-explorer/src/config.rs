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

use serde::Deserialize;

use crate::ExplorerError;

/// Settings for running an explorer through a maze.
///
/// Missing keys take their default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    /// Upper bound on the number of moves, in case the solution never reaches the end.
    pub max_steps: usize,

    /// Print the stage after every move.
    pub show_steps: bool,
}

impl ExplorerConfig {
    fn new(max_steps: usize, show_steps: bool) -> Self {
        Self {
            max_steps,
            show_steps,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ExplorerError> {
        toml::from_str(s).map_err(|e| ExplorerError::InvalidConfig(e.to_string()))
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::new(1000, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(
            ExplorerConfig::from_toml_str(""),
            Ok(ExplorerConfig::default())
        );
    }

    #[test]
    fn test_partial_config() {
        let config = ExplorerConfig::from_toml_str("show_steps = true").expect("parse failed");
        assert!(config.show_steps);
        assert_eq!(config.max_steps, 1000);
    }

    #[test]
    fn test_full_config() {
        let config = ExplorerConfig::from_toml_str("max_steps = 20\nshow_steps = false")
            .expect("parse failed");
        assert_eq!(config, ExplorerConfig::new(20, false));
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            ExplorerConfig::from_toml_str("max_steps = \"lots\""),
            Err(ExplorerError::InvalidConfig(_))
        ));
        assert!(matches!(
            ExplorerConfig::from_toml_str("speed = 3"),
            Err(ExplorerError::InvalidConfig(_))
        ));
    }
}
