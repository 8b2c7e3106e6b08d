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

//! A cage holding a limited number of hamsters, which can be taken out by name.

/// Cage error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CageError {
    /// Nobody in the cage answers to this name.
    #[error("No hamster called {0}")]
    NoSuchHamster(String),
}

/// A hamster, known only by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hamster {
    /// Name of the hamster. Names need not be unique.
    pub name: String,
}

impl Hamster {
    /// Create a hamster.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Hamster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hamster('{}')", self.name)
    }
}

/// Cage with room for at most `max_count` hamsters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cage {
    max_count: usize,
    hamsters: Vec<Hamster>,
}

impl Cage {
    /// Create an empty cage.
    pub fn new(max_count: usize) -> Self {
        Self {
            max_count,
            hamsters: Vec::with_capacity(max_count),
        }
    }

    /// Put a hamster in the cage. Returns false, leaving the cage unchanged, if it is full.
    pub fn put(&mut self, hamster: Hamster) -> bool {
        if self.hamsters.len() >= self.max_count {
            return false;
        }
        self.hamsters.push(hamster);
        true
    }

    /// Take out the first hamster, in the order they were put in, with the given name.
    pub fn take_hamster_by_name(&mut self, name: &str) -> Result<Hamster, CageError> {
        let index = self
            .hamsters
            .iter()
            .position(|hamster| hamster.name == name)
            .ok_or_else(|| CageError::NoSuchHamster(name.to_string()))?;
        Ok(self.hamsters.remove(index))
    }

    /// Number of hamsters in the cage.
    pub fn len(&self) -> usize {
        self.hamsters.len()
    }

    /// Whether the cage has no hamsters.
    pub fn is_empty(&self) -> bool {
        self.hamsters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_hamster_by_name() {
        let mut cage = Cage::new(2);
        assert!(cage.put(Hamster::new("Alice")));
        let hamster = cage.take_hamster_by_name("Alice").expect("take failed");
        assert_eq!(hamster.to_string(), "Hamster('Alice')");
        assert!(cage.is_empty());
    }

    #[test]
    fn test_take_missing_hamster() {
        let mut cage = Cage::new(2);
        cage.put(Hamster::new("Alice"));
        let err = cage.take_hamster_by_name("Bob").unwrap_err();
        assert_eq!(err, CageError::NoSuchHamster("Bob".to_string()));
        assert_eq!(err.to_string(), "No hamster called Bob");
        assert_eq!(cage.len(), 1);
    }

    #[test]
    fn test_full_cage_rejects_hamster() {
        let mut cage = Cage::new(1);
        assert!(cage.put(Hamster::new("Alice")));
        assert!(!cage.put(Hamster::new("Bob")));
        assert_eq!(cage.len(), 1);
        assert!(cage.take_hamster_by_name("Bob").is_err());
    }

    #[test]
    fn test_same_name_taken_in_order() {
        let mut cage = Cage::new(3);
        cage.put(Hamster::new("Alice"));
        cage.put(Hamster::new("Bob"));
        cage.put(Hamster::new("Alice"));
        cage.take_hamster_by_name("Alice").expect("take failed");
        assert_eq!(cage.len(), 2);
        cage.take_hamster_by_name("Alice").expect("take failed");
        assert!(cage.take_hamster_by_name("Alice").is_err());
        assert_eq!(cage.len(), 1);
    }
}
