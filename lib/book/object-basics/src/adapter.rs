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

//! Adapting a type you own to an interface a library expects, without changing either.

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// Shared record of calls, in the order they happened. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn record(&self, line: impl Into<String>) {
        self.lines.borrow_mut().push(line.into());
    }

    /// Recorded lines so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Compare against an expected multi-line string. Indentation and blank lines are ignored.
    pub fn matches(&self, expected: &str) -> bool {
        let expected: Vec<&str> = expected
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let lines = self.lines.borrow();
        lines.len() == expected.len() && lines.iter().zip(expected).all(|(a, b)| a == b)
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.borrow().join("\n"))
    }
}

/// Interface defined by a library we can't change.
pub trait LibType {
    /// First library operation.
    fn f1(&self);

    /// Second library operation.
    fn f2(&self);
}

/// Library code calling f1 then f2.
pub fn utility1(lt: &impl LibType) {
    lt.f1();
    lt.f2();
}

/// Library code calling f2 then f1.
pub fn utility2(lt: &impl LibType) {
    lt.f2();
    lt.f1();
}

/// Our own type, which knows nothing about `LibType`.
#[derive(Debug, Clone)]
pub struct MyClass {
    trace: Trace,
}

impl MyClass {
    /// Create an instance recording its calls into `trace`.
    pub fn new(trace: Trace) -> Self {
        Self { trace }
    }

    /// Records "g()".
    pub fn g(&self) {
        self.trace.record("g()");
    }

    /// Records "h()".
    pub fn h(&self) {
        self.trace.record("h()");
    }
}

/// Our own code calling g then h.
pub fn use_my_class(mc: &MyClass) {
    mc.g();
    mc.h();
}

/// `MyClass` made usable as a `LibType`. Derefs to `MyClass`, so it still works everywhere a
/// `MyClass` does.
#[derive(Debug, Clone)]
pub struct MyClassAdaptedForLib {
    inner: MyClass,
}

impl MyClassAdaptedForLib {
    /// Adapt `inner`.
    pub fn new(inner: MyClass) -> Self {
        Self { inner }
    }
}

impl Deref for MyClassAdaptedForLib {
    type Target = MyClass;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl LibType for MyClassAdaptedForLib {
    fn f1(&self) {
        self.h();
    }

    fn f2(&self) {
        self.g();
    }
}
