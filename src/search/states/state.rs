//! This module contains the definition of a search state: a boolean vector
//! parallel to a scenario's [`super::Vocabulary`]. Position `i` is true iff
//! the `i`-th vocabulary fluent currently holds.

use serde::Serialize;
use std::fmt::{self, Debug, Display, Formatter};

#[derive(PartialEq, Eq, Hash, Clone, Serialize)]
pub struct State {
    values: Vec<bool>,
}

impl State {
    pub fn new(values: Vec<bool>) -> Self {
        Self { values }
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> bool {
        self.values[index]
    }

    #[inline(always)]
    pub fn set(&mut self, index: usize, value: bool) {
        self.values[index] = value;
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn count_true(&self) -> usize {
        self.values.iter().filter(|&&value| value).count()
    }
}

impl Display for State {
    /// Renders as a `T`/`F` string, e.g. `TTFFFF`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &value in &self.values {
            f.write_str(if value { "T" } else { "F" })?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "State({})", self)
    }
}
