use crate::search::{states::State, Heuristic, HeuristicValue, Task};

/// Returns the same value for every state. With a value of 1 this is `h_1`.
#[derive(Clone, Debug)]
pub struct ConstantHeuristic {
    value: HeuristicValue,
}

impl ConstantHeuristic {
    pub fn new(value: f64) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Default for ConstantHeuristic {
    fn default() -> Self {
        Self::new(1.)
    }
}

impl Heuristic for ConstantHeuristic {
    fn evaluate(&mut self, _state: &State, _task: &Task) -> HeuristicValue {
        self.value
    }
}
