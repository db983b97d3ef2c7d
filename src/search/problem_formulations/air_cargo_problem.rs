use crate::search::{
    problem_formulations::SearchProblem,
    states::State,
    successor_generators::{GroundedSuccessorGenerator, SuccessorGenerator},
    Action, FluentState, HeuristicBank, HeuristicName, HeuristicValue, Result, Task,
};
use std::rc::Rc;

/// An air cargo scenario ready to be searched: its task, the transition model
/// over the task's ground actions and the heuristics with their caches.
#[derive(Debug)]
pub struct AirCargoProblem {
    task: Rc<Task>,
    generator: Box<dyn SuccessorGenerator>,
    heuristics: HeuristicBank,
}

impl AirCargoProblem {
    pub fn new(task: Task) -> Self {
        Self::with_heuristics(task, HeuristicBank::new())
    }

    pub fn with_heuristics(task: Task, heuristics: HeuristicBank) -> Self {
        let task = Rc::new(task);
        let generator = Box::new(GroundedSuccessorGenerator::new(task.clone()));
        Self {
            task,
            generator,
            heuristics,
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn decode(&self, state: &State) -> FluentState {
        self.task.decode(state)
    }

    pub fn h_1(&mut self, state: &State) -> HeuristicValue {
        self.evaluate(HeuristicName::H1, state)
    }

    pub fn h_ignore_preconditions(&mut self, state: &State) -> HeuristicValue {
        self.evaluate(HeuristicName::IgnorePreconditions, state)
    }

    pub fn h_pg_levelsum(&mut self, state: &State) -> HeuristicValue {
        self.evaluate(HeuristicName::PgLevelsum, state)
    }

    pub fn log_heuristic_statistics(&self) {
        self.heuristics.log_statistics();
    }
}

impl SearchProblem for AirCargoProblem {
    fn name(&self) -> &str {
        self.task.name()
    }

    fn initial_state(&self) -> &State {
        &self.task.initial_state
    }

    fn actions(&self, state: &State) -> Vec<Rc<Action>> {
        self.generator.get_applicable_actions(state)
    }

    fn result(&self, state: &State, action: &Action) -> Result<State> {
        self.generator.generate_successor(state, action)
    }

    fn goal_test(&self, state: &State) -> bool {
        self.task.goal.is_satisfied(state, &self.task.vocabulary)
    }

    fn evaluate(&mut self, heuristic: HeuristicName, state: &State) -> HeuristicValue {
        self.heuristics.evaluate(heuristic, state, &self.task)
    }
}
