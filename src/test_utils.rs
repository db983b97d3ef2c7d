use crate::search::{Fluent, FluentState, Name, Objects, Result, Task};

pub use crate::search::scenarios::air_cargo_p1;

pub const P1_SCENARIO_TOML: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/air-cargo/p1.toml"
));

pub const P1_PLAN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/air-cargo/p1.plan"
));

fn single_cargo_objects() -> Result<Objects> {
    Objects::new(
        vec![Name::new("C1")],
        vec![Name::new("P1")],
        vec![Name::new("SFO"), Name::new("JFK")],
    )
}

/// The cargo already sits at its destination.
pub fn already_solved() -> Result<Task> {
    let objects = single_cargo_objects()?;
    let initial = FluentState::closed_world(
        &objects.cargos,
        &objects.planes,
        &objects.airports,
        vec![Fluent::at("C1", "JFK"), Fluent::at("P1", "SFO")],
    );
    Task::new("already solved", objects, initial, vec![Fluent::at("C1", "JFK")])
}

/// The only plane is at no airport, so the cargo can never be moved.
pub fn stranded_cargo() -> Result<Task> {
    let objects = single_cargo_objects()?;
    let initial = FluentState::closed_world(
        &objects.cargos,
        &objects.planes,
        &objects.airports,
        vec![Fluent::at("C1", "SFO")],
    );
    Task::new("stranded cargo", objects, initial, vec![Fluent::at("C1", "JFK")])
}
