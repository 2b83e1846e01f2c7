mod coordinator;
mod simulation;

pub use coordinator::{ClientConfig, CoordinatorConfig};
pub use simulation::SimulationSettings;
