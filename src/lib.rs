pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::environment::{AtmosphericConditions, Environment};
pub use control::falling_body::{FallingBody, TickSample};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::trajectory::Trajectory;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::plot::{Renderer, TextRenderer};
pub use telemetry_system::telemetry::{Series, Telemetry};
