// Physical Constants
pub const GRAVITY: f64 = 9.80665; // m/s² (standard gravity)
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.31446; // J/(mol·K)
pub const MOLAR_MASS_AIR: f64 = 0.0289652; // kg/mol

// Environmental Constants
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa (pascals)
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15; // K
pub const TEMPERATURE_LAPSE_RATE: f64 = 0.0065; // K per meter
// Temperature reaches absolute zero here (~44331 m)
pub const LAPSE_RATE_SINGULARITY_HEIGHT: f64 = SEA_LEVEL_TEMPERATURE / TEMPERATURE_LAPSE_RATE; // m

// Simulation Parameters
pub const TIME_STEP: f64 = 0.01; // s
pub const MAX_SIMULATION_TICKS: usize = 10_000_000;

// Falling Body Defaults
pub const INITIAL_HEIGHT: f64 = 36529.0; // m
pub const BODY_MASS: f64 = 90.0; // kg
pub const BODY_DRAG_COEFFICIENT: f64 = 1.0;
pub const BODY_CROSS_SECTIONAL_AREA: f64 = 1.0; // m²

// Aerodynamic Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
