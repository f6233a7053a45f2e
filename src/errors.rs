use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Initialization error: {0}")]
    InitializationError(String),

    #[error("Altitude {height} m is outside the troposphere model domain")]
    AltitudeOutOfDomain { height: f64 },

    #[error("Render error: {0}")]
    RenderError(String),
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::RenderError(err.to_string())
    }
}
