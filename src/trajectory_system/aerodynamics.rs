use crate::constants::{BODY_CROSS_SECTIONAL_AREA, BODY_DRAG_COEFFICIENT};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub cross_sectional_area: f64,
}

impl Default for Aerodynamics {
    fn default() -> Self {
        Aerodynamics {
            drag_coefficient: BODY_DRAG_COEFFICIENT,
            cross_sectional_area: BODY_CROSS_SECTIONAL_AREA,
        }
    }
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, cross_sectional_area: f64) -> Result<Self, SimulationError> {
        if !drag_coefficient.is_finite() || drag_coefficient < 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "drag coefficient must be finite and non-negative, got {}",
                drag_coefficient
            )));
        }
        if !cross_sectional_area.is_finite() || cross_sectional_area < 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "cross-sectional area must be finite and non-negative, got {}",
                cross_sectional_area
            )));
        }

        Ok(Aerodynamics {
            drag_coefficient,
            cross_sectional_area,
        })
    }

    /// Drag magnitude `0.5 * rho * Cd * A * v^2`. Independent of the sign of `velocity`.
    pub fn calculate_drag(&self, velocity: f64, air_density: f64) -> f64 {
        0.5 * air_density * self.drag_coefficient * self.cross_sectional_area * velocity.powi(2)
    }

    /// Speed at which drag balances `weight`. Infinite for a body with no drag.
    pub fn calculate_terminal_velocity(&self, weight: f64, air_density: f64) -> f64 {
        let drag_factor = air_density * self.drag_coefficient * self.cross_sectional_area;
        if drag_factor > 0.0 {
            (2.0 * weight / drag_factor).sqrt()
        } else {
            f64::INFINITY
        }
    }
}
