use crate::constants::{BODY_MASS, INITIAL_HEIGHT};
use crate::errors::SimulationError;
use crate::trajectory_system::aerodynamics::Aerodynamics;

use super::environment::Environment;

/// State of a falling body observed right after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSample {
    pub elapsed_time: f64,
    pub height: f64,
    pub velocity: f64,
    pub air_resistance_force: f64,
    pub net_force: f64,
    pub air_density: f64,
}

/// A body falling vertically through the atmosphere of one [`Environment`].
///
/// Velocity is positive when falling. State only changes through [`FallingBody::tick`];
/// stopping the fall once the body reaches the ground is up to the caller.
#[derive(Debug, Clone)]
pub struct FallingBody<'a> {
    environment: &'a Environment,
    aerodynamics: Aerodynamics,
    height: f64,
    mass: f64,
    velocity: f64,
    elapsed_time: f64,
}

impl<'a> FallingBody<'a> {
    pub fn new(
        environment: &'a Environment,
        height: f64,
        mass: f64,
        aerodynamics: Aerodynamics,
    ) -> Result<Self, SimulationError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "mass must be a positive finite value, got {}",
                mass
            )));
        }
        if !height.is_finite() {
            return Err(SimulationError::InitializationError(format!(
                "initial height must be finite, got {}",
                height
            )));
        }
        if !environment.is_in_atmosphere_model(height) {
            return Err(SimulationError::AltitudeOutOfDomain { height });
        }

        Ok(FallingBody {
            environment,
            aerodynamics,
            height,
            mass,
            velocity: 0.0,
            elapsed_time: 0.0,
        })
    }

    /// The reference jumper: 90 kg, unit drag coefficient and area, released at 36529 m.
    pub fn standard(environment: &'a Environment) -> Self {
        FallingBody {
            environment,
            aerodynamics: Aerodynamics::default(),
            height: INITIAL_HEIGHT,
            mass: BODY_MASS,
            velocity: 0.0,
            elapsed_time: 0.0,
        }
    }

    pub fn environment(&self) -> &'a Environment {
        self.environment
    }

    pub fn aerodynamics(&self) -> &Aerodynamics {
        &self.aerodynamics
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn has_landed(&self) -> bool {
        self.height <= 0.0
    }

    pub fn gravitational_force(&self) -> f64 {
        self.mass * self.environment.gravity()
    }

    pub fn air_density(&self) -> Result<f64, SimulationError> {
        self.environment.air_density(self.height)
    }

    pub fn air_resistance_force(&self) -> Result<f64, SimulationError> {
        let air_density = self.air_density()?;
        Ok(self.aerodynamics.calculate_drag(self.velocity, air_density))
    }

    pub fn net_force(&self) -> Result<f64, SimulationError> {
        Ok(self.gravitational_force() - self.air_resistance_force()?)
    }

    pub fn terminal_velocity(&self) -> Result<f64, SimulationError> {
        let air_density = self.air_density()?;
        Ok(self
            .aerodynamics
            .calculate_terminal_velocity(self.gravitational_force(), air_density))
    }

    /// Advances the body by one tick of semi-implicit Euler.
    ///
    /// The net force is taken from the pre-tick height and velocity, the velocity is
    /// updated from it, and the height is then moved with the new velocity. On error
    /// the body is left untouched.
    pub fn tick(&mut self) -> Result<(), SimulationError> {
        let net_force = self.net_force()?;
        let dt = self.environment.tick_interval();

        self.elapsed_time += dt;
        self.velocity += (net_force / self.mass) * dt;
        self.height -= self.velocity * dt;

        Ok(())
    }

    pub fn sample(&self) -> Result<TickSample, SimulationError> {
        let air_density = self.air_density()?;
        let air_resistance_force = self.aerodynamics.calculate_drag(self.velocity, air_density);

        Ok(TickSample {
            elapsed_time: self.elapsed_time,
            height: self.height,
            velocity: self.velocity,
            air_resistance_force,
            net_force: self.gravitational_force() - air_resistance_force,
            air_density,
        })
    }
}
