use crate::constants::{
    GRAVITY, LAPSE_RATE_SINGULARITY_HEIGHT, MOLAR_MASS_AIR, SEA_LEVEL_PRESSURE,
    SEA_LEVEL_TEMPERATURE, TEMPERATURE_LAPSE_RATE, TIME_STEP, UNIVERSAL_GAS_CONSTANT,
};
use crate::errors::SimulationError;

/// Temperature, pressure and density of the air at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericConditions {
    pub temperature: f64,
    pub pressure: f64,
    pub air_density: f64,
}

/// Gravity and the fixed simulation timestep shared by every falling body.
///
/// The air model is the troposphere barometric formula with a constant
/// temperature lapse rate. It is only defined below the altitude where the
/// linear temperature profile reaches absolute zero; queries at or above
/// that altitude return [`SimulationError::AltitudeOutOfDomain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    gravity: f64,
    tick_interval: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            gravity: GRAVITY,
            tick_interval: TIME_STEP,
        }
    }
}

impl Environment {
    pub fn new(gravity: f64, tick_interval: f64) -> Result<Self, SimulationError> {
        if !gravity.is_finite() || gravity <= 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "gravity must be a positive finite value, got {}",
                gravity
            )));
        }
        if !tick_interval.is_finite() || tick_interval <= 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "tick interval must be a positive finite value, got {}",
                tick_interval
            )));
        }

        Ok(Environment {
            gravity,
            tick_interval,
        })
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn tick_interval(&self) -> f64 {
        self.tick_interval
    }

    pub fn is_in_atmosphere_model(&self, height: f64) -> bool {
        height < LAPSE_RATE_SINGULARITY_HEIGHT
    }

    pub fn temperature_at(&self, height: f64) -> Result<f64, SimulationError> {
        self.check_domain(height)?;
        Ok(SEA_LEVEL_TEMPERATURE - TEMPERATURE_LAPSE_RATE * height)
    }

    pub fn pressure_at(&self, height: f64) -> Result<f64, SimulationError> {
        self.check_domain(height)?;
        let exponent = (self.gravity * MOLAR_MASS_AIR)
            / (TEMPERATURE_LAPSE_RATE * UNIVERSAL_GAS_CONSTANT);
        Ok(SEA_LEVEL_PRESSURE
            * (1.0 - (TEMPERATURE_LAPSE_RATE * height) / SEA_LEVEL_TEMPERATURE).powf(exponent))
    }

    pub fn air_density(&self, height: f64) -> Result<f64, SimulationError> {
        Ok(self.conditions_at(height)?.air_density)
    }

    pub fn conditions_at(&self, height: f64) -> Result<AtmosphericConditions, SimulationError> {
        let temperature = self.temperature_at(height)?;
        let pressure = self.pressure_at(height)?;
        let air_density =
            (pressure * MOLAR_MASS_AIR) / (UNIVERSAL_GAS_CONSTANT * temperature);

        Ok(AtmosphericConditions {
            temperature,
            pressure,
            air_density,
        })
    }

    fn check_domain(&self, height: f64) -> Result<(), SimulationError> {
        // Also rejects NaN
        if self.is_in_atmosphere_model(height) {
            Ok(())
        } else {
            Err(SimulationError::AltitudeOutOfDomain { height })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AIR_DENSITY_SEA_LEVEL;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_sea_level_conditions() {
        let environment = Environment::default();

        let conditions = environment.conditions_at(0.0).unwrap();

        assert_abs_diff_eq!(conditions.temperature, 288.15, epsilon = 1e-12);
        assert_abs_diff_eq!(conditions.pressure, 101_325.0, epsilon = 1e-9);
        assert_relative_eq!(
            conditions.air_density,
            AIR_DENSITY_SEA_LEVEL,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_tropopause_density() {
        let environment = Environment::default();

        let density = environment.air_density(11_000.0).unwrap();

        assert_abs_diff_eq!(density, 0.3639, epsilon = 0.001);
    }

    #[test]
    fn test_temperature_follows_lapse_rate() {
        let environment = Environment::default();

        assert_relative_eq!(
            environment.temperature_at(1_000.0).unwrap(),
            281.65,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            environment.temperature_at(-1_000.0).unwrap(),
            294.65,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_below_sea_level_is_denser() {
        let environment = Environment::default();

        let below = environment.air_density(-400.0).unwrap();
        let sea_level = environment.air_density(0.0).unwrap();

        assert!(below > sea_level);
    }

    #[test]
    fn test_density_positive_below_singularity() {
        let environment = Environment::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let height = rng.gen_range(-1_000.0..44_300.0);
            let density = environment.air_density(height).unwrap();
            assert!(
                density > 0.0,
                "density at {} m should be positive, got {}",
                height,
                density
            );
        }
    }

    #[test]
    fn test_density_decreases_with_height() {
        let environment = Environment::default();
        let mut rng = StdRng::seed_from_u64(42);

        let mut heights: Vec<f64> = (0..500).map(|_| rng.gen_range(0.0..44_300.0)).collect();
        heights.sort_by(|a, b| a.partial_cmp(b).unwrap());
        heights.dedup();

        let densities: Vec<f64> = heights
            .iter()
            .map(|h| environment.air_density(*h).unwrap())
            .collect();

        for pair in densities.windows(2) {
            assert!(pair[1] < pair[0], "density must fall as height rises");
        }
    }

    #[test]
    fn test_singularity_altitude_is_out_of_domain() {
        let environment = Environment::default();

        let result = environment.air_density(LAPSE_RATE_SINGULARITY_HEIGHT);

        assert_eq!(
            result,
            Err(SimulationError::AltitudeOutOfDomain {
                height: LAPSE_RATE_SINGULARITY_HEIGHT
            })
        );
    }

    #[test]
    fn test_above_singularity_is_out_of_domain() {
        let environment = Environment::default();

        assert!(matches!(
            environment.air_density(50_000.0),
            Err(SimulationError::AltitudeOutOfDomain { .. })
        ));
        assert!(environment.pressure_at(44_331.0).is_err());
        assert!(environment.air_density(f64::NAN).is_err());
    }

    #[test]
    fn test_density_scales_with_gravity_exponent() {
        let earth = Environment::default();
        let heavier = Environment::new(2.0 * GRAVITY, TIME_STEP).unwrap();

        // Same sea-level density, thinner air aloft under stronger gravity
        assert_relative_eq!(
            earth.air_density(0.0).unwrap(),
            heavier.air_density(0.0).unwrap(),
            epsilon = 1e-12
        );
        assert!(heavier.air_density(5_000.0).unwrap() < earth.air_density(5_000.0).unwrap());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(matches!(
            Environment::new(GRAVITY, 0.0),
            Err(SimulationError::InitializationError(_))
        ));
        assert!(Environment::new(GRAVITY, -0.01).is_err());
        assert!(Environment::new(GRAVITY, f64::NAN).is_err());
        assert!(Environment::new(0.0, TIME_STEP).is_err());
        assert!(Environment::new(f64::INFINITY, TIME_STEP).is_err());
    }

    #[test]
    fn test_default_values() {
        let environment = Environment::default();

        assert_eq!(environment.gravity(), 9.80665);
        assert_eq!(environment.tick_interval(), 0.01);
    }
}
