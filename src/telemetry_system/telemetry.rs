use crate::control::falling_body::TickSample;
use crate::errors::SimulationError;

use super::plot::Renderer;

/// One plottable series: ordered x and y values plus the labels to draw them with.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(title: &'static str, x_label: &'static str, y_label: &'static str) -> Self {
        Series {
            title,
            x_label,
            y_label,
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn render(&self, renderer: &mut impl Renderer) -> Result<(), SimulationError> {
        renderer.render(&self.x, &self.y, self.title, self.x_label, self.y_label)
    }
}

pub struct Telemetry {
    pub height: Series,
    pub velocity: Series,
    pub air_resistance: Series,
    pub final_force: Series,
    pub air_density: Series,
    ticks: usize,
    max_velocity: f64,
    max_air_resistance: f64,
    last_sample: Option<TickSample>,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            height: Series::new("Height", "Time (s)", "Height (m)"),
            velocity: Series::new("Velocity", "Time (s)", "Velocity (m/s)"),
            air_resistance: Series::new("Air Resistance Force", "Time (s)", "Force (N)"),
            final_force: Series::new("Final Force", "Time (s)", "Force (N)"),
            air_density: Series::new("Air Density", "Density (kg/m^3)", "Height (m)"),
            ticks: 0,
            max_velocity: 0.0,
            max_air_resistance: 0.0,
            last_sample: None,
        }
    }

    /// Console line for one tick: `[<time>s] <height>m -> <velocity>m/s`.
    pub fn format_log_line(sample: &TickSample) -> String {
        format!(
            "[{}s] {}m -> {}m/s",
            sample.elapsed_time, sample.height, sample.velocity
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn collect_data(&mut self, sample: &TickSample) {
        self.height.push(sample.elapsed_time, sample.height);
        self.velocity.push(sample.elapsed_time, sample.velocity);
        self.air_resistance
            .push(sample.elapsed_time, sample.air_resistance_force);
        self.final_force.push(sample.elapsed_time, sample.net_force);
        // Density on x, height on y
        self.air_density.push(sample.air_density, sample.height);

        self.ticks += 1;
        if sample.velocity > self.max_velocity {
            self.max_velocity = sample.velocity;
        }
        if sample.air_resistance_force > self.max_air_resistance {
            self.max_air_resistance = sample.air_resistance_force;
        }
        self.last_sample = Some(*sample);
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_air_resistance(&self) -> f64 {
        self.max_air_resistance
    }

    pub fn last_sample(&self) -> Option<&TickSample> {
        self.last_sample.as_ref()
    }

    pub fn series(&self) -> [&Series; 5] {
        [
            &self.height,
            &self.velocity,
            &self.air_resistance,
            &self.final_force,
            &self.air_density,
        ]
    }

    pub fn render_all(&self, renderer: &mut impl Renderer) -> Result<(), SimulationError> {
        for series in self.series() {
            series.render(renderer)?;
        }
        Ok(())
    }

    pub fn summary(&self) -> String {
        let mut summary = String::from("--- Simulation Summary ---\n");
        summary.push_str(&format!("Ticks: {}\n", self.ticks));
        if let Some(last) = &self.last_sample {
            summary.push_str(&format!(
                "Fall Time: {}\n",
                Self::format_time(last.elapsed_time)
            ));
            summary.push_str(&format!(
                "Final Height: {}\n",
                Self::format_altitude(last.height)
            ));
            summary.push_str(&format!("Final Velocity: {:.2} m/s\n", last.velocity));
        }
        summary.push_str(&format!("Max Velocity: {:.2} m/s\n", self.max_velocity));
        summary.push_str(&format!(
            "Max Air Resistance: {:.2} N\n",
            self.max_air_resistance
        ));
        summary
    }

    pub fn display_summary(&self) {
        println!("\n{}", self.summary());
    }
}
