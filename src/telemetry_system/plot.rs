use std::io::Write;

use crate::errors::SimulationError;

/// Receives finished series for presentation.
pub trait Renderer {
    fn render(
        &mut self,
        x: &[f64],
        y: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> Result<(), SimulationError>;
}

/// Describes each series as a short block of text: labels, point count and ranges.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn range(values: &[f64]) -> (f64, f64) {
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(*v), max.max(*v))
            })
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(
        &mut self,
        x: &[f64],
        y: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> Result<(), SimulationError> {
        if x.len() != y.len() {
            return Err(SimulationError::RenderError(format!(
                "series '{}' has {} x values but {} y values",
                title,
                x.len(),
                y.len()
            )));
        }

        writeln!(self.out, "--- {} ---", title)?;
        writeln!(self.out, "Points: {}", x.len())?;
        if !x.is_empty() {
            let (x_min, x_max) = Self::range(x);
            let (y_min, y_max) = Self::range(y);
            writeln!(self.out, "{}: {:.4} .. {:.4}", x_label, x_min, x_max)?;
            writeln!(self.out, "{}: {:.4} .. {:.4}", y_label, y_min, y_max)?;
        }
        Ok(())
    }
}
