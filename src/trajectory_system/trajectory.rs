use crate::control::falling_body::{FallingBody, TickSample};
use crate::errors::SimulationError;

/// Lazily ticks a [`FallingBody`] until it reaches the ground, yielding the body's
/// state after every tick.
///
/// The tick that takes the height to zero or below is still yielded; the next call
/// returns `None`. After an error the iterator is exhausted.
#[derive(Debug)]
pub struct Trajectory<'a> {
    body: FallingBody<'a>,
    tick_limit: Option<usize>,
    ticks: usize,
    failed: bool,
}

impl<'a> Trajectory<'a> {
    pub fn new(body: FallingBody<'a>) -> Self {
        Trajectory {
            body,
            tick_limit: None,
            ticks: 0,
            failed: false,
        }
    }

    pub fn with_tick_limit(mut self, tick_limit: usize) -> Self {
        self.tick_limit = Some(tick_limit);
        self
    }

    pub fn body(&self) -> &FallingBody<'a> {
        &self.body
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn into_body(self) -> FallingBody<'a> {
        self.body
    }

    fn step(&mut self) -> Result<TickSample, SimulationError> {
        self.body.tick()?;
        self.ticks += 1;
        self.body.sample()
    }
}

impl Iterator for Trajectory<'_> {
    type Item = Result<TickSample, SimulationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.body.has_landed() {
            return None;
        }
        if matches!(self.tick_limit, Some(limit) if self.ticks >= limit) {
            return None;
        }

        let result = self.step();
        self.failed = result.is_err();
        Some(result)
    }
}

impl std::iter::FusedIterator for Trajectory<'_> {}
