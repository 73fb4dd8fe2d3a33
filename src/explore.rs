use rand::Rng;

use crate::error::NestError;
use crate::propose::wrapped_uniform_step;

/// A state living in the unit hypercube that can be re-evaluated at new
/// coordinates.
pub trait UnitState: Sized {
    fn unit(&self) -> &[f64];

    fn ln_likelihood(&self) -> f64;

    /// The state at `unit`, with derived coordinates and likelihood recomputed.
    fn at(&self, unit: Vec<f64>) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkConfig {
    steps: usize,
    initial_step: f64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            initial_step: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkStats {
    pub accepted: usize,
    pub rejected: usize,
    /// Step size after the last adaptation.
    pub step: f64,
}

impl WalkStats {
    pub fn acceptance_rate(&self) -> f64 {
        self.accepted as f64 / (self.accepted + self.rejected).max(1) as f64
    }
}

impl WalkConfig {
    /// At least one trial, starting from a finite positive step.
    pub fn new(steps: usize, initial_step: f64) -> Result<Self, NestError> {
        if steps == 0 || !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(NestError::InvalidWalk {
                steps,
                initial_step,
            });
        }
        Ok(Self {
            steps,
            initial_step,
        })
    }

    /// Number of trial moves per exploration.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Step size the walk starts from, in unit-cube coordinates.
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Random walk of `self.steps` trials under the hard constraint
    /// `ln_likelihood > floor`. A trial is taken iff it satisfies the
    /// constraint, otherwise `state` is left as it was.
    pub fn explore<S, R>(&self, state: &mut S, floor: f64, rng: &mut R) -> WalkStats
    where
        S: UnitState,
        R: Rng + ?Sized,
    {
        let mut stats = WalkStats {
            accepted: 0,
            rejected: 0,
            step: self.initial_step,
        };
        for _ in 0..self.steps {
            let trial = state.at(wrapped_uniform_step(state.unit(), stats.step, rng));
            if trial.ln_likelihood() > floor {
                *state = trial;
                stats.accepted += 1;
            } else {
                stats.rejected += 1;
            }
            stats.step = adapt_step(stats.step, stats.accepted, stats.rejected);
        }
        stats
    }
}

/// Push the acceptance ratio toward one half.
fn adapt_step(step: f64, accepted: usize, rejected: usize) -> f64 {
    if accepted > rejected {
        step * (1.0 / accepted as f64).exp()
    } else if rejected > accepted {
        step / (1.0 / rejected as f64).exp()
    } else {
        step
    }
}
