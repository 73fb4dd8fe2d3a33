use std::fmt;
use std::sync::Arc;

use rand::Rng;
use statrs::distribution::ContinuousCDF;

use crate::error::NestError;
use crate::explore::{UnitState, WalkConfig};
use crate::likelihood::Likelihood;
use crate::object::Object;

pub type Prior = Box<dyn ContinuousCDF<f64, f64> + Send + Sync>;

/// Likelihood, per-dimension priors and the exploration policy shared by
/// every point of a run.
pub struct Model {
    likelihood: Arc<dyn Likelihood + Send + Sync>,
    prior: Vec<Prior>,
    walk: WalkConfig,
}

impl Model {
    /// One prior per coordinate the likelihood expects.
    pub fn new(
        likelihood: Arc<dyn Likelihood + Send + Sync>,
        prior: Vec<Prior>,
    ) -> Result<Self, NestError> {
        if let Some(expected) = likelihood.ndim() {
            if expected != prior.len() {
                return Err(NestError::DimensionMismatch {
                    expected,
                    found: prior.len(),
                });
            }
        }
        Ok(Self {
            likelihood,
            prior,
            walk: WalkConfig::default(),
        })
    }

    pub fn with_walk(mut self, walk: WalkConfig) -> Self {
        self.walk = walk;
        self
    }

    pub fn ndim(&self) -> usize {
        self.prior.len()
    }

    pub fn walk(&self) -> &WalkConfig {
        &self.walk
    }

    /// Map unit-cube coordinates to physical coordinates.
    pub fn rescale(&self, unit: &[f64]) -> Vec<f64> {
        unit.iter()
            .zip(self.prior.iter())
            .map(|(&u, prior)| prior.inverse_cdf(u))
            .collect()
    }

    pub fn evaluate(self: &Arc<Self>, unit: Vec<f64>) -> Result<Point, NestError> {
        if unit.len() != self.ndim() {
            return Err(NestError::DimensionMismatch {
                expected: self.ndim(),
                found: unit.len(),
            });
        }
        Ok(self.point_at(unit))
    }

    fn point_at(self: &Arc<Self>, unit: Vec<f64>) -> Point {
        let scaled = self.rescale(&unit);
        let ln_likelihood = self.likelihood.ln_likelihood(&scaled);
        Point {
            unit,
            scaled,
            ln_likelihood,
            model: Arc::clone(self),
        }
    }

    pub fn sample_prior<R: Rng + ?Sized>(self: &Arc<Self>, rng: &mut R) -> Point {
        let unit = (0..self.ndim()).map(|_| rng.gen::<f64>()).collect();
        self.point_at(unit)
    }

    pub fn population<R: Rng + ?Sized>(self: &Arc<Self>, nlive: usize, rng: &mut R) -> Vec<Point> {
        (0..nlive).map(|_| self.sample_prior(rng)).collect()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("ndim", &self.ndim())
            .field("walk", &self.walk)
            .finish_non_exhaustive()
    }
}

/// A point of a [`Model`]: unit-cube coordinates, their physical image and
/// the log-likelihood there.
#[derive(Clone)]
pub struct Point {
    unit: Vec<f64>,
    scaled: Vec<f64>,
    ln_likelihood: f64,
    model: Arc<Model>,
}

impl Point {
    pub fn unit(&self) -> &[f64] {
        &self.unit
    }

    pub fn ln_likelihood(&self) -> f64 {
        self.ln_likelihood
    }

    pub fn scaled(&self) -> &[f64] {
        &self.scaled
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("unit", &self.unit)
            .field("scaled", &self.scaled)
            .field("ln_likelihood", &self.ln_likelihood)
            .finish()
    }
}

impl UnitState for Point {
    fn unit(&self) -> &[f64] {
        &self.unit
    }

    fn ln_likelihood(&self) -> f64 {
        self.ln_likelihood
    }

    fn at(&self, unit: Vec<f64>) -> Self {
        self.model.point_at(unit)
    }
}

impl Object for Point {
    fn ln_likelihood(&self) -> f64 {
        self.ln_likelihood
    }

    fn explore<R: Rng + ?Sized>(&mut self, ln_likelihood_floor: f64, rng: &mut R) {
        let walk = *self.model.walk();
        walk.explore(self, ln_likelihood_floor, rng);
    }
}
