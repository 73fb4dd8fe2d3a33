use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::NestError;
use crate::logspace::{ln_outer_width, plus};
use crate::object::Object;

/// One iteration's output: the eliminated point and the running estimates
/// after folding it in.
#[derive(Debug, Clone)]
pub struct Sample<O> {
    pub iteration: usize,
    /// Information H, in nats.
    pub information: f64,
    pub ln_evidence: f64,
    pub ln_weight: f64,
    /// Log-width of the prior-mass shell assigned to this point.
    pub ln_width: f64,
    /// Slot of the live population that was eliminated.
    pub worst: usize,
    /// Survivor cloned into `worst`, `None` with a single live point.
    pub copied_from: Option<usize>,
    /// Posterior sample, detached from the live population.
    pub point: O,
}

/// Nested sampler over an owned live population.
///
/// Every call to `next` runs one iteration and never returns `None`; the
/// caller stops by no longer advancing it.
pub struct NestedSampler<O, R = ChaCha8Rng> {
    live_points: Vec<O>,
    rng: R,
    information: f64,
    ln_evidence: f64,
    ln_width: f64,
    iteration: usize,
}

impl<O: Object> NestedSampler<O, ChaCha8Rng> {
    pub fn seeded(live_points: Vec<O>, seed: u64) -> Result<Self, NestError> {
        Self::new(live_points, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<O: Object, R: Rng> NestedSampler<O, R> {
    pub fn new(live_points: Vec<O>, rng: R) -> Result<Self, NestError> {
        if live_points.is_empty() {
            return Err(NestError::EmptyPopulation);
        }
        let ln_width = ln_outer_width(live_points.len());
        Ok(Self {
            live_points,
            rng,
            information: 0.0,
            ln_evidence: f64::NEG_INFINITY,
            ln_width,
            iteration: 0,
        })
    }

    pub fn live_points(&self) -> &[O] {
        &self.live_points
    }

    pub fn into_live_points(self) -> Vec<O> {
        self.live_points
    }

    pub fn information(&self) -> f64 {
        self.information
    }

    pub fn ln_evidence(&self) -> f64 {
        self.ln_evidence
    }

    /// Log-width the next eliminated point will be assigned.
    pub fn ln_width(&self) -> f64 {
        self.ln_width
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Evidence including the live points, each weighted by an equal share
    /// of the remaining prior mass `exp(-iteration / nlive)`.
    pub fn ln_evidence_with_live(&self) -> f64 {
        let nlive = self.live_points.len() as f64;
        let ln_share = -(self.iteration as f64) / nlive - nlive.ln();
        self.live_points
            .iter()
            .fold(self.ln_evidence, |acc, point| {
                plus(acc, ln_share + point.ln_likelihood())
            })
    }

    /// Strictly lowest likelihood; the first of equal values wins.
    fn get_worst(&self) -> usize {
        let mut worst = 0;
        for (idx, point) in self.live_points.iter().enumerate().skip(1) {
            if point.ln_likelihood() < self.live_points[worst].ln_likelihood() {
                worst = idx;
            }
        }
        worst
    }

    fn update_evidence(&mut self, ln_weight: f64, ln_likelihood: f64) {
        let ln_evidence = plus(self.ln_evidence, ln_weight);
        if ln_evidence == f64::NEG_INFINITY {
            return;
        }
        // terms with zero weight drop out, even against an infinite factor
        let new_term = if ln_weight == f64::NEG_INFINITY {
            0.0
        } else {
            (ln_weight - ln_evidence).exp() * ln_likelihood
        };
        let old_term = if self.ln_evidence == f64::NEG_INFINITY {
            0.0
        } else {
            (self.ln_evidence - ln_evidence).exp() * (self.information + self.ln_evidence)
        };
        self.information = new_term + old_term - ln_evidence;
        self.ln_evidence = ln_evidence;
    }

    /// Index of a uniformly drawn survivor other than `worst`.
    fn pick_survivor(&mut self, worst: usize) -> usize {
        let nlive = self.live_points.len();
        loop {
            let idx = self.rng.gen_range(0..nlive);
            if idx != worst {
                return idx;
            }
        }
    }

    fn iterate(&mut self) -> Sample<O> {
        let worst = self.get_worst();
        let ln_likelihood = self.live_points[worst].ln_likelihood();
        let ln_width = self.ln_width;
        let ln_weight = ln_width + ln_likelihood;
        self.update_evidence(ln_weight, ln_likelihood);

        let point = self.live_points[worst].clone();

        let floor = ln_likelihood;
        let copied_from = if self.live_points.len() > 1 {
            let survivor = self.pick_survivor(worst);
            self.live_points[worst] = self.live_points[survivor].clone();
            Some(survivor)
        } else {
            None
        };
        self.live_points[worst].explore(floor, &mut self.rng);

        self.ln_width -= 1.0 / self.live_points.len() as f64;

        debug!(
            iteration = self.iteration,
            ln_evidence = self.ln_evidence,
            information = self.information,
            floor,
            replacement = self.live_points[worst].ln_likelihood(),
            "eliminated live point {worst}"
        );

        let sample = Sample {
            iteration: self.iteration,
            information: self.information,
            ln_evidence: self.ln_evidence,
            ln_weight,
            ln_width,
            worst,
            copied_from,
            point,
        };
        self.iteration += 1;
        sample
    }
}

impl<O: Object, R: Rng> Iterator for NestedSampler<O, R> {
    type Item = Sample<O>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.iterate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
