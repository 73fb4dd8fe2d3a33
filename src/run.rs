use std::f64::consts::LN_2;

use rand::Rng;
use rayon::prelude::*;
use tracing::info;

use crate::error::NestError;
use crate::nest::{NestedSampler, Sample};
use crate::object::Object;
use crate::{mean, variance};

/// Weighted first and second moments of a derived scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub std: f64,
}

/// A fixed number of samples pulled from a [`NestedSampler`].
#[derive(Debug, Clone)]
pub struct Run<O> {
    samples: Vec<Sample<O>>,
}

impl<O: Object> Run<O> {
    /// Advance `sampler` exactly `iterations` times.
    pub fn gather<R: Rng>(
        sampler: &mut NestedSampler<O, R>,
        iterations: usize,
    ) -> Result<Self, NestError> {
        if iterations == 0 {
            return Err(NestError::NoIterations);
        }
        let samples: Vec<Sample<O>> = sampler.by_ref().take(iterations).collect();
        let run = Self { samples };
        run.print_summary();
        Ok(run)
    }

    pub fn print_summary(&self) {
        info!("# iterates = {}", self.len());
        info!(
            "Evidence: ln(Z) = {:.3} +- {:.5}",
            self.ln_evidence(),
            self.ln_evidence_error()
        );
        info!(
            "Information: H = {:.5} nats = {:.5} bits",
            self.information(),
            self.information() / LN_2
        );
    }
}

impl<O> Run<O> {
    pub fn samples(&self) -> &[Sample<O>] {
        &self.samples
    }

    pub fn points(&self) -> impl Iterator<Item = &O> {
        self.samples.iter().map(|sample| &sample.point)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn last(&self) -> &Sample<O> {
        // gather never builds an empty run
        &self.samples[self.samples.len() - 1]
    }

    pub fn ln_evidence(&self) -> f64 {
        self.last().ln_evidence
    }

    pub fn information(&self) -> f64 {
        self.last().information
    }

    /// Standard error of ln Z, `sqrt(H / n)`.
    pub fn ln_evidence_error(&self) -> f64 {
        (self.information() / self.len() as f64).sqrt()
    }

    /// Posterior weight of each sample, normalised by the final evidence.
    pub fn weights(&self) -> Vec<f64> {
        let ln_evidence = self.ln_evidence();
        self.samples
            .iter()
            .map(|sample| (sample.ln_weight - ln_evidence).exp())
            .collect()
    }

    pub fn moments<F>(&self, f: F) -> Moments
    where
        F: Fn(&O) -> f64,
    {
        let (mut first, mut second) = (0.0, 0.0);
        for (sample, weight) in self.samples.iter().zip(self.weights()) {
            let value = f(&sample.point);
            first += weight * value;
            second += weight * value * value;
        }
        Moments {
            mean: first,
            std: (second - first * first).max(0.0).sqrt(),
        }
    }
}

/// Final ln Z of independent runs, one per seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Replicates {
    pub ln_evidence: Vec<f64>,
}

impl Replicates {
    pub fn mean(&self) -> f64 {
        mean(&self.ln_evidence)
    }

    pub fn std(&self) -> f64 {
        variance(&self.ln_evidence).sqrt()
    }
}

/// Run one seeded sampler per seed, in parallel, for `iterations` each.
///
/// `make_population` receives the seed and builds that run's initial live
/// points.
pub fn replicate_ln_evidence<O, F>(
    seeds: &[u64],
    iterations: usize,
    make_population: F,
) -> Result<Replicates, NestError>
where
    O: Object + Send,
    F: Fn(u64) -> Vec<O> + Sync,
{
    if iterations == 0 {
        return Err(NestError::NoIterations);
    }
    let ln_evidence = seeds
        .par_iter()
        .map(|&seed| {
            let mut sampler = NestedSampler::seeded(make_population(seed), seed)?;
            let last = sampler
                .by_ref()
                .take(iterations)
                .last()
                .ok_or(NestError::NoIterations)?;
            info!(seed, ln_evidence = last.ln_evidence, "replicate finished");
            Ok(last.ln_evidence)
        })
        .collect::<Result<Vec<f64>, NestError>>()?;
    Ok(Replicates { ln_evidence })
}
