//! Nested sampling over a population of live points.
//!
//! A [`nest::NestedSampler`] owns the live population and yields one
//! [`nest::Sample`] per iteration: the eliminated point with its log-weight
//! and the running evidence and information. Any type implementing
//! [`object::Object`] can be sampled; [`point::Model`] provides points on the
//! unit hypercube explored with the constrained random walk of [`explore`].
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use minnest::likelihood::Gaussian;
//! use minnest::nest::NestedSampler;
//! use minnest::point::{Model, Prior};
//! use minnest::run::Run;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use statrs::distribution::Uniform;
//!
//! let prior: Vec<Prior> = (0..2)
//!     .map(|_| Box::new(Uniform::new(0.0, 1.0).unwrap()) as Prior)
//!     .collect();
//! let likelihood = Gaussian::from_const_mean_std(0.5, 0.1, 2).unwrap();
//! let model = Arc::new(Model::new(Arc::new(likelihood), prior).unwrap());
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let mut sampler = NestedSampler::seeded(model.population(100, &mut rng), 2).unwrap();
//! let run = Run::gather(&mut sampler, 1000).unwrap();
//! let x = run.moments(|point| point.scaled()[0]);
//! println!("ln Z = {:.2}, x = {:.3} +/- {:.3}", run.ln_evidence(), x.mean, x.std);
//! ```

pub mod error;
pub mod explore;
pub mod likelihood;
pub mod logspace;
pub mod nest;
pub mod object;
pub mod point;
pub mod propose;
pub mod run;

pub use error::NestError;
pub use nest::{NestedSampler, Sample};
pub use object::Object;

pub fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

pub fn variance(x: &[f64]) -> f64 {
    let m = mean(x);
    x.iter().map(|&x| (x - m).powf(2.0)).sum::<f64>() / x.len() as f64
}
