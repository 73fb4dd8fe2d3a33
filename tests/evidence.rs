//! Evidence and posterior checks against problems with known answers.

use std::sync::Arc;

use minnest::likelihood::{FlatBox, Gaussian, Lighthouse, Likelihood, Null};
use minnest::nest::NestedSampler;
use minnest::point::{Model, Point, Prior};
use minnest::run::{replicate_ln_evidence, Run};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use statrs::distribution::Uniform;

const SEEDS: [u64; 8] = [11, 23, 37, 41, 53, 67, 79, 97];

const FLASHES: [f64; 64] = [
    4.73, 0.45, -1.73, 1.09, 2.19, 0.12, 1.31, 1.00, 1.32, 1.07, 0.86, -0.49, -2.59, 1.73, 2.11,
    1.61, 4.98, 1.71, 2.23, -57.20, 0.96, 1.25, -1.56, 2.45, 1.19, 2.17, -10.66, 1.91, -4.16, 1.92,
    0.10, 1.98, -2.51, 5.55, -0.47, 1.91, 0.95, -0.78, -0.84, 1.72, -0.01, 1.48, 2.70, 1.21, 4.41,
    -4.79, 1.33, 0.81, 0.20, 1.58, 1.29, 16.19, 2.75, -2.38, -1.79, 6.50, -18.53, 0.72, 0.94, 3.64,
    1.94, -0.11, 1.57, 0.57,
];

fn uniform(min: f64, max: f64) -> Prior {
    Box::new(Uniform::new(min, max).unwrap())
}

fn unit_square(likelihood: impl Likelihood + Send + Sync + 'static) -> Arc<Model> {
    Arc::new(
        Model::new(
            Arc::new(likelihood),
            vec![uniform(0.0, 1.0), uniform(0.0, 1.0)],
        )
        .unwrap(),
    )
}

fn population(model: &Arc<Model>, nlive: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0xDEAD_BEEF);
    model.population(nlive, &mut rng)
}

#[test]
fn null_likelihood_has_unit_evidence() {
    let model = unit_square(Null {});
    let mut sampler = NestedSampler::seeded(population(&model, 50, 1), 1).unwrap();
    let run = Run::gather(&mut sampler, 1000).unwrap();
    // every shell has likelihood one, so Z is the total width handed out
    let expected = (1.0 - (-1000.0f64 / 50.0).exp()).ln();
    assert!((run.ln_evidence() - expected).abs() < 1e-9);
    assert!(run.information().abs() < 1e-6);
}

#[test]
fn gaussian_evidence_converges() {
    // normalised density well inside the prior, so Z is one
    let model = unit_square(Gaussian::from_const_mean_std(0.5, 0.1, 2).unwrap());
    let replicates =
        replicate_ln_evidence(&SEEDS, 1500, |seed| population(&model, 100, seed)).unwrap();
    for ln_evidence in &replicates.ln_evidence {
        assert!(ln_evidence.abs() < 0.6, "{replicates:?}");
    }
    assert!(replicates.mean().abs() < 0.25, "{replicates:?}");
}

#[test]
fn gaussian_information_and_moments() {
    let model = unit_square(Gaussian::from_const_mean_std(0.5, 0.1, 2).unwrap());
    let mut sampler = NestedSampler::seeded(population(&model, 100, 5), 5).unwrap();
    let run = Run::gather(&mut sampler, 1500).unwrap();
    // H = -ln(2 pi sigma^2) - 1 for a narrow normalised Gaussian
    let expected = -(2.0 * std::f64::consts::PI * 0.01).ln() - 1.0;
    assert!((run.information() - expected).abs() < 0.5, "{}", run.information());
    for dim in 0..2 {
        let moments = run.moments(|point| point.scaled()[dim]);
        assert!((moments.mean - 0.5).abs() < 0.05, "{moments:?}");
        assert!((moments.std - 0.1).abs() < 0.04, "{moments:?}");
    }
}

#[test]
fn flat_box_evidence_is_its_prior_mass() {
    // the box covers 80% of the prior
    let model = unit_square(FlatBox::new(vec![0.0, 0.0], vec![1.0, 0.8]).unwrap());
    let replicates =
        replicate_ln_evidence(&SEEDS, 3000, |seed| population(&model, 200, seed)).unwrap();
    assert!(
        (replicates.mean() - 0.8f64.ln()).abs() < 0.1,
        "{replicates:?}"
    );
}

#[test]
fn more_iterations_do_not_lower_the_evidence() {
    let model = unit_square(Gaussian::from_const_mean_std(0.5, 0.1, 2).unwrap());
    let mut sampler = NestedSampler::seeded(population(&model, 50, 9), 9).unwrap();
    let short = Run::gather(&mut sampler, 200).unwrap();
    let long = Run::gather(&mut sampler, 800).unwrap();
    assert!(long.ln_evidence() >= short.ln_evidence());
    assert_eq!(sampler.iteration(), 1000);
}

#[test]
fn lighthouse_position() {
    let prior = vec![uniform(-2.0, 2.0), uniform(0.0, 2.0)];
    let lighthouse = Lighthouse::new(FLASHES.to_vec()).unwrap();
    let model = Arc::new(Model::new(Arc::new(lighthouse), prior).unwrap());
    let mut sampler = NestedSampler::seeded(population(&model, 100, 2006), 2006).unwrap();
    let run = Run::gather(&mut sampler, 1000).unwrap();

    let x = run.moments(|point| point.scaled()[0]);
    let y = run.moments(|point| point.scaled()[1]);
    assert!((x.mean - 1.24).abs() < 0.35, "{x:?}");
    assert!((y.mean - 1.0).abs() < 0.35, "{y:?}");
    assert!(x.std > 0.05 && x.std < 0.5, "{x:?}");
    assert!(y.std > 0.05 && y.std < 0.5, "{y:?}");
    assert!(run.ln_evidence().is_finite());
    assert!(sampler.ln_evidence_with_live() >= run.ln_evidence());
}
