use std::sync::Arc;

use minnest::likelihood::Lighthouse;
use minnest::nest::NestedSampler;
use minnest::point::{Model, Prior};
use minnest::run::Run;
use minnest::NestError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use statrs::distribution::Uniform;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Positions along the coast where 64 flashes were seen.
const FLASHES: [f64; 64] = [
    4.73, 0.45, -1.73, 1.09, 2.19, 0.12, 1.31, 1.00, 1.32, 1.07, 0.86, -0.49, -2.59, 1.73, 2.11,
    1.61, 4.98, 1.71, 2.23, -57.20, 0.96, 1.25, -1.56, 2.45, 1.19, 2.17, -10.66, 1.91, -4.16, 1.92,
    0.10, 1.98, -2.51, 5.55, -0.47, 1.91, 0.95, -0.78, -0.84, 1.72, -0.01, 1.48, 2.70, 1.21, 4.41,
    -4.79, 1.33, 0.81, 0.20, 1.58, 1.29, 16.19, 2.75, -2.38, -1.79, 6.50, -18.53, 0.72, 0.94, 3.64,
    1.94, -0.11, 1.57, 0.57,
];

fn main() -> Result<(), NestError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // easterly position in (-2, 2), height offshore in (0, 2)
    let prior: Vec<Prior> = vec![
        Box::new(Uniform::new(-2.0, 2.0)?) as Prior,
        Box::new(Uniform::new(0.0, 2.0)?) as Prior,
    ];
    let lighthouse = Lighthouse::new(FLASHES.to_vec())?;
    let model = Arc::new(Model::new(Arc::new(lighthouse), prior)?);

    let mut rng = ChaCha8Rng::seed_from_u64(2006);
    let mut sampler = NestedSampler::seeded(model.population(100, &mut rng), 2012)?;
    let run = Run::gather(&mut sampler, 1000)?;

    let x = run.moments(|point| point.scaled()[0]);
    let y = run.moments(|point| point.scaled()[1]);
    info!("mean(x) = {:.5}, stddev(x) = {:.5}", x.mean, x.std);
    info!("mean(y) = {:.5}, stddev(y) = {:.5}", y.mean, y.std);
    info!(
        "ln(Z) including live points = {:.3}",
        sampler.ln_evidence_with_live()
    );
    Ok(())
}
