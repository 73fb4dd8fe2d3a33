use std::sync::Arc;

use minnest::likelihood::FlatBox;
use minnest::point::{Model, Prior};
use minnest::run::replicate_ln_evidence;
use minnest::NestError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use statrs::distribution::Uniform;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), NestError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let prior = (0..2)
        .map(|_| -> Result<Prior, NestError> { Ok(Box::new(Uniform::new(-0.25, 1.0)?)) })
        .collect::<Result<Vec<_>, _>>()?;
    let flat = FlatBox::new(vec![0.0, 0.0], vec![1.0, 1.0])?;
    // the unit square covers this fraction of the prior
    let ln_expected = (flat.volume() / 1.25f64.powi(2)).ln();
    let model = Arc::new(Model::new(Arc::new(flat), prior)?);

    let seeds: Vec<u64> = (0..16).collect();
    let replicates = replicate_ln_evidence(&seeds, 2000, |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(0x9E37_79B9_7F4A_7C15));
        model.population(200, &mut rng)
    })?;
    info!(
        "ln Z = {:.3} +/- {:.3} over {} runs, expected {:.3}",
        replicates.mean(),
        replicates.std(),
        seeds.len(),
        ln_expected
    );
    Ok(())
}
