use rand::Rng;

/// Wrap a coordinate onto the unit circle, `[0, 1)`.
pub fn wrap(u: f64) -> f64 {
    let wrapped = u - u.floor();
    // -1e-20 - floor(-1e-20) rounds to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Move each unit coordinate by a uniform offset in `[-step, step]`, with
/// periodic boundaries.
pub fn wrapped_uniform_step<R: Rng + ?Sized>(unit: &[f64], step: f64, rng: &mut R) -> Vec<f64> {
    unit.iter()
        .map(|u| wrap(u + step * (2.0 * rng.gen::<f64>() - 1.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn wraps_both_edges() {
        assert!((wrap(1.25) - 0.25).abs() < 1e-12);
        assert!((wrap(-0.25) - 0.75).abs() < 1e-12);
        assert_eq!(wrap(1.0), 0.0);
        assert_eq!(wrap(0.0), 0.0);
        assert_eq!(wrap(-1e-20), 0.0);
    }

    #[test]
    fn step_is_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let unit = [0.5, 0.5, 0.5];
        for _ in 0..1000 {
            let trial = wrapped_uniform_step(&unit, 0.1, &mut rng);
            assert_eq!(trial.len(), 3);
            for u in trial {
                assert!((u - 0.5).abs() <= 0.1 + 1e-12, "{u}");
            }
        }
    }

    proptest! {
        #[test]
        fn stays_in_unit_interval(u in 0.0f64..1.0, step in 1e-6f64..1e3, seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for x in wrapped_uniform_step(&[u], step, &mut rng) {
                prop_assert!((0.0..1.0).contains(&x));
            }
        }
    }
}
