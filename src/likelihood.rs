use statrs::distribution::{Cauchy, Continuous, Normal};

use crate::error::NestError;

pub trait Likelihood {
    fn ln_likelihood(&self, x: &[f64]) -> f64;

    /// Number of coordinates `ln_likelihood` expects, `None` for any.
    fn ndim(&self) -> Option<usize>;
}

/// A lighthouse at `(x, y)`, `y` offshore, flashing in uniformly random
/// directions; each flash is seen at a coast position `D` with density
/// `Cauchy(D; x, y)`.
#[derive(Clone, Debug)]
pub struct Lighthouse {
    flashes: Vec<f64>,
}

impl Lighthouse {
    pub fn new(flashes: Vec<f64>) -> Result<Self, NestError> {
        if flashes.is_empty() {
            return Err(NestError::InvalidData("no flashes observed"));
        }
        if flashes.iter().any(|d| !d.is_finite()) {
            return Err(NestError::InvalidData("flash positions must be finite"));
        }
        Ok(Self { flashes })
    }

    pub fn flashes(&self) -> &[f64] {
        &self.flashes
    }
}

impl Likelihood for Lighthouse {
    fn ln_likelihood(&self, x: &[f64]) -> f64 {
        match Cauchy::new(x[0], x[1]) {
            Ok(cauchy) => self.flashes.iter().map(|&d| cauchy.ln_pdf(d)).sum(),
            Err(_) => f64::NEG_INFINITY,
        }
    }

    fn ndim(&self) -> Option<usize> {
        Some(2)
    }
}

/// Flat likelihood, 1 inside an axis-aligned box and 0 outside.
#[derive(Clone, Debug)]
pub struct FlatBox {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl FlatBox {
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, NestError> {
        if lower.len() != upper.len() {
            return Err(NestError::DimensionMismatch {
                expected: lower.len(),
                found: upper.len(),
            });
        }
        if lower.iter().zip(upper.iter()).any(|(lo, hi)| !(lo < hi)) {
            return Err(NestError::InvalidData("box bounds must satisfy lower < upper"));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    pub fn volume(&self) -> f64 {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(lo, hi)| hi - lo)
            .product()
    }
}

impl Likelihood for FlatBox {
    fn ln_likelihood(&self, x: &[f64]) -> f64 {
        let inside = x
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(x, (lo, hi))| lo <= x && x < hi);
        if inside {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    }

    fn ndim(&self) -> Option<usize> {
        Some(self.lower.len())
    }
}

/// Normalised Gaussian with independent dimensions.
#[derive(Clone, Debug)]
pub struct Gaussian {
    marginals: Vec<Normal>,
}

impl Gaussian {
    pub fn new(mean: &[f64], std: &[f64]) -> Result<Self, NestError> {
        if mean.len() != std.len() {
            return Err(NestError::DimensionMismatch {
                expected: mean.len(),
                found: std.len(),
            });
        }
        let marginals = mean
            .iter()
            .zip(std.iter())
            .map(|(&mean, &std)| Normal::new(mean, std))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { marginals })
    }

    pub fn from_const_mean_std(mean: f64, std: f64, ndim: usize) -> Result<Self, NestError> {
        Self::new(&vec![mean; ndim], &vec![std; ndim])
    }
}

impl Likelihood for Gaussian {
    fn ln_likelihood(&self, x: &[f64]) -> f64 {
        x.iter()
            .zip(self.marginals.iter())
            .map(|(&x, normal)| normal.ln_pdf(x))
            .sum()
    }

    fn ndim(&self) -> Option<usize> {
        Some(self.marginals.len())
    }
}

#[derive(Clone, Debug)]
pub struct Null {}

impl Likelihood for Null {
    fn ln_likelihood(&self, _x: &[f64]) -> f64 {
        0.0
    }

    fn ndim(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn lighthouse_matches_closed_form() {
        let model = Lighthouse::new(vec![1.0, -0.5, 3.0]).unwrap();
        let (x, y) = (0.5, 1.5);
        let expected: f64 = model
            .flashes()
            .iter()
            .map(|d| (y / PI / ((d - x).powi(2) + y * y)).ln())
            .sum();
        assert!((model.ln_likelihood(&[x, y]) - expected).abs() < 1e-12);
    }

    #[test]
    fn lighthouse_on_the_coast_is_impossible() {
        let model = Lighthouse::new(vec![1.0]).unwrap();
        assert_eq!(model.ln_likelihood(&[0.0, 0.0]), f64::NEG_INFINITY);
    }

    #[test]
    fn lighthouse_rejects_bad_data() {
        assert!(matches!(
            Lighthouse::new(vec![]),
            Err(NestError::InvalidData(_))
        ));
        assert!(matches!(
            Lighthouse::new(vec![1.0, f64::NAN]),
            Err(NestError::InvalidData(_))
        ));
    }

    #[test]
    fn declared_dimensions() {
        assert_eq!(Lighthouse::new(vec![1.0]).unwrap().ndim(), Some(2));
        let flat = FlatBox::new(vec![0.0; 3], vec![1.0; 3]).unwrap();
        assert_eq!(flat.ndim(), Some(3));
        let gaussian = Gaussian::from_const_mean_std(0.0, 1.0, 4).unwrap();
        assert_eq!(gaussian.ndim(), Some(4));
        assert_eq!(Null {}.ndim(), None);
    }

    #[test]
    fn flat_box() {
        let flat = FlatBox::new(vec![0.0, 0.0], vec![1.0, 0.5]).unwrap();
        assert_eq!(flat.volume(), 0.5);
        assert_eq!(flat.ln_likelihood(&[0.5, 0.25]), 0.0);
        assert_eq!(flat.ln_likelihood(&[0.5, 0.75]), f64::NEG_INFINITY);
        assert_eq!(flat.ln_likelihood(&[1.0, 0.25]), f64::NEG_INFINITY);
        assert!(matches!(
            FlatBox::new(vec![0.0], vec![0.0]),
            Err(NestError::InvalidData(_))
        ));
        assert!(matches!(
            FlatBox::new(vec![0.0], vec![1.0, 2.0]),
            Err(NestError::DimensionMismatch {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn gaussian_peak() {
        let gaussian = Gaussian::from_const_mean_std(0.5, 0.1, 2).unwrap();
        let peak = -(2.0 * PI * 0.01).ln();
        assert!((gaussian.ln_likelihood(&[0.5, 0.5]) - peak).abs() < 1e-12);
        assert!(Gaussian::new(&[0.0], &[-1.0]).is_err());
    }
}
