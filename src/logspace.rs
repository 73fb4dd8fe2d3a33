use lnexp::LnExp;
use logsumexp::LogAddExp;

/// `ln(exp(x) + exp(y))` without overflow, factoring out the larger argument.
pub fn plus(x: f64, y: f64) -> f64 {
    if x == f64::NEG_INFINITY && y == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if x > y {
        x.ln_add_exp(y)
    } else {
        y.ln_add_exp(x)
    }
}

/// Log-width of the outermost shell of prior mass for `nlive` live points,
/// `ln(1 - exp(-1 / nlive))`.
pub fn ln_outer_width(nlive: usize) -> f64 {
    (-1.0 / nlive as f64).ln_1m_exp()
}
