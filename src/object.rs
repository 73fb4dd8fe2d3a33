use rand::Rng;

/// A candidate point the nested sampler can eliminate and replace.
///
/// `Clone` is the copy operation: a clone must not share mutable storage with
/// the original. Immutable problem data may be shared (e.g. behind an `Arc`).
pub trait Object: Clone {
    /// Cached log-likelihood of the current state.
    fn ln_likelihood(&self) -> f64;

    /// Evolve this point in place under the hard constraint
    /// `ln_likelihood > ln_likelihood_floor`.
    ///
    /// If no trial state satisfies the constraint the point may be left
    /// unchanged, so the result is not guaranteed to be above the floor.
    fn explore<R: Rng + ?Sized>(&mut self, ln_likelihood_floor: f64, rng: &mut R);
}
