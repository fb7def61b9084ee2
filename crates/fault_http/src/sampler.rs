//! Activation sampling
//!
//! Rolls the dice against a resolver's activation percentage. Kept out of
//! `fault_core` so the resolvers themselves stay deterministic.

use fault_core::ActivationPercentage;
use rand::Rng;

/// Decide whether a fault with the given percentage fires for this request
///
/// A zero numerator never fires; a numerator at or above the denominator
/// scale always fires.
#[must_use]
pub fn roll(percentage: ActivationPercentage) -> bool {
    let numerator = u64::from(percentage.numerator());
    let denominator = u64::from(percentage.denominator().value());
    if numerator == 0 {
        return false;
    }
    if numerator >= denominator {
        return true;
    }
    rand::thread_rng().gen_range(0..denominator) < numerator
}

#[cfg(test)]
mod tests {
    use super::*;
    use fault_core::DenominatorScale;

    #[test]
    fn zero_numerator_never_fires() {
        for _ in 0..1000 {
            assert!(!roll(ActivationPercentage::never()));
        }
    }

    #[test]
    fn full_numerator_always_fires() {
        for _ in 0..1000 {
            assert!(roll(ActivationPercentage::always()));
        }
    }

    #[test]
    fn overfull_numerator_always_fires() {
        let percentage = ActivationPercentage::new(150, DenominatorScale::Hundred);
        for _ in 0..1000 {
            assert!(roll(percentage));
        }
    }

    #[test]
    fn partial_percentage_fires_sometimes() {
        let percentage = ActivationPercentage::new(50, DenominatorScale::Hundred);
        let fired = (0..2000).filter(|_| roll(percentage)).count();
        // 50% over 2000 draws; both outcomes are effectively certain.
        assert!(fired > 0);
        assert!(fired < 2000);
    }

    #[test]
    fn basis_point_scale_is_usable() {
        let percentage = ActivationPercentage::new(10_000, DenominatorScale::TenThousand);
        assert!(roll(percentage));
    }
}
