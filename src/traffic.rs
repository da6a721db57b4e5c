//! Waiting-time cost model for traffic-signal green splits.

use crate::ga::GaProblem;

/// Scale factor relating green time to aggregate waiting time.
pub const DEFAULT_WAIT_SCALE: f64 = 1000.0;

/// Aggregate waiting-time cost for a set of signal phases.
///
/// Each phase contributes `wait_scale / green_time` to the total: more
/// green time for a phase means less accumulated delay behind it. This is
/// a stand-in for a calibrated traffic simulation; it captures the
/// direction of the trade-off, not real intersection dynamics.
///
/// The cost is strictly positive and finite for any gene vector with all
/// values at least 1, which [`crate::ga::GaConfig::validate`] guarantees
/// via the `min_green` bound.
#[derive(Debug, Clone)]
pub struct WaitingTimeModel {
    wait_scale: f64,
}

impl WaitingTimeModel {
    /// Creates a model with a custom scale factor.
    pub fn new(wait_scale: f64) -> Self {
        Self { wait_scale }
    }
}

impl Default for WaitingTimeModel {
    fn default() -> Self {
        Self::new(DEFAULT_WAIT_SCALE)
    }
}

impl GaProblem for WaitingTimeModel {
    fn cost(&self, genes: &[u32]) -> f64 {
        genes.iter().map(|&green| self.wait_scale / f64::from(green)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_cost() {
        let model = WaitingTimeModel::default();
        // 4 phases at 10 s: 4 * 1000 / 10 = 400.
        assert_eq!(model.cost(&[10, 10, 10, 10]), 400.0);
        // 1000/10 + 1000/20 + 1000/40 + 1000/50 = 100 + 50 + 25 + 20.
        assert_eq!(model.cost(&[10, 20, 40, 50]), 195.0);
    }

    #[test]
    fn test_cost_is_positive() {
        let model = WaitingTimeModel::default();
        for genes in [vec![10, 60], vec![60; 8], vec![1]] {
            let cost = model.cost(&genes);
            assert!(cost > 0.0 && cost.is_finite(), "cost {cost} for {genes:?}");
        }
    }

    #[test]
    fn test_more_green_never_costs_more() {
        let model = WaitingTimeModel::default();
        for g in 10u32..60 {
            let lower = model.cost(&[30, g + 1, 30]);
            let higher = model.cost(&[30, g, 30]);
            assert!(
                lower <= higher,
                "raising a gene from {g} must not raise the cost"
            );
        }
    }

    #[test]
    fn test_custom_scale() {
        let model = WaitingTimeModel::new(500.0);
        assert_eq!(model.cost(&[10, 10]), 100.0);
    }
}
