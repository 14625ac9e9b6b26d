//! ErrorRateEvaluator — scales baseline error counts by live traffic ratio.

use std::sync::Arc;

use rollwatch_state::DeploymentStore;
use tracing::debug;

use crate::table::ErrorRateTable;

/// Estimates the error volume currently hitting a service.
///
/// Reads the live deployment record from the store and scales the static
/// baseline for that (service, version) pair by the traffic ratio.
/// Cloning is cheap; the table is shared behind an `Arc`.
#[derive(Clone)]
pub struct ErrorRateEvaluator {
    store: DeploymentStore,
    table: Arc<ErrorRateTable>,
}

impl ErrorRateEvaluator {
    /// Create an evaluator over the given store and table.
    pub fn new(store: DeploymentStore, table: ErrorRateTable) -> Self {
        Self {
            store,
            table: Arc::new(table),
        }
    }

    /// Estimate the current error volume for `svc`.
    ///
    /// Computes `floor(baseline * ratio / 100)`, truncating the float
    /// intermediate. Unknown services and versions have baseline 0, so
    /// this never fails.
    pub fn check(&self, svc: &str) -> u32 {
        let record = self.store.get(svc);
        let baseline = self.table.baseline(svc, &record.version);
        let estimate = (baseline as f64 * record.ratio as f64 / 100.0) as u32;
        debug!(
            %svc,
            version = %record.version,
            ratio = record.ratio,
            baseline,
            estimate,
            "error rate evaluated"
        );
        estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> (DeploymentStore, ErrorRateEvaluator) {
        let store = DeploymentStore::new();
        let evaluator = ErrorRateEvaluator::new(store.clone(), ErrorRateTable::builtin());
        (store, evaluator)
    }

    #[test]
    fn scales_baseline_by_ratio() {
        let (store, evaluator) = evaluator();
        store.deploy("svc1", "v2");
        store.set_ratio("svc1", "v2", 50).unwrap();
        // baseline 10 at 50% traffic.
        assert_eq!(evaluator.check("svc1"), 5);
    }

    #[test]
    fn full_ratio_returns_full_baseline() {
        let (store, evaluator) = evaluator();
        store.deploy("svc1", "v3");
        store.set_ratio("svc1", "v3", 100).unwrap();
        assert_eq!(evaluator.check("svc1"), 20);
    }

    #[test]
    fn fresh_deploy_has_zero_ratio() {
        let (store, evaluator) = evaluator();
        store.deploy("svc1", "v2");
        assert_eq!(evaluator.check("svc1"), 0);
    }

    #[test]
    fn unknown_service_is_zero() {
        let (_store, evaluator) = evaluator();
        assert_eq!(evaluator.check("ghost"), 0);
    }

    #[test]
    fn unknown_version_is_zero() {
        let (store, evaluator) = evaluator();
        store.deploy("svc1", "v9");
        store.set_ratio("svc1", "v9", 80).unwrap();
        assert_eq!(evaluator.check("svc1"), 0);
    }

    #[test]
    fn estimate_truncates() {
        let store = DeploymentStore::new();
        let table = ErrorRateTable::from_entries(&[("api", "v1", 10)]);
        let evaluator = ErrorRateEvaluator::new(store.clone(), table);
        store.deploy("api", "v1");
        store.set_ratio("api", "v1", 25).unwrap();
        // 10 * 25 / 100 = 2.5 → 2, not 3.
        assert_eq!(evaluator.check("api"), 2);
    }
}
