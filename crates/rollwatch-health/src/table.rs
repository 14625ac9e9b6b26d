//! Static baseline error counts per (service, version) pair.

use std::collections::HashMap;

/// Immutable lookup table of baseline error counts.
///
/// Built once at startup. Pairs absent from the table have a baseline
/// of 0, so lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct ErrorRateTable {
    baselines: HashMap<(String, String), u32>,
}

impl ErrorRateTable {
    /// Build a table from `(service, version, baseline)` entries.
    pub fn from_entries(entries: &[(&str, &str, u32)]) -> Self {
        let baselines = entries
            .iter()
            .map(|&(svc, version, baseline)| ((svc.to_string(), version.to_string()), baseline))
            .collect();
        Self { baselines }
    }

    /// The built-in table shipped with the daemon.
    pub fn builtin() -> Self {
        Self::from_entries(&[("svc1", "v1", 0), ("svc1", "v2", 10), ("svc1", "v3", 20)])
    }

    /// Baseline error count for `(svc, version)`, 0 when absent.
    pub fn baseline(&self, svc: &str, version: &str) -> u32 {
        self.baselines
            .get(&(svc.to_string(), version.to_string()))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_entries() {
        let table = ErrorRateTable::builtin();
        assert_eq!(table.baseline("svc1", "v1"), 0);
        assert_eq!(table.baseline("svc1", "v2"), 10);
        assert_eq!(table.baseline("svc1", "v3"), 20);
    }

    #[test]
    fn absent_pair_is_zero() {
        let table = ErrorRateTable::builtin();
        assert_eq!(table.baseline("svc1", "v9"), 0);
        assert_eq!(table.baseline("other", "v1"), 0);
    }

    #[test]
    fn from_entries_roundtrip() {
        let table = ErrorRateTable::from_entries(&[("api", "1.2.0", 42)]);
        assert_eq!(table.baseline("api", "1.2.0"), 42);
        assert_eq!(table.baseline("api", "1.2.1"), 0);
    }
}
