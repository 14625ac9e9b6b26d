//! DeploymentStore — concurrency-safe service → (version, ratio) mapping.
//!
//! All three operations (`deploy`, `set_ratio`, `get`) take the lock for
//! the full read-modify-write, so per-service call sequences are
//! linearizable: no lost updates, no partially written records.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::types::{DeploymentRecord, ServiceName};

/// Highest meaningful traffic ratio; `set_ratio` clamps above this.
const MAX_RATIO: u32 = 100;

/// Thread-safe deployment store.
///
/// Cloning is cheap and yields a handle to the same underlying map.
#[derive(Clone, Default)]
pub struct DeploymentStore {
    deployments: Arc<RwLock<HashMap<ServiceName, DeploymentRecord>>>,
}

impl DeploymentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ServiceName, DeploymentRecord>> {
        // No operation panics or awaits while holding the lock, so a
        // poisoned lock still contains a consistent map.
        self.deployments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ServiceName, DeploymentRecord>> {
        self.deployments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a deployment of `version` for `svc`.
    ///
    /// Unconditionally replaces any existing record and resets the traffic
    /// ratio to 0, even when the version is unchanged. Returns the stored
    /// record.
    pub fn deploy(&self, svc: &str, version: &str) -> DeploymentRecord {
        let record = DeploymentRecord {
            version: version.to_string(),
            ratio: 0,
        };
        self.write().insert(svc.to_string(), record.clone());
        debug!(%svc, %version, "deployment recorded");
        record
    }

    /// Set the traffic ratio for an already-deployed service.
    ///
    /// Fails with [`StateError::NotFound`] when `svc` has no prior deploy.
    /// On success the record is fully replaced: the caller-supplied
    /// `version` wins even when it differs from the deployed one. Ratios
    /// above 100 are clamped to 100. Returns the stored record.
    pub fn set_ratio(&self, svc: &str, version: &str, ratio: u32) -> StateResult<DeploymentRecord> {
        let mut deployments = self.write();
        if !deployments.contains_key(svc) {
            return Err(StateError::NotFound(svc.to_string()));
        }
        let record = DeploymentRecord {
            version: version.to_string(),
            ratio: ratio.min(MAX_RATIO),
        };
        deployments.insert(svc.to_string(), record.clone());
        debug!(%svc, %version, ratio = record.ratio, "ratio updated");
        Ok(record)
    }

    /// Get the current record for `svc`.
    ///
    /// Returns the zero record (`version: "", ratio: 0`) for services that
    /// were never deployed. Never fails.
    pub fn get(&self, svc: &str) -> DeploymentRecord {
        self.read().get(svc).cloned().unwrap_or_default()
    }
}
