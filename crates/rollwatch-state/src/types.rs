//! Domain types for the rollwatch deployment store.

use serde::{Deserialize, Serialize};

/// Unique identifier for a logical deployable unit.
pub type ServiceName = String;

/// The current deployment of a single service.
///
/// `Default` is the zero record (`version: "", ratio: 0`), which is what
/// `get` returns for a service that was never deployed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeploymentRecord {
    /// Currently deployed version.
    pub version: String,
    /// Percentage of traffic (0-100) routed to this version.
    pub ratio: u32,
}
