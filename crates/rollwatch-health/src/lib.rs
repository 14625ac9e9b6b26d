//! rollwatch-health — derived error-rate estimation for rollwatch.
//!
//! Combines the deployment store's live (version, ratio) state with a
//! static table of known baseline error counts per (service, version)
//! pair to estimate the error volume currently hitting each service.
//!
//! # Architecture
//!
//! ```text
//! ErrorRateEvaluator
//!   ├── DeploymentStore::get(svc) → current (version, ratio)
//!   ├── ErrorRateTable::baseline(svc, version) → baseline errors
//!   └── check(svc) → floor(baseline * ratio / 100)
//! ```
//!
//! The table is populated once at startup and immutable thereafter.

pub mod evaluator;
pub mod table;

pub use evaluator::ErrorRateEvaluator;
pub use table::ErrorRateTable;
