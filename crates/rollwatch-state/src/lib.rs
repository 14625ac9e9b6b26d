//! rollwatch-state — in-memory deployment store for rollwatch.
//!
//! Tracks, per logical service name, which version is currently deployed
//! and what percentage of traffic is routed to it. Only the latest record
//! per service is kept; state is volatile and rebuilt empty at process
//! start.
//!
//! The `DeploymentStore` is `Clone` + `Send` + `Sync` (backed by an
//! `Arc<RwLock<HashMap>>`) and can be shared across async tasks.

pub mod error;
pub mod store;
pub mod types;

pub use error::{StateError, StateResult};
pub use store::DeploymentStore;
pub use types::{DeploymentRecord, ServiceName};
