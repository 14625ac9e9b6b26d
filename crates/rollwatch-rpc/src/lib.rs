//! rollwatch-rpc — gRPC surface for rollwatch.
//!
//! Exposes the deployment store's three operations over tonic:
//!
//! ```text
//! DeploymentService
//!   ├── Deploy(svc, version)          → resulting record
//!   ├── SetRatio(svc, version, ratio) → resulting record | NOT_FOUND
//!   └── Get(svc)                      → current record
//! ```
//!
//! The compiled file descriptor set is exported for registering server
//! reflection, so clients can discover the service without the proto file.

pub mod server;

/// Generated protobuf types and gRPC service stubs.
pub mod proto {
    tonic::include_proto!("rollwatch.v1");

    /// Descriptor set for the reflection service.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("rollwatch_descriptor");
}

pub use server::DeploymentServer;
