//! Deployment gRPC server.
//!
//! Implements the `DeploymentService` gRPC interface over the shared
//! deployment store. The store's single domain error (`NotFound`)
//! surfaces as `NOT_FOUND`; every other operation is total.

use tonic::{Request, Response, Status};
use tracing::info;

use rollwatch_state::DeploymentStore;

use crate::proto;
use crate::proto::deployment_service_server::DeploymentService;

/// gRPC implementation of the deployment service.
pub struct DeploymentServer {
    store: DeploymentStore,
}

impl DeploymentServer {
    /// Create a new deployment server over the shared store.
    pub fn new(store: DeploymentStore) -> Self {
        Self { store }
    }

    /// Get the tonic service for mounting on a gRPC server.
    pub fn into_service(
        self,
    ) -> proto::deployment_service_server::DeploymentServiceServer<Self> {
        proto::deployment_service_server::DeploymentServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl DeploymentService for DeploymentServer {
    async fn deploy(
        &self,
        request: Request<proto::DeployRequest>,
    ) -> Result<Response<proto::DeployResponse>, Status> {
        let req = request.into_inner();

        let record = self.store.deploy(&req.svc, &req.version);

        info!(svc = %req.svc, version = %req.version, "deploy");

        Ok(Response::new(proto::DeployResponse {
            version: record.version,
            ratio: record.ratio,
        }))
    }

    async fn set_ratio(
        &self,
        request: Request<proto::SetRatioRequest>,
    ) -> Result<Response<proto::SetRatioResponse>, Status> {
        let req = request.into_inner();

        let record = self
            .store
            .set_ratio(&req.svc, &req.version, req.ratio)
            .map_err(|e| Status::not_found(e.to_string()))?;

        info!(svc = %req.svc, version = %req.version, ratio = record.ratio, "set ratio");

        Ok(Response::new(proto::SetRatioResponse {
            version: record.version,
            ratio: record.ratio,
        }))
    }

    async fn get(
        &self,
        request: Request<proto::GetRequest>,
    ) -> Result<Response<proto::GetResponse>, Status> {
        let req = request.into_inner();

        let record = self.store.get(&req.svc);

        Ok(Response::new(proto::GetResponse {
            version: record.version,
            ratio: record.ratio,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    fn test_server() -> DeploymentServer {
        DeploymentServer::new(DeploymentStore::new())
    }

    #[tokio::test]
    async fn deploy_then_get() {
        let server = test_server();

        let resp = server
            .deploy(Request::new(proto::DeployRequest {
                svc: "svc1".to_string(),
                version: "v2".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(resp.version, "v2");
        assert_eq!(resp.ratio, 0);

        let resp = server
            .get(Request::new(proto::GetRequest {
                svc: "svc1".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(resp.version, "v2");
        assert_eq!(resp.ratio, 0);
    }

    #[tokio::test]
    async fn get_unknown_service_returns_zero_record() {
        let server = test_server();

        let resp = server
            .get(Request::new(proto::GetRequest {
                svc: "ghost".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(resp.version, "");
        assert_eq!(resp.ratio, 0);
    }

    #[tokio::test]
    async fn set_ratio_requires_prior_deploy() {
        let server = test_server();

        let status = server
            .set_ratio(Request::new(proto::SetRatioRequest {
                svc: "ghost".to_string(),
                version: "v1".to_string(),
                ratio: 50,
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn set_ratio_returns_stored_record() {
        let server = test_server();

        server
            .deploy(Request::new(proto::DeployRequest {
                svc: "svc1".to_string(),
                version: "v1".to_string(),
            }))
            .await
            .unwrap();

        let resp = server
            .set_ratio(Request::new(proto::SetRatioRequest {
                svc: "svc1".to_string(),
                version: "v2".to_string(),
                ratio: 30,
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(resp.version, "v2");
        assert_eq!(resp.ratio, 30);

        let resp = server
            .get(Request::new(proto::GetRequest {
                svc: "svc1".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(resp.version, "v2");
        assert_eq!(resp.ratio, 30);
    }
}
