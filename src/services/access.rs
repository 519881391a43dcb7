/*
 * Responsibility
 * - Access decision client: asks the authentication service whether a
 *   credential may perform (method, path)
 * - Decisions are per-request and never cached; a backend failure is an Err,
 *   callers must treat it as a denial (fail closed)
 */
use async_trait::async_trait;
use tonic::transport::Channel;

use crate::proto::authentication::auth_service_client::AuthServiceClient;
use crate::proto::authentication::{Resource, resource};

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("authentication service unavailable: {0}")]
    Unavailable(#[from] tonic::Status),
}

/// Access decision result:
/// - `Ok(true)`: the credential may perform the request
/// - `Ok(false)`: the service answered and denied it
/// - `Err(_)`: the call itself failed (caller must deny)
#[async_trait]
pub trait AccessDecider: Send + Sync {
    async fn has_access(
        &self,
        method: resource::Method,
        path: &str,
        credential: &str,
    ) -> Result<bool, AccessError>;
}

/// gRPC-backed decider talking to `authentication.AuthService`.
#[derive(Debug, Clone)]
pub struct GrpcAccessDecider {
    client: AuthServiceClient,
}

impl GrpcAccessDecider {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: AuthServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl AccessDecider for GrpcAccessDecider {
    async fn has_access(
        &self,
        method: resource::Method,
        path: &str,
        credential: &str,
    ) -> Result<bool, AccessError> {
        // tonic clients are cheap to clone; the channel inside is shared
        let mut client = self.client.clone();

        let res = client
            .has_access(Resource {
                method: method as i32,
                path: path.to_owned(),
                jwt: credential.to_owned(),
            })
            .await?;

        Ok(res.into_inner().has_access)
    }
}
