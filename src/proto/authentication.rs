//! `authentication.AuthService` contract.
//!
//! One unary rpc: `HasAccess(Resource) -> Access`. The service decides whether
//! the presented credential may perform `method` on `path`.

/// Request message for `AuthService/HasAccess`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Resource {
    #[prost(enumeration = "resource::Method", tag = "1")]
    pub method: i32,
    #[prost(string, tag = "2")]
    pub path: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub jwt: ::prost::alloc::string::String,
}

pub mod resource {
    /// HTTP method as the authentication service understands it.
    ///
    /// `Invalid` is the explicit sentinel for methods the service does not
    /// recognize; callers must map unknown methods here, never to a real one.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum Method {
        Invalid = 0,
        Get = 1,
        Post = 2,
        Put = 3,
        Delete = 4,
        Head = 5,
        Connect = 6,
        Options = 7,
        Trace = 8,
        Patch = 9,
    }
}

/// Response message for `AuthService/HasAccess`.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Access {
    #[prost(bool, tag = "1")]
    pub has_access: bool,
}

pub mod auth_service_client {
    use http::uri::PathAndQuery;
    use tonic::transport::Channel;

    use super::{Access, Resource};

    #[derive(Debug, Clone)]
    pub struct AuthServiceClient {
        inner: tonic::client::Grpc<Channel>,
    }

    impl AuthServiceClient {
        pub fn new(channel: Channel) -> Self {
            Self {
                inner: tonic::client::Grpc::new(channel),
            }
        }

        pub async fn has_access(
            &mut self,
            request: impl tonic::IntoRequest<Resource>,
        ) -> Result<tonic::Response<Access>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unavailable(format!("authentication service not ready: {e}"))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/authentication.AuthService/HasAccess");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}
