//! `product.ProductService` contract.
//!
//! One unary rpc: `GetProduct(GetProductRequest) -> Product`. Unknown product
//! ids come back as a gRPC `NotFound` status, not an empty message.

/// Request message for `ProductService/GetProduct`.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetProductRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

/// Display metadata for a single catalog product.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Product {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub title: ::prost::alloc::string::String,
    #[prost(double, tag = "3")]
    pub price: f64,
}

pub mod product_service_client {
    use http::uri::PathAndQuery;
    use tonic::transport::Channel;

    use super::{GetProductRequest, Product};

    #[derive(Debug, Clone)]
    pub struct ProductServiceClient {
        inner: tonic::client::Grpc<Channel>,
    }

    impl ProductServiceClient {
        pub fn new(channel: Channel) -> Self {
            Self {
                inner: tonic::client::Grpc::new(channel),
            }
        }

        pub async fn get_product(
            &mut self,
            request: impl tonic::IntoRequest<GetProductRequest>,
        ) -> Result<tonic::Response<Product>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unavailable(format!("product service not ready: {e}"))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/product.ProductService/GetProduct");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}
