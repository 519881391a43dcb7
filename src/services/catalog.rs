/*
 * Responsibility
 * - Product catalog client: resolves a product id to its display metadata
 * - gRPC NotFound means "no such product" (Ok(None)); every other failure is
 *   an upstream error the caller surfaces as-is
 */
use async_trait::async_trait;
use tonic::transport::Channel;

use crate::proto::product::GetProductRequest;
use crate::proto::product::product_service_client::ProductServiceClient;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product service unavailable: {0}")]
    Unavailable(#[from] tonic::Status),
}

/// Catalog metadata for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// `Ok(None)` when the catalog has no product with this id.
    async fn product(&self, product_id: i64) -> Result<Option<Product>, CatalogError>;
}

/// gRPC-backed catalog talking to `product.ProductService`.
#[derive(Debug, Clone)]
pub struct GrpcProductCatalog {
    client: ProductServiceClient,
}

impl GrpcProductCatalog {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: ProductServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl ProductCatalog for GrpcProductCatalog {
    async fn product(&self, product_id: i64) -> Result<Option<Product>, CatalogError> {
        let mut client = self.client.clone();

        match client.get_product(GetProductRequest { id: product_id }).await {
            Ok(res) => {
                let p = res.into_inner();
                Ok(Some(Product {
                    id: p.id,
                    title: p.title,
                    price: p.price,
                }))
            }
            Err(status) if status.code() == tonic::Code::NotFound => Ok(None),
            Err(status) => Err(CatalogError::Unavailable(status)),
        }
    }
}
