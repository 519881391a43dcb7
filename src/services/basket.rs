/*
 * Responsibility
 * - In-memory basket store: subject id -> basket lines, insertion order kept
 * - One process-wide RwLock guards the map; the lock never spans a catalog
 *   call (resolve first, then mutate)
 */
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::services::catalog::{CatalogError, ProductCatalog};

#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("user not found")]
    SubjectNotFound,

    #[error("product is not in the basket")]
    LineNotFound,

    #[error("units must be positive, got {0}")]
    InvalidUnits(i32),

    #[error("product not found")]
    ProductNotFound,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One product entry in a subject's basket. `units` is always positive; a
/// line that would drop to zero is removed instead of kept around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketLine {
    pub product_id: i64,
    pub title: String,
    pub units: i32,
}

/// Per-subject basket store. A basket is created implicitly by the first
/// successful `add`; reading or modifying a never-created basket is
/// `SubjectNotFound` (basket existence doubles as "user known here").
pub struct BasketService {
    baskets: RwLock<HashMap<String, Vec<BasketLine>>>,
    catalog: Arc<dyn ProductCatalog>,
}

impl BasketService {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            baskets: RwLock::new(HashMap::new()),
            catalog,
        }
    }

    /// Snapshot of the subject's basket in insertion order.
    ///
    /// Returns a copy, so callers can iterate without observing concurrent
    /// writes; the read lock is held only for the clone.
    pub fn basket(&self, subject_id: &str) -> Result<Vec<BasketLine>, BasketError> {
        self.baskets
            .read()
            .get(subject_id)
            .cloned()
            .ok_or(BasketError::SubjectNotFound)
    }

    /// Add `units` of a product to the subject's basket.
    ///
    /// The catalog lookup runs before the write lock is taken, so a slow
    /// product service never blocks readers or other writers. If the request
    /// is dropped mid-lookup, nothing has been written yet.
    pub async fn add(
        &self,
        subject_id: &str,
        product_id: i64,
        units: i32,
    ) -> Result<(), BasketError> {
        if units <= 0 {
            return Err(BasketError::InvalidUnits(units));
        }

        let product = self
            .catalog
            .product(product_id)
            .await?
            .ok_or(BasketError::ProductNotFound)?;

        let mut baskets = self.baskets.write();
        let lines = baskets.entry(subject_id.to_owned()).or_default();

        match lines.iter_mut().find(|l| l.product_id == product_id) {
            // existing line: bump units, keep the title from the first add
            Some(line) => line.units = line.units.saturating_add(units),
            None => lines.push(BasketLine {
                product_id,
                title: product.title,
                units,
            }),
        }

        Ok(())
    }

    /// Apply a signed delta to an existing line's units. A result of zero or
    /// less removes the line entirely. The whole read-modify-write runs under
    /// the write lock; no RPC is involved.
    pub fn modify(
        &self,
        subject_id: &str,
        product_id: i64,
        delta: i32,
    ) -> Result<(), BasketError> {
        let mut baskets = self.baskets.write();
        let lines = baskets
            .get_mut(subject_id)
            .ok_or(BasketError::SubjectNotFound)?;

        let idx = lines
            .iter()
            .position(|l| l.product_id == product_id)
            .ok_or(BasketError::LineNotFound)?;

        let line = &mut lines[idx];
        line.units = line.units.saturating_add(delta);
        if line.units <= 0 {
            lines.remove(idx);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::services::catalog::Product;

    struct FixedCatalog(HashMap<i64, Product>);

    impl FixedCatalog {
        fn with_widget() -> Self {
            let mut products = HashMap::new();
            products.insert(
                42,
                Product {
                    id: 42,
                    title: "Widget".to_owned(),
                    price: 9.99,
                },
            );
            products.insert(
                7,
                Product {
                    id: 7,
                    title: "Gadget".to_owned(),
                    price: 19.99,
                },
            );
            products.insert(
                8,
                Product {
                    id: 8,
                    title: "Gizmo".to_owned(),
                    price: 4.50,
                },
            );
            Self(products)
        }
    }

    #[async_trait]
    impl ProductCatalog for FixedCatalog {
        async fn product(&self, product_id: i64) -> Result<Option<Product>, CatalogError> {
            Ok(self.0.get(&product_id).cloned())
        }
    }

    struct DownCatalog;

    #[async_trait]
    impl ProductCatalog for DownCatalog {
        async fn product(&self, _product_id: i64) -> Result<Option<Product>, CatalogError> {
            Err(CatalogError::Unavailable(tonic::Status::unavailable(
                "connection refused",
            )))
        }
    }

    /// Fails the test if the store consults the catalog at all.
    struct PanickingCatalog;

    #[async_trait]
    impl ProductCatalog for PanickingCatalog {
        async fn product(&self, _product_id: i64) -> Result<Option<Product>, CatalogError> {
            panic!("catalog must not be consulted");
        }
    }

    fn service() -> BasketService {
        BasketService::new(Arc::new(FixedCatalog::with_widget()))
    }

    #[tokio::test]
    async fn unknown_subject_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.basket("alice"),
            Err(BasketError::SubjectNotFound)
        ));
    }

    #[tokio::test]
    async fn first_add_creates_the_basket() {
        let svc = service();
        svc.add("alice", 42, 3).await.unwrap();

        let basket = svc.basket("alice").unwrap();
        assert_eq!(
            basket,
            vec![BasketLine {
                product_id: 42,
                title: "Widget".to_owned(),
                units: 3,
            }]
        );
    }

    #[tokio::test]
    async fn repeated_add_accumulates_units_on_one_line() {
        let svc = service();
        svc.add("alice", 42, 3).await.unwrap();
        svc.add("alice", 42, 2).await.unwrap();

        let basket = svc.basket("alice").unwrap();
        assert_eq!(basket.len(), 1);
        assert_eq!(basket[0].units, 5);
        assert_eq!(basket[0].title, "Widget");
    }

    #[tokio::test]
    async fn add_rejects_non_positive_units_without_touching_the_catalog() {
        let svc = BasketService::new(Arc::new(PanickingCatalog));

        assert!(matches!(
            svc.add("alice", 42, 0).await,
            Err(BasketError::InvalidUnits(0))
        ));
        assert!(matches!(
            svc.add("alice", 42, -1).await,
            Err(BasketError::InvalidUnits(-1))
        ));

        // nothing was created on the failure path
        assert!(matches!(
            svc.basket("alice"),
            Err(BasketError::SubjectNotFound)
        ));
    }

    #[tokio::test]
    async fn add_of_unknown_product_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.add("alice", 9999, 1).await,
            Err(BasketError::ProductNotFound)
        ));
        assert!(matches!(
            svc.basket("alice"),
            Err(BasketError::SubjectNotFound)
        ));
    }

    #[tokio::test]
    async fn catalog_outage_surfaces_and_writes_nothing() {
        let svc = BasketService::new(Arc::new(DownCatalog));
        assert!(matches!(
            svc.add("alice", 42, 1).await,
            Err(BasketError::Catalog(_))
        ));
        assert!(matches!(
            svc.basket("alice"),
            Err(BasketError::SubjectNotFound)
        ));
    }

    #[tokio::test]
    async fn lines_keep_insertion_order() {
        let svc = service();
        svc.add("alice", 42, 1).await.unwrap();
        svc.add("alice", 7, 1).await.unwrap();
        svc.add("alice", 8, 1).await.unwrap();

        let ids: Vec<i64> = svc
            .basket("alice")
            .unwrap()
            .into_iter()
            .map(|l| l.product_id)
            .collect();
        assert_eq!(ids, vec![42, 7, 8]);
    }

    #[tokio::test]
    async fn modify_to_zero_removes_the_line() {
        let svc = service();
        svc.add("alice", 42, 3).await.unwrap();
        svc.add("alice", 7, 1).await.unwrap();

        svc.modify("alice", 42, -3).unwrap();

        let basket = svc.basket("alice").unwrap();
        assert!(basket.iter().all(|l| l.product_id != 42));
        assert_eq!(basket.len(), 1);
    }

    #[tokio::test]
    async fn modify_below_zero_also_removes_the_line() {
        let svc = service();
        svc.add("alice", 42, 2).await.unwrap();

        svc.modify("alice", 42, -5).unwrap();

        // basket stays readable (subject is still known), just empty
        assert!(svc.basket("alice").unwrap().is_empty());
    }

    #[tokio::test]
    async fn modify_can_increase_units() {
        let svc = service();
        svc.add("alice", 42, 2).await.unwrap();

        svc.modify("alice", 42, 4).unwrap();
        assert_eq!(svc.basket("alice").unwrap()[0].units, 6);
    }

    #[tokio::test]
    async fn modify_without_basket_is_subject_not_found() {
        let svc = service();
        assert!(matches!(
            svc.modify("alice", 42, -1),
            Err(BasketError::SubjectNotFound)
        ));
    }

    #[tokio::test]
    async fn modify_of_absent_product_is_line_not_found() {
        let svc = service();
        svc.add("alice", 42, 1).await.unwrap();
        assert!(matches!(
            svc.modify("alice", 7, 1),
            Err(BasketError::LineNotFound)
        ));
    }

    #[tokio::test]
    async fn concurrent_adds_to_one_subject_do_not_lose_updates() {
        let svc = Arc::new(service());

        let a = {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move { svc.add("alice", 42, 1).await })
        };
        let b = {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move { svc.add("alice", 7, 1).await })
        };

        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let basket = svc.basket("alice").unwrap();
        assert_eq!(basket.len(), 2);
        assert!(basket.iter().any(|l| l.product_id == 42));
        assert!(basket.iter().any(|l| l.product_id == 7));
    }

    #[tokio::test]
    async fn baskets_are_isolated_per_subject() {
        let svc = service();
        svc.add("alice", 42, 1).await.unwrap();
        svc.add("bob", 7, 2).await.unwrap();

        assert_eq!(svc.basket("alice").unwrap()[0].product_id, 42);
        assert_eq!(svc.basket("bob").unwrap()[0].product_id, 7);
    }
}
