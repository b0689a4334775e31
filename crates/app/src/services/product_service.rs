use std::sync::Arc;

use tracing::info;

use shoplite_core::{DomainError, DomainResult, ProductId};
use shoplite_store::ProductStore;

use crate::dto::ProductDto;

/// Catalog maintenance over a shared product store.
#[derive(Debug, Clone)]
pub struct ProductService {
    products: Arc<ProductStore>,
}

impl ProductService {
    pub fn new(products: Arc<ProductStore>) -> Self {
        Self { products }
    }

    /// Create a product from its wire shape. Id and price validation
    /// happen in the domain constructor.
    pub fn create(&self, dto: ProductDto) -> DomainResult<ProductDto> {
        let product = dto.into_product()?;
        let created = ProductDto::from_product(&product);
        self.products.insert(product)?;
        info!(product_id = created.product_id, name = %created.name, "product created");
        Ok(created)
    }

    pub fn get(&self, id: ProductId) -> Option<ProductDto> {
        self.products
            .get(id)
            .map(|product| ProductDto::from_product(&product))
    }

    /// Re-price a product. Existing order lines keep their snapshot of
    /// the old price; only future lookups see the new one.
    pub fn update_price(&self, id: ProductId, new_price: f64) -> DomainResult<ProductDto> {
        let current = self
            .products
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id} not found")))?;

        let mut updated = (*current).clone();
        updated.set_price(new_price)?;
        let dto = ProductDto::from_product(&updated);
        self.products.update(updated)?;
        info!(product_id = %id, price = new_price, "product price updated");
        Ok(dto)
    }

    pub fn list(&self) -> Vec<ProductDto> {
        self.products
            .all()
            .iter()
            .map(|product| ProductDto::from_product(product))
            .collect()
    }

    pub fn delete(&self, id: ProductId) -> DomainResult<()> {
        self.products.remove(id)?;
        info!(product_id = %id, "product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ProductService {
        ProductService::new(Arc::new(ProductStore::new()))
    }

    fn dto(id: i64, price: f64) -> ProductDto {
        ProductDto {
            product_id: id,
            name: format!("product-{id}"),
            price,
        }
    }

    #[test]
    fn create_then_get_roundtrips() {
        let service = service();
        let created = service.create(dto(1, 1500.0)).unwrap();

        let loaded = service.get(ProductId::new(1).unwrap()).unwrap();
        assert_eq!(loaded, created);
    }

    #[test]
    fn create_rejects_negative_prices() {
        let service = service();
        match service.create(dto(1, -1.0)).unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected validation error for negative price"),
        }
        assert!(service.list().is_empty());
    }

    #[test]
    fn update_price_changes_future_lookups() {
        let service = service();
        service.create(dto(1, 1500.0)).unwrap();

        let updated = service
            .update_price(ProductId::new(1).unwrap(), 1350.0)
            .unwrap();
        assert_eq!(updated.price, 1350.0);
        assert_eq!(service.get(ProductId::new(1).unwrap()).unwrap().price, 1350.0);
    }

    #[test]
    fn update_price_rejects_negative_and_unknown() {
        let service = service();
        service.create(dto(1, 10.0)).unwrap();

        match service
            .update_price(ProductId::new(1).unwrap(), -5.0)
            .unwrap_err()
        {
            DomainError::Validation(_) => {}
            _ => panic!("Expected validation error for negative price"),
        }
        assert_eq!(service.get(ProductId::new(1).unwrap()).unwrap().price, 10.0);

        match service
            .update_price(ProductId::new(9).unwrap(), 5.0)
            .unwrap_err()
        {
            DomainError::NotFound(_) => {}
            _ => panic!("Expected not-found error for unknown product"),
        }
    }

    #[test]
    fn list_is_ordered_by_id() {
        let service = service();
        service.create(dto(2, 2.0)).unwrap();
        service.create(dto(1, 1.0)).unwrap();

        let ids: Vec<i64> = service.list().iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn delete_removes_the_product() {
        let service = service();
        service.create(dto(1, 1.0)).unwrap();

        service.delete(ProductId::new(1).unwrap()).unwrap();
        assert!(service.get(ProductId::new(1).unwrap()).is_none());

        match service.delete(ProductId::new(1).unwrap()).unwrap_err() {
            DomainError::NotFound(_) => {}
            _ => panic!("Expected not-found error for second delete"),
        }
    }
}
