use serde::{Deserialize, Serialize};

use chainsight_core::{DomainError, DomainResult, Entity, Money, ProductId, SupplierId};

/// A catalog product and its replenishment policy.
///
/// `supplier_id` is a reference only; a product does not own its supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub unit_price: Money,
    /// Available-stock threshold at or below which the product needs reordering.
    pub reorder_point: u32,
    pub reorder_quantity: u32,
    pub supplier_id: SupplierId,
}

impl Product {
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        supplier_id: SupplierId,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        let name = name.into();

        if sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            sku,
            category: String::new(),
            unit_price: Money::ZERO,
            reorder_point: 0,
            reorder_quantity: 0,
            supplier_id,
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_unit_price(mut self, unit_price: Money) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn with_reorder_policy(mut self, reorder_point: u32, reorder_quantity: u32) -> Self {
        self.reorder_point = reorder_point;
        self.reorder_quantity = reorder_quantity;
        self
    }

    /// Cost of one standard replenishment order (`reorder_quantity × unit_price`).
    pub fn reorder_value(&self) -> Money {
        self.unit_price.times(u64::from(self.reorder_quantity))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new(ProductId::new(), "WID-001", "Widget", SupplierId::new()).unwrap()
    }

    #[test]
    fn new_product_has_empty_policy() {
        let p = widget();
        assert_eq!(p.unit_price, Money::ZERO);
        assert_eq!(p.reorder_point, 0);
        assert_eq!(p.reorder_quantity, 0);
        assert_eq!(p.reorder_value(), Money::ZERO);
    }

    #[test]
    fn rejects_empty_sku() {
        let err = Product::new(ProductId::new(), "", "Widget", SupplierId::new()).unwrap_err();
        assert_eq!(err, DomainError::validation("sku cannot be empty"));
    }

    #[test]
    fn rejects_empty_name() {
        let err = Product::new(ProductId::new(), "WID-001", " ", SupplierId::new()).unwrap_err();
        assert_eq!(err, DomainError::validation("name cannot be empty"));
    }

    #[test]
    fn reorder_value_multiplies_quantity_by_price() {
        let p = widget()
            .with_unit_price(Money::from_cents(8999))
            .with_reorder_policy(50, 200);
        assert_eq!(p.reorder_value(), Money::from_cents(1_799_800));
    }

    #[test]
    fn unit_price_serializes_as_cents() {
        let p = widget().with_unit_price(Money::from_cents(1250));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["unit_price"], serde_json::json!(1250));
    }
}
