use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chainsight_core::{DomainError, DomainResult, Entity, ProductId, ShipmentId, SupplierId};

/// Shipment status. A closed set; transitions are owned by the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Ordered,
    InTransit,
    Delivered,
    Delayed,
    Cancelled,
}

impl ShipmentStatus {
    /// Ordered or in transit: still expected to arrive.
    pub fn is_active(self) -> bool {
        matches!(self, ShipmentStatus::Ordered | ShipmentStatus::InTransit)
    }
}

/// An inbound shipment of one product from one supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: ShipmentId,
    pub supplier_id: SupplierId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub order_date: DateTime<Utc>,
    pub expected_delivery_date: DateTime<Utc>,
    pub actual_delivery_date: Option<DateTime<Utc>>,
    pub status: ShipmentStatus,
    pub tracking_number: Option<String>,
    pub delay_reason: Option<String>,
}

impl Shipment {
    pub fn new(
        id: ShipmentId,
        supplier_id: SupplierId,
        product_id: ProductId,
        quantity: u32,
        order_date: DateTime<Utc>,
        expected_delivery_date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if expected_delivery_date < order_date {
            return Err(DomainError::invariant(
                "expected delivery date precedes order date",
            ));
        }

        Ok(Self {
            id,
            supplier_id,
            product_id,
            quantity,
            order_date,
            expected_delivery_date,
            actual_delivery_date: None,
            status: ShipmentStatus::Ordered,
            tracking_number: None,
            delay_reason: None,
        })
    }

    pub fn with_status(mut self, status: ShipmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    /// Mark the shipment delayed with a reason.
    pub fn delayed(mut self, reason: impl Into<String>) -> Self {
        self.status = ShipmentStatus::Delayed;
        self.delay_reason = Some(reason.into());
        self
    }

    pub fn delivered_at(mut self, at: DateTime<Utc>) -> Self {
        self.status = ShipmentStatus::Delivered;
        self.actual_delivery_date = Some(at);
        self
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// The delay reason, if one was recorded and is non-empty.
    pub fn delay_reason(&self) -> Option<&str> {
        self.delay_reason.as_deref().filter(|r| !r.is_empty())
    }
}

impl Entity for Shipment {
    type Id = ShipmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
