use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chainsight_core::{AlertId, Entity, ProductId, SupplierId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowStock,
    SupplierDelay,
    QualityIssue,
    ReorderNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

/// An alert, optionally pointing at the product and/or supplier it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    pub product_id: Option<ProductId>,
    pub supplier_id: Option<SupplierId>,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Build an unresolved alert.
    pub fn new(
        id: AlertId,
        kind: AlertKind,
        severity: AlertSeverity,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            severity,
            message: message.into(),
            product_id: None,
            supplier_id: None,
            is_resolved: false,
            created_at,
        }
    }

    pub fn for_product(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn for_supplier(mut self, supplier_id: SupplierId) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    pub fn resolved(mut self) -> Self {
        self.is_resolved = true;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.is_resolved
    }
}

impl Entity for Alert {
    type Id = AlertId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
