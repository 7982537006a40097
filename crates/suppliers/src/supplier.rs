use serde::{Deserialize, Serialize};

use chainsight_core::{DomainError, DomainResult, Entity, SupplierId};

/// Historical delivery-performance rating of a supplier, always in `0..=100`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ReliabilityScore(u8);

impl ReliabilityScore {
    pub const MAX: u8 = 100;

    pub fn new(score: u8) -> DomainResult<Self> {
        if score > Self::MAX {
            return Err(DomainError::validation(format!(
                "reliability score must be within 0..=100 (got {score})"
            )));
        }
        Ok(Self(score))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ReliabilityScore {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReliabilityScore> for u8 {
    fn from(value: ReliabilityScore) -> Self {
        value.0
    }
}

impl core::fmt::Display for ReliabilityScore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Active,
    Inactive,
}

/// A supplier as seen in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub location: String,
    pub reliability_score: ReliabilityScore,
    pub average_delivery_days: u32,
    pub contact_email: String,
    pub status: SupplierStatus,
}

impl Supplier {
    /// Build an active supplier; optional attributes are set with the `with_*` methods.
    pub fn new(id: SupplierId, name: impl Into<String>, reliability_score: u8) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            location: String::new(),
            reliability_score: ReliabilityScore::new(reliability_score)?,
            average_delivery_days: 0,
            contact_email: String::new(),
            status: SupplierStatus::Active,
        })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_average_delivery_days(mut self, days: u32) -> Self {
        self.average_delivery_days = days;
        self
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = email.into();
        self
    }

    pub fn with_status(mut self, status: SupplierStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == SupplierStatus::Active
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
