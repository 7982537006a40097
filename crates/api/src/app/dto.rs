use serde::{Deserialize, Serialize};

use chainsight_analysis::{InventoryLine, ShipmentLine};
use chainsight_inventory::InventoryRecord;
use chainsight_shipments::Shipment;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

// -------------------------
// JSON views
// -------------------------

/// Inventory record joined with its product.
#[derive(Debug, Serialize)]
pub struct InventoryView<'a> {
    #[serde(flatten)]
    pub record: &'a InventoryRecord,
    pub product_name: &'a str,
    pub needs_reorder: bool,
}

impl<'a> From<&InventoryLine<'a>> for InventoryView<'a> {
    fn from(line: &InventoryLine<'a>) -> Self {
        Self {
            record: line.record,
            product_name: line.product_name(),
            needs_reorder: line.needs_reorder(),
        }
    }
}

/// Shipment joined with its supplier and product names.
#[derive(Debug, Serialize)]
pub struct ShipmentView<'a> {
    #[serde(flatten)]
    pub shipment: &'a Shipment,
    pub supplier_name: &'a str,
    pub product_name: &'a str,
}

impl<'a> From<&ShipmentLine<'a>> for ShipmentView<'a> {
    fn from(line: &ShipmentLine<'a>) -> Self {
        Self {
            shipment: line.shipment,
            supplier_name: line.supplier_name,
            product_name: line.product_name,
        }
    }
}
