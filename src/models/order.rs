use serde::{Deserialize, Serialize};

use super::cart::CartItem;

/// Progress of an order through fulfilment. Orders are created `Pending`;
/// the shop has no backend, so nothing moves them forward yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

/// Where an order ships to, straight from the checkout form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

/// A placed order: the cart snapshot at checkout plus delivery details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: u32,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: String,
    pub shipping_address: ShippingAddress,
}

impl Order {
    /// Assemble a pending order. The total is computed from the lines, not
    /// passed in, so it can never disagree with them.
    pub fn new(
        id: impl Into<String>,
        user_id: u32,
        items: Vec<CartItem>,
        created_at: impl Into<String>,
        shipping_address: ShippingAddress,
    ) -> Self {
        let total = items.iter().map(CartItem::line_total).sum();
        Self {
            id: id.into(),
            user_id,
            items,
            total,
            status: OrderStatus::Pending,
            created_at: created_at.into(),
            shipping_address,
        }
    }
}
