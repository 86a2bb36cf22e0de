use serde::{Deserialize, Serialize};

/// A buyer's cart as returned by the cart API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    pub buyer_id: String,
    #[serde(default)]
    pub items: Vec<CartItemDto>,
}

impl CartDto {
    /// Sum of unit price times quantity over all items
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.unit_price * item.quantity as f64)
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub unit_price: f64,
    pub old_unit_price: f64,
    pub quantity: u32,
    pub picture_url: String,
}
