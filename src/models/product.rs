use serde::{Deserialize, Serialize};

/// Merchandise categories carried by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Drink,
    Medicine,
    Supplies,
    Toys,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::Drink,
        Self::Medicine,
        Self::Supplies,
        Self::Toys,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Drink => "Drinks",
            Self::Medicine => "Medicine",
            Self::Supplies => "Supplies",
            Self::Toys => "Toys",
        }
    }
}

/// Which animal a product is meant for. `Both` products match either
/// animal when the shop grid is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Cat,
    Dog,
    Both,
}

impl PetType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cat => "Cats",
            Self::Dog => "Dogs",
            Self::Both => "Cats & dogs",
        }
    }

    /// Whether a product tagged `self` should show up when the shopper
    /// filters for `wanted`.
    pub fn suits(self, wanted: Self) -> bool {
        self == Self::Both || self == wanted
    }
}

/// A catalog entry. Products are reference data: the app reads them but
/// never changes them, so `stock` is a display hint rather than a ledger.
///
/// Serialized field names stay camelCase to match the records earlier
/// builds of the shop left in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub pet_type: PetType,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub stock: u32,
}

impl Product {
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
