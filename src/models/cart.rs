use serde::{Deserialize, Serialize};

use super::product::Product;

/// One cart line: a product snapshot plus how many of it.
///
/// The full product is embedded, not just its id, so the cart renders and
/// totals without a catalog lookup and survives catalog edits between
/// visits. Serialized shape matches the records earlier builds of the shop
/// left in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// The shopping cart.
///
/// Holds at most one line per product id: adding a product already present
/// merges into the existing line and keeps its position. Order of lines is
/// first-add order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from persisted lines, as-is.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity currently in the cart for a product, zero when absent.
    pub fn quantity_of(&self, product_id: u32) -> u32 {
        self.items
            .iter()
            .find(|item| item.product.id == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Total number of units across all lines. Drives the header badge.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Put `quantity` more of `product` in the cart. Merges into the
    /// existing line when the product is already present; adding zero is a
    /// no-op so a line can never hold quantity zero.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity,
            });
        }
    }

    /// Set a line to exactly `quantity`. Zero removes the line; a product
    /// id not in the cart is left alone.
    pub fn set_quantity(&mut self, product_id: u32, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product_id)
        {
            item.quantity = quantity;
        }
    }

    /// Drop a line. Unknown ids are a no-op.
    pub fn remove(&mut self, product_id: u32) {
        self.items.retain(|item| item.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::{Category, PetType};

    fn product(id: u32, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            category: Category::Toys,
            pet_type: PetType::Both,
            price,
            image: String::new(),
            description: String::new(),
            stock: 10,
        }
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_add_merges_into_existing_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.5), 2);
        cart.add(&product(1, 2.5), 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(1), 5);
    }

    #[test]
    fn test_merge_keeps_line_position() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.5), 1);
        cart.add(&product(2, 4.0), 1);
        cart.add(&product(1, 2.5), 1);
        let ids: Vec<u32> = cart.items().iter().map(|item| item.product.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_add_zero_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.5), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.5), 4);
        cart.set_quantity(1, 2);
        assert_eq!(cart.quantity_of(1), 2);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.5), 2);
        cart.add(&product(2, 4.0), 1);
        cart.set_quantity(1, 0);
        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, 2);
    }

    #[test]
    fn test_set_quantity_on_missing_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.5), 1);
        cart.set_quantity(99, 5);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(99), 0);
    }

    #[test]
    fn test_remove_drops_only_that_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.5), 1);
        cart.add(&product(2, 4.0), 2);
        cart.remove(1);
        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.quantity_of(2), 2);
    }

    #[test]
    fn test_totals_follow_quantities() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.5), 2);
        cart.add(&product(2, 4.0), 3);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), 17.0);
        assert_eq!(cart.items()[1].line_total(), 12.0);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.5), 2);
        cart.clear();
        assert!(cart.is_empty());
    }
}

#[cfg(test)]
mod property_tests {
    use std::collections::{HashMap, HashSet};

    use proptest::prelude::*;

    use super::*;
    use crate::models::product::{Category, PetType};

    fn product(id: u32) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            category: Category::Supplies,
            pet_type: PetType::Both,
            price: f64::from(id) * 0.25,
            image: String::new(),
            description: String::new(),
            stock: 10,
        }
    }

    proptest! {
        #[test]
        fn cart_never_holds_two_lines_for_one_product(
            adds in proptest::collection::vec((1u32..8, 1u32..5), 0..40)
        ) {
            let mut cart = Cart::new();
            for (id, quantity) in &adds {
                cart.add(&product(*id), *quantity);
            }
            let mut seen = HashSet::new();
            for item in cart.items() {
                prop_assert!(seen.insert(item.product.id));
                prop_assert!(item.quantity > 0);
            }
        }

        #[test]
        fn quantities_accumulate_per_product(
            adds in proptest::collection::vec((1u32..8, 1u32..5), 0..40)
        ) {
            let mut cart = Cart::new();
            let mut expected: HashMap<u32, u32> = HashMap::new();
            for (id, quantity) in &adds {
                cart.add(&product(*id), *quantity);
                *expected.entry(*id).or_default() += *quantity;
            }
            for (id, total) in &expected {
                prop_assert_eq!(cart.quantity_of(*id), *total);
            }
            prop_assert_eq!(cart.items().len(), expected.len());
            prop_assert_eq!(cart.item_count(), expected.values().sum::<u32>());
        }

        #[test]
        fn setting_zero_equals_removing(
            ids in proptest::collection::vec(1u32..8, 1..20),
            target in 1u32..8
        ) {
            let mut via_set = Cart::new();
            for id in &ids {
                via_set.add(&product(*id), 1);
            }
            let mut via_remove = via_set.clone();

            via_set.set_quantity(target, 0);
            via_remove.remove(target);
            prop_assert_eq!(via_set, via_remove);
        }
    }
}
