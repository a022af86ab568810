//! End-to-end session flows over the in-memory storage backend.
//!
//! Everything here runs natively: the storage port keeps the browser out
//! of the loop, so these cover the same coordinator the UI drives.

use gaumeoshop_ui::catalog;
use gaumeoshop_ui::models::{Page, Product, Role, User};
use gaumeoshop_ui::state::Session;
use gaumeoshop_ui::storage::{MemoryStorage, StorageBackend, CART_KEY, USER_KEY};

fn catalog_product(id: u32) -> Product {
    catalog::products()
        .into_iter()
        .find(|p| p.id == id)
        .expect("product missing from catalog")
}

fn shopper() -> User {
    User {
        id: 7,
        email: "linh@example.com".to_string(),
        name: "Linh".to_string(),
        role: Role::User,
    }
}

#[test]
fn full_shopper_journey() {
    let backend = MemoryStorage::new();
    let (mut session, errors) = Session::restore(backend.clone());
    assert!(errors.is_empty());
    assert_eq!(session.current_page(), Page::Home);

    // Browse to the shop, open a product, put two in the cart.
    session.navigate_slug("shop");
    let food = catalog_product(1);
    session.view_product(food.clone());
    assert_eq!(session.current_page(), Page::ProductDetail);
    session.add_to_cart(&food, 2).unwrap();

    // Grab a toy from the grid as well.
    let toy = catalog_product(11);
    session.add_to_cart(&toy, 1).unwrap();
    assert_eq!(session.cart().item_count(), 3);

    // Signing in mid-journey routes home and leaves the cart alone.
    session.login(shopper()).unwrap();
    assert_eq!(session.current_page(), Page::Home);
    assert_eq!(session.cart().item_count(), 3);

    // Check out.
    session.navigate(Page::Checkout);
    session.checkout("ORD-1737000000000".to_string()).unwrap();
    assert_eq!(session.current_page(), Page::OrderSuccess);
    assert!(session.cart().is_empty());
    assert_eq!(session.last_order_id(), Some("ORD-1737000000000"));

    // The cart record is gone; the user record survives.
    assert_eq!(backend.get(CART_KEY).unwrap(), None);
    assert!(backend.get(USER_KEY).unwrap().is_some());
}

#[test]
fn cart_and_user_survive_a_reload() {
    let backend = MemoryStorage::new();

    let mut first = Session::new(backend.clone());
    first.login(shopper()).unwrap();
    first.add_to_cart(&catalog_product(2), 1).unwrap();
    first.add_to_cart(&catalog_product(9), 2).unwrap();
    first.navigate(Page::Cart);
    drop(first);

    // A reload starts a fresh session over the same storage. Page and
    // selections reset; user and cart come back.
    let (second, errors) = Session::restore(backend);
    assert!(errors.is_empty());
    assert_eq!(second.current_page(), Page::Home);
    assert_eq!(second.user().map(|u| u.name.as_str()), Some("Linh"));
    assert_eq!(second.cart().quantity_of(2), 1);
    assert_eq!(second.cart().quantity_of(9), 2);
    assert_eq!(second.cart().item_count(), 3);
}

#[test]
fn corrupt_records_never_block_startup() {
    let backend = MemoryStorage::new();
    backend.set(USER_KEY, "{oops").unwrap();
    backend.set(CART_KEY, "\"not a list\"").unwrap();

    let (session, errors) = Session::restore(backend.clone());
    assert_eq!(errors.len(), 2);
    assert!(session.user().is_none());
    assert!(session.cart().is_empty());

    // The session works normally afterwards and overwrites the bad record.
    let mut session = session;
    session.add_to_cart(&catalog_product(4), 1).unwrap();
    let raw = backend.get(CART_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));
}

#[test]
fn persisted_cart_keeps_the_legacy_wire_format() {
    let backend = MemoryStorage::new();
    let mut session = Session::new(backend.clone());
    session.add_to_cart(&catalog_product(4), 2).unwrap();

    let raw = backend.get(CART_KEY).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let line = &parsed[0];

    assert_eq!(line["quantity"], 2);
    assert_eq!(line["product"]["petType"], "both");
    assert_eq!(line["product"]["category"], "drink");
    assert!(line["product"].get("pet_type").is_none());
}

#[test]
fn persisted_user_keeps_the_legacy_wire_format() {
    let backend = MemoryStorage::new();
    let mut session = Session::new(backend.clone());
    session
        .login(User {
            id: 1,
            email: "admin@gaumeo.shop".to_string(),
            name: "Quan".to_string(),
            role: Role::Admin,
        })
        .unwrap();
    assert_eq!(session.current_page(), Page::Admin);

    let raw = backend.get(USER_KEY).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["role"], "admin");
    assert_eq!(parsed["email"], "admin@gaumeo.shop");
}
