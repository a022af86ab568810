//! Reactive shell around the session coordinator.

use leptos::prelude::*;

use crate::models::{CartItem, Page, Product, User};
use crate::state::session::Session;
use crate::storage::{LocalStorage, StorageError};

/// The context handle every component reaches the session through.
///
/// `Copy` so it drops into event closures without ceremony. The whole
/// session lives in one signal: reads go through `with`, mutations through
/// `update`, and every mutation notifies readers.
#[derive(Clone, Copy)]
pub struct ShopState {
    session: RwSignal<Session<LocalStorage>>,
}

impl ShopState {
    /// Restore the persisted session and wrap it for the component tree.
    /// Corrupt records were already dropped during restore; they are
    /// reported here and the app starts from defaults.
    pub fn restore() -> Self {
        let (session, errors) = Session::restore(LocalStorage);
        for error in &errors {
            web_sys::console::warn_1(
                &format!("storage (restore): dropping record: {error}").into(),
            );
        }
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn page(&self) -> Page {
        self.session.with(|s| s.current_page())
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn cart_items(&self) -> Vec<CartItem> {
        self.session.with(|s| s.cart().items().to_vec())
    }

    pub fn cart_count(&self) -> u32 {
        self.session.with(|s| s.cart().item_count())
    }

    pub fn cart_total(&self) -> f64 {
        self.session.with(|s| s.cart().total())
    }

    pub fn cart_is_empty(&self) -> bool {
        self.session.with(|s| s.cart().is_empty())
    }

    pub fn selected_product(&self) -> Option<Product> {
        self.session.with(|s| s.selected_product().cloned())
    }

    pub fn selected_blog_id(&self) -> Option<u32> {
        self.session.with(|s| s.selected_blog_id())
    }

    pub fn last_order_id(&self) -> Option<String> {
        self.session.with(|s| s.last_order_id().map(String::from))
    }

    pub fn navigate(&self, page: Page) {
        self.session.update(|s| s.navigate(page));
    }

    pub fn navigate_slug(&self, slug: &str) {
        self.session.update(|s| s.navigate_slug(slug));
    }

    pub fn login(&self, user: User) {
        self.run("login", |s| s.login(user));
    }

    pub fn logout(&self) {
        self.run("logout", Session::logout);
    }

    pub fn add_to_cart(&self, product: &Product, quantity: u32) {
        self.run("add to cart", |s| s.add_to_cart(product, quantity));
    }

    pub fn update_quantity(&self, product_id: u32, quantity: u32) {
        self.run("update cart", |s| s.update_cart_quantity(product_id, quantity));
    }

    pub fn remove_from_cart(&self, product_id: u32) {
        self.run("remove from cart", |s| s.remove_from_cart(product_id));
    }

    pub fn clear_cart(&self) {
        self.run("clear cart", Session::clear_cart);
    }

    pub fn checkout(&self, order_id: String) {
        self.run("checkout", |s| s.checkout(order_id));
    }

    pub fn view_product(&self, product: Product) {
        self.session.update(|s| s.view_product(product));
    }

    pub fn view_blog(&self, blog_id: u32) {
        self.session.update(|s| s.view_blog(blog_id));
    }

    /// Apply a fallible session operation; a persistence failure is
    /// reported and the in-memory change stands.
    fn run(
        &self,
        context: &str,
        op: impl FnOnce(&mut Session<LocalStorage>) -> Result<(), StorageError>,
    ) {
        let mut outcome = Ok(());
        self.session.update(|s| outcome = op(s));
        if let Err(error) = outcome {
            report_storage_error(context, &error);
        }
    }
}

/// Grab the shop state provided by the root `App`.
pub fn use_shop() -> ShopState {
    use_context::<ShopState>().expect("ShopState context missing")
}

fn report_storage_error(context: &str, error: &StorageError) {
    web_sys::console::error_1(&format!("storage ({context}): {error}").into());
}
