//! The session coordinator: single owner of all cross-page state.

use crate::models::{Cart, Page, Product, Role, User};
use crate::storage::{SessionStore, StorageBackend, StorageError};

/// Everything the app remembers between page switches: the visible page,
/// the signed-in user, the cart, and which product or post a detail page
/// is showing. Page views never hold their own copy of any of this; they
/// call the methods below and read the accessors.
///
/// User and cart changes are written through the storage port as they
/// happen. When a write fails the in-memory state still changes; the error
/// comes back to the caller for reporting.
pub struct Session<S: StorageBackend> {
    store: SessionStore<S>,
    current_page: Page,
    user: Option<User>,
    cart: Cart,
    selected_product: Option<Product>,
    selected_blog_id: Option<u32>,
    last_order_id: Option<String>,
}

impl<S: StorageBackend> Session<S> {
    /// A fresh session: home page, nobody signed in, empty cart.
    pub fn new(backend: S) -> Self {
        Self {
            store: SessionStore::new(backend),
            current_page: Page::Home,
            user: None,
            cart: Cart::new(),
            selected_product: None,
            selected_blog_id: None,
            last_order_id: None,
        }
    }

    /// Rehydrate the user and cart from their persisted records.
    ///
    /// A record that is missing loads as its default. A record that is
    /// present but malformed is dropped, the slot starts from its default,
    /// and the error is handed back. Startup never fails on bad data.
    pub fn restore(backend: S) -> (Self, Vec<StorageError>) {
        let mut session = Self::new(backend);
        let mut errors = Vec::new();
        match session.store.load_user() {
            Ok(user) => session.user = user,
            Err(err) => errors.push(err),
        }
        match session.store.load_cart() {
            Ok(items) => session.cart = Cart::from_items(items),
            Err(err) => errors.push(err),
        }
        (session, errors)
    }

    pub const fn current_page(&self) -> Page {
        self.current_page
    }

    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    pub const fn selected_blog_id(&self) -> Option<u32> {
        self.selected_blog_id
    }

    pub fn last_order_id(&self) -> Option<&str> {
        self.last_order_id.as_deref()
    }

    /// Show `page`. Any page can follow any other; this is view switching,
    /// not a protocol.
    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
    }

    /// Show the page named by `slug`. Unknown slugs land on home.
    pub fn navigate_slug(&mut self, slug: &str) {
        self.navigate(Page::from_slug(slug));
    }

    /// Sign in and route by role: admins land on the dashboard, everyone
    /// else goes home. The login form already fabricated `user`; nothing
    /// is verified here.
    pub fn login(&mut self, user: User) -> Result<(), StorageError> {
        let destination = if user.role == Role::Admin {
            Page::Admin
        } else {
            Page::Home
        };
        let persisted = self.store.save_user(&user);
        self.user = Some(user);
        self.navigate(destination);
        persisted
    }

    /// Sign out: drop the session user and its persisted record, go home.
    /// The cart is left alone.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.user = None;
        self.navigate(Page::Home);
        self.store.clear_user()
    }

    /// Put `quantity` more of `product` in the cart.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Result<(), StorageError> {
        self.cart.add(product, quantity);
        self.persist_cart()
    }

    /// Set a cart line to exactly `quantity`; zero removes it.
    pub fn update_cart_quantity(
        &mut self,
        product_id: u32,
        quantity: u32,
    ) -> Result<(), StorageError> {
        self.cart.set_quantity(product_id, quantity);
        self.persist_cart()
    }

    /// Drop a cart line. Ids not in the cart are a no-op.
    pub fn remove_from_cart(&mut self, product_id: u32) -> Result<(), StorageError> {
        self.cart.remove(product_id);
        self.persist_cart()
    }

    /// Empty the cart and delete its persisted record entirely, rather
    /// than writing an empty list.
    pub fn clear_cart(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.store.clear_cart()
    }

    /// Final step of the purchase flow: remember the order id, empty
    /// the cart, show the confirmation page. The checkout view built the
    /// order and generated its id; no payment or stock check happens here.
    pub fn checkout(&mut self, order_id: String) -> Result<(), StorageError> {
        self.last_order_id = Some(order_id);
        let persisted = self.clear_cart();
        self.navigate(Page::OrderSuccess);
        persisted
    }

    /// Remember the product and open its detail page.
    pub fn view_product(&mut self, product: Product) {
        self.selected_product = Some(product);
        self.navigate(Page::ProductDetail);
    }

    /// Remember the post id and open its detail page.
    pub fn view_blog(&mut self, blog_id: u32) {
        self.selected_blog_id = Some(blog_id);
        self.navigate(Page::BlogDetail);
    }

    fn persist_cart(&self) -> Result<(), StorageError> {
        self.store.save_cart(self.cart.items())
    }
}
