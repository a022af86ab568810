//! Gaumeo Shop: a client-side storefront for pet supplies.
//!
//! The whole app runs in the browser; there is no server. A single
//! session coordinator owns the cross-page state (visible page, signed-in
//! user, cart, detail selections) and the page components call back into
//! it through context. User and cart survive reloads via local storage.

pub mod app;
pub mod catalog;
pub mod components;
pub mod models;
pub mod state;
pub mod storage;
