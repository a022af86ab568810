pub mod session;
pub mod shop_state;

pub use session::Session;
pub use shop_state::{use_shop, ShopState};
