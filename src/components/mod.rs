pub mod about;
pub mod admin;
pub mod blog;
pub mod blog_detail;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod footer;
pub mod header;
pub mod home;
pub mod login;
pub mod order_success;
pub mod product_card;
pub mod product_detail;
pub mod shop;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use blog::BlogPage;
pub use blog_detail::BlogDetailPage;
pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use contact::ContactPage;
pub use footer::Footer;
pub use header::Header;
pub use home::HomePage;
pub use login::LoginPage;
pub use order_success::OrderSuccessPage;
pub use product_card::ProductCard;
pub use product_detail::ProductDetailPage;
pub use shop::ShopPage;
