pub mod blog;
pub mod cart;
pub mod order;
pub mod page;
pub mod product;
pub mod user;

pub use blog::BlogPost;
pub use cart::{Cart, CartItem};
pub use order::{Order, OrderStatus, ShippingAddress};
pub use page::Page;
pub use product::{Category, PetType, Product};
pub use user::{Role, User};
