//! Shopping cart module.
//!
//! Contains the line item constructor, the cart, and the observable
//! [`CartStore`] that UI components go through.

mod cart;
mod event;
mod line_item;
mod store;

pub use cart::Cart;
pub use event::{CartEvent, SubscriptionId};
pub use line_item::{parse_quantity, CartProduct, LineItem};
pub use store::{CartState, CartStore};
