//! The cart manager shared by every storefront component.
//!
//! Components never touch [`Cart`] directly. They call the operations on
//! [`CartStore`], which apply the change, then synchronously notify every
//! subscriber in registration order. Invalid requests (non-positive
//! quantities, blank ids, currency mismatches, overflow) are dropped and logged at
//! `debug`; nothing is returned to the caller except whether the cart
//! changed.

use crate::cart::{Cart, CartEvent, CartProduct, SubscriptionId};
use crate::config::CartConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use std::fmt;
use tracing::{debug, error, trace};

type Listener = Box<dyn FnMut(&CartEvent, &CartState)>;

/// Read-only view handed to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    cart: Cart,
    is_open: bool,
}

impl CartState {
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether the cart panel is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Sum of quantities across all lines.
    pub fn count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Sum of `price * quantity` across all lines.
    pub fn total(&self) -> Money {
        // Every mutation is rolled back if the subtotal would overflow.
        self.cart.subtotal().unwrap_or_else(|e| {
            error!(error = %e, "cart subtotal unavailable");
            Money::zero(self.cart.currency())
        })
    }
}

/// Observable cart state plus the cart panel's visibility flag.
pub struct CartStore {
    state: CartState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty, closed cart.
    pub fn new(config: CartConfig) -> Self {
        Self {
            state: CartState {
                cart: Cart::new(config),
                is_open: false,
            },
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add a product, merging with an existing line for the same id.
    ///
    /// The quantity is `quantity`, else the descriptor's own quantity, else 1.
    /// Returns false if the request was ignored.
    pub fn add_to_cart(&mut self, product: &CartProduct, quantity: Option<i64>) -> bool {
        let added = quantity.or(product.quantity).unwrap_or(1);
        match self.state.cart.add_item(product, added) {
            Ok(line_quantity) => {
                debug!(product_id = %product.id, added, quantity = line_quantity, "added to cart");
                self.notify(CartEvent::ItemAdded {
                    id: product.id.clone(),
                    added,
                    quantity: line_quantity,
                });
                true
            }
            Err(e) => {
                ignored("add_to_cart", &product.id, &e);
                false
            }
        }
    }

    /// Remove a product's line. Absent ids are a no-op.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        if !self.state.cart.remove_item(id) {
            trace!(product_id = %id, "remove_from_cart: not in cart");
            return false;
        }
        debug!(product_id = %id, "removed from cart");
        self.notify(CartEvent::ItemRemoved { id: id.clone() });
        true
    }

    /// Replace a line's quantity. Zero or less removes the line; absent ids
    /// are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }
        match self.state.cart.update_quantity(id, quantity) {
            Ok(true) => {
                debug!(product_id = %id, quantity, "cart quantity updated");
                self.notify(CartEvent::QuantityChanged {
                    id: id.clone(),
                    quantity,
                });
                true
            }
            Ok(false) => {
                trace!(product_id = %id, quantity, "update_quantity: nothing to change");
                false
            }
            Err(e) => {
                ignored("update_quantity", id, &e);
                false
            }
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        if self.state.cart.is_empty() {
            return;
        }
        self.state.cart.clear();
        debug!("cart cleared");
        self.notify(CartEvent::Cleared);
    }

    /// Sum of quantities across all lines; 0 when empty.
    pub fn cart_count(&self) -> i64 {
        self.state.count()
    }

    /// Sum of `price * quantity` across all lines; zero when empty.
    pub fn cart_total(&self) -> Money {
        self.state.total()
    }

    /// Flip the panel's visibility.
    pub fn toggle_cart(&mut self) {
        self.set_open(!self.state.is_open);
    }

    /// Show the panel.
    pub fn open_cart(&mut self) {
        self.set_open(true);
    }

    /// Hide the panel.
    pub fn close_cart(&mut self) {
        self.set_open(false);
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Register a listener called after every effective change.
    ///
    /// Listeners run on the caller's thread, in registration order, before
    /// the mutating operation returns.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent, &CartState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn set_open(&mut self, open: bool) {
        if self.state.is_open == open {
            return;
        }
        self.state.is_open = open;
        trace!(open, "cart visibility changed");
        self.notify(CartEvent::VisibilityChanged { open });
    }

    fn notify(&mut self, event: CartEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event, &self.state);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(CartConfig::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn ignored(operation: &str, id: &ProductId, error: &CommerceError) {
    debug!(operation, product_id = %id, error = %error, "cart request ignored");
}
