//! Change notifications emitted by the cart store.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An effective change to cart contents or panel visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A product was added or merged into an existing line.
    ItemAdded {
        id: ProductId,
        /// Quantity passed to this add.
        added: i64,
        /// Line quantity after the add.
        quantity: i64,
    },
    /// A line's quantity was replaced.
    QuantityChanged { id: ProductId, quantity: i64 },
    /// A line was removed.
    ItemRemoved { id: ProductId },
    /// All lines were removed.
    Cleared,
    /// The cart panel was shown or hidden.
    VisibilityChanged { open: bool },
}

impl CartEvent {
    /// Whether the event changed cart contents (as opposed to visibility).
    pub fn changes_contents(&self) -> bool {
        !matches!(self, CartEvent::VisibilityChanged { .. })
    }
}

/// Handle returned by `CartStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);
