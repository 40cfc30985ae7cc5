//! Card events and listener dispatch.
//!
//! The binder never writes the rating slot and never assumes something is
//! listening for cart updates; both concerns belong to whatever widget the
//! host wires up next to the card (a star-rating widget, a cart badge).
//! They are reached through a listener seam instead of a hard-wired call.

use serde::Serialize;

/// Event name raised when the product rating has been updated.
pub const EVENT_UPDATE_RATING: &str = "updateRating";
/// Event name raised when the product add-to-cart URL has been updated.
pub const EVENT_UPDATE_ADD_TO_CART_URL: &str = "updateAddToCartUrl";

/// An outbound card notification and its payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CardEvent {
    /// The rating changed; an external rating widget consumes this.
    UpdateRating { rating: f64 },
    /// The add-to-cart target changed; `sku` is the URL's final segment.
    UpdateAddToCartUrl { sku: String },
}

impl CardEvent {
    /// The event's wire name.
    pub fn name(&self) -> &'static str {
        match self {
            CardEvent::UpdateRating { .. } => EVENT_UPDATE_RATING,
            CardEvent::UpdateAddToCartUrl { .. } => EVENT_UPDATE_ADD_TO_CART_URL,
        }
    }
}

/// Synchronous fire-and-forget listener dispatch.
///
/// Listeners run in registration order; a listener cannot cancel the
/// update in progress, and the binder does not depend on listener
/// completion.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<Box<dyn FnMut(&CardEvent)>>,
}

impl EventDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for all card events.
    pub fn subscribe(&mut self, listener: impl FnMut(&CardEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Emit an event to every listener, in registration order.
    pub fn emit(&mut self, event: &CardEvent) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_event_names() {
        let rating = CardEvent::UpdateRating { rating: 4.5 };
        let cart = CardEvent::UpdateAddToCartUrl {
            sku: "ABC-123".to_string(),
        };
        assert_eq!(rating.name(), "updateRating");
        assert_eq!(cart.name(), "updateAddToCartUrl");
    }

    #[test]
    fn test_payload_wire_shape() {
        let rating = CardEvent::UpdateRating { rating: 4.5 };
        assert_eq!(
            serde_json::to_string(&rating).unwrap(),
            r#"{"rating":4.5}"#
        );
        let cart = CardEvent::UpdateAddToCartUrl {
            sku: "ABC-123".to_string(),
        };
        assert_eq!(serde_json::to_string(&cart).unwrap(), r#"{"sku":"ABC-123"}"#);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        let first = seen.clone();
        dispatcher.subscribe(move |_| first.borrow_mut().push("first"));
        let second = seen.clone();
        dispatcher.subscribe(move |_| second.borrow_mut().push("second"));

        dispatcher.emit(&CardEvent::UpdateRating { rating: 3.0 });
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
        assert_eq!(dispatcher.listener_count(), 2);
    }

    #[test]
    fn test_emit_with_no_listeners_is_noop() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.emit(&CardEvent::UpdateAddToCartUrl {
            sku: String::new(),
        });
    }
}
