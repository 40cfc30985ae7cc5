//! Product card UI binding for storefront views.
//!
//! This crate provides the client-side glue between resolved product data
//! and a card view:
//!
//! - **Snapshot**: [`ProductCardSnapshot`] - one fully-resolved render
//!   pass of card data (image, labels, name, rating, prices, links)
//! - **Slots**: [`CardSlots`] - named, possibly-absent view element
//!   references, discovered by naming convention or registered explicitly
//! - **Binder**: [`ProductCardBinder`] - applies a snapshot to the bound
//!   slots and raises [`CardEvent`]s for external widgets
//!
//! # Example
//!
//! ```rust
//! use shop_ui::prelude::*;
//!
//! let slots = CardSlots::builder()
//!     .name(Element::new())
//!     .add_to_cart(Element::new())
//!     .build();
//! let mut card = ProductCardBinder::new(slots, "is-hidden");
//!
//! card.on_event(|event| match event {
//!     CardEvent::UpdateRating { rating } => println!("rating: {rating}"),
//!     CardEvent::UpdateAddToCartUrl { sku } => println!("sku: {sku}"),
//! });
//!
//! card.update_product_item_data(&ProductCardSnapshot {
//!     name_value: "Red Mug".to_string(),
//!     add_to_cart_url: "/cart/add/ABC-123".to_string(),
//!     ..Default::default()
//! });
//!
//! assert_eq!(card.name_value().as_deref(), Some("Red Mug"));
//! ```

pub mod binder;
pub mod element;
pub mod error;
pub mod events;
pub mod slots;
pub mod snapshot;

pub use binder::ProductCardBinder;
pub use element::Element;
pub use error::CardError;
pub use events::{CardEvent, EVENT_UPDATE_ADD_TO_CART_URL, EVENT_UPDATE_RATING};
pub use slots::{CardConfig, CardSlots, LabelSlot};
pub use snapshot::{ProductCardSnapshot, ProductLabel};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::binder::ProductCardBinder;
    pub use crate::element::Element;
    pub use crate::error::CardError;
    pub use crate::events::{
        CardEvent, EventDispatcher, EVENT_UPDATE_ADD_TO_CART_URL, EVENT_UPDATE_RATING,
    };
    pub use crate::slots::{
        CardConfig, CardSlots, CardSlotsBuilder, LabelSlot, ATTR_CLASS_TO_TOGGLE,
        ATTR_CONFIG_NAME,
    };
    pub use crate::snapshot::{ProductCardSnapshot, ProductLabel};
}
