//! Product card binder.
//!
//! Applies a [`ProductCardSnapshot`] to a bound card view and notifies
//! listeners of rating and add-to-cart changes. Each update is a full,
//! stateless re-render: the binder holds no state across snapshots beyond
//! the slots themselves.

use tracing::trace;

use crate::element::Element;
use crate::events::{CardEvent, EventDispatcher};
use crate::slots::{CardConfig, CardSlots, ATTR_CONFIG_NAME};
use crate::snapshot::{ProductCardSnapshot, ProductLabel};

/// Synchronizes one product card view with externally supplied data.
///
/// Created once per card view and discarded with it. Updates never fail:
/// writes to unbound slots are skipped, and labels beyond the bound slot
/// count are truncated.
pub struct ProductCardBinder {
    slots: CardSlots,
    class_to_toggle: String,
    dispatcher: EventDispatcher,
}

impl ProductCardBinder {
    /// Bind explicitly registered slots.
    pub fn new(slots: CardSlots, class_to_toggle: impl Into<String>) -> Self {
        Self {
            slots,
            class_to_toggle: class_to_toggle.into(),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Bind by discovering slots under `root` with the card naming
    /// convention.
    pub fn attach(root: &Element, config: &CardConfig) -> Self {
        Self::new(CardSlots::discover(root, config), &config.class_to_toggle)
    }

    /// Register a listener for this card's outbound events.
    pub fn on_event(&mut self, listener: impl FnMut(&CardEvent) + 'static) {
        self.dispatcher.subscribe(listener);
    }

    /// The bound slots.
    pub fn slots(&self) -> &CardSlots {
        &self.slots
    }

    /// Apply a snapshot to the view.
    ///
    /// Field updates are independent and order-insensitive; rating and
    /// add-to-cart additionally emit their events after the visual update.
    pub fn update_product_item_data(&mut self, data: &ProductCardSnapshot) {
        trace!(
            name = %data.name_value,
            labels = data.labels.len(),
            "applying card snapshot"
        );
        self.apply_image_url(&data.image_url);
        self.apply_labels(&data.labels);
        self.apply_name(&data.name_value);
        self.apply_rating(data.rating_value);
        self.apply_default_price(&data.default_price);
        self.apply_original_price(&data.original_price);
        self.apply_detail_page_url(&data.detail_page_url);
        self.apply_add_to_cart_url(&data.add_to_cart_url, data.add_to_cart_sku());
    }

    fn apply_image_url(&self, image_url: &str) {
        if let Some(image) = &self.slots.image {
            image.set_attribute("src", image_url);
        }
    }

    fn apply_labels(&self, labels: &[ProductLabel]) {
        if labels.is_empty() {
            for slot in &self.slots.labels {
                slot.element.add_class(&self.class_to_toggle);
            }
            return;
        }

        // Positional match; excess labels are truncated to the bound
        // slot count, slots past the supplied labels stay untouched.
        for (slot, label) in self.slots.labels.iter().zip(labels) {
            if let Some(config_name) = slot.element.attribute(ATTR_CONFIG_NAME) {
                slot.element
                    .add_class(format!("{}--{}", config_name, label.label_type));
            }
            slot.element.remove_class(&self.class_to_toggle);
            if let Some(text) = &slot.text {
                text.set_text(&label.text);
            }
        }
    }

    fn apply_name(&self, name: &str) {
        if let Some(slot) = &self.slots.name {
            slot.set_text(name);
        }
    }

    // The rating slot is never written here; a separate rating widget
    // listening for the event owns that rendering.
    fn apply_rating(&mut self, rating: f64) {
        self.dispatcher.emit(&CardEvent::UpdateRating { rating });
    }

    fn apply_default_price(&self, price: &str) {
        if let Some(slot) = &self.slots.default_price {
            slot.set_text(price);
        }
    }

    fn apply_original_price(&self, price: &str) {
        if let Some(slot) = &self.slots.original_price {
            slot.set_text(price);
        }
    }

    fn apply_detail_page_url(&self, url: &str) {
        for link in &self.slots.detail_links {
            link.set_attribute("href", url);
        }
    }

    // Emits whether or not the link slot is bound.
    fn apply_add_to_cart_url(&mut self, url: &str, sku: &str) {
        if let Some(link) = &self.slots.add_to_cart {
            link.set_attribute("href", url);
        }
        self.dispatcher.emit(&CardEvent::UpdateAddToCartUrl {
            sku: sku.to_string(),
        });
    }

    /// Image URL read back from the view, `None` if the slot is unbound.
    pub fn image_url(&self) -> Option<String> {
        self.slots.image.as_ref().and_then(|el| el.attribute("src"))
    }

    /// Product name read back from the view.
    pub fn name_value(&self) -> Option<String> {
        self.slots.name.as_ref().map(|el| el.text())
    }

    /// Rating parsed from the rating slot's raw `value` attribute.
    pub fn rating_value(&self) -> Option<f64> {
        self.slots
            .rating
            .as_ref()
            .and_then(|el| el.attribute("value"))
            .and_then(|raw| raw.parse().ok())
    }

    /// Current price read back from the view.
    pub fn default_price(&self) -> Option<String> {
        self.slots.default_price.as_ref().map(|el| el.text())
    }

    /// Original price read back from the view.
    pub fn original_price(&self) -> Option<String> {
        self.slots.original_price.as_ref().map(|el| el.text())
    }

    /// Detail page URL read back from the first bound link.
    pub fn detail_page_url(&self) -> Option<String> {
        self.slots
            .detail_links
            .first()
            .and_then(|el| el.attribute("href"))
    }

    /// Add-to-cart URL read back from the view.
    pub fn add_to_cart_url(&self) -> Option<String> {
        self.slots
            .add_to_cart
            .as_ref()
            .and_then(|el| el.attribute("href"))
    }
}
