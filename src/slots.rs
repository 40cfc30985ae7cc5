//! Slot registration and discovery.
//!
//! A slot is a named, possibly-absent reference to a view element the
//! binder may read or write. Slots are captured once: either discovered
//! from a root element by the card's structural naming convention
//! (`{base}__image`, `{base}__label`, ...) or registered explicitly
//! through [`CardSlotsBuilder`]. Every later write is a guarded
//! optional-handle operation. Partial views are valid: a compact card
//! without pricing simply leaves those slots unbound.

use tracing::debug;

use crate::element::Element;
use crate::error::CardError;

/// Root attribute naming the CSS class that marks a label slot hidden.
pub const ATTR_CLASS_TO_TOGGLE: &str = "class-to-toggle";
/// Per-label-slot attribute naming its base class for type modifiers.
pub const ATTR_CONFIG_NAME: &str = "data-config-name";

/// Card naming configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    /// Base class the slot naming convention hangs off (e.g. `js-product-item`).
    pub base_class: String,
    /// Toggle class used as the label visibility flag.
    pub class_to_toggle: String,
}

impl CardConfig {
    /// Create a configuration from explicit values.
    pub fn new(base_class: impl Into<String>, class_to_toggle: impl Into<String>) -> Self {
        Self {
            base_class: base_class.into(),
            class_to_toggle: class_to_toggle.into(),
        }
    }

    /// Read the toggle class off the root element's `class-to-toggle`
    /// attribute.
    pub fn from_root(root: &Element, base_class: impl Into<String>) -> Result<Self, CardError> {
        let class_to_toggle = root
            .attribute(ATTR_CLASS_TO_TOGGLE)
            .ok_or(CardError::MissingAttribute(ATTR_CLASS_TO_TOGGLE))?;
        Ok(Self {
            base_class: base_class.into(),
            class_to_toggle,
        })
    }

    /// Class name for a slot under this card's base class.
    pub fn slot_class(&self, suffix: &str) -> String {
        format!("{}__{}", self.base_class, suffix)
    }
}

/// One label slot and its resolved text sub-element.
#[derive(Debug, Clone)]
pub struct LabelSlot {
    /// The label element itself (classes toggle here).
    pub element: Element,
    /// The inner text element, when the view has one.
    pub text: Option<Element>,
}

impl LabelSlot {
    /// Register a label slot without a text sub-element.
    pub fn new(element: Element) -> Self {
        Self {
            element,
            text: None,
        }
    }

    /// Attach the text sub-element.
    pub fn with_text(mut self, text: Element) -> Self {
        self.text = Some(text);
        self
    }
}

/// The bound slots of one product card view.
///
/// Single slots are `Option`: a write to an absent slot is a no-op. The
/// label slot count is fixed at bind time; a snapshot supplying more
/// labels than slots is truncated to the bound count.
#[derive(Debug, Clone, Default)]
pub struct CardSlots {
    /// Product image slot (`src` attribute).
    pub image: Option<Element>,
    /// Label slots, positionally matched to snapshot labels.
    pub labels: Vec<LabelSlot>,
    /// Product name slot (text).
    pub name: Option<Element>,
    /// Rating slot; read-only here, written by an external rating widget.
    pub rating: Option<Element>,
    /// Current price slot (text).
    pub default_price: Option<Element>,
    /// Original price slot (text).
    pub original_price: Option<Element>,
    /// Detail page links; one destination may render as multiple anchors.
    pub detail_links: Vec<Element>,
    /// Add-to-cart link slot (`href` attribute).
    pub add_to_cart: Option<Element>,
}

impl CardSlots {
    /// Register slots explicitly.
    pub fn builder() -> CardSlotsBuilder {
        CardSlotsBuilder::default()
    }

    /// Discover slots under `root` by the card naming convention.
    ///
    /// Runs once at bind time; absent elements leave the slot unbound.
    /// Each label slot's `{base}__label-text` sub-element is resolved here
    /// as well.
    pub fn discover(root: &Element, config: &CardConfig) -> Self {
        let label_text_class = config.slot_class("label-text");
        let labels: Vec<LabelSlot> = root
            .descendants_with_class(&config.slot_class("label"))
            .into_iter()
            .map(|element| {
                let text = element.first_with_class(&label_text_class);
                LabelSlot { element, text }
            })
            .collect();

        let slots = Self {
            image: root.first_with_class(&config.slot_class("image")),
            labels,
            name: root.first_with_class(&config.slot_class("name")),
            rating: root.first_with_class(&config.slot_class("rating")),
            default_price: root.first_with_class(&config.slot_class("default-price")),
            original_price: root.first_with_class(&config.slot_class("original-price")),
            detail_links: root.descendants_with_class(&config.slot_class("link-detail-page")),
            add_to_cart: root.first_with_class(&config.slot_class("link-add-to-cart")),
        };

        debug!(
            base_class = %config.base_class,
            labels = slots.labels.len(),
            detail_links = slots.detail_links.len(),
            image = slots.image.is_some(),
            name = slots.name.is_some(),
            "card slots discovered"
        );

        slots
    }

    /// Number of bound label slots.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}

/// Builder for explicit slot registration.
#[derive(Debug, Default)]
pub struct CardSlotsBuilder {
    slots: CardSlots,
}

impl CardSlotsBuilder {
    /// Bind the image slot.
    pub fn image(mut self, element: Element) -> Self {
        self.slots.image = Some(element);
        self
    }

    /// Bind one label slot; call repeatedly, order fixes positions.
    pub fn label(mut self, label: LabelSlot) -> Self {
        self.slots.labels.push(label);
        self
    }

    /// Bind the name slot.
    pub fn name(mut self, element: Element) -> Self {
        self.slots.name = Some(element);
        self
    }

    /// Bind the rating slot.
    pub fn rating(mut self, element: Element) -> Self {
        self.slots.rating = Some(element);
        self
    }

    /// Bind the current price slot.
    pub fn default_price(mut self, element: Element) -> Self {
        self.slots.default_price = Some(element);
        self
    }

    /// Bind the original price slot.
    pub fn original_price(mut self, element: Element) -> Self {
        self.slots.original_price = Some(element);
        self
    }

    /// Bind one detail page link; call repeatedly for multiple anchors.
    pub fn detail_link(mut self, element: Element) -> Self {
        self.slots.detail_links.push(element);
        self
    }

    /// Bind the add-to-cart link slot.
    pub fn add_to_cart(mut self, element: Element) -> Self {
        self.slots.add_to_cart = Some(element);
        self
    }

    /// Build the slot set.
    pub fn build(self) -> CardSlots {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_root() -> (Element, CardConfig) {
        let config = CardConfig::new("js-product-item", "is-hidden");
        let root = Element::new();

        let image = Element::with_class("js-product-item__image");
        let name = Element::with_class("js-product-item__name");
        let label = Element::with_class("js-product-item__label");
        let label_text = Element::with_class("js-product-item__label-text");
        label.append_child(label_text);
        let link = Element::with_class("js-product-item__link-detail-page");

        root.append_child(image);
        root.append_child(label);
        root.append_child(name);
        root.append_child(link);
        (root, config)
    }

    #[test]
    fn test_config_from_root() {
        let root = Element::new();
        root.set_attribute(ATTR_CLASS_TO_TOGGLE, "is-hidden");
        let config = CardConfig::from_root(&root, "js-product-item").unwrap();
        assert_eq!(config.class_to_toggle, "is-hidden");
        assert_eq!(config.slot_class("image"), "js-product-item__image");
    }

    #[test]
    fn test_config_from_root_without_attribute_fails() {
        let root = Element::new();
        let err = CardConfig::from_root(&root, "js-product-item").unwrap_err();
        assert!(matches!(
            err,
            CardError::MissingAttribute(ATTR_CLASS_TO_TOGGLE)
        ));
    }

    #[test]
    fn test_discover_finds_bound_slots() {
        let (root, config) = card_root();
        let slots = CardSlots::discover(&root, &config);

        assert!(slots.image.is_some());
        assert!(slots.name.is_some());
        assert_eq!(slots.label_count(), 1);
        assert!(slots.labels[0].text.is_some());
        assert_eq!(slots.detail_links.len(), 1);
        // Never present in the fixture: stays unbound, not an error.
        assert!(slots.rating.is_none());
        assert!(slots.default_price.is_none());
        assert!(slots.add_to_cart.is_none());
    }

    #[test]
    fn test_builder_registers_in_order() {
        let first = Element::new();
        let second = Element::new();
        let slots = CardSlots::builder()
            .label(LabelSlot::new(first.clone()))
            .label(LabelSlot::new(second.clone()))
            .name(Element::new())
            .build();

        assert_eq!(slots.label_count(), 2);
        assert!(slots.labels[0].element.same_node(&first));
        assert!(slots.labels[1].element.same_node(&second));
        assert!(slots.image.is_none());
    }
}
