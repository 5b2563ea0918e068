//! Client-side category filter over the card grid.

use landing_core::{EventDisposition, FilterKey, UiElement, ACTIVE_CLASS, HIDDEN_CLASS};

const FILTER_ATTRIBUTE: &str = "data-filter";
const CATEGORY_ATTRIBUTE: &str = "data-category";

#[derive(Debug, Clone)]
struct FilterControl<E> {
    element: E,
    key: FilterKey,
}

/// Filter controls and the cards they show or hide.
#[derive(Debug, Clone)]
pub struct CategoryFilter<E> {
    controls: Vec<FilterControl<E>>,
    cards: Vec<E>,
}

impl<E: UiElement> CategoryFilter<E> {
    /// Resolve every control's key, caching derived keys back onto the
    /// control. Returns `None` when there are no controls or no cards: the
    /// page simply has no filterable grid.
    pub fn new(controls: Vec<E>, cards: Vec<E>) -> Option<Self> {
        if controls.is_empty() || cards.is_empty() {
            return None;
        }

        let controls = controls
            .into_iter()
            .map(|element| {
                let key = match element.attribute(FILTER_ATTRIBUTE) {
                    Some(key) if !key.is_empty() => FilterKey::new(key),
                    _ => {
                        let key = FilterKey::from_label(&element.text());
                        element.set_attribute(FILTER_ATTRIBUTE, key.as_str());
                        key
                    }
                };
                FilterControl { element, key }
            })
            .collect();

        Some(Self { controls, cards })
    }

    pub fn controls(&self) -> impl Iterator<Item = &E> {
        self.controls.iter().map(|control| &control.element)
    }

    pub fn cards(&self) -> &[E] {
        &self.cards
    }

    pub fn key(&self, index: usize) -> Option<&FilterKey> {
        self.controls.get(index).map(|control| &control.key)
    }

    pub fn index_of(&self, element: &E) -> Option<usize> {
        self.controls
            .iter()
            .position(|control| &control.element == element)
    }

    /// Apply the filter of the control already marked active, or of the first
    /// control. A control without a key falls back to showing everything.
    pub fn initialize(&self) {
        let index = self
            .controls
            .iter()
            .position(|control| control.element.has_class(ACTIVE_CLASS))
            .unwrap_or(0);
        let key = &self.controls[index].key;
        if key.as_str().is_empty() {
            self.apply(&FilterKey::all());
        } else {
            self.apply(key);
        }
    }

    /// Select the control at `index` and apply its key.
    pub fn on_click(&self, index: usize) -> EventDisposition {
        let Some(selected) = self.controls.get(index) else {
            return EventDisposition::Allow;
        };

        for control in &self.controls {
            control
                .element
                .set_class(ACTIVE_CLASS, control.element == selected.element);
        }
        self.apply(&selected.key);
        EventDisposition::PreventDefault
    }

    pub fn apply(&self, key: &FilterKey) {
        if key.is_all() {
            for card in &self.cards {
                card.remove_class(HIDDEN_CLASS);
            }
            return;
        }

        for card in &self.cards {
            let category = card.attribute(CATEGORY_ATTRIBUTE);
            card.set_class(HIDDEN_CLASS, !key.shows(category.as_deref()));
        }
    }
}
