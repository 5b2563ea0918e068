//! Deferred image loading.

use landing_core::UiElement;

/// Images whose real source is still parked in the deferred attribute.
#[derive(Debug, Clone)]
pub struct LazyImageLoader<E> {
    pending: Vec<E>,
    attribute: String,
}

impl<E: UiElement> LazyImageLoader<E> {
    pub fn new(images: Vec<E>, attribute: &str) -> Self {
        let pending = images
            .into_iter()
            .filter(|image| image.attribute(attribute).is_some())
            .collect();
        Self {
            pending,
            attribute: attribute.to_string(),
        }
    }

    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    /// Returns `true` once the image is loaded and can be unobserved.
    pub fn on_intersect(&mut self, image: &E) -> bool {
        let Some(position) = self.pending.iter().position(|pending| pending == image) else {
            return false;
        };
        self.pending.remove(position);

        let Some(source) = image.attribute(&self.attribute) else {
            return true;
        };
        image.set_attribute("src", &source);
        image.remove_attribute(&self.attribute);
        true
    }
}
