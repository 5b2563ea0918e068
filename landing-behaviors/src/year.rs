use chrono::{DateTime, Datelike, FixedOffset, Utc};
use landing_core::UiElement;

/// Write the current local year into the footer.
pub fn stamp_year<E: UiElement>(element: &E, now: DateTime<Utc>, local_offset: FixedOffset) {
    let year = now.with_timezone(&local_offset).year();
    element.set_text(&year.to_string());
}
