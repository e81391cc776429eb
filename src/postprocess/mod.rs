//! Landmark clean-up applied between the radius search and rendering.

mod dedupe;
mod kinds;

pub use dedupe::dedupe;
pub use kinds::{format_categories, is_known_category, update_kinds, KNOWN_CATEGORIES};
