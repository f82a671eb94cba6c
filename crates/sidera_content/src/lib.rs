//! Planetary-placement interpretations.
//!
//! The authored table covers each (sign, placement) combination with a
//! structured record: title, subtitle, prose sections, and trait lists.
//! Lookups are pure and return `Option` — a combination without authored
//! content is an expected outcome, not an error, and no placeholder is
//! synthesized here.

mod record;
mod resolver;
mod table;

pub use record::{ContentEntry, ContentSection};
pub use resolver::{
    content_for_placement, content_for_sign, entry_count, placement_content,
    placement_content_by_key,
};
