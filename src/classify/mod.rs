//! Topical category and historical era of an honoree.

mod category;
mod era;

pub use category::{Category, CATEGORY_KEYWORDS};
pub use era::Era;
