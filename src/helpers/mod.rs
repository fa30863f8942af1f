//! Helper functions for templates
//!
//! Small pure functions used while turning posts into template data.

mod date;
mod reading;

pub use date::*;
pub use reading::*;
