//! Content module - post records and their projection for display

pub mod datetime;
mod post;
mod projection;

pub use post::{Author, Post, PostExpand};
pub use projection::project_post;
