//! Configuration module

mod site;

pub use site::SiteConfig;
pub use site::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
