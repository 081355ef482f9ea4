//! HTML layer
//!
//! - `views`: view models the templates read
//! - `handlers`: full pages and HTMX fragments

pub mod handlers;
pub mod views;
