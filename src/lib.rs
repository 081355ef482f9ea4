//! Rehlatours.id Umroh Site
//!
//! Server-rendered marketing and catalog site for an Umroh travel agency.
//!
//! - `catalog/`: static package records, pricing helpers, itinerary and reviews
//! - `browse`: `/packages` filter, sort and query-string state
//! - `detail`: `/packages/{id}` tabs, accommodation copy and page metadata
//! - `landing/`: home page sections and their carousel/accordion state
//! - `contact`: WhatsApp and `tel:` links
//! - `config`: environment-driven settings
//! - `site_server` + `web/`: Axum router, Askama pages, HTMX fragments

pub mod browse;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod detail;
pub mod landing;

#[cfg(feature = "server")]
pub mod site_server;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use browse::{BrowseQuery, BrowseState, CategoryFilter, SortKey, ViewMode};
pub use catalog::{Catalog, CatalogError, Category, Package, Price};
pub use config::SiteConfig;
pub use detail::{DetailTab, DetailView, PageMeta};

#[cfg(feature = "server")]
pub use site_server::{create_router, AppState};
