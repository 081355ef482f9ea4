//! Static Package Catalog
//!
//! The umroh package records offered on the site, embedded as static data and
//! exposed only through read accessors. Every view (landing slider, browse
//! page, detail page, JSON endpoints) reads from the same `Catalog`.
//!
//! - `packages`: the bundled package records
//! - `content`: itinerary and review content shared by all detail pages
//! - `pricing`: effective price, discount percentage, IDR formatting

pub mod content;
pub mod packages;
pub mod pricing;

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

pub use content::{ItineraryDay, Review, ITINERARY, REVIEWS};
pub use pricing::{discount_percentage, effective_price, format_price, Price};

/// Brand shown in titles, metadata and the navbar
pub const BRAND_NAME: &str = "Rehlatours.id";

// ============================================================================
// Package Record
// ============================================================================

/// Package tier. Wire slugs follow the Indonesian names used in URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "ekonomi")]
    Economy,
    #[serde(rename = "reguler")]
    Regular,
    #[serde(rename = "premium")]
    Premium,
    #[serde(rename = "vip")]
    Vip,
    #[serde(rename = "executive")]
    Executive,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Economy,
        Category::Regular,
        Category::Premium,
        Category::Vip,
        Category::Executive,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Economy => "ekonomi",
            Category::Regular => "reguler",
            Category::Premium => "premium",
            Category::Vip => "vip",
            Category::Executive => "executive",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug.trim()))
    }

    /// Label on the browse page filter buttons
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Economy => "Paket Ekonomi",
            Category::Regular => "Paket Reguler",
            Category::Premium => "Paket Premium",
            Category::Vip => "Paket VIP",
            Category::Executive => "Paket Executive",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Category::Economy => "Pilihan terjangkau dengan fasilitas standar",
            Category::Regular => "Paket terpopuler dengan fasilitas lengkap",
            Category::Premium => "Fasilitas mewah dengan hotel bintang 5",
            Category::Vip => "Pengalaman eksklusif dengan layanan premium",
            Category::Executive => "Layanan privat untuk keluarga dan korporat",
        }
    }
}

/// What the package price covers, shown on the overview tab
#[derive(Debug, Clone, Serialize)]
pub struct Included {
    pub accommodation: &'static str,
    pub meals: &'static str,
    pub transportation: &'static str,
    pub guidance: &'static str,
    pub documentation: &'static str,
    pub extras: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageFeature {
    pub name: &'static str,
    pub included: bool,
}

/// One departure month with its dates
#[derive(Debug, Clone, Serialize)]
pub struct Departure {
    pub month: &'static str,
    pub dates: &'static [&'static str],
    pub available: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GroupSize {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub category: Category,
    /// Days
    pub duration: u32,
    pub price: Price,
    /// Bundled path under the static dir, or a remote URL
    pub image: &'static str,
    pub badge: Option<&'static str>,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub included: Included,
    pub features: &'static [PackageFeature],
    pub departure_schedule: &'static [Departure],
    pub group_size: GroupSize,
    pub rating: f64,
    pub review_count: u32,
    pub popularity_rank: Option<u32>,
    pub is_popular: bool,
    pub is_best_seller: bool,
    pub is_new_package: bool,
}

impl Package {
    pub fn effective_price(&self) -> u64 {
        self.price.effective()
    }

    pub fn discount_percentage(&self) -> u32 {
        self.price.discount_percentage()
    }

    pub fn detail_path(&self) -> String {
        format!("/packages/{}", self.id)
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate package id '{0}'")]
    DuplicateId(String),

    #[error("package '{id}' discounted price {discounted} is not below original {original}")]
    DiscountNotBelowOriginal {
        id: String,
        original: u64,
        discounted: u64,
    },

    #[error("package '{id}' group size min {min} exceeds max {max}")]
    InvalidGroupSize { id: String, min: u32, max: u32 },

    #[error("package '{0}' has an empty id or name")]
    MissingIdentity(String),
}

/// Read-only view over a fixed set of packages
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    packages: &'static [Package],
}

static BUNDLED: Catalog = Catalog {
    packages: packages::PACKAGES,
};

impl Catalog {
    /// The catalog compiled into the binary
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// Wrap a static package slice, checking catalog invariants
    pub fn new(packages: &'static [Package]) -> Result<Self, CatalogError> {
        let catalog = Catalog { packages };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen: HashSet<&str> = HashSet::new();

        for pkg in self.packages {
            if pkg.id.trim().is_empty() || pkg.name.trim().is_empty() {
                return Err(CatalogError::MissingIdentity(pkg.id.to_string()));
            }
            if !seen.insert(pkg.id) {
                return Err(CatalogError::DuplicateId(pkg.id.to_string()));
            }
            if let Some(discounted) = pkg.price.discounted {
                if discounted >= pkg.price.original {
                    return Err(CatalogError::DiscountNotBelowOriginal {
                        id: pkg.id.to_string(),
                        original: pkg.price.original,
                        discounted,
                    });
                }
            }
            if pkg.group_size.min > pkg.group_size.max {
                return Err(CatalogError::InvalidGroupSize {
                    id: pkg.id.to_string(),
                    min: pkg.group_size.min,
                    max: pkg.group_size.max,
                });
            }
        }

        Ok(())
    }

    /// All packages in declaration order
    pub fn all(&self) -> &'static [Package] {
        self.packages
    }

    pub fn by_id(&self, id: &str) -> Option<&'static Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &'static Package> {
        self.packages.iter().filter(move |p| p.category == category)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.packages.iter().map(|p| p.id)
    }

    /// Packages promoted on the landing page slider
    pub fn featured(&self) -> impl Iterator<Item = &'static Package> {
        self.packages
            .iter()
            .filter(|p| p.is_popular || p.is_best_seller || p.is_new_package)
    }

    /// Other packages for the "Paket Lainnya" strip, in catalog order
    pub fn related_to(&self, id: &str, limit: usize) -> Vec<&'static Package> {
        self.packages
            .iter()
            .filter(|p| p.id != id)
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
