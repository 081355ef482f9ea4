//! Package Detail View
//!
//! Tab selection, collapsed/expanded lists, category-specific accommodation
//! copy and page metadata for `/packages/{id}`.

use crate::catalog::pricing::{format_price, MIN_DOWN_PAYMENT};
use crate::catalog::{Category, ItineraryDay, Package, PackageFeature, BRAND_NAME};
use serde::Deserialize;

/// Items shown before "Lihat ... Lainnya"
pub const COLLAPSED_ITEMS: usize = 4;

/// Related packages shown under the detail content
pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Itinerary,
    Accommodation,
    Reviews,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Itinerary,
        DetailTab::Accommodation,
        DetailTab::Reviews,
    ];

    pub fn parse(raw: &str) -> Self {
        DetailTab::ALL
            .into_iter()
            .find(|t| t.as_param() == raw.trim())
            .unwrap_or_default()
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            DetailTab::Overview => "overview",
            DetailTab::Itinerary => "itinerary",
            DetailTab::Accommodation => "accommodation",
            DetailTab::Reviews => "reviews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Itinerary => "Itinerary",
            DetailTab::Accommodation => "Akomodasi",
            DetailTab::Reviews => "Reviews",
        }
    }
}

/// Raw `/packages/{id}` query parameters, parsed leniently into `DetailView`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailQuery {
    pub tab: Option<String>,
    pub all_itinerary: Option<String>,
    pub all_features: Option<String>,
    pub favorite: Option<String>,
}

/// `true`, `1`, `yes` and `on` (any case) switch a flag on; anything else is off
fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(|s| s.trim().to_ascii_lowercase())
        .is_some_and(|s| matches!(s.as_str(), "true" | "1" | "yes" | "on"))
}

/// Detail page UI state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailView {
    pub tab: DetailTab,
    pub show_all_itinerary: bool,
    pub show_all_features: bool,
    pub favorite: bool,
}

impl DetailView {
    pub fn from_query(query: &DetailQuery) -> Self {
        Self {
            tab: query.tab.as_deref().map(DetailTab::parse).unwrap_or_default(),
            show_all_itinerary: parse_flag(query.all_itinerary.as_deref()),
            show_all_features: parse_flag(query.all_features.as_deref()),
            favorite: parse_flag(query.favorite.as_deref()),
        }
    }

    pub fn with_tab(&self, tab: DetailTab) -> Self {
        Self { tab, ..*self }
    }

    pub fn toggled_itinerary(&self) -> Self {
        Self {
            show_all_itinerary: !self.show_all_itinerary,
            ..*self
        }
    }

    pub fn toggled_features(&self) -> Self {
        Self {
            show_all_features: !self.show_all_features,
            ..*self
        }
    }

    pub fn toggled_favorite(&self) -> Self {
        Self {
            favorite: !self.favorite,
            ..*self
        }
    }

    /// Query string for `/packages/{id}`, omitting defaults
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if self.tab != DetailTab::Overview {
            parts.push(format!("tab={}", self.tab.as_param()));
        }
        if self.show_all_itinerary {
            parts.push("all_itinerary=true".to_string());
        }
        if self.show_all_features {
            parts.push("all_features=true".to_string());
        }
        if self.favorite {
            parts.push("favorite=true".to_string());
        }
        parts.join("&")
    }

    pub fn href(&self, pkg: &Package) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            pkg.detail_path()
        } else {
            format!("{}?{}", pkg.detail_path(), query)
        }
    }

    pub fn visible_features<'a>(&self, features: &'a [PackageFeature]) -> &'a [PackageFeature] {
        collapse(features, self.show_all_features)
    }

    pub fn visible_itinerary<'a>(&self, days: &'a [ItineraryDay]) -> &'a [ItineraryDay] {
        collapse(days, self.show_all_itinerary)
    }
}

fn collapse<T>(items: &[T], show_all: bool) -> &[T] {
    if show_all {
        items
    } else {
        &items[..items.len().min(COLLAPSED_ITEMS)]
    }
}

/// Count hidden behind the "Lihat N ... Lainnya" toggle
pub fn hidden_count(total: usize) -> usize {
    total.saturating_sub(COLLAPSED_ITEMS)
}

// ============================================================================
// Accommodation Tab
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccommodationCopy {
    pub makkah_hotel: &'static str,
    pub madinah_hotel: &'static str,
    pub flight: &'static str,
    pub local_bus: &'static str,
}

impl AccommodationCopy {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Vip | Category::Executive => Self {
                makkah_hotel: "Hotel mewah 5 bintang dengan suite room",
                madinah_hotel: "Hotel mewah dekat Masjid Nabawi",
                flight: "First class flight",
                local_bus: "Luxury private car",
            },
            Category::Premium => Self {
                makkah_hotel: "Hotel bintang 5 dengan view Haram",
                madinah_hotel: "Hotel bintang 5 premium",
                flight: "Business class flight",
                local_bus: "Private bus AC",
            },
            Category::Regular => Self {
                makkah_hotel: "Hotel bintang 4 lokasi strategis",
                madinah_hotel: "Hotel bintang 4 nyaman",
                flight: "Economy class flight dengan maskapai terpercaya",
                local_bus: "Bus VIP AC",
            },
            Category::Economy => Self {
                makkah_hotel: "Hotel bintang 3 dekat Masjidil Haram",
                madinah_hotel: "Hotel bintang 3 dekat Masjid Nabawi",
                flight: "Economy class flight dengan maskapai terpercaya",
                local_bus: "Bus AC yang nyaman",
            },
        }
    }
}

pub static MAKKAH_AMENITIES: &[&str] = &[
    "Walking distance ke Masjidil Haram",
    "AC & WiFi gratis",
    "Room service 24 jam",
];

pub static MADINAH_AMENITIES: &[&str] = &[
    "Dekat dengan Masjid Nabawi",
    "Makanan halal tersedia",
    "Ruang sholat di hotel",
];

// ============================================================================
// Booking Sidebar
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOption {
    pub label: &'static str,
    pub value: String,
}

pub fn payment_options() -> Vec<PaymentOption> {
    vec![
        PaymentOption {
            label: "DP Minimal",
            value: format_price(MIN_DOWN_PAYMENT, "IDR"),
        },
        PaymentOption {
            label: "Cicilan 6 bulan",
            value: "0% bunga".to_string(),
        },
        PaymentOption {
            label: "Lunas",
            value: "Diskon 2%".to_string(),
        },
    ]
}

// ============================================================================
// Page Metadata
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub image: Option<String>,
}

impl PageMeta {
    pub fn for_package(pkg: &Package) -> Self {
        let price = pkg.price.formatted();
        let highlights = pkg
            .highlights
            .iter()
            .take(2)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            title: format!("{} - {} | {} Umroh Terpercaya", pkg.name, price, BRAND_NAME),
            description: format!(
                "{} Durasi {} hari dengan rating {}/5 dari {} reviews. {}.",
                pkg.description, pkg.duration, pkg.rating, pkg.review_count, highlights
            ),
            keywords: vec![
                "umroh".to_string(),
                "umroh murah".to_string(),
                "travel umroh".to_string(),
                "paket umroh".to_string(),
                pkg.category.slug().to_string(),
                format!("umroh {} hari", pkg.duration),
                "makkah".to_string(),
                "madinah".to_string(),
                BRAND_NAME.to_lowercase(),
            ],
            image: Some(pkg.image.to_string()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            title: format!("Package Tidak Ditemukan - {}", BRAND_NAME),
            description: "Paket umroh yang Anda cari tidak dapat ditemukan.".to_string(),
            keywords: Vec::new(),
            image: None,
        }
    }
}
