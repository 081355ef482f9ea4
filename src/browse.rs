//! Package Browse State: filter, search and sort
//!
//! The `/packages` page state (search term, category, sort key, view mode,
//! price range, favorites) lives in the query string. Every request parses it
//! into a `BrowseState` and re-derives the visible packages with the pure
//! functions here. Nothing is persisted between requests.

use crate::catalog::{Category, Package};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Upper bound of the default price range
pub const DEFAULT_MAX_PRICE: u64 = 50_000_000;

/// Rank given to packages without a popularity rank when sorting by popularity
///
/// Popularity sort is descending on rank, so unranked packages (999) come
/// before ranked ones and rank 1 comes last among ranked packages. Product has
/// not confirmed whether this order is intended; it is kept as shipped.
pub const UNRANKED_POPULARITY: u32 = 999;

// ============================================================================
// Filter Dimensions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        Category::from_slug(raw).map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.slug(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortKey {
    #[default]
    Popularity,
    PriceLow,
    PriceHigh,
    Rating,
    Duration,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Popularity,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Duration,
    ];

    /// Unknown values fall back to popularity
    pub fn parse(raw: &str) -> Self {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_param() == raw.trim())
            .unwrap_or_default()
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Duration => "duration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Popularity => "Terpopuler",
            SortKey::PriceLow => "Harga Terendah",
            SortKey::PriceHigh => "Harga Tertinggi",
            SortKey::Rating => "Rating Tertinggi",
            SortKey::Duration => "Durasi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("list") {
            ViewMode::List
        } else {
            ViewMode::Grid
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

/// Inclusive bounds on effective price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

impl PriceRange {
    pub fn contains(&self, amount: u64) -> bool {
        amount >= self.min && amount <= self.max
    }

    pub fn is_default(&self) -> bool {
        *self == PriceRange::default()
    }
}

// ============================================================================
// Query String Codec
// ============================================================================

/// Raw `/packages` query parameters, parsed leniently into `BrowseState`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub view: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// Comma-separated package ids
    pub favorites: Option<String>,
}

// ============================================================================
// Browse State
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseState {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
    pub view: ViewMode,
    pub price_range: PriceRange,
    pub favorites: BTreeSet<String>,
}

impl BrowseState {
    pub fn from_query(query: &BrowseQuery) -> Self {
        let defaults = PriceRange::default();
        let parse_amount = |raw: &Option<String>, fallback: u64| {
            raw.as_deref()
                .and_then(|s| s.trim().replace(['.', '_'], "").parse::<u64>().ok())
                .unwrap_or(fallback)
        };

        let mut price_range = PriceRange {
            min: parse_amount(&query.min_price, defaults.min),
            max: parse_amount(&query.max_price, defaults.max),
        };
        if price_range.min > price_range.max {
            std::mem::swap(&mut price_range.min, &mut price_range.max);
        }

        let favorites = query
            .favorites
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            search: query.q.as_deref().unwrap_or("").trim().to_string(),
            category: query
                .category
                .as_deref()
                .map(CategoryFilter::parse)
                .unwrap_or_default(),
            sort: query.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
            view: query.view.as_deref().map(ViewMode::parse).unwrap_or_default(),
            price_range,
            favorites,
        }
    }

    /// Encode back to a query string (without the leading `?`), omitting defaults
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if !self.search.is_empty() {
            parts.push(format!("q={}", urlencoding::encode(&self.search)));
        }
        if self.category != CategoryFilter::All {
            parts.push(format!("category={}", self.category.as_param()));
        }
        if self.sort != SortKey::default() {
            parts.push(format!("sort={}", self.sort.as_param()));
        }
        if self.view != ViewMode::default() {
            parts.push(format!("view={}", self.view.as_param()));
        }
        if !self.price_range.is_default() {
            parts.push(format!("min_price={}", self.price_range.min));
            parts.push(format!("max_price={}", self.price_range.max));
        }
        if !self.favorites.is_empty() {
            let joined = self.favorites.iter().cloned().collect::<Vec<_>>().join(",");
            parts.push(format!("favorites={}", urlencoding::encode(&joined)));
        }

        parts.join("&")
    }

    /// `/packages` link carrying this state
    pub fn href(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/packages".to_string()
        } else {
            format!("/packages?{}", query)
        }
    }

    /// Whether a package passes every active predicate
    pub fn matches(&self, pkg: &Package) -> bool {
        self.category.matches(pkg.category)
            && matches_search(pkg, &self.search)
            && self.price_range.contains(pkg.effective_price())
    }

    /// Filter then sort
    pub fn apply<'a, I>(&self, packages: I) -> Vec<&'a Package>
    where
        I: IntoIterator<Item = &'a Package>,
    {
        let mut visible = filter_packages(packages, self);
        sort_packages(&mut visible, self.sort);
        visible
    }

    /// Clear search, category and price range; keep sort, view and favorites
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.category = CategoryFilter::All;
        self.price_range = PriceRange::default();
    }

    pub fn toggle_favorite(&mut self, id: &str) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.to_string());
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.category != CategoryFilter::All
            || !self.price_range.is_default()
    }

    // Copies with one dimension changed, for building links

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self { category, ..self.clone() }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self { sort, ..self.clone() }
    }

    pub fn with_view(&self, view: ViewMode) -> Self {
        Self { view, ..self.clone() }
    }

    pub fn with_favorite_toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.toggle_favorite(id);
        next
    }

    pub fn with_filters_reset(&self) -> Self {
        let mut next = self.clone();
        next.reset_filters();
        next
    }
}

// ============================================================================
// Filter & Sort
// ============================================================================

/// Case-insensitive substring match on name or description; empty term matches all
pub fn matches_search(pkg: &Package, term: &str) -> bool {
    let needle = term.to_lowercase();
    pkg.name.to_lowercase().contains(&needle) || pkg.description.to_lowercase().contains(&needle)
}

/// Keep packages passing every predicate, preserving input order
pub fn filter_packages<'a, I>(packages: I, state: &BrowseState) -> Vec<&'a Package>
where
    I: IntoIterator<Item = &'a Package>,
{
    packages.into_iter().filter(|p| state.matches(p)).collect()
}

pub fn popularity_rank(pkg: &Package) -> u32 {
    pkg.popularity_rank.unwrap_or(UNRANKED_POPULARITY)
}

pub fn compare_packages(sort: SortKey, a: &Package, b: &Package) -> Ordering {
    match sort {
        SortKey::PriceLow => a.effective_price().cmp(&b.effective_price()),
        SortKey::PriceHigh => b.effective_price().cmp(&a.effective_price()),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Duration => a.duration.cmp(&b.duration),
        SortKey::Popularity => popularity_rank(b).cmp(&popularity_rank(a)),
    }
}

/// Stable sort, so ties keep catalog order
pub fn sort_packages(packages: &mut [&Package], sort: SortKey) {
    packages.sort_by(|a, b| compare_packages(sort, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::packages::{EKONOMI_9_HARI, PACKAGES, REGULER_12_HARI};
    use crate::catalog::Price;

    fn ids(list: &[&Package]) -> Vec<&'static str> {
        list.iter().map(|p| p.id).collect()
    }

    fn priced(id: &'static str, original: u64, discounted: Option<u64>) -> Package {
        Package {
            id,
            price: Price {
                original,
                discounted,
                currency: "IDR",
            },
            ..EKONOMI_9_HARI
        }
    }

    #[test]
    fn test_default_state_returns_full_catalog() {
        let state = BrowseState::default();
        let visible = state.apply(PACKAGES);
        assert_eq!(visible.len(), PACKAGES.len());
    }

    #[test]
    fn test_default_state_still_sorts() {
        let state = BrowseState::default();
        let visible = state.apply(PACKAGES);
        let mut expected: Vec<&Package> = PACKAGES.iter().collect();
        sort_packages(&mut expected, SortKey::Popularity);
        assert_eq!(ids(&visible), ids(&expected));
    }

    #[test]
    fn test_vip_filter_returns_single_package() {
        let state = BrowseState {
            category: CategoryFilter::Only(Category::Vip),
            ..Default::default()
        };
        let visible = state.apply(PACKAGES);
        assert_eq!(ids(&visible), vec!["vip-16-hari"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let upper = BrowseState {
            search: "UMROH".to_string(),
            ..Default::default()
        };
        let lower = BrowseState {
            search: "umroh".to_string(),
            ..Default::default()
        };
        let upper_ids = ids(&upper.apply(PACKAGES));
        assert!(!upper_ids.is_empty());
        assert_eq!(upper_ids, ids(&lower.apply(PACKAGES)));
    }

    #[test]
    fn test_search_matches_description() {
        let state = BrowseState {
            search: "istanbul".to_string(),
            ..Default::default()
        };
        // Only mentioned in a highlight, not name/description
        assert!(state.apply(PACKAGES).is_empty());

        let state = BrowseState {
            search: "wisata sejarah turki".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&state.apply(PACKAGES)), vec!["premium-14-hari-turki"]);
    }

    #[test]
    fn test_price_range_uses_effective_price() {
        // reguler: original 25.5M, discounted 23.5M
        let state = BrowseState {
            price_range: PriceRange {
                min: 0,
                max: 24_000_000,
            },
            ..Default::default()
        };
        assert_eq!(ids(&state.apply(PACKAGES)), vec!["reguler-12-hari"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange {
            min: 23_500_000,
            max: 23_500_000,
        };
        assert!(range.contains(REGULER_12_HARI.effective_price()));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let states = [
            BrowseState::default(),
            BrowseState {
                search: "paket".to_string(),
                ..Default::default()
            },
            BrowseState {
                category: CategoryFilter::Only(Category::Premium),
                price_range: PriceRange {
                    min: 30_000_000,
                    max: 40_000_000,
                },
                ..Default::default()
            },
        ];

        for state in &states {
            let once = filter_packages(PACKAGES, state);
            let twice = filter_packages(once.iter().copied(), state);
            assert_eq!(ids(&once), ids(&twice));

            let sorted_once = state.apply(PACKAGES);
            let sorted_twice = state.apply(sorted_once.iter().copied());
            assert_eq!(ids(&sorted_once), ids(&sorted_twice));
        }
    }

    #[test]
    fn test_price_sort_directions_reverse_without_ties() {
        let packages = [
            priced("a", 30_000_000, Some(21_000_000)),
            priced("b", 20_000_000, None),
            priced("c", 40_000_000, Some(35_000_000)),
            priced("d", 26_000_000, None),
        ];

        let mut asc: Vec<&Package> = packages.iter().collect();
        sort_packages(&mut asc, SortKey::PriceLow);
        let mut desc: Vec<&Package> = packages.iter().collect();
        sort_packages(&mut desc, SortKey::PriceHigh);

        assert_eq!(ids(&asc), vec!["b", "a", "d", "c"]);
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn test_rating_and_duration_sorts() {
        let mut list: Vec<&Package> = PACKAGES.iter().collect();
        sort_packages(&mut list, SortKey::Rating);
        assert_eq!(list[0].id, "vip-16-hari");
        assert!(list.windows(2).all(|w| w[0].rating >= w[1].rating));

        sort_packages(&mut list, SortKey::Duration);
        assert!(list.windows(2).all(|w| w[0].duration <= w[1].duration));
        assert_eq!(list[0].id, "ekonomi-9-hari");
    }

    #[test]
    fn test_popularity_sort_puts_unranked_first() {
        let mut list: Vec<&Package> = PACKAGES.iter().collect();
        sort_packages(&mut list, SortKey::Popularity);
        // Unranked (999) keep catalog order, then rank 2, then rank 1
        assert_eq!(
            ids(&list),
            vec![
                "ekonomi-9-hari",
                "premium-14-hari",
                "vip-16-hari",
                "premium-14-hari-turki",
                "reguler-12-hari",
            ]
        );
    }

    #[test]
    fn test_reset_filters_keeps_sort_and_favorites() {
        let mut state = BrowseState {
            search: "zzz".to_string(),
            category: CategoryFilter::Only(Category::Executive),
            sort: SortKey::Rating,
            view: ViewMode::List,
            price_range: PriceRange { min: 1, max: 2 },
            favorites: BTreeSet::from(["vip-16-hari".to_string()]),
        };
        assert!(state.apply(PACKAGES).is_empty());

        state.reset_filters();
        assert!(!state.has_active_filters());
        assert_eq!(state.sort, SortKey::Rating);
        assert_eq!(state.view, ViewMode::List);
        assert!(state.is_favorite("vip-16-hari"));
        assert_eq!(state.apply(PACKAGES).len(), PACKAGES.len());
    }

    #[test]
    fn test_toggle_favorite() {
        let mut state = BrowseState::default();
        state.toggle_favorite("reguler-12-hari");
        assert!(state.is_favorite("reguler-12-hari"));
        state.toggle_favorite("reguler-12-hari");
        assert!(!state.is_favorite("reguler-12-hari"));
    }

    #[test]
    fn test_from_query_lenient() {
        let query = BrowseQuery {
            q: Some("  Turki ".to_string()),
            category: Some("PREMIUM".to_string()),
            sort: Some("bogus".to_string()),
            view: Some("list".to_string()),
            min_price: Some("40.000.000".to_string()),
            max_price: Some("10000000".to_string()),
            favorites: Some("vip-16-hari,,reguler-12-hari".to_string()),
        };
        let state = BrowseState::from_query(&query);
        assert_eq!(state.search, "Turki");
        assert_eq!(state.category, CategoryFilter::Only(Category::Premium));
        assert_eq!(state.sort, SortKey::Popularity);
        assert_eq!(state.view, ViewMode::List);
        assert_eq!(
            state.price_range,
            PriceRange {
                min: 10_000_000,
                max: 40_000_000
            }
        );
        assert_eq!(state.favorites.len(), 2);
    }

    #[test]
    fn test_query_string_round_trip() {
        let state = BrowseState {
            search: "plus mesir".to_string(),
            category: CategoryFilter::Only(Category::Regular),
            sort: SortKey::PriceHigh,
            favorites: BTreeSet::from(["a".to_string(), "b".to_string()]),
            ..Default::default()
        };
        let qs = state.to_query_string();
        assert_eq!(
            qs,
            "q=plus%20mesir&category=reguler&sort=price-high&favorites=a%2Cb"
        );

        let decoded = BrowseQuery {
            q: Some("plus mesir".to_string()),
            category: Some("reguler".to_string()),
            sort: Some("price-high".to_string()),
            favorites: Some("a,b".to_string()),
            ..Default::default()
        };
        assert_eq!(BrowseState::from_query(&decoded), state);
    }

    #[test]
    fn test_default_href() {
        assert_eq!(BrowseState::default().href(), "/packages");
        assert_eq!(
            BrowseState::default().with_view(ViewMode::List).href(),
            "/packages?view=list"
        );
    }
}
