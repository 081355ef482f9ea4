//! View models for Askama templates
//!
//! Templates only read precomputed strings, flags and static content. All
//! formatting (prices, stars, links) happens here.

use chrono::Datelike;

use crate::browse::{BrowseState, CategoryFilter, SortKey, ViewMode};
use crate::catalog::{Category, Package, Review, BRAND_NAME};
use crate::config::SiteConfig;
use crate::contact;
use crate::detail::PageMeta;
use crate::landing::{
    self, is_package_detail_path, search_faqs, Accordion, Carousel, Certification, FooterSection,
    NavItem, SocialLink, Testimonial, TESTIMONIAL_INTERVAL_SECS,
};

// ============================================================================
// Layout
// ============================================================================

/// Everything `base.html`, the navbar and the footer read
#[derive(Debug, Clone)]
pub struct Layout {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: Option<String>,
    pub nav_items: &'static [NavItem],
    /// Transparent navbar only over the home hero
    pub solid_nav: bool,
    pub on_detail_page: bool,
    pub phone: String,
    pub phone_href: String,
    pub whatsapp_href: String,
    pub footer_sections: &'static [FooterSection],
    pub social_links: &'static [SocialLink],
    pub certifications: &'static [Certification],
    pub company_description: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub year: i32,
}

impl Layout {
    pub fn new(config: &SiteConfig, path: &str, meta: PageMeta) -> Self {
        Self {
            brand: BRAND_NAME,
            tagline: landing::TAGLINE,
            title: meta.title,
            description: meta.description,
            keywords: meta.keywords.join(", "),
            og_image: meta.image,
            nav_items: landing::NAV_ITEMS,
            solid_nav: path != "/",
            on_detail_page: is_package_detail_path(path),
            phone: config.contact_phone.clone(),
            phone_href: contact::tel_link(&config.contact_phone),
            whatsapp_href: contact::whatsapp_chat_link(&config.whatsapp_number),
            footer_sections: landing::FOOTER_SECTIONS,
            social_links: landing::SOCIAL_LINKS,
            certifications: landing::CERTIFICATIONS,
            company_description: landing::COMPANY_DESCRIPTION,
            email: landing::CONTACT_EMAIL,
            address: landing::OFFICE_ADDRESS,
            year: chrono::Utc::now().year(),
        }
    }
}

pub fn home_meta() -> PageMeta {
    PageMeta {
        title: format!("{} - {}", BRAND_NAME, landing::TAGLINE),
        description: landing::HERO.description.to_string(),
        keywords: vec![
            "umroh".to_string(),
            "travel umroh".to_string(),
            "paket umroh".to_string(),
            BRAND_NAME.to_lowercase(),
        ],
        image: Some(landing::HERO.background_image.to_string()),
    }
}

pub fn packages_meta() -> PageMeta {
    PageMeta {
        title: format!("Paket Umroh - {}", BRAND_NAME),
        description: "Pilih paket umroh sesuai kebutuhan dan budget Anda, dari ekonomi hingga VIP."
            .to_string(),
        keywords: vec![
            "paket umroh".to_string(),
            "umroh murah".to_string(),
            "umroh vip".to_string(),
        ],
        image: None,
    }
}

// ============================================================================
// Package Cards
// ============================================================================

/// "★★★★☆" for a 0-5 rating
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[derive(Debug, Clone)]
pub struct PackageCard {
    pub id: &'static str,
    pub name: &'static str,
    pub category_label: &'static str,
    pub category_slug: &'static str,
    pub duration: u32,
    pub price: String,
    pub original_price: Option<String>,
    /// 0 when there is no discount
    pub discount: u32,
    pub image: &'static str,
    pub badge: Option<&'static str>,
    pub description: &'static str,
    pub highlights: Vec<&'static str>,
    pub rating: String,
    pub review_count: u32,
    pub group_size: String,
    pub detail_href: String,
    pub booking_href: String,
    pub favorite_href: Option<String>,
    pub is_favorite: bool,
    pub is_popular: bool,
    pub is_best_seller: bool,
    pub is_new: bool,
}

impl PackageCard {
    pub const HIGHLIGHTS_SHOWN: usize = 3;

    pub fn new(pkg: &'static Package, config: &SiteConfig) -> Self {
        Self {
            id: pkg.id,
            name: pkg.name,
            category_label: pkg.category.display_name(),
            category_slug: pkg.category.slug(),
            duration: pkg.duration,
            price: pkg.price.formatted(),
            original_price: pkg.price.has_discount().then(|| pkg.price.formatted_original()),
            discount: pkg.discount_percentage(),
            image: pkg.image,
            badge: pkg.badge,
            description: pkg.description,
            highlights: pkg.highlights.iter().take(Self::HIGHLIGHTS_SHOWN).copied().collect(),
            rating: format!("{:.1}", pkg.rating),
            review_count: pkg.review_count,
            group_size: format!("{}-{}", pkg.group_size.min, pkg.group_size.max),
            detail_href: pkg.detail_path(),
            booking_href: contact::package_booking_link(&config.whatsapp_number, pkg),
            favorite_href: None,
            is_favorite: false,
            is_popular: pkg.is_popular,
            is_best_seller: pkg.is_best_seller,
            is_new: pkg.is_new_package,
        }
    }

    /// Card on `/packages`, with a favorite toggle carrying the rest of the state
    pub fn in_browse(pkg: &'static Package, config: &SiteConfig, state: &BrowseState) -> Self {
        Self {
            favorite_href: Some(state.with_favorite_toggled(pkg.id).href()),
            is_favorite: state.is_favorite(pkg.id),
            ..Self::new(pkg, config)
        }
    }
}

// ============================================================================
// Packages Page
// ============================================================================

#[derive(Debug, Clone)]
pub struct OptionLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Results block, swapped on its own for HTMX filter requests
#[derive(Debug, Clone)]
pub struct ResultsView {
    pub cards: Vec<PackageCard>,
    pub total: usize,
    pub list_view: bool,
    pub favorites_count: usize,
    pub reset_href: String,
}

impl ResultsView {
    pub fn new(visible: Vec<&'static Package>, total: usize, state: &BrowseState, config: &SiteConfig) -> Self {
        Self {
            cards: visible
                .into_iter()
                .map(|pkg| PackageCard::in_browse(pkg, config, state))
                .collect(),
            total,
            list_view: state.view == ViewMode::List,
            favorites_count: state.favorites.len(),
            reset_href: state.with_filters_reset().href(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Filter sidebar and toolbar
#[derive(Debug, Clone)]
pub struct FiltersView {
    pub search: String,
    /// Active category carried through the filter form; `None` for all
    pub category_param: Option<&'static str>,
    pub categories: Vec<OptionLink>,
    pub sort_options: Vec<SortOption>,
    pub view_value: &'static str,
    pub grid_href: String,
    pub list_href: String,
    pub list_view: bool,
    pub min_price: u64,
    pub max_price: u64,
    /// Comma list carried through the filter form
    pub favorites: String,
    pub has_active_filters: bool,
    pub reset_href: String,
}

impl FiltersView {
    pub fn new(state: &BrowseState) -> Self {
        let mut categories = vec![OptionLink {
            label: "Semua Paket",
            href: state.with_category(CategoryFilter::All).href(),
            active: state.category == CategoryFilter::All,
        }];
        categories.extend(Category::ALL.into_iter().map(|c| OptionLink {
            label: c.display_name(),
            href: state.with_category(CategoryFilter::Only(c)).href(),
            active: state.category == CategoryFilter::Only(c),
        }));

        Self {
            search: state.search.clone(),
            category_param: (state.category != CategoryFilter::All)
                .then(|| state.category.as_param()),
            categories,
            sort_options: SortKey::ALL
                .into_iter()
                .map(|s| SortOption {
                    value: s.as_param(),
                    label: s.label(),
                    selected: s == state.sort,
                })
                .collect(),
            view_value: state.view.as_param(),
            grid_href: state.with_view(ViewMode::Grid).href(),
            list_href: state.with_view(ViewMode::List).href(),
            list_view: state.view == ViewMode::List,
            min_price: state.price_range.min,
            max_price: state.price_range.max,
            favorites: state.favorites.iter().cloned().collect::<Vec<_>>().join(","),
            has_active_filters: state.has_active_filters(),
            reset_href: state.with_filters_reset().href(),
        }
    }
}

// ============================================================================
// Home Page Sections
// ============================================================================

#[derive(Debug, Clone)]
pub struct TestimonialSlide {
    pub testimonial: &'static Testimonial,
    pub stars: String,
    pub index: usize,
    pub next_index: usize,
    pub previous_index: usize,
    /// One flag per dot, true for the current slide
    pub dots: Vec<bool>,
    pub interval_secs: u64,
}

impl TestimonialSlide {
    /// `None` only when there are no testimonials
    pub fn at(testimonials: &'static [Testimonial], index: usize) -> Option<Self> {
        let carousel = Carousel::new(testimonials.len(), index);
        let testimonial = testimonials.get(carousel.index())?;
        Some(Self {
            testimonial,
            stars: stars(testimonial.rating),
            index: carousel.index(),
            next_index: carousel.next().index(),
            previous_index: carousel.previous().index(),
            dots: (0..carousel.len()).map(|i| i == carousel.index()).collect(),
            interval_secs: TESTIMONIAL_INTERVAL_SECS,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
}

#[derive(Debug, Clone)]
pub struct FaqList {
    pub query: String,
    pub entries: Vec<FaqEntry>,
}

impl FaqList {
    pub fn new(query: &str, accordion: &Accordion) -> Self {
        let entries = search_faqs(landing::FAQS, query)
            .into_iter()
            .enumerate()
            .map(|(i, faq)| FaqEntry {
                question: faq.question,
                answer: faq.answer,
                open: accordion.is_open(i),
            })
            .collect();
        Self {
            query: query.trim().to_string(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Featured package slider on the home page
#[derive(Debug, Clone)]
pub struct FeaturedSlider {
    pub cards: Vec<PackageCard>,
    pub offset_percent: String,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
}

// ============================================================================
// Detail Page
// ============================================================================

#[derive(Debug, Clone)]
pub struct TabLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ReviewView {
    pub review: &'static Review,
    pub stars: String,
}

impl ReviewView {
    pub fn new(review: &'static Review) -> Self {
        Self {
            review,
            stars: stars(review.rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::packages::{PREMIUM_14_HARI, REGULER_12_HARI, VIP_16_HARI};
    use crate::landing::TESTIMONIALS;

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_card_discount_fields() {
        let config = SiteConfig::default();
        let card = PackageCard::new(&REGULER_12_HARI, &config);
        assert_eq!(card.discount, 8);
        assert_eq!(card.original_price.as_deref(), Some("Rp\u{a0}25.500.000"));
        assert!(card.booking_href.starts_with("https://wa.me/628123456789?text="));

        let vip = PackageCard::new(&VIP_16_HARI, &config);
        assert_eq!(vip.discount, 0);
        assert!(vip.original_price.is_none());
        assert_eq!(vip.rating, "5.0");
    }

    #[test]
    fn test_browse_card_favorite_toggle() {
        let config = SiteConfig::default();
        let mut state = BrowseState::default();
        state.toggle_favorite(PREMIUM_14_HARI.id);

        let card = PackageCard::in_browse(&PREMIUM_14_HARI, &config, &state);
        assert!(card.is_favorite);
        assert_eq!(card.favorite_href.as_deref(), Some("/packages"));
    }

    #[test]
    fn test_testimonial_slide_wraps() {
        let last = TestimonialSlide::at(TESTIMONIALS, TESTIMONIALS.len() - 1).unwrap();
        assert_eq!(last.next_index, 0);
        let wrapped = TestimonialSlide::at(TESTIMONIALS, TESTIMONIALS.len() + 1).unwrap();
        assert_eq!(wrapped.index, 1);
        assert_eq!(wrapped.dots.iter().filter(|d| **d).count(), 1);
        assert!(TestimonialSlide::at(&[], 3).is_none());
    }

    #[test]
    fn test_filters_mark_active_category() {
        let state = BrowseState {
            category: CategoryFilter::Only(Category::Vip),
            ..BrowseState::default()
        };
        let filters = FiltersView::new(&state);
        let active: Vec<_> = filters.categories.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, Category::Vip.display_name());
        assert!(filters.has_active_filters);
        assert_eq!(filters.category_param, Some("vip"));
        assert_eq!(FiltersView::new(&BrowseState::default()).category_param, None);
    }

    #[test]
    fn test_layout_nav_mode() {
        let config = SiteConfig::default();
        assert!(!Layout::new(&config, "/", home_meta()).solid_nav);
        let detail = Layout::new(&config, "/packages/vip-16-hari", PageMeta::not_found());
        assert!(detail.solid_nav && detail.on_detail_page);
        assert_eq!(detail.phone_href, "tel:+6283197321658");
    }
}
