// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use super::parse_index;
use crate::browse::{BrowseQuery, BrowseState};
use crate::catalog::content::average_review_rating;
use crate::catalog::{ItineraryDay, Package, PackageFeature, ITINERARY, REVIEWS};
use crate::contact;
use crate::detail::{
    hidden_count, payment_options, AccommodationCopy, DetailQuery, DetailTab, DetailView,
    PageMeta, PaymentOption, MADINAH_AMENITIES, MAKKAH_AMENITIES, RELATED_LIMIT,
};
use crate::landing::{
    self, Accordion, CountdownUnit, Cta, FeatureItem, Hero, PackageSlider, StatItem, StepItem,
    UrgencyItem,
};
use crate::site_server::{AppError, AppState};
use crate::web::views::{
    self, FaqList, FeaturedSlider, FiltersView, Layout, PackageCard, ResultsView, ReviewView,
    TabLink, TestimonialSlide,
};

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub hero: &'static Hero,
    pub stats: &'static [StatItem],
    pub steps: &'static [StepItem],
    pub features: &'static [FeatureItem],
    pub commitments: &'static [&'static str],
    pub slider: FeaturedSlider,
    pub slide: Option<TestimonialSlide>,
    pub faq: FaqList,
    pub cta: &'static Cta,
    pub cta_whatsapp_href: String,
    pub urgency: &'static [UrgencyItem],
    pub countdown: &'static [CountdownUnit],
}

/// Home page UI state: slider position, testimonial and open FAQ items
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub slide: Option<String>,
    pub testimonial: Option<String>,
    /// Comma-separated open FAQ indices
    pub faq: Option<String>,
}

impl HomeQuery {
    fn accordion(&self) -> Accordion {
        match self.faq.as_deref() {
            None => Accordion::default(),
            Some(raw) => Accordion::from_open(
                raw.split(',').filter_map(|i| i.trim().parse::<usize>().ok()),
            ),
        }
    }
}

fn featured_slider(state: &AppState, position: usize) -> FeaturedSlider {
    let cards: Vec<PackageCard> = state
        .catalog
        .featured()
        .map(|pkg| PackageCard::new(pkg, &state.config))
        .collect();
    let slider = PackageSlider::new(cards.len(), position);

    FeaturedSlider {
        cards,
        offset_percent: format!("{:.4}", slider.offset_percent()),
        previous_href: slider
            .can_go_back()
            .then(|| format!("/?slide={}#packages", slider.previous().current())),
        next_href: slider
            .can_go_forward()
            .then(|| format!("/?slide={}#packages", slider.next().current())),
    }
}

pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let key = format!("page:{}", uri);
    let html = state
        .cached_html(key, || {
            let template = HomeTemplate {
                layout: Layout::new(&state.config, uri.path(), views::home_meta()),
                hero: &landing::HERO,
                stats: landing::STATS,
                steps: landing::STEPS,
                features: landing::FEATURES,
                commitments: landing::COMMITMENTS,
                slider: featured_slider(&state, parse_index(query.slide.as_deref())),
                slide: TestimonialSlide::at(
                    landing::TESTIMONIALS,
                    parse_index(query.testimonial.as_deref()),
                ),
                faq: FaqList::new("", &query.accordion()),
                cta: &landing::CTA,
                cta_whatsapp_href: contact::whatsapp_link(
                    &state.config.whatsapp_number,
                    "Halo, saya ingin konsultasi paket umroh",
                ),
                urgency: landing::URGENCY,
                countdown: landing::COUNTDOWN,
            };
            template.render()
        })
        .await?;

    Ok(Html(html))
}

// ============================================================================
// Package List Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/packages.html")]
pub struct PackagesTemplate {
    pub layout: Layout,
    pub filters: FiltersView,
    pub results: ResultsView,
}

/// Results block alone, for HTMX filter and sort requests
#[derive(Template)]
#[template(path = "partials/package_results.html")]
pub struct PackageResultsTemplate {
    pub results: ResultsView,
}

pub async fn packages_page(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<BrowseQuery>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let browse = BrowseState::from_query(&query);
    let prefix = if is_htmx { "fragment" } else { "page" };
    let key = format!("{}:{}", prefix, uri);

    let html = state
        .cached_html(key, || {
            let visible = browse.apply(state.catalog.all());
            tracing::debug!(
                "Browse '{}' matched {} of {} packages",
                browse.to_query_string(),
                visible.len(),
                state.catalog.len()
            );
            let results = ResultsView::new(visible, state.catalog.len(), &browse, &state.config);

            if is_htmx {
                PackageResultsTemplate { results }.render()
            } else {
                PackagesTemplate {
                    layout: Layout::new(&state.config, uri.path(), views::packages_meta()),
                    filters: FiltersView::new(&browse),
                    results,
                }
                .render()
            }
        })
        .await?;

    Ok(Html(html))
}

// ============================================================================
// Package Detail Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/package_detail.html")]
pub struct PackageDetailTemplate {
    pub layout: Layout,
    pub pkg: &'static Package,
    pub card: PackageCard,
    pub tab: &'static str,
    pub tabs: Vec<TabLink>,
    pub features: &'static [PackageFeature],
    pub hidden_features: usize,
    pub show_all_features: bool,
    pub features_toggle_href: String,
    pub itinerary: &'static [ItineraryDay],
    pub hidden_itinerary: usize,
    pub show_all_itinerary: bool,
    pub itinerary_toggle_href: String,
    pub accommodation: AccommodationCopy,
    pub makkah_amenities: &'static [&'static str],
    pub madinah_amenities: &'static [&'static str],
    pub reviews: Vec<ReviewView>,
    pub average_rating: String,
    pub payment_options: Vec<PaymentOption>,
    pub trust_signals: &'static [&'static str],
    pub related: Vec<PackageCard>,
}

impl PackageDetailTemplate {
    fn build(state: &AppState, pkg: &'static Package, view: DetailView, path: &str) -> Self {
        let tabs = DetailTab::ALL
            .into_iter()
            .map(|tab| TabLink {
                label: tab.label(),
                href: format!("{}#detail-tabs", view.with_tab(tab).href(pkg)),
                active: tab == view.tab,
            })
            .collect();

        Self {
            layout: Layout::new(&state.config, path, PageMeta::for_package(pkg)),
            pkg,
            card: PackageCard {
                favorite_href: Some(view.toggled_favorite().href(pkg)),
                is_favorite: view.favorite,
                ..PackageCard::new(pkg, &state.config)
            },
            tab: view.tab.as_param(),
            tabs,
            features: view.visible_features(pkg.features),
            hidden_features: hidden_count(pkg.features.len()),
            show_all_features: view.show_all_features,
            features_toggle_href: format!("{}#features", view.toggled_features().href(pkg)),
            itinerary: view.visible_itinerary(ITINERARY),
            hidden_itinerary: hidden_count(ITINERARY.len()),
            show_all_itinerary: view.show_all_itinerary,
            itinerary_toggle_href: format!("{}#detail-tabs", view.toggled_itinerary().href(pkg)),
            accommodation: AccommodationCopy::for_category(pkg.category),
            makkah_amenities: MAKKAH_AMENITIES,
            madinah_amenities: MADINAH_AMENITIES,
            reviews: REVIEWS.iter().map(ReviewView::new).collect(),
            average_rating: format!("{:.1}", average_review_rating(REVIEWS)),
            payment_options: payment_options(),
            trust_signals: landing::TRUST_SIGNALS,
            related: state
                .catalog
                .related_to(pkg.id, RELATED_LIMIT)
                .into_iter()
                .map(|p| PackageCard::new(p, &state.config))
                .collect(),
        }
    }
}

pub async fn package_detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
    uri: Uri,
) -> Result<Response, AppError> {
    let Some(pkg) = state.catalog.by_id(&id) else {
        tracing::debug!("Package {} not found", id);
        return render_not_found(&state, uri.path());
    };

    let view = DetailView::from_query(&query);
    let key = format!("page:{}", uri);
    let html = state
        .cached_html(key, || {
            PackageDetailTemplate::build(&state, pkg, view, uri.path()).render()
        })
        .await?;

    Ok(Html(html).into_response())
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
    pub on_package_path: bool,
}

fn render_not_found(state: &AppState, path: &str) -> Result<Response, AppError> {
    let template = NotFoundTemplate {
        layout: Layout::new(&state.config, path, PageMeta::not_found()),
        on_package_path: path.starts_with("/packages/"),
    };
    let html = template.render()?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

/// Router fallback for unknown paths
pub async fn not_found_page(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    tracing::debug!("No route for {}", uri.path());
    render_not_found(&state, uri.path())
}
