// HTMX fragment handlers: partial HTML swapped into the home page

use askama::Template;
use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::parse_index;
use crate::landing::{Accordion, TESTIMONIALS};
use crate::site_server::AppError;
use crate::web::views::{FaqList, TestimonialSlide};

// ============================================================================
// Testimonial Carousel
// ============================================================================

/// One slide; it polls for the next one every `interval_secs`
#[derive(Template)]
#[template(path = "partials/testimonial_slide.html")]
pub struct TestimonialSlideTemplate {
    pub slide: TestimonialSlide,
}

#[derive(Debug, Default, Deserialize)]
pub struct SlideQuery {
    pub index: Option<String>,
}

pub async fn testimonial_slide(Query(query): Query<SlideQuery>) -> Result<Response, AppError> {
    let index = parse_index(query.index.as_deref());
    let Some(slide) = TestimonialSlide::at(TESTIMONIALS, index) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let html = TestimonialSlideTemplate { slide }.render()?;
    Ok(Html(html).into_response())
}

// ============================================================================
// FAQ Search
// ============================================================================

#[derive(Template)]
#[template(path = "partials/faq_list.html")]
pub struct FaqListTemplate {
    pub faq: FaqList,
}

#[derive(Debug, Default, Deserialize)]
pub struct FaqQuery {
    pub q: Option<String>,
}

pub async fn faq_list(Query(query): Query<FaqQuery>) -> Result<Html<String>, AppError> {
    let term = query.q.as_deref().unwrap_or("");
    let faq = FaqList::new(term, &Accordion::default());
    tracing::debug!("FAQ search '{}' matched {}", term, faq.entries.len());

    Ok(Html(FaqListTemplate { faq }.render()?))
}
