//! Interactive section state
//!
//! Each interactive section owns one of these. They are plain values passed in
//! via query parameters and never shared between sections.

use super::content::FaqItem;
use std::collections::BTreeSet;

/// Auto-advance period for the testimonial carousel
pub const TESTIMONIAL_INTERVAL_SECS: u64 = 5;

/// Wrap-around index over `len` slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Out-of-range indices wrap; an empty carousel stays at 0
    pub fn new(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&self) -> Self {
        Self::new(self.len, self.index + 1)
    }

    pub fn previous(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self::new(self.len, self.index + self.len - 1)
    }

    pub fn go_to(&self, index: usize) -> Self {
        Self::new(self.len, index)
    }
}

/// Featured-package slider; the position is clamped rather than wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSlider {
    current: usize,
    max_slide: usize,
}

impl PackageSlider {
    pub const SLIDES_TO_SHOW: usize = 3;

    pub fn new(item_count: usize, current: usize) -> Self {
        let max_slide = item_count.saturating_sub(Self::SLIDES_TO_SHOW);
        Self {
            current: current.min(max_slide),
            max_slide,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current < self.max_slide
    }

    pub fn next(&self) -> Self {
        Self {
            current: (self.current + 1).min(self.max_slide),
            ..*self
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            current: self.current.saturating_sub(1),
            ..*self
        }
    }

    /// CSS translate offset in percent
    pub fn offset_percent(&self) -> f64 {
        self.current as f64 * (100.0 / Self::SLIDES_TO_SHOW as f64)
    }
}

/// Multi-open accordion keyed by item index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    open: BTreeSet<usize>,
}

impl Default for Accordion {
    /// First item open
    fn default() -> Self {
        Self {
            open: BTreeSet::from([0]),
        }
    }
}

impl Accordion {
    pub fn from_open<I: IntoIterator<Item = usize>>(open: I) -> Self {
        Self {
            open: open.into_iter().collect(),
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.open.remove(&index) {
            self.open.insert(index);
        }
    }

    pub fn open_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().copied()
    }
}

/// Case-insensitive FAQ search over question and answer text
pub fn search_faqs<'a>(faqs: &'a [FaqItem], term: &str) -> Vec<&'a FaqItem> {
    let needle = term.trim().to_lowercase();
    faqs.iter()
        .filter(|faq| {
            needle.is_empty()
                || faq.question.to_lowercase().contains(&needle)
                || faq.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

/// `/packages/{id}` with exactly one non-empty segment after `/packages/`
pub fn is_package_detail_path(path: &str) -> bool {
    match path.strip_prefix("/packages/") {
        Some(rest) => !rest.is_empty() && !rest.contains('/'),
        None => false,
    }
}
