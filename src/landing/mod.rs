//! Landing page sections
//!
//! - `content`: static copy for hero, stats, steps, features, testimonials,
//!   FAQ, CTA and footer
//! - `state`: carousel, slider and accordion state for the interactive sections

pub mod content;
pub mod state;

pub use content::*;
pub use state::{
    is_package_detail_path, search_faqs, Accordion, Carousel, PackageSlider,
    TESTIMONIAL_INTERVAL_SECS,
};
