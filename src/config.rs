//! Site configuration from environment variables
//!
//! | Variable              | Default            |
//! |-----------------------|--------------------|
//! | `PORT`                | `3000`             |
//! | `STATIC_DIR`          | `public`           |
//! | `WHATSAPP_NUMBER`     | `628123456789`     |
//! | `CONTACT_PHONE`       | `+6283197321658`   |
//! | `PAGE_CACHE_TTL_SECS` | `300`              |
//! | `PAGE_CACHE_CAPACITY` | `1000`             |

use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub port: u16,
    pub static_dir: String,
    /// Booking inquiries go here
    pub whatsapp_number: String,
    /// Shown in the navbar, CTA and footer
    pub contact_phone: String,
    pub page_cache_ttl: Duration,
    pub page_cache_capacity: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "public".to_string(),
            whatsapp_number: "628123456789".to_string(),
            contact_phone: "+6283197321658".to_string(),
            page_cache_ttl: Duration::from_secs(300),
            page_cache_capacity: 1_000,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            whatsapp_number: lookup("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            contact_phone: lookup("CONTACT_PHONE").unwrap_or(defaults.contact_phone),
            page_cache_ttl: Duration::from_secs(parse_or(
                "PAGE_CACHE_TTL_SECS",
                lookup("PAGE_CACHE_TTL_SECS"),
                defaults.page_cache_ttl.as_secs(),
            )),
            page_cache_capacity: parse_or(
                "PAGE_CACHE_CAPACITY",
                lookup("PAGE_CACHE_CAPACITY"),
                defaults.page_cache_capacity,
            ),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("Invalid {}='{}', using default {}", key, value, default);
                default
            }
        },
    }
}
