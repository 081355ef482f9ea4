//! Package Pricing
//!
//! Effective price, discount percentage and Indonesian-locale currency
//! formatting. Amounts are whole currency units (no fractional rupiah).

use serde::Serialize;

/// Minimum down payment quoted on the booking sidebar
pub const MIN_DOWN_PAYMENT: u64 = 5_000_000;

pub const DEFAULT_CURRENCY: &str = "IDR";

/// Listed price with an optional promotional price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Price {
    pub original: u64,
    pub discounted: Option<u64>,
    pub currency: &'static str,
}

impl Price {
    pub fn effective(&self) -> u64 {
        effective_price(self)
    }

    pub fn discount_percentage(&self) -> u32 {
        discount_percentage(self.original, self.discounted)
    }

    pub fn has_discount(&self) -> bool {
        self.discounted.is_some()
    }

    pub fn formatted(&self) -> String {
        format_price(self.effective(), self.currency)
    }

    pub fn formatted_original(&self) -> String {
        format_price(self.original, self.currency)
    }
}

/// Discounted price if set, otherwise the original listed price
pub fn effective_price(price: &Price) -> u64 {
    price.discounted.unwrap_or(price.original)
}

/// Rounded percentage drop from original to discounted price
///
/// Returns 0 when there is no discount or the original is zero. Rounds to the
/// nearest integer, so 25.5M -> 23.5M is 7.84% and reports 8.
pub fn discount_percentage(original: u64, discounted: Option<u64>) -> u32 {
    let Some(discounted) = discounted else {
        return 0;
    };
    if original == 0 {
        return 0;
    }

    let drop = original.saturating_sub(discounted) as f64;
    let pct = (drop / original as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

/// Render an amount as an `id-ID` currency string with no fraction digits
///
/// `format_price(23_500_000, "IDR")` gives `"Rp\u{a0}23.500.000"`. Unknown
/// currency codes are shown by code.
pub fn format_price(amount: u64, currency: &str) -> String {
    let symbol = match currency {
        "IDR" => "Rp",
        "USD" => "US$",
        "SAR" => "SAR",
        other => other,
    };
    format!("{}\u{a0}{}", symbol, group_thousands(amount))
}

/// `1234567` -> `"1.234.567"`
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(original: u64, discounted: Option<u64>) -> Price {
        Price {
            original,
            discounted,
            currency: DEFAULT_CURRENCY,
        }
    }

    #[test]
    fn test_effective_price_prefers_discount() {
        assert_eq!(effective_price(&price(25_500_000, Some(23_500_000))), 23_500_000);
        assert_eq!(effective_price(&price(25_500_000, None)), 25_500_000);
    }

    #[test]
    fn test_discount_percentage_rounds() {
        // (25.5M - 23.5M) / 25.5M = 7.84% -> 8
        assert_eq!(discount_percentage(25_500_000, Some(23_500_000)), 8);
        // 28M -> 27M = 3.57% -> 4
        assert_eq!(discount_percentage(28_000_000, Some(27_000_000)), 4);
        // 35M -> 32M = 8.57% -> 9
        assert_eq!(discount_percentage(35_000_000, Some(32_000_000)), 9);
    }

    #[test]
    fn test_discount_percentage_without_discount() {
        assert_eq!(discount_percentage(25_500_000, None), 0);
        assert_eq!(discount_percentage(0, Some(0)), 0);
    }

    #[test]
    fn test_discount_percentage_bounds() {
        assert_eq!(discount_percentage(10, Some(0)), 100);
        // Invalid data (discount above original) never goes negative
        assert_eq!(discount_percentage(10, Some(20)), 0);
    }

    #[test]
    fn test_format_price_idr() {
        assert_eq!(format_price(23_500_000, "IDR"), "Rp\u{a0}23.500.000");
        assert_eq!(format_price(5_000_000, "IDR"), "Rp\u{a0}5.000.000");
        assert_eq!(format_price(999, "IDR"), "Rp\u{a0}999");
        assert_eq!(format_price(0, "IDR"), "Rp\u{a0}0");
    }

    #[test]
    fn test_format_price_other_currency() {
        assert_eq!(format_price(1_500, "USD"), "US$\u{a0}1.500");
        assert_eq!(format_price(1_500, "EUR"), "EUR\u{a0}1.500");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1), "1");
        assert_eq!(group_thousands(1_000), "1.000");
        assert_eq!(group_thousands(100_000), "100.000");
        assert_eq!(group_thousands(1_234_567), "1.234.567");
    }
}
