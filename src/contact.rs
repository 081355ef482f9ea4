//! Outbound contact links: WhatsApp deep links and `tel:` links
//!
//! Booking has no server-side flow. Every "Book" / "Hubungi" action is a link
//! into WhatsApp with a prefilled message, or a phone call.

use crate::catalog::Package;

/// Strip everything but ASCII digits (`+62 831-9732` -> `628319732`)
pub fn digits_only(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Prefilled WhatsApp message for a package inquiry
pub fn booking_message(package_name: &str) -> String {
    format!("Halo, saya tertarik dengan paket {}", package_name)
}

/// `https://wa.me/{digits}?text={message}` with the message percent-encoded
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits_only(number),
        urlencoding::encode(message)
    )
}

/// Plain chat link with no prefilled text
pub fn whatsapp_chat_link(number: &str) -> String {
    format!("https://wa.me/{}", digits_only(number))
}

pub fn package_booking_link(number: &str, pkg: &Package) -> String {
    whatsapp_link(number, &booking_message(pkg.name))
}

/// `tel:` link keeping a leading `+`
pub fn tel_link(phone: &str) -> String {
    let trimmed = phone.trim();
    if trimmed.starts_with('+') {
        format!("tel:+{}", digits_only(trimmed))
    } else {
        format!("tel:{}", digits_only(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::packages::REGULER_12_HARI;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("+62 831-9732-1658"), "6283197321658");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link("+628123456789", "Halo, saya tertarik dengan paket Umrah Plus Mesir");
        assert_eq!(
            link,
            "https://wa.me/628123456789?text=Halo%2C%20saya%20tertarik%20dengan%20paket%20Umrah%20Plus%20Mesir"
        );
    }

    #[test]
    fn test_package_booking_link_interpolates_name() {
        let link = package_booking_link("628123456789", &REGULER_12_HARI);
        assert!(link.starts_with("https://wa.me/628123456789?text="));
        assert!(link.ends_with("Umrah%20Plus%20Mesir"));
    }

    #[test]
    fn test_chat_link() {
        assert_eq!(whatsapp_chat_link("+62 831 9732 1658"), "https://wa.me/6283197321658");
    }

    #[test]
    fn test_tel_link() {
        assert_eq!(tel_link("+6283197321658"), "tel:+6283197321658");
        assert_eq!(tel_link("0812-345"), "tel:0812345");
    }
}
