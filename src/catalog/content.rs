//! Itinerary and review content shown on every package detail page

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: &'static str,
    pub highlight: &'static str,
    pub activities: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    /// 1-5 stars
    pub rating: u8,
    pub content: &'static str,
    pub package: &'static str,
    pub helpful: u32,
    pub avatar: &'static str,
}

pub static ITINERARY: &[ItineraryDay] = &[
    ItineraryDay {
        day: 1,
        title: "Keberangkatan Jakarta - Madinah",
        highlight: "Berkumpul di bandara Soekarno-Hatta",
        activities: &[
            "Manasik singkat dan pembagian perlengkapan",
            "Penerbangan menuju Madinah",
            "Tiba dan check-in hotel dekat Masjid Nabawi",
        ],
    },
    ItineraryDay {
        day: 2,
        title: "Ibadah di Masjid Nabawi",
        highlight: "Ziarah Raudhah",
        activities: &[
            "Sholat berjamaah di Masjid Nabawi",
            "Ziarah ke Raudhah dan makam Rasulullah",
            "Kajian sore bersama pembimbing",
        ],
    },
    ItineraryDay {
        day: 3,
        title: "City Tour Madinah",
        highlight: "Masjid Quba & Jabal Uhud",
        activities: &[
            "Sholat sunnah di Masjid Quba",
            "Ziarah Jabal Uhud dan makam syuhada",
            "Kunjungan kebun kurma",
        ],
    },
    ItineraryDay {
        day: 4,
        title: "Madinah - Makkah",
        highlight: "Miqat di Bir Ali",
        activities: &[
            "Mandi sunnah dan berihram dari hotel",
            "Niat umroh di Bir Ali",
            "Perjalanan ke Makkah dan check-in hotel",
        ],
    },
    ItineraryDay {
        day: 5,
        title: "Pelaksanaan Umroh",
        highlight: "Thawaf, sa'i dan tahallul",
        activities: &[
            "Thawaf di Masjidil Haram",
            "Sa'i antara Shafa dan Marwah",
            "Tahallul dan istirahat",
        ],
    },
    ItineraryDay {
        day: 6,
        title: "City Tour Makkah",
        highlight: "Jabal Tsur, Arafah & Mina",
        activities: &[
            "Ziarah Jabal Tsur dan Jabal Rahmah",
            "Melintasi Arafah, Muzdalifah dan Mina",
            "Umroh kedua bagi yang berkenan",
        ],
    },
    ItineraryDay {
        day: 7,
        title: "Ibadah Mandiri",
        highlight: "Memperbanyak ibadah di Masjidil Haram",
        activities: &[
            "Sholat berjamaah lima waktu",
            "Thawaf sunnah",
            "Kajian malam bersama pembimbing",
        ],
    },
    ItineraryDay {
        day: 8,
        title: "Thawaf Wada' & Kepulangan",
        highlight: "Perpisahan dengan Baitullah",
        activities: &[
            "Thawaf wada'",
            "Perjalanan ke bandara Jeddah",
            "Penerbangan kembali ke tanah air",
        ],
    },
];

pub static REVIEWS: &[Review] = &[
    Review {
        id: 1,
        name: "Hanna Fatimah",
        location: "Bekasi",
        date: "Januari 2026",
        rating: 5,
        content: "Semua diurus tim profesional, mulai tiket, hotel sampai visa. Pembimbingnya ramah dan berpengalaman.",
        package: "Umrah Plus Mesir",
        helpful: 24,
        avatar: "/static/avatars/hana.svg",
    },
    Review {
        id: 2,
        name: "Bapak Mulyadi",
        location: "Tangerang",
        date: "Desember 2025",
        rating: 5,
        content: "Hotel, maskapai dan layanan terorganisir dengan baik. Perjalanan terasa nyaman dari awal sampai pulang.",
        package: "Umroh Premium Exclusive",
        helpful: 18,
        avatar: "/static/avatars/pakmul.svg",
    },
    Review {
        id: 3,
        name: "Muhammad Iqbal",
        location: "Sumatera Barat",
        date: "November 2025",
        rating: 4,
        content: "Harga transparan, tidak ada biaya tersembunyi. Jadwal city tour sedikit padat tapi tetap menyenangkan.",
        package: "Umrah Subsidi Uang Saku",
        helpful: 9,
        avatar: "/static/avatars/iqbal.svg",
    },
];

/// Mean star rating across the shared reviews, 0.0 when there are none
pub fn average_review_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u32 = reviews.iter().map(|r| r.rating as u32).sum();
    total as f64 / reviews.len() as f64
}
