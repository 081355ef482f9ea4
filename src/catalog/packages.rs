//! Bundled package records
//!
//! Each package is a `const` so tests can build variant catalogs from it.

use super::pricing::Price;
use super::{Category, Departure, GroupSize, Included, Package, PackageFeature};

pub const EKONOMI_9_HARI: Package = Package {
    id: "ekonomi-9-hari",
    name: "Umrah Subsidi Uang Saku",
    category: Category::Economy,
    duration: 9,
    price: Price {
        original: 28_000_000,
        discounted: Some(27_000_000),
        currency: "IDR",
    },
    image: "/static/packages/subsidi.svg",
    badge: Some("Hemat"),
    description: "Paket umrah 7 malam 6 hari dengan subsidi uang saku Rp 4.000.000 per jamaah. \
        Standar PPIU Kemenag, bimbingan mutawwif berpengalaman, dan ziarah ke tempat-tempat \
        bersejarah di Makkah dan Madinah.",
    highlights: &[
        "Hotel dekat Masjidil Haram (walking distance)",
        "Makan 3x sehari buffet halal berkualitas",
        "Bimbingan manasik lengkap sebelum keberangkatan",
        "Transportasi AC yang nyaman selama di Arab Saudi",
        "Grup maksimal 45 orang untuk pengalaman yang lebih personal",
        "Visa umroh dan asuransi perjalanan basic",
    ],
    included: Included {
        accommodation: "Tiket pesawat PP & visa Saudi",
        meals: "Makan 3x sehari (buffet halal)",
        transportation: "Transfer bandara + city tour Makkah & Madinah",
        guidance: "Mutawwif / mutawwifah, panduan & manasik online",
        documentation: "Visa umroh, asuransi perjalanan, passport assistance",
        extras: &["Pakaian pengenal", "Kain ihram", "Tanda pengenal", "Buku doa", "Air zam-zam 5L"],
    },
    features: &[
        PackageFeature { name: "Hotel ★★★★ / setaraf", included: true },
        PackageFeature { name: "Makanan berat", included: true },
        PackageFeature { name: "Transfer bandara + city tour", included: true },
        PackageFeature { name: "Bimbingan manasik", included: true },
        PackageFeature { name: "City tour Mekkah & Madinah", included: false },
        PackageFeature { name: "Visa umroh", included: false },
    ],
    departure_schedule: &[
        Departure { month: "Februari 2026", dates: &["15", "22"], available: true },
        Departure { month: "Maret 2026", dates: &["8", "15", "29"], available: true },
        Departure { month: "April 2026", dates: &["5", "19"], available: true },
    ],
    group_size: GroupSize { min: 15, max: 45 },
    rating: 4.5,
    review_count: 89,
    popularity_rank: None,
    is_popular: true,
    is_best_seller: false,
    is_new_package: false,
};

pub const REGULER_12_HARI: Package = Package {
    id: "reguler-12-hari",
    name: "Umrah Plus Mesir",
    category: Category::Regular,
    duration: 12,
    price: Price {
        original: 25_500_000,
        discounted: Some(23_500_000),
        currency: "IDR",
    },
    image: "/static/packages/umrahmesir.svg",
    badge: Some("Terpopuler"),
    description: "Paket umroh lengkap dengan fasilitas terbaik dan city tour yang menarik. \
        Ideal untuk jamaah yang menginginkan pengalaman spiritual yang berkesan dengan \
        kenyamanan maksimal.",
    highlights: &[
        "Hotel bintang 4 lokasi strategis dekat Masjidil Haram",
        "City tour Madinah & Makkah dengan guide berpengalaman",
        "Grup maksimal 35 orang untuk pelayanan personal",
        "Free upgrade kamar (subject to availability)",
        "Asuransi perjalanan comprehensive",
        "Bimbingan manasik lengkap sebelum keberangkatan",
    ],
    included: Included {
        accommodation: "Hotel bintang 4 dekat Masjidil Haram & Masjid Nabawi",
        meals: "Makan 3x sehari + snack sore (buffet halal)",
        transportation: "Bus VIP AC, pesawat ekonomi class",
        guidance: "Pembimbing senior & ceramah harian",
        documentation: "Visa umroh, asuransi perjalanan",
        extras: &["Tas koper premium", "Mukena/sarung", "Air zam-zam 10L", "City tour"],
    },
    features: &[
        PackageFeature { name: "Hotel bintang 4", included: true },
        PackageFeature { name: "City tour lengkap", included: true },
        PackageFeature { name: "Grup kecil (max 35)", included: true },
        PackageFeature { name: "Asuransi perjalanan", included: true },
        PackageFeature { name: "Spa & wellness", included: false },
        PackageFeature { name: "Private guide", included: false },
    ],
    departure_schedule: &[
        Departure { month: "Februari 2026", dates: &["10", "24"], available: true },
        Departure { month: "Maret 2026", dates: &["10", "24"], available: true },
        Departure { month: "April 2026", dates: &["7", "21"], available: true },
        Departure { month: "Mei 2026", dates: &["5", "19"], available: false },
    ],
    group_size: GroupSize { min: 25, max: 35 },
    rating: 4.8,
    review_count: 156,
    popularity_rank: Some(1),
    is_popular: false,
    is_best_seller: true,
    is_new_package: false,
};

pub const PREMIUM_14_HARI: Package = Package {
    id: "premium-14-hari",
    name: "Umroh Premium Exclusive",
    category: Category::Premium,
    duration: 14,
    price: Price {
        original: 35_000_000,
        discounted: Some(32_000_000),
        currency: "IDR",
    },
    image: "https://images.unsplash.com/photo-1591604157118-b94e2684f857?q=80&w=2070&auto=format&fit=crop",
    badge: Some("Premium"),
    description: "Pengalaman umroh mewah dengan hotel bintang 5 dan fasilitas premium. \
        Nikmati kenyamanan ekstra dengan pelayanan VIP dan akses eksklusif.",
    highlights: &[
        "Hotel bintang 5 premium view Masjidil Haram",
        "Private transportation untuk kenyamanan maksimal",
        "Exclusive dining experience dengan menu pilihan",
        "Personal assistant selama perjalanan",
        "Spa dan wellness treatment",
        "Shopping tour dengan personal shopper",
    ],
    included: Included {
        accommodation: "Hotel bintang 5 premium view Haram",
        meals: "Fine dining 3x sehari + afternoon tea",
        transportation: "Private bus, business class flight",
        guidance: "Ustadz senior & spiritual counselor",
        documentation: "Fast track visa, premium insurance",
        extras: &["Luggage premium set", "Prayer kit deluxe", "Air zam-zam 20L", "Spa treatment"],
    },
    features: &[
        PackageFeature { name: "Hotel bintang 5", included: true },
        PackageFeature { name: "Business class flight", included: true },
        PackageFeature { name: "Private transportation", included: true },
        PackageFeature { name: "Personal assistant", included: true },
        PackageFeature { name: "Spa & wellness", included: true },
        PackageFeature { name: "Shopping tour", included: true },
    ],
    departure_schedule: &[
        Departure { month: "Februari 2026", dates: &["12", "26"], available: true },
        Departure { month: "Maret 2026", dates: &["12", "26"], available: true },
        Departure { month: "April 2026", dates: &["9", "23"], available: false },
    ],
    group_size: GroupSize { min: 15, max: 25 },
    rating: 4.9,
    review_count: 73,
    popularity_rank: None,
    is_popular: true,
    is_best_seller: false,
    is_new_package: false,
};

pub const PREMIUM_14_HARI_TURKI: Package = Package {
    id: "premium-14-hari-turki",
    name: "Umrah Plus Turki",
    category: Category::Premium,
    duration: 14,
    price: Price {
        original: 35_000_000,
        discounted: Some(32_000_000),
        currency: "IDR",
    },
    image: "/static/packages/umrahturki.svg",
    badge: Some("Premium"),
    description: "Paket umroh + Turki dengan fasilitas premium. Cocok untuk jamaah yang ingin \
        ibadah sekaligus wisata sejarah Turki.",
    highlights: &[
        "Hotel nyaman & lokasi strategis",
        "Program umroh lengkap (Makkah & Madinah)",
        "Itinerary Turki (Istanbul dan sekitarnya)",
        "Kunjungan Hagia Sophia & Masjid Biru",
        "Pembimbing berpengalaman sepanjang perjalanan",
        "Makan 3x sehari menu Indonesia & lokal",
    ],
    included: Included {
        accommodation: "Hotel bintang 4-5 di Makkah, Madinah & Istanbul",
        meals: "Makan 3x sehari (menu Indonesia & lokal)",
        transportation: "Pesawat PP + bus pariwisata AC",
        guidance: "Mutawwif & tour leader Turki",
        documentation: "Visa umroh, e-visa Turki, asuransi perjalanan",
        extras: &["Tas & seragam", "Buku doa", "Air zam-zam 5L", "Tiket wisata Istanbul"],
    },
    features: &[
        PackageFeature { name: "Hotel bintang 4-5", included: true },
        PackageFeature { name: "City tour Istanbul", included: true },
        PackageFeature { name: "Bimbingan manasik", included: true },
        PackageFeature { name: "Asuransi perjalanan", included: true },
        PackageFeature { name: "Cruise Bosphorus", included: false },
        PackageFeature { name: "Private guide", included: false },
    ],
    departure_schedule: &[
        Departure { month: "Maret 2026", dates: &["3", "17"], available: true },
        Departure { month: "April 2026", dates: &["14"], available: true },
        Departure { month: "Mei 2026", dates: &["12"], available: false },
    ],
    group_size: GroupSize { min: 20, max: 40 },
    rating: 4.7,
    review_count: 64,
    popularity_rank: Some(2),
    is_popular: false,
    is_best_seller: false,
    is_new_package: true,
};

pub const VIP_16_HARI: Package = Package {
    id: "vip-16-hari",
    name: "Umroh VIP Signature",
    category: Category::Vip,
    duration: 16,
    price: Price {
        original: 48_000_000,
        discounted: None,
        currency: "IDR",
    },
    image: "/static/packages/umrahvip.svg",
    badge: Some("VIP"),
    description: "Layanan umroh eksklusif dengan hotel suite bintang 5 di pelataran Haram, \
        transportasi privat, dan pendampingan personal selama 16 hari.",
    highlights: &[
        "Suite room bintang 5 di pelataran Masjidil Haram",
        "Luxury private car selama di Arab Saudi",
        "First class flight maskapai pilihan",
        "Mutawwif pribadi untuk setiap keluarga",
        "Grup sangat kecil maksimal 15 orang",
        "Program ziarah eksklusif Thaif & Badr",
    ],
    included: Included {
        accommodation: "Suite hotel bintang 5 view Ka'bah & Masjid Nabawi",
        meals: "Fine dining 3x sehari + room service",
        transportation: "Luxury private car, first class flight",
        guidance: "Ustadz senior & mutawwif pribadi",
        documentation: "Fast track visa, premium insurance, VIP lounge",
        extras: &["Luggage premium set", "Prayer kit deluxe", "Air zam-zam 20L", "Spa treatment", "Photo & video dokumentasi"],
    },
    features: &[
        PackageFeature { name: "Suite bintang 5", included: true },
        PackageFeature { name: "First class flight", included: true },
        PackageFeature { name: "Private car", included: true },
        PackageFeature { name: "Mutawwif pribadi", included: true },
        PackageFeature { name: "Spa & wellness", included: true },
        PackageFeature { name: "Ziarah Thaif & Badr", included: true },
    ],
    departure_schedule: &[
        Departure { month: "Februari 2026", dates: &["20"], available: true },
        Departure { month: "April 2026", dates: &["16"], available: true },
    ],
    group_size: GroupSize { min: 5, max: 15 },
    rating: 5.0,
    review_count: 21,
    popularity_rank: None,
    is_popular: false,
    is_best_seller: false,
    is_new_package: false,
};

/// The full bundled catalog, in display order
pub const PACKAGES: &[Package] = &[
    EKONOMI_9_HARI,
    REGULER_12_HARI,
    PREMIUM_14_HARI,
    PREMIUM_14_HARI_TURKI,
    VIP_16_HARI,
];
