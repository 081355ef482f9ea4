//! Landing page copy
//!
//! Static section content for the home page, in display order.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub text: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
    pub background_image: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatItem {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepItem {
    pub number: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub content: &'static str,
    pub avatar: &'static str,
    pub package: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cta {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub button_href: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct UrgencyItem {
    pub text: &'static str,
    pub subtext: &'static str,
}

/// Promotional countdown, display only
#[derive(Debug, Clone, Serialize)]
pub struct CountdownUnit {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub logo: &'static str,
}

// ============================================================================
// Navigation
// ============================================================================

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Beranda", href: "/#hero" },
    NavItem { label: "Paket Umroh", href: "/packages" },
    NavItem { label: "Tentang Kami", href: "/#features" },
    NavItem { label: "Testimoni", href: "/#testimonials" },
    NavItem { label: "FAQ", href: "/#faq" },
    NavItem { label: "Kontak", href: "/#contact" },
];

pub const TAGLINE: &str = "Umroh Ditangan Anda";

// ============================================================================
// Sections
// ============================================================================

pub static HERO: Hero = Hero {
    title: "Wujudkan Umroh Impian Anda",
    subtitle: "Travel Umroh Terpercaya",
    description: "Perjalanan ibadah yang nyaman, aman dan penuh makna bersama pembimbing \
        berpengalaman dan layanan yang jujur serta transparan.",
    primary_cta: CallToAction {
        text: "Lihat Paket Umroh",
        href: "/packages",
    },
    secondary_cta: CallToAction {
        text: "Lihat Video",
        href: "#steps",
    },
    background_image: "/static/hero.svg",
};

pub static STATS: &[StatItem] = &[
    StatItem { value: "Terlayani", label: "Pendampingan ramah untuk setiap jamaah.", icon: "users" },
    StatItem { value: "Kepuasan", label: "Layanan responsif dan nyaman.", icon: "star" },
    StatItem { value: "Pengalaman", label: "Tim berpengalaman siap membantu.", icon: "calendar" },
    StatItem { value: "Tersedia", label: "Paket sesuai kebutuhan Anda.", icon: "map-pin" },
    StatItem { value: "Prioritas", label: "Kenyamanan ibadah jadi prioritas.", icon: "award" },
    StatItem { value: "Akses", label: "Bisa diakses dari berbagai kota.", icon: "heart" },
];

pub static STEPS: &[StepItem] = &[
    StepItem {
        number: 1,
        title: "Konsultasi Gratis",
        description: "Hubungi tim ahli kami untuk mendapatkan informasi lengkap tentang paket umroh \
            yang sesuai kebutuhan dan budget Anda.",
        icon: "message-circle",
    },
    StepItem {
        number: 2,
        title: "Pilih Paket",
        description: "Tentukan paket umroh terbaik dari berbagai pilihan yang tersedia dengan \
            fasilitas dan harga yang transparan.",
        icon: "file-text",
    },
    StepItem {
        number: 3,
        title: "Pembayaran",
        description: "Lakukan pembayaran dengan sistem cicilan yang fleksibel dan aman melalui \
            berbagai metode pembayaran.",
        icon: "credit-card",
    },
    StepItem {
        number: 4,
        title: "Berangkat",
        description: "Siap berangkat dengan persiapan lengkap, dokumentasi lengkap, dan bimbingan \
            spiritual dari tim berpengalaman.",
        icon: "plane",
    },
];

pub static FEATURES: &[FeatureItem] = &[
    FeatureItem {
        title: "Bimbingan Spiritual Lengkap",
        description: "Tim pembimbing berpengalaman mendampingi perjalanan ibadah Anda dengan materi \
            spiritual yang komprehensif dan bimbingan manasik yang detail.",
        icon: "heart",
    },
    FeatureItem {
        title: "Akomodasi Premium",
        description: "Hotel bintang 4-5 di lokasi strategis dekat Masjidil Haram dan Masjid Nabawi \
            dengan fasilitas modern dan pelayanan terbaik.",
        icon: "map-pin",
    },
    FeatureItem {
        title: "Jaminan Keamanan",
        description: "Perjalanan yang aman dengan asuransi lengkap, dokumentasi resmi, dan sistem \
            keamanan 24/7 untuk ketenangan pikiran Anda.",
        icon: "shield",
    },
    FeatureItem {
        title: "Grup Kecil Eksklusif",
        description: "Maksimal 45 jamaah per grup untuk pelayanan yang lebih personal, perhatian \
            khusus, dan kekeluargaan yang erat selama perjalanan.",
        icon: "users",
    },
    FeatureItem {
        title: "Fleksibilitas Jadwal",
        description: "Berbagai pilihan keberangkatan sepanjang tahun dengan durasi 9-16 hari sesuai \
            kebutuhan dan kesempatan Anda.",
        icon: "clock",
    },
    FeatureItem {
        title: "Sertifikat Resmi",
        description: "Bersertifikat resmi Kementerian Agama dan IATA dengan track record pelayanan \
            umroh terpercaya sejak tahun 2015.",
        icon: "award",
    },
];

pub static COMMITMENTS: &[&str] = &[
    "Konsultasi gratis sebelum keberangkatan",
    "Pendampingan 24/7 selama di tanah suci",
    "Garansi kepuasan atau uang kembali",
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Hanna Fatimah, S.Gz, M.Gz.",
        location: "Bekasi",
        rating: 5,
        content: "Umroh backpacker di Rehlatours benar-benar fleksibel dan bikin nagih! Semua diurus \
            tim profesional, mulai tiket, hotel, sampai visa. Pembimbingnya ramah dan berpengalaman.",
        avatar: "/static/avatars/hana.svg",
        package: "Paket Umroh Reguler 9 Hari",
    },
    Testimonial {
        id: 2,
        name: "Bapak Mulyadi",
        location: "Tangerang",
        rating: 5,
        content: "Awalnya ragu, ternyata umroh bareng Rehlatours nyaman dan seru banget! Hotel, \
            maskapai, dan layanan terorganisir. Umroh jadi pengalaman spiritual yang berkesan.",
        avatar: "/static/avatars/pakmul.svg",
        package: "Paket Umroh Premium 10 Hari",
    },
    Testimonial {
        id: 3,
        name: "Reviani Lestari, S.P",
        location: "Bandung",
        rating: 5,
        content: "Awalnya kira fasilitas standar, ternyata semua serba profesional dan nyaman, dari \
            tiket, hotel, sampai request itinerary bebas.",
        avatar: "/static/avatars/revi.svg",
        package: "Paket Umroh VIP 16 Hari",
    },
    Testimonial {
        id: 4,
        name: "Muhammad Iqbal",
        location: "Sumatera Barat",
        rating: 5,
        content: "Rehlatours.id benar-benar amanah. Harga transparan, tidak ada biaya tersembunyi. \
            Pelayanan ramah dan profesional.",
        avatar: "/static/avatars/iqbal.svg",
        package: "Paket Umroh Ekonomi 10 Hari",
    },
    Testimonial {
        id: 5,
        name: "Afif Fachry, Lc.",
        location: "Sumatera Barat",
        rating: 5,
        content: "Perjalanan umroh pertama saya dan keluarga berjalan dengan sempurna. Grup kecil \
            membuat suasana lebih intim dan kekeluargaan.",
        avatar: "/static/avatars/afif.svg",
        package: "Paket Umroh Keluarga 12 Hari",
    },
];

pub static FAQS: &[FaqItem] = &[
    FaqItem {
        question: "Bagaimana cara mendaftar umroh di Rehlatours.id?",
        answer: "Pendaftaran sangat mudah! Anda bisa menghubungi kami melalui WhatsApp, telepon, atau \
            datang langsung ke kantor. Proses pendaftaran hanya membutuhkan fotokopi KTP, KK, dan \
            foto 4x6 latar belakang putih.",
    },
    FaqItem {
        question: "Apakah ada sistem cicilan untuk pembayaran?",
        answer: "Ya, kami menyediakan sistem cicilan yang fleksibel mulai dari 6 bulan hingga 12 \
            bulan. Anda cukup membayar DP minimal 5 juta rupiah, sisanya bisa dicicil hingga 1 bulan \
            sebelum keberangkatan.",
    },
    FaqItem {
        question: "Apa saja yang sudah termasuk dalam paket umroh?",
        answer: "Paket umroh kami sudah all-inclusive meliputi tiket pesawat PP, visa umroh, hotel \
            dekat Masjidil Haram dan Masjid Nabawi, transportasi selama di Arab Saudi, makan 3x \
            sehari, air zam-zam, dan pembimbing berpengalaman.",
    },
    FaqItem {
        question: "Berapa lama proses pengurusan visa umroh?",
        answer: "Proses pengurusan visa umroh membutuhkan waktu 14-21 hari kerja setelah dokumen \
            lengkap diserahkan. Kami membantu mengurus semua dokumen termasuk paspor.",
    },
    FaqItem {
        question: "Apakah ada pembimbing yang mendampingi selama umroh?",
        answer: "Tentu saja! Setiap grup didampingi oleh mutawwif berpengalaman dan berlisensi resmi \
            yang membantu pelaksanaan manasik dan mendampingi 24/7 selama di tanah suci.",
    },
    FaqItem {
        question: "Bagaimana jika ada masalah kesehatan selama perjalanan?",
        answer: "Kami menyediakan asuransi perjalanan yang mencakup biaya pengobatan di Arab Saudi \
            dan bekerja sama dengan rumah sakit di Makkah dan Madinah.",
    },
];

pub static CTA: Cta = Cta {
    title: "Jangan Tunda Niat Baikmu, Mulai Umroh Pertamamu Hari Ini!",
    subtitle: "Penawaran Terbatas untuk Jamaah Baru",
    description: "Wujudkan impian ke tanah suci dengan proses mudah, bimbingan ramah, dan harga \
        terjangkau. Kami berkomitmen memberikan layanan jujur, transparan, dan selalu siap \
        mendampingi setiap langkah perjalanan umroh Anda.",
    button_text: "Daftar Sekarang - Promo Terbatas",
    button_href: "#contact",
    features: &[
        "Pendaftaran mudah dan dibantu tim profesional",
        "Bimbingan manasik & konsultasi gratis sebelum keberangkatan",
        "Proses dokumen umroh mudah dan jelas",
        "Fleksibilitas paket sesuai kebutuhan jamaah",
        "Harga transparan dan bisa konsultasi langsung",
        "Cicilan 0% hingga 12 bulan tanpa bunga",
    ],
};

pub static URGENCY: &[UrgencyItem] = &[
    UrgencyItem { text: "Tersisa 3 Hari", subtext: "Promo berakhir" },
    UrgencyItem { text: "47 Slot Tersisa", subtext: "dari 100 kuota" },
    UrgencyItem { text: "Bonus Eksklusif", subtext: "Senilai Rp 2.5 Juta" },
];

pub static COUNTDOWN: &[CountdownUnit] = &[
    CountdownUnit { value: "02", label: "Hari" },
    CountdownUnit { value: "14", label: "Jam" },
    CountdownUnit { value: "32", label: "Menit" },
    CountdownUnit { value: "45", label: "Detik" },
];

// ============================================================================
// Footer
// ============================================================================

pub const COMPANY_DESCRIPTION: &str = "Rehlatours.id adalah travel umroh yang berkomitmen memberi \
    layanan ramah, jujur, dan transparan bagi jamaah baru dan keluarga. Kami selalu siap \
    mendampingi perjalanan spiritual Anda ke Tanah Suci dengan solusi fleksibel dan proses yang mudah.";

pub const CONTACT_EMAIL: &str = "info@rehlatours.id";

pub const OFFICE_ADDRESS: &str =
    "Permata Biru Rw 001 Rt 027 Desa Cinunuk Kec. Cileunyi Kab. Bandung Jawa Barat";

pub static FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "Layanan Umroh",
        links: &[
            FooterLink { label: "Paket Umroh Reguler", href: "/packages?category=reguler" },
            FooterLink { label: "Paket Umroh Premium", href: "/packages?category=premium" },
            FooterLink { label: "Paket Umroh VIP", href: "/packages?category=vip" },
            FooterLink { label: "Umroh Plus Turki", href: "/packages/premium-14-hari-turki" },
            FooterLink { label: "Semua Paket", href: "/packages" },
        ],
    },
    FooterSection {
        title: "Informasi",
        links: &[
            FooterLink { label: "Mengapa Memilih Kami", href: "/#features" },
            FooterLink { label: "Langkah Pendaftaran", href: "/#steps" },
            FooterLink { label: "Testimoni Jamaah", href: "/#testimonials" },
        ],
    },
    FooterSection {
        title: "Bantuan",
        links: &[
            FooterLink { label: "FAQ", href: "/#faq" },
            FooterLink { label: "Hubungi Kami", href: "/#contact" },
        ],
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { platform: "Facebook", href: "https://facebook.com/rehlatours.id" },
    SocialLink { platform: "Instagram", href: "https://instagram.com/rehlatours.id" },
    SocialLink { platform: "YouTube", href: "https://youtube.com/rehlatoursid" },
    SocialLink { platform: "Twitter", href: "https://twitter.com/rehlatoursid" },
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification { name: "Kementerian Agama RI", logo: "/static/images/logo-kemenag.svg" },
    Certification { name: "IATA", logo: "/static/images/logo-iata.svg" },
    Certification { name: "ASITA", logo: "/static/images/logo-asita.svg" },
    Certification { name: "ISO 9001", logo: "/static/images/logo-iso.svg" },
];

/// Trust signals under the booking sidebar
pub static TRUST_SIGNALS: &[&str] = &[
    "Berlisensi Resmi Kemenag",
    "Garansi Uang Kembali",
    "ISO 9001:2015 Certified",
];
