#![allow(dead_code, reason = "not every label is rendered in every build")]

pub mod common {
    pub const BRAND_NAME: &str = "Wonderful Indonesia";
    pub const LOADING: &str = "Memuat...";
    pub const LOAD_MORE: &str = "Muat Lebih Banyak";
    pub const ALL: &str = "Semua";
    pub const VIDEO_BADGE: &str = "Video";
    pub const VIEWS_TEMPLATE: &str = "{} dilihat";
    pub const DOWNLOADS_TEMPLATE: &str = "{} unduhan";
    pub const ARTICLE_COUNT_TEMPLATE: &str = "{} artikel";
    pub const BACK_HOME: &str = "Kembali ke Beranda";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Memuat";
}

pub mod header {
    pub const NAV_HOME: &str = "Beranda";
    pub const NAV_GALLERY: &str = "Galeri";
    pub const NAV_VIDEOS: &str = "Video";
    pub const NAV_STATS: &str = "Statistik";
    pub const NAV_MAIN_ARIA: &str = "Navigasi utama";
    pub const MOBILE_NAV_ARIA: &str = "Navigasi seluler";
    pub const SMART_SEARCH: &str = "Cari Cerdas";
    pub const OPEN_MENU_ARIA: &str = "Buka menu";
    pub const CLOSE_MENU_ARIA: &str = "Tutup menu";
}

pub mod footer {
    pub const TAGLINE: &str = "Jelajahi keindahan nusantara, dari Sabang sampai Merauke.";
    pub const COPYRIGHT: &str = "© 2024 Wonderful Indonesia. Semua hak dilindungi.";
}

pub mod search_modal {
    pub const TITLE: &str = "Pencarian Cerdas";
    pub const SUBTITLE: &str = "Tulis apa yang ingin Anda lihat dengan bahasa sehari-hari.";
    pub const PLACEHOLDER: &str = "Contoh: pantai di Bali untuk snorkeling";
    pub const SUBMIT: &str = "Cari";
    pub const SEARCHING: &str = "Mencari...";
    pub const INTERPRETED_PREFIX: &str = "Mencari:";
    pub const NO_RESULTS: &str = "Tidak ditemukan hasil. Coba kata kunci lain.";
    pub const EXAMPLES_TITLE: &str = "Coba cari:";
    pub const EXAMPLES: [&str; 4] = [
        "Pantai indah di Bali",
        "Video budaya Jawa Tengah",
        "Gunung di Sulawesi Selatan",
        "Kuliner khas Aceh",
    ];
    pub const CLOSE_ARIA: &str = "Tutup pencarian";
}

pub mod filter_bar {
    pub const SORT_ARIA: &str = "Urutkan";
    pub const MEDIA_ARIA: &str = "Jenis media";
    pub const SORT_RECENT: &str = "Terbaru";
    pub const SORT_POPULAR: &str = "Populer";
    pub const SORT_DOWNLOADS: &str = "Unduhan";
    pub const MEDIA_PHOTO: &str = "Foto";
    pub const MEDIA_VIDEO: &str = "Video";
    pub const SEARCH_PLACEHOLDER: &str = "Cari destinasi...";
    pub const PROVINCE_FILTER_TEMPLATE: &str = "Provinsi: {}";
    pub const CLEAR_PROVINCE_ARIA: &str = "Hapus filter provinsi";
}

pub mod province_map {
    pub const ARIA: &str = "Peta provinsi Indonesia";
    pub const RESET_VIEW: &str = "Lihat seluruh Indonesia";
}

pub mod province_panel {
    pub const LOADING: &str = "Menyiapkan rekomendasi...";
    pub const FAILED: &str = "Rekomendasi belum tersedia untuk provinsi ini.";
    pub const SHOW_ARTICLES: &str = "Tampilkan destinasi";
    pub const CLOSE_ARIA: &str = "Tutup panel provinsi";
}

pub mod home {
    pub const HERO_TITLE: &str = "Jelajahi Indonesia";
    pub const HERO_SUBTITLE: &str = "Pilih provinsi di peta untuk menemukan destinasi terbaiknya.";
    pub const STATS_PHOTOS: &str = "Foto";
    pub const STATS_VIDEOS: &str = "Video";
    pub const STATS_PROVINCES: &str = "Provinsi";
    pub const SECTION_TITLE: &str = "Galeri Destinasi";
    pub const EMPTY: &str = "Belum ada destinasi untuk filter ini.";
    pub const FLOATING_SEARCH_ARIA: &str = "Buka pencarian cerdas";
}

pub mod gallery {
    pub const PHOTO_TITLE: &str = "Galeri Foto";
    pub const VIDEO_TITLE: &str = "Galeri Video";
    pub const TOTAL_TEMPLATE: &str = "{} destinasi ditemukan";
    pub const CATEGORIES: &str = "Kategori:";
    pub const TAGS: &str = "Destinasi Populer:";
    pub const PROVINCE_ARIA: &str = "Pilih provinsi";
    pub const ALL_PROVINCES: &str = "Semua Provinsi";
    pub const EMPTY: &str = "Tidak ada destinasi yang cocok.";
}

pub mod detail {
    pub const BACK: &str = "Kembali";
    pub const NOT_FOUND_TITLE: &str = "Artikel tidak ditemukan";
    pub const NOT_FOUND_DESC: &str = "Artikel mungkin sudah dihapus atau tautannya salah.";
    pub const GALLERY_TITLE: &str = "Galeri Foto";
    pub const PHOTO_COUNT_TEMPLATE: &str = "{} foto";
    pub const TAGS: &str = "Tags:";
    pub const OPEN_IMAGE_ARIA_TEMPLATE: &str = "Buka foto {}";
}

pub mod lightbox {
    pub const CLOSE_ARIA: &str = "Tutup foto";
    pub const PREV_ARIA: &str = "Foto sebelumnya";
    pub const NEXT_ARIA: &str = "Foto berikutnya";
    pub const DOWNLOAD: &str = "Unduh";
    pub const DOWNLOADING: &str = "Mengunduh...";
    pub const THUMBNAILS_ARIA: &str = "Daftar foto";
}

pub mod stats {
    pub const TITLE: &str = "Statistik";
    pub const SUBTITLE: &str = "Ringkasan seluruh konten Wonderful Indonesia.";
    pub const TOTAL_ARTICLES: &str = "Total Artikel";
    pub const TOTAL_PHOTOS: &str = "Artikel Foto";
    pub const TOTAL_VIDEOS: &str = "Artikel Video";
    pub const TOTAL_PROVINCES: &str = "Provinsi";
    pub const TOTAL_IMAGES: &str = "Gambar";
    pub const TOTAL_VIEWS: &str = "Total Dilihat";
    pub const TOTAL_DOWNLOADS: &str = "Total Unduhan";
}

pub mod not_found {
    pub const TITLE: &str = "Halaman tidak ditemukan";
    pub const DESC: &str = "Maaf, halaman yang Anda cari tidak ada.";
}
