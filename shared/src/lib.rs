//! Data models and view logic shared by the Wonderful Indonesia gallery.
//!
//! Everything here is free of browser APIs so it compiles for both the
//! `wasm32` frontend and native test runs.

pub mod detail;
pub mod download;
pub mod error;
pub mod filter;
pub mod format;
pub mod lightbox;
pub mod listing;
pub mod map;
pub mod models;
pub mod sequence;

pub use detail::DetailOutcome;
pub use error::ApiError;
pub use filter::{ArticleFilter, ArticleQuery, SortBy};
pub use lightbox::Lightbox;
pub use listing::{ArticleList, ListPage, ListTicket};
pub use models::{
    AiSearchRequest, AiSearchResponse, ArticleDetail, ArticleImage, ArticlePage, ArticleSummary,
    CategoryInfo, DownloadReceipt, InterpretedQuery, PopularTag, Province, ProvinceRecommendation,
    SiteStats,
};
pub use sequence::{RequestSequencer, RequestTicket};
