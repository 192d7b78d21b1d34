//! Gallery filter and its projection onto the article list query string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page size of the landing page grid.
pub const DEFAULT_LIST_LIMIT: usize = 12;

/// Page size of the gallery pages.
pub const GALLERY_PAGE_SIZE: usize = 24;

/// Article ordering understood by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest posting date first.
    #[default]
    Recent,
    /// Most viewed first.
    Popular,
    /// Most downloaded first.
    Downloads,
}

impl SortBy {
    /// Every ordering, in the order the filter bar shows them.
    pub const ALL: [SortBy; 3] = [SortBy::Recent, SortBy::Popular, SortBy::Downloads];

    /// Value of the `sort_by` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Recent => "recent",
            SortBy::Popular => "popular",
            SortBy::Downloads => "downloads",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user narrowed the gallery to.
///
/// Treated as an immutable value: every UI change builds a new filter with
/// one of the `with_*` methods and hands it to the list loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleFilter {
    /// Ordering.
    pub sort_by: SortBy,
    /// `None` for all media, `Some(true)` for videos, `Some(false)` for photos.
    pub is_video: Option<bool>,
    /// Restrict to one province.
    pub province_id: Option<i64>,
    /// Restrict to one category.
    pub category_id: Option<i64>,
    /// Title/tag substring search.
    pub search: Option<String>,
}

impl ArticleFilter {
    /// Filter with a different ordering.
    pub fn with_sort(&self, sort_by: SortBy) -> Self {
        Self {
            sort_by,
            ..self.clone()
        }
    }

    /// Filter with a different media selection.
    pub fn with_media(&self, is_video: Option<bool>) -> Self {
        Self {
            is_video,
            ..self.clone()
        }
    }

    /// Filter restricted to `province_id`, or unrestricted for `None`.
    pub fn with_province(&self, province_id: Option<i64>) -> Self {
        Self {
            province_id,
            ..self.clone()
        }
    }

    /// Filter restricted to `category_id`, or unrestricted for `None`.
    pub fn with_category(&self, category_id: Option<i64>) -> Self {
        Self {
            category_id,
            ..self.clone()
        }
    }

    /// Filter with a search term. Blank terms clear the search.
    pub fn with_search(&self, search: Option<&str>) -> Self {
        let search = search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            search,
            ..self.clone()
        }
    }

    /// Query for the first page of this filter.
    pub fn first_page(&self, limit: usize) -> ArticleQuery {
        ArticleQuery {
            filter: self.clone(),
            limit,
            offset: None,
        }
    }
}

/// A concrete list request: filter plus paging window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleQuery {
    /// What to list.
    pub filter: ArticleFilter,
    /// Page size.
    pub limit: usize,
    /// Rows to skip; `None` on a fresh (reset) request.
    pub offset: Option<usize>,
}

impl ArticleQuery {
    /// Query string for `/api/articles` and `/api/articles/paginated`,
    /// without the leading `?`.
    ///
    /// Only set fields are emitted, always in the order `sort_by`, `limit`,
    /// `is_video`, `province_id`, `category_id`, `search`, `offset`.
    pub fn to_query_string(&self) -> String {
        let filter = &self.filter;
        let mut params = vec![
            format!("sort_by={}", filter.sort_by.as_str()),
            format!("limit={}", self.limit),
        ];

        if let Some(is_video) = filter.is_video {
            params.push(format!("is_video={is_video}"));
        }
        if let Some(province_id) = filter.province_id {
            params.push(format!("province_id={province_id}"));
        }
        if let Some(category_id) = filter.category_id {
            params.push(format!("category_id={category_id}"));
        }
        if let Some(search) = filter.search.as_deref() {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        if let Some(offset) = self.offset {
            params.push(format!("offset={offset}"));
        }

        params.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popular_videos_in_one_province() {
        let filter = ArticleFilter {
            sort_by: SortBy::Popular,
            is_video: Some(true),
            province_id: Some(12),
            ..Default::default()
        };

        assert_eq!(
            filter.first_page(DEFAULT_LIST_LIMIT).to_query_string(),
            "sort_by=popular&limit=12&is_video=true&province_id=12"
        );
    }

    #[test]
    fn default_filter_only_sends_sort_and_limit() {
        let query = ArticleFilter::default().first_page(DEFAULT_LIST_LIMIT);
        assert_eq!(query.to_query_string(), "sort_by=recent&limit=12");
    }

    #[test]
    fn photos_only_sends_explicit_false() {
        let query = ArticleFilter::default()
            .with_media(Some(false))
            .first_page(GALLERY_PAGE_SIZE);
        assert_eq!(query.to_query_string(), "sort_by=recent&limit=24&is_video=false");
    }

    #[test]
    fn every_field_set_keeps_parameter_order() {
        let filter = ArticleFilter::default()
            .with_sort(SortBy::Downloads)
            .with_media(Some(false))
            .with_province(Some(17))
            .with_category(Some(3))
            .with_search(Some(" pantai & pura "));
        let query = ArticleQuery {
            filter,
            limit: 24,
            offset: Some(48),
        };

        assert_eq!(
            query.to_query_string(),
            "sort_by=downloads&limit=24&is_video=false&province_id=17&category_id=3&search=pantai%20%26%20pura&offset=48"
        );
    }

    #[test]
    fn builders_leave_the_original_untouched() {
        let base = ArticleFilter::default().with_province(Some(5));
        let changed = base.with_sort(SortBy::Popular);

        assert_eq!(base.sort_by, SortBy::Recent);
        assert_eq!(changed.province_id, Some(5));
        assert_ne!(base, changed);
    }

    #[test]
    fn blank_search_clears_the_term() {
        let filter = ArticleFilter::default().with_search(Some("bali"));
        assert_eq!(filter.search.as_deref(), Some("bali"));
        assert_eq!(filter.with_search(Some("   ")).search, None);
        assert_eq!(filter.with_search(None).search, None);
    }

    #[test]
    fn sort_by_serializes_lowercase() {
        assert_eq!(SortBy::Downloads.to_string(), "downloads");
        assert_eq!(serde_json::to_string(&SortBy::Popular).expect("encode"), "\"popular\"");
    }
}
