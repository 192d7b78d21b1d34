//! Wire models returned by the gallery REST API.
//!
//! The backend is loose about optional columns: a missing field and an
//! explicit `null` both decode to the field's default.

use serde::{Deserialize, Deserializer, Serialize};

/// Number of article previews shown under a province recommendation.
pub const RECOMMENDATION_PREVIEW_LIMIT: usize = 4;

/// Location label used when an article has no province.
pub const FALLBACK_LOCATION: &str = "Indonesia";

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A province pin on the landing map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    /// Backend identifier, also used as the `province_id` filter value.
    pub id: i64,
    /// Upper-case province name, e.g. `"BALI"`.
    pub name: String,
    /// Number of active articles in the province.
    #[serde(default, deserialize_with = "null_as_default")]
    pub article_count: u64,
    /// Latitude of the pin; `0.0` when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub lat: f64,
    /// Longitude of the pin; `0.0` when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub lng: f64,
}

impl Province {
    /// Whether the backend knows where to put this province on the map.
    ///
    /// The backend reports `0, 0` for provinces missing from its coordinate
    /// table. A single zero is a real position: the equator crosses Riau,
    /// Kalimantan Barat and Sulawesi Utara.
    pub fn has_coordinates(&self) -> bool {
        !(self.lat == 0.0 && self.lng == 0.0)
    }
}

/// Gallery list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Backend identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Thumbnail URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    /// True for video entries.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_video: bool,
    /// Lifetime view counter.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_view: u64,
    /// Sum of downloads across the article's images.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_download: u64,
    /// Province name, when the article is tied to one.
    #[serde(default)]
    pub province_name: Option<String>,
    /// City name, when known.
    #[serde(default)]
    pub city_name: Option<String>,
    /// Comma separated tag list as stored by the backend.
    #[serde(default)]
    pub tags: Option<String>,
    /// Posting date as sent by the backend.
    #[serde(default)]
    pub posting_date: Option<String>,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
}

impl ArticleSummary {
    /// Tags split out of the comma string, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(self.tags.as_deref())
    }

    /// `"Province, City"`, falling back to [`FALLBACK_LOCATION`].
    pub fn location_label(&self) -> String {
        location_label(self.province_name.as_deref(), self.city_name.as_deref())
    }

    /// Province name or [`FALLBACK_LOCATION`], as shown on grid cards.
    pub fn province_label(&self) -> &str {
        non_blank(self.province_name.as_deref()).unwrap_or(FALLBACK_LOCATION)
    }
}

/// One image of an article's sub-gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleImage {
    /// Backend identifier, used by the download counter.
    pub id: i64,
    /// Small preview URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    /// Full-resolution asset URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Download counter for this image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_download: u64,
}

/// Full article payload for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    /// Backend identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Hero thumbnail URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    /// True for video entries.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_video: bool,
    /// Embeddable video URL for video entries.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Lifetime view counter.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_view: u64,
    /// Sum of downloads across [`ArticleDetail::images`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_download: u64,
    /// Province name.
    #[serde(default)]
    pub province_name: Option<String>,
    /// City name.
    #[serde(default)]
    pub city_name: Option<String>,
    /// Comma separated tags.
    #[serde(default)]
    pub tags: Option<String>,
    /// Posting date as sent by the backend.
    #[serde(default)]
    pub posting_date: Option<String>,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Article body as HTML. Untrusted; sanitize before rendering.
    #[serde(default)]
    pub content: Option<String>,
    /// Sub-gallery images.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ArticleImage>,
}

impl ArticleDetail {
    /// Tags split out of the comma string.
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(self.tags.as_deref())
    }

    /// `"Province, City"`, falling back to [`FALLBACK_LOCATION`].
    pub fn location_label(&self) -> String {
        location_label(self.province_name.as_deref(), self.city_name.as_deref())
    }

    /// Video URL to embed, only for video entries that carry one.
    pub fn embed_url(&self) -> Option<&str> {
        if self.is_video {
            non_blank(self.video_url.as_deref())
        } else {
            None
        }
    }
}

impl From<ArticleDetail> for ArticleSummary {
    fn from(a: ArticleDetail) -> Self {
        ArticleSummary {
            id: a.id,
            title: a.title,
            thumbnail: a.thumbnail,
            is_video: a.is_video,
            total_view: a.total_view,
            total_download: a.total_download,
            province_name: a.province_name,
            city_name: a.city_name,
            tags: a.tags,
            posting_date: a.posting_date,
            category: a.category,
        }
    }
}

/// Aggregate counters shown in the hero and on the stats page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteStats {
    /// Active articles.
    pub total_articles: u64,
    /// Active photo articles.
    pub total_photos: u64,
    /// Active video articles.
    pub total_videos: u64,
    /// Provinces known to the backend.
    pub total_provinces: u64,
    /// High resolution images across all articles.
    pub total_images: u64,
    /// Sum of article views.
    pub total_views: u64,
    /// Sum of image downloads.
    pub total_downloads: u64,
}

/// Category chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Backend identifier, used as the `category_id` filter value.
    pub id: i64,
    /// Display label.
    pub label: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Optional cover image.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Number of active articles.
    #[serde(default, deserialize_with = "null_as_default")]
    pub article_count: u64,
}

/// Frequently searched tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularTag {
    /// Tag text.
    pub tag: String,
    /// Popularity counter.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

/// How the AI service read a free-text query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpretedQuery {
    /// Province the query points at.
    pub province: Option<String>,
    /// Category the query points at.
    pub category: Option<String>,
    /// Remaining keywords.
    pub keywords: Option<String>,
    /// Media preference, `None` when unspecified.
    pub is_video: Option<bool>,
}

impl InterpretedQuery {
    /// Short description of what was searched: keywords, else province.
    pub fn headline(&self) -> Option<&str> {
        non_blank(self.keywords.as_deref()).or_else(|| non_blank(self.province.as_deref()))
    }
}

/// Body of `POST /api/ai/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSearchRequest {
    /// Natural-language query.
    pub query: String,
}

/// Result of a natural-language search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSearchResponse {
    /// Interpretation, absent when the service could not parse the query.
    pub interpreted_query: Option<InterpretedQuery>,
    /// Matching articles.
    #[serde(deserialize_with = "null_as_default")]
    pub articles: Vec<ArticleSummary>,
}

/// Recommendation for a province clicked on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvinceRecommendation {
    /// Province name echoed by the backend.
    #[serde(deserialize_with = "null_as_default")]
    pub province_name: String,
    /// Free-text recommendation.
    #[serde(deserialize_with = "null_as_default")]
    pub recommendation: String,
    /// Top articles of the province.
    #[serde(deserialize_with = "null_as_default")]
    pub articles: Vec<ArticleSummary>,
}

impl ProvinceRecommendation {
    /// Articles shown under the recommendation text.
    pub fn previews(&self) -> &[ArticleSummary] {
        let end = self.articles.len().min(RECOMMENDATION_PREVIEW_LIMIT);
        &self.articles[..end]
    }
}

/// One page of `GET /api/articles/paginated`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlePage {
    /// Articles of this page.
    pub articles: Vec<ArticleSummary>,
    /// Total matches for the filter.
    pub total: u64,
    /// Whether another page exists after this one.
    pub has_more: bool,
}

/// Response of the image download counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadReceipt {
    /// False when the image id is unknown.
    pub success: bool,
    /// Counter after the increment.
    pub new_count: Option<u64>,
    /// Failure reason.
    pub message: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn location_label(province: Option<&str>, city: Option<&str>) -> String {
    let mut label = non_blank(province).unwrap_or(FALLBACK_LOCATION).to_string();
    if let Some(city) = non_blank(city) {
        label.push_str(", ");
        label.push_str(city);
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_summary_tolerates_nulls_and_missing_fields() {
        let raw = r#"{
            "id": 7,
            "title": "Pantai Kuta",
            "thumbnail": "https://cdn.example/kuta.jpg",
            "is_video": false,
            "total_view": 1200,
            "total_download": null,
            "province_name": "BALI",
            "tags": "pantai, sunset,,bali "
        }"#;
        let article: ArticleSummary = serde_json::from_str(raw).expect("decode article");

        assert_eq!(article.total_download, 0);
        assert_eq!(article.city_name, None);
        assert_eq!(article.tag_list(), vec!["pantai", "sunset", "bali"]);
        assert_eq!(article.location_label(), "BALI");
    }

    #[test]
    fn location_label_appends_city_and_falls_back() {
        assert_eq!(location_label(Some("JAWA TIMUR"), Some("Malang")), "JAWA TIMUR, Malang");
        assert_eq!(location_label(None, Some("Malang")), "Indonesia, Malang");
        assert_eq!(location_label(Some("  "), None), "Indonesia");
    }

    #[test]
    fn detail_decodes_images_and_exposes_embed_only_for_videos() {
        let raw = r#"{
            "id": 3,
            "title": "Tari Kecak",
            "thumbnail": "t.jpg",
            "is_video": true,
            "video_url": "https://www.youtube.com/embed/abc",
            "total_view": 10,
            "content": "<p>Tari</p>",
            "images": [
                {"id": 1, "thumbnail": "a_s.jpg", "image_url": "a.jpg", "total_download": 4},
                {"id": 2, "thumbnail": "b_s.jpg", "image_url": "b.jpg", "total_download": null}
            ]
        }"#;
        let mut detail: ArticleDetail = serde_json::from_str(raw).expect("decode detail");

        assert_eq!(detail.images.len(), 2);
        assert_eq!(detail.images[1].total_download, 0);
        assert_eq!(detail.embed_url(), Some("https://www.youtube.com/embed/abc"));

        detail.is_video = false;
        assert_eq!(detail.embed_url(), None);
    }

    #[test]
    fn province_without_coordinates_has_no_pin() {
        let raw = r#"[
            {"id": 1, "name": "BALI", "article_count": 12, "lat": -8.3405, "lng": 115.092},
            {"id": 2, "name": "PAPUA BARAT DAYA", "article_count": null}
        ]"#;
        let provinces: Vec<Province> = serde_json::from_str(raw).expect("decode provinces");

        assert!(provinces[0].has_coordinates());
        assert!(!provinces[1].has_coordinates());
        assert_eq!(provinces[1].article_count, 0);
    }

    #[test]
    fn equator_province_keeps_its_pin() {
        let pontianak = Province {
            id: 20,
            name: "KALIMANTAN BARAT".to_string(),
            article_count: 3,
            lat: 0.0,
            lng: 109.3,
        };
        assert!(pontianak.has_coordinates());
    }

    #[test]
    fn headline_prefers_keywords_then_province() {
        let mut query = InterpretedQuery {
            province: Some("BALI".to_string()),
            keywords: Some("pantai".to_string()),
            ..Default::default()
        };
        assert_eq!(query.headline(), Some("pantai"));

        query.keywords = Some(String::new());
        assert_eq!(query.headline(), Some("BALI"));

        query.province = None;
        assert_eq!(query.headline(), None);
    }

    #[test]
    fn search_response_accepts_null_interpretation() {
        let raw = r#"{"interpreted_query": null, "articles": null}"#;
        let response: AiSearchResponse = serde_json::from_str(raw).expect("decode search");

        assert!(response.interpreted_query.is_none());
        assert!(response.articles.is_empty());
    }

    #[test]
    fn recommendation_previews_are_capped() {
        let article = |id| ArticleSummary {
            id,
            title: format!("Destinasi {id}"),
            thumbnail: String::new(),
            is_video: false,
            total_view: 0,
            total_download: 0,
            province_name: None,
            city_name: None,
            tags: None,
            posting_date: None,
            category: None,
        };
        let recommendation = ProvinceRecommendation {
            province_name: "ACEH".to_string(),
            recommendation: "Jelajahi Aceh".to_string(),
            articles: (1..=8).map(article).collect(),
        };

        let ids: Vec<i64> = recommendation.previews().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn stats_missing_counters_default_to_zero() {
        let stats: SiteStats =
            serde_json::from_str(r#"{"total_photos": 10, "total_videos": 2}"#).expect("stats");

        assert_eq!(stats.total_photos, 10);
        assert_eq!(stats.total_provinces, 0);
    }
}
