#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};
#[cfg(not(feature = "mock"))]
use js_sys::Date;
#[cfg(not(feature = "mock"))]
use serde::de::DeserializeOwned;
#[cfg(not(feature = "mock"))]
use wonderful_gallery_shared::AiSearchRequest;
use wonderful_gallery_shared::{
    AiSearchResponse, ApiError, ArticleDetail, ArticlePage, ArticleQuery, ArticleSummary,
    CategoryInfo, DownloadReceipt, PopularTag, Province, ProvinceRecommendation, SiteStats,
};

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
#[cfg(feature = "mock")]
use crate::models;

#[cfg(not(feature = "mock"))]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

#[cfg(not(feature = "mock"))]
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))
}

/// All provinces with their map coordinates.
pub async fn fetch_provinces() -> Result<Vec<Province>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_provinces());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/provinces", API_BASE);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

/// Site-wide counters.
pub async fn fetch_site_stats() -> Result<SiteStats, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_stats());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/stats", API_BASE);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

/// All categories with their article counts.
pub async fn fetch_categories() -> Result<Vec<CategoryInfo>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_categories());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/categories", API_BASE);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

/// Most searched tags, for the gallery tag chips.
pub async fn fetch_popular_tags() -> Result<Vec<PopularTag>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_popular_tags());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/popular-tags", API_BASE);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

/// One page of articles matching the query.
pub async fn fetch_articles(query: &ArticleQuery) -> Result<Vec<ArticleSummary>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_query(query).articles);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/articles?{}", API_BASE, query.to_query_string());
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

/// Same as [`fetch_articles`] but with the total count and a continuation
/// flag.
pub async fn fetch_articles_page(query: &ArticleQuery) -> Result<ArticlePage, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_query(query));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/articles/paginated?{}", API_BASE, query.to_query_string());
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

/// Full article, or `None` when the backend answers 404.
pub async fn fetch_article_detail(id: &str) -> Result<Option<ArticleDetail>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_article_detail(id));
    }

    #[cfg(not(feature = "mock"))]
    {
        // view counter increments server-side, so never serve this from cache
        let url = format!(
            "{}/articles/{}?_ts={}",
            API_BASE,
            urlencoding::encode(id),
            Date::now() as u64
        );

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(network_error)?;

        if response.status() == 404 {
            return Ok(None);
        }

        read_json(response).await.map(Some)
    }
}

/// Bump the download counter of one image.
pub async fn record_image_download(image_id: i64) -> Result<DownloadReceipt, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(DownloadReceipt {
            success: true,
            new_count: Some(1),
            message: None,
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/images/{}/download", API_BASE, image_id);
        let response = Request::post(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

/// Raw bytes of an image asset, for saving it as a file.
pub async fn fetch_image_bytes(url: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = url;
        return Err(ApiError::Network("downloads are not served in mock mode".to_string()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = Request::get(url).send().await.map_err(network_error)?;
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
            });
        }

        response
            .binary()
            .await
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))
    }
}

/// Natural-language search. A blank query returns an empty result without
/// calling the backend.
pub async fn ai_search(query: &str) -> Result<AiSearchResponse, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(AiSearchResponse::default());
    }

    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_ai_search(query));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/ai/search", API_BASE);
        let body = AiSearchRequest {
            query: query.to_string(),
        };

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        read_json(response).await
    }
}

/// Recommendation text and featured articles for one province.
pub async fn fetch_province_recommendation(
    province_id: i64,
) -> Result<ProvinceRecommendation, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_recommendation(province_id).ok_or(ApiError::Http {
            status: 404,
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/ai/recommend/{}", API_BASE, province_id);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}
