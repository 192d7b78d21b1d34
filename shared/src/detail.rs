//! What the detail page shows once its fetch settles.

use crate::{error::ApiError, models::ArticleDetail};

/// Settled result of an article fetch.
///
/// Every failure collapses into [`DetailOutcome::NotFound`]: a missing
/// article, a server error and an undecodable body all render the same
/// "not found" state.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    /// The article exists and decoded.
    Found(ArticleDetail),
    /// Anything else.
    NotFound,
}

impl From<Result<Option<ArticleDetail>, ApiError>> for DetailOutcome {
    fn from(result: Result<Option<ArticleDetail>, ApiError>) -> Self {
        match result {
            Ok(Some(article)) => DetailOutcome::Found(article),
            Ok(None) => DetailOutcome::NotFound,
            Err(e) => {
                tracing::debug!(error = %e, "article fetch failed, rendering not found");
                DetailOutcome::NotFound
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> ArticleDetail {
        serde_json::from_str(
            r#"{"id": 5, "title": "Raja Ampat", "thumbnail": "r.jpg", "is_video": false,
                "total_view": 10, "province_name": "PAPUA"}"#,
        )
        .expect("detail")
    }

    #[test]
    fn decoded_article_is_found() {
        let outcome = DetailOutcome::from(Ok(Some(article())));
        assert_eq!(outcome, DetailOutcome::Found(article()));
    }

    #[test]
    fn every_failure_is_not_found() {
        let failures = [
            Ok(None),
            Err(ApiError::Http { status: 404 }),
            Err(ApiError::Http { status: 500 }),
            Err(ApiError::Network("TypeError: Failed to fetch".to_string())),
            Err(ApiError::Parse("expected value at line 1".to_string())),
        ];
        for result in failures {
            assert_eq!(DetailOutcome::from(result), DetailOutcome::NotFound);
        }
    }
}
