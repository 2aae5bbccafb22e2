use crate::models::review::Review;
use thiserror::Error;

/// Relative path of the reviews endpoint served by this app's host.
pub const REVIEWS_ENDPOINT: &str = "/api/reviews";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Builds `/api/reviews?url=<encoded>` with the input percent-encoded
/// as a query component value.
pub fn review_request_path(url: &str) -> String {
    format!("{}?url={}", REVIEWS_ENDPOINT, urlencoding::encode(url))
}

/// Fetches the review list for a product page URL from the backend.
pub async fn fetch_reviews(url: &str) -> Result<Vec<Review>, FetchError> {
    let response = gloo_net::http::Request::get(&review_request_path(url))
        .send()
        .await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json::<Vec<Review>>().await?)
}

#[cfg(feature = "ssr")]
pub use ssr_impl::*;

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::Review;
    use actix_web::{web, HttpResponse};
    use leptos::logging::log;
    use serde::Deserialize;

    /// Base URL of the external scraping service the host forwards to.
    #[derive(Clone)]
    pub struct ReviewsUpstream(pub String);

    impl ReviewsUpstream {
        /// Reads `REVIEWS_UPSTREAM` from the environment, falling back to
        /// the scraper's default local address.
        pub fn from_env() -> Self {
            ReviewsUpstream(
                std::env::var("REVIEWS_UPSTREAM")
                    .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            )
        }
    }

    #[derive(Deserialize)]
    pub struct ReviewsQuery {
        pub url: String,
    }

    pub(super) fn upstream_url(base: &str, url: &str) -> String {
        format!(
            "{}{}?url={}",
            base.trim_end_matches('/'),
            super::REVIEWS_ENDPOINT,
            urlencoding::encode(url)
        )
    }

    /// `GET /api/reviews` — forwards the query to the scraping service and
    /// relays the decoded review array. The scraper itself lives outside
    /// this repository.
    pub async fn get_reviews(
        upstream: web::Data<ReviewsUpstream>,
        query: web::Query<ReviewsQuery>,
    ) -> HttpResponse {
        log!("[API] Received review request for URL: {}", query.url);

        let target = upstream_url(&upstream.0, &query.url);
        match reqwest::get(&target).await {
            Ok(response) if response.status().is_success() => {
                match response.json::<Vec<Review>>().await {
                    Ok(reviews) => {
                        log!("[API] Upstream returned {} reviews for URL: {}",
                            reviews.len(), query.url);
                        HttpResponse::Ok().json(reviews)
                    }
                    Err(err) => {
                        log!("[API ERROR] Malformed upstream body: {:?}", err);
                        HttpResponse::BadGateway().body("Upstream returned malformed reviews")
                    }
                }
            }
            Ok(response) => {
                log!("[API ERROR] Upstream status {} for URL: {}",
                    response.status(), query.url);
                HttpResponse::BadGateway().body("Upstream failed to fetch reviews")
            }
            Err(err) => {
                log!("[API ERROR] Failed to reach upstream: {:?}", err);
                HttpResponse::BadGateway().body("Failed to reach reviews upstream")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_path_encodes_query_component() {
        assert_eq!(review_request_path("a b&c"), "/api/reviews?url=a%20b%26c");
    }

    #[test]
    fn request_path_encodes_full_url() {
        assert_eq!(
            review_request_path("https://example.com/x?y=1"),
            "/api/reviews?url=https%3A%2F%2Fexample.com%2Fx%3Fy%3D1"
        );
    }

    #[test]
    fn request_path_accepts_empty_input() {
        assert_eq!(review_request_path(""), "/api/reviews?url=");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn upstream_url_joins_base_and_query() {
        assert_eq!(
            ssr_impl::upstream_url("http://127.0.0.1:8000/", "a b"),
            "http://127.0.0.1:8000/api/reviews?url=a%20b"
        );
    }
}
