//! Octocrab client construction and paged GET requests.

use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{FromResponse, Octocrab, Page};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::GitHubError;

/// Build a GitHub client for `api_url`.
///
/// With no token the client sends no `Authorization` header at all.
/// Octocrab's retry layer is turned off: a failed request is reported, not retried.
pub fn build_client(api_url: &str, token: Option<&str>) -> Result<Octocrab, GitHubError> {
    let builder = Octocrab::builder()
        .add_retry_config(RetryConfig::None)
        .base_uri(api_url)
        .map_err(|e| GitHubError::ClientBuild(Box::new(e)))?;

    let client = match token {
        Some(token) => {
            debug!("Using authenticated GitHub requests");
            builder.personal_token(token.to_string()).build()
        }
        None => {
            debug!("Using unauthenticated GitHub requests");
            builder.build()
        }
    };

    client.map_err(|e| GitHubError::ClientBuild(Box::new(e)))
}

/// `route?k=v&...` with the pairs form-encoded.
pub fn route_with_query(route: &str, pairs: &[(&str, &str)]) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    if query.is_empty() {
        route.to_string()
    } else {
        format!("{}?{}", route, query)
    }
}

/// GET one page of a list endpoint.
///
/// `uri` is either a route relative to the client's base URI or an absolute
/// `next` link. The status is checked before the body is decoded, so error
/// pages that are not GitHub JSON (an HTML 502 from a proxy) still report
/// their status.
pub async fn fetch_page<T: DeserializeOwned>(
    octocrab: &Octocrab,
    uri: String,
) -> Result<Page<T>, GitHubError> {
    let response = octocrab._get(uri).await?;
    let status = response.status();

    if !status.is_success() {
        let body = octocrab.body_to_string(response).await.unwrap_or_default();
        return Err(GitHubError::from_status(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            &body,
        ));
    }

    Ok(Page::<T>::from_response(response).await?)
}

/// Follow a page's `next` link, if it has one.
pub async fn fetch_next<T: DeserializeOwned>(
    octocrab: &Octocrab,
    page: &Page<T>,
) -> Result<Option<Page<T>>, GitHubError> {
    match &page.next {
        Some(next) => fetch_page(octocrab, next.to_string()).await.map(Some),
        None => Ok(None),
    }
}
