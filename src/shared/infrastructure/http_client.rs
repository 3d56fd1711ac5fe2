//! Throttled HTTP client shared by the catalog and auth adapters
//!
//! Paces requests through a token bucket so a burst of screens mounting at
//! once stays inside the provider's published limits. Requests are issued
//! once: a failure is mapped to `AppError` and handed back to the caller.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Instant;

const USER_AGENT: &str = "quickbet-movies/0.1";

/// HTTP client that waits on a rate limiter before each request
pub struct ThrottledClient {
    client: Client,
    rate_limiter: DefaultDirectRateLimiter,
    provider_name: String,
}

impl ThrottledClient {
    /// Client for TMDB: ~40 req/sec with a small burst
    pub fn for_tmdb() -> Self {
        Self::new("TMDB", Self::create_rate_limiter(40, 10))
    }

    /// Client for the Supabase auth endpoints
    pub fn for_supabase() -> Self {
        Self::new("Supabase", Self::create_rate_limiter(5, 2))
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: u32, burst_size: u32) -> DefaultDirectRateLimiter {
        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(burst_size).unwrap_or(NonZeroU32::MIN);
        RateLimiter::direct(Quota::per_second(rate).allow_burst(burst))
    }

    /// Create a custom client
    pub fn new(provider_name: &str, rate_limiter: DefaultDirectRateLimiter) -> Self {
        Self {
            client: Client::new(),
            rate_limiter,
            provider_name: provider_name.to_string(),
        }
    }

    /// GET and decode a JSON body
    pub async fn get<T>(&self, url: &str, headers: &[(&str, &str)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::GET, url, headers, None).await?;
        self.parse_response(response).await
    }

    /// POST a JSON body and decode the JSON reply
    pub async fn post_json<T>(&self, url: &str, headers: &[(&str, &str)], body: &Value) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, url, headers, Some(body)).await?;
        self.parse_response(response).await
    }

    /// POST where only the status matters (e.g. 204 No Content)
    pub async fn post_no_content(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&Value>,
    ) -> AppResult<()> {
        self.send(Method::POST, url, headers, body).await.map(|_| ())
    }

    /// Send once, turning non-success statuses into errors
    async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&Value>,
    ) -> AppResult<Response> {
        self.rate_limiter.until_ready().await;

        let endpoint = redact_query(url);
        LogContext::api_call(&self.provider_name, &endpoint, "started", None);
        let started = Instant::now();

        let response = self
            .build_request(method, url, headers, body)
            .send()
            .await
            .map_err(|e| {
                log::warn!("{} request to {} failed: {}", self.provider_name, endpoint, e);
                AppError::from(e)
            })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            &endpoint,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().await.unwrap_or_default();
        Err(self.status_error(status, &body_text))
    }

    fn build_request(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&Value>,
    ) -> RequestBuilder {
        let mut request_builder = self
            .client
            .request(method, url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");

        for (name, value) in headers {
            request_builder = request_builder.header(*name, *value);
        }

        if let Some(json_body) = body {
            request_builder = request_builder.json(json_body);
        }

        request_builder
    }

    fn status_error(&self, status: StatusCode, body: &str) -> AppError {
        let message = extract_error_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });
        log::warn!(
            "{} API returned {}: {}",
            self.provider_name,
            status.as_u16(),
            message
        );
        AppError::from_status(status.as_u16(), message)
    }

    /// Decode the JSON body of a successful response
    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                truncate(&response_text, 200)
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

/// Pull a human-readable message out of a provider error body.
///
/// TMDB uses `status_message`; GoTrue uses `error_description`, `msg` or
/// `message` depending on the endpoint and version.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error_description", "msg", "message", "status_message", "error"]
        .iter()
        .find_map(|field| value.get(*field).and_then(Value::as_str))
        .map(str::to_string)
        .filter(|message| !message.is_empty())
}

/// Drop the query string so credentials never reach the logs
fn redact_query(url: &str) -> String {
    url.split('?').next().unwrap_or(url).to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}
