use crate::models::{
    auth::{Credentials, User},
    catalog::Catalog,
    decision::{DecisionRequest, DecisionResponse},
    error::AppError,
    history::{History, HistoryEntry},
};
use serde::Deserialize;

// CONSTANTS
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Base URL for the irrigation backend. Overridable at compile time so a
/// deployed bundle can point at a non-local host.
fn default_base_url() -> String {
    option_env!("IRRIGATION_API_BASE")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

// API CONFIGURATION
/// Configuration for the irrigation backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the configured backend host.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` — crop and soil option lists.
    pub fn crops_url(&self) -> String {
        format!("{}/api/crops/", self.base_url)
    }

    /// `GET` — full decision history.
    pub fn history_url(&self) -> String {
        format!("{}/api/irrigation/history/", self.base_url)
    }

    /// `POST` — submit a decision request.
    pub fn decision_url(&self) -> String {
        format!("{}/api/irrigation/decision/", self.base_url)
    }

    /// `GET` — CSV download, opened in a new browser tab.
    pub fn export_csv_url(&self) -> String {
        format!("{}/api/irrigation/export-csv/", self.base_url)
    }

    /// `POST` — session login.
    pub fn login_url(&self) -> String {
        format!("{}/api-auth/login/", self.base_url)
    }

    /// `POST` — session logout.
    pub fn logout_url(&self) -> String {
        format!("{}/api-auth/logout/", self.base_url)
    }

    /// `GET` — current session user.
    pub fn user_url(&self) -> String {
        format!("{}/api-auth/user/", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(default_base_url),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct HistoryResponse {
    history: Vec<HistoryEntry>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: Option<String>,
}

// IRRIGATION CLIENT
/// HTTP client for the irrigation backend.
///
/// Auth is session-cookie based, so every request rides with browser
/// credentials when compiled for wasm.
pub struct IrrigationClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl IrrigationClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the crop and soil option lists.
    pub async fn fetch_catalog(&self) -> Result<Catalog, AppError> {
        self.get_json(&self.config.crops_url()).await
    }

    /// Fetches the full decision history. Always a complete reload; the
    /// caller replaces its in-memory list wholesale.
    pub async fn fetch_history(&self) -> Result<History, AppError> {
        let response: HistoryResponse = self.get_json(&self.config.history_url()).await?;
        Ok(History::new(response.history))
    }

    /// Submits a validated decision request and returns the computed plan.
    pub async fn submit_decision(
        &self,
        request: &DecisionRequest,
    ) -> Result<DecisionResponse, AppError> {
        let response = self
            .post(&self.config.decision_url())
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.parse_json(response).await
    }

    /// Returns the current session user, if any.
    pub async fn current_user(&self) -> Result<User, AppError> {
        self.get_json(&self.config.user_url()).await
    }

    /// Logs in with the given credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AppError> {
        let response = self
            .post(&self.config.login_url())
            .json(credentials)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.check_status(response).await
    }

    /// Ends the current session.
    pub async fn logout(&self) -> Result<(), AppError> {
        let response = self
            .post(&self.config.logout_url())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.check_status(response).await
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.http.get(url);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.http.post(url);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    /// Executes a GET and deserializes the body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.parse_json(response).await
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Like `parse_json` but for endpoints whose body we ignore.
    async fn check_status(&self, response: reqwest::Response) -> Result<(), AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }
        Ok(())
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code, preferring the
    /// server-provided message when the body carries one.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        let server_message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error);

        match status.as_u16() {
            401 | 403 => AppError::AuthError(
                server_message.unwrap_or_else(|| format!("Authentication failed: {status}")),
            ),
            404 => AppError::NotFound(
                server_message.unwrap_or_else(|| format!("Resource not found: {status}")),
            ),
            _ => AppError::ApiError(
                server_message.unwrap_or_else(|| format!("Request failed with status {status}")),
            ),
        }
    }
}

impl Default for IrrigationClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the crop/soil catalog using default configuration.
pub async fn fetch_catalog() -> Result<Catalog, AppError> {
    IrrigationClient::new()?.fetch_catalog().await
}

/// Fetches the decision history using default configuration.
pub async fn fetch_history() -> Result<History, AppError> {
    IrrigationClient::new()?.fetch_history().await
}

/// Submits a decision request using default configuration.
pub async fn submit_decision(request: &DecisionRequest) -> Result<DecisionResponse, AppError> {
    IrrigationClient::new()?.submit_decision(request).await
}

/// Returns the current session user using default configuration.
pub async fn current_user() -> Result<User, AppError> {
    IrrigationClient::new()?.current_user().await
}

/// Logs in using default configuration.
pub async fn login(credentials: &Credentials) -> Result<(), AppError> {
    IrrigationClient::new()?.login(credentials).await
}

/// Logs out using default configuration.
pub async fn logout() -> Result<(), AppError> {
    IrrigationClient::new()?.logout().await
}

/// CSV export URL under the default configuration.
pub fn export_csv_url() -> String {
    ApiConfig::default().export_csv_url()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert!(config.base_url().starts_with("http"));
    }

    #[test]
    fn test_config_builder_custom_base() {
        let config = ApiConfig::builder().base_url("https://irrigation.example").build();
        assert_eq!(config.base_url(), "https://irrigation.example");
    }

    #[test]
    fn test_endpoint_url_construction() {
        let config = ApiConfig::builder().base_url("http://host:8000").build();

        assert_eq!(config.crops_url(), "http://host:8000/api/crops/");
        assert_eq!(config.history_url(), "http://host:8000/api/irrigation/history/");
        assert_eq!(config.decision_url(), "http://host:8000/api/irrigation/decision/");
        assert_eq!(
            config.export_csv_url(),
            "http://host:8000/api/irrigation/export-csv/"
        );
        assert_eq!(config.login_url(), "http://host:8000/api-auth/login/");
        assert_eq!(config.logout_url(), "http://host:8000/api-auth/logout/");
        assert_eq!(config.user_url(), "http://host:8000/api-auth/user/");
    }

    #[test]
    fn test_error_for_status_prefers_server_message() {
        let client = IrrigationClient::new().unwrap();
        let error = client.error_for_status(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"error": "Crop type 'kale' not found"}"#,
        );

        assert_eq!(error.user_message(), "Crop type 'kale' not found");
    }

    #[test]
    fn test_error_for_status_fallback_message() {
        let client = IrrigationClient::new().unwrap();
        let error = client.error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "");

        assert!(error.user_message().contains("500"));
    }

    #[test]
    fn test_error_for_status_auth_mapping() {
        let client = IrrigationClient::new().unwrap();
        let error = client.error_for_status(reqwest::StatusCode::FORBIDDEN, "{}");

        assert!(matches!(error, AppError::AuthError(_)));
    }
}
