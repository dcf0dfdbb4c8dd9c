//! Public configuration for the PokeAPI client.

/// Public PokeAPI v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Configuration for the PokeAPI client.
///
/// # Example
///
/// ```
/// use pokedex_api::PokeApiClientConfig;
///
/// let config = PokeApiClientConfig::new()
///     .with_base_url("http://localhost:8080/api/v2")
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct PokeApiClientConfig {
    /// Base URL all resource paths are joined onto
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for PokeApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("pokedex-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl PokeApiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. A trailing slash is added if missing.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Set the base URL if one is given, keeping the current one otherwise.
    #[must_use]
    pub fn with_optional_base_url(self, url: Option<String>) -> Self {
        match url.filter(|u| !u.trim().is_empty()) {
            Some(url) => self.with_base_url(url),
            None => self,
        }
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
