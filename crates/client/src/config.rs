/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the trails server (default: `http://localhost:5000`).
    pub api_url: String,
}

impl ClientConfig {
    /// Load configuration from `TRAILS_API_URL`, falling back to the local
    /// development server. A trailing slash is dropped.
    pub fn from_env() -> Self {
        let api_url = std::env::var("TRAILS_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".into());
        Self::new(api_url)
    }

    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(
            ClientConfig::new("http://localhost:5000/").api_url,
            "http://localhost:5000"
        );
    }

    #[test]
    fn from_env_reads_api_url() {
        std::env::set_var("TRAILS_API_URL", "http://trails.internal:8080/");
        let config = ClientConfig::from_env();
        std::env::remove_var("TRAILS_API_URL");

        assert_eq!(config.api_url, "http://trails.internal:8080");
    }
}
