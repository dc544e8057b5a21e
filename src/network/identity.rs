use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

// * IdentityProfile defines the headers sent with every outbound request.
pub struct IdentityProfile {
    pub user_agent: String,
    pub accept: &'static str,
    pub accept_language: &'static str,
}

impl IdentityProfile {
    // * Identifies the bot by crate name and version so the source operator can reach us.
    pub fn bot() -> Self {
        Self {
            user_agent: format!(
                "{}/{} (+guild war report bot)",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
            accept: "text/html,application/json;q=0.9,*/*;q=0.8",
            accept_language: "en-US,en;q=0.9,ja;q=0.8",
        }
    }

    // * Applies the configured profile to a mutable HeaderMap.
    // * A user agent that is not a valid header value is skipped with a warning.
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) {
        match HeaderValue::from_str(&self.user_agent) {
            Ok(ua) => {
                headers.insert(USER_AGENT, ua);
            }
            Err(e) => tracing::warn!(error = %e, "Skipping invalid User-Agent header"),
        }
        headers.insert(ACCEPT, HeaderValue::from_static(self.accept));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(self.accept_language));
    }
}

impl Default for IdentityProfile {
    fn default() -> Self {
        Self::bot()
    }
}
