use crate::config::constants::{ACCEPT_LANGUAGE, USER_AGENT};
use crate::network::errors::NetworkError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE as ACCEPT_LANGUAGE_HEADER};

// * IdentityProfile defines the browser headers sent with the page request.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityProfile {
    pub user_agent: String,
    pub accept_language: String,
}

impl IdentityProfile {
    // * The desktop Chrome identity the trending page is requested with.
    pub fn desktop_chrome() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
        }
    }

    // * Applies the configured profile to a mutable HeaderMap.
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) -> Result<(), NetworkError> {
        headers.insert("User-Agent", HeaderValue::from_str(&self.user_agent)?);
        headers.insert(ACCEPT_LANGUAGE_HEADER, HeaderValue::from_str(&self.accept_language)?);
        headers.insert(ACCEPT, HeaderValue::from_static("text/html,application/xhtml+xml"));
        Ok(())
    }

    // * Builds a fresh HeaderMap carrying this identity.
    pub fn headers(&self) -> Result<HeaderMap, NetworkError> {
        let mut headers = HeaderMap::new();
        self.apply_to_headers(&mut headers)?;
        Ok(headers)
    }
}

impl Default for IdentityProfile {
    fn default() -> Self {
        Self::desktop_chrome()
    }
}
