// * Network Layer: retrieval of the ranking page.

pub mod client;
pub mod errors;
pub mod identity;

pub use client::TrendingClient;
pub use errors::NetworkError;
pub use identity::IdentityProfile;

use url::Url;

/// Raw result of a page request
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    /// Only a plain 200 OK carries a usable ranking page
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Anything that can hand back a status code and a body for a URL
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, NetworkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let page = |status| FetchedPage { status, body: String::new() };
        assert!(page(200).is_success());
        assert!(!page(204).is_success());
        assert!(!page(301).is_success());
        assert!(!page(404).is_success());
        assert!(!page(503).is_success());
    }
}
