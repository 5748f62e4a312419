use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::types::{PosterUrl, SearchQuery};

const SEARCH_PAGE_URL: &str = "https://www.imdb.com/find/?q=";
const TITLE_PAGE_URL: &str = "https://www.imdb.com/title";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Best-effort source of poster image URLs. Implementations must swallow
/// every failure into `None`; a missing poster never fails a request.
/// Swappable so the scrape can be replaced by a stable image-search API
/// without touching callers.
#[async_trait]
pub trait PosterProvider: Send + Sync {
    async fn find_poster(&self, title: &SearchQuery) -> Option<PosterUrl>;
}

/// Two-stage scrape of IMDb's public pages: the find page yields the first
/// title id, the title page yields the first poster-class image. Depends on
/// undocumented markup and silently degrades to "no poster" when it changes.
pub struct ImdbPosterProvider {
    http: reqwest::Client,
}

impl ImdbPosterProvider {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    async fn fetch(&self, url: &str) -> std::result::Result<String, reqwest::Error> {
        self.http
            .get(url)
            .header("User-Agent", BROWSER_USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }

    async fn lookup(&self, title: &SearchQuery) -> std::result::Result<Option<PosterUrl>, reqwest::Error> {
        let search_url = format!("{}{}", SEARCH_PAGE_URL, urlencoding::encode(title.as_str()));
        let search_page = self.fetch(&search_url).await?;

        let Some(title_id) = first_title_id(&search_page) else {
            debug!(title = %title, "no title link on the search page");
            return Ok(None);
        };

        let detail_page = self.fetch(&format!("{TITLE_PAGE_URL}/{title_id}/")).await?;
        Ok(poster_src(&detail_page))
    }
}

impl Default for ImdbPosterProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PosterProvider for ImdbPosterProvider {
    async fn find_poster(&self, title: &SearchQuery) -> Option<PosterUrl> {
        match self.lookup(title).await {
            Ok(poster) => poster,
            Err(e) => {
                debug!(title = %title, error = %e, "poster lookup failed");
                None
            }
        }
    }
}

/// First title identifier linked from a search results page.
fn first_title_id(html: &str) -> Option<String> {
    let re = Regex::new(r#"href="/title/(tt\d+)"#).expect("Invalid regex");
    re.captures(html).map(|caps| caps[1].to_string())
}

/// Source URL of the first poster-class image on a title page. Attribute
/// order is not fixed, so both arrangements are tried.
fn poster_src(html: &str) -> Option<String> {
    let class_then_src =
        Regex::new(r#"<img[^>]*class="[^"]*ipc-image[^"]*"[^>]*src="([^"]+)""#)
            .expect("Invalid regex");
    if let Some(caps) = class_then_src.captures(html) {
        return Some(caps[1].to_string());
    }

    let src_then_class =
        Regex::new(r#"<img[^>]*src="([^"]+)"[^>]*class="[^"]*ipc-image[^"]*""#)
            .expect("Invalid regex");
    src_then_class.captures(html).map(|caps| caps[1].to_string())
}
