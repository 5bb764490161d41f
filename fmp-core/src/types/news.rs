use serde::{Deserialize, Serialize};

/// A news article from either the stock or the general news feed.
///
/// `published_date` is kept as the upstream string because the two feeds use
/// different timestamp formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Ticker the article is tagged with; absent on general news.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Publication timestamp as reported upstream.
    #[serde(default)]
    pub published_date: Option<String>,
    /// Headline.
    pub title: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Publishing site.
    #[serde(default)]
    pub site: Option<String>,
    /// Summary text.
    #[serde(default)]
    pub text: Option<String>,
    /// Article URL.
    #[serde(default)]
    pub url: Option<String>,
}
