use serde::{Deserialize, Serialize};

/// Root of the fixed feed schema: `<rss version="..."><channel>...</channel></rss>`.
///
/// Field declaration order matters: the encoder writes elements in this
/// order, matching the shape the feed was decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "rss")]
pub struct Feed {
    #[serde(rename = "@version")]
    pub version: String,
    pub channel: Channel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub description: String,
    pub link: String,
    pub title: String,
    /// Items in publication order. Output order equals input order.
    #[serde(rename = "item", default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub link: String,
    /// Post body. May carry escaped markup; passed through untouched.
    pub description: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    pub guid: Guid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guid {
    #[serde(rename = "@isPermaLink")]
    pub is_perma_link: String,
    #[serde(rename = "$text")]
    pub value: String,
}
