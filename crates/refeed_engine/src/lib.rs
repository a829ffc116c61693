//! Refeed engine: feed download, decode, pubDate rewrite, and output stages.
mod decode;
mod encode;
mod feed;
mod fetch;
mod persist;
mod rewrite;

pub use decode::{decode_feed, DecodeError};
pub use encode::{encode_feed, EncodeError};
pub use feed::{Channel, Feed, Guid, Item};
pub use fetch::{FetchError, FetchMetadata, FetchOutput, FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{AtomicFileWriter, PersistError};
pub use rewrite::{reformat_pub_date, rewrite_pub_dates, RewriteError};
