use quick_xml::se::Serializer;
use serde::Serialize;
use thiserror::Error;

use crate::feed::Feed;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize the feed: {0}")]
    Xml(#[from] quick_xml::SeError),
}

/// Serialize a [`Feed`] back to XML with two-space indentation.
///
/// Element and attribute names come from the same mapping the decoder uses,
/// so untouched fields round-trip exactly.
pub fn encode_feed(feed: &Feed) -> Result<String, EncodeError> {
    let mut buffer = String::new();
    let mut serializer = Serializer::new(&mut buffer);
    serializer.indent(' ', 2);
    feed.serialize(serializer)?;
    Ok(buffer)
}
