use std::str;

use thiserror::Error;

use crate::feed::Feed;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("feed body is not valid UTF-8: {0}")]
    Encoding(#[from] str::Utf8Error),
    #[error("feed does not match the expected schema: {0}")]
    Xml(#[from] quick_xml::DeError),
}

/// Decode raw response bytes into a [`Feed`].
///
/// Unknown elements are ignored; a document missing a required element or
/// attribute is an error.
pub fn decode_feed(bytes: &[u8]) -> Result<Feed, DecodeError> {
    let text = str::from_utf8(bytes)?;
    Ok(quick_xml::de::from_str(text)?)
}
