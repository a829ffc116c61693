use std::path::PathBuf;

use thiserror::Error;

use refeed_engine::{
    decode_feed, encode_feed, rewrite_pub_dates, AtomicFileWriter, DecodeError, EncodeError,
    FetchError, Fetcher, PersistError, RewriteError,
};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to download the feed: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to parse the feed: {0}")]
    Decode(#[from] DecodeError),
    #[error("failed to rewrite the feed dates: {0}")]
    Rewrite(#[from] RewriteError),
    #[error("failed to re-encode the feed: {0}")]
    Encode(#[from] EncodeError),
    #[error("failed to write the output file: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub items_rewritten: usize,
    pub bytes_written: u64,
    pub output_path: PathBuf,
}

/// Run the pipeline once: fetch the feed, decode it, rewrite every item's
/// pubDate, re-encode, and write the destination file.
///
/// Each stage returns its error to this single caller; nothing here
/// terminates the process.
pub async fn run(config: &Config, fetcher: &dyn Fetcher) -> Result<RunReport, RunError> {
    let output = fetcher.fetch(&config.feed_url).await?;
    log::debug!(
        "downloaded {} bytes from {}",
        output.metadata.byte_len,
        output.metadata.final_url
    );

    let mut feed = decode_feed(&output.bytes)?;
    let items_rewritten = rewrite_pub_dates(&mut feed)?;
    log::debug!("rewrote {items_rewritten} publication dates");

    let xml = encode_feed(&feed)?;
    let writer = AtomicFileWriter::new(config.output_path.clone());
    let bytes_written = writer.write(&xml)?;

    Ok(RunReport {
        items_rewritten,
        bytes_written,
        output_path: config.output_path.clone(),
    })
}
