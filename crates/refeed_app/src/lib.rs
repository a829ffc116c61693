//! Refeed app: environment configuration and the one-shot pipeline run.
pub mod config;
pub mod run;
