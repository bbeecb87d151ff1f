pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod manifest;
pub mod output;

pub use crate::config::Config;
pub use error::{FetchError, ImageFetchError};
pub use manifest::{ImageEntry, Manifest};
