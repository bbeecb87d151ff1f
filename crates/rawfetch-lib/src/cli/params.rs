use crate::download::FetchOptions;
use crate::manifest::Manifest;
use std::path::PathBuf;

pub const DEFAULT_MANIFEST_PATH: &str = "data.json";
pub const DEFAULT_OUTPUT_DIR: &str = "images";

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    pub output_dir: PathBuf,
    pub options: FetchOptions,
}
