use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    /// Fully qualified URL of the raw file
    pub github_raw_url: String,
    /// File name the body is saved under, relative to the output directory
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Repository owner, informational only
    #[serde(default)]
    pub username: String,
    /// Repository name, informational only
    #[serde(default)]
    pub repo: String,
    /// Branch name or commit hash, informational only
    #[serde(default)]
    pub branch: String,
    /// Files to download, in order
    pub images: Vec<ImageEntry>,
}

impl Manifest {
    pub fn source_label(&self) -> String {
        format!("{}/{}", self.username, self.repo)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, FetchError> {
        if !path.exists() {
            return Err(FetchError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read(path).map_err(|e| FetchError::ManifestLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_json(path, &content)
    }

    fn from_json(path: &Path, content: &[u8]) -> Result<Self, FetchError> {
        serde_json::from_slice(content).map_err(|e| match e.classify() {
            // Well-formed JSON that doesn't have the shape we need, e.g. no `images`.
            Category::Data => FetchError::ManifestValidation {
                details: format!("{}: {}", path.display(), e),
            },
            Category::Io | Category::Syntax | Category::Eof => FetchError::ManifestParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<Manifest, FetchError> {
        Manifest::from_json(Path::new("data.json"), content.as_bytes())
    }

    #[test]
    fn test_parse_full_manifest() {
        let manifest = parse(
            r#"{
                "username": "octocat",
                "repo": "assets",
                "branch": "3f1c2a9",
                "images": [
                    {"githubRawUrl": "https://raw.githubusercontent.com/octocat/assets/3f1c2a9/logo.png", "name": "logo.png"},
                    {"githubRawUrl": "https://raw.githubusercontent.com/octocat/assets/3f1c2a9/banner.jpg", "name": "banner.jpg"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.source_label(), "octocat/assets");
        assert_eq!(manifest.branch, "3f1c2a9");
        assert_eq!(manifest.images.len(), 2);
        assert_eq!(manifest.images[0].name, "logo.png");
        assert_eq!(
            manifest.images[1].github_raw_url,
            "https://raw.githubusercontent.com/octocat/assets/3f1c2a9/banner.jpg"
        );
    }

    #[test]
    fn test_informational_fields_default_to_empty() {
        let manifest = parse(r#"{"images": []}"#).unwrap();

        assert_eq!(manifest.username, "");
        assert_eq!(manifest.repo, "");
        assert_eq!(manifest.branch, "");
        assert_eq!(manifest.source_label(), "/");
        assert!(manifest.images.is_empty());
    }

    #[test]
    fn test_missing_images_is_validation_error() {
        let err = parse(r#"{"username": "octocat", "repo": "assets", "branch": "main"}"#)
            .unwrap_err();

        match err {
            FetchError::ManifestValidation { details } => {
                assert!(details.contains("images"), "unexpected details: {details}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_entry_without_name_is_validation_error() {
        let err = parse(r#"{"images": [{"githubRawUrl": "https://example.com/a.png"}]}"#)
            .unwrap_err();

        match err {
            FetchError::ManifestValidation { details } => {
                assert!(details.contains("name"), "unexpected details: {details}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse(r#"{"images": [ "#).unwrap_err();
        assert!(matches!(err, FetchError::ManifestParse { .. }), "{err:?}");

        let err = parse("not json at all").unwrap_err();
        assert!(matches!(err, FetchError::ManifestParse { .. }), "{err:?}");
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, b"{\"repo\": \"\xff\", \"images\": []}").unwrap();

        let err = Manifest::load_from_file(&path).unwrap_err();

        assert!(matches!(err, FetchError::ManifestParse { .. }), "{err:?}");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.json");

        let err = Manifest::load_from_file(&path).unwrap_err();

        match &err {
            FetchError::ManifestNotFound { path: reported } => assert_eq!(reported, &path),
            other => panic!("expected not found error, got {other:?}"),
        }
        assert!(err.to_string().contains("nonexistent.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"username": "u", "repo": "r", "branch": "b", "images": [{"githubRawUrl": "http://h/x", "name": "x.png"}]}"#,
        )
        .unwrap();

        let manifest = Manifest::load_from_file(&path).unwrap();
        assert_eq!(
            manifest.images,
            vec![ImageEntry {
                github_raw_url: "http://h/x".to_string(),
                name: "x.png".to_string(),
            }]
        );
    }
}
