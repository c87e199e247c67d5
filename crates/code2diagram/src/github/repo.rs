use std::{fmt, str::FromStr};

use serde::Deserialize;

use super::FetchError;

/// File name suffixes treated as script files.
const SCRIPT_EXTENSIONS: &[&str] = &[".js", ".ts", ".jsx", ".tsx"];

/// An `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    owner: String,
    repo: String,
}

impl RepoRef {
    /// Parses an `owner/repo` reference.
    ///
    /// Empty segments are skipped and anything after the second segment is
    /// ignored, so `/owner//repo/tree` parses as `owner/repo`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidRepoRef`] if fewer than two non-empty
    /// segments are present.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let mut segments = input.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next()) {
            (Some(owner), Some(repo)) => Ok(Self {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(FetchError::InvalidRepoRef(input.to_string())),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl FromStr for RepoRef {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// One entry of a repository contents listing.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ContentEntry {
    pub(super) name: String,
    pub(super) path: String,
    #[serde(default)]
    pub(super) download_url: Option<String>,
}

impl ContentEntry {
    pub(super) fn is_script(&self) -> bool {
        SCRIPT_EXTENSIONS
            .iter()
            .any(|ext| self.name.ends_with(ext))
    }
}

/// A downloaded script file, or a placeholder for one that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFile {
    name: String,
    path: String,
    content: String,
    language: &'static str,
}

impl RepoFile {
    /// Builds the file entry from a download outcome.
    ///
    /// On failure the content becomes a comment naming the reason and the
    /// language falls back to `javascript`.
    pub(super) fn from_download(entry: ContentEntry, downloaded: Result<String, String>) -> Self {
        let (content, language) = match downloaded {
            Ok(content) => {
                let language = language_for(&entry.name);
                (content, language)
            }
            Err(reason) => (format!("// Error loading file: {reason}"), "javascript"),
        };

        Self {
            name: entry.name,
            path: entry.path,
            content,
            language,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// `typescript` for `.ts` files, `javascript` for everything else.
    pub fn language(&self) -> &'static str {
        self.language
    }
}

/// Script files fetched from a repository.
#[derive(Debug, Clone)]
pub struct RepoContent {
    repo: RepoRef,
    files: Vec<RepoFile>,
    total_files: usize,
}

impl RepoContent {
    pub(super) fn new(repo: RepoRef, files: Vec<RepoFile>, total_files: usize) -> Self {
        Self {
            repo,
            files,
            total_files,
        }
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// Fetched files in listing order.
    pub fn files(&self) -> &[RepoFile] {
        &self.files
    }

    /// Number of script files in the listing, including any beyond the
    /// download limit.
    pub fn total_files(&self) -> usize {
        self.total_files
    }
}

// `.tsx` deliberately maps to javascript, like every non-`.ts` name.
fn language_for(name: &str) -> &'static str {
    if name.ends_with(".ts") {
        "typescript"
    } else {
        "javascript"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ContentEntry {
        ContentEntry {
            name: name.to_string(),
            path: format!("src/{name}"),
            download_url: Some(format!("https://raw.example/{name}")),
        }
    }

    #[test]
    fn test_parse_repo_ref() {
        let repo = RepoRef::parse("rust-lang/rust").unwrap();
        assert_eq!(repo.owner(), "rust-lang");
        assert_eq!(repo.repo(), "rust");
        assert_eq!(repo.to_string(), "rust-lang/rust");

        let loose: RepoRef = "/owner//repo/tree/main".parse().unwrap();
        assert_eq!(loose.to_string(), "owner/repo");
    }

    #[test]
    fn test_parse_repo_ref_rejects_single_segment() {
        for input in ["", "owner", "owner/", "//"] {
            assert!(
                matches!(RepoRef::parse(input), Err(FetchError::InvalidRepoRef(_))),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_script_filter() {
        assert!(entry("app.js").is_script());
        assert!(entry("types.ts").is_script());
        assert!(entry("view.jsx").is_script());
        assert!(entry("view.tsx").is_script());
        assert!(!entry("README.md").is_script());
        assert!(!entry("package.json").is_script());
    }

    #[test]
    fn test_language_from_download() {
        let ts = RepoFile::from_download(entry("a.ts"), Ok("let x = 1;".to_string()));
        assert_eq!(ts.language(), "typescript");
        assert_eq!(ts.content(), "let x = 1;");
        assert_eq!(ts.path(), "src/a.ts");

        let tsx = RepoFile::from_download(entry("a.tsx"), Ok(String::new()));
        assert_eq!(tsx.language(), "javascript");
    }

    #[test]
    fn test_failed_download_becomes_placeholder() {
        let file = RepoFile::from_download(entry("b.ts"), Err("timed out".to_string()));
        assert_eq!(file.name(), "b.ts");
        assert_eq!(file.content(), "// Error loading file: timed out");
        assert_eq!(file.language(), "javascript");
    }

    #[test]
    fn test_listing_deserializes() {
        let listing = r#"[
            {"name": "index.js", "path": "index.js", "type": "file", "download_url": "https://raw/index.js"},
            {"name": "src", "path": "src", "type": "dir", "download_url": null}
        ]"#;

        let entries: Vec<ContentEntry> = serde_json::from_str(listing).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_script());
        assert_eq!(entries[1].download_url, None);
    }
}
