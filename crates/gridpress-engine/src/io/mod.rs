//! Reading and writing article JSON files under a library directory.
//!
//! Persistence proper (sync, conflict handling) lives outside the engine;
//! this module only moves articles between disk and memory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Article;

#[derive(Debug, thiserror::Error)]
pub enum ArticleIoError {
    #[error("article not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid article JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid library directory: {0}")]
    InvalidLibraryDir(String),
}

/// Load one article from a JSON file.
pub fn load_article(path: &Path) -> Result<Article, ArticleIoError> {
    if !path.exists() {
        return Err(ArticleIoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| ArticleIoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an article as pretty-printed JSON, creating parent directories.
pub fn save_article(path: &Path, article: &Article) -> Result<(), ArticleIoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(article).map_err(|source| ArticleIoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json)?;
    Ok(())
}

/// List article files (`*.json`) under the library directory, sorted.
pub fn scan_articles(library_root: &Path) -> Result<Vec<PathBuf>, ArticleIoError> {
    if !library_root.exists() {
        return Err(ArticleIoError::InvalidLibraryDir(
            "library directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(library_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ArticleIoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles/monza.json");

        let mut article = Article::new("Monza preview");
        article.body.insert(&BlockKind::Heading, None).unwrap();
        save_article(&path, &article).unwrap();

        let loaded = load_article(&path).unwrap();
        assert_eq!(loaded, article);
    }

    #[test]
    fn load_of_missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghost.json");
        assert!(matches!(
            load_article(&path),
            Err(ArticleIoError::NotFound(_))
        ));
    }

    #[test]
    fn scan_finds_nested_articles() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("2026/monza.json");
        let b = dir.path().join("drafts.json");
        save_article(&a, &Article::new("a")).unwrap();
        save_article(&b, &Article::new("b")).unwrap();
        fs::write(dir.path().join("notes.txt"), "not an article").unwrap();

        let found = scan_articles(dir.path()).unwrap();
        assert_eq!(found, vec![a, b]);
    }
}
