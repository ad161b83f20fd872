use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::models::post::Post;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Post not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read one post from the content directory.
pub fn read_post(relative_path: &RelativePath, content_root: &Path) -> Result<Post, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let source = fs::read_to_string(&absolute_path).map_err(IoError::Io)?;
    Ok(Post::from_source(relative_path.to_relative_path_buf(), &source))
}

/// Scan the content directory for `.md` posts, as paths relative to the
/// content root.
pub fn scan_posts(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();

    let mut posts = Vec::new();
    for file in files {
        match file.strip_prefix(content_root) {
            Ok(rel) => match RelativePathBuf::from_path(rel) {
                Ok(rel) => posts.push(rel),
                Err(_) => log::warn!("skipping post with non-relative path: {}", file.display()),
            },
            Err(_) => log::warn!("skipping post outside content root: {}", file.display()),
        }
    }
    Ok(posts)
}

/// Load every post under the content root, newest first.
///
/// Ordering: front-matter date descending (ISO dates sort lexically), posts
/// without a date last, path as the tiebreaker.
pub fn load_posts(content_root: &Path) -> Result<Vec<Post>, IoError> {
    let mut posts = Vec::new();
    for relative_path in scan_posts(content_root)? {
        posts.push(read_post(&relative_path, content_root)?);
    }
    posts.sort_by(|a, b| {
        b.meta
            .date
            .cmp(&a.meta.date)
            .then_with(|| a.relative_path.cmp(&b.relative_path))
    });
    Ok(posts)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
