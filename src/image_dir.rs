use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read directory {path:?}: {source}")]
    ReadDir { path: PathBuf, source: std::io::Error },

    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),

    #[error("failed to read file {path:?}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("failed to decode image {path:?}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("failed to create texture for {path:?}: {message}")]
    Texture { path: PathBuf, message: String },
}

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

pub fn lowercase_extension(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

// Image files of a directory, in file name order.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir_path)
        .map_err(|source| LoadError::ReadDir { path: dir_path.to_path_buf(), source })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::ReadDir { path: dir_path.to_path_buf(), source })?;
        let path = entry.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&lowercase_extension(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(LoadError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}
