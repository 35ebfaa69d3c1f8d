use std::path::PathBuf;

/// Word list loading failures. The `Display` text is shown to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Error: File {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Error: No words found in file")]
    Empty(PathBuf),

    #[error("Error loading words: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::NotFound(path) | LoadError::Empty(path) => path,
            LoadError::Io { path, .. } => path,
        }
    }
}
