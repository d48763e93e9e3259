// Storage I/O - the whole collection lives in one JSON document,
// rewritten wholesale on every mutation

use crate::error::{MovieLibError, Result};
use crate::movie::Movie;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Load the full collection from the storage document.
///
/// A missing file is a hard error: the collection cannot be created
/// without its backing document. A file that exists but does not
/// decode as a JSON list of movie records yields an empty collection
/// instead of an error.
pub fn load(path: &Path) -> Result<Vec<Movie>> {
    if !path.exists() {
        return Err(MovieLibError::StorageMissing {
            path: path.display().to_string(),
        });
    }

    let raw = std::fs::read_to_string(path)?;
    match serde_json::from_str(&raw) {
        Ok(movies) => Ok(movies),
        Err(e) => {
            log::warn!(
                "Storage at {} is not a movie list ({e}); starting with an empty collection",
                path.display()
            );
            Ok(Vec::new())
        }
    }
}

/// Serialize the full collection and replace the storage document.
/// The new content is written to a temp file in the same directory
/// and renamed over the target, so an interrupted save never leaves
/// a torn document. Best-effort beyond that; there is no
/// partial-write recovery.
pub fn save(path: &Path, movies: &[Movie]) -> Result<()> {
    let json = serde_json::to_string_pretty(movies)?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path).map_err(|e| MovieLibError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Vec<Movie> {
        vec![
            Movie {
                title: "Alien".into(),
                director: "Ridley Scott".into(),
                year: 1979,
                genres: vec!["Horror".into(), "Sci-Fi".into()],
            },
            Movie {
                title: "Heat".into(),
                director: "Michael Mann".into(),
                year: 1995,
                genres: vec!["Crime".into()],
            },
        ]
    }

    #[test]
    fn test_load_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.json");

        let result = load(&path);
        assert!(matches!(
            result,
            Err(MovieLibError::StorageMissing { .. })
        ));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("movies.json");

        let movies = sample();
        save(&path, &movies).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, movies);
    }

    #[test]
    fn test_load_non_list_content_recovers_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("movies.json");
        std::fs::write(&path, "\"not a list\"").unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_empty_file_recovers_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("movies.json");
        std::fs::write(&path, "").unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_overwrites_existing_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("movies.json");

        save(&path, &sample()).unwrap();
        save(&path, &[]).unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
    }
}
