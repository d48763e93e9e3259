// Record model - the movie entry and the patch applied by update

use serde::{Deserialize, Serialize};

/// A single movie record. Identity within a collection is the title,
/// compared case-insensitively; the stored casing is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genres: Vec<String>,
}

impl Movie {
    /// Case-insensitive title equality.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive substring containment on the title.
    /// An empty needle matches every title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Case-insensitive director equality.
    pub fn directed_by(&self, director: &str) -> bool {
        self.director.to_lowercase() == director.to_lowercase()
    }

    /// Case-insensitive membership test against the genre list.
    pub fn has_genre(&self, genre: &str) -> bool {
        let genre = genre.to_lowercase();
        self.genres.iter().any(|g| g.to_lowercase() == genre)
    }
}

/// A partial update for an existing movie. `None` leaves the field
/// unchanged; `Some` always applies, so year 0 and an empty genre
/// list are expressible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieUpdate {
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
}

impl MovieUpdate {
    /// True if no field is supplied (the update would be a no-op).
    pub fn is_empty(&self) -> bool {
        self.director.is_none() && self.year.is_none() && self.genres.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            title: "The Matrix".into(),
            director: "Wachowski".into(),
            year: 1999,
            genres: vec!["Sci-Fi".into(), "Action".into()],
        }
    }

    #[test]
    fn test_title_matches_ignores_case() {
        let m = movie();
        assert!(m.title_matches("the matrix"));
        assert!(m.title_matches("THE MATRIX"));
        assert!(!m.title_matches("The Matrix Reloaded"));
    }

    #[test]
    fn test_title_contains() {
        let m = movie();
        assert!(m.title_contains("matr"));
        assert!(m.title_contains("MATR"));
        assert!(m.title_contains(""));
        assert!(!m.title_contains("reloaded"));
    }

    #[test]
    fn test_has_genre_ignores_case() {
        let m = movie();
        assert!(m.has_genre("sci-fi"));
        assert!(m.has_genre("ACTION"));
        assert!(!m.has_genre("Drama"));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(MovieUpdate::default().is_empty());
        let patch = MovieUpdate {
            year: Some(0),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
