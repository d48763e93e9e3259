use crate::error::{MovieLibError, Result};
use crate::movie::{Movie, MovieUpdate};
use crate::storage;
use std::collections::HashMap;
use std::path::PathBuf;

/// The main entry point for movielib.
/// Holds the collection in memory, enforces the unique-title
/// invariant, and rewrites the backing document after every mutation.
pub struct MovieLibrary {
    path: PathBuf,
    movies: Vec<Movie>,
}

impl MovieLibrary {
    /// Open a movie library backed by the JSON document at the given path.
    /// Fails if the document does not exist; a document that exists but
    /// is not a movie list opens as an empty collection.
    pub fn open(path: &str) -> Result<Self> {
        let path = PathBuf::from(path);
        let movies = storage::load(&path)?;
        Ok(MovieLibrary { path, movies })
    }

    /// The full collection, in insertion order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of records in the collection.
    pub fn count(&self) -> usize {
        self.movies.len()
    }

    /// All titles, in collection order.
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }

    // ── Mutations ──────────────────────────────────────────────────

    /// Add a new movie. Fails if a record with the same
    /// case-insensitive title already exists; the collection is left
    /// unchanged in that case. Returns the added record.
    pub fn add(
        &mut self,
        title: &str,
        director: &str,
        year: i32,
        genres: Vec<String>,
    ) -> Result<Movie> {
        if self.find_by_title(title).is_some() {
            return Err(MovieLibError::DuplicateTitle {
                title: title.to_string(),
            });
        }

        let movie = Movie {
            title: title.to_string(),
            director: director.to_string(),
            year,
            genres,
        };
        self.movies.push(movie.clone());
        self.persist()?;
        Ok(movie)
    }

    /// Remove a movie by title (case-insensitive). Fails if no record
    /// matches. Returns the removed record.
    pub fn remove(&mut self, title: &str) -> Result<Movie> {
        let idx = self.position_of(title)?;
        let removed = self.movies.remove(idx);
        self.persist()?;
        Ok(removed)
    }

    /// Apply a partial update to the movie with the given title
    /// (case-insensitive). Only the fields present in the patch are
    /// overwritten; `Some(0)` and `Some(vec![])` apply literally.
    /// Returns the updated record.
    pub fn update(&mut self, title: &str, patch: MovieUpdate) -> Result<Movie> {
        let idx = self.position_of(title)?;

        let movie = &mut self.movies[idx];
        if let Some(director) = patch.director {
            movie.director = director;
        }
        if let Some(year) = patch.year {
            movie.year = year;
        }
        if let Some(genres) = patch.genres {
            movie.genres = genres;
        }
        let updated = movie.clone();

        self.persist()?;
        Ok(updated)
    }

    // ── Searches ───────────────────────────────────────────────────

    /// Case-insensitive exact title lookup. At most one record can
    /// match, by the uniqueness invariant.
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title_matches(title))
    }

    /// All movies whose title contains the substring, ignoring case.
    /// An empty substring matches the whole collection.
    pub fn find_by_title_substring(&self, substring: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.title_contains(substring))
            .collect()
    }

    /// All movies released in the given year.
    pub fn find_by_year(&self, year: i32) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.year == year).collect()
    }

    /// All movies by the given director, ignoring case.
    pub fn find_by_director(&self, director: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.directed_by(director))
            .collect()
    }

    /// All movies carrying the given genre, ignoring case. A record
    /// listing the genre twice still appears once.
    pub fn find_by_genre(&self, genre: &str) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.has_genre(genre)).collect()
    }

    // ── Aggregations ───────────────────────────────────────────────
    // Each returns None only when the collection is empty. Ties are
    // all returned, in collection order.

    /// Titles of every movie whose year equals the minimum present.
    pub fn oldest_titles(&self) -> Option<Vec<&str>> {
        let oldest = self.movies.iter().map(|m| m.year).min()?;
        Some(
            self.movies
                .iter()
                .filter(|m| m.year == oldest)
                .map(|m| m.title.as_str())
                .collect(),
        )
    }

    /// Arithmetic mean of all release years, unrounded.
    pub fn average_year(&self) -> Option<f64> {
        if self.movies.is_empty() {
            return None;
        }
        let total: i64 = self.movies.iter().map(|m| i64::from(m.year)).sum();
        Some(total as f64 / self.movies.len() as f64)
    }

    /// Titles of every movie whose title character count equals the
    /// maximum present.
    pub fn longest_titles(&self) -> Option<Vec<&str>> {
        let longest = self.movies.iter().map(|m| m.title.chars().count()).max()?;
        Some(
            self.movies
                .iter()
                .filter(|m| m.title.chars().count() == longest)
                .map(|m| m.title.as_str())
                .collect(),
        )
    }

    /// Titles of movies released between the two years, inclusive on
    /// both ends. A non-empty collection with no matches returns an
    /// empty list, not None.
    pub fn titles_between_years(&self, start: i32, end: i32) -> Option<Vec<&str>> {
        if self.movies.is_empty() {
            return None;
        }
        Some(
            self.movies
                .iter()
                .filter(|m| (start..=end).contains(&m.year))
                .map(|m| m.title.as_str())
                .collect(),
        )
    }

    /// The year occurring most often in the collection. Ties resolve
    /// to whichever year appears first in collection order.
    pub fn most_common_year(&self) -> Option<i32> {
        if self.movies.is_empty() {
            return None;
        }

        let mut counts: HashMap<i32, usize> = HashMap::new();
        for movie in &self.movies {
            *counts.entry(movie.year).or_insert(0) += 1;
        }

        // Rescan in collection order with a strict `>` so the first
        // year reaching the maximum count wins ties.
        let mut best: Option<(i32, usize)> = None;
        for movie in &self.movies {
            let count = counts[&movie.year];
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((movie.year, count));
            }
        }

        best.map(|(year, _)| year)
    }

    // ── Internals ──────────────────────────────────────────────────

    fn position_of(&self, title: &str) -> Result<usize> {
        self.movies
            .iter()
            .position(|m| m.title_matches(title))
            .ok_or_else(|| MovieLibError::NotFound {
                title: title.to_string(),
            })
    }

    /// Rewrite the backing document with the current collection.
    /// There is no rollback of the in-memory mutation if this fails.
    fn persist(&self) -> Result<()> {
        storage::save(&self.path, &self.movies)
    }
}
