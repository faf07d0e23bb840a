//! Request/response shapes for one recommendation round trip.

use crate::errors::AppError;

/// A validated search: the genre is never empty.
///
/// Only constructible through `GameQuery::new`, so the pipeline cannot be
/// started without a genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameQuery {
    genre: String,
    reference_title: Option<String>,
}

impl GameQuery {
    /// Trims both inputs. A blank reference title is treated as absent.
    pub fn new(genre: &str, reference_title: Option<&str>) -> Result<Self, AppError> {
        let genre = genre.trim();
        if genre.is_empty() {
            return Err(AppError::Validation("Please enter a game genre".to_string()));
        }

        let reference_title = reference_title
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Ok(Self {
            genre: genre.to_string(),
            reference_title,
        })
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn reference_title(&self) -> Option<&str> {
        self.reference_title.as_deref()
    }
}

/// Raw output of both stages. Neither field is parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationResult {
    pub titles_text: String,
    pub descriptions_text: String,
}
