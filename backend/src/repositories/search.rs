//! Seeker search query construction
//!
//! Builds the `SELECT` behind `GET /api/seekers` from whichever criteria
//! were supplied. Present criteria are AND-ed; absent ones add nothing.
//! User input only ever travels as bound parameters.

use super::seeker::SEEKER_COLUMNS;
use freelancer_shared::validation::non_empty;
use freelancer_shared::SeekerSearchParams;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parsed search criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeekerFilter {
    /// Case-insensitive substring of the skill
    pub skill: Option<String>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    /// Case-insensitive substring of the availability period
    pub time_period: Option<String>,
    /// Inclusive lower bound on rating
    pub min_rating: Option<Decimal>,
}

/// A value bound to a placeholder of a `SearchQuery`
#[derive(Debug, Clone, PartialEq)]
pub enum SearchParam {
    /// `ILIKE` pattern, already wrapped in `%`
    Pattern(String),
    MinRating(Decimal),
}

/// SQL text plus its parameters, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub sql: String,
    pub params: Vec<SearchParam>,
}

impl SeekerFilter {
    /// Interpret raw query-string criteria
    ///
    /// Empty values count as absent. A rating that is not a number is
    /// rejected with a message suitable for the client.
    pub fn from_params(params: &SeekerSearchParams) -> Result<Self, String> {
        let min_rating = non_empty(params.rating.as_deref())
            .map(|raw| {
                Decimal::from_str(raw.trim())
                    .map_err(|_| format!("Rating must be a number, got '{}'", raw))
            })
            .transpose()?;

        Ok(Self {
            skill: non_empty(params.skill.as_deref()).map(str::to_string),
            location: non_empty(params.location.as_deref()).map(str::to_string),
            time_period: params.time_period().map(str::to_string),
            min_rating,
        })
    }

    /// Assemble the parameterized query
    pub fn build(&self) -> SearchQuery {
        let mut clauses = Vec::new();
        let mut params = Vec::new();

        let substrings = [
            ("skill", &self.skill),
            ("location", &self.location),
            ("time_period", &self.time_period),
        ];
        for (column, value) in substrings {
            if let Some(value) = value {
                params.push(SearchParam::Pattern(like_pattern(value)));
                clauses.push(format!("{} ILIKE ${}", column, params.len()));
            }
        }

        if let Some(rating) = self.min_rating {
            params.push(SearchParam::MinRating(rating));
            clauses.push(format!("rating >= ${}", params.len()));
        }

        let mut sql = format!("SELECT {} FROM seeker", SEEKER_COLUMNS);
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id");

        SearchQuery { sql, params }
    }
}

/// Wrap a substring in `%` after escaping LIKE metacharacters
fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
