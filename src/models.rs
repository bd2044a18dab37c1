use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Single-movie record from `/movie/{id}`. Listing fields are flattened in so
/// the detail view can reuse everything a [`Movie`] carries.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub revenue: Option<i64>,
}

/// Pagination envelope. `results` is one page; it is never reconciled with
/// `total_results`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u64,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Returns the value only when it carries visible text.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preserves_envelope_without_reconciling_counts() {
        let value = json!({
            "page": 1,
            "results": [{ "id": 1, "title": "Only One" }],
            "total_pages": 10,
            "total_results": 200
        });
        let parsed: ApiResponse<Movie> = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].id, 1);
        assert_eq!(parsed.total_pages, 10);
        assert_eq!(parsed.total_results, 200);
    }

    #[test]
    fn null_and_missing_paths_are_both_absent() {
        let value = json!([
            { "id": 1, "title": "A", "poster_path": null },
            { "id": 2, "title": "B" }
        ]);
        let movies: Vec<Movie> = serde_json::from_value(value).unwrap();
        assert!(movies.iter().all(|m| m.poster_path.is_none()));
        assert!(movies.iter().all(|m| m.vote_average.is_none()));
    }

    #[test]
    fn detail_flattens_listing_fields() {
        let value = json!({
            "id": 550,
            "title": "Fight Club",
            "poster_path": "/poster.jpg",
            "vote_average": 8.4,
            "genres": [{ "id": 18, "name": "Drama" }, { "id": 53, "name": "Thriller" }],
            "runtime": 139,
            "vote_count": 30000,
            "status": "Released",
            "tagline": null,
            "budget": 63000000,
            "revenue": 100853753
        });
        let detail: MovieDetail = serde_json::from_value(value).unwrap();
        assert_eq!(detail.movie.id, 550);
        assert_eq!(detail.movie.poster_path.as_deref(), Some("/poster.jpg"));
        let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Drama", "Thriller"]);
        assert_eq!(detail.runtime, Some(139));
        assert!(detail.tagline.is_none());
    }

    #[test]
    fn detail_without_genres_is_empty() {
        let detail: MovieDetail =
            serde_json::from_value(json!({ "id": 3, "title": "Bare", "genres": null })).unwrap();
        assert!(detail.genres.is_empty());
        assert!(detail.runtime.is_none());
        assert!(detail.vote_count.is_none());
    }

    #[test]
    fn non_empty_drops_blank_text() {
        assert_eq!(non_empty(Some("x")), Some("x"));
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
    }
}
