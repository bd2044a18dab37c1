use crate::models::{non_empty, Movie};
use crate::utils::{escape_html, tmdb_image_url, ImageSize};

pub fn header() -> String {
    r#"<header class="site-header"><nav><a href="/" class="brand">StreamFlix</a><div class="nav-links"><a href="/">Home</a></div></nav></header>"#
        .to_string()
}

pub fn hero_banner(movie: &Movie) -> String {
    let title = escape_html(&movie.title);
    let style = tmdb_image_url(movie.backdrop_path.as_deref(), ImageSize::Original)
        .map(|url| format!(r#" style="background-image:url('{}')""#, escape_html(&url)))
        .unwrap_or_default();
    let overview = non_empty(movie.overview.as_deref())
        .map(|o| format!("<p>{}</p>", escape_html(o)))
        .unwrap_or_default();
    format!(
        r#"<section class="hero"{style} aria-label="{title}"><div class="hero-content"><h1>{title}</h1>{overview}<a href="/movie/{id}" class="button">View Details</a></div></section>"#,
        id = movie.id,
    )
}

pub fn movie_card(movie: &Movie) -> String {
    let title = escape_html(&movie.title);
    let poster = match tmdb_image_url(movie.poster_path.as_deref(), ImageSize::W342) {
        Some(url) => format!(
            r#"<img src="{}" alt="{title}" loading="lazy">"#,
            escape_html(&url)
        ),
        None => r#"<div class="no-image">No Image</div>"#.to_string(),
    };
    format!(
        r#"<a href="/movie/{id}" class="card"><div class="card-poster">{poster}</div><h3 class="card-title">{title}</h3></a>"#,
        id = movie.id,
    )
}

/// A titled horizontal row. Empty lists render nothing.
pub fn movie_row(category_title: &str, movies: &[Movie]) -> String {
    if movies.is_empty() {
        return String::new();
    }
    let cards: String = movies.iter().map(movie_card).collect();
    format!(
        r#"<section class="row"><h2>{}</h2><div class="row-track">{cards}</div></section>"#,
        escape_html(category_title)
    )
}
