use super::{hero_banner, layout, movie_row, PageMeta, SITE_TITLE};
use crate::models::{non_empty, MovieDetail};
use crate::tmdb::HomeListings;
use crate::utils::{
    escape_html, format_count, format_rating, format_release_date, format_runtime,
    tmdb_image_url, ImageSize,
};

pub fn home_page(listings: &HomeListings) -> String {
    let mut body = String::new();
    if let Some(hero) = listings.popular.results.first() {
        body.push_str(&hero_banner(hero));
    }
    body.push_str(r#"<div class="rows">"#);
    body.push_str(&movie_row("Popular Movies", &listings.popular.results));
    body.push_str(&movie_row("Now Playing", &listings.now_playing.results));
    body.push_str(&movie_row("Top Rated", &listings.top_rated.results));
    body.push_str("</div>");
    layout(&PageMeta::site(), &body)
}

pub fn error_page() -> String {
    let body = r#"<div class="centered"><h1>Error Loading Movies</h1><p class="muted">Please check your TMDB_API_KEY in .env</p></div>"#;
    layout(&PageMeta::site(), body)
}

pub fn not_found_page() -> String {
    let body = r#"<div class="centered"><h1>Movie Not Found</h1><p class="muted">The movie you&#39;re looking for doesn&#39;t exist or has been removed.</p><a href="/" class="button">Go Back Home</a></div>"#;
    layout(&PageMeta::titled("Movie Not Found"), body)
}

fn detail_meta(detail: &MovieDetail) -> PageMeta {
    let movie = &detail.movie;
    let overview = non_empty(movie.overview.as_deref());
    PageMeta {
        title: format!("{} | {SITE_TITLE}", movie.title),
        description: Some(
            overview
                .map(str::to_string)
                .unwrap_or_else(|| format!("Details for {}", movie.title)),
        ),
        og_title: Some(movie.title.clone()),
        og_description: Some(overview.unwrap_or_default().to_string()),
        og_image: tmdb_image_url(movie.poster_path.as_deref(), ImageSize::W500),
    }
}

fn fact(label: &str, value: &str) -> String {
    format!(
        r#"<div><span class="label">{label}: </span><span>{}</span></div>"#,
        escape_html(value)
    )
}

pub fn detail_page(detail: &MovieDetail) -> String {
    let movie = &detail.movie;
    let title = escape_html(&movie.title);
    let mut body = String::new();

    if let Some(url) = tmdb_image_url(movie.backdrop_path.as_deref(), ImageSize::Original) {
        body.push_str(&format!(
            r#"<div class="backdrop" style="background-image:url('{}')"></div>"#,
            escape_html(&url)
        ));
    }

    body.push_str(r#"<div class="detail"><a href="/" class="back" aria-label="Go back to home page">&larr; Back to Home</a><div class="detail-body">"#);

    let poster = match tmdb_image_url(movie.poster_path.as_deref(), ImageSize::W500) {
        Some(url) => format!(r#"<img src="{}" alt="{title}">"#, escape_html(&url)),
        None => r#"<div class="no-image">No Image</div>"#.to_string(),
    };
    body.push_str(&format!(r#"<div class="detail-poster">{poster}</div>"#));

    body.push_str(&format!(r#"<div class="detail-info"><h1>{title}</h1>"#));
    if let Some(tagline) = non_empty(detail.tagline.as_deref()) {
        body.push_str(&format!(
            r#"<p class="tagline">{}</p>"#,
            escape_html(tagline)
        ));
    }

    let mut facts = String::new();
    if let Some(date) = non_empty(movie.release_date.as_deref()) {
        facts.push_str(&fact("Release Date", &format_release_date(Some(date))));
    }
    if let Some(runtime) = detail.runtime.filter(|r| *r > 0) {
        facts.push_str(&fact("Runtime", &format_runtime(Some(runtime))));
    }
    if let Some(avg) = movie.vote_average {
        facts.push_str(&fact("Rating", &format_rating(avg)));
    }
    body.push_str(&format!(r#"<div class="facts">{facts}</div>"#));

    if !detail.genres.is_empty() {
        let chips: String = detail
            .genres
            .iter()
            .map(|g| format!(r#"<span class="genre">{}</span>"#, escape_html(&g.name)))
            .collect();
        body.push_str(&format!(r#"<div class="genres">{chips}</div>"#));
    }

    if let Some(overview) = non_empty(movie.overview.as_deref()) {
        body.push_str(&format!(
            r#"<div class="overview"><h2>Overview</h2><p>{}</p></div>"#,
            escape_html(overview)
        ));
    }

    let mut extra = String::new();
    if let Some(status) = non_empty(detail.status.as_deref()) {
        extra.push_str(&fact("Status", status));
    }
    if let Some(count) = detail.vote_count {
        extra.push_str(&fact("Vote Count", &format_count(count)));
    }
    body.push_str(&format!(r#"<div class="extra">{extra}</div>"#));

    body.push_str("</div></div></div>");
    layout(&detail_meta(detail), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiResponse, Genre, Movie};

    fn bare_detail() -> MovieDetail {
        MovieDetail {
            movie: Movie {
                id: 42,
                title: "Bare <Movie>".to_string(),
                poster_path: None,
                backdrop_path: None,
                overview: None,
                release_date: None,
                vote_average: None,
            },
            genres: vec![],
            runtime: None,
            vote_count: None,
            status: None,
            tagline: None,
            budget: None,
            revenue: None,
        }
    }

    fn listing(ids: &[i64]) -> ApiResponse<Movie> {
        ApiResponse {
            page: 1,
            results: ids
                .iter()
                .map(|id| Movie {
                    id: *id,
                    title: format!("Movie {id}"),
                    poster_path: None,
                    backdrop_path: None,
                    overview: None,
                    release_date: None,
                    vote_average: None,
                })
                .collect(),
            total_pages: 1,
            total_results: ids.len() as u64,
        }
    }

    #[test]
    fn absent_fields_hide_their_sections() {
        let html = detail_page(&bare_detail());
        assert!(html.contains("Bare &lt;Movie&gt;"));
        assert!(html.contains("No Image"));
        assert!(!html.contains("Rating:"));
        assert!(!html.contains("N/A"));
        assert!(!html.contains("Runtime:"));
        assert!(!html.contains("Release Date:"));
        assert!(!html.contains("Overview"));
        assert!(!html.contains("class=\"genre\""));
        assert!(!html.contains("class=\"tagline\""));
        assert!(!html.contains("Vote Count:"));
        assert!(!html.contains("image.tmdb.org"));
        assert!(html.contains("Details for Bare &lt;Movie&gt;"));
    }

    #[test]
    fn present_fields_are_formatted() {
        let mut detail = bare_detail();
        detail.movie.poster_path = Some("/poster.jpg".to_string());
        detail.movie.backdrop_path = Some("/backdrop.jpg".to_string());
        detail.movie.vote_average = Some(7.5);
        detail.movie.release_date = Some("2024-01-15".to_string());
        detail.movie.overview = Some("A story.".to_string());
        detail.runtime = Some(125);
        detail.vote_count = Some(12345);
        detail.status = Some("Released".to_string());
        detail.tagline = Some("Tag".to_string());
        detail.genres = vec![Genre {
            id: 18,
            name: "Drama".to_string(),
        }];

        let html = detail_page(&detail);
        assert!(html.contains("7.5/10"));
        assert!(html.contains("2h 5m"));
        assert!(html.contains("January 15, 2024"));
        assert!(html.contains("12,345"));
        assert!(html.contains("Released"));
        assert!(html.contains("Drama"));
        assert!(html.contains("https://image.tmdb.org/t/p/w500/poster.jpg"));
        assert!(html.contains("https://image.tmdb.org/t/p/original/backdrop.jpg"));
        assert!(html.contains(r#"<meta property="og:image""#));
    }

    #[test]
    fn zero_runtime_is_hidden() {
        let mut detail = bare_detail();
        detail.runtime = Some(0);
        assert!(!detail_page(&detail).contains("Runtime:"));
    }

    #[test]
    fn home_uses_first_popular_as_hero_and_skips_empty_rows() {
        let listings = HomeListings {
            popular: listing(&[5, 6]),
            now_playing: listing(&[]),
            top_rated: listing(&[7]),
        };
        let html = home_page(&listings);
        assert!(html.contains(r#"<section class="hero""#));
        assert!(html.contains("Popular Movies"));
        assert!(!html.contains("Now Playing"));
        assert!(html.contains("Top Rated"));
        assert!(html.find("href=\"/movie/5\" class=\"button\"").is_some());
    }

    #[test]
    fn not_found_links_home() {
        let html = not_found_page();
        assert!(html.contains("Movie Not Found"));
        assert!(html.contains(r#"<a href="/" class="button">Go Back Home</a>"#));
    }
}
