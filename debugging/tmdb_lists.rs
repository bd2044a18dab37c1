//! Fetch TMDB listings or a single movie and print the mapped view models.
//! Usage:
//!   cargo run --bin tmdb_lists -- home
//!   cargo run --bin tmdb_lists -- movie <tmdb_id>
//! Requires TMDB_API_KEY in the environment (.env supported).

use anyhow::Result;
use dotenvy::dotenv;
use serde_json::{json, Value};
use std::env;
use streamflix::cache::RevalidationPolicy;
use streamflix::config::Config;
use streamflix::models::{ApiResponse, Movie};
use streamflix::tmdb::{fetch_home_listings, TmdbApi, TmdbClient};
use streamflix::utils::{format_runtime, image_url, ImageSize};

enum Command {
    Home,
    Movie(String),
}

fn usage() -> ! {
    eprintln!("Usage: cargo run --bin tmdb_lists -- <home|movie> [tmdb_id]");
    std::process::exit(2);
}

fn parse_args() -> Command {
    let mut args = env::args().skip(1);
    let kind = args.next().unwrap_or_else(|| "home".to_string());
    match kind.as_str() {
        "home" => Command::Home,
        "movie" => Command::Movie(args.next().unwrap_or_else(|| usage())),
        _ => usage(),
    }
}

fn summary(category: &str, list: &ApiResponse<Movie>) -> Value {
    let titles: Vec<&str> = list.results.iter().map(|m| m.title.as_str()).collect();
    json!({
        "category": category,
        "page": list.page,
        "total_pages": list.total_pages,
        "total_results": list.total_results,
        "titles": titles,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    let command = parse_args();

    let mut config = Config::from_env()?;
    config.revalidate = RevalidationPolicy::disabled();
    let client = TmdbClient::from_config(&config)?;

    let output = match command {
        Command::Home => {
            let listings = fetch_home_listings(&client).await?;
            json!([
                summary("popular", &listings.popular),
                summary("now_playing", &listings.now_playing),
                summary("top_rated", &listings.top_rated),
            ])
        }
        Command::Movie(id) => {
            let detail = client.fetch_movie_by_id(&id).await?;
            let runtime = format_runtime(detail.runtime);
            let poster = image_url(detail.movie.poster_path.as_deref(), ImageSize::W500);
            let backdrop = image_url(detail.movie.backdrop_path.as_deref(), ImageSize::Original);
            json!({
                "detail": detail,
                "runtime": runtime,
                "poster": poster,
                "backdrop": backdrop,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
