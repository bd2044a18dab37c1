//! Server-rendered HTML for the dashboard.
//!
//! Every optional field of a view model is checked before its markup is
//! emitted: absent sections are left out rather than rendered empty.
use crate::utils::escape_html;

mod components;
mod pages;

pub use components::{header, hero_banner, movie_card, movie_row};
pub use pages::{detail_page, error_page, home_page, not_found_page};

pub const SITE_TITLE: &str = "Streaming Dashboard";
pub const SITE_DESCRIPTION: &str = "A Netflix/Hulu-style streaming dashboard";

/// Page-level `<head>` data.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
}

impl PageMeta {
    pub fn site() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            description: Some(SITE_DESCRIPTION.to_string()),
            ..Self::default()
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

const STYLE: &str = r#"
*{box-sizing:border-box}
body{margin:0;background:#000;color:#fff;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif}
a{color:inherit;text-decoration:none}
.site-header{position:fixed;top:0;left:0;right:0;z-index:50;background:rgba(0,0,0,.8);border-bottom:1px solid #1f2937}
.site-header nav{display:flex;align-items:center;justify-content:space-between;padding:1rem 2rem}
.brand{font-size:1.5rem;font-weight:700;color:#dc2626}
.nav-links a{color:#d1d5db}
main{padding-top:4rem}
.hero{position:relative;height:70vh;background:linear-gradient(to right,#111827,#1f2937) center/cover no-repeat}
.hero::after{content:"";position:absolute;inset:0;background:linear-gradient(to right,rgba(0,0,0,.8),rgba(0,0,0,.5),transparent)}
.hero-content{position:absolute;inset:0;z-index:1;display:flex;flex-direction:column;justify-content:center;padding:0 2rem;max-width:56rem}
.hero h1{font-size:3.5rem;margin:0 0 1rem}
.hero p{font-size:1.2rem;color:#e5e7eb;max-width:42rem}
.button{display:inline-block;background:#dc2626;color:#fff;font-weight:600;padding:.75rem 2rem;border-radius:.5rem}
.rows{padding:2rem 0}
.row{margin-bottom:2rem}
.row h2{font-size:1.5rem;padding:0 2rem}
.row-track{display:flex;gap:1rem;overflow-x:auto;padding:0 2rem 1rem}
.card{display:block;min-width:200px;width:200px}
.card-poster{position:relative;aspect-ratio:2/3;border-radius:.5rem;overflow:hidden;background:#1f2937}
.card-poster img{width:100%;height:100%;object-fit:cover}
.card-title{font-size:.875rem;font-weight:600;margin:.5rem 0}
.no-image{display:flex;align-items:center;justify-content:center;width:100%;height:100%;color:#6b7280}
.backdrop{height:50vh;background-size:cover;background-position:center;opacity:.3}
.detail{padding:2rem}
.back{color:#9ca3af;display:inline-block;margin-bottom:2rem}
.detail-body{display:flex;gap:2rem;flex-wrap:wrap}
.detail-poster{width:300px;aspect-ratio:2/3;border-radius:.5rem;overflow:hidden;background:#1f2937}
.detail-poster img{width:100%;height:100%;object-fit:cover}
.detail-info{flex:1;min-width:280px}
.tagline{font-size:1.25rem;color:#9ca3af;font-style:italic}
.facts{display:flex;flex-wrap:wrap;gap:1rem;font-size:.875rem;margin-bottom:1.5rem}
.label{color:#9ca3af}
.genres{display:flex;flex-wrap:wrap;gap:.5rem;margin-bottom:1.5rem}
.genre{padding:.25rem .75rem;background:#dc2626;border-radius:9999px;font-size:.875rem}
.overview p{color:#d1d5db;line-height:1.6}
.extra{display:grid;grid-template-columns:1fr 1fr;gap:1rem;font-size:.875rem}
.centered{min-height:80vh;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center}
.muted{color:#9ca3af}
"#;

/// Wraps `body` in the document shell with the site header.
pub fn layout(meta: &PageMeta, body: &str) -> String {
    let mut head = format!("<title>{}</title>", escape_html(&meta.title));
    if let Some(desc) = &meta.description {
        head.push_str(&format!(
            r#"<meta name="description" content="{}">"#,
            escape_html(desc)
        ));
    }
    if let Some(title) = &meta.og_title {
        head.push_str(&format!(
            r#"<meta property="og:title" content="{}">"#,
            escape_html(title)
        ));
    }
    if let Some(desc) = &meta.og_description {
        head.push_str(&format!(
            r#"<meta property="og:description" content="{}">"#,
            escape_html(desc)
        ));
    }
    if let Some(image) = &meta.og_image {
        head.push_str(&format!(
            r#"<meta property="og:image" content="{}">"#,
            escape_html(image)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{head}
<style>{STYLE}</style>
</head>
<body>
{header}
<main>{body}</main>
</body>
</html>
"#,
        header = header(),
    )
}

/// Inline SVG served for posters that have no upstream image.
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="342" height="513" viewBox="0 0 342 513"><rect width="342" height="513" fill="#1f2937"/><text x="171" y="262" fill="#6b7280" font-family="sans-serif" font-size="24" text-anchor="middle">No Image</text></svg>"##;
