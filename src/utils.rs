use crate::{
    error::ProjectionError,
    types::{Artist, NowPlayingSummary, TrackItem},
};

/// Joins artist names in their given order with `", "`.
///
/// # Arguments
///
/// * `artists` - Artists as delivered by Spotify, main artist first
///
/// # Example
///
/// ```
/// // [A, B, C] -> "A, B, C", [] -> ""
/// let joined = join_artists(&item.artists);
/// ```
pub fn join_artists(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Projects an upstream track into the summary returned to callers.
///
/// The display name is `"<track> - <artists>"`, the image is the first
/// (largest) cover and the url is the Spotify link, passed through as is.
pub fn project(item: &TrackItem) -> Result<NowPlayingSummary, ProjectionError> {
    let image = item
        .album
        .images
        .first()
        .ok_or(ProjectionError::NoImage)?;

    Ok(NowPlayingSummary {
        name: format!("{} - {}", item.name, join_artists(&item.artists)),
        url: item.external_urls.spotify.clone(),
        image: image.url.clone(),
    })
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Returns `url` if it is an absolute `http` or `https` URL, `"#"` otherwise.
///
/// Escaping alone does not make a URL attribute safe: `javascript:` and
/// `data:` links survive it untouched. Anything rendered into `href` or
/// `src` goes through this first.
///
/// # Example
///
/// ```
/// assert_eq!(safe_url("https://open.spotify.com/track/1"), "https://open.spotify.com/track/1");
/// assert_eq!(safe_url("javascript:alert(1)"), "#");
/// ```
pub fn safe_url(url: &str) -> &str {
    let Some((scheme, _)) = url.split_once(':') else {
        return "#";
    };

    if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
        url
    } else {
        "#"
    }
}
