use nowplaying::error::{ProjectionError, UpstreamError};
use nowplaying::spotify::player::parse_playback;
use nowplaying::types::{Album, Artist, ExternalUrls, Image, NowPlayingSummary, Playback, TrackItem};
use nowplaying::utils::*;

// Helper function to create a test track
fn create_test_track(name: &str, artists: &[&str], images: &[&str], link: &str) -> TrackItem {
    TrackItem {
        name: name.to_string(),
        album: Album {
            name: "Alb".to_string(),
            images: images
                .iter()
                .map(|url| Image {
                    url: url.to_string(),
                })
                .collect(),
        },
        artists: artists
            .iter()
            .map(|name| Artist {
                name: name.to_string(),
            })
            .collect(),
        external_urls: ExternalUrls {
            spotify: link.to_string(),
        },
    }
}

#[test]
fn test_join_artists() {
    let track = create_test_track("Song", &[], &[], "");
    assert_eq!(join_artists(&track.artists), "");

    let track = create_test_track("Song", &["A"], &[], "");
    assert_eq!(join_artists(&track.artists), "A");

    let track = create_test_track("Song", &["A", "B", "C"], &[], "");
    let joined = join_artists(&track.artists);
    assert_eq!(joined, "A, B, C");
    assert!(!joined.ends_with(", "));
}

#[test]
fn test_project_display_name() {
    let track = create_test_track("Song", &["A", "B"], &["http://img/1"], "http://link");
    let summary = project(&track).unwrap();

    assert_eq!(
        summary,
        NowPlayingSummary {
            name: "Song - A, B".to_string(),
            url: "http://link".to_string(),
            image: "http://img/1".to_string(),
        }
    );

    // No artists still keeps the separator
    let track = create_test_track("Song", &[], &["http://img/1"], "http://link");
    assert_eq!(project(&track).unwrap().name, "Song - ");

    let track = create_test_track("Song", &["Solo"], &["http://img/1"], "http://link");
    assert_eq!(project(&track).unwrap().name, "Song - Solo");
}

#[test]
fn test_project_uses_first_image() {
    let track = create_test_track(
        "Song",
        &["A"],
        &["http://img/640", "http://img/300", "http://img/64"],
        "http://link",
    );
    assert_eq!(project(&track).unwrap().image, "http://img/640");
}

#[test]
fn test_project_without_image() {
    let track = create_test_track("Song", &["A"], &[], "http://link");
    assert_eq!(project(&track), Err(ProjectionError::NoImage));
}

#[test]
fn test_summary_omits_empty_fields() {
    let track = create_test_track("Song", &["A"], &["http://img/1"], "");
    let json = serde_json::to_string(&project(&track).unwrap()).unwrap();
    assert_eq!(json, r#"{"name":"Song - A","image":"http://img/1"}"#);
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html("<script>alert('x')</script>"),
        "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
    );
    assert_eq!(escape_html(r#"a" onload="b"#), "a&quot; onload=&quot;b");
    assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(escape_html("Plain ünïcode"), "Plain ünïcode");
}

#[test]
fn test_safe_url() {
    assert_eq!(
        safe_url("https://open.spotify.com/track/1"),
        "https://open.spotify.com/track/1"
    );
    assert_eq!(safe_url("http://img/1"), "http://img/1");
    assert_eq!(safe_url("HTTPS://i.scdn.co/image/ab"), "HTTPS://i.scdn.co/image/ab");

    assert_eq!(safe_url("javascript:alert(document.cookie)"), "#");
    assert_eq!(safe_url("JaVaScRiPt:alert(1)"), "#");
    assert_eq!(safe_url("data:text/html,<script>alert(1)</script>"), "#");
    assert_eq!(safe_url("//evil.example/x"), "#");
    assert_eq!(safe_url(""), "#");
}

#[test]
fn test_parse_playback_empty_body() {
    assert!(matches!(parse_playback(b""), Ok(Playback::NothingPlaying)));
    assert!(matches!(
        parse_playback(b"  \n"),
        Ok(Playback::NothingPlaying)
    ));
}

#[test]
fn test_parse_playback_null_item() {
    let body = br#"{"item":null,"is_playing":true,"currently_playing_type":"ad"}"#;
    assert!(matches!(parse_playback(body), Ok(Playback::NothingPlaying)));
}

#[test]
fn test_parse_playback_track() {
    let body = br#"{"item":{"name":"Song","album":{"name":"Alb","images":[{"url":"http://img/1","height":640,"width":640}]},"artists":[{"name":"A"},{"name":"B"}],"external_urls":{"spotify":"http://link"}}}"#;

    match parse_playback(body) {
        Ok(Playback::Playing(item)) => {
            assert_eq!(item.name, "Song");
            assert_eq!(item.album.name, "Alb");
            assert_eq!(item.album.images.len(), 1);
            assert_eq!(join_artists(&item.artists), "A, B");
            assert_eq!(item.external_urls.spotify, "http://link");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_parse_playback_malformed() {
    assert!(matches!(
        parse_playback(b"<html>oops</html>"),
        Err(UpstreamError::BadResponse(_))
    ));
    // Valid JSON, wrong shape
    assert!(matches!(
        parse_playback(br#"{"item":{"name":42}}"#),
        Err(UpstreamError::BadResponse(_))
    ));
}
