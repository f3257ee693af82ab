//! Integration tests for the source providers against mocked upstream APIs

use core::time::Duration;
use game_intel::facts::{
    AUTHOR, Collector, ContentType, PUBLICATION_DATE, SECTION_TYPE, build_http_client, fandom, gamespot, ign, is_rate_limit_error, youtube,
};
use std::time::Instant;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> reqwest::Client {
    build_http_client().expect("Failed to build HTTP client")
}

async fn mount_json(server: &MockServer, route: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

// Fandom

#[tokio::test]
async fn test_fandom_pages_become_abstract_and_section_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "Hades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "pages": [{
                    "id": 1,
                    "title": "Hades",
                    "abstract": "Hades is a roguelike dungeon crawler.",
                    "url": "https://hades.fandom.com/wiki/Hades",
                    "sections": [
                        { "title": "Game Play", "level": 2, "content": "Fight out of the [[Underworld]].\n\nRepeat." },
                        { "title": "Empty", "level": 2, "content": "" }
                    ]
                }]
            }
        })))
        .mount(&server)
        .await;

    let provider = fandom::Provider::new(client(), Some(&server.uri()), Duration::ZERO);
    let entries = provider.collect("Hades").await.expect("Fandom collection should succeed");

    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].url(), "https://hades.fandom.com/wiki/Hades");
    assert_eq!(entries[0].attribute(SECTION_TYPE), Some("abstract"));
    assert!((entries[0].reliability_score() - 7.0).abs() < f64::EPSILON);

    assert_eq!(entries[1].url(), "https://hades.fandom.com/wiki/Hades#game_play");
    assert_eq!(entries[1].attribute(SECTION_TYPE), Some("game play"));
    assert!((entries[1].reliability_score() - 8.0).abs() < f64::EPSILON);

    assert!(entries.iter().all(|e| e.content_type() == ContentType::Fandom));
}

#[tokio::test]
async fn test_fandom_rate_limit_yields_no_entries() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/search", 429, json!({})).await;

    let provider = fandom::Provider::new(client(), Some(&server.uri()), Duration::ZERO);
    let entries = provider.collect("Hades").await.expect("A rate limit should not be an error");
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_fandom_spaces_out_consecutive_requests() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/search", 200, json!({ "success": true, "data": { "pages": [] } })).await;

    let provider = fandom::Provider::new(client(), Some(&server.uri()), Duration::from_millis(200));

    let start = Instant::now();
    for _ in 0..4 {
        let entries = provider.collect("Hades").await.expect("Fandom collection should succeed");
        assert!(entries.is_empty());
    }
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(600), "four requests took only {elapsed:?}");
    assert_eq!(server.received_requests().await.map_or(0, |requests| requests.len()), 4);
}

#[tokio::test]
async fn test_fandom_error_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "Unknown Game"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": { "code": "not_found", "message": "No results" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "Busy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": { "code": "rate_limit_exceeded", "message": "Slow down" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "Broken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": { "code": "internal", "message": "Oops" }
        })))
        .mount(&server)
        .await;

    let provider = fandom::Provider::new(client(), Some(&server.uri()), Duration::ZERO);

    assert!(provider.collect("Unknown Game").await.expect("not_found is not an error").is_empty());
    assert!(provider.collect("Busy").await.expect("rate_limit_exceeded is not an error").is_empty());

    let err = provider.collect("Broken").await.expect_err("other error codes should fail");
    assert!(err.to_string().contains("Oops"));
}

#[tokio::test]
async fn test_fandom_malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let provider = fandom::Provider::new(client(), Some(&server.uri()), Duration::ZERO);
    assert!(provider.collect("Hades").await.is_err());
}

// IGN

#[tokio::test]
async fn test_ign_articles_become_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/articles"))
        .and(query_param("q", "Hades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "articles": [{
                "articleId": "123",
                "metadata": {
                    "title": "Hades Review",
                    "slug": "hades-review",
                    "publishDate": "2024-01-15T10:00:00Z",
                    "author": "John Doe"
                },
                "content": { "body": "Hades is a masterpiece.", "snippets": ["masterpiece"] },
                "url": "https://www.ign.com/articles/hades-review"
            }],
            "pagination": { "total": 1, "currentPage": 1, "totalPages": 1 }
        })))
        .mount(&server)
        .await;

    let provider = ign::Provider::new(client(), Some(&server.uri()), Duration::ZERO);
    let entries = provider.collect("Hades").await.expect("IGN collection should succeed");

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.content(), "Hades is a masterpiece.");
    assert_eq!(entry.url(), "https://www.ign.com/articles/hades-review");
    assert_eq!(entry.content_type(), ContentType::Ign);
    assert!((entry.reliability_score() - ign::ARTICLE_SCORE).abs() < f64::EPSILON);
    assert_eq!(entry.attribute(AUTHOR), Some("John Doe"));
    assert_eq!(entry.attribute(PUBLICATION_DATE), Some("2024-01-15T10:00:00Z"));
}

#[tokio::test]
async fn test_ign_empty_result() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v1/articles",
        200,
        json!({ "articles": [], "pagination": { "total": 0, "currentPage": 1, "totalPages": 0 } }),
    )
    .await;

    let provider = ign::Provider::new(client(), Some(&server.uri()), Duration::ZERO);
    assert!(provider.collect("Nothing").await.expect("An empty result is valid").is_empty());
}

#[tokio::test]
async fn test_ign_failures_are_errors() {
    let server = MockServer::start().await;
    mount_json(&server, "/v1/articles", 500, json!({ "error": { "message": "backend down" } })).await;

    let provider = ign::Provider::new(client(), Some(&server.uri()), Duration::ZERO);
    let err = provider.collect("Hades").await.expect_err("HTTP 500 should fail");
    assert!(err.to_string().contains("backend down"));
    assert!(!is_rate_limit_error(&err));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/articles"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let provider = ign::Provider::new(client(), Some(&server.uri()), Duration::ZERO);
    let err = provider.collect("Hades").await.expect_err("HTTP 429 should fail");
    assert!(is_rate_limit_error(&err));
    assert!(err.to_string().contains("retry after 30s"));
}

// GameSpot

#[tokio::test]
async fn test_gamespot_keeps_reviews_and_previews() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .and(query_param("q", "Hades"))
        .and(query_param("api_key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "id": 1,
                    "title": "Hades Review",
                    "deck": "Hell is great",
                    "body": "Review body.",
                    "authors": "Jane Smith",
                    "publish_date": "2024-01-15 10:00:00",
                    "site_detail_url": "https://www.gamespot.com/reviews/hades/",
                    "categories": { "name": "Reviews" }
                },
                {
                    "id": 2,
                    "title": "Hades Preview",
                    "deck": "",
                    "body": "Preview body.",
                    "authors": null,
                    "publish_date": null,
                    "site_detail_url": "https://www.gamespot.com/previews/hades/",
                    "categories": { "name": "Previews" }
                },
                {
                    "id": 3,
                    "title": "Hades Sale",
                    "deck": "",
                    "body": "Deal body.",
                    "authors": "Bot",
                    "publish_date": "2024-01-16 10:00:00",
                    "site_detail_url": "https://www.gamespot.com/deals/hades/",
                    "categories": { "name": "Deals" }
                }
            ],
            "limit": 10,
            "offset": 0,
            "total": 3
        })))
        .mount(&server)
        .await;

    let provider = gamespot::Provider::new(client(), Some(&server.uri()), Some("secret"), Duration::ZERO);
    let entries = provider.collect("Hades").await.expect("GameSpot collection should succeed");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].attribute(SECTION_TYPE), Some("Reviews"));
    assert_eq!(entries[0].attribute(AUTHOR), Some("Jane Smith"));
    assert_eq!(entries[1].attribute(SECTION_TYPE), Some("Previews"));
    assert_eq!(entries[1].attribute(AUTHOR), None);
    assert!(entries.iter().all(|e| (e.reliability_score() - gamespot::ARTICLE_SCORE).abs() < f64::EPSILON));
}

#[tokio::test]
async fn test_gamespot_rate_limit_is_an_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/articles/", 429, json!({})).await;

    let provider = gamespot::Provider::new(client(), Some(&server.uri()), None, Duration::ZERO);
    let err = provider.collect("Hades").await.expect_err("HTTP 429 should fail");
    assert!(is_rate_limit_error(&err));
    assert!(err.to_string().contains("API rate limit exceeded"));
}

// YouTube

fn youtube_provider(server: &MockServer, channels: &[&str]) -> youtube::Provider {
    let mut options = youtube::Options::new("test-key");
    options.base_url = Some(server.uri());
    options.transcript_url = Some(format!("{}/transcripts", server.uri()));
    options.channels = channels.iter().map(ToString::to_string).collect();
    options.min_interval = Duration::ZERO;
    youtube::Provider::new(client(), options).expect("valid YouTube options")
}

fn video(id: &str, channel: &str, duration: &str) -> serde_json::Value {
    json!({
        "id": { "videoId": id },
        "snippet": {
            "publishedAt": "2024-01-01T00:00:00Z",
            "channelTitle": channel,
            "title": format!("Video {id}")
        },
        "contentDetails": { "duration": duration }
    })
}

#[tokio::test]
async fn test_youtube_filters_and_joins_transcripts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Hades"))
        .and(query_param("key", "test-key"))
        .and(query_param("type", "video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                video("good", "GameReviewer", "PT15M30S"),
                video("short", "GameReviewer", "PT5M"),
                video("wrongchannel", "CookingShow", "PT15M"),
                video("notranscript", "GameReviewer", "PT20M"),
                video("emptytranscript", "GameReviewer", "PT20M")
            ]
        })))
        .mount(&server)
        .await;

    mount_json(
        &server,
        "/transcripts/good",
        200,
        json!({
            "videoId": "good",
            "transcript": [
                { "text": "second part.", "start": 5.0, "duration": 2.0 },
                { "text": " This is the first part", "start": 0.0, "duration": 5.0 }
            ]
        }),
    )
    .await;
    mount_json(&server, "/transcripts/notranscript", 404, json!({})).await;
    mount_json(&server, "/transcripts/emptytranscript", 200, json!({ "videoId": "emptytranscript", "transcript": [] })).await;

    let provider = youtube_provider(&server, &["GameReviewer"]);
    let entries = provider.collect("Hades").await.expect("YouTube collection should succeed");

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.content(), "This is the first part second part.");
    assert_eq!(entry.url(), "https://www.youtube.com/watch?v=good");
    assert_eq!(entry.content_type(), ContentType::Youtube);
    assert_eq!(entry.attribute(AUTHOR), Some("GameReviewer"));
    assert_eq!(entry.attribute(PUBLICATION_DATE), Some("2024-01-01T00:00:00Z"));
    assert_eq!(entry.attribute(SECTION_TYPE), Some("VIDEO_DURATION_930"));
    assert!((0.0..=10.0).contains(&entry.reliability_score()));
}

#[tokio::test]
async fn test_youtube_api_error_carries_upstream_message() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/search",
        403,
        json!({ "error": { "code": 403, "message": "The request cannot be completed because you have exceeded your quota." } }),
    )
    .await;

    let provider = youtube_provider(&server, &[]);
    let err = provider.collect("Hades").await.expect_err("A quota error should fail");
    assert!(err.to_string().contains("exceeded your quota"));
}

#[tokio::test]
async fn test_youtube_error_body_with_success_status() {
    let server = MockServer::start().await;
    mount_json(&server, "/search", 200, json!({ "error": { "code": 400, "message": "API key not valid" } })).await;

    let provider = youtube_provider(&server, &[]);
    let err = provider.collect("Hades").await.expect_err("An error body should fail");
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn test_youtube_rate_limit_is_an_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/search", 429, json!({})).await;

    let provider = youtube_provider(&server, &[]);
    let err = provider.collect("Hades").await.expect_err("HTTP 429 should fail");
    assert!(is_rate_limit_error(&err));
    assert!(err.to_string().contains("YouTube"));
}
