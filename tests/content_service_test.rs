//! Integration tests for the content service against a mock CMS.

use std::sync::Arc;

use maple_epoch_news::config::Config;
use maple_epoch_news::content::{fallback_posts, ContentService, Section, TECH_ENERGY_STORY};
use maple_epoch_news::wordpress::{FetchCache, Listing, WordPressClient};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API: &str = "/wp-json/wp/v2";

fn create_service(site_url: &str) -> ContentService {
    let config = Config::for_testing().with_site_url(site_url);
    let cache = Arc::new(FetchCache::new(config.cache_ttl));
    let client = WordPressClient::new(&config, cache).expect("Failed to build client");
    ContentService::with_rng(client, StdRng::seed_from_u64(7))
}

fn post_json(id: u64, title: &str, category: &str) -> serde_json::Value {
    json!({
        "id": id,
        "date": "2024-05-01T09:30:00",
        "slug": format!("post-{id}"),
        "title": {"rendered": title},
        "content": {"rendered": "<p>Some words for the body.</p>"},
        "excerpt": {"rendered": "<p>Summary</p>"},
        "_embedded": {
            "author": [{"id": 2, "name": "Sarah Mitchell", "slug": "sarah"}],
            "wp:term": [
                [{"id": 7, "name": category, "slug": category.to_lowercase(), "taxonomy": "category"}],
                []
            ]
        }
    })
}

async fn mount_categories(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("{API}/categories")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "name": "Politics", "slug": "politics"},
            {"id": 7, "name": "Business", "slug": "business"}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_category_slug_resolves_to_id() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts")))
        .and(query_param("categories", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_json(10, "Markets rally", "Business"),
            post_json(11, "Rates hold", "Business")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let service = create_service(&server.uri());
    let posts = service.category_posts("business", 1).await.into_vec();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 10);
    assert_eq!(posts[0].category, "Business");
    assert_eq!(posts[0].author, "Sarah Mitchell");
}

#[tokio::test]
async fn test_unknown_category_is_empty() {
    let server = MockServer::start().await;
    mount_categories(&server).await;

    let service = create_service(&server.uri());
    let listing = service.category_posts("nonexistent-slug", 3).await;

    assert!(matches!(listing, Listing::Empty));
}

#[tokio::test]
async fn test_editors_picks_fall_through_to_recent() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts")))
        .and(query_param("sticky", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_json(20, "Recent one", "Politics"),
            post_json(21, "Recent two", "Business")
        ])))
        .mount(&server)
        .await;

    let service = create_service(&server.uri());
    let picks = service.editors_picks(3).await.into_vec();

    assert_eq!(picks.iter().map(|p| p.id).collect::<Vec<_>>(), vec![20, 21]);
    assert!(picks.iter().all(|p| p.featured));
}

#[tokio::test]
async fn test_editors_picks_skip_empty_picks_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/categories")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "name": "Editors Picks", "slug": "editors-picks"},
            {"id": 6, "name": "Editor Picks", "slug": "editor-picks"}
        ])))
        .mount(&server)
        .await;
    for category in ["5", "6"] {
        Mock::given(method("GET"))
            .and(path(format!("{API}/posts")))
            .and(query_param("categories", category))
            .and(query_param("per_page", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts")))
        .and(query_param("sticky", "true"))
        .and(query_param("per_page", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts")))
        .and(query_param("per_page", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([post_json(40, "Latest", "Politics")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = create_service(&server.uri());
    let picks = service.editors_picks(3).await.into_vec();

    assert_eq!(
        picks.iter().map(|p| (p.id, p.featured)).collect::<Vec<_>>(),
        vec![(40, true)]
    );
}

#[tokio::test]
async fn test_editors_picks_prefers_picks_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/categories")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 12, "name": "Editor Picks", "slug": "editor-picks"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts")))
        .and(query_param("categories", "12"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([post_json(30, "Picked", "Editor Picks")])),
        )
        .mount(&server)
        .await;

    let service = create_service(&server.uri());
    let picks = service.editors_picks(3).await.into_vec();

    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].id, 30);
    assert!(picks[0].featured);
}

#[tokio::test]
async fn test_unreachable_cms_uses_fallback_posts() {
    // Nothing listens on the discard port.
    let service = create_service("http://127.0.0.1:9");
    let posts = service.section_or_fallback(Section::DailyMaple, 3).await;

    let expected: Vec<u64> = fallback_posts().iter().take(3).map(|p| p.id).collect();
    assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), expected);

    let picks = service.section_or_fallback(Section::EditorsPicks, 2).await;
    assert_eq!(picks.len(), 2);
    assert!(picks.iter().all(|p| p.featured));
}

#[tokio::test]
async fn test_article_falls_back_then_generates_placeholder() {
    let server = MockServer::start().await;
    let service = create_service(&server.uri());

    let known = service.article(2).await;
    assert_eq!(&known, &fallback_posts()[1]);

    let generated = service.article(99).await;
    assert_eq!(generated.id, 99);
    assert!(generated.title.starts_with("Article 99: Updates in "));
}

#[tokio::test]
async fn test_article_from_cms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts/42")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(post_json(42, "Budget &amp; you", "Politics")),
        )
        .mount(&server)
        .await;

    let service = create_service(&server.uri());
    let post = service.article(42).await;

    assert_eq!(post.title, "Budget & you");
    assert_eq!(post.category, "Politics");
    assert_eq!(post.read_time, "1 min read");
}

#[tokio::test]
async fn test_unknown_slug_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts")))
        .and(query_param("slug", "no-such-story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let service = create_service(&server.uri());
    assert!(service.article_by_slug("no-such-story").await.is_none());
}

#[tokio::test]
async fn test_featured_story_matches_title() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts")))
        .and(query_param("categories", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_json(50, "Quarterly earnings", "Business"),
            post_json(51, "Tech and energy giants bet on Pennsylvania", "Business")
        ])))
        .mount(&server)
        .await;

    let service = create_service(&server.uri());
    let story = service.featured_story(&TECH_ENERGY_STORY).await.unwrap();

    assert_eq!(story.id, 51);
}

#[tokio::test]
async fn test_hero_uses_fallback_without_recent_posts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/posts")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let service = create_service(&server.uri());
    let hero = service.hero().await.unwrap();

    assert_eq!(hero.main.category, "Politics");
    assert_eq!(hero.side.len(), 3);
}
