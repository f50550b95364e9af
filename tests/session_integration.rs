use serde_json::json;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fabula::api::StoryApiClient;
use fabula::config::ApiConfig;
use fabula::session::{GenerateOutcome, Phase, StorySession};

fn session_for(server: &MockServer) -> StorySession<StoryApiClient> {
    let client = StoryApiClient::new(&ApiConfig {
        base_url: server.uri(),
    })
    .unwrap();
    StorySession::new(client)
}

fn story_json(id: i64, prompt: &str) -> serde_json::Value {
    json!({
        "id": id,
        "prompt": prompt,
        "story": format!("A story about {}.", prompt),
        "created_at": "2026-08-25T10:00:00"
    })
}

/// Successful generation surfaces the story as the current result and
/// prepends it to the collection.
#[tokio::test]
async fn test_generate_success_updates_result_and_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/story"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([story_json(1, "older story")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(story_json(7, "dragons")))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    assert!(session.refresh().await);
    assert_eq!(session.state.stories.len(), 1);

    let outcome = session.generate("dragons").await;
    assert!(matches!(outcome, GenerateOutcome::Generated(_)));

    assert_eq!(session.state.latest.as_ref().unwrap().prompt, "dragons");
    assert_eq!(session.state.stories.len(), 2);
    assert_eq!(session.state.stories[0].prompt, "dragons");
    assert_eq!(session.state.stories[1].id, 1);
    assert!(session.state.error.is_none());
    assert_eq!(session.state.phase, Phase::Idle);
}

/// A failing generation shows the response body as the banner and leaves
/// the collection untouched.
#[tokio::test]
async fn test_generate_failure_shows_banner_and_keeps_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([story_json(1, "older")])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/story"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.refresh().await;
    let before: Vec<i64> = session.state.stories.iter().map(|s| s.id).collect();

    let outcome = session.generate("dragons").await;
    assert_eq!(outcome, GenerateOutcome::Failed("boom".to_string()));

    assert_eq!(session.state.error.as_deref(), Some("boom"));
    let after: Vec<i64> = session.state.stories.iter().map(|s| s.id).collect();
    assert_eq!(before, after);
    assert!(session.state.latest.is_none());
    assert_eq!(session.state.phase, Phase::Idle);
}

/// A whitespace-only prompt performs no network call and changes nothing.
#[tokio::test]
async fn test_empty_prompt_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(story_json(7, "dragons")))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let outcome = session.generate("   \t  ").await;

    assert_eq!(outcome, GenerateOutcome::EmptyPrompt);
    assert!(session.state.stories.is_empty());
    assert!(session.state.latest.is_none());
    assert!(session.state.error.is_none());
}

/// Triggering generate while a request is outstanding is a no-op; only
/// one request may be observed.
#[tokio::test]
async fn test_generate_while_submitting_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(story_json(7, "dragons")))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.state.phase = Phase::Submitting;

    let outcome = session.generate("dragons").await;
    assert_eq!(outcome, GenerateOutcome::Busy);
    assert!(session.state.stories.is_empty());
}

/// A successful listing replaces the collection with exactly the entries
/// received, in order.
#[tokio::test]
async fn test_refresh_replaces_collection_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            story_json(9, "c"),
            story_json(5, "b"),
            story_json(2, "a"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    assert!(session.refresh().await);

    let ids: Vec<i64> = session.state.stories.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![9, 5, 2]);
}

/// A failing refresh keeps the prior snapshot and produces no banner.
#[tokio::test]
async fn test_refresh_failure_keeps_prior_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([story_json(1, "kept")])))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/story"))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    assert!(session.refresh().await);
    assert_eq!(session.state.stories.len(), 1);

    assert!(!session.refresh().await);
    assert_eq!(session.state.stories.len(), 1);
    assert_eq!(session.state.stories[0].prompt, "kept");
    assert!(session.state.error.is_none());
}
