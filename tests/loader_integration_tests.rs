use std::time::Duration;

use crossword::core::grid::{Direction, MalformedPuzzle};
use crossword::core::puzzle::PuzzleDocument;
use crossword::loader::{HttpLoader, LoadError, PuzzleLoader, SAMPLE_PUZZLE, load_puzzle};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Mounts a GET /puzzle responder and returns a loader pointed at it.
async fn loader_for(mock_server: &MockServer, response: ResponseTemplate) -> HttpLoader {
    Mock::given(method("GET"))
        .and(path("/puzzle"))
        .respond_with(response)
        .mount(mock_server)
        .await;

    HttpLoader::new(
        format!("{}/puzzle", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap()
}

// ============================================================================
// HttpLoader Tests
// ============================================================================

#[tokio::test]
async fn test_http_loader_successful_grid_document() {
    let mock_server = MockServer::start().await;
    let loader = loader_for(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(SAMPLE_PUZZLE),
    )
    .await;

    let model = load_puzzle(&loader).await.unwrap();

    assert_eq!(model.title(), Some("Five by Five"));
    assert_eq!(model.size(), 5);
    assert_eq!(model.word_count(), 10);
    // Down clues bind in column-major order: 4 Down comes first.
    assert_eq!(model.words(Direction::Down)[0].number, 4);
}

#[tokio::test]
async fn test_http_loader_word_list_document() {
    let mock_server = MockServer::start().await;
    // O N
    // N O
    let body = r#"{
        "size": 2,
        "words": [
            {"word": "ON", "clue": "Operating", "direction": "across", "startRow": 0, "startCol": 0},
            {"word": "NO", "clue": "Refusal", "direction": "across", "startRow": 1, "startCol": 0},
            {"word": "ON", "clue": "Atop", "direction": "down", "startRow": 0, "startCol": 0},
            {"word": "NO", "clue": "Not any", "direction": "down", "startRow": 0, "startCol": 1}
        ]
    }"#;
    let loader = loader_for(&mock_server, ResponseTemplate::new(200).set_body_string(body)).await;

    let document = loader.fetch().await.unwrap();
    assert!(matches!(document, PuzzleDocument::WordList(_)));

    let model = load_puzzle(&loader).await.unwrap();
    let one_down = model.word_by_number(Direction::Down, 1).unwrap();
    assert_eq!(one_down.clue, "Atop");
    assert_eq!(one_down.answer, "ON");
    assert_eq!(model.word_by_number(Direction::Down, 2).unwrap().clue, "Not any");
    assert_eq!(model.word_by_number(Direction::Across, 3).unwrap().answer, "NO");
}

#[tokio::test]
async fn test_http_loader_api_error() {
    let mock_server = MockServer::start().await;
    let loader = loader_for(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let result = load_puzzle(&loader).await;

    match result {
        Err(LoadError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected Api error, got {:?}", other.map(|m| m.size())),
    }
}

#[tokio::test]
async fn test_http_loader_not_found() {
    let mock_server = MockServer::start().await;
    // Nothing mounted: wiremock answers 404.
    let loader = HttpLoader::new(
        format!("{}/missing", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    let err = loader.fetch().await.unwrap_err();
    assert!(matches!(err, LoadError::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_http_loader_invalid_json() {
    let mock_server = MockServer::start().await;
    let loader = loader_for(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("<html>not a puzzle</html>"),
    )
    .await;

    let err = load_puzzle(&loader).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn test_http_loader_malformed_puzzle() {
    let mock_server = MockServer::start().await;
    // Four across clues for five across starts.
    let mut source: serde_json::Value = serde_json::from_str(SAMPLE_PUZZLE).unwrap();
    source["clues"]["across"].as_array_mut().unwrap().pop();
    let loader = loader_for(&mock_server, ResponseTemplate::new(200).set_body_json(source)).await;

    let err = load_puzzle(&loader).await.unwrap_err();
    assert!(matches!(
        err,
        LoadError::Malformed(MalformedPuzzle::ClueCount {
            direction: Direction::Across,
            clues: 4,
            starts: 5,
        })
    ));
}

#[tokio::test]
async fn test_http_loader_timeout_is_network_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SAMPLE_PUZZLE)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let loader = HttpLoader::new(
        format!("{}/slow", mock_server.uri()),
        Duration::from_millis(100),
    )
    .unwrap();

    let err = loader.fetch().await.unwrap_err();
    assert!(matches!(err, LoadError::Network(_)));
}

#[tokio::test]
async fn test_http_loader_connection_refused() {
    // Port 1 on localhost is never listening in test environments.
    let loader = HttpLoader::new("http://127.0.0.1:1/puzzle".to_string(), Duration::from_secs(2))
        .unwrap();

    let err = loader.fetch().await.unwrap_err();
    assert!(matches!(err, LoadError::Network(_)));
    assert!(err.to_string().starts_with("network error"));
}
