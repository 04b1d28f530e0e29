//! Integration tests for the mancala-server API

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use mancala_core::GameConfig;
use mancala_server::{create_router, ServerState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> (axum::Router, Arc<ServerState>) {
    let state = Arc::new(ServerState::new(GameConfig::default()));
    (create_router(state.clone()), state)
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_status_endpoint() {
    let (app, _) = test_app();

    let response = get(&app, "/api/status").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["boards"], 0);
}

#[tokio::test]
async fn test_board_page_creates_a_fresh_board() {
    let (app, state) = test_app();

    let response = get(&app, "/board").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("Mancala, board 1"));
    assert!(page.contains("Next to move: TOP"));
    assert_eq!(state.board_count(), 1);
}

#[tokio::test]
async fn test_apply_redirects_and_persists_the_move() {
    let (app, state) = test_app();
    let board = state.create_board();

    let response = get(
        &app,
        &format!("/apply?board_id={}&player=top&house=6", board.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()["location"],
        format!("/board?board_id={}&player=TOP", board.id)
    );

    let response = get(&app, &format!("/api/board/{}", board.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["nextPlayer"], "BOTTOM");
    assert_eq!(json["topHalf"], serde_json::json!([6, 6, 6, 6, 6, 0, 1]));
    assert_eq!(json["bottomHalf"], serde_json::json!([7, 7, 7, 7, 7, 6, 0]));
}

#[tokio::test]
async fn test_unknown_board_is_404() {
    let (app, _) = test_app();

    let response = get(&app, "/api/board/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/apply?board_id=999&player=top&house=1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/board?board_id=999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unrecognized_player_is_400() {
    let (app, _) = test_app();

    let response = get(&app, "/board?player=observer").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_turn_is_400_and_board_unchanged() {
    let (app, state) = test_app();
    let board = state.create_board();

    let response = get(
        &app,
        &format!("/apply?board_id={}&player=bottom&house=1", board.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.board(board.id).unwrap(), board);
}

#[tokio::test]
async fn test_empty_house_is_400() {
    let (app, state) = test_app();
    let board = state.create_board();

    // Sowing house 1 lands in the store, keeping TOP's turn.
    let response = get(
        &app,
        &format!("/apply?board_id={}&player=top&house=1", board.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // TOP still to move; house 1 is now empty.
    let response = get(
        &app,
        &format!("/apply?board_id={}&player=top&house=1", board.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
