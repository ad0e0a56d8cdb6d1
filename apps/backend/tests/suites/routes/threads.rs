use actix_web::http::StatusCode;
use serde_json::json;

use super::{get, post_json, seed_game};
use crate::support::app_builder::create_test_app;
use crate::support::build_test_state;

#[actix_web::test]
async fn threads_are_revealed_with_author_names() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let app = create_test_app(test_db.state.clone()).await;
    let (game, players) = seed_game(&app, &["X", "Y", "Z"]).await;
    let (x, y, z) = (players[0], players[1], players[2]);

    let a1 = post_json(
        &app,
        &format!("/api/games/{game}/players/{x}/rounds/1"),
        json!({ "text": "a cat eating" }),
    )
    .await
    .json();
    let a2 = post_json(
        &app,
        &format!("/api/games/{game}/players/{y}/rounds/2"),
        json!({ "image_ref": "images/cat.png", "in_reply_to": a1["id"] }),
    )
    .await
    .json();
    let resp = post_json(
        &app,
        &format!("/api/games/{game}/players/{z}/rounds/3"),
        json!({ "text": "a cat at dinner", "in_reply_to": a2["id"] }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);

    let resp = get(&app, &format!("/api/games/{game}/threads/{x}")).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json(),
        json!([
            { "player_name": "X", "round": 1, "payload": { "kind": "text", "value": "a cat eating" } },
            { "player_name": "Y", "round": 2, "payload": { "kind": "image", "value": "images/cat.png" } },
            { "player_name": "Z", "round": 3, "payload": { "kind": "text", "value": "a cat at dinner" } },
        ])
    );

    let resp = get(&app, &format!("/api/games/{game}/threads")).await;
    assert_eq!(resp.status, StatusCode::OK);
    let threads = resp.json();
    let threads = threads.as_array().expect("array of threads");
    assert_eq!(threads.len(), 3);
    assert_eq!(threads[0]["player_name"], "X");
    assert_eq!(threads[0]["entries"].as_array().map(Vec::len), Some(3));
    assert_eq!(threads[1]["entries"], json!([]));
    Ok(())
}
