use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use serde_json::Value;

pub mod threads;

/// Status, headers and raw body of one call.
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }
}

pub async fn send<S>(app: &S, req: Request) -> Reply
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await.to_vec();
    Reply {
        status,
        headers,
        body,
    }
}

pub async fn get<S>(app: &S, uri: &str) -> Reply
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    send(app, test::TestRequest::get().uri(uri).to_request()).await
}

pub async fn post_json<S>(app: &S, uri: &str, body: Value) -> Reply
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    send(
        app,
        test::TestRequest::post().uri(uri).set_json(body).to_request(),
    )
    .await
}

/// Create a game and join `names` over HTTP. Returns the game id and player ids in ring order.
pub async fn seed_game<S>(app: &S, names: &[&str]) -> (i64, Vec<i64>)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let game = post_json(app, "/api/games", serde_json::json!({ "name": "Friday" })).await;
    assert_eq!(game.status, StatusCode::CREATED);
    let game_id = game.json()["id"].as_i64().expect("game id");

    let mut players = Vec::with_capacity(names.len());
    for name in names {
        let player = post_json(
            app,
            &format!("/api/games/{game_id}/players"),
            serde_json::json!({ "name": name }),
        )
        .await;
        assert_eq!(player.status, StatusCode::CREATED);
        players.push(player.json()["id"].as_i64().expect("player id"));
    }
    (game_id, players)
}
