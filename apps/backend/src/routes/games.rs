//! Game, turn and thread endpoints under `/api/games`.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::domain::models::AnswerId;
use crate::domain::payload::AnswerPayload;
use crate::domain::thread::name_lookup;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{GamePath, PlayerPath, TurnPath, ValidatedJson};
use crate::services::{
    ChainLinker, GameService, RecordAnswer, RingTopology, ThreadReconstructor, TurnStateResolver,
};
use crate::state::app_state::AppState;
use crate::store::SeaStore;

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

/// Exactly one of `text` or `image_ref` must be set; which one is legal
/// depends on the round.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub in_reply_to: Option<AnswerId>,
}

impl SubmitAnswerRequest {
    fn payload(self) -> Result<(AnswerPayload, Option<AnswerId>), AppError> {
        let payload = match (self.text, self.image_ref) {
            (Some(text), None) => AnswerPayload::text(text),
            (None, Some(reference)) => AnswerPayload::image(reference),
            _ => {
                return Err(AppError::invalid(
                    ErrorCode::InvalidPayload,
                    "Provide exactly one of 'text' or 'image_ref'",
                ))
            }
        };
        Ok((payload, self.in_reply_to))
    }
}

async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NameRequest>,
) -> Result<HttpResponse, AppError> {
    let name = body.into_inner().name;
    let game = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            Ok(GameService::new()
                .create_game(&SeaStore::new(txn), &name)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(game))
}

async fn get_game(
    app_state: web::Data<AppState>,
    path: GamePath,
) -> Result<HttpResponse, AppError> {
    let GamePath(game) = path;
    let overview = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(GameService::new().overview(&SeaStore::new(txn), game).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(overview))
}

async fn join_game(
    app_state: web::Data<AppState>,
    path: GamePath,
    body: ValidatedJson<NameRequest>,
) -> Result<HttpResponse, AppError> {
    let GamePath(game) = path;
    let name = body.into_inner().name;
    let player = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            Ok(GameService::new()
                .join_game(&SeaStore::new(txn), game, &name)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(player))
}

async fn get_neighbors(
    app_state: web::Data<AppState>,
    path: PlayerPath,
) -> Result<HttpResponse, AppError> {
    let neighbors = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            Ok(RingTopology::new()
                .neighbors(&SeaStore::new(txn), path.game, path.player)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "predecessor": neighbors.predecessor,
        "successor": neighbors.successor,
    })))
}

async fn get_turn(
    app_state: web::Data<AppState>,
    path: TurnPath,
) -> Result<HttpResponse, AppError> {
    let state = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            Ok(TurnStateResolver::new()
                .resolve(&SeaStore::new(txn), path.game, path.player, path.round)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(state))
}

async fn submit_answer(
    app_state: web::Data<AppState>,
    path: TurnPath,
    body: ValidatedJson<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let (payload, in_reply_to) = body.into_inner().payload()?;
    let request = RecordAnswer {
        game: path.game,
        player: path.player,
        round: path.round,
        payload,
        in_reply_to,
    };
    let answer = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            Ok(ChainLinker::new()
                .record_answer(&SeaStore::new(txn), request)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(answer))
}

async fn get_thread(
    app_state: web::Data<AppState>,
    path: PlayerPath,
) -> Result<HttpResponse, AppError> {
    let entries = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let store = SeaStore::new(txn);
            let players = RingTopology::new().members(&store, path.game).await?;
            let names = name_lookup(&players);
            Ok(ThreadReconstructor::new()
                .reconstruct_labeled(&store, path.game, path.player, &names)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(entries))
}

async fn get_all_threads(
    app_state: web::Data<AppState>,
    path: GamePath,
) -> Result<HttpResponse, AppError> {
    let GamePath(game) = path;
    let threads = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            Ok(ThreadReconstructor::new()
                .reconstruct_all(&SeaStore::new(txn), game)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(threads))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game))
        .route("/{game_id}", web::get().to(get_game))
        .route("/{game_id}/players", web::post().to(join_game))
        .route(
            "/{game_id}/players/{player_id}/neighbors",
            web::get().to(get_neighbors),
        )
        .route(
            "/{game_id}/players/{player_id}/rounds/{round}",
            web::get().to(get_turn),
        )
        .route(
            "/{game_id}/players/{player_id}/rounds/{round}",
            web::post().to(submit_answer),
        )
        .route("/{game_id}/threads", web::get().to(get_all_threads))
        .route("/{game_id}/threads/{player_id}", web::get().to(get_thread));
}
