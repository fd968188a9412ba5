use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::RawPathParamsRejection, FromRequestParts, RawPathParams, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
};

use crate::{core::GameData, error::ApiError, state::AppState};

/// Game identifier taken from the `id` path segment
///
/// The value is percent-decoded and otherwise used verbatim. A segment that
/// does not decode to UTF-8 is kept in its raw, still-encoded form. Routes
/// without an `id` capture (`/game/`) yield the empty identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for GameId
where
    S: Send + Sync,
{
    type Rejection = RawPathParamsRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match RawPathParams::from_request_parts(parts, state).await {
            Ok(params) => Ok(GameId(
                params
                    .iter()
                    .find(|(key, _)| *key == "id")
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_default(),
            )),
            Err(RawPathParamsRejection::MissingPathParams(_)) => Ok(GameId(String::new())),
            Err(RawPathParamsRejection::InvalidUtf8InPathParam(_)) => Ok(GameId(
                parts
                    .uri
                    .path()
                    .rsplit('/')
                    .next()
                    .unwrap_or_default()
                    .to_string(),
            )),
            Err(rejection) => Err(rejection),
        }
    }
}

/// Decode the first JSON value of a request body as GameData
///
/// Anything after the first value is ignored and a bare `null` is an empty
/// update. An empty body is an error.
fn decode_game_data(body: &[u8]) -> Result<GameData, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<GameData>>();

    match values.next() {
        Some(Ok(data)) => Ok(data.unwrap_or_default()),
        Some(Err(err)) => Err(ApiError::InvalidPayload(err)),
        None => Err(ApiError::InvalidPayload(serde_json::Error::io(
            std::io::ErrorKind::UnexpectedEof.into(),
        ))),
    }
}

/// Method router shared by every game path
///
/// GET fetches, PATCH merges, POST creates if absent; anything else is 405.
/// HEAD is routed explicitly since `get` would otherwise answer it.
pub fn game_routes() -> MethodRouter<AppState> {
    get(get_game)
        .head(method_not_allowed)
        .patch(update_game)
        .post(create_game)
        .fallback(method_not_allowed)
}

/// Fetch a game's data
///
/// # Returns
///
/// 200 with the JSON-encoded GameData, or 404 with an empty body
pub async fn get_game(
    State(state): State<AppState>,
    GameId(game_id): GameId,
) -> Result<Response, ApiError> {
    let games = state.games.read().await;
    let game = games.get(&game_id).ok_or(ApiError::GameNotFound)?;

    let body = serde_json::to_vec(game.data()).map_err(ApiError::Encode)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Merge the request body into a game, creating it on first write
///
/// # Returns
///
/// 200 with an empty body, or 400 if the body is not a GameData object
pub async fn update_game(
    State(state): State<AppState>,
    GameId(game_id): GameId,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let update = decode_game_data(&body)?;

    let outcome = state.games.write().await.upsert(&game_id, update);
    tracing::debug!(game_id = %game_id, ?outcome, "game updated");

    Ok(StatusCode::OK)
}

/// Create a game if the id is not taken yet
///
/// An empty body creates a game with null fields. An existing game is left
/// as it is.
///
/// # Returns
///
/// 200 with an empty body, or 400 if a non-empty body is not a GameData object
pub async fn create_game(
    State(state): State<AppState>,
    GameId(game_id): GameId,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let data = if body.iter().all(u8::is_ascii_whitespace) {
        GameData::default()
    } else {
        decode_game_data(&body)?
    };

    if state.games.write().await.create(&game_id, data) {
        tracing::info!(game_id = %game_id, "game created");
    } else {
        tracing::debug!(game_id = %game_id, "game already exists, create ignored");
    }

    Ok(StatusCode::OK)
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
