use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::batch;
use crate::models::{ErrorBody, WalkRequest};

use super::AppState;

/// Обход одного устройства.
///
/// В мягком режиме ошибка обхода возвращается как объект в теле ответа,
/// в строгом — кодом 5xx. Невалидный запрос — всегда 400.
pub async fn handle_walk(
    State(state): State<AppState>,
    Json(request): Json<WalkRequest>,
) -> Response {
    let outcome = batch::run_single(request, &state.config).await;

    if let Some(error) = outcome.error() {
        if state.config.strict || error.kind == "validation" {
            return error_response(error);
        }
    }

    (StatusCode::OK, Json(outcome)).into_response()
}

/// Параллельный обход пакета устройств.
///
/// Всегда по одному итогу на запрос, в порядке входного списка; сбой
/// одного устройства не срывает остальные. Пустой список — 400 до
/// старта обходов. Строгий режим возвращает первую (по входному
/// порядку) ошибку кодом 5xx.
pub async fn handle_walk_batch(
    State(state): State<AppState>,
    Json(requests): Json<Vec<WalkRequest>>,
) -> Response {
    let outcomes = match batch::run_batch(requests, Arc::clone(&state.config)).await {
        Ok(outcomes) => outcomes,
        Err(e) => return error_response(&ErrorBody::from_error(&e)),
    };

    if state.config.strict {
        if let Some(error) = outcomes.iter().find_map(|o| o.error()) {
            return error_response(error);
        }
    }

    (StatusCode::OK, Json(outcomes)).into_response()
}

fn error_status(kind: &str) -> StatusCode {
    match kind {
        "validation" => StatusCode::BAD_REQUEST,
        "transport" => StatusCode::GATEWAY_TIMEOUT,
        "protocol" | "decode" => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &ErrorBody) -> Response {
    (
        error_status(error.kind),
        Json(serde_json::json!({ "error": error })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_map_to_http_statuses() {
        assert_eq!(error_status("validation"), StatusCode::BAD_REQUEST);
        assert_eq!(error_status("transport"), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(error_status("protocol"), StatusCode::BAD_GATEWAY);
        assert_eq!(error_status("decode"), StatusCode::BAD_GATEWAY);
        assert_eq!(error_status("unexpected"), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
