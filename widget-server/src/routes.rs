use crate::error::ApiError;
use crate::etag::{format_etag, if_match};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::header::{ETAG, LOCATION};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;
use widget_application::command_handler::CommandHandler;
use widget_application::query_handler::QueryHandler;
use widget_application::{
    AppContext, AppError, CreateWidget, GetWidget, ListWidgets, UpdateWidget, WidgetDto,
    WidgetPayload,
};
use widget_domain::widget::WidgetId;

const COLLECTION_PATH: &str = "/rest/widgets";
const RESOURCE_PATH: &str = "/rest/widget";
const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(COLLECTION_PATH, get(list_widgets))
        .route(RESOURCE_PATH, post(create_widget))
        .route("/rest/widget/{id}", get(get_widget).put(update_widget))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check
async fn health() -> &'static str {
    "ok"
}

fn resource_location(id: WidgetId) -> String {
    format!("{RESOURCE_PATH}/{id}")
}

/// 沿用调用方的 `x-request-id`，否则生成新的关联ID
fn context(headers: &HeaderMap) -> AppContext {
    let correlation_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    AppContext::builder().correlation_id(correlation_id).build()
}

/// 单个资源的响应：`Location` + `ETag` + JSON 体
fn widget_response(status: StatusCode, dto: WidgetDto) -> Response {
    (
        status,
        [
            (LOCATION, resource_location(dto.id)),
            (ETAG, format_etag(dto.version)),
        ],
        Json(dto),
    )
        .into_response()
}

async fn list_widgets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let widgets = state
        .handlers
        .list
        .handle(&context(&headers), ListWidgets)
        .await?;

    Ok((
        StatusCode::OK,
        [(LOCATION, COLLECTION_PATH)],
        Json(widgets),
    )
        .into_response())
}

async fn get_widget(
    State(state): State<AppState>,
    Path(id): Path<WidgetId>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let found = state
        .handlers
        .get
        .handle(&context(&headers), GetWidget { id })
        .await?;

    Ok(match found {
        Some(dto) => widget_response(StatusCode::OK, dto),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

async fn create_widget(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<WidgetPayload>,
) -> Result<Response, ApiError> {
    let cmd = CreateWidget {
        name: payload.name,
        description: payload.description,
    };
    let created = state
        .handlers
        .create
        .handle(&context(&headers), cmd)
        .await?;

    Ok(widget_response(StatusCode::CREATED, created))
}

async fn update_widget(
    State(state): State<AppState>,
    Path(id): Path<WidgetId>,
    headers: HeaderMap,
    Json(payload): Json<WidgetPayload>,
) -> Result<Response, ApiError> {
    let ctx = context(&headers);
    let precondition = match if_match(&headers) {
        Ok(precondition) => precondition,
        // 资源不存在时无论 If-Match 取值都返回 404
        Err(err) => {
            let found = state.handlers.get.handle(&ctx, GetWidget { id }).await?;
            return Err(match found {
                Some(_) => err,
                None => AppError::NotFound(format!("widget {id}")).into(),
            });
        }
    };

    let cmd = UpdateWidget {
        id,
        name: payload.name,
        description: payload.description,
        precondition,
    };
    let updated = state.handlers.update.handle(&ctx, cmd).await?;

    Ok(widget_response(StatusCode::OK, updated))
}
