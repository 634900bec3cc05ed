use axum::{
    Router,
    extract::State,
    response::Response,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    Envelope, EnvelopeSchema, IdPath, QueryParams, StatusPolicy, ValidatedJson,
    errors::responses::{BadRequestResponse, BadRequestValidationResponse, OperationFailedResponse},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemIdQuery, ItemInput};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// Envelope messages returned by the item endpoints
pub mod messages {
    pub const CREATE_OK: &str = "Success to create a new item";
    pub const UPDATE_OK: &str = "Success to update item";
    pub const DELETE_OK: &str = "Success to delete item";
    pub const GET_ALL_OK: &str = "Success to get items";
    pub const GET_OK: &str = "Success to get item";
    pub const GET_ALL_FAILED: &str = "Failed to get items";

    use crate::error::ItemError;

    /// Storage failures carry the raw database text after the prefix.
    pub fn create_failed(err: &ItemError) -> String {
        match err {
            ItemError::Storage(reason) | ItemError::Validation(reason) => {
                format!("Failed to create a new item {}", reason)
            }
            other => format!("Failed to create a new item {}", other),
        }
    }

    pub fn update_failed(id: i32) -> String {
        format!("Failed to update item {}", id)
    }

    pub fn delete_failed(id: i32) -> String {
        format!("Failed to delete item : {}", id)
    }

    pub fn get_failed(id: i32) -> String {
        format!("Failed to get item : {}", id)
    }
}

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(create_item, update_item, delete_item, list_items, get_item),
    components(
        schemas(Item, ItemInput, EnvelopeSchema),
        responses(BadRequestResponse, BadRequestValidationResponse, OperationFailedResponse)
    ),
    tags(
        (name = "Items", description = "Item stock management endpoints")
    )
)]
pub struct ApiDoc;

/// Shared handler state
pub struct ItemsState<R: ItemRepository> {
    service: ItemService<R>,
    status_policy: StatusPolicy,
}

impl<R: ItemRepository> ItemsState<R> {
    fn reply<T: Serialize>(&self, envelope: Envelope<T>) -> Response {
        envelope.into_response_with(self.status_policy)
    }

    fn respond<T: Serialize>(
        &self,
        result: ItemResult<T>,
        success: &str,
        failure: impl FnOnce(&ItemError) -> String,
    ) -> Response {
        match result {
            Ok(data) => self.reply(Envelope::ok(success).with_data(data)),
            Err(err) => self.reply(failed::<T>(&err, failure(&err))),
        }
    }
}

fn failed<T>(err: &ItemError, messages: String) -> Envelope<T> {
    tracing::warn!(error = %err, "{}", messages);
    Envelope::failure(err.status(), messages)
}

/// Create the items router; mount it under `/v1/item`
pub fn router<R: ItemRepository + 'static>(
    service: ItemService<R>,
    status_policy: StatusPolicy,
) -> Router {
    let shared_state = Arc::new(ItemsState {
        service,
        status_policy,
    });

    Router::new()
        .route("/create", post(create_item))
        .route("/update/{id_item}", put(update_item))
        .route("/delete/{id_item}", delete(delete_item))
        .route("/get_all", get(list_items))
        .route("/detail", get(get_item))
        .with_state(shared_state)
}

/// Create a new item
///
/// `data` holds the stored item including its assigned `id_item`.
#[utoipa::path(
    post,
    path = "/create",
    tag = "Items",
    request_body = ItemInput,
    responses(
        (status = 200, description = "Item created", body = EnvelopeSchema),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(state): State<Arc<ItemsState<R>>>,
    ValidatedJson(input): ValidatedJson<ItemInput>,
) -> Response {
    let result = state.service.create_item(input).await;
    state.respond(result, messages::CREATE_OK, messages::create_failed)
}

/// Overwrite every field of an item
///
/// An unknown `id_item` is reported as success.
#[utoipa::path(
    put,
    path = "/update/{id_item}",
    tag = "Items",
    params(
        ("id_item" = i32, Path, description = "Item ID")
    ),
    request_body = ItemInput,
    responses(
        (status = 200, description = "Item updated", body = EnvelopeSchema),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(state): State<Arc<ItemsState<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ItemInput>,
) -> Response {
    match state.service.update_item(id, input).await {
        Ok(()) => state.reply(Envelope::<()>::ok(messages::UPDATE_OK)),
        Err(err) => state.reply(failed::<()>(&err, messages::update_failed(id))),
    }
}

/// Delete an item
///
/// Idempotent: deleting an unknown `id_item` is reported as success.
#[utoipa::path(
    delete,
    path = "/delete/{id_item}",
    tag = "Items",
    params(
        ("id_item" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = EnvelopeSchema),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(state): State<Arc<ItemsState<R>>>,
    IdPath(id): IdPath,
) -> Response {
    match state.service.delete_item(id).await {
        Ok(()) => state.reply(Envelope::<()>::ok(messages::DELETE_OK)),
        Err(err) => state.reply(failed::<()>(&err, messages::delete_failed(id))),
    }
}

/// List every item ordered by `id_item`
#[utoipa::path(
    get,
    path = "/get_all",
    tag = "Items",
    responses(
        (status = 200, description = "All items", body = EnvelopeSchema),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn list_items<R: ItemRepository>(State(state): State<Arc<ItemsState<R>>>) -> Response {
    let result = state.service.list_items().await;
    state.respond(result, messages::GET_ALL_OK, |_| {
        messages::GET_ALL_FAILED.to_string()
    })
}

/// Get a single item
///
/// A missing item is reported with status 500.
#[utoipa::path(
    get,
    path = "/detail",
    tag = "Items",
    params(ItemIdQuery),
    responses(
        (status = 200, description = "Item found", body = EnvelopeSchema),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(state): State<Arc<ItemsState<R>>>,
    QueryParams(query): QueryParams<ItemIdQuery>,
) -> Response {
    let id = query.id_item;
    let result = state.service.get_item(id).await;
    state.respond(result, messages::GET_OK, |_| messages::get_failed(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn failing_app() -> Router {
        let mut mock = MockItemRepository::new();
        mock.expect_create()
            .returning(|_| Err(ItemError::Storage("connection reset by peer".to_string())));
        mock.expect_update()
            .returning(|_, _| Err(ItemError::Storage("connection reset by peer".to_string())));
        mock.expect_delete()
            .returning(|_| Err(ItemError::Storage("connection reset by peer".to_string())));

        router(ItemService::new(mock), StatusPolicy::Mirror)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn pen_request(method: &str, uri: &str) -> Request<Body> {
        let body = json!({"nama_item": "Pen", "unit": "pcs", "stok": 10, "harga_satuan": 1.5});
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_storage_failures_render_operation_envelopes() {
        let (status, body) = send(failing_app(), pen_request("POST", "/create")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], 500);
        assert_eq!(
            body["messages"],
            "Failed to create a new item connection reset by peer"
        );
        assert!(body.get("data").is_none());

        let (status, body) = send(failing_app(), pen_request("PUT", "/update/7")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], 500);
        assert_eq!(body["messages"], "Failed to update item 7");

        let request = Request::builder()
            .method("DELETE")
            .uri("/delete/7")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(failing_app(), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], 500);
        assert_eq!(body["messages"], "Failed to delete item : 7");
    }

    #[tokio::test]
    async fn test_storage_failure_is_http_ok_when_always_ok() {
        let mut mock = MockItemRepository::new();
        mock.expect_delete()
            .returning(|_| Err(ItemError::Storage("timeout".to_string())));
        let app = router(ItemService::new(mock), StatusPolicy::AlwaysOk);

        let request = Request::builder()
            .method("DELETE")
            .uri("/delete/3")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], 500);
        assert_eq!(body["messages"], "Failed to delete item : 3");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(messages::get_failed(9999), "Failed to get item : 9999");
        assert_eq!(messages::delete_failed(3), "Failed to delete item : 3");
        assert_eq!(messages::update_failed(3), "Failed to update item 3");
        assert_eq!(
            messages::create_failed(&ItemError::Storage(
                "duplicate key value violates unique constraint".to_string()
            )),
            "Failed to create a new item duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn test_failed_envelope_carries_error_status() {
        let envelope: Envelope<()> =
            failed(&ItemError::NotFound(1), messages::get_failed(1));
        assert_eq!(envelope.status, 500);

        let envelope: Envelope<()> =
            failed(&ItemError::Validation("bad".to_string()), "x".to_string());
        assert_eq!(envelope.status, 400);
    }

    #[test]
    fn test_openapi_lists_item_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/create", "/update/{id_item}", "/delete/{id_item}", "/get_all", "/detail"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
