use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "CRUD API for stock items. Every response is a {status, messages, data} envelope."
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/item", api = domain_items::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
