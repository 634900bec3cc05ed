use axum::Router;
use domain_items::{ItemService, PgItemRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);
    handlers::router(service, state.config.status_policy)
}
