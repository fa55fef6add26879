use axum::{routing::get, Router};

use crate::handlers::*;
use crate::models::Entity;
use crate::services::SharedService;

/// CRUD routes for one record kind, meant to be nested under its collection
/// path (`/patients`, `/appointments`, ...).
pub fn entity_routes<E: Entity>(service: SharedService<E>) -> Router {
    Router::new()
        .route("/", get(list_records::<E>).post(create_record::<E>))
        .route(
            "/{id}",
            get(get_record::<E>)
                .put(update_record::<E>)
                .patch(update_record::<E>)
                .delete(delete_record::<E>),
        )
        .with_state(service)
}
