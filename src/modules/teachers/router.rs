use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{
    create_teacher, delete_teacher, get_teacher, get_teachers, update_teacher,
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/teachers", post(create_teacher).get(get_teachers))
        .route(
            "/teacher/{id}",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
}
