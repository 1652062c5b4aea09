use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_grade, delete_grade, get_grade, get_grades, update_grade};

pub fn init_grades_router() -> Router<AppState> {
    Router::new()
        .route("/grades", post(create_grade).get(get_grades))
        .route(
            "/grade/{id}",
            get(get_grade).put(update_grade).delete(delete_grade),
        )
}
