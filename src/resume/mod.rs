pub mod handlers;
mod repo;

use crate::db::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::read_routes()
}
