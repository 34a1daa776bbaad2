pub mod documents;
pub mod error;
pub mod extract;

mod artists;
mod shows;
mod venues;

use std::any::Any;

use axum::{
    http::Uri,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::error::StoreError;
use documents::{Notice, ServerInfo};
pub use error::Error;

#[derive(Clone)]
pub struct AppState(pub DatabaseConnection);

pub fn router(db: DatabaseConnection) -> Router {
    let tracing = TraceLayer::new_for_http();
    Router::new()
        .route("/", get(home))
        .route("/venues", get(venues::venues))
        .route("/venues/search", post(venues::search))
        .route("/venues/create", get(venues::draft).post(venues::create))
        .route("/venues/:id", get(venues::venue).delete(venues::delete))
        .route("/venues/:id/edit", get(venues::edit).post(venues::update))
        .route("/artists", get(artists::artists))
        .route("/artists/search", post(artists::search))
        .route("/artists/create", get(artists::draft).post(artists::create))
        .route("/artists/:id", get(artists::artist).delete(artists::delete))
        .route("/artists/:id/edit", get(artists::edit).post(artists::update))
        .route("/shows", get(shows::shows))
        .route("/shows/create", get(shows::draft).post(shows::create))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panicked))
        .layer(tracing)
        .with_state(AppState(db))
}

async fn home() -> Json<ServerInfo> {
    Json(ServerInfo {
        name: base::CLI_NAME.to_string(),
        version: base::VERSION.to_string(),
    })
}

async fn not_found(uri: Uri) -> Error {
    Error::not_found(format!("No route for {}", uri))
}

fn panicked(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(%reason, "Request handler panicked");
    Error::internal().into_response()
}

/// Answers a failed write with a flash notice. An absent record gets the
/// generic not-found document instead.
fn rejected(err: StoreError, message: String) -> Response {
    let status = error::status(&err);
    match err {
        StoreError::NotFound(..) => Error::from(err).into_response(),
        StoreError::ConstraintViolation(ref reason) => {
            tracing::warn!(%reason, %message, "Write rejected");
            Notice::error(message).respond(status)
        }
        StoreError::Database(ref e) => {
            tracing::error!(error = %e, %message, "Write failed");
            Notice::error(message).respond(status)
        }
    }
}
