use axum::{extract::State, response::Response, Json};

use super::{
    documents::{Notice, ShowDraft},
    extract::{show_input, Form, FormError},
    rejected, AppState, Error,
};
use crate::{mutation, query, view::ShowListing};

pub async fn shows(State(AppState(db)): State<AppState>) -> Result<Json<Vec<ShowListing>>, Error> {
    Ok(Json(query::shows(&db).await?))
}

pub async fn draft() -> Json<ShowDraft> {
    Json(ShowDraft::default())
}

pub async fn create(
    State(AppState(db)): State<AppState>,
    Form(fields): Form,
) -> Result<Response, FormError> {
    let input = show_input(&fields)?;
    Ok(match mutation::create_show(&db, input).await {
        Ok(show) => Notice::success("A new show has been listed successfully")
            .with_id(show.id)
            .created("/shows".to_string()),
        Err(err) => rejected(err, "Error in listing a new show".to_string()),
    })
}
