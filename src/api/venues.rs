use axum::{extract::State, http::StatusCode, response::Response, Json};

use super::{
    documents::Notice,
    extract::{venue_input, Form, Path},
    rejected, AppState, Error,
};
use crate::{
    input::VenueInput,
    mutation, query,
    view::{self, Editable, LocationGroup, SearchResults, VenueDetail},
};

pub async fn venues(
    State(AppState(db)): State<AppState>,
) -> Result<Json<Vec<LocationGroup>>, Error> {
    Ok(Json(query::venues_by_location(&db).await?))
}

pub async fn search(
    State(AppState(db)): State<AppState>,
    Form(fields): Form,
) -> Result<Json<SearchResults>, Error> {
    let term = fields.text("search_term");
    Ok(Json(query::search_venues(&db, &term).await?))
}

pub async fn venue(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VenueDetail>, Error> {
    Ok(Json(query::venue_detail(&db, id, view::local_now()).await?))
}

pub async fn draft() -> Json<VenueInput> {
    Json(VenueInput::default())
}

pub async fn create(State(AppState(db)): State<AppState>, Form(fields): Form) -> Response {
    let input = venue_input(&fields);
    let name = input.name.to_owned();
    match mutation::create_venue(&db, input).await {
        Ok(venue) => Notice::success(format!("Venue {} was successfully listed!", venue.name))
            .with_id(venue.id)
            .created(format!("/venues/{}", venue.id)),
        Err(err) => rejected(
            err,
            format!("An error occurred. Venue {} could not be listed.", name),
        ),
    }
}

pub async fn edit(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Editable<VenueInput>>, Error> {
    Ok(Json(query::venue_form(&db, id).await?))
}

pub async fn update(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i32>,
    Form(fields): Form,
) -> Response {
    match mutation::update_venue(&db, id, venue_input(&fields)).await {
        Ok(venue) => Notice::success("The Venue was updated successfully.")
            .with_id(venue.id)
            .respond(StatusCode::OK),
        Err(err) => rejected(err, "An error occured when updating the Venue.".to_string()),
    }
}

pub async fn delete(State(AppState(db)): State<AppState>, Path(id): Path<i32>) -> Response {
    match mutation::delete_venue(&db, id).await {
        Ok(_) => Notice::success("Venue deleted successfully.").respond(StatusCode::OK),
        Err(err) => rejected(
            err,
            "An error occurred. Venue could not be deleted.".to_string(),
        ),
    }
}
