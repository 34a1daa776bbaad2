use axum::{extract::State, http::StatusCode, response::Response, Json};

use super::{
    documents::Notice,
    extract::{artist_input, Form, Path},
    rejected, AppState, Error,
};
use crate::{
    input::ArtistInput,
    mutation, query,
    view::{self, ArtistDetail, Editable, SearchResults, Summary},
};

pub async fn artists(State(AppState(db)): State<AppState>) -> Result<Json<Vec<Summary>>, Error> {
    Ok(Json(query::artists(&db).await?))
}

pub async fn search(
    State(AppState(db)): State<AppState>,
    Form(fields): Form,
) -> Result<Json<SearchResults>, Error> {
    let term = fields.text("search_term");
    Ok(Json(query::search_artists(&db, &term).await?))
}

pub async fn artist(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistDetail>, Error> {
    Ok(Json(query::artist_detail(&db, id, view::local_now()).await?))
}

pub async fn draft() -> Json<ArtistInput> {
    Json(ArtistInput::default())
}

pub async fn create(State(AppState(db)): State<AppState>, Form(fields): Form) -> Response {
    let input = artist_input(&fields);
    let name = input.name.to_owned();
    match mutation::create_artist(&db, input).await {
        Ok(artist) => Notice::success(format!("Artist {} was successfully listed!", artist.name))
            .with_id(artist.id)
            .created(format!("/artists/{}", artist.id)),
        Err(err) => rejected(
            err,
            format!("An error occurred. Artist {} could not be listed.", name),
        ),
    }
}

pub async fn edit(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Editable<ArtistInput>>, Error> {
    Ok(Json(query::artist_form(&db, id).await?))
}

pub async fn update(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i32>,
    Form(fields): Form,
) -> Response {
    match mutation::update_artist(&db, id, artist_input(&fields)).await {
        Ok(artist) => Notice::success("The Artist was updated successfully.")
            .with_id(artist.id)
            .respond(StatusCode::OK),
        Err(err) => rejected(err, "An error occured when updating the Artist.".to_string()),
    }
}

pub async fn delete(State(AppState(db)): State<AppState>, Path(id): Path<i32>) -> Response {
    match mutation::delete_artist(&db, id).await {
        Ok(_) => Notice::success("Artist deleted successfully.").respond(StatusCode::OK),
        Err(err) => rejected(
            err,
            "An error occurred. Artist could not be deleted.".to_string(),
        ),
    }
}
