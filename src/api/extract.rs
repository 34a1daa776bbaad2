use axum::{
    async_trait,
    body::{Bytes, HttpBody},
    extract::{rejection::BytesRejection, FromRequest, FromRequestParts, Path as AxumPath},
    http::{header, request::Parts, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    BoxError,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, PrimitiveDateTime};

use super::{documents::Notice, error::Error};
use crate::input::{ArtistInput, ShowInput, VenueInput};

static START_TIME_FORMATS: [&[FormatItem<'static>]; 3] = [
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

// values an HTML checkbox may submit when ticked
static CHECKED: [&str; 4] = ["y", "on", "true", "1"];

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Invalid mime type, expected application/x-www-form-urlencoded")]
    Mime,
    #[error("Could not read body bytes: {}", .0)]
    BodyRead(#[from] BytesRejection),
    #[error("Invalid form encoding: {}", .0)]
    Syntax(#[from] serde_urlencoded::de::Error),
    #[error("Missing field {}", .0)]
    Missing(&'static str),
    #[error("Field {} must be a whole number", .0)]
    Number(&'static str),
    #[error("Invalid start time {:?}, expected YYYY-MM-DD HH:MM[:SS]", .0)]
    StartTime(String),
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let status = match self {
            FormError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(error = %self, "Rejected form body");
        Notice::error(self.to_string()).respond(status)
    }
}

/// Decoded `application/x-www-form-urlencoded` pairs, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn parse(bytes: &[u8]) -> Result<Self, FormError> {
        Ok(Self(serde_urlencoded::from_bytes(bytes)?))
    }

    pub fn one(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The field's value, or an empty string when it was not submitted.
    pub fn text(&self, key: &str) -> String {
        self.one(key).unwrap_or_default().to_string()
    }

    /// The field's value, or `None` when it is absent or blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        self.one(key)
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
    }

    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.to_owned())
            .collect()
    }

    pub fn flag(&self, key: &str) -> bool {
        self.one(key)
            .map(|v| CHECKED.contains(&v.trim().to_lowercase().as_str()))
            .unwrap_or(false)
    }

    pub fn number(&self, key: &'static str) -> Result<i32, FormError> {
        self.one(key)
            .ok_or(FormError::Missing(key))?
            .trim()
            .parse()
            .map_err(|_| FormError::Number(key))
    }
}

pub struct Form(pub FormFields);

#[async_trait]
impl<S, B> FromRequest<S, B> for Form
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = FormError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        if !form_content_type(req.headers()) {
            return Err(FormError::Mime);
        }
        let bytes = Bytes::from_request(req, state).await?;
        Ok(Form(FormFields::parse(&bytes)?))
    }
}

fn form_content_type(headers: &HeaderMap) -> bool {
    let content_type = if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        content_type
    } else {
        return false;
    };

    let content_type = if let Ok(content_type) = content_type.to_str() {
        content_type
    } else {
        return false;
    };

    let mime = if let Ok(mime) = content_type.parse::<mime::Mime>() {
        mime
    } else {
        return false;
    };

    mime.type_() == mime::APPLICATION && mime.subtype() == mime::WWW_FORM_URLENCODED
}

pub fn parse_start_time(value: &str) -> Result<PrimitiveDateTime, FormError> {
    let value = value.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(value, *format).ok())
        .ok_or_else(|| FormError::StartTime(value.to_string()))
}

pub fn venue_input(fields: &FormFields) -> VenueInput {
    VenueInput {
        name: fields.text("name"),
        city: fields.text("city"),
        state: fields.text("state"),
        address: fields.text("address"),
        phone: fields.text("phone"),
        genres: fields.all("genres"),
        facebook_link: fields.text("facebook_link"),
        image_link: fields.text("image_link"),
        website_link: fields.text("website_link"),
        seeking_talent: fields.flag("seeking_talent"),
        seeking_description: fields.optional("seeking_description"),
    }
}

pub fn artist_input(fields: &FormFields) -> ArtistInput {
    ArtistInput {
        name: fields.text("name"),
        city: fields.text("city"),
        state: fields.text("state"),
        phone: fields.text("phone"),
        genres: fields.all("genres"),
        image_link: fields.optional("image_link"),
        facebook_link: fields.optional("facebook_link"),
        website_link: fields.optional("website_link"),
        seeking_venue: fields.flag("seeking_venue"),
        seeking_description: fields.optional("seeking_description"),
    }
}

pub fn show_input(fields: &FormFields) -> Result<ShowInput, FormError> {
    Ok(ShowInput {
        artist_id: fields.number("artist_id")?,
        venue_id: fields.number("venue_id")?,
        start_time: parse_start_time(
            fields
                .one("start_time")
                .ok_or(FormError::Missing("start_time"))?,
        )?,
    })
}

pub struct Path<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AxumPath(t) = AxumPath::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::not_found(format!("Invalid URL path: {}", e)))?;
        Ok(Self(t))
    }
}
