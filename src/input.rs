//! Validated field sets accepted by the mutation layer.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::error::StoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub image_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowInput {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: PrimitiveDateTime,
}

fn required(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        Err(StoreError::ConstraintViolation(format!(
            "{} must not be empty",
            field
        )))
    } else {
        Ok(())
    }
}

fn genres(values: &[String]) -> Result<(), StoreError> {
    if values.is_empty() || values.iter().any(|g| g.trim().is_empty()) {
        Err(StoreError::ConstraintViolation(
            "genres must list at least one genre".to_string(),
        ))
    } else {
        Ok(())
    }
}

impl VenueInput {
    pub fn validate(&self) -> Result<(), StoreError> {
        required("name", &self.name)?;
        required("city", &self.city)?;
        required("state", &self.state)?;
        required("address", &self.address)?;
        required("phone", &self.phone)?;
        genres(&self.genres)
    }
}

impl ArtistInput {
    pub fn validate(&self) -> Result<(), StoreError> {
        required("name", &self.name)?;
        required("city", &self.city)?;
        required("state", &self.state)?;
        required("phone", &self.phone)?;
        genres(&self.genres)
    }
}
