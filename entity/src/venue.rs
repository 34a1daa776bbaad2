use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Genres;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "venue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Genres,
    pub facebook_link: String,
    pub image_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show::Entity")]
    Show,
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Show.def()
    }
}

// Artists reachable through the shows they played here.
impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::show::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::show::Relation::Venue.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
