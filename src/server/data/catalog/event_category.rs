use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::EventCategoryModel;

/// Read access to the event category lookup table
pub struct EventCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventCategoryRepository<'a> {
    /// Creates a new instance of [`EventCategoryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every event category ordered by id
    pub async fn get_all(&self) -> Result<Vec<EventCategoryModel>, DbErr> {
        entity::prelude::EventCategory::find()
            .order_by_asc(entity::event_category::Column::Id)
            .all(self.db)
            .await
    }
}
