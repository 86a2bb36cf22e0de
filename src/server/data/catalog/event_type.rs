use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::EventTypeModel;

/// Read access to the event type lookup table
pub struct EventTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventTypeRepository<'a> {
    /// Creates a new instance of [`EventTypeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every event type ordered by id
    pub async fn get_all(&self) -> Result<Vec<EventTypeModel>, DbErr> {
        entity::prelude::EventType::find()
            .order_by_asc(entity::event_type::Column::Id)
            .all(self.db)
            .await
    }
}
