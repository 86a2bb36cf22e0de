use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::AddressModel;

/// Read access to event addresses
pub struct AddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressRepository<'a> {
    /// Creates a new instance of [`AddressRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every address ordered by id
    pub async fn get_all(&self) -> Result<Vec<AddressModel>, DbErr> {
        entity::prelude::Address::find()
            .order_by_asc(entity::address::Column::Id)
            .all(self.db)
            .await
    }
}
