use sea_orm::DatabaseConnection;

use crate::server::model::catalog::CatalogSettings;

/// State shared with every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool of the relational store.
    pub db: DatabaseConnection,
    /// Settings applied by the catalog query service.
    pub catalog: CatalogSettings,
}
