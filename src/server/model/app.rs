use sea_orm::DatabaseConnection;

use crate::server::integration::IntegrationClients;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub integrations: IntegrationClients,
    /// Rows per page of list endpoints
    pub page_size: u64,
}
