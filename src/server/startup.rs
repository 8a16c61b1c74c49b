use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    integration::IntegrationClients,
    model::app::AppState,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Connect every dependency and assemble the state shared by the handlers
pub async fn build_app_state(config: &Config) -> Result<AppState, Error> {
    let db = connect_to_database(config).await?;
    let integrations = IntegrationClients::from_config(config)?;

    Ok(AppState {
        db,
        integrations,
        page_size: config.page_size,
    })
}
