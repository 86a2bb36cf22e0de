#![allow(non_snake_case)]

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(eventcatalog::client::App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    use dioxus_logger::tracing::{self, Level};
    use eventcatalog::server::{
        config::Config,
        model::{app::AppState, catalog::CatalogSettings},
        router, startup,
    };

    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match startup::bind_listener(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.bind_address, e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        db,
        catalog: CatalogSettings {
            external_catalog_base_url: config.external_catalog_base_url.clone(),
            query_timeout: config.query_timeout,
        },
    };
    let app = router::routes().with_state(state);

    tracing::info!("Starting server on {}", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
