use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use config_libs::libs_config;
use dotenv::dotenv;
use log::{error, info};
use logger_libs::init_logger;
use mongo_libs::mongo_connect;

use post_services::{
    config_type::{PostAppConfig, StoreKind},
    modules::post::{
        handler::post_config,
        memory::MemoryPostStore,
        query::{MongoPostStore, PostStore},
        service::PostService,
    },
    AppState,
};

const CONFIG_PATH: &str = "config/post_services.toml";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config_path = std::env::var("POST_CONFIG_PATH").unwrap_or_else(|_| CONFIG_PATH.to_string());
    let config: PostAppConfig = match libs_config(&config_path, "POST") {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ Invalid configuration {}: {}", config_path, err);
            std::process::exit(1);
        }
    };

    init_logger(&config.logger.log);

    let store: Arc<dyn PostStore> = match config.database.kind {
        StoreKind::Mongo => {
            let database = &config.database;
            match mongo_connect(
                &database.url,
                &database.name,
                database.min_pool_connection,
                database.max_pool_connection,
            ).await {
                Ok(db) => {
                    info!("✅ Database client ready: {}", db.name());
                    Arc::new(MongoPostStore::new(db, &database.collection))
                }
                Err(err) => {
                    error!("❌ Database connection failed: {}", err);
                    std::process::exit(1);
                }
            }
        }
        StoreKind::Memory => {
            info!("Using in-memory post store");
            Arc::new(MemoryPostStore::new())
        }
    };

    let state = Data::new(AppState {
        post_service: PostService::new(store),
    });

    let address = (config.apps.host.clone(), config.apps.port);
    info!("🚀 Starting server on http://{}:{}", address.0, address.1);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(post_config)
    });

    if config.apps.workers > 0 {
        server = server.workers(config.apps.workers);
    }

    server.bind(address)?.run().await
}
