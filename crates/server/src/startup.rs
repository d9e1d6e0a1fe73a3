use std::{env, net::SocketAddr};

use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Host/port from config.toml, falling back to env vars.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_admin_key() -> Option<String> {
    if let Ok(cfg) = configs::load_default() {
        let mut admin = cfg.admin;
        admin.normalize_from_env();
        if admin.api_key.is_some() {
            return admin.api_key;
        }
    }
    env::var("ADMIN_API_KEY").ok().filter(|k| !k.trim().is_empty())
}

/// Public entry: connect, migrate, build the app and serve. Logging
/// is initialized by the binary before the runtime starts.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let db = models::db::connect().await?;
    Migrator::up(&db, None).await?;
    info!("migrations applied");

    let admin_key = load_admin_key();
    if admin_key.is_none() {
        info!("no admin key configured, admin routes are open");
    }
    let state = ServerState { db, admin_key };

    let app = routes::build_router(state, build_cors());

    let addr = load_bind_addr()?;
    info!(%addr, "starting http server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
