use sea_orm::DatabaseConnection;

/// Shared handler state. Cloning is cheap; the connection is a pool
/// handle.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    /// When `None` the admin routes are unguarded (local development).
    pub admin_key: Option<String>,
}
