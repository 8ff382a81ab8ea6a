//! Database connection management

use sqlx::{PgPool, postgres::PgPoolOptions};

/// Upper bound on pooled connections held by one server process.
pub const MAX_CONNECTIONS: u32 = 10;

/// Build a `PostgreSQL` pool that connects on first use.
///
/// The server must boot (and keep serving contact submissions) while the
/// product store is unreachable, so no connection is attempted here.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn connect_lazy(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_lazy(database_url)
}
