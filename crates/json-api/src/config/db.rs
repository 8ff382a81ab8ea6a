//! Database Config

use clap::Args;

/// Product store settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string. Catalog and checkout routes report the
    /// store as unconfigured when this is unset.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}
