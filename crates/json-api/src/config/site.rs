//! Site Config

use clap::Args;

/// Public site origin settings.
#[derive(Debug, Args)]
pub struct SiteConfig {
    /// Explicit public origin, e.g. `https://windsormaterials.com`
    #[arg(long, env = "SITE_URL")]
    pub site_url: Option<String>,

    /// Deployment hostname set by the hosting platform
    #[arg(long, env = "VERCEL_URL")]
    pub vercel_url: Option<String>,
}
