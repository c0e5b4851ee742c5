//! Command line interface.
//!
//! Two commands: `serve` starts the HTTP server (and is the default when no
//! subcommand is given), `migrate` applies pending schema migrations.

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::error::AppResult;
use crate::server::Server;

#[derive(Debug, Parser)]
#[command(
    name = "ordertrack",
    about = "Order tracking CRUD API over PostgreSQL",
    version = crate::pkg_version(),
    long_version = crate::clap_long_version()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve,
    /// Run pending database migrations
    Migrate {
        /// Show pending migrations without applying them
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// Dispatches the parsed command against the loaded settings.
    pub async fn execute(self, settings: Settings) -> AppResult<()> {
        match self.command.unwrap_or(Commands::Serve) {
            Commands::Serve => Server::new(settings).run().await.map_err(Into::into),
            Commands::Migrate { dry_run } => run_migrate(&settings, dry_run).await,
        }
    }
}

async fn run_migrate(settings: &Settings, dry_run: bool) -> AppResult<()> {
    if dry_run {
        let pending = crate::db::pending_migration_names(&settings.database.url).await?;
        if pending.is_empty() {
            println!("No pending migrations - database is up to date");
        } else {
            println!("Found {} pending migration(s):", pending.len());
            for name in &pending {
                println!("  - {name}");
            }
            println!("Run without --dry-run to apply them");
        }
        return Ok(());
    }

    let applied = crate::db::run_pending_migrations(&settings.database.url).await?;
    if applied.is_empty() {
        println!("No migrations to apply - database is up to date");
    } else {
        println!("Applied {} migration(s):", applied.len());
        for name in &applied {
            println!("  - {name}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["ordertrack"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_serve_subcommand() {
        let cli = Cli::try_parse_from(["ordertrack", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn parses_migrate_with_dry_run() {
        let cli = Cli::try_parse_from(["ordertrack", "migrate", "--dry-run"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Migrate { dry_run: true })
        ));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["ordertrack", "scaffold"]).is_err());
    }
}
