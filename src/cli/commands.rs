use crate::config::{ConfigOverrides, StoreKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookgraph")]
#[command(
    author,
    version,
    about = "A GraphQL API for authors and their books"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Which store backs the API
    #[arg(long, global = true, value_enum, env = "BOOKGRAPH_STORE")]
    pub store: Option<StoreArg>,

    /// MongoDB connection string
    #[arg(long, global = true, env = "MONGO_URI")]
    pub database_url: Option<String>,

    /// Database name (defaults to the one in the connection string)
    #[arg(long, global = true, env = "BOOKGRAPH_DATABASE")]
    pub database: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        host: Option<IpAddr>,

        /// Don't serve the GraphiQL console on GET
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query and print the JSON response
    Query {
        /// GraphQL document
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreArg {
    Mongo,
    Memory,
}

impl From<StoreArg> for StoreKind {
    fn from(s: StoreArg) -> Self {
        match s {
            StoreArg::Mongo => StoreKind::Mongo,
            StoreArg::Memory => StoreKind::Memory,
        }
    }
}

impl Cli {
    /// Collects the overrides that apply on top of the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            store: self.global.store.map(Into::into),
            database_url: self.global.database_url.clone(),
            database: self.global.database.clone(),
            ..ConfigOverrides::default()
        };
        if let Commands::Serve {
            port,
            host,
            no_graphiql,
        } = &self.command
        {
            overrides.port = *port;
            overrides.host = *host;
            overrides.no_graphiql = *no_graphiql;
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags_become_overrides() {
        let cli = Cli::parse_from([
            "bookgraph",
            "serve",
            "--port",
            "8080",
            "--no-graphiql",
            "--store",
            "memory",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.port, Some(8080));
        assert!(overrides.no_graphiql);
        assert_eq!(overrides.store, Some(StoreKind::Memory));
    }

    #[test]
    fn test_query_has_no_server_overrides() {
        let cli = Cli::parse_from(["bookgraph", "query", "{ books { id } }"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.port, None);
        assert!(!overrides.no_graphiql);
    }
}
