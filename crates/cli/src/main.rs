mod commands;
mod logger;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Portfolio and blog site generator", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize a new site directory
    Init {
        /// Path to create site directory
        path: PathBuf,

        /// Author name written to site.toml
        #[arg(long)]
        name: Option<String>,

        /// Author email written to site.toml
        #[arg(long)]
        email: Option<String>,
    },

    /// Validate catalog and site configuration
    Validate {
        /// Path to site directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Preview site locally with hot reload
    Preview {
        /// Path to site directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Build the static export
    Build {
        /// Path to site directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,
    },

    /// Run a catalog query and print one page of results
    Query {
        /// Which catalog to query
        #[arg(value_enum)]
        kind: QueryKind,

        /// Category filter
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Case-insensitive free-text search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort key (posts: date, title, read_time; projects: title, performance)
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction (asc, desc)
        #[arg(long)]
        dir: Option<String>,

        /// Page number; out-of-range pages are clamped
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Override the page size from site.toml
        #[arg(long)]
        page_size: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Path to site directory
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },

    /// Show a blog post by slug
    Show {
        /// Post slug
        slug: String,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryKind {
    Posts,
    Projects,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Command::Init { path, name, email } => commands::init::run(path, name, email).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Query {
            kind,
            category,
            search,
            sort,
            dir,
            page,
            page_size,
            json,
            path,
        } => {
            let args = commands::query::QueryArgs {
                category,
                search,
                sort,
                dir,
                page,
                page_size,
                json,
            };
            commands::query::run(path, kind, args).await
        }
        Command::Show { slug, json } => commands::show::run(&slug, json).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_query_arguments() {
        let cli = Cli::parse_from([
            "folio", "query", "posts", "--search", "react", "--sort", "title", "--page", "-1",
        ]);
        match cli.command {
            Command::Query {
                kind, search, sort, page, ..
            } => {
                assert_eq!(kind, QueryKind::Posts);
                assert_eq!(search, "react");
                assert_eq!(sort.as_deref(), Some("title"));
                assert_eq!(page, -1);
            }
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["folio", "build", "site", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Build { .. }));
    }
}
