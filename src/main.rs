use clap::{Parser, Subcommand};
use ensdict_core::config::Config;
use ensdict_core::{DictionarySource, QueryOptions, SortKey, ZSpec};
use ensdict_ensembl::EnsemblDictionary;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ensdict", about = "Query Ensembl genes through EBI Search as a dictionary")]
struct Cli {
    /// Config file layered over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct Paging {
    /// 1-based page number.
    #[arg(long)]
    page: Option<i64>,

    /// Results per page.
    #[arg(long)]
    per_page: Option<i64>,

    /// Keep only these `z` fields (repeatable); `--no-z` drops them all.
    #[arg(long = "z")]
    z: Vec<String>,

    #[arg(long, conflicts_with = "z")]
    no_z: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Describe the dictionary.
    Infos {
        /// Dictionary ids to filter on.
        #[arg(long = "id")]
        ids: Vec<String>,
    },
    /// Look up entries by id, or list them page by page.
    Entries {
        /// Entry id, bare (ENSG00000142208) or full URI (repeatable).
        #[arg(long = "id")]
        ids: Vec<String>,

        /// id, dictID or str.
        #[arg(long)]
        sort: Option<SortKey>,

        #[command(flatten)]
        paging: Paging,
    },
    /// Search entries matching a string.
    Matches {
        query: String,

        #[command(flatten)]
        paging: Paging,
    },
}

impl Paging {
    fn apply(self, mut opts: QueryOptions) -> QueryOptions {
        opts.page = self.page;
        opts.per_page = self.per_page;
        opts.z = if self.no_z {
            ZSpec::Drop
        } else if self.z.is_empty() {
            ZSpec::All
        } else {
            ZSpec::Keys(self.z)
        };
        opts
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ensdict debug log started");
    }

    let config = Config::load(cli.config.as_deref())?;
    let dict = EnsemblDictionary::from_config(&config);

    let out = match cli.command {
        Command::Infos { ids } => {
            let opts = if ids.is_empty() {
                QueryOptions::default()
            } else {
                QueryOptions::default().with_ids(ids)
            };
            serde_json::to_string_pretty(&dict.get_dict_infos(&opts).await?)?
        }
        Command::Entries { ids, sort, paging } => {
            let mut opts = paging.apply(QueryOptions::default().with_ids(ids));
            opts.sort = sort;
            serde_json::to_string_pretty(&dict.get_entries(&opts).await?)?
        }
        Command::Matches { query, paging } => {
            let opts = paging.apply(QueryOptions::default());
            serde_json::to_string_pretty(&dict.get_entry_matches_for_string(&query, &opts).await?)?
        }
    };

    println!("{out}");
    Ok(())
}
