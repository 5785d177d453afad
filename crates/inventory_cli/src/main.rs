//! Command line front end for the household inventory core.
//!
//! # Responsibility
//! - Resolve configuration (env vars, then flags) and start logging.
//! - Sign one user into an `InventoryStore` and run a single command.
//! - Print results as JSON or CSV on stdout.

use clap::{Parser, Subcommand, ValueEnum};
use inventory_core::db::open_db;
use inventory_core::service::report::{export_activity_csv, filter_activities};
use inventory_core::{
    init_logging, ActivityType, CoreConfig, InventoryStore, NewCategory, NewItem, NewLoan,
    SqliteSnapshotRepository, StaticIdentity,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "inventory", version, about = "Household inventory store")]
struct Cli {
    /// Snapshot database file. Overrides INVENTORY_DB_PATH.
    #[arg(long)]
    db: Option<PathBuf>,
    /// Overrides INVENTORY_LOG_LEVEL.
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling logs. Overrides INVENTORY_LOG_DIR.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// User whose snapshot is loaded.
    #[arg(long, short)]
    user: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print dashboard counters as JSON.
    Stats,
    /// Print the full snapshot as JSON.
    Dump,
    /// Export the activity log as CSV.
    Report {
        #[arg(long, value_enum)]
        kind: Option<ActivityKindArg>,
    },
    AddCategory {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        slug: String,
    },
    AddItem {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category_id: String,
    },
    /// Lend an item to someone.
    Lend {
        #[arg(long)]
        item_id: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        contact: Option<String>,
    },
    ReturnLoan {
        #[arg(long)]
        loan_id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ActivityKindArg {
    AddItem,
    DeleteItem,
    EditItem,
    LoanItem,
    ReturnItem,
    AddCategory,
}

impl From<ActivityKindArg> for ActivityType {
    fn from(value: ActivityKindArg) -> Self {
        match value {
            ActivityKindArg::AddItem => Self::AddItem,
            ActivityKindArg::DeleteItem => Self::DeleteItem,
            ActivityKindArg::EditItem => Self::EditItem,
            ActivityKindArg::LoanItem => Self::LoanItem,
            ActivityKindArg::ReturnItem => Self::ReturnItem,
            ActivityKindArg::AddCategory => Self::AddCategory,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(&cli)?;
    if let Some(log_dir) = &config.log_dir {
        let log_dir = log_dir.to_str().ok_or("log dir must be valid UTF-8")?;
        init_logging(config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path)?;
    let mut store = InventoryStore::new(SqliteSnapshotRepository::new(&conn));
    store.sync_identity(&StaticIdentity::signed_in(cli.user.as_str()));
    info!("event=cli_command module=cli status=start user_id={}", cli.user);

    match cli.command {
        Command::Stats => {
            println!("{}", serde_json::to_string_pretty(&store.dashboard_stats())?);
        }
        Command::Dump => {
            println!("{}", serde_json::to_string_pretty(store.snapshot())?);
        }
        Command::Report { kind } => {
            let activities = filter_activities(store.activities(), kind.map(ActivityType::from));
            println!("{}", export_activity_csv(activities));
        }
        Command::AddCategory { title, slug } => {
            let mut data = NewCategory::titled(title);
            data.slug = slug;
            println!("{}", store.add_category(data));
        }
        Command::AddItem { name, category_id } => {
            let category = store
                .category(&category_id)
                .map(|category| category.title.clone())
                .ok_or_else(|| format!("unknown category `{category_id}`"))?;
            println!(
                "{}",
                store.add_item(NewItem {
                    name,
                    category,
                    category_id,
                    ..NewItem::default()
                })
            );
        }
        Command::Lend {
            item_id,
            to,
            contact,
        } => {
            let item = store
                .item(&item_id)
                .ok_or_else(|| format!("unknown item `{item_id}`"))?;
            if !item.is_loanable() {
                return Err(format!("item `{item_id}` is on loan or out of stock").into());
            }
            let data = NewLoan {
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                category: item.category.clone(),
                recipient_name: to,
                recipient_contact: contact,
                notes: None,
            };
            println!("{}", store.add_loan(data));
        }
        Command::ReturnLoan { loan_id } => {
            if !store.return_loan(&loan_id) {
                return Err(format!("unknown loan `{loan_id}`").into());
            }
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<CoreConfig, Box<dyn Error>> {
    let mut config = CoreConfig::from_env()?;
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.set_log_level(level)?;
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    Ok(config)
}
