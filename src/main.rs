//! Spendlog CLI - terminal front end for the personal expense log

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use spendlog::budget::{is_exact_budget, parse_budget};
use spendlog::config::{self, SpendlogConfig};
use spendlog::report;
use spendlog::ui::{self, Icons};
use spendlog::expense::is_suggested_category;
use spendlog::{ExpenseInput, Session, SqliteStore, SUGGESTED_CATEGORIES};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "spendlog")]
#[command(version)]
#[command(about = "Personal expense log with per-profile budgets")]
#[command(long_about = r#"
Spendlog records dated expenses per profile and keeps a running total
against a monthly budget.

Example usage:
  spendlog --user alice budget set 500
  spendlog --user alice add --category Food --amount 12.50 --description lunch
  spendlog --user alice categories
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Active profile
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and its tables
    Init,

    /// Record an expense
    Add {
        /// Date (yyyy-mm-dd), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Category (Food, Travel, Rent, Shopping, Education, Entertainment, Others, or any other)
        #[arg(short, long, default_value = SUGGESTED_CATEGORIES[0])]
        category: String,

        /// Amount spent
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Free-text note
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List all expenses of the profile
    List,

    /// Show the running total and budget status
    Total,

    /// Category-wise breakdown (pie chart data)
    Categories,

    /// Month-wise breakdown (bar chart data)
    Monthly,

    /// Show or set the profile budget
    Budget {
        #[command(subcommand)]
        action: BudgetAction,
    },

    /// List known profiles
    Users,

    /// Show database statistics
    Stats,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum BudgetAction {
    /// Show the stored budget
    Show,
    /// Set the budget (only once per profile; 0 means no limit)
    Set {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file with the current database and profile
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = config::load_config(cli.config.as_deref())?;
    let database = config::resolve_database(cli.database.as_deref(), file_config.as_ref());
    let user = config::resolve_user(cli.user.as_deref(), file_config.as_ref());

    match cli.command {
        Commands::Init => {
            let _store = open_store(&database)?;
            ui::success(&format!("Database ready at {}", database.display()));
        }

        Commands::Add { date, category, amount, description } => {
            let store = open_store(&database)?;
            let session = start_session(&store, user)?;
            let date = date.unwrap_or_else(|| {
                chrono::Local::now()
                    .date_naive()
                    .format(spendlog::expense::DATE_FORMAT)
                    .to_string()
            });

            if !is_suggested_category(&category) && !cli.json {
                ui::info(
                    "Hint",
                    &format!("\"{}\" is a custom category (suggested: {})", category.trim(), SUGGESTED_CATEGORIES.join(", ")),
                );
            }

            let input = ExpenseInput::new(date, category, amount, description);
            let outcome = session.add_expense(&store, &input)?;

            if cli.json {
                print_json(&outcome)?;
            } else {
                ui::success("Expense Added Successfully!");
                ui::info("Id", &outcome.id.to_string());
                ui::info("Total", &ui::money(outcome.total));
            }
            if outcome.over_budget {
                ui::warn("Budget Alert: you have exceeded your monthly budget!");
            }
            if session.needs_budget() && !cli.json {
                ui::info("Hint", "no budget set; run `spendlog budget set <amount>`");
            }
        }

        Commands::List => {
            let store = open_store(&database)?;
            let session = start_session(&store, user)?;
            let entries = store.list_expenses(&session.username)?;

            if cli.json {
                print_json(&entries)?;
            } else if entries.is_empty() {
                println!("{} No expenses recorded.", Icons::EMPTY);
            } else {
                ui::header(&format!("All Expenses for {}", session.username));
                println!("{}", ui::expense_table(&entries));
            }
        }

        Commands::Total => {
            let store = open_store(&database)?;
            let session = start_session(&store, user)?;
            let summary = session.summary(&store)?;

            if cli.json {
                print_json(&summary)?;
            } else {
                ui::header(&format!("Welcome, {}", session.username));
                println!("{}", summary);
                if summary.over_budget {
                    ui::warn("Budget Alert: you have exceeded your monthly budget!");
                }
            }
        }

        Commands::Categories => {
            let store = open_store(&database)?;
            let session = start_session(&store, user)?;
            let shares = report::category_report(&store, &session.username)?;

            if cli.json {
                print_json(&shares)?;
            } else if shares.is_empty() {
                ui::info("Info", "No data available");
            } else {
                ui::section("Category-wise Expense");
                println!("{}", ui::category_table(&shares));
                println!("{}", ui::category_chart(&shares));
            }
        }

        Commands::Monthly => {
            let store = open_store(&database)?;
            let session = start_session(&store, user)?;
            let bars = report::monthly_report(&store, &session.username)?;

            if cli.json {
                print_json(&bars)?;
            } else if bars.is_empty() {
                ui::info("Info", "No data available");
            } else {
                ui::section("Monthly Expense Overview");
                println!("{}", ui::monthly_table(&bars));
                println!("{}", ui::monthly_chart(&bars));
            }
        }

        Commands::Budget { action } => {
            let store = open_store(&database)?;
            let mut session = start_session(&store, user)?;

            match action {
                BudgetAction::Show => {
                    if cli.json {
                        print_json(&serde_json::json!({
                            "username": session.username,
                            "budget": session.budget,
                        }))?;
                    } else {
                        match session.budget {
                            Some(b) if b > 0.0 => ui::info("Budget", &ui::money(b)),
                            Some(_) => ui::info("Budget", "no limit"),
                            None => println!(
                                "{} No budget set. Run `spendlog budget set <amount>`.",
                                Icons::EMPTY
                            ),
                        }
                    }
                }
                BudgetAction::Set { amount } => {
                    let budget = parse_budget(&amount);
                    if !is_exact_budget(&amount) {
                        ui::warn(&format!(
                            "Budget \"{}\" is not a non-negative number; storing 0 (no limit)",
                            amount.trim()
                        ));
                    }
                    session.set_budget(&store, budget)?;
                    ui::success(&format!("Budget for {} set to {}", session.username, ui::money(budget)));
                }
            }
        }

        Commands::Users => {
            let store = open_store(&database)?;
            let users = store.list_users()?;

            if cli.json {
                print_json(&users)?;
            } else if users.is_empty() {
                println!("{} No profiles yet.", Icons::EMPTY);
            } else {
                for name in users {
                    println!("{} {}", Icons::PERSON, name);
                }
            }
        }

        Commands::Stats => {
            let store = open_store(&database)?;
            let stats = store.stats()?;

            if cli.json {
                print_json(&stats)?;
            } else {
                println!("{} Spendlog Statistics ({})", Icons::STATS, database.display());
                println!("{}", ui::stats_table(&stats));
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Init { force } => {
                let path = cli.config.unwrap_or_else(config::default_config_path);
                let new_config = SpendlogConfig {
                    database: Some(database.display().to_string()),
                    user,
                };
                config::write_config(&path, &new_config, force)?;
                ui::success(&format!("Wrote {}", path.display()));
            }
        },
    }

    Ok(())
}

fn open_store(database: &Path) -> anyhow::Result<SqliteStore> {
    config::ensure_db_dir(database)?;
    tracing::debug!("Using database {}", database.display());
    Ok(SqliteStore::open(database)?)
}

fn start_session(store: &SqliteStore, user: Option<String>) -> anyhow::Result<Session> {
    let Some(user) = user else {
        anyhow::bail!("No profile selected: pass --user <name> or set `user` in spendlog.toml");
    };
    Ok(Session::start(store, &user)?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
