use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use expense_tracker::cli::{
    choose_interface, handle_add, handle_list, handle_summary, run_menu, InterfaceChoice,
};
use expense_tracker::config::logging::{init_logging, LogTarget};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::models::ExpenseInput;
use expense_tracker::services::ExpenseService;
use expense_tracker::storage::CsvExpenseStore;
use expense_tracker::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense logger for the terminal",
    long_about = "Records dated, categorized expenses in a CSV file and reports \
                  totals per category, from a text menu, a form interface or \
                  one-shot commands."
)]
struct Cli {
    /// Expense file to use instead of the configured one
    #[arg(long, global = true, env = "EXPENSES_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive text menu
    Menu,

    /// Launch the form interface
    #[command(alias = "ui")]
    Tui,

    /// Record an expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        date: String,
        /// Category, e.g. Food or Utilities
        category: String,
        /// Amount spent
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List every recorded expense
    List,

    /// Show totals per category
    Summary {
        /// Skip the bar chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // The form interface owns the terminal, so its logs go to a file
    let log_file = paths.log_file();
    let target = match cli.command {
        Some(Commands::Tui) | None => LogTarget::File(&log_file),
        _ => LogTarget::Stderr,
    };
    init_logging(&settings.log_level, target)?;

    let store = CsvExpenseStore::with_policy(
        settings.resolve_expenses_file(&paths, cli.file.as_deref()),
        settings.malformed_rows,
    );
    debug!(path = %store.path().display(), "using expense file");
    let service = ExpenseService::new(&store);

    let mut stdout = io::stdout();
    match cli.command {
        Some(Commands::Menu) => {
            run_menu(&service, &settings, &mut io::stdin().lock(), &mut stdout)?;
        }
        Some(Commands::Tui) => {
            run_tui(&store, &settings, store.path())?;
        }
        Some(Commands::Add {
            date,
            category,
            amount,
        }) => {
            handle_add(
                &service,
                &ExpenseInput::new(date, category, amount),
                &mut stdout,
            )?;
        }
        Some(Commands::List) => {
            handle_list(&service, &mut stdout)?;
        }
        Some(Commands::Summary { no_chart }) => {
            handle_summary(&service, &settings, !no_chart, &mut stdout)?;
        }
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expense file:   {}", store.path().display());
            println!("Log file:       {}", log_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Categories:      {}", settings.category_hint());
            println!("  Malformed rows:  {:?}", store.policy());
            println!("  Log level:       {}", settings.log_level);
        }
        None => loop {
            let choice = choose_interface(&mut io::stdin().lock(), &mut stdout)?;
            match choice {
                InterfaceChoice::Cli => {
                    run_menu(&service, &settings, &mut io::stdin().lock(), &mut stdout)?;
                }
                InterfaceChoice::Tui => run_tui(&store, &settings, store.path())?,
                InterfaceChoice::Exit => break,
            }
        },
    }

    Ok(())
}
