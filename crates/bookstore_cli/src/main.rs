//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bookstore_core` linkage.
//! - Run catalog search/purchase against a fixed demo catalog.
//! - Keep output deterministic for quick local sanity checks.

use bookstore_core::{
    core_version, init_logging, ping, Book, BookService, InMemoryBookRepository, LogConfig, User,
};
use clap::{Parser, Subcommand};
use log::info;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bookstore")]
#[command(version)]
#[command(about = "Bookstore core smoke CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Log level (trace|debug|info|warn|error)")]
    log_level: Option<String>,

    #[arg(long, global = true, help = "Absolute directory for rolling log files")]
    log_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print core ping and version")]
    Ping,

    #[command(about = "Search the demo catalog by exact title, author, or genre")]
    Search {
        #[arg(help = "Exact title, author, or genre")]
        query: String,
    },

    #[command(about = "Purchase a demo catalog title for a demo user")]
    Purchase {
        #[arg(help = "Exact title of the book to purchase")]
        title: String,

        #[arg(long, default_value_t = 0.0, help = "Opening balance of the demo user")]
        balance: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let resolved = if cli.log_level.is_none() && cli.log_dir.is_none() {
        LogConfig::from_env()
    } else {
        let level = cli
            .log_level
            .or_else(|| std::env::var(bookstore_core::config::ENV_LOG_LEVEL).ok());
        let log_dir = cli
            .log_dir
            .or_else(|| std::env::var(bookstore_core::config::ENV_LOG_DIR).ok());
        LogConfig::resolve(level.as_deref(), log_dir.as_deref())
    };
    let config = match resolved {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&config) {
        eprintln!("warning: logging disabled: {err}");
    }

    match cli.command {
        Commands::Ping => {
            println!("bookstore_core ping={}", ping());
            println!("bookstore_core version={}", core_version());
        }
        Commands::Search { query } => {
            let service = BookService::new(demo_catalog());
            let hits = service.search_book(&query);
            info!("event=cli_search module=cli status=ok hits={}", hits.len());
            if hits.is_empty() {
                println!("no books match `{query}`");
            }
            for book in hits {
                println!(
                    "{} | {} | {} | {:.2}",
                    book.title, book.author, book.genre, book.price
                );
            }
        }
        Commands::Purchase { title, balance } => {
            let service = BookService::new(demo_catalog());
            let Some(book) = service
                .search_book(&title)
                .into_iter()
                .find(|book| book.title == title)
            else {
                println!("no book titled `{title}`");
                return ExitCode::FAILURE;
            };

            let mut user = User::with_balance("demo", "demo", "demo@example.com", balance);
            if service.purchase_book(&mut user, &book) {
                println!("purchased `{}`; balance={:.2}", book.title, user.balance);
            } else {
                println!(
                    "purchase of `{}` declined; price={:.2} balance={:.2}",
                    book.title, book.price, user.balance
                );
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn demo_catalog() -> InMemoryBookRepository {
    InMemoryBookRepository::from_books(vec![
        Book::new("The Hound of the Baskervilles", "Arthur Conan Doyle", "Mystery", 9.99),
        Book::new("A Study in Scarlet", "Arthur Conan Doyle", "Mystery", 7.50),
        Book::new("The Hobbit", "J. R. R. Tolkien", "Fantasy", 14.25),
        Book::new("Dune", "Frank Herbert", "Science Fiction", 18.00),
    ])
}
