use analytics::{AnalyticsEngine, BookPopularityEntry, TopPublisherEntry, TopReaderEntry};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::{Book, Reader};
use datastore::{MemoryStore, SnapshotSource};
use tracing_subscriber::EnvFilter;

/// The main entry point for the Bibliotek reporting application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // The engine is built once for the requested collation locale; the seeded
    // store stands in for the external data-access layer.
    let engine = AnalyticsEngine::with_locale(&cli.locale)?;
    let store = MemoryStore::seeded();
    let snapshot = store.snapshot().await?;
    tracing::info!(
        books = snapshot.books.len(),
        loans = snapshot.loans.len(),
        "snapshot materialized"
    );

    match cli.command {
        Commands::IssuedBooks => {
            let books = engine.issued_book_titles(&snapshot);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&books)?);
            } else {
                println!("{}", book_table(&books));
            }
        }
        Commands::TopReaders(args) => {
            let rows = engine.top_readers_by_books_read(&snapshot, args.from, args.to);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", top_reader_table(&rows));
            }
        }
        Commands::LongestLoans => {
            let readers = engine.readers_by_longest_max_loan_period(&snapshot);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&readers)?);
            } else {
                println!("{}", reader_table(&readers));
            }
        }
        Commands::TopPublishers(args) => {
            let rows = engine.top_publishers_by_year(&snapshot, args.year);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", publisher_table(&rows));
            }
        }
        Commands::LeastPopular(args) => {
            let rows = engine.least_popular_books_by_year(&snapshot, args.year);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", popularity_table(&rows));
            }
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Circulation analytics for the library catalog.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// BCP-47 locale tag used for ordering titles and names.
    #[arg(long, global = true, default_value = analytics::DEFAULT_LOCALE)]
    locale: String,

    /// Print the report as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every book that has ever been issued, ordered by title.
    IssuedBooks,
    /// Show the top 5 readers by books read within a date range.
    TopReaders(TopReadersArgs),
    /// Show the 5 readers who borrowed for the longest agreed periods.
    LongestLoans,
    /// Show the top 5 publishers by books issued in a calendar year.
    TopPublishers(YearArgs),
    /// Show the 5 least loaned books of a calendar year.
    LeastPopular(YearArgs),
}

#[derive(Parser)]
struct TopReadersArgs {
    /// Start of the period, inclusive (format: YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// End of the period, inclusive (format: YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,
}

#[derive(Parser)]
struct YearArgs {
    /// The calendar year to analyze.
    #[arg(long)]
    year: i32,
}

// ==============================================================================
// Table Rendering
// ==============================================================================

fn book_table(books: &[Book]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Inventory", "Catalog code", "Authors", "Title", "Year"]);
    for book in books {
        table.add_row(vec![
            book.inventory_number.to_string(),
            book.catalog_code.clone(),
            book.authors.clone(),
            book.title.clone(),
            book.year.to_string(),
        ]);
    }
    table
}

fn top_reader_table(rows: &[TopReaderEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Reader", "Phone", "Books read"]);
    for row in rows {
        table.add_row(vec![
            row.reader.full_name.clone(),
            row.reader.phone.clone(),
            row.books_read.to_string(),
        ]);
    }
    table
}

fn reader_table(readers: &[Reader]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Reader", "Address", "Phone", "Registered"]);
    for reader in readers {
        table.add_row(vec![
            reader.full_name.clone(),
            reader.address.clone().unwrap_or_default(),
            reader.phone.clone(),
            reader.registration_date.to_string(),
        ]);
    }
    table
}

fn publisher_table(rows: &[TopPublisherEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Publisher", "Books issued"]);
    for row in rows {
        table.add_row(vec![row.publisher.name.clone(), row.issued_count.to_string()]);
    }
    table
}

fn popularity_table(rows: &[BookPopularityEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Title", "Authors", "Loans"]);
    for row in rows {
        table.add_row(vec![
            row.book.title.clone(),
            row.book.authors.clone(),
            row.loan_count.to_string(),
        ]);
    }
    table
}
