use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use stock_core::*;

#[derive(Parser)]
#[command(name = "stockr")]
#[command(about = "Track item quantities in a JSON inventory file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Inventory file (overrides the configured location)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the additions made during this run
    #[arg(long, global = true)]
    show_log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add stock to an item (negative quantities decrease it)
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove stock from an item, dropping it once it reaches zero
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Print the quantity of an item
    Get { item: String },

    /// Print every item and its quantity (default)
    Report,

    /// List items below the low-stock threshold
    Low {
        /// Override the configured threshold
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<i64>,
    },

    /// Apply a JSON array of {"item": ..., "quantity": ...} additions
    Import { path: PathBuf },

    /// Replay a sample session against the inventory file
    Demo,
}

fn main() -> Result<()> {
    // Initialize logging
    stock_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let inventory_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.storage.inventory_file.clone());

    let mut ledger = Ledger::open(&inventory_file, TracingReporter);

    match cli.command {
        Some(Commands::Add { item, quantity }) => {
            cmd_add(&mut ledger, &inventory_file, &item, quantity)?
        }
        Some(Commands::Remove { item, quantity }) => {
            cmd_remove(&mut ledger, &inventory_file, &item, quantity)?
        }
        Some(Commands::Get { item }) => println!("{}", ledger.quantity(&item)),
        Some(Commands::Low { threshold }) => {
            let threshold = threshold.unwrap_or(config.alerts.low_stock_threshold);
            for item in ledger.low_items(threshold) {
                println!("{}", item);
            }
        }
        Some(Commands::Import { path }) => cmd_import(&mut ledger, &inventory_file, &path)?,
        Some(Commands::Demo) => cmd_demo(
            &mut ledger,
            &inventory_file,
            config.alerts.low_stock_threshold,
        )?,
        Some(Commands::Report) | None => print!("{}", ledger.report()),
    }

    if cli.show_log {
        for entry in ledger.activity().entries() {
            println!("{}", entry);
        }
    }

    Ok(())
}

fn cmd_add(ledger: &mut Ledger, inventory_file: &Path, item: &str, quantity: i64) -> Result<()> {
    if ledger.add(item, quantity) {
        ledger.save(inventory_file)?;
        println!("{} -> {}", item, ledger.quantity(item));
    }
    Ok(())
}

fn cmd_remove(
    ledger: &mut Ledger,
    inventory_file: &Path,
    item: &str,
    quantity: i64,
) -> Result<()> {
    if ledger.remove(item, quantity) {
        ledger.save(inventory_file)?;
        println!("{} -> {}", item, ledger.quantity(item));
    }
    Ok(())
}

fn cmd_import(ledger: &mut Ledger, inventory_file: &Path, path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<Value> = serde_json::from_str(&contents)?;

    let applied = records
        .iter()
        .filter(|record| ledger.apply_record(record))
        .count();

    ledger.save(inventory_file)?;
    println!("✓ Applied {} of {} adjustments", applied, records.len());
    Ok(())
}

fn cmd_demo(ledger: &mut Ledger, inventory_file: &Path, threshold: i64) -> Result<()> {
    ledger.add("apple", 10);
    ledger.add("banana", -2);
    ledger.add_values(&Value::from(123), &Value::from("ten"));
    ledger.remove("apple", 3);
    ledger.remove("orange", 1);

    println!("Apple stock: {}", ledger.quantity("apple"));
    println!("Low items: {:?}", ledger.low_items(threshold));
    print!("{}", ledger.report());

    ledger.save(inventory_file)
}
