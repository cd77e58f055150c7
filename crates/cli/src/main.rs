use anyhow::{bail, Context, Result};
use catalog::{Catalog, Color, Product, Size};
use clap::{Parser, Subcommand};
use colored::Colorize;
use devices::Photocopier;
use filtering::specs::{ColorSpec, NameContainsSpec, SizeSpec};
use filtering::{CatalogFilter, Filter, Specification};
use journal::Persistence;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// ShopKit - composable product filtering and friends
#[derive(Parser)]
#[command(name = "shopkit")]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the catalog by any combination of attributes
    Filter {
        /// Path to a catalog file (one `name,color,size` record per line);
        /// defaults to the built-in demo catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Keep only products of this color (red, green or blue)
        #[arg(long)]
        color: Option<Color>,

        /// Keep only products of this size (small, medium or large)
        #[arg(long)]
        size: Option<Size>,

        /// Keep only products whose name contains this substring
        #[arg(long)]
        name_contains: Option<String>,

        /// Emit matches as JSON instead of a list
        #[arg(long)]
        json: bool,

        /// Evaluate items in parallel (useful for very large catalogs)
        #[arg(long)]
        parallel: bool,
    },

    /// Build a journal from the given entries and save it to a file
    Journal {
        /// Where to write the journal
        #[arg(long)]
        output: PathBuf,

        /// Overwrite the output file if it already exists
        #[arg(long)]
        force: bool,

        /// The entries, in order
        entries: Vec<String>,
    },

    /// Run a text file through the photocopier
    Copy {
        /// Text file to copy (one page per line)
        #[arg(long)]
        input: PathBuf,

        /// Number of copies to make
        #[arg(long, default_value = "1")]
        copies: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter {
            catalog,
            color,
            size,
            name_contains,
            json,
            parallel,
        } => handle_filter(catalog, color, size, name_contains, json, parallel)?,
        Commands::Journal {
            output,
            force,
            entries,
        } => handle_journal(output, force, entries)?,
        Commands::Copy { input, copies } => handle_copy(input, copies)?,
    }

    Ok(())
}

/// Handle the 'filter' command
fn handle_filter(
    catalog_path: Option<PathBuf>,
    color: Option<Color>,
    size: Option<Size>,
    name_contains: Option<String>,
    json: bool,
    parallel: bool,
) -> Result<()> {
    let catalog = match catalog_path {
        Some(path) => Catalog::load_from_file(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::sample(),
    };
    debug!("Catalog holds {} products", catalog.len());

    // Grow a conjunction from whatever the caller asked for. Each new
    // criterion is a new specification ANDed onto the tree; the filter
    // itself never changes.
    let mut spec: Box<dyn Specification<Product>> = Box::new(|_: &Product| true);
    if let Some(color) = color {
        spec = Box::new(spec.and(ColorSpec::new(color)));
    }
    if let Some(size) = size {
        spec = Box::new(spec.and(SizeSpec::new(size)));
    }
    if let Some(needle) = name_contains {
        spec = Box::new(spec.and(NameContainsSpec::new(needle)));
    }

    let filter = CatalogFilter::new();
    let matches: Vec<&Product> = if parallel {
        filter.filter_par(catalog.products(), &spec)
    } else {
        filter.filter(catalog.products(), &spec).collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        println!(
            "{} {} of {} products match",
            "✓".green(),
            matches.len(),
            catalog.len()
        );
        for product in &matches {
            println!(" - {} ({}, {})", product.name.bold(), product.color, product.size);
        }
    }

    Ok(())
}

/// Handle the 'journal' command
fn handle_journal(output: PathBuf, force: bool, entries: Vec<String>) -> Result<()> {
    if entries.is_empty() {
        bail!("No entries given; pass them as positional arguments");
    }

    let mut journal = journal::Journal::new();
    for text in &entries {
        let seq = journal.add_entry(text);
        debug!("Added entry {}", seq);
    }

    Persistence::new()
        .save(&journal, &output, force)
        .with_context(|| format!("Failed to save journal to {}", output.display()))?;

    println!(
        "{} Saved {} entries to {}",
        "✓".green(),
        journal.len(),
        output.display()
    );
    Ok(())
}

/// Handle the 'copy' command
fn handle_copy(input: PathBuf, copies: usize) -> Result<()> {
    let text = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let doc = devices::Document::from_text(name, &text);

    let mut copier = Photocopier::new();
    for _ in 0..copies {
        copier
            .copy(&doc)
            .with_context(|| format!("Failed to copy '{}'", doc.name))?;
    }

    println!(
        "{} Made {} {} of '{}'",
        "✓".green(),
        copies,
        if copies == 1 { "copy" } else { "copies" },
        doc.name
    );
    for line in copier.tray() {
        println!("  {}", line);
    }
    Ok(())
}
