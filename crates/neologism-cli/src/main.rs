//! neologism - inspect and edit context-free grammars from yacc files
//!
//! ## Commands
//!
//! - `rules`: List the rules of a grammar
//! - `symbols`: List symbols, terminals or nonterminals
//! - `sentences`: Enumerate the sentences the grammar derives
//! - `check`: Summarise start symbol, sizes and finiteness
//! - `prune`: Make symbols terminal or remove them, then print the rules

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use neologism_core::{BisonConfig, Grammar, Rule};
use serde::Serialize;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "neologism")]
#[command(version = neologism_core::VERSION)]
#[command(about = "Dynamically modifiable context-free grammars", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// bison executable used to read yacc files
    #[arg(long, global = true, env = "NEOLOGISM_BISON", default_value = "bison")]
    bison: PathBuf,

    /// PATH for the bison process (default: inherit)
    #[arg(long, global = true, env = "NEOLOGISM_BISON_PATH")]
    bison_path: Option<OsString>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the rules of a grammar
    Rules {
        /// Yacc file to load
        file: PathBuf,

        /// Only rules mentioning this symbol
        #[arg(long)]
        containing: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List the symbols of a grammar
    Symbols {
        /// Yacc file to load
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = SymbolKind::All)]
        kind: SymbolKind,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Enumerate the sentences of a grammar
    Sentences {
        /// Yacc file to load
        file: PathBuf,

        /// Derive from this symbol instead of $accept
        #[arg(long)]
        start: Option<String>,

        /// Print at most this many sentences
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Summarise a grammar
    Check {
        /// Yacc file to load
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Make symbols terminal or remove them, then print the remaining rules
    Prune {
        /// Yacc file to load
        file: PathBuf,

        /// Symbols to turn into terminals
        #[arg(long = "terminal", value_name = "SYMBOL")]
        terminals: Vec<String>,

        /// Symbols to remove
        #[arg(long = "remove", value_name = "SYMBOL")]
        removals: Vec<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SymbolKind {
    All,
    Terminals,
    Nonterminals,
}

#[derive(Debug, Serialize)]
struct GrammarSummary {
    start_symbol: Option<String>,
    rules: usize,
    symbols: usize,
    terminals: usize,
    nonterminals: usize,
    finite: bool,
    cycle: Option<Vec<String>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    neologism_core::init_tracing(cli.json, level);

    let mut bison = BisonConfig::new(&cli.bison);
    if let Some(path) = &cli.bison_path {
        bison = bison.with_search_path(path);
    }

    match cli.command {
        Commands::Rules {
            file,
            containing,
            format,
        } => cmd_rules(&file, &bison, containing.as_deref(), format),
        Commands::Symbols { file, kind, format } => cmd_symbols(&file, &bison, kind, format),
        Commands::Sentences {
            file,
            start,
            limit,
            format,
        } => cmd_sentences(&file, &bison, start.as_deref(), limit, format),
        Commands::Check { file, format } => cmd_check(&file, &bison, format),
        Commands::Prune {
            file,
            terminals,
            removals,
            format,
        } => cmd_prune(&file, &bison, &terminals, &removals, format),
    }
}

fn load(file: &Path, bison: &BisonConfig) -> Result<Grammar> {
    let mut grammar = Grammar::new();
    grammar
        .load_yacc_file_with(file, bison)
        .with_context(|| format!("Failed to load yacc file {:?}", file))?;
    debug!(rules = grammar.rule_count(), "grammar loaded");
    Ok(grammar)
}

fn cmd_rules(
    file: &Path,
    bison: &BisonConfig,
    containing: Option<&str>,
    format: Format,
) -> Result<()> {
    let grammar = load(file, bison)?;
    let rules = match containing {
        Some(symbol) => grammar.rules_containing(symbol),
        None => grammar.rules(),
    };
    print_rules(&rules, format)
}

fn cmd_symbols(file: &Path, bison: &BisonConfig, kind: SymbolKind, format: Format) -> Result<()> {
    let grammar = load(file, bison)?;
    let symbols = match kind {
        SymbolKind::All => grammar.symbols(),
        SymbolKind::Terminals => grammar.terminals(),
        SymbolKind::Nonterminals => grammar.nonterminals(),
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&symbols)?),
        Format::Text => {
            for symbol in &symbols {
                println!("{symbol}");
            }
        }
    }
    Ok(())
}

fn cmd_sentences(
    file: &Path,
    bison: &BisonConfig,
    start: Option<&str>,
    limit: Option<usize>,
    format: Format,
) -> Result<()> {
    let mut grammar = load(file, bison)?;
    if let Some(symbol) = start {
        grammar
            .set_start_symbol(symbol)
            .with_context(|| format!("Cannot start from '{}'", symbol))?;
    }

    let sentences: Vec<Vec<String>> = grammar
        .sentences()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&sentences)?),
        Format::Text => {
            for sentence in &sentences {
                println!("{}", sentence.join(" "));
            }
        }
    }
    Ok(())
}

fn cmd_check(file: &Path, bison: &BisonConfig, format: Format) -> Result<()> {
    let grammar = load(file, bison)?;
    let summary = summarize(&grammar);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        Format::Text => {
            println!(
                "Start symbol:  {}",
                summary.start_symbol.as_deref().unwrap_or("(none)")
            );
            println!("Rules:         {}", summary.rules);
            println!(
                "Symbols:       {} ({} terminals, {} nonterminals)",
                summary.symbols, summary.terminals, summary.nonterminals
            );
            match &summary.cycle {
                None => println!("Finite:        yes"),
                Some(cycle) => println!("Finite:        no ({})", cycle.join(" -> ")),
            }
        }
    }
    Ok(())
}

fn cmd_prune(
    file: &Path,
    bison: &BisonConfig,
    terminals: &[String],
    removals: &[String],
    format: Format,
) -> Result<()> {
    let mut grammar = load(file, bison)?;
    prune(&mut grammar, terminals, removals)?;
    print_rules(&grammar.rules(), format)
}

fn prune(grammar: &mut Grammar, terminals: &[String], removals: &[String]) -> Result<()> {
    for symbol in terminals {
        grammar
            .make_symbol_terminal(symbol)
            .with_context(|| format!("Cannot make '{}' terminal", symbol))?;
    }
    for symbol in removals {
        grammar
            .remove_symbol(symbol)
            .with_context(|| format!("Cannot remove '{}'", symbol))?;
    }
    Ok(())
}

fn summarize(grammar: &Grammar) -> GrammarSummary {
    let cycle = grammar.find_cycle();
    GrammarSummary {
        start_symbol: grammar.start_symbol().map(str::to_string),
        rules: grammar.rule_count(),
        symbols: grammar.symbols().len(),
        terminals: grammar.terminals().len(),
        nonterminals: grammar.nonterminals().len(),
        finite: cycle.is_none(),
        cycle,
    }
}

fn print_rules(rules: &BTreeSet<Rule>, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(rules)?),
        Format::Text => {
            for rule in rules {
                println!("{rule}");
            }
        }
    }
    Ok(())
}
