mod debug_report;

use larder::{Context, FallbackPolicy, Normalizer, Options, RuleSet};
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let rules = match &config.rules {
        Some(path) => match RuleSet::from_path(path) {
            Ok(custom) => custom.merged_over(RuleSet::builtin()),
            Err(err) => {
                eprintln!("error: failed to load rules from {}: {err}", path.display());
                std::process::exit(1);
            }
        },
        None => RuleSet::builtin().clone(),
    };

    if let Some(store) = config.store.as_deref() {
        if !rules.has_store(store) {
            warn!(store, known = ?rules.stores(), "no rules for store, only default rules apply");
        }
    }

    let normalizer = Normalizer::new(rules).with_options(config.options);
    let context = Context { store_name: config.store.clone() };

    for item in &config.items {
        let run = normalizer.normalize_verbose_with(item, &context);
        if config.json {
            match serde_json::to_string(&run.result) {
                Ok(line) => println!("{line}"),
                Err(err) => {
                    eprintln!("error: failed to encode result: {err}");
                    std::process::exit(1);
                }
            }
        } else {
            debug_report::print_run(item, &run, config.color);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("LARDER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

struct CliConfig {
    items: Vec<String>,
    store: Option<String>,
    rules: Option<PathBuf>,
    options: Options,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let args = parse_arg_list(std::env::args().skip(1))?;

    let items = match args.item {
        Some(value) => vec![value],
        None => read_stdin_items()?,
    };

    if items.is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    let color = args.color.unwrap_or_else(|| io::stdout().is_terminal());
    Ok(CliConfig { items, store: args.store, rules: args.rules, options: args.options, json: args.json, color })
}

/// Flags plus the words of the item given on the command line.
#[derive(Debug, Default)]
struct ParsedArgs {
    item: Option<String>,
    store: Option<String>,
    rules: Option<PathBuf>,
    options: Options,
    json: bool,
    color: Option<bool>,
}

/// Options may appear before or after the item words; everything after `--`
/// is item text.
fn parse_arg_list(args: impl IntoIterator<Item = String>) -> Result<ParsedArgs, String> {
    let mut parsed = ParsedArgs::default();
    let mut words: Vec<String> = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("larder {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => parsed.color = Some(true),
            "--no-color" => parsed.color = Some(false),
            "--json" => parsed.json = true,
            "--explicit-match" => parsed.options.fallback = FallbackPolicy::ExplicitMatch,
            "--no-transliterate" => parsed.options.transliterate = false,
            "--store" | "-s" => {
                let value = args.next().ok_or_else(|| "error: --store expects a value".to_string())?;
                parsed.store = Some(value);
            }
            "--rules" | "-r" => {
                let value = args.next().ok_or_else(|| "error: --rules expects a value".to_string())?;
                parsed.rules = Some(PathBuf::from(value));
            }
            "--" => {
                words.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--store=") => {
                parsed.store = Some(arg.trim_start_matches("--store=").to_string());
            }
            _ if arg.starts_with("--rules=") => {
                parsed.rules = Some(PathBuf::from(arg.trim_start_matches("--rules=")));
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => words.push(arg),
        }
    }

    if parsed.store.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err("error: --store must not be empty".to_string());
    }

    let item = words.join(" ");
    if !item.trim().is_empty() {
        parsed.item = Some(item);
    }
    Ok(parsed)
}

/// One receipt item per non-blank line.
fn read_stdin_items() -> Result<Vec<String>, String> {
    let stdin = io::stdin();
    let mut items = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("error: failed to read stdin: {err}"))?;
        if !line.trim().is_empty() {
            items.push(line);
        }
    }
    Ok(items)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "larder {version}

Receipt item name normalizer.

Usage:
  larder [OPTIONS] <item words...> [OPTIONS]
  larder [OPTIONS] -- <item words...>
  larder [OPTIONS] < items.txt

Options:
  -s, --store <name>         Store the receipt came from (e.g. ALPHAMEGA, LIDL).
  -r, --rules <file>         JSON rule document layered over the built-in rules.
  --explicit-match           Keep a matching store rule even if it leaves the
                             name unchanged (default: fall back to defaults).
  --no-transliterate         Leave leftover Greek text as is.
  --json                     Print one JSON result per item.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

The words given on the command line form a single item. Use -- before
item text that itself starts with '-'. Without item words, items are read
from stdin, one per line.

Environment:
  LARDER_LOG                 Log filter (e.g. debug, larder=trace). Falls back
                             to RUST_LOG, then warn.

Exit codes:
  0  Success.
  1  Rule file or output error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
