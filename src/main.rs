//! gsheet2md CLI
//!
//! Command-line front end for the fetch -> clean -> render -> write
//! pipeline. Commands: `init`, `fetch`, `config`, `reset`.

use std::path::{Path, PathBuf};
use std::process;

use gsheet2md::{
    export_url, write_markdown, ConfigStore, Converter, ConverterBuilder, SheetConfig,
    SheetFetcher, SheetToMdError, Table,
};

const DEFAULT_PREVIEW_ROWS: usize = 10;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let store = match ConfigStore::default_location() {
        Ok(store) => store,
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    };

    let result = match args[1].as_str() {
        "init" => cmd_init(&store, &args[2..]),
        "fetch" => cmd_fetch(&store, &args[2..]),
        "config" => cmd_config(&store),
        "reset" => cmd_reset(&store),
        "help" | "--help" | "-h" => {
            print_usage(&args[0]);
            return;
        }
        other => {
            eprintln!("Error: Unknown command: {}", other);
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        handle_error(e);
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  init --sheet-id <ID> --out <path> [--gid <GID>]");
    eprintln!("                        Save sheet id + output path (one-time)");
    eprintln!("  fetch [--preview-rows <N>]");
    eprintln!("                        Fetch the sheet and update the markdown file");
    eprintln!("  config                Show current config");
    eprintln!("  reset                 Delete saved config");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} init --sheet-id 1AbC... --out ~/notes/table.md", program);
    eprintln!("  {} fetch --preview-rows 5", program);
}

/// Save sheet id + output path (overwrites any existing config).
fn cmd_init(store: &ConfigStore, args: &[String]) -> Result<(), SheetToMdError> {
    let mut sheet_id: Option<String> = None;
    let mut out: Option<String> = None;
    let mut gid: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--sheet-id" => {
                sheet_id = Some(take_value(args, i, "--sheet-id")?);
                i += 2;
            }
            "--out" => {
                out = Some(take_value(args, i, "--out")?);
                i += 2;
            }
            "--gid" => {
                gid = Some(take_value(args, i, "--gid")?);
                i += 2;
            }
            other => {
                return Err(SheetToMdError::Config(format!("unknown option: {}", other)));
            }
        }
    }

    let sheet_id =
        sheet_id.ok_or_else(|| SheetToMdError::Config("--sheet-id is required".to_string()))?;
    let out = out.ok_or_else(|| SheetToMdError::Config("--out is required".to_string()))?;

    let config = SheetConfig {
        sheet_id,
        out: absolutize(Path::new(&out))?,
        gid,
    };
    store.save(&config)?;

    println!("Saved config:");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

/// Run the full pipeline: load config, fetch, clean, preview, render, write.
fn cmd_fetch(store: &ConfigStore, args: &[String]) -> Result<(), SheetToMdError> {
    // Parse options
    let mut preview_rows = DEFAULT_PREVIEW_ROWS;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--preview-rows" => {
                let value = take_value(args, i, "--preview-rows")?;
                preview_rows = value.parse::<usize>().map_err(|_| {
                    SheetToMdError::Config(format!("invalid --preview-rows value: {}", value))
                })?;
                i += 2;
            }
            other => {
                return Err(SheetToMdError::Config(format!("unknown option: {}", other)));
            }
        }
    }

    // Load config
    let config = store.load()?;

    println!("Sheet ID: {}", config.sheet_id);
    println!("Output:   {}", config.out.display());
    if let Some(ref gid) = config.gid {
        println!("GID:      {}", gid);
    }

    // Fetch
    println!();
    println!("Fetching sheet...");
    let url = export_url(&config.sheet_id, config.gid.as_deref());
    let fetcher = SheetFetcher::new()?;
    let csv = fetcher.fetch_csv(&url)?;

    // Parse + clean
    let converter = ConverterBuilder::new().build()?;
    let table = converter.clean_table(converter.parse_csv(&csv)?);
    println!("Fetched successfully.");
    println!("Shape: {} rows x {} cols", table.row_count(), table.col_count());

    // Preview (presentation only, not part of the output file)
    println!();
    print_preview(&converter, &table, preview_rows)?;

    // Render + write
    println!();
    println!("Rendering markdown...");
    let markdown = converter.render_markdown(&table)?;

    println!("Writing file...");
    write_markdown(&config.out, &markdown)?;

    println!();
    println!("Done. Updated: {}", config.out.display());
    Ok(())
}

/// Print current config as pretty JSON.
fn cmd_config(store: &ConfigStore) -> Result<(), SheetToMdError> {
    let config = store.load()?;
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

/// Delete saved config. Succeeds whether or not it existed.
fn cmd_reset(store: &ConfigStore) -> Result<(), SheetToMdError> {
    if store.delete()? {
        println!("Deleted config.");
    } else {
        println!("No config found.");
    }
    Ok(())
}

fn take_value(args: &[String], i: usize, flag: &str) -> Result<String, SheetToMdError> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| SheetToMdError::Config(format!("{} requires a value", flag)))
}

/// Resolve a possibly-relative path against the current directory.
fn absolutize(path: &Path) -> Result<PathBuf, SheetToMdError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn print_preview(
    converter: &Converter,
    table: &Table,
    rows: usize,
) -> Result<(), SheetToMdError> {
    let shown = rows.min(table.row_count());
    println!("Preview (showing {}/{} rows):", shown, table.row_count());
    print!("{}", converter.render_markdown(&table.head(rows))?);
    Ok(())
}

fn handle_error(error: SheetToMdError) {
    match error {
        SheetToMdError::ConfigMissing => {
            eprintln!("No config found. Run:");
            eprintln!("  gsheet2md init --sheet-id <ID> --out <path/to/output.md>");
        }
        SheetToMdError::ConfigCorrupt(e) => {
            eprintln!("Config Error: {}", e);
            eprintln!("The config file exists but could not be parsed.");
            eprintln!("Run `gsheet2md reset` and initialize again.");
        }
        SheetToMdError::Fetch(e) => {
            eprintln!("Fetch Error: {}", e);
            eprintln!("Please check your network connection and the sheet id.");
        }
        SheetToMdError::FetchStatus { status, url } => {
            eprintln!("Fetch Error: HTTP {} for {}", status, url);
            eprintln!("Make sure the spreadsheet is published and readable without authentication.");
        }
        SheetToMdError::Parse(msg) => {
            eprintln!("Parse Error: {}", msg);
            eprintln!("The response body is not valid CSV.");
        }
        SheetToMdError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
        }
        SheetToMdError::Io(e) => {
            eprintln!("I/O Error: {}", e);
        }
        SheetToMdError::Write { path, source } => {
            eprintln!("Write Error: {} ({})", path.display(), source);
            eprintln!("Please check permissions and available disk space.");
        }
    }
}
