// src/main.rs
use anyhow::{anyhow, Context};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use smartsheet_helpers::config::{ClientConfig, Command, CommandLineInput};
use smartsheet_helpers::formatting::{sheet_to_string, write_json, JsonStyle, SheetFormatOption};
use smartsheet_helpers::resources::{
    attachment_map, attachment_map_to_string, download_to_dir, find_first_folder_by_name,
    find_folders_by_name, find_sheets_by_name, find_workspace_by_name, get_sheet_no_rows,
    get_whole_sheet, populate_if_needed,
};
use smartsheet_helpers::{KeyedMap, Labeled, SheetId, SmartsheetApi, SmartsheetHttpClient};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("smartsheet_helpers.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // Command output goes to stdout; keep log lines out of it.
    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn parse_sheet_id(raw: &str) -> anyhow::Result<SheetId> {
    SheetId::parse(raw).with_context(|| format!("'{}' is not a sheet id", raw))
}

fn report_warnings<K, V>(map: &KeyedMap<K, V>)
where
    K: std::hash::Hash + Eq,
{
    for warning in map.warnings() {
        eprintln!("⚠️  {}", warning);
    }
}

fn find_folder(api: &dyn SmartsheetApi, name: &str, all: bool) -> anyhow::Result<()> {
    if all {
        let folders = find_folders_by_name(api, name)?;
        if folders.is_empty() {
            return Err(anyhow!("No home folder named '{}'", name));
        }
        for folder in &folders {
            println!(
                "{} {}",
                folder.label(),
                folder.permalink.as_deref().unwrap_or_default()
            );
        }
        return Ok(());
    }

    let folder = find_first_folder_by_name(api, name)?
        .ok_or_else(|| anyhow!("No home folder named '{}'", name))?;
    let folder = populate_if_needed(api, folder)?;
    write_json(io::stdout().lock(), &folder, JsonStyle::Pretty)?;
    Ok(())
}

fn find_workspace(api: &dyn SmartsheetApi, name: &str) -> anyhow::Result<()> {
    let workspace = find_workspace_by_name(api, name)?
        .ok_or_else(|| anyhow!("No workspace named '{}'", name))?;
    write_json(io::stdout().lock(), &workspace, JsonStyle::Pretty)?;
    Ok(())
}

fn find_sheet(api: &dyn SmartsheetApi, name: &str) -> anyhow::Result<()> {
    let sheets = find_sheets_by_name(api, name)?;
    if sheets.is_empty() {
        return Err(anyhow!("No sheet named '{}'", name));
    }
    for sheet in &sheets {
        println!(
            "{} {}",
            sheet.label(),
            sheet.permalink.as_deref().unwrap_or_default()
        );
    }
    Ok(())
}

fn show_sheet(api: &dyn SmartsheetApi, raw_id: &str, columns: bool, rows: bool) -> anyhow::Result<()> {
    let sheet_id = parse_sheet_id(raw_id)?;
    let sheet = if rows {
        get_whole_sheet(api, sheet_id)?
    } else {
        get_sheet_no_rows(api, sheet_id)?
    };

    let options = match (columns, rows) {
        (true, true) => vec![SheetFormatOption::All],
        (true, false) => vec![SheetFormatOption::WithColumns],
        (false, true) => vec![SheetFormatOption::WithRowContent],
        (false, false) => Vec::new(),
    };
    println!("{}", sheet_to_string(&sheet, Some(api), &options)?);
    Ok(())
}

fn list_attachments(api: &dyn SmartsheetApi, raw_id: &str) -> anyhow::Result<()> {
    let sheet_id = parse_sheet_id(raw_id)?;
    let map = attachment_map(api, sheet_id, |attachment| attachment.name.clone())?;
    report_warnings(&map);
    print!("{}", attachment_map_to_string(&map));
    Ok(())
}

fn download_all(api: &dyn SmartsheetApi, raw_id: &str, dir: &Path) -> anyhow::Result<()> {
    let sheet_id = parse_sheet_id(raw_id)?;
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let map = attachment_map(api, sheet_id, |attachment| attachment.name.clone())?;
    report_warnings(&map);

    let mut total_bytes = 0u64;
    for attachment in map.values() {
        // Listings omit the short-lived download URL.
        let attachment = api.get_attachment(sheet_id, attachment.id)?;
        let mut target: Option<PathBuf> = None;
        match download_to_dir(api, dir, &attachment, |path| target = Some(path.to_path_buf())) {
            Ok(bytes) => {
                total_bytes += bytes;
                println!("✓ {} ({} bytes)", attachment.name, bytes);
            }
            Err(e) => {
                if let Some(path) = target.filter(|p| p.exists()) {
                    let _ = fs::remove_file(&path);
                }
                return Err(e).with_context(|| format!("downloading {}", attachment.label()));
            }
        }
    }

    println!(
        "📄 Downloaded {} attachments ({} bytes) to {}",
        map.len(),
        total_bytes,
        dir.display()
    );
    Ok(())
}

fn run(cli: &CommandLineInput) -> anyhow::Result<()> {
    let config = ClientConfig::resolve(cli)?;
    let client = SmartsheetHttpClient::new(&config)?;
    log::debug!("Using {} with token {}", client.base_url(), config.access_token);
    let api: &dyn SmartsheetApi = &client;

    match &cli.command {
        Command::FindFolder { name, all } => find_folder(api, name, *all),
        Command::FindWorkspace { name } => find_workspace(api, name),
        Command::FindSheet { name } => find_sheet(api, name),
        Command::ShowSheet {
            sheet_id,
            columns,
            rows,
        } => show_sheet(api, sheet_id, *columns, *rows),
        Command::Attachments { sheet_id } => list_attachments(api, sheet_id),
        Command::Download { sheet_id, dir } => download_all(api, sheet_id, dir),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    // Body tracing is logged at debug level.
    setup_logging(cli.verbose || cli.trace)?;

    run(&cli)
}
