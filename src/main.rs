use clap::Parser;
use std::fs;

use unicharmap::binary::{read_snapshot, write_snapshot};
use unicharmap::{load_unicharset_file, tokenize, TableStats, UnicharMap};

mod cli;
use cli::display::{
    failure, format_size, id_value, key_label, row, section_bot, section_top, success, themed_err,
    BOLD, GRAY,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build { input, output } => run_build(&input, &output),
        Commands::Inspect { file, json } => run_inspect(&file, json),
        Commands::Lookup { file, repr, length } => run_lookup(&file, &repr, length),
        Commands::Tokenize { file, text } => run_tokenize(&file, &text),
    };

    if let Err(e) = result {
        failure(&e);
        std::process::exit(1);
    }
}

fn load(file: &str) -> Result<UnicharMap, String> {
    read_snapshot(file).map_err(|e| format!("Failed to read {}: {}", file, e))
}

fn file_size(path: &str) -> Result<usize, String> {
    fs::metadata(path)
        .map(|m| m.len() as usize)
        .map_err(|e| format!("Failed to stat {}: {}", path, e))
}

fn run_build(input: &str, output: &str) -> Result<(), String> {
    let map =
        load_unicharset_file(input).map_err(|e| format!("Failed to load {}: {}", input, e))?;
    write_snapshot(output, &map).map_err(|e| format!("Failed to write {}: {}", output, e))?;

    let size = file_size(output)?;
    success(&format!(
        "Built {} ({} entries, {})",
        output,
        map.len(),
        format_size(size)
    ));
    Ok(())
}

fn run_inspect(file: &str, json: bool) -> Result<(), String> {
    let map = load(file)?;
    let stats = TableStats::collect(&map);

    if json {
        return print_json(&stats);
    }

    let size = file_size(file)?;
    let id_range = match (stats.min_id, stats.max_id) {
        (Some(lo), Some(hi)) => format!("{}..={}", lo, hi),
        _ => "-".to_string(),
    };

    section_top(file);
    row(&format!(" Size          {}", format_size(size)));
    row(&format!(" Entries       {}", stats.entries));
    row(&format!(" Ligatures     {}", stats.ligatures));
    row(&format!(" Non-UTF-8     {}", stats.non_utf8));
    row(&format!(" Ids           {}", id_range));
    row(&format!(" Longest key   {} bytes", stats.longest_key()));
    section_bot();

    section_top("KEY LENGTHS");
    for (len, &count) in stats.key_lengths.iter().enumerate().skip(1) {
        if count > 0 {
            row(&format!(" {:>2} bytes  {:>8}", len, count));
        }
    }
    section_bot();
    Ok(())
}

#[cfg(feature = "serde_json")]
fn print_json(stats: &TableStats) -> Result<(), String> {
    let out = serde_json::to_string_pretty(stats).map_err(|e| e.to_string())?;
    println!("{}", out);
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn print_json(_stats: &TableStats) -> Result<(), String> {
    Err("JSON output needs the serde_json feature".to_string())
}

fn run_lookup(file: &str, repr: &str, length: Option<usize>) -> Result<(), String> {
    let map = load(file)?;
    let length = length.unwrap_or(repr.len());
    if !map.contains(repr, length) {
        return Err(format!(
            "{:?} (first {} bytes) is not in the table",
            repr, length
        ));
    }
    println!("{}", map.lookup(repr, length));
    Ok(())
}

fn run_tokenize(file: &str, text: &str) -> Result<(), String> {
    let map = load(file)?;
    let input = text.as_bytes();

    let mut unknown = 0;
    for unit in tokenize(&map, input) {
        if !unit.is_known() {
            unknown += 1;
        }
        println!(
            "{:>6}  {:>2}  {:<12}  {}",
            unit.offset,
            unit.len,
            key_label(unit.bytes(input)),
            id_value(unit.id, unit.is_known())
        );
    }

    if unknown > 0 {
        eprintln!(
            "{} {} unit(s) matched nothing",
            themed_err(GRAY, &[BOLD], "!"),
            unknown
        );
    }
    Ok(())
}
