//! Command execution for the `ipaclones` binary.
//!
//! Each command loads a dump, runs one query against the frozen graph and
//! renders the result as a table or as JSON.

use crate::graph::CloneGraph;
use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use compact_str::CompactString;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

fn load_graph(dump: &Path) -> Result<CloneGraph> {
    CloneGraph::from_path(dump)
        .with_context(|| format!("failed to load IPA clones dump \"{}\"", dump.display()))
}

fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

#[derive(Serialize)]
struct SpawnsReport<'a> {
    symbol: &'a str,
    spawns: &'a BTreeMap<CompactString, bool>,
}

/// Resolves the surviving compiled instances of `name`.
///
/// Exit code 0 on success, 1 when the symbol does not appear in the dump.
pub fn run_spawns(dump: &Path, name: &str, json: bool) -> Result<i32> {
    let graph = load_graph(dump)?;
    let Some(spawns) = graph.resolve_spawns(name) else {
        if json {
            let report = serde_json::json!({ "symbol": name, "spawns": null });
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            eprintln!(
                "{} \"{name}\" does not appear in the dump",
                "warning:".yellow().bold()
            );
        }
        return Ok(1);
    };

    if json {
        let report = SpawnsReport {
            symbol: name,
            spawns: &spawns,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    println!("\n{}", format!("Spawns of \"{name}\"").bold().underline());
    let mut table = create_table(vec!["Symbol", "IPA optimized"]);
    for (spawn, optimized) in &spawns {
        let flag = if *optimized {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            Cell::new("no").fg(Color::Green)
        };
        table.add_row(vec![Cell::new(spawn.as_str()), flag]);
    }
    println!("{table}");
    Ok(0)
}

#[derive(Serialize)]
struct RemovedReport<'a> {
    symbol: &'a str,
    all_removed: bool,
}

/// Checks whether every compiled instance of `name` was removed.
///
/// Predicate-style exit code: 0 when all instances were removed, 1
/// otherwise (including when the symbol is unknown).
pub fn run_removed(dump: &Path, name: &str, json: bool) -> Result<i32> {
    let graph = load_graph(dump)?;
    let all_removed = graph.all_removed(name);

    if json {
        let report = RemovedReport {
            symbol: name,
            all_removed,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if all_removed {
        println!(
            "{} every instance of \"{name}\" was removed by the optimizer",
            "removed:".red().bold()
        );
    } else {
        println!(
            "{} \"{name}\" has surviving instances (or never appears)",
            "present:".green().bold()
        );
    }
    Ok(i32::from(!all_removed))
}

/// Prints summary statistics for a dump.
pub fn run_stats(dump: &Path, json: bool) -> Result<i32> {
    let graph = load_graph(dump)?;
    let stats = graph.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(0);
    }

    println!("\n{}", "Dump statistics".bold().underline());
    let mut table = create_table(vec!["Metric", "Count"]);
    let rows: [(&str, usize); 11] = [
        ("Nodes", stats.nodes),
        ("Edges", stats.edges),
        ("  inlining to", stats.inlined),
        ("  isra", stats.isra),
        ("  constprop", stats.constprop),
        ("  part", stats.part),
        ("  duplicate opt clones", stats.duplicate_opt_clones),
        ("Removed nodes", stats.removed_nodes),
        ("IPA opt clone nodes", stats.opt_clone_nodes),
        ("Cyclic components", stats.components),
        ("Largest component", stats.largest_component),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    println!("{table}");
    Ok(0)
}
