//! Wayfinder CLI: inspect a navigation graph and plan routes from the shell
//!
//! Loads a JSON graph document, optionally a YAML navigator config, and runs
//! one command against it.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wayfinder::persistence;
use wayfinder::{FloorId, Navigator, NavigatorConfig, Node, Point};

#[derive(Parser)]
#[command(name = "wayfinder", version, about = "Wayfinder indoor navigation CLI")]
struct Cli {
    /// Graph document (JSON)
    #[arg(long, global = true, env = "WAYFINDER_GRAPH")]
    graph: Option<PathBuf>,

    /// Navigator configuration (YAML)
    #[arg(long, global = true, env = "WAYFINDER_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List nodes and their neighbors
    Nodes {
        /// Only nodes on this floor
        #[arg(long)]
        floor: Option<String>,
    },
    /// List floors present in the graph
    Floors,
    /// Plan a route between two points, given as `x,y`
    Navigate {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
    },
    /// Check the adjacency invariants of the graph
    Validate,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{}`: {}", s, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{}`: {}", s, e))?;
    Ok(Point::new(x, y))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => NavigatorConfig::from_path(path)
            .with_context(|| format!("reading config {:?}", path))?,
        None => NavigatorConfig::default(),
    };

    let Some(graph_path) = &cli.graph else {
        bail!("no graph document given (use --graph or WAYFINDER_GRAPH)");
    };
    let store = persistence::load_from_path(graph_path)
        .with_context(|| format!("loading graph {:?}", graph_path))?;
    let mut navigator = Navigator::with_store(store, config);

    match cli.command {
        Commands::Nodes { floor } => run_nodes(&navigator, floor.map(FloorId::new), &cli.format),
        Commands::Floors => run_floors(&navigator, &cli.format),
        Commands::Navigate { from, to } => run_navigate(&mut navigator, from, to, &cli.format),
        Commands::Validate => {
            navigator.store().validate()?;
            println!(
                "OK: {} node(s), {} edge(s)",
                navigator.store().node_count(),
                navigator.store().edge_count()
            );
            Ok(())
        }
    }
}

fn node_json(node: &Node) -> serde_json::Value {
    json!({
        "id": node.id,
        "coords": node.coords,
        "floor": node.floor,
        "type": node.tag,
        "neighbors": node.neighbors(),
    })
}

fn print_nodes<'a>(nodes: impl Iterator<Item = &'a Node>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = nodes.map(node_json).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["id", "coords", "floor", "type", "neighbors"]);

            let mut count = 0;
            for node in nodes {
                let neighbors: Vec<String> =
                    node.neighbors().iter().map(|n| n.as_u64().to_string()).collect();
                table.add_row(vec![
                    node.id.as_u64().to_string(),
                    node.coords.to_string(),
                    node.floor.to_string(),
                    node.tag.to_string(),
                    neighbors.join(" "),
                ]);
                count += 1;
            }

            println!("{}", table);
            println!("{} node(s)", count);
        }
    }
    Ok(())
}

fn run_nodes(navigator: &Navigator, floor: Option<FloorId>, format: &OutputFormat) -> Result<()> {
    let nodes = navigator
        .store()
        .all_nodes()
        .filter(|n| floor.as_ref().map_or(true, |f| n.floor == *f));
    print_nodes(nodes, format)
}

fn run_floors(navigator: &Navigator, format: &OutputFormat) -> Result<()> {
    let floors = navigator.store().floors();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&floors)?),
        OutputFormat::Table => {
            for floor in floors {
                let count = navigator.store().nodes_on_floor(&floor).len();
                println!("{}\t{} node(s)", floor, count);
            }
        }
    }
    Ok(())
}

fn run_navigate(
    navigator: &mut Navigator,
    from: Point,
    to: Point,
    format: &OutputFormat,
) -> Result<()> {
    let route = navigator.navigate(from, to)?;
    print_nodes(route.into_iter(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3,4").unwrap(), Point::new(3.0, 4.0));
        assert_eq!(parse_point(" -1.5 , 2 ").unwrap(), Point::new(-1.5, 2.0));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_cli_parses_navigate() {
        let cli = Cli::try_parse_from([
            "wayfinder", "--graph", "g.json", "navigate", "0,0", "3,-4",
        ])
        .unwrap();
        match cli.command {
            Commands::Navigate { from, to } => {
                assert_eq!(from, Point::new(0.0, 0.0));
                assert_eq!(to, Point::new(3.0, -4.0));
            }
            _ => panic!("expected navigate"),
        }
    }
}
