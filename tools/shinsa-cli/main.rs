use clap::{Parser, Subcommand};
use itertools::Itertools;
use shinsa::prelude::*;
use std::fs;

/// Inspect, check, and evaluate workflow graph documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a census of the nodes and edges in a graph document
    Inspect {
        /// Path to the graph document JSON file
        document: String,
    },
    /// Re-validate every stored edge against the connection rules
    Check {
        /// Path to the graph document JSON file
        document: String,
    },
    /// Evaluate a condition node against a data context
    Decide {
        /// Path to the graph document JSON file
        document: String,
        /// Id of the condition node to evaluate
        #[arg(long)]
        node: String,
        /// Path to the field registry JSON file (array of field specs)
        #[arg(long)]
        fields: String,
        /// Path to the data context JSON file (flat key-value object)
        #[arg(long)]
        data: String,
        /// Print the full decision trace instead of just the chosen branch
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { document } => inspect(&document),
        Command::Check { document } => check(&document),
        Command::Decide {
            document,
            node,
            fields,
            data,
            trace,
        } => decide(&document, &node, &fields, &data, trace),
    }
}

fn load_document(path: &str) -> GraphDocument {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read document '{}': {}", path, e))
    });
    GraphDocument::from_json(&json).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to parse document '{}': {}", path, e))
    })
}

fn inspect(path: &str) {
    let document = load_document(path);

    println!("Nodes: {}", document.nodes.len());
    let census = document
        .nodes
        .iter()
        .map(|node| node.kind)
        .counts()
        .into_iter()
        .sorted_by_key(|(kind, _)| kind.display_name())
        .collect::<Vec<_>>();
    for (kind, count) in census {
        println!("  {:<12} {}", kind, count);
    }

    println!("Edges: {}", document.edges.len());
    for edge in &document.edges {
        println!("  {} -> {}", edge.source, edge.target);
    }
}

fn check(path: &str) {
    let document = load_document(path);

    // Replay the stored edges one by one so ordering violations (a second
    // inbound edge into a non-merge target) are caught as well.
    let mut accepted: Vec<Edge> = Vec::new();
    let mut violations = Vec::new();
    for edge in &document.edges {
        let link = Link::new(edge.source.clone(), edge.target.clone());
        match validate_connection(&link, &document.nodes, &accepted) {
            Ok(()) => accepted.push(edge.clone()),
            Err(reason) => violations.push((edge, reason)),
        }
    }

    println!(
        "Checked {} edges: {} valid, {} invalid",
        document.edges.len(),
        accepted.len(),
        violations.len()
    );
    for (edge, reason) in &violations {
        println!("  {} -> {}: {}", edge.source, edge.target, reason);
    }
    if !violations.is_empty() {
        std::process::exit(1);
    }
}

fn decide(document_path: &str, node_id: &str, fields_path: &str, data_path: &str, trace: bool) {
    let document = load_document(document_path);

    let registry_json = fs::read_to_string(fields_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read field registry '{}': {}",
            fields_path, e
        ))
    });
    let registry = FieldRegistry::from_json(&registry_json).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to parse field registry '{}': {}",
            fields_path, e
        ))
    });

    let data_json = fs::read_to_string(data_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read data context '{}': {}", data_path, e))
    });
    let context: DataContext = serde_json::from_str(&data_json).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to parse data context '{}': {}",
            data_path, e
        ))
    });

    let node = document
        .nodes
        .iter()
        .find(|n| n.id == node_id)
        .unwrap_or_else(|| {
            exit_with_error(&format!("Node '{}' not found in the document", node_id))
        });
    let NodeConfig::Condition(config) = &node.config else {
        exit_with_error(&format!("Node '{}' is not a condition node", node_id))
    };

    if trace {
        println!("{}", explain(config, &registry, &context));
    } else {
        let selection = select_branch(config, &registry, &context);
        println!(
            "Branch: {} [{}]{}",
            selection.label(),
            selection.id(),
            if selection.is_default() { " (default)" } else { "" }
        );
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
