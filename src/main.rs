use itertools::Itertools;
use kaigi::prelude::*;
use std::env;
use std::io::{self, Write};

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: cargo run -- [path/to/agenda.json] [path/to/metadata.json]");
        std::process::exit(1);
    }

    let agenda_path = args.get(1).map(String::as_str).unwrap_or("agenda.json");
    let metadata_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("decision_tree_metadata.json");

    println!("Loading agenda from: {}", agenda_path);

    let document = match AgendaDocument::from_file(agenda_path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to load agenda: {}", e);
            std::process::exit(1);
        }
    };

    let decision_map = DecisionMap::derive(&document);
    if let Err(e) = decision_map.save(metadata_path) {
        eprintln!("Failed to save decision map metadata: {}", e);
        std::process::exit(1);
    }

    println!(
        "Loaded agenda '{}' ({} nodes) and saved metadata to '{}'.",
        document.agenda_id,
        document.nodes.len(),
        metadata_path
    );

    // Command loop
    loop {
        let Some(action) =
            read_command("\nType 'chat' to run the agenda, 'query' to inspect a node, or 'exit' to quit: ")
        else {
            break;
        };

        match action.to_lowercase().as_str() {
            "exit" => break,
            "chat" => run_chat(&document),
            "query" => run_query(&decision_map),
            _ => println!("Unknown command. Use 'chat', 'query', or 'exit'."),
        }
    }
}

fn run_chat(document: &AgendaDocument) {
    println!("\nAgenda session started. Type 'exit' at any text question to quit.");

    let mut terminal = TerminalIo;
    let outcome = Interpreter::new(document, &mut terminal).run();

    match &outcome.state {
        SessionState::Ended => println!("\nProcess complete."),
        SessionState::Exhausted => println!("\nNo further node; session over."),
        SessionState::Aborted => println!("\nSession aborted."),
        SessionState::NodeNotFound(id) => println!("\nNode '{}' not found.", id),
        SessionState::UnsupportedType { node_id, node_type } => {
            println!("\nUnsupported node type '{}' at node '{}'.", node_type, node_id)
        }
        SessionState::Active(_) => {}
    }

    if outcome.responses.is_empty() {
        println!("No responses recorded.");
    } else {
        println!("\nYour responses:");
        for (node_id, response) in &outcome.responses {
            println!("- {}: {}", node_id, response);
        }
    }
}

fn run_query(decision_map: &DecisionMap) {
    let query = QueryService::new(decision_map);

    println!("\nAvailable nodes in this agenda:");
    for summary in query.list() {
        println!("{}. {} - {}", summary.position, summary.id, summary.preview);
    }

    let Some(key) = read_command("\nEnter the number or ID of the node to inspect: ") else {
        return;
    };

    match query.resolve(&key) {
        Some((id, entry)) => {
            println!("\nNode ID: {}", id);
            println!("Prompt: {}", entry.prompt);
            println!("Type: {}", entry.node_type);
            println!("Next nodes: [{}]", entry.next_nodes.iter().join(", "));
            println!("Previous nodes: [{}]", entry.prev_nodes.iter().join(", "));
        }
        None => println!("Invalid selection."),
    }
}

/// Prints an inline prompt and reads one trimmed line. `None` on EOF.
fn read_command(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
