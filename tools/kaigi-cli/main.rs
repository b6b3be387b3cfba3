use clap::{Parser, ValueEnum};
use itertools::Itertools;
use kaigi::prelude::*;
use std::io::{self, Write};

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ActionCli {
    /// Run one full traversal and print the response log
    Chat,
    /// List nodes and inspect one by number or id
    Query,
}

/// An interactive agenda traversal and inspection CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the agenda definition JSON file
    agenda_path: Option<String>,

    /// Path to write the derived decision map JSON to
    #[arg(short, long, default_value = "decision_tree_metadata.json")]
    metadata: String,

    /// Run a single action instead of the command loop
    #[arg(short, long, value_enum)]
    action: Option<ActionCli>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the
/// command line.
fn run_non_interactive(cli: Cli) {
    let agenda_path = cli.agenda_path.unwrap_or_else(|| {
        exit_with_error("Agenda path is required in non-interactive mode.");
    });

    let (document, decision_map) = load_and_derive(&agenda_path, &cli.metadata);

    match cli.action {
        Some(ActionCli::Chat) => run_chat(&document),
        Some(ActionCli::Query) => run_query(&decision_map),
        None => command_loop(&document, &decision_map),
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Kaigi Interactive Mode ---");

    let agenda_path = prompt_for_input("Enter agenda path", Some("agenda.json"));
    let metadata_path = prompt_for_input(
        "Enter metadata output path",
        Some("decision_tree_metadata.json"),
    );

    let (document, decision_map) = load_and_derive(&agenda_path, &metadata_path);
    command_loop(&document, &decision_map);
}

fn load_and_derive(agenda_path: &str, metadata_path: &str) -> (AgendaDocument, DecisionMap) {
    println!("Loading agenda from: {}", agenda_path);

    let document = AgendaDocument::from_file(agenda_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load agenda: {}", e)));

    let decision_map = DecisionMap::derive(&document);
    decision_map
        .save(metadata_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save decision map: {}", e)));

    println!(
        "Loaded agenda '{}' ({} nodes); metadata written to '{}'.",
        document.agenda_id,
        document.nodes.len(),
        metadata_path
    );

    (document, decision_map)
}

fn command_loop(document: &AgendaDocument, decision_map: &DecisionMap) {
    loop {
        let action = prompt_for_input("\nEnter an action (chat / query / exit)", Some("chat"));
        match action.to_lowercase().as_str() {
            "exit" => break,
            "chat" => run_chat(document),
            "query" => run_query(decision_map),
            other => println!("Unknown action '{}'. Use 'chat', 'query', or 'exit'.", other),
        }
    }
}

fn run_chat(document: &AgendaDocument) {
    println!("\nAgenda session started. Type 'exit' at any text question to quit.");

    let mut terminal = TerminalIo;
    let outcome = Interpreter::new(document, &mut terminal).run();

    println!("\nSession {}.", outcome.state);
    if outcome.responses.is_empty() {
        println!("No responses recorded.");
        return;
    }

    println!("Your responses:");
    for (node_id, response) in &outcome.responses {
        println!("- {}: {}", node_id, response);
    }
}

fn run_query(decision_map: &DecisionMap) {
    let query = QueryService::new(decision_map);

    println!("\nAvailable nodes in this agenda:");
    for summary in query.list() {
        println!("{}. {} - {}", summary.position, summary.id, summary.preview);
    }

    let key = prompt_for_input("\nEnter the number or ID of the node to inspect", None);

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

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
