use clap::Parser;
use kaigi::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;

/// A CLI tool to generate synthetic agenda documents for the Kaigi engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_agenda.json")]
    output: String,

    /// Number of question nodes to generate (an `end` node is appended)
    #[arg(long, default_value_t = 8)]
    nodes: usize,

    /// Chance (0.0-1.0) that a question is a choice node
    #[arg(long, default_value_t = 0.4)]
    choice_ratio: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.choice_ratio) {
        eprintln!(
            "Error: --choice-ratio ({}) must be between 0.0 and 1.0",
            cli.choice_ratio
        );
        std::process::exit(1);
    }

    println!(
        "Generating agenda with {} question nodes (choice ratio {})...",
        cli.nodes, cli.choice_ratio
    );

    let mut rng = rand::rng();
    let document = generate_agenda(&mut rng, cli.nodes, cli.choice_ratio);
    document.save(&cli.output)?;

    println!(
        "Successfully generated and saved agenda to '{}'",
        cli.output
    );

    Ok(())
}

/// Builds a linear chain `q1 -> q2 -> ... -> done` with a random mix of
/// node types. Choice nodes route every option to the same successor, so
/// the generated agenda always reaches its `end` node.
fn generate_agenda(rng: &mut ThreadRng, question_count: usize, choice_ratio: f64) -> AgendaDocument {
    let mut nodes = NodeMap::default();

    for index in 1..=question_count {
        let id = format!("q{}", index);
        let next_id = if index == question_count {
            "done".to_string()
        } else {
            format!("q{}", index + 1)
        };

        let mut node = if rng.random_bool(choice_ratio) {
            choice_question(rng, index, &next_id)
        } else if rng.random_bool(0.2) {
            NodeDefinition {
                node_type: Some("file_upload".to_string()),
                prompt: Some(format!("Please attach a document for step {}.", index)),
                next: Some(next_id),
                ..NodeDefinition::default()
            }
        } else {
            NodeDefinition {
                node_type: Some("text".to_string()),
                prompt: Some(format!("Question {}: tell us more.", index)),
                next: Some(next_id),
                on_response: Some(OnResponse::Hook(format!("update_q{}", index))),
                ..NodeDefinition::default()
            }
        };

        // Occasional advisory timing metadata, as authoring tools emit.
        if rng.random_bool(0.3) {
            node.timeout = Some(rng.random_range(30..600));
        }
        if rng.random_bool(0.2) {
            node.reminder = Some(rng.random_range(10..120));
        }

        nodes.insert(id, node);
    }

    nodes.insert(
        "done".to_string(),
        NodeDefinition {
            node_type: Some("end".to_string()),
            prompt: Some("Thank you, that is everything we needed.".to_string()),
            ..NodeDefinition::default()
        },
    );

    AgendaDocument {
        agenda_id: "generated_agenda".to_string(),
        start_node: "q1".to_string(),
        nodes,
    }
}

fn choice_question(rng: &mut ThreadRng, index: usize, next_id: &str) -> NodeDefinition {
    let options: &[&str] = if rng.random_bool(0.5) {
        &["yes", "no"]
    } else {
        &["low", "medium", "high"]
    };

    let mut routes = RouteMap::default();
    for option in options {
        routes.insert(option.to_string(), next_id.to_string());
    }

    NodeDefinition {
        node_type: Some("choice".to_string()),
        prompt: Some(format!("Question {}: pick an option.", index)),
        choices: options.iter().map(|s| s.to_string()).collect(),
        on_response: Some(OnResponse::Routes(routes)),
        ..NodeDefinition::default()
    }
}
