use std::io::{self, Write};

/// Input/output collaborator driven by the traversal engine.
///
/// Implementations decide how prompts reach the user and where answers
/// come from: a terminal, a GUI dialog, a web round-trip, or a scripted
/// sequence in tests. The engine performs exactly one blocking request
/// at a time and does not proceed until the collaborator returns.
pub trait AgendaIo {
    /// Displays a line without requesting input (end-node prompts,
    /// invalid-input notices).
    fn say(&mut self, line: &str);

    /// Prompts for a free-text answer and returns the raw line.
    fn ask_text(&mut self, prompt: &str) -> String;

    /// Presents the available choices and returns one raw attempt at
    /// selecting among them. Validation and re-prompting are the
    /// engine's concern, so the returned string may be anything.
    fn ask_choice(&mut self, prompt: &str, choices: &[String]) -> String;

    /// Requests a file selection. `None` means nothing was selected.
    fn ask_file(&mut self, prompt: &str) -> Option<String>;
}

/// Terminal collaborator: prompts on stdout, answers from stdin.
///
/// Choices are rendered 1-indexed, so both the literal value and its
/// displayed number are accepted by the engine. File selection is a path
/// typed on stdin; an empty line means no selection.
pub struct TerminalIo;

impl TerminalIo {
    fn read_trimmed(&self) -> String {
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .expect("Failed to read line");
        line.trim().to_string()
    }

    fn prompt_inline(&self, label: &str) -> String {
        print!("> {}: ", label);
        io::stdout().flush().expect("Failed to flush stdout");
        self.read_trimmed()
    }
}

impl AgendaIo for TerminalIo {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn ask_text(&mut self, prompt: &str) -> String {
        println!("\n{}", prompt);
        self.prompt_inline("Your response")
    }

    fn ask_choice(&mut self, prompt: &str, choices: &[String]) -> String {
        println!("\n{}", prompt);
        for (index, choice) in choices.iter().enumerate() {
            println!("  {}: {}", index + 1, choice);
        }
        self.prompt_inline("Your choice")
    }

    fn ask_file(&mut self, prompt: &str) -> Option<String> {
        println!("\n{}", prompt);
        let path = self.prompt_inline("Path to file (empty to skip)");
        if path.is_empty() { None } else { Some(path) }
    }
}
