use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use veriflow::prelude::*;

/// A graph-to-workflow compiler CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow graph JSON file (editor nodes + edges)
    graph_path: Option<String>,

    /// Optional path to write the compiled workflow document to
    #[arg(short, long)]
    out: Option<String>,

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

fn run_compilation(graph_path: String, out_path: Option<String>) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let graph_json = fs::read_to_string(&graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &graph_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let ui_workflow: UiWorkflow = serde_json::from_str(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)));

    let graph = ui_workflow
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert workflow to graph: {}", e)));

    let graph_errors = validate_graph(&graph);
    if !graph_errors.is_empty() {
        eprintln!("\nThe workflow graph has problems:");
        for error in &graph_errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(1);
    }

    // --- 3. Compilation ---
    println!("\nCompiling workflow graph...");
    let compile_start = Instant::now();
    let compiler = Compiler::builder(graph).build();

    let document = compiler
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));
    let compile_duration = compile_start.elapsed();

    println!(
        "Compilation successful! {} steps generated in {:?}",
        document.steps.len(),
        compile_duration
    );

    // --- 4. Validation ---
    let validate_start = Instant::now();
    let errors = validate(&document);
    let validate_duration = validate_start.elapsed();

    if !errors.is_empty() {
        eprintln!("\nValidation failed with {} error(s):", errors.len());
        for error in &errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(1);
    }

    // --- 5. Output ---
    let json = document
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&format!("Serialization failed: {}", e)));

    match &out_path {
        Some(path) => {
            document
                .save(path)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to write output: {}", e)));
            println!("Workflow document written to '{}'", path);
        }
        None => println!("\n{}", json),
    }

    // --- 6. Summary ---
    let end_steps = document
        .steps
        .iter()
        .filter(|s| matches!(s, Step::End { .. }))
        .count();
    let multi_steps = document
        .steps
        .iter()
        .filter(|s| matches!(s, Step::MultiServices { .. }))
        .count();
    let service_steps = document.steps.len() - end_steps - multi_steps;

    let total_duration = total_start.elapsed();
    println!("\n--- Workflow Summary ---");
    println!("Start Step:     {}", document.start_step);
    println!("Service Steps:  {}", service_steps);
    println!("Parallel Steps: {}", multi_steps);
    println!("End Steps:      {}", end_steps);

    println!("\n--- Performance Summary ---");
    println!("File Loading:   {:?}", load_duration);
    println!("Compilation:    {:?}", compile_duration);
    println!("Validation:     {:?}", validate_duration);
    println!("-----------------------------");
    println!("Total Execution: {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let graph_path = cli.graph_path.unwrap_or_else(|| {
        exit_with_error("Workflow path is required in non-interactive mode.");
    });

    run_compilation(graph_path, cli.out);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Veriflow Interactive Mode ---");

    let graph_path = prompt_for_input("Enter workflow graph path", Some("data/workflow.json"));
    let out_path_str = prompt_for_input("Enter output path (optional)", None);

    let out_path = if out_path_str.is_empty() {
        None
    } else {
        Some(out_path_str)
    };

    run_compilation(graph_path, out_path);
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
