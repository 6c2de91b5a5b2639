//! credit-engine CLI
//!
//! Score a member's loan history from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Score a member history from a JSON file
//! credit-engine score --input history.json
//!
//! # Output as JSON
//! credit-engine score --input history.json --format json
//!
//! # Strict validation only
//! credit-engine validate --input history.json
//!
//! # Generate a random history for testing
//! credit-engine generate --completed 3 --active 1
//! ```

use credit_engine::core::history::MemberHistory;
use credit_engine::scoring::engine::CreditScoringEngine;
use credit_engine::simulation::history::{generate_random_history, HistoryConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"credit-engine — deterministic credit scoring for savings-backed lending

USAGE:
    credit-engine <COMMAND> [OPTIONS]

COMMANDS:
    score       Compute a credit score from a member history
    validate    Strictly validate a member history without scoring
    generate    Generate a random member history (for testing)
    help        Show this message

OPTIONS (score):
    --input <FILE>      Path to JSON member history file
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (validate):
    --input <FILE>      Path to JSON member history file

OPTIONS (generate):
    --completed <N>     Number of completed loans (default: 3)
    --active <N>        Number of active loans (default: 1)
    --max-late <DAYS>   Maximum lateness per repayment (default: 10)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    credit-engine score --input history.json
    credit-engine score --input history.json --format json
    credit-engine validate --input history.json
    credit-engine generate --completed 5 --active 2 --output test.json"#
    );
}

fn load_history(path: &str) -> MemberHistory {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "profile": {{ "member_id": "m-1", "created_at": "2022-01-15T00:00:00Z", "savings_balance": "150000" }},
  "loans": [ ... ],
  "repayments": [ ... ]
}}"#
        );
        process::exit(1);
    })
}

fn cmd_score(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let history = load_history(&path);
    let result = CreditScoringEngine::score(&history);

    if format == "json" {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", result);
    }
}

fn cmd_validate(args: &[String]) {
    let mut input_path = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let history = load_history(&path);
    match history.validate() {
        Ok(()) => {
            println!(
                "OK: {} loans, {} repayments for member {}",
                history.loans().len(),
                history.repayments().len(),
                history.profile().member_id()
            );
        }
        Err(e) => {
            eprintln!("Validation failed: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = HistoryConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--completed" => {
                i += 1;
                config.completed_loans =
                    args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                        eprintln!("--completed requires a number");
                        process::exit(1);
                    });
            }
            "--active" => {
                i += 1;
                config.active_loans =
                    args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                        eprintln!("--active requires a number");
                        process::exit(1);
                    });
            }
            "--max-late" => {
                i += 1;
                config.max_days_late =
                    args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                        eprintln!("--max-late requires a number of days");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let history = generate_random_history(&config);
    let json = match serde_json::to_string_pretty(&history) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing history: {}", e);
            process::exit(1);
        }
    };

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} loans, {} repayments → {}",
            history.loans().len(),
            history.repayments().len(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "score" => cmd_score(rest),
        "validate" => cmd_validate(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
