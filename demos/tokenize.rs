//! Example: print the token stream of an arithmetic expression
//!
//! Usage: cargo run --example tokenize ["<expression>"] [end_of_input|skip|reject]

use calclex::{Scanner, ScannerConfig, UnknownCharPolicy};
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "3 + 4.2 * (1 - 2) ^ 2!".to_string());

    let policy = match args.get(2) {
        Some(name) => name.parse::<UnknownCharPolicy>()?,
        None => UnknownCharPolicy::default(),
    };
    let config = ScannerConfig::default().with_unknown_char(policy);

    println!("=== Calclex Lexer Demo ===\n");
    println!("Source: {}", source);
    println!("Unknown characters: {:?}\n", policy);

    let mut scanner = Scanner::with_config(&source, config);
    let tokens = scanner.scan_tokens()?;

    println!("Tokens generated: {}\n", tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        println!("  {}: {}", i, token);
    }

    if !scanner.is_at_end() {
        println!(
            "\nStopped at position {} of {}",
            scanner.position(),
            scanner.source_len()
        );
    }

    Ok(())
}
