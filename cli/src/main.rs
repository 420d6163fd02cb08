//! zerosum CLI - Command-line harness for the game solver
//!
//! Solves a set of named example games and prints the optimal mixed
//! strategies and value for each.

use zerosum_engine::{GameError, PayoffMatrix, ZeroSumGame};

/// Named example payoff matrices.
fn examples() -> Vec<(&'static str, Vec<Vec<f64>>)> {
    vec![
        (
            "book",
            vec![vec![-1.0, 1.0, 3.0, -3.0], vec![1.0, -1.0, -2.0, 2.0]],
        ),
        ("pennies", vec![vec![1.0, -1.0], vec![-1.0, 1.0]]),
        (
            "rps",
            vec![
                vec![0.0, -1.0, 1.0],
                vec![1.0, 0.0, -1.0],
                vec![-1.0, 1.0, 0.0],
            ],
        ),
        ("saddle", vec![vec![2.0, 2.0], vec![0.0, 1.0]]),
    ]
}

fn format_vector(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|p| format!("{:8.4}", p)).collect();
    format!("[{}]", parts.join(", "))
}

fn solve_and_print(name: &str, rows: Vec<Vec<f64>>) -> Result<(), GameError> {
    println!();
    println!("{}", name);
    println!("------------------------------------");
    let payoff = PayoffMatrix::from_rows(rows)?;
    let game = ZeroSumGame::new(payoff)?;

    println!("x[] = {}", format_vector(game.row()));
    println!("y[] = {}", format_vector(game.column()));
    println!("value = {}", game.value());
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let selected = args.get(1).map(String::as_str);

    let examples = examples();
    if let Some(name) = selected {
        match examples.into_iter().find(|(n, _)| *n == name) {
            Some((n, rows)) => {
                if let Err(e) = solve_and_print(n, rows) {
                    log::error!("failed to solve '{}': {}", n, e);
                    std::process::exit(1);
                }
            }
            None => {
                println!("zerosum CLI v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("Usage:");
                println!("  zerosum [example]");
                println!();
                println!("Examples: book, pennies, rps, saddle");
                println!("With no argument, every example is solved.");
            }
        }
    } else {
        for (name, rows) in examples {
            if let Err(e) = solve_and_print(name, rows) {
                log::error!("failed to solve '{}': {}", name, e);
                std::process::exit(1);
            }
        }
    }
}
