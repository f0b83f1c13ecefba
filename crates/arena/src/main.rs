//! Arena CLI
//!
//! Run matches between the selection tiers.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use arena::{create_engine, GameRunner, MatchConfig};
use engine_core::Difficulty;

fn print_usage() {
    println!("Arena runner for the selection tiers");
    println!();
    println!("Usage:");
    println!("  arena match <tier1> <tier2> [--games N] [--depth D] [--out FILE] [--quiet]");
    println!();
    println!("Tiers:");
    println!("  random        - Uniform random legal move");
    println!("  greedy        - One-ply best material capture");
    println!("  minimax       - Fixed-depth minimax search");
    println!();
    println!("Examples:");
    println!("  arena match minimax greedy --games 10 --depth 2");
    println!("  arena match random minimax --depth 3 --out results.json");
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two tier names");
    }

    let tier1: Difficulty = args[0].parse().map_err(|e: String| anyhow!(e))?;
    let tier2: Difficulty = args[1].parse().map_err(|e: String| anyhow!(e))?;

    let mut config = MatchConfig {
        verbose: true,
        ..Default::default()
    };
    let mut out: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(config.depth);
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--quiet" | "-q" => config.verbose = false,
            other => bail!("unknown option: {other}"),
        }
        i += 1;
    }

    let mut engine1 = create_engine(tier1);
    let mut engine2 = create_engine(tier2);
    let name1 = engine1.name().to_string();
    let name2 = engine2.name().to_string();

    println!("Playing {name1} vs {name2} ({} games, depth {})", config.num_games, config.depth);

    let summary =
        GameRunner::new(config).run_match(&name1, engine1.as_mut(), &name2, engine2.as_mut())?;

    println!();
    println!("{}", summary.report());

    if let Some(path) = out {
        summary.save(&path).map_err(|e| anyhow!(e))?;
        println!("Saved results to {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("match") => run_match(&args[1..]),
        Some("help") | Some("--help") | Some("-h") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
