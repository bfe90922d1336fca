use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use canopy::{merge_sort, shortest_path, Square, Tree};

#[derive(Parser, Debug)]
#[command(name = "canopy", about = "Binary search tree playground and companion utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a balanced tree from the given integers and inspect it.
    Tree {
        /// Values to build from (duplicates are dropped).
        values: Vec<i64>,
    },
    /// Find one shortest knight path between two squares.
    Knight {
        /// Start square as `file,rank` (each 0-7).
        from: String,
        /// Goal square as `file,rank`.
        to: String,
    },
    /// Merge sort the given integers.
    Sort {
        /// Values to sort.
        values: Vec<i64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tree { values } => run_tree(values),
        Commands::Knight { from, to } => run_knight(&from, &to),
        Commands::Sort { values } => run_sort(&values),
    }
}

fn run_tree(values: Vec<i64>) -> Result<()> {
    let tree = Tree::from_values(values);
    print!("{tree}");
    println!("level order: {:?}", tree.values_level_order());
    println!("in order:    {:?}", tree.values_in_order());
    println!("pre order:   {:?}", tree.values_pre_order());
    println!("post order:  {:?}", tree.values_post_order());
    println!("balanced:    {}", tree.is_balanced());
    Ok(())
}

fn run_knight(from: &str, to: &str) -> Result<()> {
    let start = parse_square(from)?;
    let goal = parse_square(to)?;
    let path = shortest_path(start, goal);

    println!("made it in {} moves:", path.len() - 1);
    for square in &path {
        println!("  {square}");
    }
    Ok(())
}

fn run_sort(values: &[i64]) -> Result<()> {
    println!("{:?}", merge_sort(values));
    Ok(())
}

fn parse_square(text: &str) -> Result<Square> {
    let (file, rank) = text
        .split_once(',')
        .with_context(|| format!("expected `file,rank`, got '{text}'"))?;
    let file = file
        .trim()
        .parse()
        .with_context(|| format!("invalid file '{file}'"))?;
    let rank = rank
        .trim()
        .parse()
        .with_context(|| format!("invalid rank '{rank}'"))?;
    Ok(Square::new(file, rank)?)
}
