//! Builds a tree from random keys, skews it, and rebalances it, printing each stage.

use std::fmt::Display;

use anyhow::{ensure, Result};
use clap::Parser;
use median_bst::{Node, Tree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "median-bst", about = "Walk a BST through building, skewing, and rebalancing")]
struct Cli {
    /// Fewest random keys to generate.
    #[arg(long, env = "BST_DEMO_MIN_LEN", default_value_t = 10)]
    min_len: usize,
    /// Most random keys to generate (inclusive).
    #[arg(long, env = "BST_DEMO_MAX_LEN", default_value_t = 29)]
    max_len: usize,
    /// Keys are drawn from `0..max_key`.
    #[arg(long, env = "BST_DEMO_MAX_KEY", default_value_t = 100)]
    max_key: u32,
    /// Seed for reproducible runs. A fresh seed is drawn when absent.
    #[arg(long, env = "BST_DEMO_SEED")]
    seed: Option<u64>,
    /// Keys inserted after construction to skew the tree.
    #[arg(long, value_delimiter = ',', default_value = "150,200,250,300,400")]
    unbalance: Vec<u32>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    ensure!(
        cli.min_len <= cli.max_len,
        "--min-len ({}) must not exceed --max-len ({})",
        cli.min_len,
        cli.max_len
    );
    ensure!(cli.max_key > 0, "--max-key must be positive");

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "generating keys");
    let keys = random_keys(&mut StdRng::seed_from_u64(seed), &cli);
    println!("Generated array: {:?}", keys);

    let mut tree = Tree::from_keys(keys);
    report(&tree, "initially")?;

    println!("\nAdding {:?} to unbalance the tree", cli.unbalance);
    tree.extend(cli.unbalance.iter().copied());
    report(&tree, "after unbalancing")?;

    println!("\nRebalancing the tree...");
    tree.rebalance();
    report(&tree, "after rebalancing")?;

    Ok(())
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `info`.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .try_init()
        .unwrap_or_else(|e| eprintln!("Error: Failed to set up logging: {}", e));
}

fn random_keys(rng: &mut impl Rng, cli: &Cli) -> Vec<u32> {
    let len = rng.random_range(cli.min_len..=cli.max_len);
    debug!(len, "array length");
    (0..len).map(|_| rng.random_range(0..cli.max_key)).collect()
}

fn report<K>(tree: &Tree<K>, stage: &str) -> Result<()>
where
    K: Display,
{
    println!("Is the tree balanced {}? {}", stage, tree.is_balanced());
    println!("\nTree structure {}:", stage);
    print!("{}", tree.pretty());

    let print = |n: &Node<K>| println!("{}", n.key());
    println!("\nLevel order traversal ({}):", stage);
    tree.level_order(Some(print))?;
    println!("\nPre-order traversal ({}):", stage);
    tree.pre_order(Some(print))?;
    println!("\nPost-order traversal ({}):", stage);
    tree.post_order(Some(print))?;
    println!("\nIn-order traversal ({}):", stage);
    tree.in_order(Some(print))?;

    Ok(())
}
