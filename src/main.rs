use anyhow::Context;
use clap::Parser;
use log::info;
use rand::Rng;

use umt_rs::{BalanceRecord, HexHash, MerkleTree};

/// Builds a merkle tree over randomly generated account-balance records,
/// then proves and verifies the inclusion of one leaf.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of balance records to commit to
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    leaves: u64,

    /// Leaf index to prove; picked at random when omitted
    #[arg(long)]
    index: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();
    let count = usize::try_from(args.leaves).context("leaf count does not fit this platform")?;

    let mut rng = rand::thread_rng();
    let records: Vec<BalanceRecord> = (0..count)
        .map(|_| BalanceRecord::from_seed(rng.gen_range(0..100)))
        .collect();
    let leaf_hashes: Vec<HexHash> = records
        .iter()
        .map(|record| HexHash::digest(record.to_string().as_bytes()))
        .collect();

    info!("building a merkle tree over {count} records");
    let tree = MerkleTree::build(leaf_hashes.clone())?;

    println!("Root {}", tree.root());
    println!("Tree");
    for (depth, level) in tree.levels().iter().enumerate() {
        let nodes: Vec<String> = level.iter().map(HexHash::to_string).collect();
        println!("  level {depth}: [{}]", nodes.join(", "));
    }

    let index = match args.index {
        Some(index) => index,
        None => rng.gen_range(0..count),
    };
    let proof = tree.build_proof(index)?;
    println!("Leaf Index {index}");
    println!("Leaf {}", records[index]);
    println!("Proof");
    for sibling in proof.siblings() {
        println!("  {sibling}");
    }

    let verified = tree.check_proof(&leaf_hashes[index], &proof);
    println!("Verified {verified}");
    anyhow::ensure!(verified, "inclusion proof failed to verify");
    Ok(())
}
