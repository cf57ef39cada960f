/// Quick performance check across a few database sizes.
///
/// Measures actual wall-clock time and rule count for increasingly large
/// synthetic databases, to sanity-check the benchmark numbers in
/// `benches/erminer_benchmark.rs`.
use erminer::{ErMiner, MinerConfig};
use std::io::Write;
use std::time::Instant;

fn generate_database(path: &str, count: usize) -> std::io::Result<()> {
    let items = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let mut file = std::fs::File::create(path)?;
    for i in 0..count {
        let num_items = (i % 4) + 2;
        let start = (i * 3) % items.len();
        for j in 0..num_items {
            write!(file, "{} -1 ", items[(start + j) % items.len()])?;
        }
        writeln!(file, "-2")?;
    }
    Ok(())
}

fn test_performance(size: usize) {
    println!("\nTesting {size} sequences");
    println!("{}", "-".repeat(60));

    let path = format!("perf-test-{size}.txt");
    let gen_start = Instant::now();
    generate_database(&path, size).unwrap();
    println!("Data generation: {:?}", gen_start.elapsed());

    let config = MinerConfig::new(&path, 0.1, 0.2);
    let mut miner = ErMiner::new(config);

    let mine_start = Instant::now();
    let rules = miner.mine().unwrap();
    println!("Mining: {:?}", mine_start.elapsed());
    println!("Rules found: {}", rules.len());

    let _ = std::fs::remove_file(&path);
}

fn main() {
    println!("=== Performance Test ===");
    for size in [100, 500, 2000] {
        test_performance(size);
    }
}
