use erminer::MinerConfig;
use std::io::Write;

/// Writes a small web-clickstream-shaped database, mines it, and prints the
/// rules it finds.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Basic Sequential Rule Mining Example ===\n");

    // Item codes: 1=home, 2=search, 3=product, 4=cart, 5=checkout.
    let sequences = "\
1 -1 2 -1 3 -1 4 -1 5 -1 -2
1 -1 2 -1 3 -1 4 -1 -2
1 -1 3 -1 4 -1 5 -1 -2
1 -1 2 -1 3 -1 -2
1 -1 2 -1 3 -1 4 -1 5 -1 -2
";
    let path = "clickstream.txt";
    std::fs::write(path, sequences)?;
    println!("Wrote {} sequences to {path}\n", sequences.lines().count());

    let config = MinerConfig::new(path, 0.4, 0.6).with_verbose(false);
    println!("Mining Configuration:");
    println!("  Min Support: {:.1}%", config.minsup * 100.0);
    println!("  Min Confidence: {:.1}%\n", config.minconf * 100.0);

    let mut miner = erminer::ErMiner::new(config);
    let rules = miner.mine()?;

    println!("=== Discovered Rules ({}) ===\n", rules.len());
    for (idx, rule) in rules.iter().enumerate() {
        println!("Rule #{}: {rule}", idx + 1);
    }

    let mut out = std::fs::File::create("mined_rules.txt")?;
    for rule in rules {
        writeln!(out, "{rule}")?;
    }
    println!("\nRules saved to mined_rules.txt");

    Ok(())
}
