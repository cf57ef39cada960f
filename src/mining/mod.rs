//! The ERMiner engine: orchestrates the index build, seed generation, and
//! the three fixed-order expansion passes.

pub mod expand;
pub mod left_store;
pub mod seed;
pub mod stats;

use crate::config::MinerConfig;
use crate::data_loader::load_database;
use crate::errors::{MiningError, Result};
use crate::index::Index;
use crate::output;
use crate::types::Rule;
use left_store::LeftStore;
use seed::EquivalenceClass;
use std::rc::Rc;
use std::time::Instant;

pub use stats::RunSummary;

/// `INIT -> INDEXED -> SEEDED -> LEFT_EXPANDED -> RIGHT_EXPANDED ->
/// LEFT_STORE_EXPANDED -> DONE`. Transitions are sequential and
/// single-shot; `ErMiner::mine` is the only thing that drives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    Init,
    Indexed,
    Seeded,
    LeftExpanded,
    RightExpanded,
    LeftStoreExpanded,
    Done,
}

impl EngineState {
    fn name(self) -> &'static str {
        match self {
            EngineState::Init => "INIT",
            EngineState::Indexed => "INDEXED",
            EngineState::Seeded => "SEEDED",
            EngineState::LeftExpanded => "LEFT_EXPANDED",
            EngineState::RightExpanded => "RIGHT_EXPANDED",
            EngineState::LeftStoreExpanded => "LEFT_STORE_EXPANDED",
            EngineState::Done => "DONE",
        }
    }
}

/// The equivalence-class sequential rule miner.
pub struct ErMiner {
    config: MinerConfig,
    state: EngineState,
    index: Option<Index>,
    left_equivalence: EquivalenceClass,
    right_equivalence: EquivalenceClass,
    left_store: LeftStore,
    rules: Vec<Rc<Rule>>,
}

impl ErMiner {
    pub fn new(config: MinerConfig) -> Self {
        Self {
            config,
            state: EngineState::Init,
            index: None,
            left_equivalence: EquivalenceClass::default(),
            right_equivalence: EquivalenceClass::default(),
            left_store: LeftStore::new(),
            rules: Vec::new(),
        }
    }

    /// Discovered rules so far (empty before `mine`/`run` completes).
    pub fn rules(&self) -> &[Rc<Rule>] {
        &self.rules
    }

    fn require(&self, expected: EngineState) -> Result<()> {
        if self.state != expected {
            return Err(MiningError::OutOfOrder {
                expected: expected.name(),
                actual: self.state.name(),
            });
        }
        Ok(())
    }

    /// Run the full pipeline: read the database, build the index, generate
    /// seeds, then left-expand, right-expand, and left-store-expand in that
    /// fixed order. Idiomatic `Result`-returning entry point; `run` below is
    /// a thin wrapper matching the external sentinel-pair contract callers
    /// of the original algorithm expect.
    pub fn mine(&mut self) -> Result<&[Rc<Rule>]> {
        let sequences = load_database(&self.config.path)?;
        if sequences.is_empty() {
            return Err(MiningError::EmptyDatabase);
        }

        self.require(EngineState::Init)?;
        let index = Index::build(&sequences, self.config.minsup);
        log::debug!(
            "indexed {} sequences, {} frequent items (min_sup_count={})",
            index.n(),
            index.frequent_items().len(),
            index.min_sup_count()
        );
        self.index = Some(index);
        self.state = EngineState::Indexed;

        self.seed()?;
        self.expand_left()?;
        self.expand_right()?;
        self.expand_left_store()?;

        self.state = EngineState::Done;
        log::info!("mining done: {} rules found", self.rules.len());
        Ok(&self.rules)
    }

    fn index(&self) -> &Index {
        self.index.as_ref().expect("index built before use")
    }

    fn seed(&mut self) -> Result<()> {
        self.require(EngineState::Indexed)?;
        let index = self.index.as_ref().expect("index built before use");
        let result = seed::generate_seeds(index, self.config.minconf, &mut self.rules);
        log::debug!(
            "seeded {} left classes, {} right classes",
            result.left_equivalence.len(),
            result.right_equivalence.len()
        );
        self.left_equivalence = result.left_equivalence;
        self.right_equivalence = result.right_equivalence;
        self.state = EngineState::Seeded;
        Ok(())
    }

    fn expand_left(&mut self) -> Result<()> {
        self.require(EngineState::Seeded)?;
        let min_sup_count = self.index().min_sup_count();
        for class in self.left_equivalence.values() {
            expand::left_search(class, min_sup_count, self.config.minconf, &mut self.rules);
        }
        self.state = EngineState::LeftExpanded;
        Ok(())
    }

    fn expand_right(&mut self) -> Result<()> {
        self.require(EngineState::LeftExpanded)?;
        let min_sup_count = self.index().min_sup_count();
        for class in self.right_equivalence.values() {
            expand::right_search(
                class,
                min_sup_count,
                self.config.minconf,
                &mut self.rules,
                &mut self.left_store,
            );
        }
        self.state = EngineState::RightExpanded;
        Ok(())
    }

    fn expand_left_store(&mut self) -> Result<()> {
        self.require(EngineState::RightExpanded)?;
        let min_sup_count = self.index().min_sup_count();
        let buckets: Vec<Vec<Rc<Rule>>> = self
            .left_store
            .expandable_buckets()
            .cloned()
            .collect();
        for bucket in &buckets {
            expand::left_search(bucket, min_sup_count, self.config.minconf, &mut self.rules);
        }
        self.state = EngineState::LeftStoreExpanded;
        Ok(())
    }

    /// Run the algorithm: scan the database once, find all valid rules,
    /// then print and/or write them per `config.verbose`/`config.write`.
    ///
    /// On success returns `(elapsed_seconds, rule_count)`; on an unreadable
    /// database, reports the problem to standard error and returns the
    /// sentinel `(-1.0, -1)`.
    pub fn run(&mut self) -> (f64, i64) {
        let start = Instant::now();
        let verbose = self.config.verbose;
        let write = self.config.write;
        let output_path = self.config.output_path.clone();
        let result = self.mine();

        match result {
            Ok(rules) => {
                if verbose {
                    output::print_rules(rules);
                }
                if write {
                    if let Err(e) = output::write_rules(rules, &output_path) {
                        eprintln!("Problem with output: {e}.");
                    }
                }
                let summary = RunSummary {
                    elapsed: start.elapsed(),
                    rule_count: rules.len(),
                };
                println!(
                    "\nTime: {} [s], rules found: {}",
                    summary.elapsed_secs(),
                    summary.rule_count
                );
                (summary.elapsed_secs(), summary.rule_count as i64)
            }
            Err(e) => {
                eprintln!("Problem with file: {e}.");
                (-1.0, -1)
            }
        }
    }
}
