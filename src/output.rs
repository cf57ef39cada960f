//! Rendering discovered rules to standard output and/or a file. Parsing,
//! mining, and output are kept separate so the engine itself never performs
//! I/O beyond reading the database file.

use crate::errors::Result;
use crate::types::Rule;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

/// Print one rule per line to standard output, in the fixed format
/// `{a1, ...} => {c1, ...}, support=<count>, confidence=<float>`.
pub fn print_rules(rules: &[Rc<Rule>]) {
    for rule in rules {
        println!("{}", rule);
    }
}

/// Write every rule to `path`, one per line, overwriting any prior content.
pub fn write_rules(rules: &[Rc<Rule>], path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(path)?;
    for rule in rules {
        writeln!(file, "{}", rule)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemSet, SidSet};
    use std::io::Read;

    fn sample_rule() -> Rc<Rule> {
        Rc::new(Rule::new(
            ItemSet::from([1]),
            ItemSet::from([2]),
            Rc::new(SidSet::from_iter([0, 1])),
            Rc::new(SidSet::from_iter([0, 1])),
        ))
    }

    #[test]
    fn write_rules_overwrites_prior_content() {
        let mut path = std::env::temp_dir();
        path.push(format!("erminer-output-test-{}.txt", std::process::id()));
        std::fs::write(&path, "stale content\n").unwrap();

        write_rules(&[sample_rule()], &path).unwrap();

        let mut contents = String::new();
        File::open(&path).unwrap().read_to_string(&mut contents).unwrap();
        assert!(!contents.contains("stale content"));
        assert!(contents.contains("{1} => {2}, support=2, confidence=1.000"));

        let _ = std::fs::remove_file(&path);
    }
}
