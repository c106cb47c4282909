use std::fmt;

use crate::types::EditScript;

/// An editorial prescription formatter.
///
/// The `Display` implementation renders one line per operation, adds first,
/// then deletes, changes and moves.
pub struct Prescription<'script, K, V> {
    script: &'script EditScript<K, V>,
    show_ids: bool,
}

impl<'script, K, V> Prescription<'script, K, V> {
    /// Creates a formatter from an edit script.
    pub fn from_script(script: &'script EditScript<K, V>) -> Self {
        Prescription {
            script,
            show_ids: false,
        }
    }

    /// Prefixes every line with the id of the record.  Defaults to `false`.
    pub fn show_ids(&mut self, yes: bool) -> &mut Self {
        self.show_ids = yes;
        self
    }
}

impl<'script, K: fmt::Display, V: fmt::Display> fmt::Display for Prescription<'script, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for op in self.script.ops() {
            if self.show_ids {
                write!(f, "#{} ", op.id())?;
            }
            writeln!(f, "{}", op)?;
        }
        Ok(())
    }
}

#[cfg(test)]
use crate::types::Record;

#[test]
fn test_show_ids() {
    let old = vec![Record::new(1, "a", 0), Record::new(2, "b", 1)];
    let new = vec![Record::new(2, "B", 0)];
    let script = crate::diff_records(&old, &new).unwrap();
    insta::assert_snapshot!(script.prescription().show_ids(true).to_string(), @r###"
    #1 a deleted from position 0
    #2 b changed to B at position 0
    "###);
}

#[test]
fn test_empty_script_renders_nothing() {
    let seq = vec![Record::new(1, "a", 0)];
    let script = crate::diff_records(&seq, &seq).unwrap();
    assert_eq!(script.prescription().to_string(), "");
}
