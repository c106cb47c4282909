use std::fmt;
use std::hash::Hash;

use console::{style, Style};
use recdiff::algorithms::capture_diff;
use recdiff::{EditScript, OpTag, Record};

pub struct Diff<K, V> {
    script: EditScript<K, V>,
}

impl<K, V> Diff<K, V>
where
    K: Hash + Eq + Clone,
    V: PartialEq + Clone,
{
    pub fn from_records(left: &[Record<K, V>], right: &[Record<K, V>]) -> Diff<K, V> {
        Diff {
            script: capture_diff(left, right),
        }
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Diff<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.script.is_empty() {
            writeln!(
                f,
                "{}: {}",
                style("Invisible differences").bold(),
                "the records only differ in their positions."
            )?;
            return Ok(());
        }

        writeln!(
            f,
            "  {} ({}|{}|{}|{}):",
            style("Differences").bold(),
            style("-deleted").red(),
            style("+added").green(),
            style("~changed").yellow(),
            style(">moved").cyan(),
        )?;
        for op in self.script.ops() {
            let (marker, style) = match op.tag() {
                OpTag::Deleted => ('-', Style::new().red()),
                OpTag::Added => ('+', Style::new().green()),
                OpTag::Changed => ('~', Style::new().yellow()),
                OpTag::Moved => ('>', Style::new().cyan()),
            };
            writeln!(
                f,
                "   {} #{} {}",
                style.apply_to(marker).dim().bold(),
                op.id(),
                style.apply_to(op)
            )?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! assert_records_eq {
    ($left:expr, $right:expr $(,)?) => ({
        match (&($left), &($right)) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    panic!("assertion failed: `(left == right)`'\
                           \n\n{}\n",
                           $crate::Diff::from_records(&left_val[..], &right_val[..]));
                }
            }
        }
    });
}

fn main() {
    let left = (0..20)
        .map(|idx| Record::new(idx, idx * 10, idx as usize))
        .collect::<Vec<_>>();
    let mut right = left.clone();
    right.swap(3, 12);
    right[7].value = 71;
    recdiff::utils::renumber(&mut right);
    assert_records_eq!(left, right);
}
