use console::Style;
use recdiff::{diff_records, OpTag, Record};

fn main() {
    let old = vec![
        Record::new(1, "schtzngrmm", 0),
        Record::new(2, "t-t-t-t", 1),
        Record::new(3, "grrrmmmmm", 2),
        Record::new(4, "s---------c---------h", 3),
        Record::new(5, "tzngrmm", 4),
    ];
    let new = vec![
        Record::new(4, "s---------c---------h", 0),
        Record::new(1, "schützengraben", 1),
        Record::new(2, "t-t-t-t", 2),
        Record::new(6, "tssssssssssssss", 3),
        Record::new(3, "grrrmmmmm", 4),
    ];

    let script = diff_records(&old, &new).expect("sequences are sorted and unique");
    for op in script.ops() {
        let (sign, style) = match op.tag() {
            OpTag::Added => ("+", Style::new().green()),
            OpTag::Deleted => ("-", Style::new().red()),
            OpTag::Changed => ("~", Style::new().yellow()),
            OpTag::Moved => (">", Style::new().cyan()),
        };
        println!(
            "{} {}",
            style.apply_to(sign).bold(),
            style.apply_to(op.to_string())
        );
    }
}
