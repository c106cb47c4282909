use recdiff::utils::ensure_sorted;
use recdiff::{prescription, Record};

fn main() {
    let old = vec![
        Record::new(1, "first", 0),
        Record::new(2, "second", 1),
        Record::new(3, "third", 2),
        Record::new(4, "fourth", 3),
    ];
    // positions as received from upstream, out of order
    let mut new = vec![
        Record::new(5, "fifth", 3),
        Record::new(3, "third", 0),
        Record::new(6, "sixth", 4),
        Record::new(2, "second_new", 1),
        Record::new(4, "fourth", 2),
    ];
    ensure_sorted(&mut new);

    match prescription(&old, &new) {
        Ok(text) => print!("{}", text),
        Err(err) => eprintln!("cannot compare addresses: {}", err),
    }
}
