use std::convert::Infallible;

use crate::algorithms::hook::EditHook;
use crate::types::{EditOp, EditScript, Record};

/// A [`EditHook`] that captures all edit operations.
#[derive(Clone, Debug)]
pub struct Capture<K, V>(EditScript<K, V>);

impl<K, V> Default for Capture<K, V> {
    fn default() -> Capture<K, V> {
        Capture(EditScript::default())
    }
}

impl<K, V> Capture<K, V> {
    /// Creates a new capture hook.
    pub fn new() -> Capture<K, V> {
        Capture::default()
    }

    /// Converts the capture hook into an edit script.
    pub fn into_script(self) -> EditScript<K, V> {
        self.0
    }

    /// Accesses the captured operations.
    pub fn script(&self) -> &EditScript<K, V> {
        &self.0
    }
}

impl<K: Clone, V: Clone> EditHook<K, V> for Capture<K, V> {
    type Error = Infallible;

    fn added(&mut self, value: &Record<K, V>, position: usize) -> Result<(), Self::Error> {
        self.0.push(EditOp::Added {
            value: value.clone(),
            position,
        });
        Ok(())
    }

    fn deleted(&mut self, value: &Record<K, V>, position: usize) -> Result<(), Self::Error> {
        self.0.push(EditOp::Deleted {
            value: value.clone(),
            position,
        });
        Ok(())
    }

    fn changed(
        &mut self,
        old_value: &Record<K, V>,
        new_value: &Record<K, V>,
        position: usize,
    ) -> Result<(), Self::Error> {
        self.0.push(EditOp::Changed {
            old_value: old_value.clone(),
            new_value: new_value.clone(),
            position,
        });
        Ok(())
    }

    fn moved(
        &mut self,
        value: &Record<K, V>,
        from_position: usize,
        to_position: usize,
    ) -> Result<(), Self::Error> {
        self.0.push(EditOp::Moved {
            value: value.clone(),
            from_position,
            to_position,
        });
        Ok(())
    }
}

#[test]
fn test_capture_sorts_by_tag() {
    let mut d = Capture::new();
    d.moved(&Record::new(1, 'a', 0), 1, 0).unwrap();
    d.deleted(&Record::new(2, 'b', 1), 1).unwrap();
    d.added(&Record::new(3, 'c', 2), 2).unwrap();
    let script = d.into_script();
    assert_eq!(script.added().len(), 1);
    assert_eq!(script.deleted().len(), 1);
    assert_eq!(script.changed().len(), 0);
    assert_eq!(
        script.moved(),
        &[EditOp::Moved {
            value: Record::new(1, 'a', 0),
            from_position: 1,
            to_position: 0,
        }][..]
    );
}
