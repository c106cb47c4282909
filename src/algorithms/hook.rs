use crate::types::Record;

/// A trait for reacting to an edit script from the "old" sequence to
/// the "updated" sequence.
///
/// [`diff`](crate::algorithms::diff) reports all adds first, then all
/// deletes, then all changes and finally all moves.
pub trait EditHook<K, V>: Sized {
    type Error;

    /// Called when `value` from the updated sequence has no counterpart in
    /// the old sequence and gets inserted at `position`.
    fn added(&mut self, value: &Record<K, V>, position: usize) -> Result<(), Self::Error> {
        let _value = value;
        let _position = position;
        Ok(())
    }

    /// Called when `value`, found at `position` of the old sequence, has no
    /// counterpart in the updated sequence.
    fn deleted(&mut self, value: &Record<K, V>, position: usize) -> Result<(), Self::Error> {
        let _value = value;
        let _position = position;
        Ok(())
    }

    /// Called when a record is present in both sequences but its payload
    /// changed from `old_value` to `new_value`.  `position` is the index of
    /// `new_value` in the updated sequence.
    fn changed(
        &mut self,
        old_value: &Record<K, V>,
        new_value: &Record<K, V>,
        position: usize,
    ) -> Result<(), Self::Error> {
        let _old_value = old_value;
        let _new_value = new_value;
        let _position = position;
        Ok(())
    }

    /// Called when `value` needs to be relocated from `from_position` to
    /// `to_position` in the working copy.
    fn moved(
        &mut self,
        value: &Record<K, V>,
        from_position: usize,
        to_position: usize,
    ) -> Result<(), Self::Error> {
        let _value = value;
        let _from_position = from_position;
        let _to_position = to_position;
        Ok(())
    }

    /// Always called at the end of the algorithm.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'a, K, V, D: EditHook<K, V> + 'a> EditHook<K, V> for &'a mut D {
    type Error = D::Error;

    fn added(&mut self, value: &Record<K, V>, position: usize) -> Result<(), Self::Error> {
        (*self).added(value, position)
    }

    fn deleted(&mut self, value: &Record<K, V>, position: usize) -> Result<(), Self::Error> {
        (*self).deleted(value, position)
    }

    fn changed(
        &mut self,
        old_value: &Record<K, V>,
        new_value: &Record<K, V>,
        position: usize,
    ) -> Result<(), Self::Error> {
        (*self).changed(old_value, new_value, position)
    }

    fn moved(
        &mut self,
        value: &Record<K, V>,
        from_position: usize,
        to_position: usize,
    ) -> Result<(), Self::Error> {
        (*self).moved(value, from_position, to_position)
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        (*self).finish()
    }
}
