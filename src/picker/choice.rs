//! Non-empty ordered list of choices with a current member.

use crate::error::{PickerError, PickerResult};

/// An ordered, non-empty list of values together with the current value.
///
/// The current value is always a member of the list. Values are compared
/// with `PartialEq`; duplicates are not rejected, but the first occurrence
/// is the one a value resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedChoiceList<T> {
    items: Vec<T>,
    current: usize,
}

impl<T: PartialEq> OrderedChoiceList<T> {
    pub fn new(items: Vec<T>, current: &T) -> PickerResult<Self> {
        if items.is_empty() {
            return Err(PickerError::EmptyList);
        }
        let current = position_of(&items, current)?;
        Ok(Self { items, current })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Make `value` current. Fails if it is not in the list.
    pub fn select(&mut self, value: &T) -> PickerResult<()> {
        self.current = position_of(&self.items, value)?;
        Ok(())
    }

    /// Make the item at `index` current, clamped to the last item.
    pub fn select_index(&mut self, index: usize) {
        self.current = index.min(self.items.len() - 1);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

/// Position of `value` in `items`, or `ValueNotInList`.
pub(crate) fn position_of<T: PartialEq>(items: &[T], value: &T) -> PickerResult<usize> {
    items
        .iter()
        .position(|item| item == value)
        .ok_or(PickerError::ValueNotInList)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_list() {
        let result = OrderedChoiceList::<u32>::new(vec![], &1);
        assert_eq!(result, Err(PickerError::EmptyList));
    }

    #[test]
    fn test_rejects_foreign_value() {
        let result = OrderedChoiceList::new(vec![1, 2, 3], &7);
        assert_eq!(result, Err(PickerError::ValueNotInList));
    }

    #[test]
    fn test_select_keeps_membership() {
        let mut list = OrderedChoiceList::new(vec!["a", "b", "c"], &"b").unwrap();
        assert_eq!(list.current_index(), 1);

        assert!(list.select(&"z").is_err());
        assert_eq!(*list.current(), "b");

        list.select(&"c").unwrap();
        assert_eq!(*list.current(), "c");

        list.select_index(99);
        assert_eq!(*list.current(), "c");
    }
}
