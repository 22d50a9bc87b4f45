//! Slot storage shared between a container and its views.
//!
//! A [`Block`] is a fixed-size run of slots. Blocks are never resized in
//! place: growing or shrinking a container builds a new block with
//! [`Block::remap`] and swaps it in, so any view still holding the old block
//! keeps a consistent (if stale) window.

use alloc::{boxed::Box, rc::Rc};
use core::cell::RefCell;

pub(crate) struct Block<T> {
    slots: Rc<RefCell<Box<[Option<T>]>>>,
}

impl<T> Block<T> {
    /// Allocates `len` empty slots.
    pub(crate) fn empty(len: usize) -> Self {
        Self::from_slots((0..len).map(|_| None).collect())
    }

    fn from_slots(slots: Box<[Option<T>]>) -> Self {
        Self {
            slots: Rc::new(RefCell::new(slots)),
        }
    }

    /// Returns a second handle to the same slots.
    pub(crate) fn share(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }

    pub(crate) fn same_block(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slots, &other.slots)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Callers must check `index < self.len()`.
    pub(crate) fn replace(&self, index: usize, value: Option<T>) -> Option<T> {
        core::mem::replace(&mut self.slots.borrow_mut()[index], value)
    }

    /// Moves the slots in `index..end` one position right, overwriting the
    /// slot at `end`. The old content of `end` ends up at `index`, ready to
    /// be replaced. Callers must check `end < self.len()`.
    pub(crate) fn shift_right(&self, index: usize, end: usize) {
        self.slots.borrow_mut()[index..=end].rotate_right(1);
    }

    pub(crate) fn with_slots<R>(&self, f: impl FnOnce(&[Option<T>]) -> R) -> R {
        f(&self.slots.borrow())
    }
}

impl<T: Clone> Block<T> {
    pub(crate) fn get(&self, index: usize) -> Option<T> {
        self.slots.borrow().get(index).cloned().flatten()
    }

    /// Builds an independent block of `len` slots where slot `i` is a copy of
    /// slot `source(i)` of this block, or empty when `source` yields `None`.
    ///
    /// Slots are cloned rather than moved because other handles may still
    /// read this block.
    pub(crate) fn remap(&self, len: usize, source: impl Fn(usize) -> Option<usize>) -> Self {
        let slots = self.slots.borrow();
        Self::from_slots(
            (0..len)
                .map(|i| source(i).and_then(|j| slots.get(j).cloned().flatten()))
                .collect(),
        )
    }

    /// Copy of this block with the slots in `cut` removed and everything
    /// after them moved left.
    pub(crate) fn without(&self, cut: core::ops::Range<usize>) -> Self {
        let removed = cut.end - cut.start;
        self.remap(self.len() - removed, |i| {
            if i < cut.start {
                Some(i)
            } else {
                Some(i + removed)
            }
        })
    }
}
