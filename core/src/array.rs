use core::cmp::Ordering;
use core::fmt;
use core::ops::Range;

use alloc::vec::Vec;

use crate::error::{ArrayError, Result};
use crate::options::{ArrayOptions, BoundsPolicy};
use crate::storage::Block;

/// A growable array with a logical index window.
///
/// The container owns (or, for views, shares) a block of `capacity` slots.
/// Elements live at their logical index: the populated window `low..=high`
/// addresses the block directly, so a container may start at a nonzero
/// index. Slots outside the window may be empty or hold stale values.
///
/// Growth is one slot at a time: inserting into a full block reallocates it
/// with exactly one extra slot.
///
/// # Views and copies
///
/// [`sublist`](Self::sublist) returns a view that shares the block with its
/// parent, so writes through either are visible through both.
/// [`Clone`], [`extract`](Self::extract) and every other structural
/// operation produce containers with independent storage. A container that
/// reallocates (on [`push`](Self::push), [`insert_at`](Self::insert_at) or
/// [`remove`](Self::remove) into a new block) stops aliasing its earlier
/// views.
///
/// # Example
///
/// ```
/// use dynarray_core::DynamicArray;
///
/// let mut letters: DynamicArray<char> = "abcdef".chars().collect();
/// letters.push('g');
/// assert_eq!(letters.to_string(), "[a, b, c, d, e, f, g]");
///
/// let middle = letters.extract(2, 4).unwrap();
/// assert_eq!(middle.to_string(), "[c, d]");
/// ```
pub struct DynamicArray<T> {
    block: Block<T>,
    low: usize,
    // One past `high`; `end == low` when empty.
    end: usize,
    options: ArrayOptions,
}

// Views alias storage through `Rc<RefCell<_>>` with no synchronization.
static_assertions::assert_not_impl_any!(DynamicArray<u8>: Send, Sync);

impl<T> DynamicArray<T> {
    /// Creates an empty container with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self::with_options(capacity, ArrayOptions::default())
    }

    pub fn with_options(capacity: usize, options: ArrayOptions) -> Self {
        Self {
            block: Block::empty(capacity),
            low: 0,
            end: 0,
            options,
        }
    }

    /// Creates a container whose window is `window`, with every slot empty.
    ///
    /// The block holds `window.end` slots so every index in the window is
    /// addressable; for a window starting at zero that is exactly the window
    /// length.
    pub fn with_window(window: Range<usize>) -> Result<Self> {
        if window.start > window.end {
            return Err(ArrayError::InvalidRange {
                from: window.start,
                to: window.end,
            });
        }
        Ok(Self {
            block: Block::empty(window.end),
            low: window.start,
            end: window.end,
            options: ArrayOptions::default(),
        })
    }

    pub fn options(&self) -> ArrayOptions {
        self.options
    }

    /// Lowest index of the window.
    pub fn low(&self) -> usize {
        self.low
    }

    /// Highest populated index, or `None` when the window is empty.
    pub fn high(&self) -> Option<usize> {
        (self.end > self.low).then(|| self.end - 1)
    }

    /// One past the highest populated index.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn capacity(&self) -> usize {
        self.block.len()
    }

    /// Number of slots in the window.
    pub fn size(&self) -> usize {
        self.end - self.low
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns true when both containers address the same storage block,
    /// i.e. one is a live view of the other.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        self.block.same_block(&other.block)
    }

    /// Checks `index` against the bounds selected by [`BoundsPolicy`].
    ///
    /// Under the default policy this accepts `low <= index < capacity`,
    /// which includes slack slots past `high`.
    pub fn index_in_range(&self, index: usize) -> bool {
        let bound = self.index_bound();
        let in_range = self.low <= index && index < bound;
        if !in_range {
            tracing::debug!(low = self.low, index, bound, "Index out of range");
        }
        in_range
    }

    fn index_bound(&self) -> usize {
        match self.options.bounds {
            BoundsPolicy::Capacity => self.capacity(),
            BoundsPolicy::Populated => self.end,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if self.index_in_range(index) {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> ArrayError {
        ArrayError::IndexOutOfRange {
            index,
            low: self.low,
            bound: self.index_bound(),
        }
    }

    /// Validates `from..to` for `delete` and `extract`: `from` must pass the
    /// index check and `to` may not exceed the policy's bound.
    fn check_range(&self, from: usize, to: usize) -> Result<()> {
        if from > to {
            return Err(ArrayError::InvalidRange { from, to });
        }
        self.check_index(from)?;
        if to > self.index_bound() {
            return Err(self.out_of_range(to));
        }
        Ok(())
    }

    /// Overwrites the slot at `index` and returns what it held before.
    pub fn set(&mut self, index: usize, item: T) -> Result<Option<T>> {
        self.check_index(index)?;
        Ok(self.block.replace(index, Some(item)))
    }

    /// Returns a view of `from..to` that shares storage with `self`.
    ///
    /// Both `from` and `to - 1` must pass [`index_in_range`](Self::index_in_range),
    /// so an empty range is only accepted when `to - 1` is itself a valid
    /// index.
    pub fn sublist(&self, from: usize, to: usize) -> Result<Self> {
        if from > to {
            return Err(ArrayError::InvalidRange { from, to });
        }
        self.check_index(from)?;
        match to.checked_sub(1) {
            Some(last) => self.check_index(last)?,
            None => return Err(self.out_of_range(to)),
        }
        Ok(Self {
            block: self.block.share(),
            low: from,
            end: to,
            options: self.options,
        })
    }

    // Where the window ends once the slots in `cut` are gone.
    fn end_after_cut(&self, cut: &Range<usize>) -> usize {
        if self.end <= cut.start {
            self.end
        } else if self.end <= cut.end {
            cut.start
        } else {
            self.end - (cut.end - cut.start)
        }
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Builds a container of `capacity` slots whose window starts at `low`
    /// and holds `slots` in order.
    fn assemble(
        capacity: usize,
        low: usize,
        slots: impl Iterator<Item = Option<T>>,
        options: ArrayOptions,
    ) -> Self {
        let block = Block::empty(capacity);
        let mut end = low;
        for slot in slots {
            block.replace(end, slot);
            end += 1;
        }
        Self {
            block,
            low,
            end,
            options,
        }
    }

    /// Returns the slot at `index`; `None` for an empty slot.
    pub fn get(&self, index: usize) -> Result<Option<T>> {
        self.check_index(index)?;
        Ok(self.block.get(index))
    }

    /// Iterates over the slots of the window, in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<T>> + '_ {
        (self.low..self.end).map(move |i| self.block.get(i))
    }

    /// Replaces the block with one slot more, putting `item` at `gap` and
    /// moving every slot from `gap` on one position right.
    fn grow_by_one(&mut self, gap: usize, item: T) {
        let capacity = self.capacity();
        tracing::trace!(from = capacity, to = capacity + 1, "Growing storage");
        let block = self.block.remap(capacity + 1, |i| match i.cmp(&gap) {
            Ordering::Less => Some(i),
            Ordering::Equal => None,
            Ordering::Greater => Some(i - 1),
        });
        block.replace(gap, Some(item));
        self.block = block;
    }

    /// Appends `item` right after `high`.
    ///
    /// Uses the next slot when the block has one, otherwise grows the block
    /// by exactly one slot.
    pub fn push(&mut self, item: T) {
        if self.end < self.capacity() {
            self.block.replace(self.end, Some(item));
        } else {
            self.grow_by_one(self.end, item);
        }
        self.end += 1;
    }

    /// Inserts `item` at `index`, moving the slots from `index` to `high` one
    /// position right.
    ///
    /// Inserting into a slack slot past the window extends the window up to
    /// and including `index`.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<()> {
        self.check_index(index)?;
        if self.end < self.capacity() {
            if index < self.end {
                self.block.shift_right(index, self.end);
                self.end += 1;
            } else {
                self.end = index + 1;
            }
            self.block.replace(index, Some(item));
        } else {
            // A full block has no slack, so `index` is inside the window.
            self.grow_by_one(index, item);
            self.end += 1;
        }
        Ok(())
    }

    /// Removes the slot at `index`, shrinking the block by one and moving
    /// later slots one position left. Returns the removed slot.
    pub fn remove(&mut self, index: usize) -> Result<Option<T>> {
        self.check_index(index)?;
        let removed = self.block.get(index);
        let cut = index..index + 1;
        tracing::trace!(
            from = self.capacity(),
            to = self.capacity() - 1,
            "Shrinking storage"
        );
        self.end = self.end_after_cut(&cut);
        self.block = self.block.without(cut);
        Ok(removed)
    }

    /// Concatenates `self` and `other` into a new container with room for
    /// both capacities.
    ///
    /// The elements of `other` follow directly after `high`, so slack in
    /// `self` never shows up as a gap.
    pub fn append(&self, other: &Self) -> Self {
        Self::assemble(
            self.capacity() + other.capacity(),
            self.low,
            self.iter().chain(other.iter()),
            self.options,
        )
    }

    /// Returns a new container with the elements of `other` inserted at
    /// `index`, followed by the elements of `self` from `index` on.
    pub fn insert(&self, index: usize, other: &Self) -> Result<Self> {
        self.check_index(index)?;
        let head = (self.low..index).map(|i| self.block.get(i));
        let tail = (index..self.end).map(|i| self.block.get(i));
        Ok(Self::assemble(
            self.capacity() + other.capacity(),
            self.low,
            head.chain(other.iter()).chain(tail),
            self.options,
        ))
    }

    /// Returns a new container without the slots in `from..to`. Later slots
    /// move left by `to - from` and the capacity shrinks by the same amount.
    pub fn delete(&self, from: usize, to: usize) -> Result<Self> {
        self.check_range(from, to)?;
        let cut = from..to;
        Ok(Self {
            end: self.end_after_cut(&cut),
            block: self.block.without(cut),
            low: self.low,
            options: self.options,
        })
    }

    /// Copies `from..to` into a container with its own storage.
    ///
    /// The copy keeps the original indices: its window is `from..to`.
    pub fn extract(&self, from: usize, to: usize) -> Result<Self> {
        self.check_range(from, to)?;
        Ok(Self {
            block: self.block.remap(to, |i| (i >= from).then_some(i)),
            low: from,
            end: to,
            options: self.options,
        })
    }

    /// Copies everything before `to`; same as `extract(low, to)`.
    pub fn split_prefix(&self, to: usize) -> Result<Self> {
        self.extract(self.low, to)
    }

    /// Copies everything from `from` on; same as `extract(from, high + 1)`.
    pub fn split_suffix(&self, from: usize) -> Result<Self> {
        self.extract(from, self.end)
    }
}

/// Deep copy: the clone gets its own block with the window's slots copied
/// over. Use [`DynamicArray::sublist`] for an aliasing view.
impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let window = self.low..self.end;
        Self {
            block: self
                .block
                .remap(self.capacity(), |i| window.contains(&i).then_some(i)),
            low: self.low,
            end: self.end,
            options: self.options,
        }
    }
}

/// Collects into a container of exactly as many slots as items.
impl<T: Clone> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut array = Self::new(items.len());
        for item in items {
            array.push(item);
        }
        array
    }
}

/// Element-wise comparison of the windows. Capacity, `low` and storage
/// identity are ignored.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.block.with_slots(|ours| {
            other
                .block
                .with_slots(|theirs| ours[self.low..self.end] == theirs[other.low..other.end])
        })
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        self.block.with_slots(|slots| {
            for (i, slot) in slots[self.low..self.end].iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                match slot {
                    Some(item) => write!(f, "{item}")?,
                    None => f.write_str("_")?,
                }
            }
            Ok(())
        })?;
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.block.with_slots(|slots| {
            f.debug_struct("DynamicArray")
                .field("low", &self.low)
                .field("high", &self.high())
                .field("capacity", &slots.len())
                .field("slots", &slots)
                .finish()
        })
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
