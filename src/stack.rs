use std::fmt;
use std::mem;

use crate::error::StackError;
use crate::frame::Frame;

/// A LIFO stack built on a chain of frames that ends in a sentinel.
///
/// The element count is read through [`Stack::size`]; only `push` and `pop`
/// change it.
///
/// ```compile_fail
/// use sentinel_stack::Stack;
///
/// let mut stack: Stack<i32> = Stack::new();
/// stack.size = 3;
/// ```
pub struct Stack<T> {
    top: Frame<T>,
    empty: T,
    size: usize,
}

impl<T: Default> Stack<T> {
    pub fn new() -> Self {
        Stack {
            top: Frame::Sentinel,
            empty: T::default(),
            size: 0,
        }
    }

    /// Removes and returns the top value.
    ///
    /// On an empty stack this returns `T::default()` and leaves the size at
    /// zero. Use [`Stack::try_pop`] to tell the two cases apart.
    pub fn pop(&mut self) -> T {
        self.take_top().unwrap_or_default()
    }
}

impl<T> Stack<T> {
    pub fn push(&mut self, value: T) {
        let next = mem::replace(&mut self.top, Frame::Sentinel);
        self.top = Frame::link(value, next);
        self.size += 1;
    }

    pub fn try_pop(&mut self) -> Result<T, StackError> {
        self.take_top().ok_or(StackError::Empty)
    }

    /// Returns the top value, or the empty value when nothing is stored.
    pub fn peek(&self) -> &T {
        self.top.value().unwrap_or(&self.empty)
    }

    pub fn try_peek(&self) -> Result<&T, StackError> {
        self.top.value().ok_or(StackError::Empty)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_sentinel()
    }

    pub fn clear(&mut self) {
        while self.take_top().is_some() {}
    }

    /// Copies every value out, top first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.top.frames().cloned().collect()
    }

    fn take_top(&mut self) -> Option<T> {
        let (value, next) = mem::replace(&mut self.top, Frame::Sentinel).unlink()?;
        self.top = next;
        self.size -= 1;
        Some(value)
    }
}

impl<T: Default> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut stack = Stack {
            top: Frame::Sentinel,
            empty: self.empty.clone(),
            size: 0,
        };
        let values: Vec<&T> = self.top.frames().collect();
        for value in values.into_iter().rev() {
            stack.push(value.clone());
        }
        stack
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.top.frames().eq(other.top.frames())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.top.frames()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Default> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}
