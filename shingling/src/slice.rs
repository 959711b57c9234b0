//! Zero-copy w-shingling over in-memory slices.
use std::iter::FusedIterator;

use crate::config::WindowSize;
use crate::errors::{Result, ShingleError};

/// Creates an iterator of shingles borrowed from `tokens`.
///
/// Produces the same shingles as [`crate::shingle()`] without copying tokens.
///
/// # Examples
///
/// ```
/// use shingling::shingle_slice;
///
/// let tokens = ["a", "b", "c"];
/// let mut iter = shingle_slice(&tokens, 2).unwrap();
/// assert_eq!(iter.next(), Some(&tokens[0..2]));
/// assert_eq!(iter.next(), Some(&tokens[1..3]));
/// assert_eq!(iter.next(), None);
/// ```
pub fn shingle_slice<T, W>(tokens: &[T], window: W) -> Result<SliceShingles<'_, T>>
where
    W: TryInto<WindowSize>,
    ShingleError: From<<W as TryInto<WindowSize>>::Error>,
{
    Ok(SliceShingles::new(tokens, window.try_into()?))
}

/// Iterator of shingles borrowed from a slice.
#[derive(Clone, Debug)]
pub struct SliceShingles<'a, T> {
    tokens: &'a [T],
    window_size: usize,
    position: usize,
}

impl<'a, T> SliceShingles<'a, T> {
    /// Creates an instance.
    pub const fn new(tokens: &'a [T], window_size: WindowSize) -> Self {
        Self {
            tokens,
            window_size: window_size.get(),
            position: 0,
        }
    }

    const fn remaining(&self) -> usize {
        (self.tokens.len() + 1).saturating_sub(self.position.saturating_add(self.window_size))
    }
}

impl<'a, T> Iterator for SliceShingles<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let window = &self.tokens[self.position..self.position + self.window_size];
        self.position += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for SliceShingles<'_, T> {}

impl<T> FusedIterator for SliceShingles<'_, T> {}
