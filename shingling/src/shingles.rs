//! Streaming w-shingling over arbitrary token iterators.
use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::trace;

use crate::config::WindowSize;
use crate::errors::{Result, ShingleError};

/// Creates a lazy iterator of all contiguous shingles of `window` tokens,
/// validating `window` before any token is consumed.
///
/// Each shingle is an independent copy of the window, so tokens must be [`Clone`]
/// for the iterator to produce items. `window` accepts integers, integral floats,
/// and [`WindowSize`]; anything not positive fails with an invalid-argument error.
///
/// # Examples
///
/// ```
/// use shingling::shingle;
///
/// let shingles: Vec<_> = shingle(["a", "b", "c", "d", "e"], 4).unwrap().collect();
/// assert_eq!(shingles, vec![vec!["a", "b", "c", "d"], vec!["b", "c", "d", "e"]]);
///
/// assert!(shingle(["a", "b"], 0).is_err());
/// assert!(shingle(["a", "b"], -1).is_err());
/// ```
pub fn shingle<I, W>(tokens: I, window: W) -> Result<Shingles<I::IntoIter>>
where
    I: IntoIterator,
    W: TryInto<WindowSize>,
    ShingleError: From<<W as TryInto<WindowSize>>::Error>,
{
    let window = window.try_into()?;
    Ok(Shingles::new(tokens.into_iter(), window))
}

/// Iterator of shingles produced from a token iterator, holding at most
/// [`Self::window_size()`] tokens at a time.
///
/// The source is owned and consumed once. Dropping the iterator drops the source.
pub struct Shingles<I>
where
    I: Iterator,
{
    tokens: I,
    window: VecDeque<I::Item>,
    window_size: usize,
    emitted: usize,
    exhausted: bool,
}

impl<I> Shingles<I>
where
    I: Iterator,
{
    /// Creates an instance over `tokens`.
    pub fn new(tokens: I, window_size: WindowSize) -> Self {
        Self {
            tokens,
            window: VecDeque::new(),
            window_size: window_size.get(),
            emitted: 0,
            exhausted: false,
        }
    }

    /// Gets the number of tokens in each shingle.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Gets the number of shingles produced so far.
    pub const fn emitted(&self) -> usize {
        self.emitted
    }

    fn remaining(&self, tokens: usize) -> usize {
        if self.window.len() == self.window_size {
            tokens
        } else {
            tokens
                .saturating_add(self.window.len() + 1)
                .saturating_sub(self.window_size)
        }
    }
}

impl<I> Iterator for Shingles<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        for token in self.tokens.by_ref() {
            // Pops before pushing so that the buffer never exceeds the window.
            if self.window.len() == self.window_size {
                self.window.pop_front();
            }
            self.window.push_back(token);
            if self.window.len() == self.window_size {
                self.emitted += 1;
                return Some(self.window.iter().cloned().collect());
            }
        }
        self.exhausted = true;
        self.window.clear();
        trace!(
            window_size = self.window_size,
            emitted = self.emitted,
            "token source exhausted"
        );
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let (lower, upper) = self.tokens.size_hint();
        (
            self.remaining(lower),
            upper.and_then(|upper| {
                upper
                    .checked_add(self.window.len() + 1)
                    .map(|_| self.remaining(upper))
            }),
        )
    }
}

impl<I> FusedIterator for Shingles<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Extension trait adapting any iterator into [`Shingles`].
///
/// # Examples
///
/// ```
/// use shingling::{ShingleExt, WindowSize};
///
/// let window = WindowSize::new(2).unwrap();
/// let shingles: Vec<_> = (1..=4).shingles(window).collect();
/// assert_eq!(shingles, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
/// ```
pub trait ShingleExt: Iterator + Sized {
    /// Shingles the tokens of this iterator.
    fn shingles(self, window_size: WindowSize) -> Shingles<Self> {
        Shingles::new(self, window_size)
    }
}

impl<I> ShingleExt for I where I: Iterator {}
