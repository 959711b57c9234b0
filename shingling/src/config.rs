//! Configuration of shingling.
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use tracing::debug;

use crate::errors::{Result, ShingleError};
use crate::shingles::Shingles;
use crate::tokenize::{tokenize, Tokens};

/// Window size used when none is given.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

const MUST_BE_POSITIVE: &str = "Window size must be positive.";
const MUST_BE_INTEGER: &str = "Window size must be an integer.";
const TOO_LARGE: &str = "Window size exceeds the addressable size.";

fn reject<D>(window: D, msg: &'static str) -> ShingleError
where
    D: fmt::Display,
{
    debug!(window = %window, reason = msg, "rejected window size");
    ShingleError::invalid_argument(msg)
}

/// Number of tokens in a shingle, which is always positive.
///
/// A value of this type can only be obtained through validation, so every
/// shingling operation that receives one may start consuming input at once.
///
/// # Examples
///
/// ```
/// use shingling::WindowSize;
///
/// assert_eq!(WindowSize::default().get(), 4);
/// assert_eq!(WindowSize::try_from(3i32).unwrap().get(), 3);
/// assert!(WindowSize::try_from(0i32).is_err());
/// assert!(WindowSize::try_from(-1i64).is_err());
/// assert!(WindowSize::try_from(2.5).is_err());
/// assert_eq!("8".parse::<WindowSize>().unwrap().get(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(DEFAULT_WINDOW_SIZE - 1));

    /// Creates an instance, returning an error if `window` is zero.
    pub fn new(window: usize) -> Result<Self> {
        NonZeroUsize::new(window)
            .map(Self)
            .ok_or_else(|| reject(window, MUST_BE_POSITIVE))
    }

    /// Gets the number of tokens.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<NonZeroUsize> for WindowSize {
    fn from(window: NonZeroUsize) -> Self {
        Self(window)
    }
}

impl From<WindowSize> for usize {
    fn from(window: WindowSize) -> Self {
        window.get()
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = ShingleError;

    fn try_from(window: usize) -> Result<Self> {
        Self::new(window)
    }
}

macro_rules! impl_try_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for WindowSize {
                type Error = ShingleError;

                fn try_from(window: $t) -> Result<Self> {
                    let converted =
                        usize::try_from(window).map_err(|_| reject(window, TOO_LARGE))?;
                    Self::new(converted)
                }
            }
        )*
    };
}

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for WindowSize {
                type Error = ShingleError;

                fn try_from(window: $t) -> Result<Self> {
                    if window <= 0 {
                        return Err(reject(window, MUST_BE_POSITIVE));
                    }
                    let converted =
                        usize::try_from(window).map_err(|_| reject(window, TOO_LARGE))?;
                    Self::new(converted)
                }
            }
        )*
    };
}

impl_try_from_unsigned!(u32, u64);
impl_try_from_signed!(i32, i64, isize);

impl TryFrom<f64> for WindowSize {
    type Error = ShingleError;

    /// Accepts integral values only; fractional sizes are rejected rather than rounded.
    fn try_from(window: f64) -> Result<Self> {
        if !window.is_finite() {
            return Err(reject(window, MUST_BE_INTEGER));
        }
        if window <= 0. {
            return Err(reject(window, MUST_BE_POSITIVE));
        }
        if window.fract() != 0. {
            return Err(reject(window, MUST_BE_INTEGER));
        }
        if window >= usize::MAX as f64 {
            return Err(reject(window, TOO_LARGE));
        }
        Self::new(window as usize)
    }
}

impl FromStr for WindowSize {
    type Err = ShingleError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(window) = s.parse::<usize>() {
            return Self::new(window);
        }
        if let Ok(window) = s.parse::<i64>() {
            return Self::try_from(window);
        }
        match s.parse::<f64>() {
            Ok(window) => Self::try_from(window),
            Err(_) => Err(reject(s, MUST_BE_INTEGER)),
        }
    }
}

/// Configuration of text shingling, bundling the window size with the
/// tokenization rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShingleConfig {
    window: WindowSize,
    delimiter: Option<char>,
}

impl ShingleConfig {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `window` - Window size for w-shingling (must be a positive integer).
    /// * `delimiter` - Delimiter for recognizing words as tokens.
    ///                 If `None`, characters are used for tokens.
    pub fn new<W>(window: W, delimiter: Option<char>) -> Result<Self>
    where
        W: TryInto<WindowSize>,
        ShingleError: From<<W as TryInto<WindowSize>>::Error>,
    {
        let window = window.try_into()?;
        debug!(%window, ?delimiter, "configured shingling");
        Ok(Self { window, delimiter })
    }

    /// Gets the window size.
    pub const fn window(&self) -> WindowSize {
        self.window
    }

    /// Gets the delimiter, if words are the tokens.
    pub const fn delimiter(&self) -> Option<char> {
        self.delimiter
    }

    /// Tokenizes `text` and shingles the tokens, both lazily.
    ///
    /// # Examples
    ///
    /// ```
    /// use shingling::ShingleConfig;
    ///
    /// let config = ShingleConfig::new(2, Some(' ')).unwrap();
    /// let shingles: Vec<_> = config.shingles("abc de fgh").collect();
    /// assert_eq!(shingles, vec![vec!["abc", "de"], vec!["de", "fgh"]]);
    /// ```
    pub fn shingles<'a>(&self, text: &'a str) -> Shingles<Tokens<'a>> {
        Shingles::new(tokenize(text, self.delimiter), self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(e: ShingleError) -> &'static str {
        match e {
            ShingleError::InvalidArgument(e) => e.message(),
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(WindowSize::default().get(), DEFAULT_WINDOW_SIZE);
        assert_eq!(ShingleConfig::default().window().get(), 4);
        assert_eq!(ShingleConfig::default().delimiter(), None);
    }

    #[test]
    fn test_zero() {
        assert_eq!(message(WindowSize::new(0).unwrap_err()), MUST_BE_POSITIVE);
        assert_eq!(message(WindowSize::try_from(0u64).unwrap_err()), MUST_BE_POSITIVE);
        assert_eq!(message(WindowSize::try_from(0i32).unwrap_err()), MUST_BE_POSITIVE);
    }

    #[test]
    fn test_negative() {
        assert_eq!(message(WindowSize::try_from(-1i32).unwrap_err()), MUST_BE_POSITIVE);
        assert_eq!(message(WindowSize::try_from(-1i64).unwrap_err()), MUST_BE_POSITIVE);
        assert_eq!(
            message(WindowSize::try_from(isize::MIN).unwrap_err()),
            MUST_BE_POSITIVE
        );
    }

    #[test]
    fn test_positive_integers() {
        assert_eq!(WindowSize::try_from(1i32).unwrap().get(), 1);
        assert_eq!(WindowSize::try_from(7u32).unwrap().get(), 7);
        assert_eq!(WindowSize::try_from(9i64).unwrap().get(), 9);
        assert_eq!(WindowSize::try_from(usize::MAX).unwrap().get(), usize::MAX);
    }

    #[test]
    fn test_floats() {
        assert_eq!(WindowSize::try_from(4.).unwrap().get(), 4);
        assert_eq!(message(WindowSize::try_from(2.5).unwrap_err()), MUST_BE_INTEGER);
        assert_eq!(message(WindowSize::try_from(0.).unwrap_err()), MUST_BE_POSITIVE);
        assert_eq!(message(WindowSize::try_from(-0.5).unwrap_err()), MUST_BE_POSITIVE);
        assert_eq!(message(WindowSize::try_from(f64::NAN).unwrap_err()), MUST_BE_INTEGER);
        assert_eq!(
            message(WindowSize::try_from(f64::INFINITY).unwrap_err()),
            MUST_BE_INTEGER
        );
        assert_eq!(message(WindowSize::try_from(1e30).unwrap_err()), TOO_LARGE);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4".parse::<WindowSize>().unwrap().get(), 4);
        assert_eq!(" 12 ".parse::<WindowSize>().unwrap().get(), 12);
        assert_eq!("3.0".parse::<WindowSize>().unwrap().get(), 3);
        assert_eq!(message("0".parse::<WindowSize>().unwrap_err()), MUST_BE_POSITIVE);
        assert_eq!(message("-1".parse::<WindowSize>().unwrap_err()), MUST_BE_POSITIVE);
        assert_eq!(message("1.5".parse::<WindowSize>().unwrap_err()), MUST_BE_INTEGER);
        assert_eq!(message("four".parse::<WindowSize>().unwrap_err()), MUST_BE_INTEGER);
        assert_eq!(message("".parse::<WindowSize>().unwrap_err()), MUST_BE_INTEGER);
    }

    #[test]
    fn test_display() {
        assert_eq!(WindowSize::new(5).unwrap().to_string(), "5");
    }

    #[test]
    fn test_config_new() {
        let config = ShingleConfig::new(3, Some(' ')).unwrap();
        assert_eq!(config.window().get(), 3);
        assert_eq!(config.delimiter(), Some(' '));

        let config = ShingleConfig::new(WindowSize::default(), None).unwrap();
        assert_eq!(config.window().get(), 4);

        assert!(ShingleConfig::new(0, None).is_err());
        assert!(ShingleConfig::new(-1, None).is_err());
    }

    #[test]
    fn test_config_char_shingles() {
        let config = ShingleConfig::new(3, None).unwrap();
        let shingles: Vec<_> = config.shingles("abcd").collect();
        assert_eq!(shingles, vec![vec!["a", "b", "c"], vec!["b", "c", "d"]]);
    }

    #[test]
    fn test_config_word_shingles() {
        let config = ShingleConfig::new(3, Some(' ')).unwrap();
        let shingles: Vec<_> = config.shingles("abc de fgh").collect();
        assert_eq!(shingles, vec![vec!["abc", "de", "fgh"]]);

        let config = ShingleConfig::new(4, Some(' ')).unwrap();
        assert_eq!(config.shingles("abc de fgh").count(), 0);
    }
}
