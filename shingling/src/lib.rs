//! Lazy w-shingling of token sequences for similarity hashing.
//!
//! A shingle is a contiguous group of `w` consecutive tokens. This library
//! slides a window of `w` tokens over any iterator and yields each window
//! once it is full, producing the input expected by feature hashing such as
//! simhash or minhash.
//!
//! ```
//! use shingling::{shingle, ShingleConfig};
//!
//! let shingles: Vec<_> = shingle(["a", "b", "c", "d", "e"], 2).unwrap().collect();
//! assert_eq!(
//!     shingles,
//!     vec![vec!["a", "b"], vec!["b", "c"], vec!["c", "d"], vec!["d", "e"]]
//! );
//!
//! // Word trigrams of a text.
//! let config = ShingleConfig::new(3, Some(' ')).unwrap();
//! assert_eq!(config.shingles("the town of books").count(), 2);
//! ```
#![deny(missing_docs)]

pub mod config;
pub mod errors;
pub mod shingles;
pub mod slice;
pub mod tokenize;

pub use config::{ShingleConfig, WindowSize, DEFAULT_WINDOW_SIZE};
pub use errors::{Result, ShingleError};
pub use shingles::{shingle, ShingleExt, Shingles};
pub use slice::{shingle_slice, SliceShingles};
pub use tokenize::{tokenize, Tokens};
