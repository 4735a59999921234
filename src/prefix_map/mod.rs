//! String keyed maps that find the longest key prefixing an input
//!
//! The [tokenizer][crate::Tokenizer] uses these to recognize function names: when it sees a letter
//! it asks its map for the longest name that starts the remaining input, so `sinh(x)` resolves to
//! `sinh` rather than stopping at `sin`.
//!
//! The default map is backed by `qp-trie` (the `qp-trie` feature, on by default). Without that
//! feature a [HashPrefixMap] is used instead, and the `fnv` feature adds [FnvHashPrefixMap]. The
//! [LinearPrefixMap] is the simplest of all and is used as the reference in tests.
//!
//! # Example
//!
//! ```
//! use exprtree::prefix_map::{LinearPrefixMap, PrefixMap};
//! use exprtree::{Function, FUNCTIONS};
//!
//! let functions = LinearPrefixMap::from_vec(FUNCTIONS);
//! assert_eq!(functions.get_longest_prefix("sinh(x)"), Some((4, &Function::Sinh)));
//! assert_eq!(functions.get_longest_prefix("sin(x)"), Some((3, &Function::Sin)));
//! ```

mod hash;
mod linear;
#[cfg(feature = "qp-trie")]
mod trie;

#[cfg(feature = "fnv")]
use ::fnv::FnvBuildHasher;
pub use hash::HashPrefixMap;
pub use linear::LinearPrefixMap;
#[cfg(feature = "qp-trie")]
pub use trie::QpTriePrefixMap;

/// A hash prefix map using the fnv hasher
///
/// Requires the `fnv` feature.
///
/// # Example
/// ```
/// use exprtree::prefix_map::FnvHashPrefixMap;
/// use exprtree::FUNCTIONS;
///
/// let functions = FnvHashPrefixMap::from_iter_hasher(FUNCTIONS);
/// ```
#[cfg(feature = "fnv")]
pub type FnvHashPrefixMap<K, V> = HashPrefixMap<K, V, FnvBuildHasher>;

/// A map that can look up values by a prefix of its input
pub trait PrefixMap<V> {
    /// Find the longest key that is a prefix of `inp`, returning its byte length and value
    ///
    /// # Example
    /// ```
    /// use exprtree::prefix_map::{HashPrefixMap, PrefixMap};
    ///
    /// let map = HashPrefixMap::from_iter([("ln", 1), ("log", 2)]);
    /// assert_eq!(map.get_longest_prefix("log(x)"), Some((3, &2)));
    /// assert_eq!(map.get_longest_prefix("lo"), None);
    /// ```
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)>;
}
