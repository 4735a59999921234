use super::PrefixMap;
use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// A prefix map that buckets keys by length into hash maps
///
/// A lookup probes one bucket per candidate length, longest first, so it costs
/// `O(longest_key)` hashes. Later duplicates of a key replace earlier ones.
///
/// # Example
/// ```
/// use exprtree::prefix_map::HashPrefixMap;
/// use exprtree::FUNCTIONS;
///
/// let functions = HashPrefixMap::from_iter(FUNCTIONS);
/// ```
#[derive(Debug, Clone)]
pub struct HashPrefixMap<K, V, S = RandomState> {
    by_len: Vec<HashMap<K, V, S>>,
}

impl<K, V, S> HashPrefixMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher + Default,
{
    /// Create from an iterator using a custom hasher
    pub fn from_iter_hasher<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut by_len: Vec<HashMap<K, V, S>> = Vec::new();
        for (key, val) in iter {
            let len = key.borrow().len();
            if by_len.len() <= len {
                by_len.resize_with(len + 1, HashMap::default);
            }
            by_len[len].insert(key, val);
        }
        HashPrefixMap { by_len }
    }
}

impl<K, V> FromIterator<(K, V)> for HashPrefixMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_iter_hasher(iter)
    }
}

impl<K, V, S> PrefixMap<V> for HashPrefixMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let inp = inp.as_ref();
        let longest = self.by_len.len().min(inp.len() + 1);
        (0..longest).rev().find_map(|len| {
            // `get` is None off a char boundary
            let prefix = inp.get(..len)?;
            self.by_len[len].get(prefix).map(|val| (len, val))
        })
    }
}
