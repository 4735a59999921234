use super::PrefixMap;
use qp_trie::Trie;
use std::borrow::Borrow;

#[derive(Debug, PartialEq, Eq, Clone)]
struct Key<K>(K);

impl<K: Borrow<str>> Borrow<[u8]> for Key<K> {
    fn borrow(&self) -> &[u8] {
        self.0.borrow().as_bytes()
    }
}

/// A prefix map backed by a qp-trie
///
/// This is the default map for function names and requires the `qp-trie` feature. Lookups walk
/// the trie one byte at a time, so they cost `O(longest_key)` and stop as soon as no key can
/// match.
///
/// # Example
/// ```
/// use exprtree::prefix_map::QpTriePrefixMap;
/// use exprtree::FUNCTIONS;
///
/// let functions = QpTriePrefixMap::from_iter(FUNCTIONS);
/// ```
#[derive(Debug, Clone)]
pub struct QpTriePrefixMap<K: Clone, V>(Trie<Key<K>, V>);

impl<K, V> FromIterator<(K, V)> for QpTriePrefixMap<K, V>
where
    K: Borrow<str> + Clone,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        QpTriePrefixMap(iter.into_iter().map(|(key, val)| (Key(key), val)).collect())
    }
}

impl<K, V> PrefixMap<V> for QpTriePrefixMap<K, V>
where
    K: Borrow<str> + Clone,
{
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let bytes = inp.as_ref().as_bytes();
        let mut best = self.0.get(&[][..]).map(|val| (0, val));
        for len in 1..=bytes.len() {
            let prefix = &bytes[..len];
            if self.0.subtrie(prefix).is_empty() {
                break;
            }
            if let Some(val) = self.0.get(prefix) {
                best = Some((len, val));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::{PrefixMap, QpTriePrefixMap};
    use crate::{Function, FUNCTIONS};

    #[test]
    fn longest_function_name() {
        let map = QpTriePrefixMap::from_iter(FUNCTIONS);
        assert_eq!(map.get_longest_prefix("tanh(x)"), Some((4, &Function::Tanh)));
        assert_eq!(map.get_longest_prefix("tan(x)"), Some((3, &Function::Tan)));
        assert_eq!(map.get_longest_prefix("sq"), None);
        assert_eq!(map.get_longest_prefix("π(x)"), None);
    }

    #[test]
    fn later_aliases_win() {
        let map = QpTriePrefixMap::from_iter([
            ("sin", Function::Sin),
            ("sinh", Function::Sinh),
            ("sin", Function::Asin),
        ]);
        assert_eq!(map.get_longest_prefix("sin(x)"), Some((3, &Function::Asin)));
        assert_eq!(map.get_longest_prefix("sinh(x)"), Some((4, &Function::Sinh)));
        assert_eq!(map.get_longest_prefix("si"), None);
    }
}
