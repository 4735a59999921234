use super::PrefixMap;
use std::borrow::Borrow;

/// A prefix map that tries every key, longest first
///
/// Lookups are `O(num_keys)`, which is perfectly adequate for a table as small as the function
/// names, and the only requirement on keys is equality. Later duplicates of a key replace earlier
/// ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearPrefixMap<K, V>(Box<[(K, V)]>);

impl<K, V> LinearPrefixMap<K, V>
where
    K: Borrow<str>,
{
    /// Create from a vector of entries
    pub fn from_vec<B>(inp: B) -> Self
    where
        B: Into<Vec<(K, V)>>,
    {
        let mut entries = inp.into();
        // reversed so the stable sort keeps the last duplicate first
        entries.reverse();
        entries.sort_by(|(left, _), (right, _)| {
            let (left, right) = (left.borrow(), right.borrow());
            right.len().cmp(&left.len()).then_with(|| left.cmp(right))
        });
        entries.dedup_by(|(dup, _), (kept, _)| {
            let dup: &str = (*dup).borrow();
            let kept: &str = (*kept).borrow();
            dup == kept
        });
        LinearPrefixMap(entries.into())
    }
}

impl<K, V> FromIterator<(K, V)> for LinearPrefixMap<K, V>
where
    K: Borrow<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_vec(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<K: Borrow<str>, V> PrefixMap<V> for LinearPrefixMap<K, V> {
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let inp = inp.as_ref();
        self.0
            .iter()
            .find(|(key, _)| inp.starts_with(key.borrow()))
            .map(|(key, val)| (key.borrow().len(), val))
    }
}
