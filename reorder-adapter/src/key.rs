#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use reorder::BoundingBox;

#[cfg(feature = "std")]
pub trait ReordererKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> ReordererKey for T {}

#[cfg(not(feature = "std"))]
pub trait ReordererKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> ReordererKey for T {}

#[cfg(feature = "std")]
pub(crate) type BoxMap<K> = HashMap<K, BoundingBox>;
#[cfg(not(feature = "std"))]
pub(crate) type BoxMap<K> = BTreeMap<K, BoundingBox>;

/// Normalizes a composite/namespaced string key to the segment the order
/// store actually uses.
///
/// Some retained-UI frameworks suffix child keys with a `".$"`-separated
/// namespace; comparing raw keys across renders then silently fails. Pass
/// every external key through this before lookup.
///
/// Plain keys come back unchanged.
pub fn canonical_key(raw: &str) -> &str {
    raw.rsplit(".$").next().unwrap_or(raw)
}
