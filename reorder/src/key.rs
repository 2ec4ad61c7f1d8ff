#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyFlagMap<K> = HashMap<K, bool>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyFlagMap<K> = BTreeMap<K, bool>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait KeyMapKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> KeyMapKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait KeyMapKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> KeyMapKey for K {}
