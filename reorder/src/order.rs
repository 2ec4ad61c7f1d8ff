use alloc::vec::Vec;

/// The canonical sequence of item keys.
///
/// Always a permutation of the currently-known item set: no duplicates, no
/// missing keys, no foreign keys. Equality is positional, which is what
/// reconciliation uses to decide whether anything actually changed.
///
/// Mutation primitives return a new `Order` instead of editing in place so
/// the drag session can keep working from its start-of-gesture snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order<K> {
    keys: Vec<K>,
}

impl<K> Order<K> {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.keys.iter()
    }

    fn debug_assert_unique(&self)
    where
        K: PartialEq,
    {
        if cfg!(debug_assertions) {
            for (i, a) in self.keys.iter().enumerate() {
                debug_assert!(
                    !self.keys[i + 1..].contains(a),
                    "Order: duplicate key at index {i}"
                );
            }
        }
    }
}

impl<K: PartialEq> Order<K> {
    /// Panics (in debug builds) on duplicate keys: a malformed host
    /// collection must never silently corrupt the order.
    pub fn from_keys(keys: Vec<K>) -> Self {
        let order = Self { keys };
        order.debug_assert_unique();
        order
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }
}

impl<K: Clone + PartialEq> Order<K> {
    /// Computes the next order from the host's current keys.
    ///
    /// With `preserve_order`, keys already present keep their relative order,
    /// brand-new keys are appended in host order, and keys no longer present
    /// are dropped. Without it, the result is exactly `host_keys`.
    ///
    /// Idempotent: unchanged host keys produce a positionally equal order.
    pub fn reconcile(&self, host_keys: &[K], preserve_order: bool) -> Order<K> {
        let next = if preserve_order {
            let mut keys: Vec<K> = self
                .keys
                .iter()
                .filter(|k| host_keys.contains(k))
                .cloned()
                .collect();
            for key in host_keys {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
            Self { keys }
        } else {
            Self {
                keys: host_keys.to_vec(),
            }
        };
        next.debug_assert_unique();
        next
    }

    /// Shifts the item at `from` toward `to` one position at a time,
    /// skipping any position whose key is disabled.
    ///
    /// The chain of adjacent swaps is what makes intermediate animation
    /// frames read as a shift rather than a teleport. Disabled keys end the
    /// pass in their original position. Reflexive when `from == to`.
    ///
    /// An index outside `[0, len)` is a programming error and panics; the
    /// empty order is the one exception (every operation on it is a no-op).
    pub fn swap_range(
        &self,
        from: usize,
        to: usize,
        mut is_disabled: impl FnMut(&K) -> bool,
    ) -> Order<K> {
        if self.keys.is_empty() {
            return self.clone();
        }
        let len = self.keys.len();
        assert!(from < len, "swap_range: from index {from} out of bounds ({len})");
        assert!(to < len, "swap_range: to index {to} out of bounds ({len})");

        let mut keys = self.keys.clone();
        if from == to {
            return Self { keys };
        }

        let forward = from < to;
        // `at` is where the dragged item currently rests as the chain walks
        // toward `to`.
        let mut at = from;
        let mut index = from;
        loop {
            index = if forward { index + 1 } else { index - 1 };
            if !is_disabled(&keys[index]) {
                keys.swap(at, index);
                at = index;
            }
            if index == to {
                break;
            }
        }
        Self { keys }
    }
}

impl<K: PartialEq> FromIterator<K> for Order<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter.into_iter().collect())
    }
}

impl<K> IntoIterator for Order<K> {
    type Item = K;
    type IntoIter = alloc::vec::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Order<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
