//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a vocabulary or label id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max id in a vocabulary is less than `T::max()`.
pub trait IdType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> IdType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type PTHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> PTHashMap<K, V> {
            PTHashMap::new()
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type PTHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> PTHashMap<K, V> {
            PTHashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_id_types() {
        struct IsId<T: IdType>(PhantomData<T>);

        let _: IsId<u16>;
        let _: IsId<u32>;
        let _: IsId<u64>;
        let _: IsId<usize>;
    }

    #[test]
    fn test_hash_map_new() {
        let mut map: PTHashMap<&str, u32> = hash_map_new();
        map.insert("a", 1);
        assert_eq!(map.get("a"), Some(&1));
    }
}
