//! Serialization helpers that keep deep trees off the native stack.
//!
//! Every level of nesting passes through a child field, so checking the
//! stack there covers the whole derived serializer recursion.

use config::constants::{STACK_GROWTH_BYTES, STACK_RED_ZONE_BYTES};
use serde::{Serialize, Serializer};
use stacker::maybe_grow;

pub(crate) fn serialize_nodes<T, S>(nodes: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    maybe_grow(STACK_RED_ZONE_BYTES, STACK_GROWTH_BYTES, || nodes.serialize(serializer))
}

pub(crate) fn serialize_boxed<T, S>(node: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    maybe_grow(STACK_RED_ZONE_BYTES, STACK_GROWTH_BYTES, || node.serialize(serializer))
}
