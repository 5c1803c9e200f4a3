//! Per-call serialization state.

use std::collections::HashMap;

use fixedbitset::FixedBitSet;

use super::extract::Introspect;
use super::options::IntrospectionOptions;

/// Identity of an object within one call: its address plus its declared type.
///
/// The type name is part of the key so an object and a value stored at
/// offset zero inside it are not mistaken for each other. Zero-sized values
/// share one dangling address and get no key.
type ObjectKey = (usize, &'static str);

/// State owned by a single top-level serialization call.
///
/// Objects are numbered densely in the order they are first met, so ids are
/// stable across repeated calls on an unchanged graph. Visited ids are never
/// cleared during the call.
#[derive(Debug)]
pub struct SerializationContext {
    remaining_depth: usize,
    include_private: bool,
    expand_collections: bool,
    summarize_for_ai: bool,
    ids: HashMap<ObjectKey, usize>,
    next_id: usize,
    visited: FixedBitSet,
    stats: WalkStats,
}

/// Counters reported when a call finishes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub objects: usize,
    pub truncated: usize,
    pub circular: usize,
    pub errors: usize,
}

impl SerializationContext {
    pub fn new(options: &IntrospectionOptions) -> Self {
        Self {
            remaining_depth: options.max_depth,
            include_private: options.include_private,
            expand_collections: options.expand_collections,
            summarize_for_ai: options.summarize_for_ai,
            ids: HashMap::new(),
            next_id: 0,
            visited: FixedBitSet::with_capacity(64),
            stats: WalkStats::default(),
        }
    }

    #[inline]
    pub fn remaining_depth(&self) -> usize {
        self.remaining_depth
    }

    #[inline]
    pub fn include_private(&self) -> bool {
        self.include_private
    }

    #[inline]
    pub fn expand_collections(&self) -> bool {
        self.expand_collections
    }

    #[inline]
    pub fn summarize_for_ai(&self) -> bool {
        self.summarize_for_ai
    }

    #[inline]
    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    #[inline]
    pub(crate) fn stats_mut(&mut self) -> &mut WalkStats {
        &mut self.stats
    }

    /// Run `f` one level deeper, restoring the budget afterwards.
    ///
    /// Callers must check that depth remains before descending.
    pub fn descend<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        debug_assert!(self.remaining_depth > 0);
        self.remaining_depth -= 1;
        let result = f(self);
        self.remaining_depth += 1;
        result
    }

    /// Dense per-call id of `object`, assigned on first sight.
    ///
    /// A zero-sized value gets a fresh id every time; it has no state that
    /// could lead back to itself.
    pub fn object_id(&mut self, object: &dyn Introspect) -> usize {
        let Some(key) = object_key(object) else {
            return self.fresh_id();
        };
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }
        let id = self.fresh_id();
        self.ids.insert(key, id);
        id
    }

    fn fresh_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_visited(&self, id: usize) -> bool {
        self.visited.contains(id)
    }

    pub fn mark_visited(&mut self, id: usize) {
        if id >= self.visited.len() {
            self.visited.grow((id + 1).next_power_of_two());
        }
        self.visited.insert(id);
    }
}

fn object_key(object: &dyn Introspect) -> Option<ObjectKey> {
    if std::mem::size_of_val(object) == 0 {
        return None;
    }
    let address = std::ptr::from_ref(object).cast::<()>() as usize;
    Some((address, object.type_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Result;
    use crate::introspection::Fields;

    struct Leaf(#[allow(dead_code)] u8);

    impl Introspect for Leaf {
        fn type_name(&self) -> &'static str {
            "Leaf"
        }

        fn properties(&self) -> Result<Fields<'_>> {
            Ok(Fields::new())
        }
    }

    #[test]
    fn test_object_ids_are_dense_and_stable() {
        let a = Leaf(1);
        let b = Leaf(2);
        let mut ctx = SerializationContext::new(&IntrospectionOptions::default());

        assert_eq!(ctx.object_id(&a), 0);
        assert_eq!(ctx.object_id(&b), 1);
        assert_eq!(ctx.object_id(&a), 0);
    }

    struct Marker;

    impl Introspect for Marker {
        fn type_name(&self) -> &'static str {
            "Marker"
        }

        fn properties(&self) -> Result<Fields<'_>> {
            Ok(Fields::new().with("k", 1))
        }
    }

    struct Pair {
        left: Marker,
        right: Marker,
    }

    impl Introspect for Pair {
        fn type_name(&self) -> &'static str {
            "Pair"
        }

        fn properties(&self) -> Result<Fields<'_>> {
            Ok(Fields::new()
                .with("left", &self.left as &dyn Introspect)
                .with("right", &self.right as &dyn Introspect))
        }
    }

    #[test]
    fn test_zero_sized_values_get_fresh_ids() {
        let (a, b) = (Marker, Marker);
        let mut ctx = SerializationContext::new(&IntrospectionOptions::default());
        assert_eq!(ctx.object_id(&a), 0);
        assert_eq!(ctx.object_id(&b), 1);
        assert_eq!(ctx.object_id(&a), 2);

        let leaf = Leaf(7);
        assert_eq!(ctx.object_id(&leaf), 3);
        assert_eq!(ctx.object_id(&leaf), 3);
    }

    #[test]
    fn test_zero_sized_siblings_are_not_circular() {
        let pair = Pair {
            left: Marker,
            right: Marker,
        };
        let out = crate::introspection::to_dict(&pair, &IntrospectionOptions::default()).unwrap();
        assert_eq!(out["properties"]["left"]["properties"]["k"], 1);
        assert_eq!(out["properties"]["right"]["properties"]["k"], 1);
        assert!(out["properties"]["right"].get("circular_reference").is_none());
    }

    #[test]
    fn test_visited_marks_persist() {
        let mut ctx = SerializationContext::new(&IntrospectionOptions::default());
        assert!(!ctx.is_visited(200));
        ctx.mark_visited(200);
        assert!(ctx.is_visited(200));
        assert!(!ctx.is_visited(3));
    }

    #[test]
    fn test_descend_restores_budget() {
        let mut ctx = SerializationContext::new(&IntrospectionOptions::new().with_max_depth(2));
        let inner = ctx.descend(|ctx| ctx.descend(|ctx| ctx.remaining_depth()));
        assert_eq!(inner, 0);
        assert_eq!(ctx.remaining_depth(), 2);
    }
}
