//! Disjoint-set forest backing graph nodes.
//!
//! Each slot stores the parent handle and rank of one node. `find` follows
//! parent links without compressing them, so lookups never mutate the forest.
//! `union` links representatives by rank, which bounds every chain by
//! `log2(len)` links.
//!
//! Handles that were not issued by this forest behave as isolated singletons:
//! they are their own representative and unions against them are ignored.

use std::cmp::Ordering;

use crate::NodeId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Slot {
    parent: NodeId,
    rank: u32,
}

/// An index-addressed union-find structure using union-by-rank.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// let mexico = set.make_set();
/// let canada = set.make_set();
/// assert!(!set.same_set(mexico, canada));
///
/// set.union(mexico, canada);
/// assert_eq!(set.find(mexico), set.find(canada));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisjointSet {
    slots: Vec<Slot>,
}

impl DisjointSet {
    /// Creates an empty forest.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an empty forest with room for `capacity` sets.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Adds a singleton set and returns its handle.
    pub fn make_set(&mut self) -> NodeId {
        let id = NodeId::new(self.slots.len());
        self.slots.push(Slot {
            parent: id,
            rank: 0,
        });
        id
    }

    /// Returns the number of elements in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when the forest holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the stored parent link of `node`.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> NodeId {
        self.slot(node).map_or(node, |slot| slot.parent)
    }

    /// Returns the rank of `node`, an upper bound on its subtree height.
    #[must_use]
    pub fn rank(&self, node: NodeId) -> u32 {
        self.slot(node).map_or(0, |slot| slot.rank)
    }

    /// Returns `true` when `node` is the representative of its set.
    #[must_use]
    pub fn is_representative(&self, node: NodeId) -> bool {
        self.parent(node) == node
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// No path compression is applied; repeated calls return the same handle
    /// and leave the forest untouched.
    #[must_use]
    pub fn find(&self, node: NodeId) -> NodeId {
        let mut current = node;
        loop {
            let parent = self.parent(current);
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Returns `true` when `left` and `right` share a representative.
    #[must_use]
    pub fn same_set(&self, left: NodeId, right: NodeId) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The representative with the higher rank adopts the other. On equal
    /// ranks `left`'s representative adopts `right`'s and its rank grows by
    /// one. Returns `true` when two distinct sets were merged.
    pub fn union(&mut self, left: NodeId, right: NodeId) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);

        if left_root == right_root {
            return false;
        }

        match self.rank(left_root).cmp(&self.rank(right_root)) {
            Ordering::Greater => self.set_parent(right_root, left_root),
            Ordering::Less => {
                // `right_root` is a representative, so its parent is itself.
                let parent = self.parent(right_root);
                self.set_parent(left_root, parent)
            }
            Ordering::Equal => {
                let linked = self.set_parent(right_root, left_root);
                if linked {
                    self.bump_rank(left_root);
                }
                linked
            }
        }
    }

    /// Returns the number of disjoint sets in the forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.slots
            .iter()
            .enumerate()
            .filter(|(index, slot)| slot.parent.index() == *index)
            .count()
    }

    fn slot(&self, node: NodeId) -> Option<&Slot> {
        self.slots.get(node.index())
    }

    fn set_parent(&mut self, node: NodeId, parent: NodeId) -> bool {
        if parent.index() >= self.slots.len() {
            return false;
        }
        let Some(slot) = self.slots.get_mut(node.index()) else {
            return false;
        };
        slot.parent = parent;
        true
    }

    fn bump_rank(&mut self, node: NodeId) {
        if let Some(slot) = self.slots.get_mut(node.index()) {
            slot.rank = slot.rank.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    use crate::test_utils::suite_proptest_config;

    struct Countries {
        set: DisjointSet,
        mexico: NodeId,
        canada: NodeId,
        usa: NodeId,
        france: NodeId,
        netherlands: NodeId,
    }

    #[fixture]
    fn countries() -> Countries {
        let mut set = DisjointSet::new();
        let mexico = set.make_set();
        let canada = set.make_set();
        let usa = set.make_set();
        let france = set.make_set();
        let netherlands = set.make_set();
        Countries {
            set,
            mexico,
            canada,
            usa,
            france,
            netherlands,
        }
    }

    #[rstest]
    fn new_node_is_its_own_representative(countries: Countries) {
        assert_eq!(countries.set.find(countries.mexico), countries.mexico);
        assert!(countries.set.is_representative(countries.mexico));
        assert_eq!(countries.set.rank(countries.mexico), 0);
    }

    #[rstest]
    fn self_union_is_a_no_op(mut countries: Countries) {
        let before = countries.set.clone();
        assert!(!countries.set.union(countries.mexico, countries.mexico));
        assert_eq!(countries.set.find(countries.mexico), countries.mexico);
        assert_eq!(countries.set, before);
    }

    #[rstest]
    fn union_merges_distinct_nodes(mut countries: Countries) {
        assert!(countries.set.union(countries.mexico, countries.canada));
        assert_eq!(
            countries.set.find(countries.mexico),
            countries.set.find(countries.canada)
        );
        assert!(!countries.set.union(countries.canada, countries.mexico));
    }

    #[rstest]
    fn union_attaches_lower_rank_tree_under_higher_rank_root(mut countries: Countries) {
        countries.set.union(countries.mexico, countries.canada);
        let representative = countries.set.find(countries.mexico);
        assert_eq!(representative, countries.mexico);
        assert_eq!(countries.set.rank(representative), 1);

        countries.set.union(countries.usa, countries.canada);

        assert_eq!(countries.set.find(countries.usa), representative);
        assert_eq!(countries.set.find(countries.mexico), representative);
        assert_eq!(countries.set.find(countries.canada), representative);
        assert_eq!(countries.set.parent(countries.usa), representative);
        assert_eq!(countries.set.rank(representative), 1);
    }

    #[rstest]
    fn union_does_not_merge_unrelated_sets(mut countries: Countries) {
        countries.set.union(countries.mexico, countries.canada);
        countries.set.union(countries.canada, countries.usa);
        assert_eq!(countries.set.find(countries.france), countries.france);
        assert_eq!(
            countries.set.find(countries.netherlands),
            countries.netherlands
        );

        countries.set.union(countries.france, countries.netherlands);

        assert_ne!(
            countries.set.find(countries.france),
            countries.set.find(countries.usa)
        );
        assert_eq!(countries.set.component_count(), 2);
    }

    #[rstest]
    fn find_is_idempotent_and_side_effect_free(mut countries: Countries) {
        countries.set.union(countries.mexico, countries.canada);
        countries.set.union(countries.usa, countries.france);
        countries.set.union(countries.mexico, countries.usa);
        let snapshot = countries.set.clone();

        let first = countries.set.find(countries.france);
        for _ in 0..3 {
            assert_eq!(countries.set.find(countries.france), first);
            assert_eq!(countries.set.find(first), first);
        }
        assert_eq!(countries.set, snapshot);
    }

    #[test]
    fn foreign_handles_behave_as_singletons() {
        let mut set = DisjointSet::new();
        let local = set.make_set();
        let foreign = NodeId::new(42);

        assert_eq!(set.find(foreign), foreign);
        assert!(!set.union(local, foreign));
        assert!(!set.union(foreign, local));
        assert!(set.is_representative(local));
        assert_eq!(set.rank(local), 0);
    }

    #[derive(Clone, Debug)]
    struct UnionScript {
        len: usize,
        unions: Vec<(usize, usize)>,
    }

    fn union_script_strategy() -> impl Strategy<Value = UnionScript> {
        (1_usize..=48).prop_flat_map(|len| {
            proptest::collection::vec((0..len, 0..len), 0..96)
                .prop_map(move |unions| UnionScript { len, unions })
        })
    }

    fn relabel(labels: &mut [usize], from: usize, to: usize) {
        for label in labels.iter_mut() {
            if *label == from {
                *label = to;
            }
        }
    }

    fn height(set: &DisjointSet, node: NodeId) -> u32 {
        let mut current = node;
        let mut links = 0;
        while !set.is_representative(current) {
            current = set.parent(current);
            links += 1;
        }
        links
    }

    proptest! {
        #![proptest_config(suite_proptest_config(256))]

        #[test]
        fn union_find_matches_naive_partition(script in union_script_strategy()) {
            let mut set = DisjointSet::with_capacity(script.len);
            let ids: Vec<NodeId> = (0..script.len).map(|_| set.make_set()).collect();
            let mut labels: Vec<usize> = (0..script.len).collect();

            for &(left, right) in &script.unions {
                let merged = set.union(ids[left], ids[right]);
                let (left_label, right_label) = (labels[left], labels[right]);
                prop_assert_eq!(merged, left_label != right_label);
                relabel(&mut labels, right_label, left_label);
            }

            for left in 0..script.len {
                for right in 0..script.len {
                    prop_assert_eq!(
                        set.same_set(ids[left], ids[right]),
                        labels[left] == labels[right]
                    );
                }
            }

            let mut distinct = labels.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(set.component_count(), distinct.len());
        }

        #[test]
        fn representative_rank_bounds_chain_height(script in union_script_strategy()) {
            let mut set = DisjointSet::with_capacity(script.len);
            let ids: Vec<NodeId> = (0..script.len).map(|_| set.make_set()).collect();
            for &(left, right) in &script.unions {
                set.union(ids[left], ids[right]);
            }

            for &id in &ids {
                let root = set.find(id);
                prop_assert!(height(&set, id) <= set.rank(root));
                prop_assert!(1_usize << set.rank(root) <= script.len);
            }
        }

        #[test]
        fn union_order_does_not_change_partition(
            script in union_script_strategy(),
        ) {
            let mut forward = DisjointSet::with_capacity(script.len);
            let mut swapped = DisjointSet::with_capacity(script.len);
            let ids: Vec<NodeId> = (0..script.len).map(|_| forward.make_set()).collect();
            for _ in 0..script.len {
                swapped.make_set();
            }

            for &(left, right) in &script.unions {
                forward.union(ids[left], ids[right]);
                swapped.union(ids[right], ids[left]);
            }

            for &left in &ids {
                for &right in &ids {
                    prop_assert_eq!(
                        forward.same_set(left, right),
                        swapped.same_set(left, right)
                    );
                }
            }
        }
    }
}
