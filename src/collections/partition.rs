//  Partitioning of `IntegerSet`.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use crate::{algorithm, collections::IntegerSet};

impl IntegerSet {
    /// Groups the elements by the key `fun` associates to them.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let set = IntegerSet::from_range(0..6).expect("valid");
    ///
    /// let groups = set.classify(|element| element % 3);
    ///
    /// assert_eq!(3, groups.len());
    /// assert_eq!(vec![1, 4], groups[&1].to_vec());
    /// ```
    pub fn classify<K, F>(&self, mut fun: F) -> HashMap<K, IntegerSet>
    where
        K: Eq + Hash,
        F: FnMut(u64) -> K,
    {
        let mut result: HashMap<K, IntegerSet> = HashMap::new();

        for element in self {
            result.entry(fun(element)).or_default().vector_mut().set(element);
        }

        result
    }

    /// Divides the set into subsets of elements with the same key, as associated by `fun`.
    pub fn divide_by<K, F>(&self, fun: F) -> HashSet<IntegerSet>
    where
        K: Eq + Hash,
        F: FnMut(u64) -> K,
    {
        self.classify(fun).into_values().collect()
    }

    /// Divides the set into the strongly connected components of the relation `related`.
    ///
    /// The elements are the nodes of a directed graph, with an edge from `u` to `v` whenever `u` and `v` are distinct,
    /// and `related(u, v)` returns true.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let set = IntegerSet::try_from_iter([1, 3, 4, 6, 9, 10, 11]).expect("valid");
    ///
    /// let subsets = set.divide(|i, j| i.abs_diff(j) == 1);
    ///
    /// assert_eq!(4, subsets.len());
    /// assert!(subsets.contains(&IntegerSet::try_from_iter([9, 10, 11]).expect("valid")));
    /// ```
    pub fn divide<F>(&self, mut related: F) -> HashSet<IntegerSet>
    where
        F: FnMut(u64, u64) -> bool,
    {
        let nodes = self.to_vec();

        let mut successors = vec![Vec::new(); nodes.len()];
        let mut edges = 0;

        for (u, &from) in nodes.iter().enumerate() {
            for (v, &to) in nodes.iter().enumerate() {
                if u != v && related(from, to) {
                    successors[u].push(v);
                    edges += 1;
                }
            }
        }

        let components = algorithm::strongly_connected_components(&successors);

        tracing::trace!(nodes = nodes.len(), edges, components = components.len(), "divided IntegerSet");

        components
            .into_iter()
            .map(|component| {
                let mut subset = IntegerSet::new();

                for node in component {
                    subset.vector_mut().set(nodes[node]);
                }

                subset
            })
            .collect()
    }
}

// mod partition_tests
