use std::{collections::hash_set, iter::Copied, slice::Iter};

use fxhash::FxHashSet;

use super::*;

/// Basic Neighborhood-Impl. using `Vec<Node>`.
/// Neighbors are reported in insertion order which makes traversals deterministic.
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}

/// Neighborhood stored as a `FxHashSet<Node>`.
/// Membership tests are `O(1)`, neighbors are reported in no particular order.
#[derive(Default, Clone, Debug)]
pub struct SetNeighborhood(pub FxHashSet<Node>);

impl Neighborhood for SetNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<hash_set::Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(&v)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        !self.0.insert(u)
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.insert(u);
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn check_neighborhood<N: Neighborhood>() {
        let mut nbs = N::default();
        assert_eq!(nbs.num_of_neighbors(), 0);

        assert!(!nbs.try_add_neighbor(3));
        assert!(!nbs.try_add_neighbor(1));
        assert!(nbs.try_add_neighbor(3));

        assert_eq!(nbs.num_of_neighbors(), 2);
        assert!(nbs.has_neighbor(1));
        assert!(!nbs.has_neighbor(2));
        assert_eq!(nbs.neighbors().sorted().collect_vec(), vec![1, 3]);
    }

    #[test]
    fn arr_neighborhood() {
        check_neighborhood::<ArrNeighborhood>();
    }

    #[test]
    fn set_neighborhood() {
        check_neighborhood::<SetNeighborhood>();
    }
}
