use std::collections::HashMap;
use std::sync::Arc;

use super::exact_sqrt;
use crate::errors::{BoggleError, Result};

/// King-move neighbours of every cell of an `n x n` grid, indexed by linear cell index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    n: usize,
    neighbors: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Builds the table for a grid of `n2` cells. Fails unless `n2` is a non-empty perfect square.
    pub fn build(n2: usize) -> Result<Self> {
        let n = match exact_sqrt(n2) {
            Some(n) if n > 0 => n,
            _ => return Err(BoggleError::InvalidGridSize(n2)),
        };

        let neighbors = (0..n2)
            .map(|i| {
                let on_top = i < n;
                let on_bottom = i >= n2 - n;
                let on_left = i % n == 0;
                let on_right = (i + 1) % n == 0;

                let mut cells = Vec::with_capacity(8);
                if !on_top {
                    cells.push(i - n);
                    if !on_left {
                        cells.push(i - n - 1);
                    }
                    if !on_right {
                        cells.push(i - n + 1);
                    }
                }
                if !on_bottom {
                    cells.push(i + n);
                    if !on_left {
                        cells.push(i + n - 1);
                    }
                    if !on_right {
                        cells.push(i + n + 1);
                    }
                }
                if !on_left {
                    cells.push(i - 1);
                }
                if !on_right {
                    cells.push(i + 1);
                }
                cells
            })
            .collect();

        Ok(Self { n, neighbors })
    }

    pub fn neighbors(&self, cell: usize) -> &[usize] {
        &self.neighbors[cell]
    }

    /// Side length of the grid
    pub fn side(&self) -> usize {
        self.n
    }

    /// Number of cells covered by the table
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// Caller-owned cache handing out one shared table per grid size
#[derive(Debug, Default)]
pub struct AdjacencyCache {
    tables: HashMap<usize, Arc<Adjacency>>,
}

impl AdjacencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `n2` cells, building it on first request
    pub fn neighbors_of(&mut self, n2: usize) -> Result<Arc<Adjacency>> {
        if let Some(table) = self.tables.get(&n2) {
            return Ok(table.clone());
        }
        let table = Arc::new(Adjacency::build(n2)?);
        self.tables.insert(n2, table.clone());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::{Adjacency, AdjacencyCache};
    use crate::errors::BoggleError;

    fn sorted(cells: &[usize]) -> Vec<usize> {
        let mut cells = cells.to_vec();
        cells.sort_unstable();
        cells
    }

    #[test]
    fn test_corners_edges_and_center() {
        let adj = Adjacency::build(16).unwrap();
        assert_eq!(adj.side(), 4);
        assert_eq!(sorted(adj.neighbors(0)), vec![1, 4, 5]);
        assert_eq!(sorted(adj.neighbors(3)), vec![2, 6, 7]);
        assert_eq!(sorted(adj.neighbors(12)), vec![8, 9, 13]);
        assert_eq!(sorted(adj.neighbors(15)), vec![10, 11, 14]);
        assert_eq!(sorted(adj.neighbors(1)), vec![0, 2, 4, 5, 6]);
        assert_eq!(sorted(adj.neighbors(5)), vec![0, 1, 2, 4, 6, 8, 9, 10]);
    }

    #[test]
    fn test_neighbor_order() {
        let adj = Adjacency::build(9).unwrap();
        // up, up-left, up-right, down, down-left, down-right, left, right
        assert_eq!(adj.neighbors(4), [1, 0, 2, 7, 6, 8, 3, 5]);
    }

    #[test]
    fn test_two_by_two_is_complete() {
        let adj = Adjacency::build(4).unwrap();
        for i in 0..4 {
            let expected = (0..4).filter(|&j| j != i).collect::<Vec<_>>();
            assert_eq!(sorted(adj.neighbors(i)), expected);
        }
    }

    #[test]
    fn test_single_cell() {
        let adj = Adjacency::build(1).unwrap();
        assert_eq!(adj.len(), 1);
        assert!(adj.neighbors(0).is_empty());
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(Adjacency::build(25).is_ok());
        assert!(matches!(
            Adjacency::build(24),
            Err(BoggleError::InvalidGridSize(24))
        ));
        assert!(matches!(
            Adjacency::build(0),
            Err(BoggleError::InvalidGridSize(0))
        ));
        assert!(matches!(
            Adjacency::build(usize::MAX),
            Err(BoggleError::InvalidGridSize(usize::MAX))
        ));
    }

    #[test]
    fn test_cache_reuses_tables() {
        let mut cache = AdjacencyCache::new();
        let a = cache.neighbors_of(16).unwrap();
        let b = cache.neighbors_of(16).unwrap();
        let c = cache.neighbors_of(25).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert!(cache.neighbors_of(24).is_err());
    }

    proptest! {
        #[test]
        fn adjacency_is_symmetric_and_king_move(n in 1usize..9) {
            let adj = Adjacency::build(n * n).unwrap();
            for i in 0..n * n {
                prop_assert!(!adj.neighbors(i).contains(&i));
                for j in 0..n * n {
                    let (ri, ci) = ((i / n) as i64, (i % n) as i64);
                    let (rj, cj) = ((j / n) as i64, (j % n) as i64);
                    let king = i != j && (ri - rj).abs() <= 1 && (ci - cj).abs() <= 1;
                    prop_assert_eq!(adj.neighbors(i).contains(&j), king);
                    prop_assert_eq!(adj.neighbors(i).contains(&j), adj.neighbors(j).contains(&i));
                }
            }
        }
    }
}
