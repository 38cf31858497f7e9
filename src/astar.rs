//! This module implements the A* search loop used by the grid solvers, a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! with an explicit closed set. All state lives in a [SearchContext] that is created for a single
//! search and dropped afterwards, so nothing is shared between searches.
//!
//! The engine is generic over the node type and the cost type and can be used for any graph given
//! as a successor function. Costs are summed with saturating addition, so an oversized heuristic
//! clamps at the maximum of the cost type instead of overflowing.
//!
//! ```
//! use grid_astar::astar::SearchContext;
//!
//! // Doubling or incrementing, each at cost 1
//! let mut ctx: SearchContext<u32, u32> = SearchContext::new();
//! let (path, cost) = ctx
//!     .astar(&1, |&n| vec![(n * 2, 1), (n + 1, 1)], |_| 0, |&n| n == 10)
//!     .unwrap();
//! assert_eq!(path, vec![1, 2, 4, 5, 10]);
//! assert_eq!(cost, 4);
//! ```
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::trace;
use num_traits::{SaturatingAdd, Zero};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first. Among equal estimates the entry with the largest cost so
        // far wins, which favours nodes closer to the goal.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Per-node bookkeeping: index of the predecessor in the node map, best known cost and whether
/// the node has been finalized.
#[derive(Clone, Copy, Debug)]
struct Visited<C> {
    parent: usize,
    cost: C,
    closed: bool,
}

/// Open set, closed set and predecessor links of a single A* search.
pub struct SearchContext<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    visited: FxIndexMap<N, Visited<C>>,
    expanded: usize,
}

impl<N, C> Default for SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy + SaturatingAdd,
{
    fn default() -> Self {
        SearchContext::new()
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy + SaturatingAdd,
{
    pub fn new() -> Self {
        SearchContext {
            to_see: BinaryHeap::new(),
            visited: FxIndexMap::default(),
            expanded: 0,
        }
    }

    /// Number of nodes moved to the closed set.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of distinct nodes that were ever discovered.
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    fn reverse_path(&self, goal_index: usize) -> Vec<N> {
        let mut path = Vec::new();
        let mut i = goal_index;
        // The start node carries NO_PARENT, which is never a valid index
        while let Some((node, visited)) = self.visited.get_index(i) {
            path.push(node.clone());
            i = visited.parent;
        }
        path.reverse();
        path
    }

    /// Runs A* from `start` until a node satisfying `success` is taken from the open set.
    /// Returns the path from `start` to that node (both inclusive) and its cost, or [None] once
    /// the open set is exhausted.
    pub fn astar<FN, IN, FH, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.to_see.clear();
        self.visited.clear();
        self.expanded = 0;

        self.to_see.push(SmallestCostHolder {
            estimated_cost: heuristic(start),
            cost: Zero::zero(),
            index: 0,
        });
        self.visited.insert(
            start.clone(),
            Visited {
                parent: NO_PARENT,
                cost: Zero::zero(),
                closed: false,
            },
        );
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let successors = {
                let (node, visited) = self.visited.get_index_mut(index)?;
                // A node may sit in the heap several times if a cheaper route to it was found
                // after it was first pushed. Only the entry carrying the best cost is expanded.
                if visited.closed || cost > visited.cost {
                    continue;
                }
                if success(node) {
                    let path = self.reverse_path(index);
                    return Some((path, cost));
                }
                visited.closed = true;
                self.expanded += 1;
                trace!("Expansion {} at node index {}", self.expanded, index);
                successors(node)
            };
            for (successor, move_cost) in successors {
                let new_cost = cost.saturating_add(&move_cost);
                let h; // heuristic(&successor)
                let n; // index for successor
                match self.visited.entry(successor) {
                    Vacant(e) => {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert(Visited {
                            parent: index,
                            cost: new_cost,
                            closed: false,
                        });
                    }
                    Occupied(mut e) => {
                        let v = e.get_mut();
                        if !v.closed && new_cost < v.cost {
                            v.parent = index;
                            v.cost = new_cost;
                            h = heuristic(e.key());
                            n = e.index();
                        } else {
                            continue;
                        }
                    }
                }

                self.to_see.push(SmallestCostHolder {
                    estimated_cost: new_cost.saturating_add(&h),
                    cost: new_cost,
                    index: n,
                });
            }
        }
        None
    }
}
