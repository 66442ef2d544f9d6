//! A best-first graph search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! generalised to partially ordered costs such as [f64] and bounded by an optional number
//! of node expansions.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

/// How a search ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome<N, C> {
    Found {
        path: Vec<N>,
        cost: C,
        expanded: usize,
    },
    /// The frontier ran empty before a goal was popped.
    Exhausted { expanded: usize },
    /// The expansion budget ran out before a goal was popped.
    LimitReached { expanded: usize },
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialOrd> Eq for SmallestCostHolder<K> {}

impl<K: PartialOrd> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the node with the largest cost
        // so far, which is the one furthest along its path. Costs are never NaN.
        match other
            .estimated_cost
            .partial_cmp(&self.estimated_cost)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => self
                .cost
                .partial_cmp(&other.cost)
                .unwrap_or(Ordering::Equal),
            s => s,
        }
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Runs A* from `start` until `success` holds for a popped node. Nodes are only expanded
/// once unless a cheaper route to them is found later, so an admissible heuristic yields a
/// cost-minimal path. `max_expansions` is checked between expansions.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> SearchOutcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + PartialOrd + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut expanded = 0;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return SearchOutcome::Found {
                    path,
                    cost,
                    expanded,
                };
            }
            // We may have inserted a node several time into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if cost > c {
                continue;
            }
            if max_expansions.is_some_and(|limit| expanded >= limit) {
                return SearchOutcome::LimitReached { expanded };
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    SearchOutcome::Exhausted { expanded }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A line graph 0 - 1 - ... - 9 with unit edges.
    fn line_successors(n: &i32) -> Vec<(i32, f64)> {
        [*n - 1, *n + 1]
            .into_iter()
            .filter(|m| (0..10).contains(m))
            .map(|m| (m, 1.0))
            .collect()
    }

    #[test]
    fn finds_shortest_line_path() {
        let outcome = astar(
            &2,
            line_successors,
            |n| (7 - *n).abs() as f64,
            |n| *n == 7,
            None,
        );
        match outcome {
            SearchOutcome::Found { path, cost, .. } => {
                assert_eq!(path, vec![2, 3, 4, 5, 6, 7]);
                assert_eq!(cost, 5.0);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn start_is_goal() {
        let outcome = astar(&3, line_successors, |_| 0.0, |n| *n == 3, None);
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                path: vec![3],
                cost: 0.0,
                expanded: 0
            }
        );
    }

    #[test]
    fn exhausts_without_goal() {
        let outcome = astar(&0, line_successors, |_| 0.0, |n| *n == 42, None);
        assert_eq!(outcome, SearchOutcome::Exhausted { expanded: 10 });
    }

    #[test]
    fn respects_expansion_limit() {
        let outcome = astar(&0, line_successors, |_| 0.0, |n| *n == 9, Some(3));
        assert_eq!(outcome, SearchOutcome::LimitReached { expanded: 3 });
    }

    /// A cheaper route discovered later replaces the first one.
    #[test]
    fn reopens_on_improvement() {
        // 0 -> 2 costs 5 directly, 0 -> 1 -> 2 costs 2.
        let successors = |n: &u8| -> Vec<(u8, f64)> {
            match n {
                0 => vec![(2, 5.0), (1, 1.0)],
                1 => vec![(2, 1.0)],
                _ => vec![],
            }
        };
        match astar(&0u8, successors, |_| 0.0, |n| *n == 2, None) {
            SearchOutcome::Found { path, cost, .. } => {
                assert_eq!(path, vec![0, 1, 2]);
                assert_eq!(cost, 2.0);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn ties_prefer_deeper_nodes() {
        let a = SmallestCostHolder {
            estimated_cost: 3.0,
            cost: 2.0,
            index: 0,
        };
        let b = SmallestCostHolder {
            estimated_cost: 3.0,
            cost: 1.0,
            index: 1,
        };
        let c = SmallestCostHolder {
            estimated_cost: 2.5,
            cost: 0.0,
            index: 2,
        };
        let mut heap = BinaryHeap::from(vec![b, a, c]);
        assert_eq!(heap.pop().map(|h| h.index), Some(2));
        assert_eq!(heap.pop().map(|h| h.index), Some(0));
        assert_eq!(heap.pop().map(|h| h.index), Some(1));
    }
}
