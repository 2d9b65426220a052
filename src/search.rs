//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! in which ties between equally promising nodes go to the node that entered the open set first,
//! and the number of expansions can be capped.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::warn;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    sequence: u64,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: PartialOrd> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then the entry that joined the open set earliest
        match other
            .estimated_cost
            .partial_cmp(&self.estimated_cost)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

struct NodeState<C> {
    parent: usize,
    cost: C,
    estimated_cost: C,
    /// Sequence number of the open-set entry, [None] once the node has been expanded.
    open: Option<u64>,
}

/// How a search terminated.
#[derive(Debug, PartialEq)]
pub enum Outcome<N, C> {
    Found {
        path: Vec<N>,
        cost: C,
        expansions: usize,
    },
    /// The open set ran empty: the goal cannot be reached.
    Exhausted { expansions: usize },
    /// The expansion budget ran out before the goal was reached.
    OverBudget { expansions: usize },
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, NodeState<C>>, start: &N, goal: usize) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(goal), |&i| {
        parents.get_index(i).map(|(_, state)| state.parent)
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    if path.first() == Some(start) {
        Some(path)
    } else {
        None
    }
}

pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> Outcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + PartialOrd + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut sequence: u64 = 0;
    let start_estimate = heuristic(start);
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: start_estimate,
        sequence,
        index: 0,
    });
    let mut parents: FxIndexMap<N, NodeState<C>> = FxIndexMap::default();
    parents.insert(
        start.clone(),
        NodeState {
            parent: usize::MAX,
            cost: Zero::zero(),
            estimated_cost: start_estimate,
            open: Some(sequence),
        },
    );
    let mut expansions = 0;
    while let Some(SmallestCostHolder {
        estimated_cost,
        sequence: entry,
        index,
    }) = to_see.pop()
    {
        let (cost, successors) = {
            let Some((node, state)) = parents.get_index(index) else {
                continue;
            };
            // A node is pushed again whenever a cheaper way to reach it is found, leaving the
            // older entries behind in the heap. Only the current entry of an open node counts.
            if state.open != Some(entry) || estimated_cost > state.estimated_cost {
                continue;
            }
            if success(node) {
                let cost = state.cost;
                return match reverse_path(&parents, start, index) {
                    Some(path) => Outcome::Found {
                        path,
                        cost,
                        expansions,
                    },
                    None => {
                        warn!("Goal was reached but its parent chain does not lead back to the start");
                        Outcome::Exhausted { expansions }
                    }
                };
            }
            if max_expansions.is_some_and(|max| expansions >= max) {
                return Outcome::OverBudget { expansions };
            }
            (state.cost, successors(node))
        };
        expansions += 1;
        if let Some((_, state)) = parents.get_index_mut(index) {
            state.open = None;
        }
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            match parents.entry(successor) {
                Vacant(e) => {
                    let estimated_cost = new_cost + heuristic(e.key());
                    let n = e.index();
                    sequence += 1;
                    e.insert(NodeState {
                        parent: index,
                        cost: new_cost,
                        estimated_cost,
                        open: Some(sequence),
                    });
                    to_see.push(SmallestCostHolder {
                        estimated_cost,
                        sequence,
                        index: n,
                    });
                }
                Occupied(mut e) => {
                    if new_cost < e.get().cost {
                        let estimated_cost = new_cost + heuristic(e.key());
                        let n = e.index();
                        // An open node keeps its place in line, a finalized one rejoins at the back.
                        let place = match e.get().open {
                            Some(place) => place,
                            None => {
                                sequence += 1;
                                sequence
                            }
                        };
                        e.insert(NodeState {
                            parent: index,
                            cost: new_cost,
                            estimated_cost,
                            open: Some(place),
                        });
                        to_see.push(SmallestCostHolder {
                            estimated_cost,
                            sequence: place,
                            index: n,
                        });
                    }
                }
            }
        }
    }
    Outcome::Exhausted { expansions }
}
