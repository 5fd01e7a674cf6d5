use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    /// Nodes left over once every acyclic part was sorted.
    #[error("Cycle detected in dependency graph among {:?}", .0)]
    CycleDetected(Vec<T>),
}

/// Directed dependency graph; an edge `from -> to` means `to` reads `from`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    edges: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }

    /// Repeated edges collapse into one.
    pub fn route_to(&mut self, from: Node, to: Node) {
        self.edges.entry(from).or_default().insert(to);
        self.edges.entry(to).or_default();
    }

    /// Kahn's algorithm. Returns every node that appears in an edge, each
    /// one after all the nodes it depends on.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> =
            self.edges.keys().map(|&node| (node, 0)).collect();
        for targets in self.edges.values() {
            for to in targets {
                *in_degree.entry(*to).or_default() += 1;
            }
        }

        let mut order = Vec::with_capacity(in_degree.len());
        while let Some(node) = in_degree
            .iter()
            .find(|(_, degree)| **degree == 0)
            .map(|(&node, _)| node)
        {
            in_degree.remove(&node);
            order.push(node);
            for to in self.edges.get(&node).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(to) {
                    *degree -= 1;
                }
            }
        }

        if in_degree.is_empty() {
            Ok(order)
        } else {
            Err(TopologyError::CycleDetected(in_degree.into_keys().collect()))
        }
    }
}
