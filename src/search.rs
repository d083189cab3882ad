// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Breadth-first-search in residual graphs.
//!
//! The [`AugmentingPathFinder`] searches for paths from a source to a sink
//! that only use arcs with positive residual capacity. The search state (the
//! incoming arc of each visited vertex and the queue) is reset at the start
//! of every search, so the same finder can be used for many searches on a
//! changing residual graph.
//!
//! # Example
//!
//! ```
//! use rs_flownet::FlowNetwork;
//! use rs_flownet::search::AugmentingPathFinder;
//!
//! let mut net = FlowNetwork::new("path", 4).unwrap();
//! net.add_edge(0, 1, 1).unwrap();
//! net.add_edge(1, 2, 1).unwrap();
//! net.add_edge(2, 3, 0).unwrap();
//!
//! let mut finder = AugmentingPathFinder::new();
//! assert!(finder.find(&net, 0, 2));
//! assert_eq!(finder.path(2).map(|(_, u)| u).collect::<Vec<_>>(), vec![1, 0]);
//!
//! // the last edge has no capacity
//! assert!(!finder.find(&net, 0, 3));
//! assert!(finder.is_reached(2));
//! assert!(!finder.is_reached(3));
//! ```

use crate::num::traits::NumAssign;
use crate::FlowNetwork;

use log::trace;
use std::collections::VecDeque;
use std::marker::PhantomData;

const UNSET: usize = usize::max_value();

/// Breadth-first-search for augmenting paths.
#[derive(Clone, Debug, Default)]
pub struct AugmentingPathFinder {
    /// The incoming arc and its tail for each vertex.
    pred: Vec<(usize, usize)>,
    queue: VecDeque<usize>,
}

impl AugmentingPathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search a path from `src` to `snk` in the residual graph of `net`.
    ///
    /// Returns `true` if such a path exists. The search stops as soon as the
    /// sink is discovered, so only the vertices visited so far are marked as
    /// reached.
    pub fn find<F>(&mut self, net: &FlowNetwork<F>, src: usize, snk: usize) -> bool
    where
        F: NumAssign + Ord + Copy,
    {
        self.search(net, src, Some(snk))
    }

    /// Mark all vertices reachable from `src` in the residual graph of `net`.
    pub fn reach<F>(&mut self, net: &FlowNetwork<F>, src: usize)
    where
        F: NumAssign + Ord + Copy,
    {
        self.search(net, src, None);
    }

    fn search<F>(&mut self, net: &FlowNetwork<F>, src: usize, snk: Option<usize>) -> bool
    where
        F: NumAssign + Ord + Copy,
    {
        self.pred.clear();
        self.pred.resize(net.num_vertices(), (UNSET, UNSET));
        self.queue.clear();

        // the source has no incoming arc but counts as visited
        self.pred[src] = (UNSET, src);
        self.queue.push_back(src);

        'bfs: while let Some(u) = self.queue.pop_front() {
            for (a, v) in net.outarcs(u) {
                if self.pred[v].1 == UNSET && !net.residual_arc(a).is_zero() {
                    trace!("bfs: reached {} from {} via arc {}", v, u, a);
                    self.pred[v] = (a, u);
                    if Some(v) == snk {
                        break 'bfs;
                    }
                    self.queue.push_back(v);
                }
            }
        }

        snk.map(|t| self.is_reached(t)).unwrap_or(false)
    }

    /// Return `true` if vertex `v` has been visited by the last search.
    pub fn is_reached(&self, v: usize) -> bool {
        self.pred.get(v).map(|&(_, u)| u != UNSET).unwrap_or(false)
    }

    /// Return the incoming arc of `v` and its tail.
    ///
    /// Returns `None` for unvisited vertices and for the source.
    pub fn predecessor(&self, v: usize) -> Option<(usize, usize)> {
        match self.pred.get(v) {
            Some(&(a, u)) if a != UNSET => Some((a, u)),
            _ => None,
        }
    }

    /// Return the path of the last search to `dst`.
    ///
    /// The iterator yields `(arc, tail)` pairs starting with the last arc of
    /// the path and ends at the source.
    pub fn path(&self, dst: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        path_from_incomings(dst, move |v| self.predecessor(v).map(|(a, u)| ((a, u), u)))
    }
}

/// Compute a path from a map of incoming edges for each node.
///
/// # Parameters
/// - `dst`: the destination node
/// - `incomings(v)`: return the incoming edge and preceding node for node `v`
///   (or `None` if it does not exist)
///
/// # Return
/// An iterator over the incoming edges starting from the last one.
///
/// # Example
///
/// ```
/// use rs_flownet::search::path_from_incomings;
///
/// // 0 -> 1 -> 3, edges identified by their head
/// let pred = vec![None, Some(0), None, Some(1)];
/// let path: Vec<_> = path_from_incomings(3, |v| pred[v].map(|u| (v, u))).collect();
/// assert_eq!(path, vec![3, 1]);
/// ```
pub fn path_from_incomings<N, E, I>(dst: N, incomings: I) -> impl Iterator<Item = E>
where
    N: Copy,
    I: Fn(N) -> Option<(E, N)>,
{
    PathIter {
        incomings,
        u: dst,
        phantom: PhantomData,
    }
}

#[doc(hidden)]
struct PathIter<N, E, I>
where
    I: Fn(N) -> Option<(E, N)>,
{
    incomings: I,
    u: N,
    phantom: PhantomData<E>,
}

impl<N, E, I> Iterator for PathIter<N, E, I>
where
    N: Copy,
    I: Fn(N) -> Option<(E, N)>,
{
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if let Some((e, v)) = (self.incomings)(self.u) {
            self.u = v;
            Some(e)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{path_from_incomings, AugmentingPathFinder};
    use crate::FlowNetwork;

    fn diamond() -> FlowNetwork<i32> {
        let mut net = FlowNetwork::new("diamond", 4).unwrap();
        net.add_edge(0, 1, 3).unwrap();
        net.add_edge(0, 2, 2).unwrap();
        net.add_edge(1, 3, 2).unwrap();
        net.add_edge(2, 3, 3).unwrap();
        net.add_edge(1, 2, 1).unwrap();
        net
    }

    #[test]
    fn test_shortest_path() {
        let net = diamond();
        let mut finder = AugmentingPathFinder::new();
        assert!(finder.find(&net, 0, 3));

        let path: Vec<_> = finder.path(3).collect();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], (4, 1));
        assert_eq!(path[1], (0, 0));
        assert_eq!(finder.predecessor(0), None);
    }

    #[test]
    fn test_state_is_reset() {
        let mut net = FlowNetwork::new("g", 3).unwrap();
        net.add_edge(0, 1, 1).unwrap();
        net.add_edge(1, 2, 1).unwrap();

        let mut finder = AugmentingPathFinder::new();
        assert!(finder.find(&net, 0, 2));
        assert!(finder.is_reached(1));

        // searching from the sink must not see the vertices of the last search
        assert!(!finder.find(&net, 2, 0));
        assert!(!finder.is_reached(1));
        assert_eq!(finder.predecessor(1), None);
        assert!(finder.is_reached(2));
    }

    #[test]
    fn test_reverse_arcs_need_residual_capacity() {
        let net = diamond();
        let mut finder = AugmentingPathFinder::new();
        finder.reach(&net, 3);
        assert!(finder.is_reached(3));
        assert!((0..3).all(|v| !finder.is_reached(v)));

        finder.reach(&net, 1);
        assert!(!finder.is_reached(0));
        assert!(finder.is_reached(2));
        assert!(finder.is_reached(3));
    }

    #[test]
    fn test_path_with_owned_items() {
        // path items need not be `Clone`
        #[derive(Debug, PartialEq)]
        struct Step(usize);

        let pred = [None, Some(0), Some(1)];
        let path: Vec<_> = path_from_incomings(2, |v: usize| pred[v].map(|u| (Step(v), u))).collect();
        assert_eq!(path, vec![Step(2), Step(1)]);
    }
}
