// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Minimum cuts from the residual graph of a maximum flow.

use super::{FlowNetwork, State};
use crate::error::{Error, Result};
use crate::num::traits::NumAssign;
use crate::search::AugmentingPathFinder;

use log::debug;
#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// An edge crossing a minimum cut.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutEdge<F> {
    pub edge: usize,
    pub src: usize,
    pub snk: usize,
    pub capacity: F,
}

/// A minimum cut.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinCut<F> {
    /// The vertices on the source side, in increasing order.
    pub source_side: Vec<usize>,
    /// The edges from the source side to the sink side.
    pub edges: Vec<CutEdge<F>>,
}

impl<F> MinCut<F>
where
    F: NumAssign + Copy,
{
    /// Return the total capacity of the cut edges.
    pub fn capacity(&self) -> F {
        let mut cap = F::zero();
        for e in &self.edges {
            cap += e.capacity;
        }
        cap
    }

    /// Return `true` if `v` is on the source side of the cut.
    pub fn contains(&self, v: usize) -> bool {
        self.source_side.binary_search(&v).is_ok()
    }
}

impl<F> FlowNetwork<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Return the minimum cut of the last maximum flow computation.
    ///
    /// The source side of the cut consists of all vertices reachable from
    /// `src` in the residual graph. Fails if the network has not been solved
    /// or has been solved for a different source.
    pub fn find_min_cut(&self, src: usize) -> Result<MinCut<F>> {
        self.check_vertex(src)?;
        match self.state {
            State::Building => return Err(Error::NotSolved),
            State::Solved { src: expected, .. } if expected != src => {
                return Err(Error::SourceMismatch { expected, got: src })
            }
            State::Solved { .. } => (),
        }

        let mut finder = AugmentingPathFinder::new();
        finder.reach(self, src);

        let source_side: Vec<_> = (0..self.num_vertices()).filter(|&v| finder.is_reached(v)).collect();
        let edges: Vec<_> = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, info)| {
                info.capacity > F::zero() && finder.is_reached(info.src) && !finder.is_reached(info.snk)
            })
            .map(|(e, info)| CutEdge {
                edge: e,
                src: info.src,
                snk: info.snk,
                capacity: info.capacity,
            })
            .collect();

        debug!(
            "min cut in '{}': {} vertices on source side, {} cut edges",
            self.name,
            source_side.len(),
            edges.len()
        );

        let mincut = MinCut { source_side, edges };
        debug_assert!(Some(mincut.capacity()) == self.value());
        Ok(mincut)
    }
}

impl<F> fmt::Display for MinCut<F>
where
    F: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for e in &self.edges {
            writeln!(fmt, "Min Cut Edge: ({}, {}) : {}", e.src, e.snk, e.capacity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{CutEdge, Error, FlowNetwork};

    #[test]
    fn test_single_edge() {
        let mut net = FlowNetwork::new("single", 2).unwrap();
        net.add_edge(0, 1, 10).unwrap();
        net.find_max_flow(0, 1, false).unwrap();

        let cut = net.find_min_cut(0).unwrap();
        assert_eq!(cut.source_side, vec![0]);
        assert_eq!(
            cut.edges,
            vec![CutEdge {
                edge: 0,
                src: 0,
                snk: 1,
                capacity: 10
            }]
        );
        assert_eq!(cut.capacity(), 10);
        assert!(cut.contains(0));
        assert!(!cut.contains(1));
        assert_eq!(format!("{}", cut), "Min Cut Edge: (0, 1) : 10\n");
    }

    #[test]
    fn test_duality() {
        let mut net = FlowNetwork::new("small", 4).unwrap();
        for &(u, v, cap) in &[(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3), (1, 2, 1)] {
            net.add_edge(u, v, cap).unwrap();
        }
        let flow = net.find_max_flow(0, 3, false).unwrap();
        let cut = net.find_min_cut(0).unwrap();
        assert_eq!(cut.capacity(), flow.value);
        assert!(cut.contains(0));
        assert!(!cut.contains(3));
    }

    #[test]
    fn test_cycle() {
        // the residual graph of the source side contains a cycle
        let mut net = FlowNetwork::new("cycle", 4).unwrap();
        net.add_edge(0, 1, 5).unwrap();
        net.add_edge(1, 2, 5).unwrap();
        net.add_edge(2, 0, 5).unwrap();
        net.add_edge(2, 3, 1).unwrap();
        net.find_max_flow(0, 3, false).unwrap();

        let cut = net.find_min_cut(0).unwrap();
        assert_eq!(cut.source_side, vec![0, 1, 2]);
        assert_eq!(cut.edges.len(), 1);
        assert_eq!((cut.edges[0].src, cut.edges[0].snk), (2, 3));
        assert_eq!(cut.capacity(), 1);
    }

    #[test]
    fn test_zero_capacity_edges_are_not_cut() {
        let mut net = FlowNetwork::new("zero", 3).unwrap();
        net.add_edge(0, 1, 0).unwrap();
        net.add_edge(0, 2, 0).unwrap();
        let flow = net.find_max_flow(0, 2, false).unwrap();
        assert_eq!(flow.value, 0);

        let cut = net.find_min_cut(0).unwrap();
        assert_eq!(cut.source_side, vec![0]);
        assert!(cut.edges.is_empty());
        assert_eq!(cut.capacity(), 0);
    }

    #[test]
    fn test_usage_order() {
        let mut net = FlowNetwork::new("order", 3).unwrap();
        net.add_edge(0, 1, 1).unwrap();
        net.add_edge(1, 2, 1).unwrap();
        assert_eq!(net.find_min_cut(0), Err(Error::NotSolved));

        net.find_max_flow(0, 2, false).unwrap();
        assert_eq!(net.find_min_cut(1), Err(Error::SourceMismatch { expected: 0, got: 1 }));
        assert_eq!(net.find_min_cut(5), Err(Error::InvalidVertex { vertex: 5, count: 3 }));
        assert!(net.find_min_cut(0).is_ok());

        net.fill_residual_graph();
        assert_eq!(net.find_min_cut(0), Err(Error::NotSolved));
    }
}
