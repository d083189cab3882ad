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

//! Maximum flows and minimum cuts in capacitated networks.
//!
//! The crate solves the maximum flow problem with the algorithm of
//! Edmonds-Karp, i.e. the flow is repeatedly augmented along shortest paths
//! in the residual graph. Once no augmenting path remains, the vertices
//! reachable from the source in the residual graph form the source side of a
//! minimum cut.
//!
//! # Example
//!
//! ```
//! use rs_flownet::FlowNetwork;
//!
//! let mut net = FlowNetwork::new("example", 4).unwrap();
//! net.add_edge(0, 1, 3).unwrap();
//! net.add_edge(0, 2, 2).unwrap();
//! net.add_edge(1, 3, 2).unwrap();
//! net.add_edge(2, 3, 3).unwrap();
//! net.add_edge(1, 2, 1).unwrap();
//!
//! let flow = net.find_max_flow(0, 3, true).unwrap();
//! assert_eq!(flow.value, 5);
//! assert_eq!(flow.paths.len(), 3);
//!
//! let mincut = net.find_min_cut(0).unwrap();
//! assert_eq!(mincut.source_side, vec![0]);
//! assert_eq!(mincut.capacity(), flow.value);
//! ```

#![forbid(unsafe_code)]

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, Result};

pub mod network;
pub use self::network::{edmondskarp, AugmentingPath, CutEdge, EdgeFlow, FlowNetwork, MaxFlow, MinCut, State};

pub mod search;
pub use self::search::AugmentingPathFinder;

#[cfg(any(feature = "dimacs"))]
pub mod dimacs;
