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

//! Errors reported by flow networks.

use thiserror::Error;

/// Error when building or querying a flow network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A network must contain at least one vertex.
    #[error("a flow network needs at least one vertex")]
    EmptyNetwork,

    /// The vertex lists of the network could not be allocated.
    #[error("cannot allocate a flow network with {0} vertices")]
    TooManyVertices(usize),

    /// A vertex index is not in `0..count`.
    #[error("invalid vertex {vertex} (must be in 0..{count})")]
    InvalidVertex { vertex: usize, count: usize },

    /// An edge was given a capacity below zero.
    #[error("edge capacity must not be negative")]
    NegativeCapacity,

    /// The new edge would let a capacity sum at `vertex` exceed the range of
    /// the capacity type.
    #[error("capacity sum at vertex {vertex} overflows")]
    Overflow { vertex: usize },

    /// Source and sink are the same vertex.
    #[error("source and sink must be different (both are {0})")]
    SourceIsSink(usize),

    /// The operation requires a maximum flow computed on the current network.
    #[error("no maximum flow has been computed for the current network")]
    NotSolved,

    /// The min-cut source differs from the source of the computed flow.
    #[error("the maximum flow has been computed for source {expected}, not {got}")]
    SourceMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
