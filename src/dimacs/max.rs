/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! This module implements a read function for the famous DIMACS max
//! flow format. A DIMACS file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p max <n> <m>`,
//!    where `<n>` is an integer > 0 denoting the number of nodes and
//!    `<m>` an integer >= 0 denoting the number of arcs.
//! 4. after the problem line there must follow exactly two node lines
//!    of the form `n <node> <type>` where `<node>` is the node number
//!    between `1..n` and `<type>` is either `s` (if this is the source
//!    node) or `t` (if this is the sink node).
//! 5. after the node lines there must be exactly `m` arc lines `a <u>
//!    <v> <c>` denoting the source and sink nodes of an arc as well as
//!    the arcs capacity `<c>` (an integer >= 0).
//!
//! Loops are not allowed. Parallel arcs are accepted and kept as
//! distinct edges of the network. In the "official" DIMACS format
//! parallel edges are forbidden.
//!
//! Node numbers in the file start at 1, vertex indices of the network
//! start at 0.

use super::{DimacsReader, Error, Result};
use crate::num::traits::{CheckedAdd, NumAssign};
use crate::FlowNetwork;

use log::debug;
use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

pub struct Instance<F> {
    /// The network.
    pub network: FlowNetwork<F>,
    /// The source vertex.
    pub src: usize,
    /// The sink vertex.
    pub snk: usize,
}

pub fn read<R, F>(r: R) -> Result<Instance<F>>
where
    R: Read,
    F: NumAssign + Ord + Copy + CheckedAdd + FromStr,
    F::Err: Display,
{
    read_named(r, "dimacs")
}

fn read_named<R, F>(r: R, name: &str) -> Result<Instance<F>>
where
    R: Read,
    F: NumAssign + Ord + Copy + CheckedAdd + FromStr,
    F::Err: Display,
{
    let mut reader = DimacsReader::new(r);

    // Read the problem line.
    let mut pline = reader.expect_line('p')?;
    pline.expect("max")?;
    let nnodes: usize = pline.number()?;
    let nedges: usize = pline.number()?;
    pline.end()?;

    let line = pline.line;
    let mut network = FlowNetwork::new(name, nnodes).map_err(|source| Error::Network { line, source })?;
    let mut src = None;
    let mut snk = None;

    for _ in 0..2 {
        let mut nline = reader.expect_line('n')?;
        let u: usize = nline.number()?;
        if u < 1 || u > nnodes {
            return Err(Error::Data {
                line: nline.line,
                msg: format!("invalid node id {} (must be in 1..{})", u, nnodes),
            });
        }
        let what = nline.str()?;
        match what {
            "s" => {
                if src.is_some() {
                    return Err(Error::Format {
                        line: nline.line,
                        msg: "duplicate source node".to_string(),
                    });
                }
                src = Some(u - 1);
            }
            "t" => {
                if snk.is_some() {
                    return Err(Error::Format {
                        line: nline.line,
                        msg: "duplicate sink node".to_string(),
                    });
                }
                snk = Some(u - 1);
            }
            _ => {
                return Err(Error::Format {
                    line: nline.line,
                    msg: format!("invalid node type, must be 's' or 't', got: {}", what),
                });
            }
        }
        nline.end()?;
    }

    for _ in 0..nedges {
        let mut aline = reader.expect_line('a')?;
        let u: usize = aline.number()?;
        let v: usize = aline.number()?;
        let c: F = aline.number()?;
        aline.end()?;

        if u < 1 || u > nnodes {
            return Err(Error::Data {
                line: aline.line,
                msg: format!("invalid source node id {} (must be in 1..{})", u, nnodes),
            });
        }

        if v < 1 || v > nnodes {
            return Err(Error::Data {
                line: aline.line,
                msg: format!("invalid sink node id {} (must be in 1..{})", v, nnodes),
            });
        }

        if u == v {
            return Err(Error::Data {
                line: aline.line,
                msg: format!("invalid loop ({},{}) in edge", u, u),
            });
        }

        let line = aline.line;
        network
            .add_edge(u - 1, v - 1, c)
            .map_err(|source| Error::Network { line, source })?;
    }

    if let Some(toks) = reader.read_line()? {
        return Err(Error::Format {
            line: toks.line,
            msg: format!(
                "unexpected line at the end of file (expected exactly {} 'a' lines)",
                nedges,
            ),
        });
    }

    // exactly two distinct node lines have been read
    let (src, snk) = match (src, snk) {
        (Some(src), Some(snk)) => (src, snk),
        _ => unreachable!(),
    };
    debug!(
        "read max flow instance '{}' with {} vertices and {} edges",
        name, nnodes, nedges
    );
    Ok(Instance { network, src, snk })
}

pub fn read_from_file<F>(filename: &str) -> Result<Instance<F>>
where
    F: NumAssign + Ord + Copy + CheckedAdd + FromStr,
    F::Err: Display,
{
    read_named(std::fs::File::open(filename)?, filename)
}

/// Write a max-flow instance.
pub fn write<W, F>(mut w: W, instance: &Instance<F>) -> std::io::Result<()>
where
    W: Write,
    F: NumAssign + Ord + Copy + Display,
{
    let net = &instance.network;
    writeln!(w, "p max {} {}", net.num_vertices(), net.num_edges())?;
    writeln!(w, "n {} s", instance.src + 1)?;
    writeln!(w, "n {} t", instance.snk + 1)?;
    for (u, v, cap) in net.edges() {
        writeln!(w, "a {} {} {}", u + 1, v + 1, cap)?;
    }

    Ok(())
}

/// Write a max-flow instance to a named file.
pub fn write_to_file<F>(filename: &str, instance: &Instance<F>) -> std::io::Result<()>
where
    F: NumAssign + Ord + Copy + Display,
{
    write(&mut std::fs::File::create(filename)?, instance)
}
