/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_flownet::{edmondskarp, Error, FlowNetwork, MaxFlow};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::error;

fn network(n: usize, edges: &[(usize, usize, i32)]) -> FlowNetwork<i32> {
    let mut net = FlowNetwork::new("test", n).unwrap();
    for &(u, v, cap) in edges {
        net.add_edge(u, v, cap).unwrap();
    }
    net
}

/// Check capacity bounds, flow conservation and the flow value.
fn check_flow(net: &FlowNetwork<i32>, flow: &MaxFlow<i32>, s: usize, t: usize) {
    assert_eq!(flow.flows.len(), net.num_edges());
    for f in &flow.flows {
        assert!(f.flow >= 0 && f.flow <= net.capacity(f.edge));
        assert_eq!(f.flow, net.flow(f.edge));
    }

    let balance = |u: usize| {
        flow.flows.iter().filter(|f| f.src == u).map(|f| f.flow).sum::<i32>()
            - flow.flows.iter().filter(|f| f.snk == u).map(|f| f.flow).sum::<i32>()
    };
    for u in (0..net.num_vertices()).filter(|&u| u != s && u != t) {
        assert_eq!(balance(u), 0, "flow conservation violated at {}", u);
    }
    assert_eq!(balance(s), flow.value);
    assert_eq!(balance(t), -flow.value);

    for u in 0..net.num_vertices() {
        for v in 0..net.num_vertices() {
            assert!(net.residual(u, v) >= 0);
        }
    }
}

#[test]
fn test_six_nodes() {
    let (s, a, b, c, d, t) = (0, 1, 2, 3, 4, 5);
    let mut net = network(
        6,
        &[
            (s, a, 5),
            (s, c, 5),
            (a, b, 2),
            (a, c, 1),
            (a, d, 1),
            (c, d, 2),
            (d, b, 2),
            (b, t, 4),
            (d, t, 5),
        ],
    );

    let flow = net.find_max_flow(s, t, true).unwrap();
    assert_eq!(flow.value, 5);
    assert_eq!(flow.paths.iter().map(|p| p.amount).sum::<i32>(), 5);
    check_flow(&net, &flow, s, t);

    let mincut = net.find_min_cut(s).unwrap();
    assert_eq!(mincut.source_side, vec![s, a, c]);
    let mut cut: Vec<_> = mincut.edges.iter().map(|e| (e.src, e.snk, e.capacity)).collect();
    cut.sort();
    assert_eq!(cut, vec![(a, b, 2), (a, d, 1), (c, d, 2)]);
}

#[test]
fn test_ten_nodes() {
    let (s, a, b, c, d, e, f, g, h, t) = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
    let mut net = network(
        10,
        &[
            (s, b, 18),
            (s, e, 27),
            (b, a, 8),
            (b, c, 9),
            (b, f, 6),
            (a, c, 1),
            (a, d, 10),
            (d, c, 3),
            (c, d, 8),
            (e, c, 5),
            (e, d, 2),
            (e, f, 9),
            (e, h, 5),
            (f, g, 6),
            (h, g, 4),
            (h, d, 8),
            (d, t, 33),
            (g, t, 6),
        ],
    );
    assert_eq!(net.num_edges(), 18);

    let flow = net.find_max_flow(s, t, false).unwrap();
    assert_eq!(flow.value, 29);
    check_flow(&net, &flow, s, t);

    let mincut = net.find_min_cut(s).unwrap();
    assert_eq!(mincut.source_side, vec![s, b, c, e, f]);
    assert_eq!(mincut.capacity(), 29);
}

#[test]
fn test_small_scenario() {
    let mut net = network(4, &[(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3), (1, 2, 1)]);
    let flow = net.find_max_flow(0, 3, false).unwrap();
    assert_eq!(flow.value, 5);
    check_flow(&net, &flow, 0, 3);
    assert_eq!(net.find_min_cut(0).unwrap().capacity(), 5);
}

#[test]
fn test_single_edge() {
    let mut net = network(2, &[(0, 1, 10)]);
    assert_eq!(net.find_max_flow(0, 1, false).unwrap().value, 10);

    let mincut = net.find_min_cut(0).unwrap();
    assert_eq!(mincut.edges.len(), 1);
    assert_eq!((mincut.edges[0].src, mincut.edges[0].snk), (0, 1));
    assert_eq!(mincut.capacity(), 10);
}

#[test]
fn test_disconnected() {
    let mut net = network(5, &[(0, 1, 4), (1, 0, 2), (2, 3, 7), (3, 4, 1)]);
    let capacities = net.residual_matrix();

    let flow = net.find_max_flow(0, 4, false).unwrap();
    assert_eq!(flow.value, 0);
    assert_eq!(net.residual_matrix(), capacities);

    let mincut = net.find_min_cut(0).unwrap();
    assert_eq!(mincut.source_side, vec![0, 1]);
    assert!(mincut.edges.is_empty());
}

#[test]
fn test_rejected_edges() {
    let mut net = network(3, &[(0, 1, 1)]);
    assert!(net.add_edge(usize::MAX, 0, 5).is_err());
    assert!(net.add_edge(0, 3, 5).is_err());
    assert_eq!(net.add_edge(0, 2, -5), Err(Error::NegativeCapacity));
    assert_eq!(net.num_vertices(), 3);
    assert_eq!(net.edges().collect::<Vec<_>>(), vec![(0, 1, 1)]);
}

#[test]
fn test_capacity_limits() -> Result<(), Box<dyn error::Error>> {
    let mut net = FlowNetwork::new("limits", 3)?;
    net.add_edge(0, 1, i32::MAX)?;
    assert_eq!(net.add_edge(0, 1, i32::MAX), Err(Error::Overflow { vertex: 0 }));
    assert_eq!(net.add_edge(0, 1, 1), Err(Error::Overflow { vertex: 0 }));
    net.add_edge(1, 2, i32::MAX)?;

    let flow = net.find_max_flow(0, 2, true)?;
    assert_eq!(flow.value, i32::MAX);
    check_flow(&net, &flow, 0, 2);
    assert_eq!(net.find_min_cut(0)?.capacity(), i32::MAX);

    assert_eq!(
        FlowNetwork::<u64>::new("huge", usize::MAX).unwrap_err(),
        Error::TooManyVertices(usize::MAX)
    );

    Ok(())
}

#[test]
fn test_fill_residual_graph() {
    let mut net = network(4, &[(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3), (1, 2, 1)]);
    let capacities = net.residual_matrix();
    let flow = net.find_max_flow(0, 3, false).unwrap();
    assert_ne!(net.residual_matrix(), capacities);

    net.fill_residual_graph();
    assert_eq!(net.residual_matrix(), capacities);
    for f in &flow.flows {
        assert_eq!(net.flow(f.edge), f.flow);
    }
    assert_eq!(net.find_min_cut(0), Err(Error::NotSolved));
}

#[test]
fn test_random_duality() -> Result<(), Box<dyn error::Error>> {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.gen_range(2..11);
        let m = rng.gen_range(0..4 * n);
        let mut net = FlowNetwork::new("random", n)?;
        for _ in 0..m {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                net.add_edge(u, v, rng.gen_range(0..20))?;
            }
        }

        let flow = net.find_max_flow(0, n - 1, true)?;
        check_flow(&net, &flow, 0, n - 1);
        assert_eq!(flow.paths.iter().map(|p| p.amount).sum::<i32>(), flow.value);

        let mincut = net.find_min_cut(0)?;
        assert_eq!(mincut.capacity(), flow.value);
        assert!(mincut.contains(0));
        assert!(!mincut.contains(n - 1));
    }

    Ok(())
}

#[test]
fn test_edmondskarp_function() -> Result<(), Box<dyn error::Error>> {
    let (value, flow, mincut) = edmondskarp(4, 0, 3, vec![(0, 1, 2u64), (1, 3, 5), (0, 2, 4), (2, 3, 1)])?;
    assert_eq!(value, 3);
    assert_eq!(flow, vec![2, 2, 1, 1]);
    assert_eq!(mincut, vec![0, 2]);

    assert_eq!(
        edmondskarp(2, 0, 0, vec![(0, 1, 1)]),
        Err(Error::SourceIsSink(0))
    );

    Ok(())
}

#[cfg(feature = "dimacs")]
#[test]
fn test_dimacs() -> Result<(), Box<dyn error::Error>> {
    use rs_flownet::dimacs;
    use std::io::Cursor;

    let file = "c two disjoint paths and a cross edge
p max 4 5
n 1 s
n 4 t
a 1 2 4
a 1 3 2
a 2 3 2
a 2 4 3
a 3 4 5
";
    let instance = dimacs::max::read::<_, i32>(Cursor::new(file))?;
    let mut net = instance.network;
    let flow = net.find_max_flow(instance.src, instance.snk, false)?;
    assert_eq!(flow.value, 6);
    check_flow(&net, &flow, instance.src, instance.snk);

    Ok(())
}

#[cfg(feature = "serialize")]
#[test]
fn test_serialize() -> Result<(), Box<dyn error::Error>> {
    use rs_flownet::MinCut;

    let mut net = network(3, &[(0, 1, 2), (1, 2, 1)]);
    let flow = net.find_max_flow(0, 2, true)?;
    let mincut = net.find_min_cut(0)?;

    let serialized = serde_json::to_string(&flow)?;
    let flow2: MaxFlow<i32> = serde_json::from_str(&serialized)?;
    assert_eq!(flow, flow2);

    let serialized = serde_json::to_string(&mincut)?;
    let mincut2: MinCut<i32> = serde_json::from_str(&serialized)?;
    assert_eq!(mincut, mincut2);

    Ok(())
}
