/*
 * Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use time::OffsetDateTime;

use rustop::opts;

use rs_flownet::dimacs;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve max-flow problem with the algorithm of Edmonds-Karp.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        opt report:bool, desc:"Print the augmenting paths and the flow on each edge.";
        opt residual:bool, desc:"Print the final residual graph.";
        param file:String, desc:"Instance file name";
    }
    .parse_or_exit();

    let tstart = OffsetDateTime::now_utc();
    let instance = dimacs::max::read_from_file::<i64>(&args.file)?;

    let mut net = instance.network;
    let s = instance.src;
    let t = instance.snk;

    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of vertices: {}", net.num_vertices());
    println!("  number of edges: {}", net.num_edges());

    let tstart = OffsetDateTime::now_utc();
    let mut flow = net.find_max_flow(s, t, args.report)?;
    for _ in 1..args.num {
        flow = net.find_max_flow(s, t, args.report)?;
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("Flow: {}", flow.value);

    if args.report {
        println!();
        println!("-- Max Flow: {} --", net.name());
        print!("{}", flow);
    }

    let mincut = net.find_min_cut(s)?;
    println!();
    println!("-- Min Cut: {} --", net.name());
    print!("{}", mincut);

    if args.residual {
        println!();
        print!("{}", net.display_residual_graph());
    }

    assert!(flow.flows.iter().all(|f| f.flow >= 0 && f.flow <= net.capacity(f.edge)));
    assert!((0..net.num_vertices()).filter(|&u| u != s && u != t).all(|u| {
        flow.flows.iter().filter(|f| f.src == u).map(|f| f.flow).sum::<i64>()
            == flow.flows.iter().filter(|f| f.snk == u).map(|f| f.flow).sum::<i64>()
    }));
    assert_eq!(mincut.capacity(), flow.value);

    Ok(())
}
