use std::fs::File;
use std::path::Path;

use anyhow::{Context, bail};
use df_core::NodeId;
use df_core::timing::StageTimings;
use df_graph::repair::{remove_cycles, repair_for_flow};
use df_graph::{DuplicatePolicy, FlowGraph, find_cycle, reach};
use df_io::{
    EdgeList, PipelineColumns, RouteOptions, RunConfig, convert_pipeline_csv, convert_routes,
    load_config, read_edge_list, write_edge_list, write_flow_assignment,
};
use df_solver::{SolverConfig, SolverError, max_flow, verify_flow};
use df_synth::{SynthConfig, generate};

pub fn load_run_config(path: Option<&Path>) -> anyhow::Result<RunConfig> {
    match path {
        Some(path) => {
            load_config(path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(RunConfig::default()),
    }
}

fn load_graph(path: &Path, policy: DuplicatePolicy) -> anyhow::Result<FlowGraph> {
    let list = read_edge_list(path).with_context(|| format!("reading {}", path.display()))?;
    list.to_graph(policy)
        .with_context(|| format!("building graph from {}", path.display()))
}

/// Resolve terminal flags against the graph: source defaults to 0, sink to N-1.
fn terminals(
    graph: &FlowGraph,
    source: Option<u32>,
    sink: Option<u32>,
) -> anyhow::Result<(NodeId, NodeId)> {
    let Some(last) = graph.node_count().checked_sub(1) else {
        bail!("graph has no nodes");
    };
    let node = |index: u32| {
        NodeId::try_from_index(index)
            .with_context(|| format!("node {index} is outside the node id range"))
    };
    let source = node(source.unwrap_or(0))?;
    let sink = match sink {
        Some(index) => node(index)?,
        None => NodeId::try_from_usize(last)
            .with_context(|| format!("node count {} is too large", last + 1))?,
    };
    graph.check_node(source)?;
    graph.check_node(sink)?;
    Ok((source, sink))
}

pub fn cmd_generate(config: &SynthConfig, output: &Path) -> anyhow::Result<()> {
    let mut timings = StageTimings::new();
    let dag = timings
        .measure("generate", || generate(config))
        .context("generating DAG")?;
    timings
        .measure("write", || write_edge_list(output, dag.num_nodes, &dag.edges))
        .with_context(|| format!("writing {}", output.display()))?;
    timings.report();

    println!(
        "✓ Generated {} nodes, {} edges ({} added to connect source and sink) -> {}",
        dag.num_nodes,
        dag.edges.len(),
        dag.boundary_edges(),
        output.display()
    );
    Ok(())
}

pub fn cmd_repair(input: &Path, output: &Path, policy: DuplicatePolicy) -> anyhow::Result<()> {
    let mut timings = StageTimings::new();
    let mut graph = timings.measure("read", || load_graph(input, policy))?;
    let report = timings.measure("repair", || remove_cycles(&mut graph));

    let list = EdgeList::from_graph(&graph);
    write_edge_list(output, list.num_nodes, &list.edges)
        .with_context(|| format!("writing {}", output.display()))?;
    timings.report();

    if report.is_noop() {
        println!("✓ Graph is already acyclic");
    } else {
        println!("Removed {} edges:", report.removed().len());
        for edge in report.removed() {
            println!("  {edge}");
        }
    }
    println!("✓ {} edges written to {}", list.edges.len(), output.display());
    Ok(())
}

pub fn cmd_check(
    input: &Path,
    source: Option<u32>,
    sink: Option<u32>,
    policy: DuplicatePolicy,
) -> anyhow::Result<()> {
    let graph = load_graph(input, policy)?;
    let (source, sink) = terminals(&graph, source, sink)?;

    println!(
        "Graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    match find_cycle(&graph) {
        None => println!("  acyclic: yes"),
        Some(cycle) => {
            let path: Vec<String> = cycle.iter().map(|n| n.to_string()).collect();
            println!("  acyclic: no (cycle {})", path.join(" -> "));
        }
    }
    let reachable = reach::is_reachable(&graph, source, sink);
    println!(
        "  sink {sink} reachable from source {source}: {}",
        if reachable { "yes" } else { "no" }
    );
    Ok(())
}

pub struct MaxflowArgs<'a> {
    pub input: &'a Path,
    pub source: Option<u32>,
    pub sink: Option<u32>,
    pub solver: SolverConfig,
    pub duplicate_policy: DuplicatePolicy,
    pub flow_output: Option<&'a Path>,
    pub json: bool,
    pub repair: bool,
}

pub fn cmd_maxflow(args: &MaxflowArgs<'_>) -> anyhow::Result<()> {
    let mut timings = StageTimings::new();
    let mut graph = timings.measure("read", || load_graph(args.input, args.duplicate_policy))?;
    let (source, sink) = terminals(&graph, args.source, args.sink)?;

    if args.repair {
        let report = timings
            .measure("repair", || repair_for_flow(&mut graph, source, sink))
            .context("preparing graph for flow")?;
        if !args.json {
            println!("Cycle repair removed {} edges", report.removed().len());
        }
    } else {
        reach::check_reachable(&graph, source, sink)?;
    }

    let flow = match timings.measure("solve", || max_flow(&graph, source, sink, &args.solver)) {
        Ok(flow) => flow,
        Err(SolverError::FlowIncomplete {
            best,
            augmentations,
            partial,
        }) => {
            if let Some(path) = args.flow_output {
                write_flow_assignment(path, &partial)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
            timings.report();
            bail!("flow incomplete after {augmentations} augmenting paths (best flow so far: {best})");
        }
        Err(err) => return Err(err).context("max-flow failed"),
    };
    timings
        .measure("verify", || verify_flow(&graph, &flow))
        .context("verifying flow")?;

    if let Some(path) = args.flow_output {
        write_flow_assignment(path, &flow)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    timings.report();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&flow.summary())?);
    } else {
        println!("✓ Max flow {source} -> {sink}: {}", flow.value);
        println!("  Augmenting paths: {}", flow.augmentations);
        println!(
            "  Edges carrying flow: {} of {}",
            flow.active_edges().count(),
            flow.edge_flows.len()
        );
        let cut = flow.cut_edges();
        println!("  Min cut: {} edges", cut.len());
        for edge in &cut {
            println!("    {edge}");
        }
    }
    Ok(())
}

pub fn cmd_convert_routes(
    input: &Path,
    output: &Path,
    options: &RouteOptions,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let conv = convert_routes(&text, options)
        .with_context(|| format!("converting routes from {}", input.display()))?;
    let list = &conv.edge_list;
    write_edge_list(output, list.num_nodes, &list.edges)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "✓ {} routes kept, {} reverse routes dropped, {} self loops dropped -> {}",
        list.edges.len(),
        conv.dropped_reverse,
        conv.dropped_self_loops,
        output.display()
    );
    Ok(())
}

pub fn cmd_convert_pipeline(
    input: &Path,
    output: &Path,
    regions: Option<&Path>,
) -> anyhow::Result<()> {
    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let conv = convert_pipeline_csv(file, &PipelineColumns::default())
        .with_context(|| format!("converting pipeline data from {}", input.display()))?;
    let list = &conv.edge_list;
    write_edge_list(output, list.num_nodes, &list.edges)
        .with_context(|| format!("writing {}", output.display()))?;
    if let Some(path) = regions {
        std::fs::write(path, conv.format_regions())
            .with_context(|| format!("writing {}", path.display()))?;
    }

    println!(
        "✓ {} regions, {} projects, {} rows skipped -> {}",
        conv.regions.len(),
        list.edges.len(),
        conv.skipped_rows,
        output.display()
    );
    Ok(())
}
