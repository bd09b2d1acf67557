use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use df_io::ReversePolicy;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "df-cli")]
#[command(about = "dagflow CLI - flow network construction and max-flow", long_about = None)]
struct Cli {
    /// YAML run configuration; explicit flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Report per-stage timings
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random DAG with a reachable sink
    Generate {
        /// Number of nodes
        #[arg(long)]
        nodes: Option<usize>,
        /// Number of edges to sample
        #[arg(long)]
        edges: Option<usize>,
        #[arg(long)]
        min_cap: Option<u32>,
        #[arg(long)]
        max_cap: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Output edge-list file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Remove back edges until the graph is acyclic
    Repair {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Report acyclicity and source-to-sink reachability
    Check {
        input: PathBuf,
        /// Source node (default 0)
        #[arg(long)]
        source: Option<u32>,
        /// Sink node (default N-1)
        #[arg(long)]
        sink: Option<u32>,
    },
    /// Compute the maximum flow from source to sink
    Maxflow {
        input: PathBuf,
        #[arg(long)]
        source: Option<u32>,
        #[arg(long)]
        sink: Option<u32>,
        /// Stop after this many augmenting paths
        #[arg(long)]
        max_augmentations: Option<usize>,
        /// Write `from to flow` per edge to this file
        #[arg(long)]
        flow_output: Option<PathBuf>,
        /// Print a JSON summary on stdout
        #[arg(long)]
        json: bool,
        /// Run cycle repair before solving
        #[arg(long)]
        repair: bool,
    },
    /// Convert a `a b capacity` route list into an edge list
    ConvertRoutes {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// keep-both or keep-first-seen
        #[arg(long)]
        policy: Option<ReversePolicy>,
        /// Input ids start at 1
        #[arg(long)]
        one_based: bool,
        /// Node count of the output (default: highest id + 1)
        #[arg(long)]
        nodes: Option<usize>,
    },
    /// Convert a semicolon-separated pipeline project CSV into an edge list
    ConvertPipeline {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Also write the `id region` table here
        #[arg(long)]
        regions: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.timing {
        df_core::timing::enable_timing();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = commands::load_run_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            nodes,
            edges,
            min_cap,
            max_cap,
            seed,
            output,
        } => {
            let mut synth = config.synth;
            synth.num_nodes = nodes.unwrap_or(synth.num_nodes);
            synth.num_edges = edges.unwrap_or(synth.num_edges);
            synth.min_cap = min_cap.unwrap_or(synth.min_cap);
            synth.max_cap = max_cap.unwrap_or(synth.max_cap);
            synth.seed = seed.or(synth.seed);
            commands::cmd_generate(&synth, &output)
        }
        Commands::Repair { input, output } => {
            commands::cmd_repair(&input, &output, config.ingest.duplicate_policy)
        }
        Commands::Check {
            input,
            source,
            sink,
        } => commands::cmd_check(&input, source, sink, config.ingest.duplicate_policy),
        Commands::Maxflow {
            input,
            source,
            sink,
            max_augmentations,
            flow_output,
            json,
            repair,
        } => {
            let mut solver = config.solver;
            solver.max_augmentations = max_augmentations.or(solver.max_augmentations);
            commands::cmd_maxflow(&commands::MaxflowArgs {
                input: &input,
                source,
                sink,
                solver,
                duplicate_policy: config.ingest.duplicate_policy,
                flow_output: flow_output.as_deref(),
                json,
                repair,
            })
        }
        Commands::ConvertRoutes {
            input,
            output,
            policy,
            one_based,
            nodes,
        } => {
            let options = df_io::RouteOptions {
                one_based: one_based || config.ingest.one_based,
                reverse_policy: policy.unwrap_or(config.ingest.reverse_policy),
                num_nodes: nodes,
            };
            commands::cmd_convert_routes(&input, &output, &options)
        }
        Commands::ConvertPipeline {
            input,
            output,
            regions,
        } => commands::cmd_convert_pipeline(&input, &output, regions.as_deref()),
    }
}
