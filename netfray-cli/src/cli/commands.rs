//! Command implementations and argument parsing for the netfray CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use netfray_core::{
    AttachmentParams, AttackStrategy, Directed, DirectedGraph, ErdosRenyiParams, GraphError,
    GraphSummary, NormalizedDistribution, ResilienceReport, ResilienceStudyBuilder, Undirected,
    UndirectedGraph, dpa, erdos_renyi, in_degree_distribution, upa,
};
use netfray_providers_adjacency::{AdjacencyProvider, AdjacencyProviderError};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_GENERATOR_SEED: u64 = 0;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "netfray", about = "Analyse degree distributions and network resilience.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the normalised in-degree distribution of a directed graph.
    Degrees(DegreesCommand),
    /// Print the largest-component curve of an undirected graph under attack.
    Resilience(ResilienceCommand),
}

/// Options accepted by the `degrees` command.
#[derive(Debug, Args, Clone)]
pub struct DegreesCommand {
    /// Graph to analyse.
    #[command(subcommand)]
    pub source: DegreesSource,
}

/// Directed graph sources for the `degrees` command.
#[derive(Debug, Subcommand, Clone)]
pub enum DegreesSource {
    /// Load an adjacency-list file.
    File(FileArgs),
    /// Generate a directed Erdos-Renyi graph.
    Er(ErdosRenyiArgs),
    /// Generate a directed preferential attachment graph.
    Dpa(AttachmentArgs),
}

/// Options accepted by the `resilience` command.
#[derive(Debug, Args, Clone)]
pub struct ResilienceCommand {
    /// Attack strategy; repeat to compare several strategies.
    #[arg(long = "strategy", value_enum, default_values_t = [StrategyArg::FastTargeted])]
    pub strategies: Vec<StrategyArg>,

    /// Seed for random attack orders.
    #[arg(long = "seed")]
    pub attack_seed: Option<u64>,

    /// Graph to attack.
    #[command(subcommand)]
    pub source: ResilienceSource,
}

/// Undirected graph sources for the `resilience` command.
#[derive(Debug, Subcommand, Clone)]
pub enum ResilienceSource {
    /// Load an adjacency-list file and symmetrise its edges.
    File(FileArgs),
    /// Generate an undirected Erdos-Renyi graph.
    Er(ErdosRenyiArgs),
    /// Generate an undirected preferential attachment graph.
    Upa(AttachmentArgs),
}

/// Adjacency-list file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to a file of `node neighbour...` lines.
    pub path: PathBuf,

    /// Override name for the graph (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Erdos-Renyi generator arguments.
#[derive(Debug, Args, Clone)]
pub struct ErdosRenyiArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,

    /// Independent probability of each edge.
    #[arg(long)]
    pub probability: f64,

    /// Seed for the generator.
    #[arg(long, default_value_t = DEFAULT_GENERATOR_SEED)]
    pub seed: u64,
}

/// Preferential attachment generator arguments.
#[derive(Debug, Args, Clone)]
pub struct AttachmentArgs {
    /// Size of the initial complete graph; also the edges added per node.
    #[arg(long = "initial-size")]
    pub initial_size: usize,

    /// Final number of nodes.
    #[arg(long = "end-size")]
    pub end_size: usize,

    /// Seed for the generator.
    #[arg(long, default_value_t = DEFAULT_GENERATOR_SEED)]
    pub seed: u64,
}

/// Attack strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Remove nodes in random order.
    Random,
    /// Remove a maximum-degree node each step by rescanning.
    Targeted,
    /// Remove a maximum-degree node each step using degree buckets.
    FastTargeted,
}

impl From<StrategyArg> for AttackStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Random => Self::Random,
            StrategyArg::Targeted => Self::Targeted,
            StrategyArg::FastTargeted => Self::FastTargeted,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Adjacency-list ingestion failed.
    #[error("failed to load `{path}`: {source}")]
    Adjacency {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying provider error.
        #[source]
        source: AdjacencyProviderError,
    },
    /// Graph generation or analysis failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Graph error underlying this failure, if any.
    #[must_use]
    pub fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Core(error)
            | Self::Adjacency {
                source: AdjacencyProviderError::Graph(error),
                ..
            } => Some(error),
            Self::Adjacency { .. } => None,
        }
    }
}

/// Named graph together with its size summary.
#[derive(Debug, Clone)]
pub struct GraphOverview {
    /// Name of the file or generator the graph came from.
    pub source: String,
    /// Node and edge counts.
    pub summary: GraphSummary,
}

/// Result of executing a CLI command.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Normalised in-degree distribution.
    Degrees {
        /// Graph the distribution was computed from.
        graph: GraphOverview,
        /// Degree to probability mass.
        distribution: NormalizedDistribution,
    },
    /// One resilience report per requested strategy.
    Resilience {
        /// Graph that was attacked.
        graph: GraphOverview,
        /// Reports in the order strategies were requested.
        reports: Vec<ResilienceReport>,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, generation, or analysis fails.
///
/// # Examples
/// ```
/// # use netfray_cli::cli::{AttachmentArgs, Cli, Command, CommandOutput, DegreesCommand, DegreesSource, run_cli};
/// let cli = Cli {
///     command: Command::Degrees(DegreesCommand {
///         source: DegreesSource::Dpa(AttachmentArgs { initial_size: 3, end_size: 50, seed: 1 }),
///     }),
/// };
/// let CommandOutput::Degrees { graph, .. } = run_cli(cli)? else {
///     unreachable!("degrees command yields a distribution");
/// };
/// assert_eq!(graph.summary.nodes, 50);
/// # Ok::<(), netfray_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Degrees(command) => {
            span.record("command", field::display("degrees"));
            run_degrees(command)
        }
        Command::Resilience(command) => {
            span.record("command", field::display("resilience"));
            run_resilience(command)
        }
    }
}

#[instrument(name = "cli.degrees", err, skip(command), fields(source = field::Empty))]
pub(super) fn run_degrees(command: DegreesCommand) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    let (source, graph): (String, DirectedGraph) = match command.source {
        DegreesSource::File(args) => {
            span.record("source", field::display("file"));
            load_file(&args)?
        }
        DegreesSource::Er(args) => {
            span.record("source", field::display("er"));
            let params = ErdosRenyiParams::new(args.nodes, args.probability)?;
            let mut rng = SmallRng::seed_from_u64(args.seed);
            ("er".to_owned(), erdos_renyi::<Directed, _>(&params, &mut rng))
        }
        DegreesSource::Dpa(args) => {
            span.record("source", field::display("dpa"));
            let params = AttachmentParams::new(args.initial_size, args.end_size)?;
            let mut rng = SmallRng::seed_from_u64(args.seed);
            ("dpa".to_owned(), dpa(params, &mut rng)?)
        }
    };

    let distribution = in_degree_distribution(&graph).normalize()?;
    info!(
        source = source.as_str(),
        nodes = graph.node_count(),
        degrees = distribution.len(),
        "degree distribution computed"
    );
    Ok(CommandOutput::Degrees {
        graph: GraphOverview {
            source,
            summary: graph.summary(),
        },
        distribution,
    })
}

#[instrument(
    name = "cli.resilience",
    err,
    skip(command),
    fields(source = field::Empty, strategies = command.strategies.len()),
)]
pub(super) fn run_resilience(command: ResilienceCommand) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    let (source, graph): (String, UndirectedGraph) = match command.source {
        ResilienceSource::File(args) => {
            span.record("source", field::display("file"));
            let (name, directed) = load_file(&args)?;
            (name, directed.to_undirected())
        }
        ResilienceSource::Er(args) => {
            span.record("source", field::display("er"));
            let params = ErdosRenyiParams::new(args.nodes, args.probability)?;
            let mut rng = SmallRng::seed_from_u64(args.seed);
            ("er".to_owned(), erdos_renyi::<Undirected, _>(&params, &mut rng))
        }
        ResilienceSource::Upa(args) => {
            span.record("source", field::display("upa"));
            let params = AttachmentParams::new(args.initial_size, args.end_size)?;
            let mut rng = SmallRng::seed_from_u64(args.seed);
            ("upa".to_owned(), upa(params, &mut rng)?)
        }
    };

    let mut builder = ResilienceStudyBuilder::new();
    if let Some(seed) = command.attack_seed {
        builder = builder.with_rng_seed(seed);
    }
    let strategies: Vec<AttackStrategy> = command
        .strategies
        .iter()
        .copied()
        .map(AttackStrategy::from)
        .collect();
    let reports = builder.build().compare(&graph, &strategies)?;

    info!(
        source = source.as_str(),
        nodes = graph.node_count(),
        reports = reports.len(),
        "resilience study completed"
    );
    Ok(CommandOutput::Resilience {
        graph: GraphOverview {
            source,
            summary: graph.summary(),
        },
        reports,
    })
}

#[instrument(
    name = "cli.load_file",
    err,
    skip(args),
    fields(path = %args.path.display(), override_name = field::Empty),
)]
pub(super) fn load_file(args: &FileArgs) -> Result<(String, DirectedGraph), CliError> {
    Span::current().record(
        "override_name",
        field::display(args.name.as_deref().unwrap_or("<derived>")),
    );
    let name = derive_source_name(&args.path, args.name.as_deref());
    let provider =
        AdjacencyProvider::try_from_path(name, &args.path).map_err(|source| {
            CliError::Adjacency {
                path: args.path.clone(),
                source,
            }
        })?;
    Ok((provider.name().to_owned(), provider.into_graph()))
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `output` to `writer` as a header followed by tab-separated rows.
///
/// Degree output lists `degree\tprobability`; resilience output lists
/// `removed\tlargest` under a `strategy:` line per report.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Degrees {
            graph,
            distribution,
        } => {
            render_overview(graph, &mut writer)?;
            writeln!(writer, "degree\tprobability")?;
            for (degree, probability) in distribution.points() {
                writeln!(writer, "{degree}\t{probability}")?;
            }
        }
        CommandOutput::Resilience { graph, reports } => {
            render_overview(graph, &mut writer)?;
            for report in reports {
                writeln!(writer, "strategy: {}", report.strategy().label())?;
                writeln!(writer, "removed\tlargest")?;
                for (removed, largest) in report.curve().points() {
                    writeln!(writer, "{removed}\t{largest}")?;
                }
            }
        }
    }
    Ok(())
}

fn render_overview(graph: &GraphOverview, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", graph.source)?;
    writeln!(writer, "nodes: {}", graph.summary.nodes)?;
    writeln!(writer, "edges: {}", graph.summary.edges)
}
