//! Command-line interface orchestration for netfray.
//!
//! `degrees` reports the normalised in-degree distribution of a directed
//! graph; `resilience` attacks an undirected graph and reports how its
//! largest connected component shrinks. Both accept an adjacency-list file or
//! a seeded generator as input.

mod commands;

pub use commands::{
    AttachmentArgs, Cli, CliError, Command, CommandOutput, DegreesCommand, DegreesSource,
    ErdosRenyiArgs, FileArgs, GraphOverview, ResilienceCommand, ResilienceSource, StrategyArg,
    render_output, run_cli,
};
