use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use tracing::info;

use crate::cli::Cli;
use crate::core::sequence::SequenceSet;
use crate::matching::engine::{MatchingConfig, MatchingEngine};
use crate::matching::report::RangeReporter;
use crate::parsing::fasta::load_fasta;

/// Run the matcher end to end.
///
/// `k` is validated first; both inputs are loaded and the output created
/// before any matching starts.
///
/// # Errors
///
/// Returns an error if `k` is invalid, an input cannot be loaded, or the
/// output cannot be written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = MatchingConfig::with_kmer_length(cli.kmer_length)?;

    info!(
        k = %config.kmer_length,
        phage = %cli.phage.display(),
        host = %cli.host.display(),
        "Finding exact matches"
    );

    let phages = load_input(&cli.phage, "phage")?;
    let hosts = load_input(&cli.host, "host")?;

    let output = File::create(&cli.output)
        .with_context(|| format!("Unable to create output file {}", cli.output.display()))?;

    let engine = MatchingEngine::new(&phages, &hosts, &config);

    let mut reporter = RangeReporter::new(BufWriter::new(output), config.kmer_length);
    let write_context = || format!("Failed to write matches to {}", cli.output.display());

    reporter
        .write_header(
            &cli.phage.display().to_string(),
            &cli.host.display().to_string(),
        )
        .with_context(write_context)?;
    let summary = engine.run(&mut reporter).with_context(write_context)?;
    let rows = reporter.written();
    reporter.finish().with_context(write_context)?;

    info!(
        matches = rows,
        phages = summary.phage_sequences,
        hosts = summary.host_sequences,
        seconds = start.elapsed().as_secs_f64(),
        "Finished"
    );
    Ok(())
}

fn load_input(path: &Path, role: &str) -> anyhow::Result<SequenceSet> {
    load_fasta(path).with_context(|| format!("Unable to load {role} FASTA {}", path.display()))
}
