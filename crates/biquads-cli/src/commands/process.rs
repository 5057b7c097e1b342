//! Filter a text stream of samples.

use super::common::FilterArgs;
use anyhow::Context;
use clap::Args;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

/// Read one sample per line, write one filtered sample per line.
#[derive(Args)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Input file (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Pass samples through unchanged
    #[arg(long)]
    pub bypass: bool,
}

/// Run the process command.
pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let (_, mut filter) = args.filter.build()?;
    if args.bypass {
        filter.set_bypass(true);
    }

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(std::io::BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let x: f64 = trimmed
            .parse()
            .with_context(|| format!("line {}: not a number: {trimmed:?}", line_no + 1))?;
        writeln!(out, "{}", filter.process_sample(x))?;
        count += 1;
    }
    out.flush()?;

    tracing::info!(samples = count, shape = %filter.shape(), "processed stream");
    Ok(())
}
