//! Print the impulse response of a filter.

use super::common::FilterArgs;
use clap::Args;

/// Print the first samples of the impulse response.
#[derive(Args)]
pub struct ImpulseArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Number of samples
    #[arg(short = 'n', long, default_value = "32")]
    pub samples: usize,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the impulse command.
pub fn run(args: ImpulseArgs) -> anyhow::Result<()> {
    let (_, mut filter) = args.filter.build()?;

    let mut response = vec![0.0; args.samples];
    if let Some(first) = response.first_mut() {
        *first = 1.0;
    }
    filter.process_block(&mut response);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for (n, h) in response.iter().enumerate() {
        println!("{n:5} {h:+.12}");
    }
    Ok(())
}
