//! Print filter coefficients.

use super::common::FilterArgs;
use biquads_core::Coefficients;
use clap::Args;
use std::path::PathBuf;

/// Print raw and normalized coefficients.
#[derive(Args)]
pub struct CoeffsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Also save the resolved definition to this TOML file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Run the coeffs command.
pub fn run(args: CoeffsArgs) -> anyhow::Result<()> {
    let (def, filter) = args.filter.build()?;
    let params = filter.parameters();
    let raw = Coefficients::derive(filter.shape(), params);
    let normalized = filter.coefficients();

    if let Some(path) = &args.save {
        def.save(path)?;
        tracing::info!(path = %path.display(), "saved filter definition");
    }

    if args.json {
        let report = serde_json::json!({
            "shape": filter.shape(),
            "parameters": params,
            "raw": raw,
            "normalized": normalized,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Shape:       {}", filter.shape());
    println!("Cutoff:      {} Hz", params.cutoff);
    println!("Sample Rate: {} Hz", params.sample_rate);
    println!("Q:           {}", params.q_factor);
    if filter.shape().uses_gain() {
        println!("Gain:        {} dB", params.gain);
    }
    println!();
    print_set("Raw", &raw);
    print_set("Normalized", normalized);
    Ok(())
}

fn print_set(label: &str, c: &Coefficients) {
    println!("{label}:");
    println!("  b0 = {:+.12}", c.b0);
    println!("  b1 = {:+.12}", c.b1);
    println!("  b2 = {:+.12}", c.b2);
    println!("  a0 = {:+.12}", c.a0);
    println!("  a1 = {:+.12}", c.a1);
    println!("  a2 = {:+.12}", c.a2);
}
