//! Print the analytic frequency response of a filter.

use super::common::FilterArgs;
use biquads_core::{magnitude_db_at, phase_at};
use clap::Args;

/// Print magnitude (dB) and phase (degrees) at chosen frequencies.
#[derive(Args)]
pub struct ResponseArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Comma-separated frequencies in Hz (default: logarithmic sweep)
    #[arg(long, value_delimiter = ',')]
    pub freqs: Vec<f64>,

    /// Number of points in the sweep
    #[arg(long, default_value = "32")]
    pub points: usize,

    /// Lowest sweep frequency in Hz
    #[arg(long, default_value = "20")]
    pub min_freq: f64,

    /// Highest sweep frequency in Hz (default: just below Nyquist)
    #[arg(long)]
    pub max_freq: Option<f64>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the response command.
pub fn run(args: ResponseArgs) -> anyhow::Result<()> {
    let (_, filter) = args.filter.build()?;
    let sample_rate = filter.sample_rate();
    let nyquist = filter.parameters().nyquist();

    let freqs = if args.freqs.is_empty() {
        let max_freq = args.max_freq.unwrap_or(nyquist * 0.99);
        anyhow::ensure!(
            args.min_freq > 0.0 && args.min_freq < max_freq,
            "sweep needs 0 < min-freq < max-freq, got {} and {max_freq}",
            args.min_freq
        );
        log_sweep(args.min_freq, max_freq, args.points)
    } else {
        args.freqs
    };

    let rows: Vec<(f64, f64, f64)> = freqs
        .iter()
        .map(|&f| {
            let c = filter.coefficients();
            (
                f,
                magnitude_db_at(c, f, sample_rate),
                phase_at(c, f, sample_rate).to_degrees(),
            )
        })
        .collect();

    if args.json {
        let points: Vec<_> = rows
            .iter()
            .map(|&(freq, magnitude_db, phase_deg)| {
                serde_json::json!({
                    "freq": freq,
                    "magnitude_db": magnitude_db,
                    "phase_deg": phase_deg,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("{:>12} {:>12} {:>10}", "Hz", "dB", "deg");
    for (freq, magnitude_db, phase_deg) in rows {
        println!("{freq:12.2} {magnitude_db:12.4} {phase_deg:10.2}");
    }
    Ok(())
}

/// Logarithmically spaced frequencies from `min` to `max` inclusive.
fn log_sweep(min: f64, max: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let ratio = (max / min).ln();
            let last = (points - 1) as f64;
            (0..points)
                .map(|i| min * (ratio * i as f64 / last).exp())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sweep_endpoints() {
        let sweep = log_sweep(20.0, 20_000.0, 4);
        assert_eq!(sweep.len(), 4);
        assert!((sweep[0] - 20.0).abs() < 1e-9);
        assert!((sweep[1] - 200.0).abs() < 1e-9);
        assert!((sweep[3] - 20_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_log_sweep_degenerate_counts() {
        assert!(log_sweep(20.0, 100.0, 0).is_empty());
        assert_eq!(log_sweep(20.0, 100.0, 1), vec![20.0]);
    }
}
