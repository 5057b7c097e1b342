//! List the available filter shapes.

use biquads_core::FilterShape;
use clap::Args;

/// List filter shapes.
#[derive(Args)]
pub struct ShapesArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the shapes command.
pub fn run(args: ShapesArgs) -> anyhow::Result<()> {
    if args.json {
        let shapes: Vec<_> = FilterShape::ALL
            .iter()
            .map(|shape| {
                serde_json::json!({
                    "name": shape.name(),
                    "uses_gain": shape.uses_gain(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&shapes)?);
        return Ok(());
    }

    println!("Filter Shapes");
    println!("=============");
    for shape in FilterShape::ALL {
        let gain = if shape.uses_gain() { "gain" } else { "" };
        println!("  {:10} {gain}", shape.name());
    }
    Ok(())
}
