//! Factory definition commands.

use biquads_config::{factory_definition, factory_definitions};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory definitions
    List,

    /// Print a factory definition as TOML
    Show {
        /// Definition name
        name: String,
    },

    /// Write a factory definition to a TOML file for editing
    Export {
        /// Definition name
        name: String,

        /// Output path
        output: PathBuf,
    },
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List => {
            println!("Factory Definitions:");
            println!("====================");
            for def in factory_definitions() {
                let name = def.name.as_deref().unwrap_or("");
                let desc = def.description.as_deref().unwrap_or("");
                println!("  {name:12} {:10} - {desc}", def.shape.name());
            }
        }
        PresetsCommand::Show { name } => {
            print!("{}", factory_definition(&name)?.to_toml()?);
        }
        PresetsCommand::Export { name, output } => {
            factory_definition(&name)?.save(&output)?;
            println!("Saved '{name}' to {}", output.display());
        }
    }
    Ok(())
}
