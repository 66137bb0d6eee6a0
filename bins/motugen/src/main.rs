use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use motu::plan::MacroPlan;
use sky130::Sky130Layer;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.geometry.is_some() {
        println!("plan: {:?}", &args.plan);
        motugen(args)?;
        println!("Layout generation complete.");
    } else {
        eprintln!("plan: {:?}", &args.plan);
        motugen(args)?;
        eprintln!("Layout generation complete.");
    }

    Ok(())
}

/// Arguments to [`motugen`].
#[derive(Parser)]
#[command(
    version,
    about,
    long_about = "Generate macro layout scripts from a TOML plan"
)]
pub struct Args {
    /// The path to the TOML macro plan.
    plan: PathBuf,
    /// The path where the geometry script should be saved.
    ///
    /// If the file already exists, it will be overwritten.
    ///
    /// If unspecified, the script will be written to stdout.
    #[arg(short, long)]
    geometry: Option<PathBuf>,
    /// The path where the decap instantiation stream should be saved.
    ///
    /// If unspecified, the stream is not written.
    #[arg(short, long)]
    instances: Option<PathBuf>,
}

/// Execute the given macro plan against the SKY130 process data and
/// write its output streams.
pub fn motugen(args: Args) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.plan)
        .with_context(|| format!("Failed to read plan from {:?}.", args.plan))?;
    let plan: MacroPlan<Sky130Layer> =
        toml::from_str(&text).with_context(|| "Failed to parse macro plan.")?;
    let output = plan
        .execute(&sky130::tech())
        .with_context(|| "Failed to execute macro plan.")?;

    if let Some(path) = args.geometry {
        let mut file =
            fs::File::create(&path).with_context(|| format!("Failed to create {:?}.", path))?;
        output
            .write_geometry(&mut file)
            .with_context(|| format!("Failed to write geometry script to {:?}.", path))?;
    } else {
        let mut stdout = io::stdout().lock();
        output
            .write_geometry(&mut stdout)
            .with_context(|| "Failed to write geometry script to stdout.")?;
    }

    if let Some(path) = args.instances {
        let mut file =
            fs::File::create(&path).with_context(|| format!("Failed to create {:?}.", path))?;
        output
            .write_instances(&mut file)
            .with_context(|| format!("Failed to write instance stream to {:?}.", path))?;
    }

    Ok(())
}
