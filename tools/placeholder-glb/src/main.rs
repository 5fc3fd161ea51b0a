//! placeholder-glb - writes and inspects placeholder GLB assets

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glb_builder::parse_glb;
use placeholder_glb::{PlaceholderConfig, VertexLayout, encode_cube};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "placeholder-glb")]
#[command(about = "Placeholder cube GLB generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the placeholder cube to a GLB file
    Generate {
        /// Output .glb file
        #[arg(short, long, default_value = "placeholder.glb")]
        output: PathBuf,

        /// TOML config with size, origin and layout
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Edge length (overrides config)
        #[arg(long)]
        size: Option<f32>,

        /// Vertex layout (overrides config)
        #[arg(long, value_enum)]
        layout: Option<VertexLayout>,
    },

    /// Print the header, chunks and accessors of a GLB file
    Inspect {
        /// Input .glb file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            config,
            size,
            layout,
        } => {
            let config = match config {
                Some(path) => PlaceholderConfig::load(&path)
                    .with_context(|| format!("Failed to load config {:?}", path))?,
                None => PlaceholderConfig::default(),
            };
            let mut params = config.cube_params();
            if let Some(size) = size {
                params.size = size;
            }
            if let Some(layout) = layout {
                params.layout = layout;
            }

            let glb = encode_cube(&params)?;
            std::fs::write(&output, &glb)
                .with_context(|| format!("Failed to write {:?}", output))?;
            tracing::info!("Generated {:?} ({} bytes)", output, glb.len());
        }

        Commands::Inspect { input } => {
            let bytes =
                std::fs::read(&input).with_context(|| format!("Failed to read {:?}", input))?;
            inspect(&bytes)?;
        }
    }

    Ok(())
}

fn inspect(bytes: &[u8]) -> Result<()> {
    let chunks = parse_glb(bytes)?;

    println!("GLB Header:");
    println!("  Magic: 0x{:08X}", chunks.header.magic);
    println!("  Version: {}", chunks.header.version);
    println!("  Total length: {} bytes", chunks.header.length);

    println!("\nJSON Chunk: {} bytes", chunks.json.len());
    match chunks.bin {
        Some(bin) => println!("BIN Chunk: {} bytes", bin.len()),
        None => println!("BIN Chunk: absent"),
    }

    let json = chunks.json_value()?;
    if let Some(generator) = json["asset"]["generator"].as_str() {
        println!("\nGenerator: {}", generator);
    }
    if let Some(accessors) = json["accessors"].as_array() {
        println!("\nAccessors:");
        for (i, accessor) in accessors.iter().enumerate() {
            println!(
                "  {}: view {} count {} type {} componentType {}",
                i,
                accessor["bufferView"],
                accessor["count"],
                accessor["type"],
                accessor["componentType"]
            );
            if let (Some(min), Some(max)) = (accessor["min"].as_array(), accessor["max"].as_array())
            {
                println!("     min {:?} max {:?}", min, max);
            }
        }
    }
    if let Some(views) = json["bufferViews"].as_array() {
        println!("\nBuffer views:");
        for (i, view) in views.iter().enumerate() {
            println!(
                "  {}: offset {} length {}",
                i,
                view["byteOffset"].as_u64().unwrap_or(0),
                view["byteLength"]
            );
        }
    }

    Ok(())
}
