#![deny(unsafe_code)]
//! CLI binary for tint.
//!
//! Subcommands:
//! - `list`: print available kernels and their signatures
//! - `describe <kernel>`: print one kernel's signature
//! - `render <kernel>`: shade a kernel over a pixel grid, write PNG

mod error;
mod logging;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use error::CliError;
use tint_core::{Color, Kernel, Recipe};
use tint_kernels::DomainErrorPolicy;

#[derive(Parser)]
#[command(name = "tint", about = "Per-pixel color kernel CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available kernels.
    List,
    /// Show the signature of one kernel.
    Describe {
        /// Kernel name (e.g. "stripes").
        kernel: String,
    },
    /// Shade a kernel over a pixel grid and write a PNG.
    Render {
        /// Kernel name (e.g. "flag-disc"). Required unless --recipe is given.
        #[arg(required_unless_present = "recipe", conflicts_with = "recipe")]
        kernel: Option<String>,

        /// Read kernel, size, params and current color from a JSON recipe.
        #[arg(long)]
        recipe: Option<PathBuf>,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 256, conflicts_with = "recipe")]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 256, conflicts_with = "recipe")]
        height: usize,

        /// Kernel parameters as JSON, keyed by name or positional.
        #[arg(long, default_value = "null", conflicts_with = "recipe")]
        params: String,

        /// The view's current color passed to stitchable kernels.
        #[arg(long, default_value = "#00000000", conflicts_with = "recipe")]
        current: String,

        /// Color substituted for pixels that fail with a domain error.
        /// Without it, any such failure aborts the render.
        #[arg(long)]
        fallback: Option<String>,

        /// Worker threads (default: all cores).
        #[arg(long)]
        threads: Option<usize>,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
}

fn parse_color(flag: &str, value: &str) -> Result<Color, CliError> {
    Color::from_hex(value).map_err(|e| CliError::Input(format!("invalid --{flag}: {e}")))
}

fn load_recipe(path: &Path) -> Result<Recipe, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid recipe {}: {e}", path.display())))
}

fn kernel_json(kernel: &Kernel) -> serde_json::Value {
    serde_json::json!({
        "name": kernel.name(),
        "description": kernel.description(),
        "signature": kernel.signature().to_json(),
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let registry = tint_kernels::registry();
    match cli.command {
        Command::List => {
            if cli.json {
                let kernels: Vec<_> = registry.iter().map(kernel_json).collect();
                let info = serde_json::json!({ "kernels": kernels });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Kernels:");
                for kernel in registry.iter() {
                    println!("  {}{}", kernel.name(), kernel.signature().describe());
                }
            }
        }
        Command::Describe { kernel } => {
            let kernel = registry.lookup(&kernel)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&kernel_json(kernel))?);
            } else {
                println!("{}{}", kernel.name(), kernel.signature().describe());
                println!("  {}", kernel.description());
            }
        }
        Command::Render {
            kernel,
            recipe,
            width,
            height,
            params,
            current,
            fallback,
            threads,
            output,
        } => {
            let recipe = match (recipe, kernel) {
                (Some(path), _) => load_recipe(&path)?,
                (None, Some(kernel)) => Recipe {
                    kernel,
                    width,
                    height,
                    params: serde_json::from_str(&params)
                        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?,
                    current: parse_color("current", &current)?,
                },
                (None, None) => {
                    return Err(CliError::Input(
                        "a kernel name or --recipe is required".into(),
                    ))
                }
            };

            let policy = match fallback {
                Some(hex) => DomainErrorPolicy::Substitute(parse_color("fallback", &hex)?),
                None => DomainErrorPolicy::Fail,
            };

            let frame = tint_kernels::render_with(registry, &recipe, policy, threads)?;
            tint_kernels::snapshot::write_png(&frame, &output)?;
            log::info!("rendered '{}' to {}", recipe.kernel, output.display());

            if cli.json {
                let info = serde_json::json!({
                    "kernel": recipe.kernel,
                    "width": recipe.width,
                    "height": recipe.height,
                    "params": recipe.params,
                    "current": recipe.current,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({}x{}) -> {}",
                    recipe.kernel,
                    recipe.width,
                    recipe.height,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
