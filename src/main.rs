//! CLI entry point for sc-vdf-mapper
//!
//! Provides command-line interface for checking, listing and dry-running
//! compiled controller bindings.

use clap::{Parser, Subcommand};
use colored::*;
use sc_vdf_mapper::{
    config::ConfigManager,
    core::{BindingTable, RegionBindingBundle},
    mapper::DryRunMapper,
};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "sc-vdf-mapper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a config and report problems
    Check {
        /// Path to VDF controller config file
        #[arg(short, long)]
        config: PathBuf,

        /// Preset name to activate (defaults to the first preset)
        #[arg(short, long)]
        preset: Option<String>,
    },

    /// List the compiled bindings
    List {
        /// Path to VDF controller config file
        #[arg(short, long)]
        config: PathBuf,

        /// Preset name to activate (defaults to the first preset)
        #[arg(short, long)]
        preset: Option<String>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the merged configuration tree as JSON
    Tree {
        /// Path to VDF controller config file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Show the event-mapper calls the bindings would produce
    Plan {
        /// Path to VDF controller config file
        #[arg(short, long)]
        config: PathBuf,

        /// Preset name to activate (defaults to the first preset)
        #[arg(short, long)]
        preset: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Check { config, preset } => check_config(&config, preset.as_deref())?,
        Commands::List {
            config,
            preset,
            json,
        } => list_bindings(&config, preset.as_deref(), json)?,
        Commands::Tree { config } => print_tree(&config)?,
        Commands::Plan { config, preset } => print_plan(&config, preset.as_deref())?,
    }

    Ok(())
}

/// Expand tilde and open the config
fn open_config(config_path: &Path) -> anyhow::Result<ConfigManager> {
    let expanded_path = shellexpand::tilde(
        config_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );

    Ok(ConfigManager::new(PathBuf::from(expanded_path.as_ref()))?)
}

/// Check that a config compiles
fn check_config(config_path: &Path, preset: Option<&str>) -> anyhow::Result<()> {
    let manager = open_config(config_path)?;

    println!("{} Compiling config: {}", "→".cyan(), manager.config_path().display());

    match manager.compile(preset) {
        Ok(table) => {
            println!(
                "{} {} region{} bound",
                "✓".green().bold(),
                table.len(),
                if table.len() == 1 { "" } else { "s" }
            );
            for (region, _) in table.regions() {
                println!("  {} {}", "•".dimmed(), region);
            }
            println!("\n{}", "Config is ready to use ✓".bold());
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            println!("{}", "⚠ The input-mapping session would refuse to start.".yellow());
            std::process::exit(1);
        }
    }

    Ok(())
}

/// List all compiled bindings
fn list_bindings(config_path: &Path, preset: Option<&str>, json: bool) -> anyhow::Result<()> {
    let manager = open_config(config_path)?;
    let table = manager.compile(preset)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Bindings from: {}\n", manager.config_path().display()).bold()
    );
    print_table(&table);

    Ok(())
}

fn print_table(table: &BindingTable) {
    for (region, bundle) in table.regions() {
        println!("{}", format!("{}", region).cyan().bold());

        let slots: Vec<(&str, String)> = match bundle {
            RegionBindingBundle::PadMouse { click } => {
                vec![("mode", "mouse".to_string()), ("click", click.to_string())]
            }
            RegionBindingBundle::PadScroll { click } => {
                vec![("mode", "scroll".to_string()), ("click", click.to_string())]
            }
            RegionBindingBundle::PadZones { zones, clicked } => vec![
                ("north", zones.north.to_string()),
                ("west", zones.west.to_string()),
                ("south", zones.south.to_string()),
                ("east", zones.east.to_string()),
                ("clicked", clicked.to_string()),
            ],
            RegionBindingBundle::StickZones { zones, click } => vec![
                ("north", zones.north.to_string()),
                ("west", zones.west.to_string()),
                ("south", zones.south.to_string()),
                ("east", zones.east.to_string()),
                ("click", click.to_string()),
            ],
            RegionBindingBundle::Diamond { a, b, x, y } => vec![
                ("A", a.to_string()),
                ("B", b.to_string()),
                ("X", x.to_string()),
                ("Y", y.to_string()),
            ],
            RegionBindingBundle::Switches {
                left_bumper,
                right_bumper,
                start,
                back,
                left_grip,
                right_grip,
            } => vec![
                ("LB", left_bumper.to_string()),
                ("RB", right_bumper.to_string()),
                ("START", start.to_string()),
                ("BACK", back.to_string()),
                ("LGRIP", left_grip.to_string()),
                ("RGRIP", right_grip.to_string()),
            ],
            RegionBindingBundle::Trigger { click } => vec![("click", click.to_string())],
        };

        for (slot, action) in slots {
            println!("  {:<8} → {}", slot.dimmed(), action.green());
        }
    }

    let fixed = table.fixed_binding();
    println!(
        "{}\n  {:<8} → {}",
        "Fixed".cyan().bold(),
        fixed.button.to_string().dimmed(),
        fixed.action.to_string().green()
    );

    println!("\n{} Total: {} regions", "✓".green(), table.len());
}

/// Dump the merged tree
fn print_tree(config_path: &Path) -> anyhow::Result<()> {
    let manager = open_config(config_path)?;
    let tree = manager.load_tree()?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

/// Dry-run the table against a recording mapper
fn print_plan(config_path: &Path, preset: Option<&str>) -> anyhow::Result<()> {
    let manager = open_config(config_path)?;
    let table = manager.compile(preset)?;

    let mut mapper = DryRunMapper::new();
    table.apply(&mut mapper);

    for (i, call) in mapper.calls().iter().enumerate() {
        println!("{} {}", format!("{:>2}.", i + 1).dimmed(), call);
    }

    Ok(())
}
