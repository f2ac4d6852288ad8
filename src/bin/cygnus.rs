// Cygnus CLI
// Inspect the keymap, check build configuration and replay event scripts

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;

use cygnus_core::{
    parse_script, BuildConfig, CustomKeycode, EncoderDirection, Keycode, Layer, LayerState,
    Simulator, COMBOS,
};

/// Cygnus V1 keymap tools
#[derive(Parser, Debug)]
#[command(name = "cygnus")]
#[command(version)]
#[command(about = "Cygnus V1 split keyboard keymap tools", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate the build configuration
    Check {
        /// TOML configuration file
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the layer tables of the configured keymap
    Layers {
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// Only print this layer
        #[arg(short, long, value_name = "NAME")]
        layer: Option<String>,
    },
    /// Replay an event script and print what the computer receives
    Simulate {
        /// Script file, one step per line
        script: PathBuf,

        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },
    /// List the terminal-control keys and their shortcuts
    Terminal,
}

fn load_config(path: Option<&Path>) -> Result<BuildConfig> {
    let config = match path {
        Some(path) => BuildConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BuildConfig::load_default().context("Failed to load default config")?,
    };
    config.validate()?;
    Ok(config)
}

fn check(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    match config.source_path() {
        Some(source) => println!("Configuration {} is valid", source.display()),
        None => println!("Built-in configuration is valid"),
    }
    println!("  variant:          {}", config.variant);
    println!("  master half:      {}", if config.master_left { "left" } else { "right" });
    println!("  tapping term:     {}ms", config.tapping_term_ms);
    println!("  permissive hold:  {}", config.permissive_hold);
    println!(
        "  combos:           {} within {}ms",
        config.combo_count, config.combo_term_ms
    );
    println!("  keymap layers:    {}", config.dynamic_keymap_layer_count);
    println!(
        "  mouse keys:       delay {}ms, interval {}ms, max speed {}, time to max {}",
        config.mousekey.delay,
        config.mousekey.interval,
        config.mousekey.max_speed,
        config.mousekey.time_to_max
    );
    let enabled = config.features.enabled();
    if enabled.is_empty() {
        println!("  optional features: none");
    } else {
        println!("  optional features: {}", enabled.join(", "));
    }
    Ok(())
}

fn layers(path: Option<&Path>, only: Option<&str>) -> Result<()> {
    let config = load_config(path)?;
    let keymap = config.keymap();
    let variant = keymap.variant();

    let selected: Vec<Layer> = match only {
        Some(name) => {
            let layer: Layer = name
                .parse()
                .with_context(|| format!("Unknown layer '{}'", name))?;
            if !variant.has_layer(layer) {
                bail!("Layer {} is not part of the {} keymap", layer, variant);
            }
            vec![layer]
        }
        None => variant.layers().to_vec(),
    };

    for layer in selected {
        let Some(table) = keymap.table(layer) else {
            continue;
        };
        println!("[{}]", layer);
        for row in table {
            let cells: Vec<String> = row.iter().map(|k| format!("{:<18}", k.to_string())).collect();
            println!("  {}", cells.join(" ").trim_end());
        }
        let state = LayerState::with(&[layer]);
        println!(
            "  encoder: {} / {}",
            keymap.encoder_keycode(state, EncoderDirection::CounterClockwise),
            keymap.encoder_keycode(state, EncoderDirection::Clockwise)
        );
        println!();
    }

    if only.is_none() {
        println!("[COMBOS]");
        for combo in COMBOS.iter() {
            let keys: Vec<String> = combo.keys.iter().map(|k| k.to_string()).collect();
            println!("  {:<8} {} -> {}", combo.name, keys.join(" + "), combo.output);
        }
    }
    Ok(())
}

fn simulate(script_path: &Path, path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let source = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let script = parse_script(&source)?;

    let mut simulator = Simulator::new(&config);
    for outcome in simulator.run(&script) {
        println!("{}", outcome);
    }
    Ok(())
}

fn terminal() {
    for custom in CustomKeycode::iter().filter(|c| c.is_terminal()) {
        if let cygnus_core::CustomBehavior::Chord(chord) = custom.behavior() {
            println!("{:<20} {}", Keycode::Custom(custom), chord);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match args.command {
        Command::Check { config } => check(config.as_deref()),
        Command::Layers { config, layer } => layers(config.as_deref(), layer.as_deref()),
        Command::Simulate { script, config } => simulate(&script, config.as_deref()),
        Command::Terminal => {
            terminal();
            Ok(())
        }
    }
}
