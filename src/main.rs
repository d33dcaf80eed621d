use anagram_morph::{
    config::Config,
    morph::{MorphController, SwapPlan},
    report::{self, OutputFormat},
};
use anyhow::{Context, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Print the swaps that morph a string into one of its anagrams.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// The string to start from.
    start: Option<String>,

    /// The string to morph into.
    end: Option<String>,

    /// The path to the configuration file.
    #[arg(short, long, env = "ANAGRAM_MORPH_CONFIG")]
    config: Option<PathBuf>,

    /// The output format.
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Morph back into the start string once done.
    #[arg(long)]
    round_trip: bool,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path).with_context(|| format!("loading config from {}", path.display())),
        None => Config::load_default().context("loading default config"),
    }
}

fn drain(controller: &mut MorphController) -> anyhow::Result<SwapPlan> {
    let start = controller.displayed();
    let end = controller.target();
    let mut events = Vec::new();
    loop {
        let event = controller.advance()?;
        let terminal = event.is_terminal();
        events.push(event);
        if terminal {
            return Ok(SwapPlan { start, end, events });
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    match (cli.start, cli.end) {
        (Some(start), Some(end)) => {
            config.start = start;
            config.end = end;
        }
        (None, None) => (),
        _ => return Err(anyhow!("both a start and an end string are needed")),
    };
    let format = cli.format.unwrap_or(config.format);
    let round_trip = cli.round_trip || config.round_trip;

    let mut controller = MorphController::new(&config.start, &config.end)
        .with_context(|| format!("cannot morph '{}' into '{}'", config.start, config.end))?;
    let mut plans = vec![drain(&mut controller)?];
    if round_trip {
        controller.flip()?;
        plans.push(drain(&mut controller)?);
    }
    for plan in plans {
        let output = report::render(&plan, format).context("rendering plan")?;
        println!("{output}");
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
