use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use treasure_path::engine::{Output, OutputBlock};
use treasure_path::world::{self, World};
use treasure_path::{Session, SessionState};

#[derive(Parser)]
#[command(name = "treasure_path")]
#[command(about = "Walk a castle of rooms, or let breadth-first search find the treasure")]
#[command(version)]
struct Cli {
    /// World file (TOML). Defaults to the built-in castle.
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!();
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
            OutputBlock::Exits(exits) => {
                println!("{}", exits);
                printed_anything = true;
            }
        }
    }
}

fn load_world(path: Option<&PathBuf>) -> Result<World> {
    let world = match path {
        Some(p) => world::load_world_from_file(p)
            .with_context(|| format!("failed to load world file '{}'", p.display()))?,
        None => world::reference_world().context("failed to build the built-in castle")?,
    };

    for problem in world::validate_world(&world) {
        warn!("world '{}': {}", world.name, problem);
    }
    Ok(world)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let world = load_world(cli.world.as_ref())?;

    println!("Welcome to {}!", world.name);
    if !world.desc.trim().is_empty() {
        println!("{}", world.desc.trim());
    }
    println!("{}", Session::help_text());

    let mut session = Session::from_world(world)?;
    flush_output(session.initialize());

    let stdin = io::stdin();

    while !session.state().is_over() {
        print!("\n> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            println!("\nGoodbye.");
            break;
        }

        flush_output(session.step(input.trim()));
    }

    info!(
        "finished in '{}' ({})",
        session.current_room(),
        match session.state() {
            SessionState::Won => "won",
            SessionState::Exited => "exited",
            SessionState::Playing => "input closed",
        }
    );
    Ok(())
}
