use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use marlowe::world::{self, World};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn print_world(world: &World) {
    if !world.name.trim().is_empty() {
        println!("{}", world.name.trim());
    }
    if !world.desc.trim().is_empty() {
        println!("{}", world.desc.trim());
    }
    println!();

    for pos in world.positions() {
        let Some(room) = world.room_at(pos) else {
            continue;
        };
        let exits = room
            .exits()
            .iter()
            .map(|d| d.name)
            .collect::<Vec<&str>>()
            .join(", ");
        println!("{} {}", pos, room.title());
        println!("    Exits: {}", if exits.is_empty() { "(none)" } else { exits.as_str() });
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "marlowe=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let world_path: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("public/marlowe.toml"));

    let file = match world::load_world_from_file(&world_path) {
        Ok(f) => f,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let problems = world::validate_descriptors(&file.rooms);
    if !problems.is_empty() {
        for p in &problems {
            error!(path = %world_path.display(), "{p}");
        }
        return ExitCode::FAILURE;
    }

    let (world, summary) = file.into_world();
    info!(
        rooms = world.len(),
        replaced = summary.replaced,
        "world indexed"
    );

    print_world(&world);
    ExitCode::SUCCESS
}
