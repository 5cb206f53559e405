use std::path::PathBuf;

use clap::Parser;

use lookout::{Scene, config, load_heightmap};

mod app;

#[derive(Parser, Debug)]
#[command(name = "lookout", about = "Voxel heightmap viewer with a mouse-look camera")]
struct Args {
    /// Viewer config (TOML). Defaults are used when the file is absent.
    #[arg(long, default_value = "lookout.toml")]
    config: PathBuf,

    /// Heightmap table (`x height z` per line); overrides [terrain] in the config.
    #[arg(long)]
    heightmap: Option<PathBuf>,

    /// Seed for the generated heightmap.
    #[arg(long)]
    seed: Option<i32>,

    /// Log filter, e.g. `info` or `lookout=debug`. `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Build the mesh, log statistics and exit without opening a window.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let mut cfg = config::load_or_default(&args.config)?;
    if let Some(seed) = args.seed {
        cfg.terrain.noise.seed = seed;
    }
    let map = load_heightmap(&cfg.terrain, args.heightmap.as_deref())?;
    let scene = Scene::build(&cfg, &map);
    drop(map);

    if args.stats {
        let stats = scene.mesh.stats();
        println!("{}", stats);
        if let Some(bb) = stats.bounds {
            println!(
                "bounds min ({:.0}, {:.0}, {:.0}) max ({:.0}, {:.0}, {:.0})",
                bb.min.x, bb.min.y, bb.min.z, bb.max.x, bb.max.y, bb.max.z
            );
        }
        return Ok(());
    }

    let (mut rl, thread) = raylib::init()
        .size(cfg.window.width, cfg.window.height)
        .title(&cfg.window.title)
        .resizable()
        .msaa_4x()
        .build();
    rl.set_target_fps(cfg.window.target_fps);

    let mut app = app::App::new(&mut rl, &thread, &cfg, scene)?;
    app.run(&mut rl, &thread);
    Ok(())
}
