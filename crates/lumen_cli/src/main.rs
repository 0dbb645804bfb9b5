// Render one of the built-in scenes or a JSON scene file to an image.
// Run with: cargo run --release -- <1|2|3|scene.json> [output.png] [WIDTHxHEIGHT]

use std::env;
use std::path::Path;

use anyhow::{bail, Context, Result};
use lumen_tracer::{render_parallel, RenderConfig, Scene};

const DEFAULT_OUTPUT: &str = "out.png";
const DEFAULT_SIZE: (u32, u32) = (512, 512);

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct Args {
    scene: SceneSource,
    output: String,
    width: u32,
    height: u32,
}

#[derive(Debug, PartialEq)]
enum SceneSource {
    Preset(u32),
    File(String),
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <scene> [output] [WIDTHxHEIGHT]\n\
         \n\
         \x20 scene   1 (room), 2 (tableau), 3 (face), or a path to a .json scene\n\
         \x20 output  image path, or a .json path to export the scene (default {DEFAULT_OUTPUT})\n\
         \x20 size    resolution such as 640x480 (default {}x{})",
        DEFAULT_SIZE.0, DEFAULT_SIZE.1
    )
}

fn parse_resolution(text: &str) -> Result<(u32, u32)> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .with_context(|| format!("resolution '{}' is not WIDTHxHEIGHT", text))?;
    let width: u32 = w.trim().parse().with_context(|| format!("bad width '{}'", w))?;
    let height: u32 = h.trim().parse().with_context(|| format!("bad height '{}'", h))?;

    if width == 0 || height == 0 {
        bail!("resolution must be non-zero, got {}x{}", width, height);
    }
    Ok((width, height))
}

fn parse_args(args: &[String]) -> Result<Args> {
    let scene = match args.first() {
        Some(arg) => match arg.parse::<u32>() {
            Ok(index) => SceneSource::Preset(index),
            Err(_) => SceneSource::File(arg.clone()),
        },
        None => bail!("missing scene argument"),
    };
    if args.len() > 3 {
        bail!("too many arguments");
    }

    let output = args.get(1).cloned().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let (width, height) = match args.get(2) {
        Some(size) => parse_resolution(size)?,
        None => DEFAULT_SIZE,
    };

    Ok(Args {
        scene,
        output,
        width,
        height,
    })
}

fn load_scene(source: &SceneSource) -> Result<Scene> {
    match source {
        SceneSource::Preset(index) => {
            Scene::preset(*index).with_context(|| format!("cannot build scene {}", index))
        }
        SceneSource::File(path) => {
            Scene::load(path).with_context(|| format!("cannot load scene file {}", path))
        }
    }
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn run(args: Args) -> Result<()> {
    let scene = load_scene(&args.scene)?;

    if is_json(&args.output) {
        std::fs::write(&args.output, scene.to_json_string()?)
            .with_context(|| format!("cannot write {}", args.output))?;
        log::info!("Exported scene '{}' to {}", scene.name, args.output);
        return Ok(());
    }

    let config = RenderConfig::default().with_resolution(args.width, args.height);
    log::info!(
        "Rendering '{}' ({} primitives) at {}x{}",
        scene.name,
        scene.len(),
        config.width,
        config.height
    );

    let image = render_parallel(&scene, &config);
    image
        .save(&args.output)
        .with_context(|| format!("cannot save {}", args.output))?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("lumen");

    let args = match parse_args(&argv[1.min(argv.len())..]) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {:#}\n\n{}", e, usage(program));
            std::process::exit(1);
        }
    };

    run(args)
}
