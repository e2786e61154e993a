use square_icons::config::icons;
use square_icons::fit::fit;
use square_icons::image::io::{load_rgba_image, save_rgba_png};
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("make_icons");
    let config = icons::parse_args(program, &args[1..])?;

    let source = load_rgba_image(&config.input)?;
    std::fs::create_dir_all(&config.outdir)
        .map_err(|e| format!("Failed to create {}: {e}", config.outdir.display()))?;

    let base = config
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("icon");

    for &size in &config.sizes {
        let square = fit(&source, size, config.mode).map_err(|e| e.to_string())?;
        let out = config.outdir.join(format!("{base}{size}.png"));
        save_rgba_png(&square, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}
