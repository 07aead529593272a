use std::{env, path::PathBuf, process::ExitCode};

#[cfg(not(feature = "tracing"))]
use log::{info, LevelFilter};

use image::ImageReader;
use telepen::detect::decode_telepen_with;
use telepen::DecoderParams;

#[cfg(feature = "tracing")]
use telepen::logger::init_tracing;
#[cfg(not(feature = "tracing"))]
use telepen::logger::init_with_level;

fn main() -> ExitCode {
    #[cfg(not(feature = "tracing"))]
    {
        let level = env::var("TELEPEN_LOG")
            .ok()
            .and_then(|v| v.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        if init_with_level(level).is_err() {
            eprintln!("logger already installed");
        }
        info!("Logger initialized");
    }

    #[cfg(feature = "tracing")]
    init_tracing();

    let Some(path) = parse_image_path() else {
        eprintln!("usage: telepen_decode <image>");
        return ExitCode::FAILURE;
    };

    let img = match load_rgba(&path) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("failed to load {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    match decode_telepen_with(&img, &DecoderParams::default()) {
        Some(decoded) => {
            let json = serde_json::to_string(&decoded).expect("result serializes");
            println!("{json}");
            ExitCode::SUCCESS
        }
        None => {
            println!("no barcode found");
            ExitCode::FAILURE
        }
    }
}

fn parse_image_path() -> Option<PathBuf> {
    env::args().nth(1).map(PathBuf::from)
}

fn load_rgba(path: &std::path::Path) -> Result<image::RgbaImage, Box<dyn std::error::Error>> {
    Ok(ImageReader::open(path)?.decode()?.to_rgba8())
}
