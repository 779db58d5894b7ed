// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use chrono::offset::Local;
use chrono::DateTime;

use clap::Parser;
use env_logger;
use log::{error, info};

use spot_images::fake_image_client::FakeImageClient;
use spot_images::image_request::PixelFormat;
use spot_images::select_images::CameraSelector;
use spot_images::spot_images::SpotImages;

/// Utility program for exercising a selective image fetch against the
/// in-process fake image service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about=None)]
struct Args {
    /// Selectors of the form camera[:modality[,modality...]], e.g.
    /// frontleft:visual back:depth,depth_registered hand
    #[arg(required = true, value_parser = parse_selector)]
    selectors: Vec<CameraSelector>,

    #[arg(long)]
    has_arm: bool,

    #[arg(long)]
    greyscale: bool,

    /// Make the fake service reject greyscale pixel formats.
    #[arg(long)]
    reject_greyscale: bool,
}

fn parse_selector(s: &str) -> Result<CameraSelector, String> {
    s.parse::<CameraSelector>().map_err(|e| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut client = FakeImageClient::new();
    if args.reject_greyscale {
        client = client.with_unsupported_pixel_format(PixelFormat::GreyscaleU8);
    }
    let images = SpotImages::new(&args.has_arm, client, !args.greyscale);

    let Some(entries) = images.get_images_by_cameras(&args.selectors) else {
        error!("No images obtained");
        std::process::exit(1);
    };
    let datetime: DateTime<Local> = Local::now();
    info!("{} images obtained at {}", entries.len(), datetime.format("%d/%m/%Y %T"));
    for entry in entries {
        println!("{}:{} -> {:?}", entry.camera, entry.modality, entry.image_response);
    }
}
