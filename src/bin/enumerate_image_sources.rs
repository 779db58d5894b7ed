// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use clap::Parser;
use env_logger;

use spot_images::image_catalog::ImageCatalog;
use spot_images::image_source::ALL_MODALITIES;

/// Lists the image requests the catalog would issue for a robot.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about=None)]
struct Args {
    /// Include the hand camera, as on a robot with an arm.
    #[arg(long)]
    has_arm: bool,

    /// Request greyscale visual images from the body cameras.
    #[arg(long)]
    greyscale: bool,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let catalog = ImageCatalog::new(args.has_arm, !args.greyscale);

    for modality in ALL_MODALITIES {
        let requests = catalog.bundle_requests(modality);
        println!("{} bundle, {} requests: ", modality, requests.len());
        for (i, request) in requests.iter().enumerate() {
            println!("{}: {}", i, request);
        }
    }

    println!("Requests by camera ({}): ",
             if catalog.rgb_cameras() { "colour" } else { "greyscale" });
    for camera in catalog.cameras() {
        for modality in ALL_MODALITIES {
            if let Some(request) = catalog.lookup(camera, modality) {
                println!("{}:{}: {}", camera, modality, request);
            }
        }
    }
}
