// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

pub mod fake_image_client;
pub mod image_catalog;
pub mod image_client;
pub mod image_request;
pub mod image_source;
pub mod select_images;
pub mod spot_images;

#[cfg(test)]
mod test_logger;
