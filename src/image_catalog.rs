// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::collections::HashMap;

use log::info;

use crate::image_request::{DEFAULT_QUALITY_PERCENT, ImageFormat, ImageRequest,
                           PixelFormat};
use crate::image_source::{ALL_CAMERAS, ALL_MODALITIES, BODY_CAMERAS, Camera,
                          ImageModality};

/// JPEG quality for the hand camera's visual image in the bundled requests.
pub const HAND_VISUAL_QUALITY_PERCENT: f64 = 50.0;

/// ImageCatalog holds every image request this robot can issue. It is built
/// once from the arm capability and the colour preference and is read-only
/// thereafter.
///
/// There are two views of the requests:
/// * Bundle lists, one per modality, holding one request per camera in slot
///   order (the five body cameras, then the hand camera if present). These
///   ask for raw body images.
/// * A per-camera, per-modality lookup table used for selective queries.
///   Visual entries are JPEG encoded, colour unless the colour preference is
///   off (the hand camera is always colour); depth entries are raw 16-bit.
#[derive(Debug)]
pub struct ImageCatalog {
    has_arm: bool,
    rgb_cameras: bool,

    camera_image_requests: Vec<ImageRequest>,
    depth_image_requests: Vec<ImageRequest>,
    depth_registered_image_requests: Vec<ImageRequest>,

    requests_by_camera: HashMap<(Camera, ImageModality), ImageRequest>,
}

impl ImageCatalog {
    /// `rgb_cameras` false switches the body cameras' visual lookup entries
    /// to greyscale; one info record is logged per camera so switched.
    pub fn new(has_arm: bool, rgb_cameras: bool) -> ImageCatalog {
        let mut catalog = ImageCatalog{has_arm,
                                       rgb_cameras,
                                       camera_image_requests: Vec::new(),
                                       depth_image_requests: Vec::new(),
                                       depth_registered_image_requests: Vec::new(),
                                       requests_by_camera: HashMap::new()};
        for camera in catalog.cameras() {
            catalog.camera_image_requests.push(
                bundle_request(camera, ImageModality::Visual));
            catalog.depth_image_requests.push(
                bundle_request(camera, ImageModality::Depth));
            catalog.depth_registered_image_requests.push(
                bundle_request(camera, ImageModality::DepthRegistered));
        }
        for camera in catalog.cameras() {
            for modality in ALL_MODALITIES {
                let request = lookup_request(camera, modality, rgb_cameras);
                catalog.requests_by_camera.insert((camera, modality), request);
            }
        }
        catalog
    }

    pub fn has_arm(&self) -> bool {
        self.has_arm
    }

    pub fn rgb_cameras(&self) -> bool {
        self.rgb_cameras
    }

    /// Cameras present on this robot, in bundle slot order.
    pub fn cameras(&self) -> Vec<Camera> {
        if self.has_arm {
            ALL_CAMERAS.to_vec()
        } else {
            BODY_CAMERAS.to_vec()
        }
    }

    /// The bundle list for `modality`: one request per camera, slot order.
    pub fn bundle_requests(&self, modality: ImageModality) -> &[ImageRequest] {
        match modality {
            ImageModality::Visual => &self.camera_image_requests,
            ImageModality::Depth => &self.depth_image_requests,
            ImageModality::DepthRegistered => &self.depth_registered_image_requests,
        }
    }

    /// Returns None if `camera` is not present on this robot.
    pub fn lookup(&self, camera: Camera, modality: ImageModality)
                  -> Option<&ImageRequest> {
        self.requests_by_camera.get(&(camera, modality))
    }
}

fn bundle_request(camera: Camera, modality: ImageModality) -> ImageRequest {
    let request = ImageRequest::new(camera.source_name(modality));
    if camera.is_body() {
        return request.with_image_format(ImageFormat::Raw);
    }
    match modality {
        ImageModality::Visual => request
            .with_image_format(ImageFormat::Jpeg)
            .with_pixel_format(PixelFormat::RgbU8)
            .with_quality_percent(HAND_VISUAL_QUALITY_PERCENT),
        ImageModality::Depth | ImageModality::DepthRegistered =>
            request.with_pixel_format(PixelFormat::DepthU16),
    }
}

fn lookup_request(camera: Camera, modality: ImageModality, rgb_cameras: bool)
                  -> ImageRequest {
    let (image_format, pixel_format) = if modality.is_depth() {
        (ImageFormat::Raw, PixelFormat::DepthU16)
    } else if camera == Camera::Hand || rgb_cameras {
        (ImageFormat::Jpeg, PixelFormat::RgbU8)
    } else {
        info!("Switching {}:{} to greyscale image format.", camera, modality);
        (ImageFormat::Jpeg, PixelFormat::GreyscaleU8)
    };
    ImageRequest::new(camera.source_name(modality))
        .with_image_format(image_format)
        .with_pixel_format(pixel_format)
        .with_quality_percent(DEFAULT_QUALITY_PERCENT)
}
