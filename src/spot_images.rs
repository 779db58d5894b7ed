// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use log::error;

use crate::image_catalog::{HAND_VISUAL_QUALITY_PERCENT, ImageCatalog};
use crate::image_client::{ImageClient, ImageClientError, RobotCapabilities};
use crate::image_request::{ImageFormat, ImageRequest, PixelFormat};
use crate::image_source::{Camera, ImageModality};
use crate::select_images::{CameraSelector, resolve_selectors};

/// One image per camera, from a bundled fetch. `hand` is present exactly when
/// the robot has an arm.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBundle<R> {
    pub frontleft: R,
    pub frontright: R,
    pub left: R,
    pub right: R,
    pub back: R,
    pub hand: Option<R>,
}

impl<R> ImageBundle<R> {
    // Slot order is the catalog's bundle order.
    fn from_responses(responses: Vec<R>, has_arm: bool) -> Option<Self> {
        let mut it = responses.into_iter();
        let bundle = ImageBundle {
            frontleft: it.next()?,
            frontright: it.next()?,
            left: it.next()?,
            right: it.next()?,
            back: it.next()?,
            hand: if has_arm { Some(it.next()?) } else { None },
        };
        Some(bundle)
    }

    pub fn get(&self, camera: Camera) -> Option<&R> {
        match camera {
            Camera::FrontLeft => Some(&self.frontleft),
            Camera::FrontRight => Some(&self.frontright),
            Camera::Left => Some(&self.left),
            Camera::Right => Some(&self.right),
            Camera::Back => Some(&self.back),
            Camera::Hand => self.hand.as_ref(),
        }
    }
}

/// One image from a selective fetch, tagged with where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageEntry<R> {
    pub camera: Camera,
    pub modality: ImageModality,
    pub image_response: R,
}

/// SpotImages issues image requests for the robot's cameras through a remote
/// `ImageClient` and reshapes the replies.
///
/// Every accessor makes at most one remote call and returns either a full
/// result or None; failures are logged, never returned, and never retried.
pub struct SpotImages<C: ImageClient> {
    image_client: C,
    catalog: ImageCatalog,
}

impl<C: ImageClient> SpotImages<C> {
    /// Queries `robot` for an arm once; the answer is fixed for the life of
    /// this object. `rgb_cameras` false makes selective fetches of body
    /// camera visual images greyscale.
    pub fn new(robot: &dyn RobotCapabilities, image_client: C, rgb_cameras: bool)
               -> Self {
        SpotImages{image_client,
                   catalog: ImageCatalog::new(robot.has_arm(), rgb_cameras)}
    }

    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    pub fn image_client(&self) -> &C {
        &self.image_client
    }

    pub fn has_arm(&self) -> bool {
        self.catalog.has_arm()
    }

    // Single image accessors. These build their request on the spot rather
    // than using the catalog.

    pub fn get_frontleft_rgb_image(&self) -> Option<C::Response> {
        self.get_body_rgb_image(Camera::FrontLeft)
    }

    pub fn get_frontright_rgb_image(&self) -> Option<C::Response> {
        self.get_body_rgb_image(Camera::FrontRight)
    }

    pub fn get_left_rgb_image(&self) -> Option<C::Response> {
        self.get_body_rgb_image(Camera::Left)
    }

    pub fn get_right_rgb_image(&self) -> Option<C::Response> {
        self.get_body_rgb_image(Camera::Right)
    }

    pub fn get_back_rgb_image(&self) -> Option<C::Response> {
        self.get_body_rgb_image(Camera::Back)
    }

    /// Returns None without contacting the robot if it has no arm.
    pub fn get_hand_rgb_image(&self) -> Option<C::Response> {
        if !self.has_arm() {
            return None;
        }
        let request = ImageRequest::new(Camera::Hand.source_name(ImageModality::Visual))
            .with_pixel_format(PixelFormat::RgbU8)
            .with_quality_percent(HAND_VISUAL_QUALITY_PERCENT);
        self.get_single_image(&request)
    }

    fn get_body_rgb_image(&self, camera: Camera) -> Option<C::Response> {
        let request = ImageRequest::new(camera.source_name(ImageModality::Visual))
            .with_image_format(ImageFormat::Raw);
        self.get_single_image(&request)
    }

    fn get_single_image(&self, request: &ImageRequest) -> Option<C::Response> {
        self.dispatch(&[request])?.into_iter().next()
    }

    // Bundled fetches.

    /// Raw visual image from every camera.
    pub fn get_camera_images(&self) -> Option<ImageBundle<C::Response>> {
        self.get_images(ImageModality::Visual)
    }

    pub fn get_depth_images(&self) -> Option<ImageBundle<C::Response>> {
        self.get_images(ImageModality::Depth)
    }

    pub fn get_depth_registered_images(&self) -> Option<ImageBundle<C::Response>> {
        self.get_images(ImageModality::DepthRegistered)
    }

    /// Sends the catalog's bundle list for `modality` as one batch.
    pub fn get_images(&self, modality: ImageModality)
                      -> Option<ImageBundle<C::Response>> {
        let requests: Vec<&ImageRequest> =
            self.catalog.bundle_requests(modality).iter().collect();
        let responses = self.dispatch(&requests)?;
        ImageBundle::from_responses(responses, self.has_arm())
    }

    /// Fetches the (camera, modality) pairs named by `camera_sources` in one
    /// batch. The result lines up with the selectors, each expanded modality
    /// by modality. Returns None, without contacting the robot, if a camera
    /// is named twice or a pair is not available on this robot.
    pub fn get_images_by_cameras(&self, camera_sources: &[CameraSelector])
                                 -> Option<Vec<ImageEntry<C::Response>>> {
        let resolved = match resolve_selectors(&self.catalog, camera_sources) {
            Ok(r) => r,
            Err(e) => {
                error!("{}", e);
                return None;
            }
        };
        let requests: Vec<&ImageRequest> = resolved.iter().map(|r| r.request).collect();
        let responses = self.dispatch(&requests)?;
        Some(resolved.iter().zip(responses)
             .map(|(r, image_response)| ImageEntry{camera: r.camera,
                                                   modality: r.modality,
                                                   image_response})
             .collect())
    }

    // Sends one batch. Returns None (after logging) if the call fails or the
    // reply does not have one response per request.
    fn dispatch(&self, requests: &[&ImageRequest]) -> Option<Vec<C::Response>> {
        match self.image_client.get_image(requests) {
            Ok(responses) => {
                if responses.len() != requests.len() {
                    error!("Expected {} image responses, got {}",
                           requests.len(), responses.len());
                    return None;
                }
                Some(responses)
            },
            Err(e @ ImageClientError::UnsupportedPixelFormat(_)) => {
                error!("{}. Likely pixel_format is set wrong for some image request", e);
                None
            },
            Err(e) => {
                error!("{}", e);
                None
            },
        }
    }
}
