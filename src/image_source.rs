// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::fmt;
use std::str::FromStr;

use canonical_error::{CanonicalError, invalid_argument_error};

/// Mounting positions of the cameras on the robot. The five body cameras are
/// always present; `Hand` exists only on robots with a manipulator arm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Camera {
    FrontLeft,
    FrontRight,
    Left,
    Right,
    Back,
    Hand,
}

/// Body cameras, in bundle slot order.
pub const BODY_CAMERAS: [Camera; 5] = [
    Camera::FrontLeft, Camera::FrontRight, Camera::Left, Camera::Right, Camera::Back,
];

/// Every camera, body cameras first.
pub const ALL_CAMERAS: [Camera; 6] = [
    Camera::FrontLeft, Camera::FrontRight, Camera::Left, Camera::Right, Camera::Back,
    Camera::Hand,
];

impl Camera {
    pub fn name(&self) -> &'static str {
        match self {
            Camera::FrontLeft => "frontleft",
            Camera::FrontRight => "frontright",
            Camera::Left => "left",
            Camera::Right => "right",
            Camera::Back => "back",
            Camera::Hand => "hand",
        }
    }

    pub fn is_body(&self) -> bool {
        *self != Camera::Hand
    }

    /// Name of the image source the remote service publishes for this
    /// camera's `modality`.
    pub fn source_name(&self, modality: ImageModality) -> &'static str {
        use ImageModality::*;
        match (self, modality) {
            (Camera::FrontLeft, Visual) => "frontleft_fisheye_image",
            (Camera::FrontLeft, Depth) => "frontleft_depth",
            (Camera::FrontLeft, DepthRegistered) => "frontleft_depth_in_visual_frame",
            (Camera::FrontRight, Visual) => "frontright_fisheye_image",
            (Camera::FrontRight, Depth) => "frontright_depth",
            (Camera::FrontRight, DepthRegistered) => "frontright_depth_in_visual_frame",
            (Camera::Left, Visual) => "left_fisheye_image",
            (Camera::Left, Depth) => "left_depth",
            (Camera::Left, DepthRegistered) => "left_depth_in_visual_frame",
            (Camera::Right, Visual) => "right_fisheye_image",
            (Camera::Right, Depth) => "right_depth",
            (Camera::Right, DepthRegistered) => "right_depth_in_visual_frame",
            (Camera::Back, Visual) => "back_fisheye_image",
            (Camera::Back, Depth) => "back_depth",
            (Camera::Back, DepthRegistered) => "back_depth_in_visual_frame",
            (Camera::Hand, Visual) => "hand_color_image",
            (Camera::Hand, Depth) => "hand_depth",
            (Camera::Hand, DepthRegistered) => "hand_depth_in_hand_color_frame",
        }
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Camera {
    type Err = CanonicalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CAMERAS.iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| invalid_argument_error(
                format!("Unexpected camera name '{}'", s).as_str()))
    }
}

/// The kinds of image each camera can produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageModality {
    Visual,
    Depth,
    /// Depth image reprojected into the visual camera's frame.
    DepthRegistered,
}

/// Table order; also the expansion order for a selector that does not name
/// its modalities.
pub const ALL_MODALITIES: [ImageModality; 3] = [
    ImageModality::Visual, ImageModality::Depth, ImageModality::DepthRegistered,
];

impl ImageModality {
    pub fn name(&self) -> &'static str {
        match self {
            ImageModality::Visual => "visual",
            ImageModality::Depth => "depth",
            ImageModality::DepthRegistered => "depth_registered",
        }
    }

    pub fn is_depth(&self) -> bool {
        *self != ImageModality::Visual
    }
}

impl fmt::Display for ImageModality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageModality {
    type Err = CanonicalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_MODALITIES.iter()
            .find(|m| m.name() == s)
            .copied()
            .ok_or_else(|| invalid_argument_error(
                format!("Unexpected image type '{}'", s).as_str()))
    }
}
