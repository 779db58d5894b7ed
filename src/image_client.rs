// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use canonical_error::CanonicalError;
use thiserror::Error;

use crate::image_request::ImageRequest;

#[derive(Error, Debug)]
pub enum ImageClientError {
    /// The service cannot produce the requested pixel format for at least
    /// one request in the batch.
    #[error("unsupported pixel format requested: {0}")]
    UnsupportedPixelFormat(String),
    #[error("image rpc failed: {0}")]
    Rpc(CanonicalError),
}

/// ImageClient models the remote image service. One call is one blocking
/// request/response round trip; the wire protocol, timeouts and connection
/// handling belong to the implementation.
pub trait ImageClient {
    /// Opaque per-image payload returned by the service. This crate never
    /// looks inside it.
    type Response;

    /// Fetches one image per request. On success the returned vector is
    /// expected to line up positionally with `requests`.
    fn get_image(&self, requests: &[&ImageRequest])
                 -> Result<Vec<Self::Response>, ImageClientError>;
}

/// Capability queries about the connected robot.
pub trait RobotCapabilities {
    /// Returns true if the robot has a manipulator arm, and thus a hand
    /// camera.
    fn has_arm(&self) -> bool;
}

impl RobotCapabilities for bool {
    fn has_arm(&self) -> bool {
        *self
    }
}
