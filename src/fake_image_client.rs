// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

// Fake image service that answers every request with a synthetic image. For
// testing.

use std::collections::HashSet;
use std::sync::Mutex;

use canonical_error::unavailable_error;

use crate::image_client::{ImageClient, ImageClientError};
use crate::image_request::{ImageFormat, ImageRequest, PixelFormat};

/// Synthetic response payload. `sequence` counts responses across the life of
/// the client, so tests can tell which position a response was served at.
#[derive(Clone, Debug, PartialEq)]
pub struct FakeImage {
    pub source_name: String,
    pub image_format: Option<ImageFormat>,
    pub pixel_format: Option<PixelFormat>,
    pub sequence: u32,
}

#[derive(Default)]
struct FakeState {
    // Every batch received, including ones that failed.
    batches: Vec<Vec<ImageRequest>>,
    next_sequence: u32,
}

#[derive(Default)]
pub struct FakeImageClient {
    unsupported_pixel_formats: HashSet<PixelFormat>,
    unsupported_sources: HashSet<String>,
    unavailable: bool,
    // Number of responses to leave off the end of each reply.
    dropped_responses: usize,

    state: Mutex<FakeState>,
}

impl FakeImageClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches containing a request for `pixel_format` fail with
    /// UnsupportedPixelFormat.
    pub fn with_unsupported_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.unsupported_pixel_formats.insert(pixel_format);
        self
    }

    /// Batches containing a request for any of `source_names` fail with
    /// UnsupportedPixelFormat, whatever pixel format was asked for.
    pub fn with_unsupported_sources(mut self, source_names: &[&str]) -> Self {
        self.unsupported_sources.extend(source_names.iter().map(|s| s.to_string()));
        self
    }

    /// Every batch fails as if the service could not be reached.
    pub fn with_unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Replies omit the last `count` responses, simulating a malformed reply.
    pub fn with_dropped_responses(mut self, count: usize) -> Self {
        self.dropped_responses = count;
        self
    }

    /// Batches received so far, oldest first.
    pub fn batches(&self) -> Vec<Vec<ImageRequest>> {
        self.state.lock().unwrap().batches.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().batches.len()
    }
}

impl ImageClient for FakeImageClient {
    type Response = FakeImage;

    fn get_image(&self, requests: &[&ImageRequest])
                 -> Result<Vec<FakeImage>, ImageClientError> {
        let mut locked_state = self.state.lock().unwrap();
        locked_state.batches.push(requests.iter().map(|r| (*r).clone()).collect());
        if self.unavailable {
            return Err(ImageClientError::Rpc(unavailable_error("fake service is down")));
        }
        for request in requests {
            if self.unsupported_sources.contains(&request.source_name) {
                return Err(ImageClientError::UnsupportedPixelFormat(format!(
                    "{:?} not supported by source {}", request.pixel_format,
                    request.source_name)));
            }
            if let Some(pf) = request.pixel_format {
                if self.unsupported_pixel_formats.contains(&pf) {
                    return Err(ImageClientError::UnsupportedPixelFormat(format!(
                        "{:?} not supported by source {}", pf, request.source_name)));
                }
            }
        }
        let served = requests.len().saturating_sub(self.dropped_responses);
        let mut responses = Vec::with_capacity(served);
        for request in &requests[..served] {
            responses.push(FakeImage{source_name: request.source_name.clone(),
                                     image_format: request.image_format,
                                     pixel_format: request.pixel_format,
                                     sequence: locked_state.next_sequence});
            locked_state.next_sequence += 1;
        }
        Ok(responses)
    }
}
