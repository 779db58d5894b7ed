// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::fmt;

/// Encoding the remote service should use for the returned image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Raw,
    Rle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    GreyscaleU8,
    RgbU8,
    RgbaU8,
    DepthU16,
    GreyscaleU16,
}

pub const DEFAULT_QUALITY_PERCENT: f64 = 75.0;

/// Describes one image to fetch from the remote image service. `None` for
/// `image_format` or `pixel_format` leaves the choice to the service.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRequest {
    pub source_name: String,
    pub image_format: Option<ImageFormat>,
    pub pixel_format: Option<PixelFormat>,

    /// Only meaningful for lossy encodings (JPEG).
    pub quality_percent: f64,
}

impl ImageRequest {
    /// A request for `source_name` with every parameter at the service
    /// default.
    pub fn new(source_name: &str) -> ImageRequest {
        ImageRequest{source_name: source_name.to_owned(),
                     image_format: None,
                     pixel_format: None,
                     quality_percent: DEFAULT_QUALITY_PERCENT}
    }

    pub fn with_image_format(mut self, image_format: ImageFormat) -> Self {
        self.image_format = Some(image_format);
        self
    }

    pub fn with_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = Some(pixel_format);
        self
    }

    pub fn with_quality_percent(mut self, quality_percent: f64) -> Self {
        self.quality_percent = quality_percent;
        self
    }
}

impl fmt::Display for ImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} format={:?} pixel_format={:?} quality={}",
               self.source_name, self.image_format, self.pixel_format,
               self.quality_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = ImageRequest::new("back_depth");
        assert_eq!(req.source_name, "back_depth");
        assert_eq!(req.image_format, None);
        assert_eq!(req.pixel_format, None);
        assert_eq!(req.quality_percent, DEFAULT_QUALITY_PERCENT);
    }

    #[test]
    fn test_builder() {
        let req = ImageRequest::new("hand_color_image")
            .with_image_format(ImageFormat::Jpeg)
            .with_pixel_format(PixelFormat::RgbU8)
            .with_quality_percent(50.0);
        assert_eq!(req.image_format, Some(ImageFormat::Jpeg));
        assert_eq!(req.pixel_format, Some(PixelFormat::RgbU8));
        assert_eq!(req.quality_percent, 50.0);
        assert_eq!(req.to_string(),
                   "hand_color_image format=Some(Jpeg) pixel_format=Some(RgbU8) quality=50");
    }
}
