// Copyright (c) 2023 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::collections::HashSet;
use std::str::FromStr;

use canonical_error::{CanonicalError, invalid_argument_error, not_found_error};

use crate::image_catalog::ImageCatalog;
use crate::image_request::ImageRequest;
use crate::image_source::{ALL_MODALITIES, Camera, ImageModality};

/// Names a camera and, optionally, which of its modalities to fetch. `None`
/// means all modalities, in table order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraSelector {
    pub camera: Camera,
    pub modalities: Option<Vec<ImageModality>>,
}

impl CameraSelector {
    pub fn all(camera: Camera) -> CameraSelector {
        CameraSelector{camera, modalities: None}
    }

    pub fn only(camera: Camera, modalities: &[ImageModality]) -> CameraSelector {
        CameraSelector{camera, modalities: Some(modalities.to_vec())}
    }

    fn expand(&self) -> Vec<ImageModality> {
        match &self.modalities {
            Some(m) => m.clone(),
            None => ALL_MODALITIES.to_vec(),
        }
    }
}

/// Parses `camera` or `camera:modality[,modality...]`, e.g.
/// `frontleft:visual,depth_registered`.
impl FromStr for CameraSelector {
    type Err = CanonicalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (camera, modalities) = match s.split_once(':') {
            None => (s, None),
            Some((c, m)) => (c, Some(m)),
        };
        let camera = camera.trim().parse::<Camera>()?;
        let modalities = match modalities {
            None => None,
            Some(m) => {
                let mut parsed = Vec::new();
                for name in m.split(',') {
                    parsed.push(name.trim().parse::<ImageModality>()?);
                }
                Some(parsed)
            }
        };
        Ok(CameraSelector{camera, modalities})
    }
}

/// One resolved entry of a selective fetch: which camera and modality, and
/// the catalog request that fetches it.
#[derive(Debug)]
pub struct ResolvedRequest<'a> {
    pub camera: Camera,
    pub modality: ImageModality,
    pub request: &'a ImageRequest,
}

/// Expands `selectors` into catalog requests, in the order given.
/// Returns InvalidArgument if a camera appears in more than one selector, and
/// NotFound if a (camera, modality) pair is not in `catalog` (e.g. the hand
/// camera on a robot without an arm). Nothing is partially resolved.
pub fn resolve_selectors<'a>(catalog: &'a ImageCatalog, selectors: &[CameraSelector])
                             -> Result<Vec<ResolvedRequest<'a>>, CanonicalError> {
    let mut resolved = Vec::new();
    let mut cameras_specified = HashSet::new();
    for selector in selectors {
        if !cameras_specified.insert(selector.camera) {
            return Err(invalid_argument_error(
                format!("Duplicated camera source for camera {}",
                        selector.camera).as_str()));
        }
        for modality in selector.expand() {
            match catalog.lookup(selector.camera, modality) {
                Some(request) => resolved.push(ResolvedRequest{
                    camera: selector.camera, modality, request}),
                None => return Err(not_found_error(
                    format!("Unexpected camera name '{}' or image type '{}'",
                            selector.camera, modality).as_str())),
            }
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_source::ImageModality::*;

    #[test]
    fn test_parse_selector() {
        assert_eq!("back".parse::<CameraSelector>().unwrap(),
                   CameraSelector::all(Camera::Back));
        assert_eq!("frontleft:visual, depth_registered".parse::<CameraSelector>().unwrap(),
                   CameraSelector::only(Camera::FrontLeft, &[Visual, DepthRegistered]));
        assert!("front:visual".parse::<CameraSelector>().is_err());
        assert!("left:infrared".parse::<CameraSelector>().is_err());
        assert!("left:".parse::<CameraSelector>().is_err());
    }

    #[test]
    fn test_resolve_order() {
        let catalog = ImageCatalog::new(false, true);
        let selectors = [CameraSelector::only(Camera::Right, &[Visual]),
                         CameraSelector::only(Camera::Left, &[Depth, DepthRegistered])];
        let resolved = resolve_selectors(&catalog, &selectors).unwrap();
        let got: Vec<(Camera, ImageModality, &str)> = resolved.iter()
            .map(|r| (r.camera, r.modality, r.request.source_name.as_str()))
            .collect();
        assert_eq!(got, vec![
            (Camera::Right, Visual, "right_fisheye_image"),
            (Camera::Left, Depth, "left_depth"),
            (Camera::Left, DepthRegistered, "left_depth_in_visual_frame"),
        ]);
    }

    #[test]
    fn test_resolve_default_modalities() {
        let catalog = ImageCatalog::new(true, true);
        let resolved = resolve_selectors(
            &catalog, &[CameraSelector::all(Camera::Hand),
                        CameraSelector::only(Camera::Back, &[Depth])]).unwrap();
        let got: Vec<(Camera, ImageModality)> =
            resolved.iter().map(|r| (r.camera, r.modality)).collect();
        assert_eq!(got, vec![(Camera::Hand, Visual), (Camera::Hand, Depth),
                             (Camera::Hand, DepthRegistered), (Camera::Back, Depth)]);
        // Requests are borrowed from the catalog, not rebuilt.
        assert!(std::ptr::eq(resolved[3].request,
                             catalog.lookup(Camera::Back, Depth).unwrap()));
    }

    #[test]
    fn test_resolve_rejects_duplicates() {
        let catalog = ImageCatalog::new(false, true);
        let selectors = [CameraSelector::only(Camera::Left, &[Visual]),
                         CameraSelector::only(Camera::Left, &[Depth])];
        let err = resolve_selectors(&catalog, &selectors).unwrap_err();
        assert!(err.to_string().contains("Duplicated camera source for camera left"));
    }

    #[test]
    fn test_resolve_rejects_missing_hand() {
        let catalog = ImageCatalog::new(false, true);
        assert!(resolve_selectors(&catalog, &[CameraSelector::all(Camera::Back),
                                              CameraSelector::only(Camera::Hand, &[Visual])])
                .is_err());
    }

    #[test]
    fn test_resolve_empty() {
        let catalog = ImageCatalog::new(false, true);
        assert!(resolve_selectors(&catalog, &[]).unwrap().is_empty());
    }
}
