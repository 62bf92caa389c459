//! Maps slider state onto the inputs a filter actually reads.

use std::collections::BTreeMap;

use tracing::debug;

use crate::filter::FilterDescriptor;
use crate::params::{ParameterKey, ParameterStore};
use crate::request::{ProcessingRequest, SourceImage};

/// Whether the control for `key` should be interactive under `descriptor`.
pub fn is_parameter_active(descriptor: &FilterDescriptor, key: ParameterKey) -> bool {
    descriptor.accepts(key)
}

/// Build a render request carrying exactly the parameters `descriptor`
/// accepts, with their current values from `store`.
pub fn build_request(
    descriptor: &FilterDescriptor,
    store: &ParameterStore,
    image: &SourceImage,
) -> ProcessingRequest {
    let parameters: BTreeMap<ParameterKey, f32> = store
        .iter()
        .filter(|&(key, _)| descriptor.accepts(key))
        .collect();
    debug!(filter = descriptor.name(), ?parameters, "built processing request");
    ProcessingRequest::new(image.clone(), descriptor.kind(), parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterKind;

    fn scenario_store() -> ParameterStore {
        let mut store = ParameterStore::new();
        store.set(ParameterKey::Intensity, 0.5);
        store.set(ParameterKey::Radius, 100.0);
        store.set(ParameterKey::Scale, 5.0);
        store.set(ParameterKey::Sharpness, 0.5);
        store
    }

    fn image() -> SourceImage {
        SourceImage::from_bytes(vec![0u8; 8])
    }

    #[test]
    fn sepia_request_has_only_intensity() {
        let req = build_request(FilterKind::SepiaTone.descriptor(), &scenario_store(), &image());
        assert_eq!(req.filter(), FilterKind::SepiaTone);
        assert_eq!(
            req.parameters().iter().collect::<Vec<_>>(),
            vec![(&ParameterKey::Intensity, &0.5)]
        );
    }

    #[test]
    fn gaussian_blur_request_has_only_radius() {
        let req = build_request(
            FilterKind::GaussianBlur.descriptor(),
            &scenario_store(),
            &image(),
        );
        assert_eq!(
            req.parameters().iter().collect::<Vec<_>>(),
            vec![(&ParameterKey::Radius, &100.0)]
        );
    }

    #[test]
    fn color_invert_request_is_empty() {
        let req = build_request(
            FilterKind::ColorInvert.descriptor(),
            &scenario_store(),
            &image(),
        );
        assert!(req.parameters().is_empty());
    }

    #[test]
    fn requests_never_carry_unaccepted_keys() {
        let stores = [
            ParameterStore::new(),
            scenario_store(),
            {
                let mut s = ParameterStore::new();
                for key in ParameterKey::ALL {
                    s.set(key, f32::MAX);
                }
                s
            },
            {
                let mut s = ParameterStore::new();
                for key in ParameterKey::ALL {
                    s.set(key, f32::MIN);
                }
                s
            },
        ];
        for kind in FilterKind::ALL {
            let descriptor = kind.descriptor();
            for store in &stores {
                let req = build_request(descriptor, store, &image());
                for key in ParameterKey::ALL {
                    let present = req.parameter(key).is_some();
                    assert_eq!(present, descriptor.accepts(key), "{kind} / {key}");
                    if present {
                        assert_eq!(req.parameter(key), Some(store.get(key)));
                    }
                }
            }
        }
    }

    #[test]
    fn active_check_is_stable() {
        for kind in FilterKind::ALL {
            for key in ParameterKey::ALL {
                let first = is_parameter_active(kind.descriptor(), key);
                for _ in 0..3 {
                    assert_eq!(is_parameter_active(kind.descriptor(), key), first);
                }
            }
        }
    }

    #[test]
    fn request_reads_store_without_changing_it() {
        let store = scenario_store();
        let before = store.clone();
        let _ = build_request(FilterKind::Vignette.descriptor(), &store, &image());
        assert_eq!(store, before);
    }
}
