use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::ParameterKey;
use crate::params::ParameterKey::{Intensity, Radius, Scale, Sharpness};

/// The preset filters offered in the picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Bloom,
    ColorInvert,
    Crystallize,
    Gloom,
    GaussianBlur,
    Pixellate,
    #[default]
    SepiaTone,
    SharpenLuminance,
    Vignette,
}

impl FilterKind {
    /// Picker order.
    pub const ALL: [FilterKind; 9] = [
        FilterKind::Bloom,
        FilterKind::ColorInvert,
        FilterKind::Crystallize,
        FilterKind::Gloom,
        FilterKind::GaussianBlur,
        FilterKind::Pixellate,
        FilterKind::SepiaTone,
        FilterKind::SharpenLuminance,
        FilterKind::Vignette,
    ];

    pub fn descriptor(self) -> &'static FilterDescriptor {
        &FILTERS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name()
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named filter and the parameter keys it reads.
#[derive(Debug, PartialEq, Eq)]
pub struct FilterDescriptor {
    kind: FilterKind,
    name: &'static str,
    accepted: &'static [ParameterKey],
}

impl FilterDescriptor {
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn accepts(&self, key: ParameterKey) -> bool {
        self.accepted.contains(&key)
    }

    pub fn accepted_keys(&self) -> &'static [ParameterKey] {
        self.accepted
    }
}

// Indexed by `FilterKind as usize`; keep in declaration order.
static FILTERS: [FilterDescriptor; 9] = [
    FilterDescriptor {
        kind: FilterKind::Bloom,
        name: "Bloom",
        accepted: &[Intensity, Radius],
    },
    FilterDescriptor {
        kind: FilterKind::ColorInvert,
        name: "Color Invert",
        accepted: &[],
    },
    FilterDescriptor {
        kind: FilterKind::Crystallize,
        name: "Crystallize",
        accepted: &[Radius],
    },
    FilterDescriptor {
        kind: FilterKind::Gloom,
        name: "Gloom",
        accepted: &[Intensity, Radius],
    },
    FilterDescriptor {
        kind: FilterKind::GaussianBlur,
        name: "Gaussian Blur",
        accepted: &[Radius],
    },
    FilterDescriptor {
        kind: FilterKind::Pixellate,
        name: "Pixellate",
        accepted: &[Scale],
    },
    FilterDescriptor {
        kind: FilterKind::SepiaTone,
        name: "Sepia Tone",
        accepted: &[Intensity],
    },
    FilterDescriptor {
        kind: FilterKind::SharpenLuminance,
        name: "Sharpen Luminance",
        accepted: &[Sharpness, Radius],
    },
    FilterDescriptor {
        kind: FilterKind::Vignette,
        name: "Vignette",
        accepted: &[Intensity, Radius],
    },
];
