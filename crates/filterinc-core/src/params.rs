use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// One of the four numeric controls a filter may read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKey {
    Intensity,
    Radius,
    Scale,
    Sharpness,
}

impl ParameterKey {
    pub const ALL: [ParameterKey; 4] = [
        ParameterKey::Intensity,
        ParameterKey::Radius,
        ParameterKey::Scale,
        ParameterKey::Sharpness,
    ];

    /// Inclusive range a stored value is clamped into.
    pub fn bounds(self) -> RangeInclusive<f32> {
        match self {
            ParameterKey::Intensity | ParameterKey::Sharpness => 0.0..=1.0,
            ParameterKey::Radius => 1.0..=200.0,
            ParameterKey::Scale => 1.0..=10.0,
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            ParameterKey::Intensity => 0.5,
            ParameterKey::Radius => 100.0,
            ParameterKey::Scale => 5.0,
            ParameterKey::Sharpness => 0.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParameterKey::Intensity => "Intensity",
            ParameterKey::Radius => "Radius",
            ParameterKey::Scale => "Scale",
            ParameterKey::Sharpness => "Sharpness",
        }
    }

    fn index(self) -> usize {
        match self {
            ParameterKey::Intensity => 0,
            ParameterKey::Radius => 1,
            ParameterKey::Scale => 2,
            ParameterKey::Sharpness => 3,
        }
    }

    fn clamp(self, value: f32) -> f32 {
        let range = self.bounds();
        value.clamp(*range.start(), *range.end())
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current slider values, independent of which filter is active.
///
/// Every stored value lies within [`ParameterKey::bounds`]; `set` clamps
/// instead of rejecting.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterStore {
    values: [f32; 4],
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            values: ParameterKey::ALL.map(ParameterKey::default_value),
        }
    }

    pub fn get(&self, key: ParameterKey) -> f32 {
        self.values[key.index()]
    }

    /// Store `value` clamped to the key's bounds and return what was stored.
    /// NaN leaves the current value in place.
    pub fn set(&mut self, key: ParameterKey, value: f32) -> f32 {
        if !value.is_nan() {
            self.values[key.index()] = key.clamp(value);
        }
        self.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, f32)> + '_ {
        ParameterKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    pub fn snapshot(&self) -> ParameterValues {
        ParameterValues {
            intensity: self.get(ParameterKey::Intensity),
            radius: self.get(ParameterKey::Radius),
            scale: self.get(ParameterKey::Scale),
            sharpness: self.get(ParameterKey::Sharpness),
        }
    }

    /// Rebuild a store from a snapshot, clamping each value on the way in.
    pub fn from_snapshot(values: &ParameterValues) -> Self {
        let mut store = Self::new();
        store.set(ParameterKey::Intensity, values.intensity);
        store.set(ParameterKey::Radius, values.radius);
        store.set(ParameterKey::Scale, values.scale);
        store.set(ParameterKey::Sharpness, values.sharpness);
        store
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable copy of the slider state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterValues {
    pub intensity: f32,
    pub radius: f32,
    pub scale: f32,
    pub sharpness: f32,
}

impl Default for ParameterValues {
    fn default() -> Self {
        ParameterStore::new().snapshot()
    }
}
