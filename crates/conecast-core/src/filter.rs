//! Pass-through broad-phase filtering options.

use serde::{Deserialize, Serialize};

/// Filtering options handed to the broad-phase sweep verbatim.
///
/// The cone layer never interprets these; how they are honored is up to the
/// sweep implementation. `layers` is a bitmask of searchable layers, and
/// `min_depth`/`max_depth` bound the depth tag of included objects (for
/// planar worlds this is conventionally the out-of-plane coordinate). The
/// default searches every layer at any depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepFilter {
    /// Bitmask of layers to search.
    pub layers: u32,
    /// Smallest depth tag to include.
    pub min_depth: f32,
    /// Largest depth tag to include.
    pub max_depth: f32,
}

impl SweepFilter {
    /// A filter restricted to the given layer bitmask, at any depth.
    pub fn on_layers(layers: u32) -> Self {
        Self {
            layers,
            ..Self::default()
        }
    }

    /// Restrict the depth range of included objects.
    pub fn with_depth_range(mut self, min_depth: f32, max_depth: f32) -> Self {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }
}

impl Default for SweepFilter {
    fn default() -> Self {
        Self {
            layers: u32::MAX,
            min_depth: f32::NEG_INFINITY,
            max_depth: f32::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_passes_everything() {
        let filter = SweepFilter::default();
        assert_eq!(filter.layers, u32::MAX);
        assert!(filter.min_depth.is_infinite() && filter.min_depth < 0.0);
        assert!(filter.max_depth.is_infinite() && filter.max_depth > 0.0);
    }

    #[test]
    fn test_builders() {
        let filter = SweepFilter::on_layers(0b101).with_depth_range(-1.0, 4.0);
        assert_eq!(filter.layers, 0b101);
        assert_eq!(filter.min_depth, -1.0);
        assert_eq!(filter.max_depth, 4.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let filter = SweepFilter::on_layers(7).with_depth_range(-2.5, 2.5);
        let json = serde_json::to_string(&filter).unwrap();
        let back: SweepFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);
    }
}
