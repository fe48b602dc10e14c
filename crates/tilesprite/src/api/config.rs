use serde::{Deserialize, Serialize};

use crate::api::error::EngineError;

/// Engine configuration, shared by every object type built with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cull viewport width in pixels (default: 1280).
    pub viewport_width: i32,
    /// Cull viewport height in pixels (default: 720).
    pub viewport_height: i32,
    /// Thickness of the edge hitboxes in pixels (default: 8).
    pub hitbox_inset: i32,
    /// Instance slots allocated up front (default: 2). Doubles on demand.
    pub initial_capacity: usize,
    /// Seconds per animation step for the animation clock (default: 1/12).
    pub frame_duration: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 720,
            hitbox_inset: 8,
            initial_capacity: 2,
            frame_duration: 1.0 / 12.0,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), EngineError> {
            Err(EngineError::InvalidConfig { field, reason })
        };
        if self.viewport_width <= 0 {
            return invalid("viewport_width", "must be positive");
        }
        if self.viewport_height <= 0 {
            return invalid("viewport_height", "must be positive");
        }
        if self.hitbox_inset <= 0 {
            return invalid("hitbox_inset", "must be positive");
        }
        // Capacity only ever doubles, so it stays a power of two.
        if !self.initial_capacity.is_power_of_two() {
            return invalid("initial_capacity", "must be a power of two");
        }
        Ok(())
    }

    /// Smallest object width/height whose side hitboxes keep a non-negative height.
    pub fn min_object_size(&self) -> i32 {
        self.hitbox_inset * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_720p_screen() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.viewport_width, 1280);
        assert_eq!(cfg.viewport_height, 720);
        assert_eq!(cfg.hitbox_inset, 8);
        assert_eq!(cfg.initial_capacity, 2);
        assert_eq!(cfg.min_object_size(), 16);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    fn rejected_field(cfg: EngineConfig) -> &'static str {
        match cfg.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => field,
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn zero_viewport_rejected() {
        let cfg = EngineConfig { viewport_width: 0, ..Default::default() };
        assert_eq!(rejected_field(cfg), "viewport_width");
        let cfg = EngineConfig { viewport_height: -720, ..Default::default() };
        assert_eq!(rejected_field(cfg), "viewport_height");
    }

    #[test]
    fn non_positive_inset_rejected() {
        for inset in [0, -8] {
            let cfg = EngineConfig { hitbox_inset: inset, ..Default::default() };
            assert_eq!(rejected_field(cfg), "hitbox_inset");
        }
    }

    #[test]
    fn capacity_must_be_power_of_two() {
        for capacity in [0, 3, 6] {
            let cfg = EngineConfig { initial_capacity: capacity, ..Default::default() };
            assert_eq!(rejected_field(cfg), "initial_capacity");
        }
        let cfg = EngineConfig { initial_capacity: 8, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json(r#"{ "viewport_width": 640 }"#).unwrap();
        assert_eq!(cfg.viewport_width, 640);
        assert_eq!(cfg.viewport_height, 720);
        assert_eq!(cfg.hitbox_inset, 8);
    }
}
