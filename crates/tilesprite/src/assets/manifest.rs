use serde::{Deserialize, Serialize};

use crate::api::error::EngineError;
use crate::assets::spritesheet::Spritesheet;

/// Spritesheet description loaded from a JSON file at runtime.
///
/// Animations are stacked horizontal strips: row `i` holds the
/// `frames[i]` frames of animation `i`, left to right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpritesheetManifest {
    /// Human-readable name (e.g., "player").
    #[serde(default)]
    pub name: String,
    /// Relative path to the image file (e.g., "player.png").
    pub path: String,
    /// Frame count per animation row.
    pub frames: Vec<u32>,
    /// Explicit mirror pairs. When absent, rows pair up as (0,1), (2,3), ...
    #[serde(default)]
    pub pairs: Option<Vec<[u32; 2]>>,
}

impl SpritesheetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Attach a loaded texture to this description.
    pub fn into_spritesheet<T>(self, texture: T) -> Spritesheet<T> {
        let sheet = Spritesheet::new(texture, self.frames);
        match self.pairs {
            Some(pairs) => sheet.with_pairs(pairs.into_iter().map(|[a, b]| (a, b)).collect()),
            None => sheet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "path": "player.png",
            "frames": [4, 4, 6, 6]
        }"#;
        let manifest = SpritesheetManifest::from_json(json).unwrap();
        assert_eq!(manifest.path, "player.png");
        assert_eq!(manifest.frames, vec![4, 4, 6, 6]);
        assert!(manifest.pairs.is_none());
        assert!(manifest.name.is_empty());
    }

    #[test]
    fn parse_manifest_with_pairs() {
        let json = r#"{
            "name": "slime",
            "path": "slime.png",
            "frames": [3, 2, 3, 2],
            "pairs": [[0, 2], [1, 3]]
        }"#;
        let sheet = SpritesheetManifest::from_json(json)
            .unwrap()
            .into_spritesheet(());
        assert_eq!(sheet.animation_count(), 4);
        assert_eq!(sheet.declared_pairs(), Some(&[(0, 2), (1, 3)][..]));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let err = SpritesheetManifest::from_json(r#"{ "frames": "lots" }"#).unwrap_err();
        assert!(matches!(err, EngineError::Manifest(_)));
    }
}
