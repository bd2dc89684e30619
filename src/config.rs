//! Board configuration passed in from the host page

use serde::{Deserialize, Serialize};

pub const DEFAULT_TILE_BASE_PATH: &str = "./tiles";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TileConfig {
    /// Directory (relative to the page) holding `{LETTER}.svg` files
    pub tile_base_path: String,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_base_path: DEFAULT_TILE_BASE_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: TileConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TileConfig::default());

        let config: TileConfig = serde_json::from_str(r#"{"tileBasePath":"/assets/tiles"}"#).unwrap();
        assert_eq!(config.tile_base_path, "/assets/tiles");
    }
}
