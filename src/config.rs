//! Showcase configuration module.
//!
//! Handles loading and validating `showcase.toml`. The config is the single
//! source of truth for *what* to showcase and *where*; credentials stay out
//! of it — the Steam API key comes from the `STEAM_API_KEY` environment
//! variable.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All non-item options are optional - defaults shown below
//!
//! readme_file = "README.md"          # Host document to inject into
//! comment_tag = "WORKSHOP-SHOWCASE"  # Marker tag: <!-- {tag}:START/END -->
//! image_path = "media/workshop"      # Output root, also the src prefix
//!
//! [card]
//! total_width = 846                  # Full card width in px
//! height = 100                       # Card height in px
//! thumb_width = 150                  # Thumbnail canvas width
//! padding = 8                        # Gap between thumbnail and panel
//! icon_width = 32                    # Badge icon region width
//!
//! [icon]
//! url = "https://steamcommunity.com/favicon.ico"
//! width = 32
//! height = 32
//!
//! # One [[items]] block per card, in display order
//! [[items]]
//! id = 881254777                     # Workshop file id (required)
//! title = "My Modpack"               # Override the fetched title
//! image = "media/custom.png"         # Override the preview image (path or URL)
//! link = "https://github.com/me/mod" # Card link target
//! linked_stats = [1396115995]        # Fold these items' counters into the
//!                                    # displayed totals (no extra cards)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::card::CardLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Showcase configuration loaded from `showcase.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Host document the showcase fragment is injected into.
    pub readme_file: String,
    /// Marker tag: the region lives between `<!-- {tag}:START -->` and
    /// `<!-- {tag}:END -->`.
    pub comment_tag: String,
    /// Directory the per-item artifacts are written under; also the relative
    /// prefix used in the generated `src` attributes.
    pub image_path: String,
    /// Showcased items, in display order.
    pub items: Vec<ItemConfig>,
    /// Card geometry.
    pub card: CardLayout,
    /// Badge icon linking each card to its workshop page.
    pub icon: IconConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            readme_file: "README.md".to_string(),
            comment_tag: "WORKSHOP-SHOWCASE".to_string(),
            image_path: "media/workshop".to_string(),
            items: Vec::new(),
            card: CardLayout::default(),
            icon: IconConfig::default(),
        }
    }
}

/// One showcased workshop item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemConfig {
    /// Published file id on the Steam Workshop.
    pub id: u64,
    /// Display title override; default is the fetched workshop title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Preview image override (filesystem path or URL); default is the
    /// fetched preview URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Link target for the card; default is the item's workshop page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Other workshop items whose counters are folded into this card's
    /// displayed totals without appearing as cards themselves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_stats: Vec<u64>,
}

/// The fixed badge icon shown at the right edge of every card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            url: "https://steamcommunity.com/favicon.ico".to_string(),
            width: 32,
            height: 32,
        }
    }
}

impl ShowcaseConfig {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[items]] entry is required".into(),
            ));
        }
        if self.comment_tag.trim().is_empty() {
            return Err(ConfigError::Validation(
                "comment_tag must not be empty".into(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for item in &self.items {
            if item.id == 0 {
                return Err(ConfigError::Validation("items.id must be non-zero".into()));
            }
            if !seen.insert(item.id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate items.id {}",
                    item.id
                )));
            }
        }
        if self.card.info_width() == 0 {
            return Err(ConfigError::Validation(
                "card.total_width leaves no room for the stats panel".into(),
            ));
        }
        if self.card.height == 0 || self.card.thumb_width == 0 {
            return Err(ConfigError::Validation(
                "card.height and card.thumb_width must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// The documented stock config printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# workshop-showcase configuration
# All non-item options are optional - defaults shown below.
# The Steam API key is read from the STEAM_API_KEY environment variable.

readme_file = "README.md"          # Host document to inject into
comment_tag = "WORKSHOP-SHOWCASE"  # Region markers: <!-- {tag}:START --> / <!-- {tag}:END -->
image_path = "media/workshop"      # Artifact output root, also the <img src> prefix

[card]
total_width = 846                  # Full card width in px
height = 100                       # Card height in px
thumb_width = 150                  # Thumbnail canvas width
padding = 8                        # Gap between thumbnail and stats panel
icon_width = 32                    # Width reserved for the badge icon

[icon]
url = "https://steamcommunity.com/favicon.ico"
width = 32
height = 32

# One [[items]] block per card, in display order.
[[items]]
id = 881254777                     # Workshop published file id (required)
# title = "My Modpack"             # Override the fetched title
# image = "media/custom.png"       # Override the preview image (path or URL)
# link = "https://github.com/me/my-modpack"
# linked_stats = [1396115995]      # Fold these items' counters into the totals
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_item(id: u64) -> ItemConfig {
        ItemConfig {
            id,
            title: None,
            image: None,
            link: None,
            linked_stats: Vec::new(),
        }
    }

    fn valid_config() -> ShowcaseConfig {
        ShowcaseConfig {
            items: vec![one_item(881254777)],
            ..ShowcaseConfig::default()
        }
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn parse_minimal_config() {
        let config: ShowcaseConfig = toml::from_str(
            r#"
            [[items]]
            id = 881254777
            "#,
        )
        .unwrap();

        assert_eq!(config.readme_file, "README.md");
        assert_eq!(config.comment_tag, "WORKSHOP-SHOWCASE");
        assert_eq!(config.image_path, "media/workshop");
        assert_eq!(config.items.len(), 1);
        assert_eq!(config.items[0].id, 881254777);
        assert_eq!(config.card.total_width, 846);
        assert_eq!(config.icon.width, 32);
    }

    #[test]
    fn parse_full_item_entry() {
        let config: ShowcaseConfig = toml::from_str(
            r#"
            [[items]]
            id = 881254777
            title = "Modpack"
            image = "media/custom.png"
            link = "https://github.com/TechnologicNick/WASD-Converter"
            linked_stats = [1396115995, 2]
            "#,
        )
        .unwrap();

        let item = &config.items[0];
        assert_eq!(item.title.as_deref(), Some("Modpack"));
        assert_eq!(item.image.as_deref(), Some("media/custom.png"));
        assert_eq!(item.linked_stats, vec![1396115995, 2]);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let result: Result<ShowcaseConfig, _> = toml::from_str("readme_fil = \"README.md\"");
        assert!(result.is_err());
    }

    #[test]
    fn stock_config_parses_and_validates() {
        let config: ShowcaseConfig = toml::from_str(stock_config_toml()).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn config_items_preserve_toml_order() {
        let config: ShowcaseConfig = toml::from_str(
            r#"
            [[items]]
            id = 3
            [[items]]
            id = 1
            [[items]]
            id = 2
            "#,
        )
        .unwrap();

        let ids: Vec<u64> = config.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_accepts_defaults_with_one_item() {
        valid_config().validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty_items() {
        let config = ShowcaseConfig::default();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_zero_id() {
        let config = ShowcaseConfig {
            items: vec![one_item(0)],
            ..ShowcaseConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let config = ShowcaseConfig {
            items: vec![one_item(5), one_item(5)],
            ..ShowcaseConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_layout_without_panel_room() {
        let mut config = valid_config();
        config.card.total_width = 150;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ShowcaseConfig::load(Path::new("/nonexistent/showcase.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("showcase.toml");
        std::fs::write(&path, "[[items]]\nid = 7\n").unwrap();

        let config = ShowcaseConfig::load(&path).unwrap();
        assert_eq!(config.items[0].id, 7);
    }
}
