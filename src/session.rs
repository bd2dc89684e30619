//! Tile rendering session
//!
//! Holds the current input, its tile sequence and the asset cache for one
//! page. The cache outlives individual inputs: once a letter is loaded it
//! is reused by every later word.

use serde::Serialize;

use crate::assets::{tile_url, AssetError, AssetProvider, TileAsset, TileCache};
use crate::config::TileConfig;
use crate::models::{LayoutResult, Letter, TileSequence};
use crate::parse::{build_sequence, normalize_input, TileError};
use crate::renderers::{export_filename, export_svg, layout_from_cache, render_row, ExportError, TileRow};

/// A letter whose asset the host still has to fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileRequest {
    pub letter: String,
    pub url: String,
}

/// A finished export, ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedSvg {
    pub filename: String,
    pub svg: String,
}

#[derive(Debug, Default)]
pub struct TileSession {
    config: TileConfig,
    cache: TileCache,
    word: String,
    sequence: Option<TileSequence>,
    failed: Vec<Letter>,
}

impl TileSession {
    pub fn new(config: TileConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &TileConfig {
        &self.config
    }

    pub fn cache(&self) -> &TileCache {
        &self.cache
    }

    /// The trimmed word currently shown
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn sequence(&self) -> Option<&TileSequence> {
        self.sequence.as_ref()
    }

    /// Replace the current input
    ///
    /// Blank input clears the board and is not an error. Anything else that
    /// cannot be shown as tiles clears the board and returns the reason.
    pub fn set_input(&mut self, text: &str) -> Result<Option<&TileSequence>, TileError> {
        let word = normalize_input(text);
        self.word = word.to_string();
        self.sequence = None;
        self.failed.clear();

        if word.is_empty() {
            return Ok(None);
        }

        let sequence = build_sequence(word)?;
        self.sequence = Some(sequence);
        Ok(self.sequence.as_ref())
    }

    /// Whether the current input can be shared as a link
    pub fn is_shareable(&self) -> bool {
        self.sequence.is_some()
    }

    /// Letters of the current sequence that are neither loaded nor failed
    pub fn pending_letters(&self) -> Vec<Letter> {
        match &self.sequence {
            Some(sequence) => self
                .cache
                .missing_letters(sequence)
                .into_iter()
                .filter(|letter| !self.failed.contains(letter))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Fetch requests for every pending letter
    pub fn tile_requests(&self) -> Vec<TileRequest> {
        self.pending_letters()
            .into_iter()
            .map(|letter| TileRequest {
                letter: letter.to_string(),
                url: tile_url(&self.config.tile_base_path, letter),
            })
            .collect()
    }

    pub fn is_loaded(&self) -> bool {
        self.pending_letters().is_empty()
    }

    /// Store SVG text fetched for `letter`
    pub fn provide_tile(&mut self, letter: Letter, svg: &str) -> Result<(), AssetError> {
        let asset = TileAsset::from_svg(letter, svg);
        match asset {
            Ok(asset) => {
                self.cache.insert(asset);
                self.failed.retain(|l| *l != letter);
                Ok(())
            }
            Err(e) => {
                self.tile_failed(letter);
                Err(e)
            }
        }
    }

    /// Record that `letter` could not be fetched for the current input
    pub fn tile_failed(&mut self, letter: Letter) {
        if !self.failed.contains(&letter) {
            log::warn!("tile {} failed to load", letter);
            self.failed.push(letter);
        }
    }

    /// Load all pending letters through `provider`
    pub fn load_with<P>(&mut self, provider: &mut P) -> Vec<AssetError>
    where
        P: AssetProvider + ?Sized,
    {
        let Some(sequence) = self.sequence.as_ref() else {
            return Vec::new();
        };

        let errors = self.cache.load_sequence(sequence, provider);
        for error in &errors {
            match error {
                AssetError::NotFound(letter) | AssetError::InvalidSvg { letter, .. } => {
                    if !self.failed.contains(letter) {
                        log::warn!("{}", error);
                        self.failed.push(*letter);
                    }
                }
            }
        }
        errors
    }

    /// On-page render model for the current sequence
    pub fn row(&self) -> Option<TileRow> {
        self.sequence
            .as_ref()
            .map(|sequence| render_row(sequence, &self.cache))
    }

    pub fn layout(&self) -> Option<Result<LayoutResult, ExportError>> {
        self.sequence
            .as_ref()
            .map(|sequence| layout_from_cache(sequence, &self.cache))
    }

    /// Combined SVG of the current sequence, if there is one
    pub fn export(&self) -> Option<Result<ExportedSvg, ExportError>> {
        self.sequence.as_ref().map(|sequence| {
            let svg = export_svg(sequence, &self.cache)?;
            Ok(ExportedSvg {
                filename: export_filename(&self.word),
                svg,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(letter: Letter) -> Result<String, AssetError> {
        Ok(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><g><text>{}</text></g></svg>"#,
            letter
        ))
    }

    #[test]
    fn test_blank_input_clears() {
        let mut session = TileSession::default();
        session.set_input("cat").unwrap();
        assert!(session.is_shareable());

        assert_eq!(session.set_input("   ").unwrap(), None);
        assert!(!session.is_shareable());
        assert!(session.row().is_none());
    }

    #[test]
    fn test_invalid_input() {
        let mut session = TileSession::default();
        let err = session.set_input("r2d2").unwrap_err();
        assert_eq!(err, TileError::InvalidCharacter { ch: '2', index: 1 });
        assert!(!session.is_shareable());
    }

    #[test]
    fn test_input_trimmed_before_building() {
        let mut session = TileSession::default();
        let sequence = session.set_input("  hi there  ").unwrap().unwrap();
        assert_eq!(sequence.to_string(), "HI THERE");
        assert_eq!(session.word(), "hi there");
    }

    #[test]
    fn test_tile_requests_use_base_path() {
        let mut session = TileSession::new(TileConfig { tile_base_path: "/t".to_string() });
        session.set_input("aa b").unwrap();
        let urls: Vec<String> = session.tile_requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["/t/A.svg", "/t/B.svg"]);
    }

    #[test]
    fn test_failed_tile_not_pending_and_blocks_export() {
        let mut session = TileSession::default();
        session.set_input("ab").unwrap();
        let a = Letter::new('a').unwrap();
        let b = Letter::new('b').unwrap();
        session.provide_tile(a, &tile(a).unwrap()).unwrap();
        session.tile_failed(b);

        assert!(session.is_loaded());
        assert_eq!(session.export(), Some(Err(ExportError::MissingTile(b))));
        let row = session.row().unwrap();
        assert!(matches!(row.words[0].tiles[1], crate::renderers::TileView::Error { .. }));
    }

    #[test]
    fn test_cache_survives_new_input() {
        let mut session = TileSession::default();
        session.set_input("cab").unwrap();
        assert!(session.load_with(&mut tile).is_empty());

        session.set_input("back").unwrap();
        let pending: Vec<Letter> = session.pending_letters();
        assert_eq!(pending, vec![Letter::new('k').unwrap()]);
    }

    #[test]
    fn test_export_filename_from_word() {
        let mut session = TileSession::default();
        session.set_input("big  dog").unwrap();
        session.load_with(&mut tile);
        let exported = session.export().unwrap().unwrap();
        assert_eq!(exported.filename, "big-dog-tiles.svg");
        assert!(exported.svg.starts_with("<svg "));
    }
}
