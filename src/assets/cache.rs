//! Read-through cache of tile assets keyed by letter
//!
//! Entries are never invalidated: a letter's SVG is assumed not to change
//! for the lifetime of the session. Failed loads are not cached.

use std::collections::HashMap;

use super::{AssetError, AssetProvider, TileAsset};
use crate::models::{Letter, TileDimensions, TileSequence};

#[derive(Debug, Default)]
pub struct TileCache {
    assets: HashMap<Letter, TileAsset>,
}

impl TileCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: Letter) -> Option<&TileAsset> {
        self.assets.get(&letter)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.assets.contains_key(&letter)
    }

    pub fn dimensions(&self, letter: Letter) -> Option<TileDimensions> {
        self.get(letter).map(|asset| asset.dimensions)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Store an asset, replacing nothing if the letter is already cached
    ///
    /// Returns the cached entry for the letter.
    pub fn insert(&mut self, asset: TileAsset) -> &TileAsset {
        self.assets.entry(asset.letter).or_insert(asset)
    }

    /// Cached asset for `letter`, loading it through `provider` on first use
    pub fn get_or_load<P>(&mut self, letter: Letter, provider: &mut P) -> Result<&TileAsset, AssetError>
    where
        P: AssetProvider + ?Sized,
    {
        if !self.assets.contains_key(&letter) {
            let svg = provider.load(letter)?;
            let asset = TileAsset::from_svg(letter, svg)?;
            log::debug!(
                "cached tile {} ({}x{})",
                letter,
                asset.dimensions.width,
                asset.dimensions.height
            );
            self.assets.insert(letter, asset);
        }

        // Present: either already cached or inserted just above
        self.assets.get(&letter).ok_or(AssetError::NotFound(letter))
    }

    /// Load every distinct letter of `sequence`, collecting failures
    ///
    /// Each failing letter is reported once; successful letters stay cached.
    pub fn load_sequence<P>(&mut self, sequence: &TileSequence, provider: &mut P) -> Vec<AssetError>
    where
        P: AssetProvider + ?Sized,
    {
        sequence
            .distinct_letters()
            .into_iter()
            .filter_map(|letter| self.get_or_load(letter, provider).err())
            .collect()
    }

    /// Distinct letters of `sequence` not yet in the cache
    pub fn missing_letters(&self, sequence: &TileSequence) -> Vec<Letter> {
        sequence
            .distinct_letters()
            .into_iter()
            .filter(|letter| !self.contains(*letter))
            .collect()
    }
}
