// Module for the process-wide tile cache: every tile sheet in the manifest,
// decoded once into one contiguous index space.
use anyhow::{bail, ensure, Context, Result};
use log::{debug, info, warn};
use std::path::Path;

use crate::{
    assets::AssetDir,
    common::{PixelSize, TileIdx},
    reader::AssetReader,
    surface::Surface,
    tile::{load_tile, TileHeader},
};

pub const FN_TILECACHE_SIZE: usize = 1300;

// Tile sheets in load order, with the number of tiles taken from each.
pub const MANIFEST: [(&str, usize); 26] = [
    ("BACK0.DN1", 48),
    ("BACK1.DN1", 48),
    ("BACK2.DN1", 48),
    ("BACK3.DN1", 48),
    ("SOLID0.DN1", 48),
    ("SOLID1.DN1", 48),
    ("SOLID2.DN1", 48),
    ("SOLID3.DN1", 48),
    ("ANIM0.DN1", 48),
    ("ANIM1.DN1", 48),
    ("ANIM2.DN1", 48),
    ("ANIM3.DN1", 48),
    ("ANIM4.DN1", 48),
    ("ANIM5.DN1", 48),
    ("OBJECT0.DN1", 50),
    ("OBJECT1.DN1", 50),
    ("OBJECT2.DN1", 50),
    ("MAN0.DN1", 48),
    ("MAN1.DN1", 48),
    ("MAN2.DN1", 48),
    ("MAN3.DN1", 48),
    ("MAN4.DN1", 48),
    ("FONT1.DN1", 50),
    ("FONT2.DN1", 50),
    ("BORDER.DN1", 48),
    ("NUMBERS.DN1", 48),
];

// Index of the first tile contributed by manifest entry `file`.
const fn manifest_offset(file: usize) -> TileIdx {
    let mut i = 0;
    let mut sum = 0;
    while i < file {
        sum += MANIFEST[i].1;
        i += 1;
    }
    sum
}

pub const BACKGROUND_START: TileIdx = manifest_offset(0);
pub const SOLID_START: TileIdx = manifest_offset(4);
pub const ANIM_START: TileIdx = manifest_offset(8);
pub const OBJ_START: TileIdx = manifest_offset(14);
pub const HERO_START: TileIdx = manifest_offset(17);
pub const FONT_START: TileIdx = manifest_offset(22);
pub const BORD_START: TileIdx = manifest_offset(24);
pub const NUMB_START: TileIdx = manifest_offset(25);
pub const TILES_TOTAL: TileIdx = manifest_offset(MANIFEST.len());

// Object sheet entries referenced by drawing code.
pub const OBJ_LETTER_D: TileIdx = OBJ_START + 24;
pub const OBJ_LETTER_U: TileIdx = OBJ_START + 25;
pub const OBJ_LETTER_K: TileIdx = OBJ_START + 26;
pub const OBJ_LETTER_E: TileIdx = OBJ_START + 27;
pub const OBJ_DUKE_WORD: TileIdx = OBJ_START + 24; // Same tile as OBJ_LETTER_D
pub const OBJ_GUN: TileIdx = OBJ_START + 43;
pub const OBJ_HEALTH_FULL: TileIdx = OBJ_START + 44;
pub const OBJ_HEALTH_EMPTY: TileIdx = OBJ_START + 45;

const _: () = assert!(TILES_TOTAL <= FN_TILECACHE_SIZE);

pub struct TileCache {
    tiles: Vec<Surface>,
    pixel_size: PixelSize,
    loaded: bool,
}

impl TileCache {
    pub fn init(pixel_size: PixelSize) -> Self {
        Self {
            tiles: Vec::with_capacity(FN_TILECACHE_SIZE),
            pixel_size,
            loaded: false,
        }
    }

    pub fn pixel_size(&self) -> PixelSize {
        self.pixel_size
    }

    /// Number of decoded tiles, including those of an unfinished load.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load every manifest file from `dir`. On error the cache keeps whatever
    /// was decoded so far but stays unloaded, so `get` keeps returning `None`.
    pub fn load_all(&mut self, dir: &Path) -> Result<()> {
        let assets = AssetDir::scan(dir)?;
        self.load_manifest(&assets, &MANIFEST)
    }

    pub fn load_manifest(&mut self, assets: &AssetDir, manifest: &[(&str, usize)]) -> Result<()> {
        if self.loaded || !self.tiles.is_empty() {
            bail!("tile cache has already been loaded");
        }
        let total: usize = manifest.iter().map(|&(_, count)| count).sum();
        ensure!(
            total <= FN_TILECACHE_SIZE,
            "manifest holds {} tiles, cache capacity is {}",
            total,
            FN_TILECACHE_SIZE
        );
        for &(name, count) in manifest {
            self.load_file(assets, name, count)?;
        }
        info!("Tile cache loaded: {} tiles", self.tiles.len());
        self.loaded = true;
        Ok(())
    }

    fn load_file(&mut self, assets: &AssetDir, name: &str, count: usize) -> Result<()> {
        let path = assets.resolve(name)?;
        info!("Loading {}", path.display());
        let mut reader = AssetReader::open(&path)?;
        let header = TileHeader::read(&mut reader)?;
        if header.tile_count as usize != count {
            warn!(
                "{} declares {} tiles, loading {}",
                name, header.tile_count, count
            );
        }
        let first = self.tiles.len();
        for i in 0..count {
            let tile = load_tile(&mut reader, &header, self.pixel_size)
                .with_context(|| format!("{} tile {}", name, i))?;
            self.tiles.push(tile);
        }
        debug!("{} -> tiles {}..{}", name, first, self.tiles.len());
        Ok(())
    }

    pub fn get(&self, index: TileIdx) -> Option<&Surface> {
        if !self.loaded {
            return None;
        }
        self.tiles.get(index)
    }

    pub fn destroy(&mut self) {
        while self.tiles.pop().is_some() {}
        self.loaded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AssetError,
        testutil::{self, TempDir},
    };

    #[test]
    fn range_bases() {
        assert_eq!(BACKGROUND_START, 0);
        assert_eq!(SOLID_START, 192);
        assert_eq!(ANIM_START, 384);
        assert_eq!(OBJ_START, 672);
        assert_eq!(HERO_START, 822);
        assert_eq!(FONT_START, 1062);
        assert_eq!(BORD_START, 1162);
        assert_eq!(NUMB_START, 1210);
        assert_eq!(TILES_TOTAL, 1258);
        assert_eq!(OBJ_GUN, 715);
        assert_eq!(OBJ_DUKE_WORD, OBJ_LETTER_D);
    }

    #[test]
    fn empty_cache_returns_nothing() {
        let cache = TileCache::init(2);
        assert!(!cache.is_loaded());
        for i in [0, 1, OBJ_GUN, FN_TILECACHE_SIZE - 1, FN_TILECACHE_SIZE] {
            assert!(cache.get(i).is_none());
        }
    }

    #[test]
    fn load_full_manifest() {
        let tmp = TempDir::new("cache");
        testutil::write_manifest(tmp.path());
        let mut cache = TileCache::init(2);
        cache.load_all(tmp.path()).unwrap();

        assert!(cache.is_loaded());
        assert_eq!(cache.len(), TILES_TOTAL);
        for i in 0..TILES_TOTAL {
            assert!(cache.get(i).is_some(), "tile {i}");
        }
        for i in TILES_TOTAL..=FN_TILECACHE_SIZE {
            assert!(cache.get(i).is_none(), "tile {i}");
        }

        let gun = cache.get(OBJ_GUN).unwrap();
        assert_eq!((gun.width(), gun.height()), (32, 32));
        let glyph = cache.get(FONT_START).unwrap();
        assert_eq!((glyph.width(), glyph.height()), (16, 16));
        let digit = cache.get(NUMB_START + 47).unwrap();
        assert_eq!((digit.width(), digit.height()), (16, 16));
    }

    #[test]
    fn tiles_keep_manifest_order() {
        let tmp = TempDir::new("order");
        testutil::write_manifest(tmp.path());
        let mut cache = TileCache::init(1);
        cache.load_all(tmp.path()).unwrap();

        // The second tile of OBJECT1.DN1 must be the second tile decoded from that file.
        let data = std::fs::read(tmp.path().join("object1.dn1")).unwrap();
        let mut reader = AssetReader::new("OBJECT1.DN1", data);
        let header = TileHeader::read(&mut reader).unwrap();
        load_tile(&mut reader, &header, 1).unwrap();
        let second = load_tile(&mut reader, &header, 1).unwrap();
        assert_eq!(cache.get(OBJ_START + 50 + 1), Some(&second));
    }

    #[test]
    fn missing_file_aborts_load() {
        let tmp = TempDir::new("partial");
        testutil::write_manifest(tmp.path());
        std::fs::remove_file(tmp.path().join("man2.dn1")).unwrap();
        let mut cache = TileCache::init(1);
        let err = cache.load_all(tmp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::MissingAsset { name, .. }) if name == "MAN2.DN1"
        ));
        assert!(!cache.is_loaded());
        assert_eq!(cache.len(), HERO_START + 2 * 48);
        assert!(cache.get(0).is_none());
    }

    #[test]
    fn short_file_aborts_load() {
        let tmp = TempDir::new("short");
        testutil::write_manifest(tmp.path());
        // Header and data for only 10 of BORDER.DN1's 48 tiles.
        std::fs::write(tmp.path().join("border.dn1"), testutil::tile_file(10, 1, 8, 3)).unwrap();
        let mut cache = TileCache::init(1);
        let err = cache.load_all(tmp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::Truncated { .. })
        ));
        assert_eq!(cache.len(), BORD_START + 10);
        assert!(cache.get(BORD_START).is_none());
    }

    #[test]
    fn manifest_count_overrides_header_count() {
        let tmp = TempDir::new("count");
        let mut data = testutil::tile_file(4, 1, 1, 9);
        data[0] = 2;
        std::fs::write(tmp.path().join("TEST.DN1"), data).unwrap();
        let assets = AssetDir::scan(tmp.path()).unwrap();
        let mut cache = TileCache::init(1);
        cache.load_manifest(&assets, &[("TEST.DN1", 4)]).unwrap();
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn second_load_is_rejected() {
        let tmp = TempDir::new("twice");
        std::fs::write(tmp.path().join("A.DN1"), testutil::tile_file(1, 1, 1, 5)).unwrap();
        let assets = AssetDir::scan(tmp.path()).unwrap();
        let mut cache = TileCache::init(1);
        cache.load_manifest(&assets, &[("A.DN1", 1)]).unwrap();
        assert!(cache.load_manifest(&assets, &[("A.DN1", 1)]).is_err());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn destroy_empties_cache() {
        let tmp = TempDir::new("destroy");
        std::fs::write(tmp.path().join("A.DN1"), testutil::tile_file(3, 1, 1, 5)).unwrap();
        let assets = AssetDir::scan(tmp.path()).unwrap();
        let mut cache = TileCache::init(1);
        cache.load_manifest(&assets, &[("A.DN1", 3)]).unwrap();
        assert!(cache.get(2).is_some());
        cache.destroy();
        assert_eq!(cache.len(), 0);
        assert!(!cache.is_loaded());
        assert!(cache.get(0).is_none());
    }

    #[test]
    fn oversized_manifest_is_rejected() {
        let tmp = TempDir::new("oversized");
        let assets = AssetDir::scan(tmp.path()).unwrap();
        let mut cache = TileCache::init(1);
        let err = cache
            .load_manifest(&assets, &[("A.DN1", 1000), ("B.DN1", 301)])
            .unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }
}
