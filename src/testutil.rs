// Synthetic asset files for tests.
use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{
    backdrop::BACKDROP_TILES,
    tile::RECORD_SIZE,
    tilecache::MANIFEST,
};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Directory under the system temp dir, removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "dn1_engine_{}_{}_{}",
            label,
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Tile file with `count` tiles of pseudo-random records derived from `seed`.
pub fn tile_file(count: u8, width_bytes: u8, height: u8, seed: u32) -> Vec<u8> {
    let mut data = vec![count, width_bytes, height];
    let mut state = seed | 1;
    let n = count as usize * width_bytes as usize * height as usize * RECORD_SIZE;
    for _ in 0..n {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        data.push(state as u8);
    }
    data
}

/// Backdrop file whose every record in tile `n` is `record(n)`.
pub fn backdrop_file(record: impl Fn(usize) -> [u8; RECORD_SIZE]) -> Vec<u8> {
    let mut data = vec![];
    for n in 0..BACKDROP_TILES as usize {
        for _ in 0..32 {
            data.extend_from_slice(&record(n));
        }
    }
    data
}

/// Write every manifest file into `dir` with lower-cased names. Font, border
/// and number sheets hold 8x8 tiles, everything else 16x16.
pub fn write_manifest(dir: &Path) {
    for (i, &(name, count)) in MANIFEST.iter().enumerate() {
        let (width_bytes, height) = tile_dimensions(name);
        let data = tile_file(count as u8, width_bytes, height, i as u32 + 7);
        std::fs::write(dir.join(name.to_lowercase()), data).unwrap();
    }
}

pub fn tile_dimensions(name: &str) -> (u8, u8) {
    if name.starts_with("FONT") || name == "BORDER.DN1" || name == "NUMBERS.DN1" {
        (1, 8)
    } else {
        (2, 16)
    }
}
