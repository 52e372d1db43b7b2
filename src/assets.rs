// Module for locating asset files regardless of the case they were stored with.
use anyhow::{Context, Result};
use hashbrown::HashMap;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::error::AssetError;

pub struct AssetDir {
    dir: PathBuf,
    files: HashMap<String, PathBuf>, // Upper-cased file name -> actual path
}

impl AssetDir {
    pub fn scan(dir: &Path) -> Result<Self> {
        info!("Scanning asset directory {}", dir.display());
        let dir_str = dir
            .to_str()
            .context("asset directory path is not valid UTF-8")?;
        let pattern = format!("{}/*", glob::Pattern::escape(dir_str));
        let mut files = HashMap::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.insert(name.to_uppercase(), path.clone());
            }
        }
        debug!("{} files in {}", files.len(), dir.display());
        Ok(Self {
            dir: dir.to_owned(),
            files,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        match self.files.get(&name.to_uppercase()) {
            Some(path) => Ok(path.clone()),
            None => Err(AssetError::MissingAsset {
                name: name.to_string(),
                dir: self.dir.clone(),
            }
            .into()),
        }
    }
}
