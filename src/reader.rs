// Module for sequential, bounds-checked reads over a whole asset file.
use anyhow::{ensure, Context, Result};
use log::debug;
use std::path::Path;

use crate::error::AssetError;

pub struct AssetReader {
    name: String,
    data: Vec<u8>,
    pos: usize,
}

impl AssetReader {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
            pos: 0,
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let data =
            std::fs::read(path).with_context(|| format!("unable to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        debug!("Opened {} ({} bytes)", name, data.len());
        Ok(Self::new(name, data))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_n(&mut self, n: usize) -> Result<&[u8]> {
        ensure!(
            n <= self.remaining(),
            AssetError::Truncated {
                name: self.name.clone(),
                offset: self.pos,
                needed: n,
                len: self.data.len(),
            }
        );
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_n(1)?[0])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_n(N)?);
        Ok(out)
    }
}
