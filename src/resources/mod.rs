use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, Cursor, Read},
    path::{Path, PathBuf},
};

pub use texture::load_textures;

/**
 * This module contains all logic for loading textures from external assets.
 */
pub mod texture;

/// Something that can open a named asset as a byte stream.
pub trait AssetSource {
    fn open(&self, name: &str) -> std::io::Result<Box<dyn Read + '_>>;
}

/// Assets on disk, resolved relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The copy of `assets/` the build script placed in `OUT_DIR`.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("OUT_DIR")).join("assets"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for FsAssets {
    /// `./assets`, relative to the working directory.
    fn default() -> Self {
        Self::new(Path::new("./").join("assets"))
    }
}

impl AssetSource for FsAssets {
    fn open(&self, name: &str) -> std::io::Result<Box<dyn Read + '_>> {
        let path = self.root.join(name);
        log::debug!("opening asset {}", path.display());
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Assets kept in memory, e.g. embedded with `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), bytes.into());
    }
}

impl AssetSource for MemoryAssets {
    fn open(&self, name: &str) -> std::io::Result<Box<dyn Read + '_>> {
        match self.files.get(name) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no in-memory asset named '{}'", name),
            )),
        }
    }
}

impl<A: AssetSource + ?Sized> AssetSource for &A {
    fn open(&self, name: &str) -> std::io::Result<Box<dyn Read + '_>> {
        (**self).open(name)
    }
}

/// Reads a whole asset into memory.
pub fn load_binary<A: AssetSource + ?Sized>(assets: &A, name: &str) -> std::io::Result<Vec<u8>> {
    let mut reader = assets.open(name)?;
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}
