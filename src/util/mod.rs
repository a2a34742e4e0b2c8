use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Knob structs that live on disk as RON. Writes go to a temp file first
/// and are renamed into place, so a crash never leaves half a file behind.
pub trait RonFile: Serialize + DeserializeOwned + Sized {
    fn to_ron(&self) -> Result<String> {
        Ok(ron::to_string(self)?)
    }

    fn from_ron(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref().with_extension("ron");
        let tmp_path = path.with_extension(format!("ron.tmp-{}", std::process::id()));
        let writer = std::fs::File::create(&tmp_path)
            .with_context(|| format!("create {}", tmp_path.display()))?;
        ron::Options::default().to_io_writer(writer, self)?;
        std::fs::rename(&tmp_path, &path)
            .with_context(|| format!("move {} into place", path.display()))?;
        Ok(())
    }

    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader =
            std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::from_ron(&data).with_context(|| format!("parse {}", path.display()))
    }
}
