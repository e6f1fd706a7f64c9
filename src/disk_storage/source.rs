use std::fs::{self, DirBuilder, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::info;
use crate::scheme::Product;

/// Where a catalog's products come from and go back to.
pub trait RecordSource {
    fn load(&self) -> Result<Vec<Product>>;
    fn save(&self, products: &[Product]) -> Result<()>;
}

/// Products stored as a pretty-printed JSON array in a single file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline(always)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    /// A missing file is an empty catalog, not an error.
    fn load(&self) -> Result<Vec<Product>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No catalog found at {}, starting empty", self.path.to_string_lossy());
                return Ok(Vec::new());
            },
            Err(err) => return Err(err.into()),
        };
        if file.metadata()?.len() == 0 {
            return Ok(Vec::new());
        }
        let products: Vec<Product> = serde_json::from_reader(BufReader::new(file))?;
        info!("Loaded {} products from {}", products.len(), self.path.to_string_lossy());
        Ok(products)
    }

    fn save(&self, products: &[Product]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            DirBuilder::new().recursive(true).create(dir)?;
        }
        // A failed dump leaves the previous catalog file untouched.
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, products)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        info!("Saved {} products to {}", products.len(), self.path.to_string_lossy());
        Ok(())
    }
}
