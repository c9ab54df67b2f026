use crate::foundation::error::{UiError, UiResult};
use crate::scene::model::ExportDef;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decoded CocoStudio UI export.
///
/// This is the JSON-facing boundary object. It is consumed by [`crate::UiEditor`], which walks it
/// into a [`crate::Scene`].
#[derive(Debug, Clone)]
pub struct UiExport {
    def: ExportDef,
}

impl UiExport {
    /// Parse an export from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> UiResult<Self> {
        let def: ExportDef = serde_json::from_reader(r)
            .map_err(|e| UiError::serde(format!("parse UI export JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse an export from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> UiResult<Self> {
        let def: ExportDef = serde_json::from_str(json)
            .map_err(|e| UiError::serde(format!("parse UI export JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse an export from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            UiError::asset(format!("open UI export JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Wrap an already decoded definition.
    pub fn from_def(def: ExportDef) -> Self {
        Self { def }
    }

    /// Borrow the decoded definition.
    pub fn def(&self) -> &ExportDef {
        &self.def
    }
}
