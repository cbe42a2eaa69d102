//! Source document types and loading.
//!
//! A program document is a YAML mapping with a `program` field holding an
//! ordered list of instruction records:
//!
//! ```yaml
//! program:
//!   - load_const: 5
//!   - write_mem:
//!   - read_mem: 10
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use uvm_core::Result;

/// One entry in the `program` list: a mapping from operation name to
/// operand value. Key order is preserved, so in a record carrying more
/// than one pair the first pair is the one honored.
pub type SourceRecord = IndexMap<String, Option<i64>>;

/// A declarative assembly document, decoded from YAML.
///
/// The decoder itself only enforces value shapes; schema checks such as
/// the `program` field being present at all are performed by the builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDoc {
    /// Ordered instruction records. List entries may be null.
    #[serde(default)]
    pub program: Option<Vec<Option<SourceRecord>>>,
}

impl SourceDoc {
    /// Load a document from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
