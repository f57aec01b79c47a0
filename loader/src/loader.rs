use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::debug;

use crate::error::IdlError;
use dbus_idlgen_schema::Node;

/// Decode the introspection XML document at `path` into a [`Node`] tree.
/// Returns `Err(IdlError)` if the file cannot be opened or read, or the
/// XML is not well-formed; the caller never sees a partially built tree.
pub fn parse_idl_file(path: impl AsRef<Path>) -> Result<Node, IdlError> {
    let file = File::open(path.as_ref())?;
    let node = quick_xml::de::from_reader(BufReader::new(file))?;
    Ok(node)
}

/// One loaded IDL file: the parsed node tree together with the path it
/// came from and the logical name templates refer to it by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Idl {
    pub name: String,
    pub path: PathBuf,
    pub node: Node,
}

impl Idl {
    /// Load the introspection document at `path`. The logical name is the
    /// file's base name with its extension stripped, so
    /// `/tmp/foo.bar.Baz.xml` loads as `foo.bar.Baz`. Errors from the
    /// filesystem or the decoder propagate verbatim.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IdlError> {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("loading IDL {:?} from {}", name, path.display());
        let node = parse_idl_file(&path)?;

        Ok(Idl { name, path, node })
    }
}
