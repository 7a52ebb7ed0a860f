use crate::errors::ValidationError;
use crate::geometry::GeometryData;
use std::path::Path;

#[cfg(feature = "stl-io")]
mod stl;

#[cfg(feature = "gltf-io")]
mod gltf;

/// Generic I/O and format‑conversion errors.
///
/// Formats are behind cargo feature‑flags. When a feature is disabled,
/// asking for that format reports [`IoError::Unimplemented`].
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    /// The geometry breaks one of its invariants and was not written.
    InvalidGeometry(ValidationError),
    MalformedPath(String),
    Unimplemented(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            InvalidGeometry(error) => write!(f, "Geometry is invalid: {error}"),
            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
            Unimplemented(msg) => write!(f, "Feature is not implemented: {msg}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            IoError::InvalidGeometry(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<ValidationError> for IoError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidGeometry(value)
    }
}

/// File formats a [`GeometryData`] can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    StlAscii,
    StlBinary,
    Gltf,
}

impl ExportFormat {
    /// Pick a format from the file extension: `.stl` is binary STL, `.gltf` is glTF.
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| IoError::MalformedPath(format!("no extension in {}", path.display())))?;

        match extension.to_ascii_lowercase().as_str() {
            "stl" => Ok(ExportFormat::StlBinary),
            "gltf" => Ok(ExportFormat::Gltf),
            other => Err(IoError::Unimplemented(format!("export to .{other}"))),
        }
    }
}

impl GeometryData {
    /// Encode the mesh in `format`. The mesh is validated first.
    #[cfg_attr(
        not(any(feature = "stl-io", feature = "gltf-io")),
        allow(unused_variables)
    )]
    pub fn export(&self, format: ExportFormat, name: &str) -> Result<Vec<u8>, IoError> {
        self.validate()?;

        match format {
            #[cfg(feature = "stl-io")]
            ExportFormat::StlAscii => Ok(self.to_stl_ascii(name).into_bytes()),
            #[cfg(feature = "stl-io")]
            ExportFormat::StlBinary => Ok(self.to_stl_binary(name)?),
            #[cfg(feature = "gltf-io")]
            ExportFormat::Gltf => Ok(self.to_gltf(name).into_bytes()),
            #[allow(unreachable_patterns)]
            other => Err(IoError::Unimplemented(format!(
                "{other:?} export (enable the matching cargo feature)"
            ))),
        }
    }

    /// Validate and write the mesh to `path`, choosing the format from its extension.
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P, name: &str) -> Result<(), IoError> {
        let path = path.as_ref();
        let bytes = self.export(ExportFormat::from_path(path)?, name)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
