//! Shader name derivation from file names.

use crate::{CoreError, CoreResult};

/// Derive the shader name for a file name.
///
/// Only the last `/`-separated segment counts; the name is the text before
/// its first `.` (`"fog.vert"` -> `"fog"`, `"a.b.c"` -> `"a"`). A segment
/// without any dot is kept whole. An empty result is an error.
pub fn derive_name(file_name: &str) -> CoreResult<&str> {
    let segment = file_name.rsplit('/').next().unwrap_or(file_name);
    let name = segment.split('.').next().unwrap_or(segment);
    if name.is_empty() {
        return Err(CoreError::InvalidName(file_name.to_string()));
    }
    Ok(name)
}

/// Key under which a shader is registered externally.
pub fn registration_key(name: &str) -> String {
    format!("{name}-shader")
}
