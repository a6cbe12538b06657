//! Loaded shader text as stored by loaders and registries.

/// Script type tag attached to every external registration.
pub const SHADER_SCRIPT_TYPE: &str = "x-shader/x-glsl";

/// Shader text with the name it was derived under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderRecord {
    pub name: String,
    pub content: String,
}

impl ShaderRecord {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Value of an external registration, keyed by `"{name}-shader"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderScript {
    pub id: String,
    pub kind: &'static str,
    pub text: String,
}

impl ShaderScript {
    /// Build the registration for a record.
    pub fn from_record(record: &ShaderRecord) -> Self {
        Self {
            id: crate::registration_key(&record.name),
            kind: SHADER_SCRIPT_TYPE,
            text: record.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_mirrors_record() {
        let record = ShaderRecord::new("fog", "void main() {}");
        let script = ShaderScript::from_record(&record);
        assert_eq!(script.id, "fog-shader");
        assert_eq!(script.kind, SHADER_SCRIPT_TYPE);
        assert_eq!(script.text, record.content);
    }
}
