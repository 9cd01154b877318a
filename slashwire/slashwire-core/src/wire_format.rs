use std::fmt;

/// Serialized forms a message can be exchanged in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// Tag/length/value binary encoding (`binary`)
    Binary,
    /// Human-readable JSON text (`json`)
    Json,
    /// Unknown/custom format
    Unknown(String),
}

impl WireFormat {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Binary => "binary",
            Self::Json => "json",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for WireFormat {
    fn from(s: &str) -> Self {
        match s {
            "binary" | "protobuf" => Self::Binary,
            "json" => Self::Json,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
