//! Model tag value object
//!
//! Agents are rule tables, but every dispatch still names the model it would
//! have been routed to. The tag decides the simulated latency class.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Nominal model a dispatch is addressed to (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    GeminiFlash,
    GeminiPro,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::GeminiFlash => "gemini-flash",
            Model::GeminiPro => "gemini-pro",
            Model::Custom(s) => s,
        }
    }

    /// Whether this tag belongs to the fast latency class.
    ///
    /// Custom tags count as flash when their name mentions it.
    pub fn is_flash(&self) -> bool {
        match self {
            Model::GeminiFlash => true,
            Model::GeminiPro => false,
            Model::Custom(s) => s.to_lowercase().contains("flash"),
        }
    }
}

impl Default for Model {
    /// Returns the default model (Gemini Flash)
    fn default() -> Self {
        Model::GeminiFlash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-flash" | "flash" => Model::GeminiFlash,
            "gemini-pro" | "pro" => Model::GeminiPro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
