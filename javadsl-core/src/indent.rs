//! Indentation configuration for generated Java code.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the conventional layout for generated Java.
    pub const JAVA: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const WIDE: Self = Self::Spaces(4);

    /// The text written for one indent level.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(width) => Cow::Owned(" ".repeat(usize::from(*width))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
