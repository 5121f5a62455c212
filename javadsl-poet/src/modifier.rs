//! Java declaration modifiers.

use std::{collections::BTreeSet, fmt};

use crate::CodeWriter;

/// A Java modifier keyword.
///
/// Variants are declared in canonical source order, so an ordered set of
/// modifiers always renders as `public static final` regardless of the order
/// they were added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    /// The Java keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Default => "default",
            Self::Static => "static",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Ordered set of modifiers attached to a declaration.
pub type Modifiers = BTreeSet<Modifier>;

/// Emit each modifier followed by a space.
pub(crate) fn emit_modifiers(writer: &mut CodeWriter, modifiers: &Modifiers) {
    for modifier in modifiers {
        writer.emit(modifier.keyword()).emit(" ");
    }
}
