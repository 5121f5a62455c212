//! Field declarations.

use std::fmt;

use crate::{
    AnnotationSpec, CodeBlock, CodeWriter, Modifier, Modifiers, TypeName,
    annotation::emit_annotations, modifier::emit_modifiers,
};

/// A field such as `private static final int MAX = 10;`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub type_name: TypeName,
    pub name: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationSpec>,
    pub initializer: Option<CodeBlock>,
}

impl FieldSpec {
    /// Create a field with no modifiers.
    pub fn new(type_name: impl Into<TypeName>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            modifiers: Modifiers::new(),
            annotations: Vec::new(),
            initializer: None,
        }
    }

    /// Add modifiers.
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Add annotations.
    pub fn annotations(mut self, annotations: impl IntoIterator<Item = AnnotationSpec>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    /// Set the initializer expression.
    pub fn initializer(mut self, initializer: CodeBlock) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Check if the field carries a modifier.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub(crate) fn emit(&self, writer: &mut CodeWriter) {
        emit_annotations(writer, &self.annotations, false);
        emit_modifiers(writer, &self.modifiers);
        writer.emit_type(&self.type_name).emit(" ").emit(&self.name);
        if let Some(initializer) = &self.initializer {
            writer.emit(" = ").emit_code(initializer);
        }
        writer.emit(";\n");
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::default();
        self.emit(&mut writer);
        f.write_str(&writer.build())
    }
}
