//! Method and constructor parameters.

use std::fmt;

use crate::{
    AnnotationSpec, CodeWriter, Modifier, Modifiers, TypeName, annotation::emit_annotations,
    modifier::emit_modifiers,
};

/// A parameter such as `final String name`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub type_name: TypeName,
    pub name: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationSpec>,
}

impl ParameterSpec {
    /// Create a parameter with no modifiers.
    pub fn new(type_name: impl Into<TypeName>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            modifiers: Modifiers::new(),
            annotations: Vec::new(),
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

    /// Emit the parameter. A varargs parameter spells its array type as `T...`.
    pub(crate) fn emit(&self, writer: &mut CodeWriter, varargs: bool) {
        emit_annotations(writer, &self.annotations, true);
        emit_modifiers(writer, &self.modifiers);
        match (&self.type_name, varargs) {
            (TypeName::Array(component), true) => {
                writer.emit_type(component).emit("...");
            }
            (ty, _) => {
                writer.emit_type(ty);
            }
        }
        writer.emit(" ").emit(&self.name);
    }
}

impl fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::default();
        self.emit(&mut writer, false);
        f.write_str(&writer.build())
    }
}
