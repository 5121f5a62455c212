//! Annotation declarations.

use std::fmt;

use indexmap::IndexMap;
use javadsl_core::Indent;

use crate::{ClassName, CodeBlock, CodeWriter};

/// An annotation such as `@Override` or `@SuppressWarnings("unchecked")`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSpec {
    /// Annotation type.
    pub type_name: ClassName,
    /// Member values, in insertion order. A member with several values renders
    /// as an array initializer.
    pub members: IndexMap<String, Vec<CodeBlock>>,
}

impl AnnotationSpec {
    /// Create an annotation without members.
    pub fn new(type_name: ClassName) -> Self {
        Self {
            type_name,
            members: IndexMap::new(),
        }
    }

    /// Add a value to a member.
    pub fn member(mut self, name: impl Into<String>, value: CodeBlock) -> Self {
        self.members.entry(name.into()).or_default().push(value);
        self
    }

    /// Emit the annotation. Inline annotations stay on one line; otherwise
    /// multiple members are laid out one per line.
    pub(crate) fn emit(&self, writer: &mut CodeWriter, inline: bool) {
        let whitespace = if inline { "" } else { "\n" };
        let separator = if inline { ", " } else { ",\n" };

        writer.emit("@").emit_class_name(&self.type_name);

        if self.members.is_empty() {
            return;
        }

        if self.members.len() == 1
            && let Some(values) = self.members.get("value")
        {
            writer.emit("(");
            emit_values(writer, whitespace, separator, values);
            writer.emit(")");
            return;
        }

        writer.emit("(").emit(whitespace);
        writer.indent().indent();
        for (i, (name, values)) in self.members.iter().enumerate() {
            if i > 0 {
                writer.emit(separator);
            }
            writer.emit(name).emit(" = ");
            emit_values(writer, whitespace, separator, values);
        }
        writer.unindent().unindent();
        writer.emit(whitespace).emit(")");
    }
}

fn emit_values(writer: &mut CodeWriter, whitespace: &str, separator: &str, values: &[CodeBlock]) {
    if let [value] = values {
        writer.indent().indent();
        writer.emit_code(value);
        writer.unindent().unindent();
        return;
    }

    writer.emit("{").emit(whitespace);
    writer.indent().indent();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            writer.emit(separator);
        }
        writer.emit_code(value);
    }
    writer.unindent().unindent();
    writer.emit(whitespace).emit("}");
}

/// Emit annotations on their own lines, or space-separated when inline.
pub(crate) fn emit_annotations(writer: &mut CodeWriter, annotations: &[AnnotationSpec], inline: bool) {
    for annotation in annotations {
        annotation.emit(writer, inline);
        writer.emit(if inline { " " } else { "\n" });
    }
}

impl fmt::Display for AnnotationSpec {
    /// Renders inline with fully qualified type names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::new(Indent::JAVA);
        self.emit(&mut writer, true);
        f.write_str(&writer.build())
    }
}
