//! Class declarations.

use std::fmt;

use crate::{
    AnnotationSpec, CodeBlock, CodeWriter, FieldSpec, MethodSpec, Modifier, Modifiers, TypeName,
    annotation::emit_annotations, modifier::emit_modifiers,
};

/// A class declaration, possibly containing nested classes.
///
/// Members render in a fixed order separated by blank lines: static fields,
/// static initializers, instance fields, instance initializers, constructors,
/// methods, nested types.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    /// Simple name of the class.
    pub name: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationSpec>,
    pub superclass: Option<TypeName>,
    pub superinterfaces: Vec<TypeName>,
    pub fields: Vec<FieldSpec>,
    pub static_blocks: Vec<CodeBlock>,
    pub initializer_blocks: Vec<CodeBlock>,
    pub methods: Vec<MethodSpec>,
    pub types: Vec<TypeSpec>,
}

impl TypeSpec {
    /// Create an empty class.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::new(),
            annotations: Vec::new(),
            superclass: None,
            superinterfaces: Vec::new(),
            fields: Vec::new(),
            static_blocks: Vec::new(),
            initializer_blocks: Vec::new(),
            methods: Vec::new(),
            types: Vec::new(),
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

    /// Set the superclass.
    pub fn superclass(mut self, superclass: impl Into<TypeName>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Add implemented interfaces.
    pub fn superinterfaces(mut self, interfaces: impl IntoIterator<Item = TypeName>) -> Self {
        self.superinterfaces.extend(interfaces);
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a `static { ... }` block.
    pub fn static_block(mut self, code: CodeBlock) -> Self {
        self.static_blocks.push(code);
        self
    }

    /// Add an instance initializer `{ ... }` block.
    pub fn initializer_block(mut self, code: CodeBlock) -> Self {
        self.initializer_blocks.push(code);
        self
    }

    /// Add a method or constructor.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a nested type.
    pub fn nested_type(mut self, spec: TypeSpec) -> Self {
        self.types.push(spec);
        self
    }

    /// Simple names of every type nested in this one, at any depth.
    pub fn nested_type_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for nested in &self.types {
            names.push(nested.name.clone());
            names.extend(nested.nested_type_names());
        }
        names
    }

    pub(crate) fn emit(&self, writer: &mut CodeWriter) {
        emit_annotations(writer, &self.annotations, false);
        emit_modifiers(writer, &self.modifiers);
        writer.emit("class ").emit(&self.name);

        if let Some(superclass) = &self.superclass {
            writer.emit(" extends ").emit_type(superclass);
        }
        for (i, interface) in self.superinterfaces.iter().enumerate() {
            writer.emit(if i == 0 { " implements " } else { ", " });
            writer.emit_type(interface);
        }
        writer.emit(" {\n");
        writer.indent();

        let mut members = Members::default();

        for field in self.fields.iter().filter(|f| f.has_modifier(Modifier::Static)) {
            members.next(writer);
            field.emit(writer);
        }
        if !self.static_blocks.is_empty() {
            members.next(writer);
            for block in &self.static_blocks {
                emit_block(writer, "static {\n", block);
            }
        }
        for field in self.fields.iter().filter(|f| !f.has_modifier(Modifier::Static)) {
            members.next(writer);
            field.emit(writer);
        }
        if !self.initializer_blocks.is_empty() {
            members.next(writer);
            for block in &self.initializer_blocks {
                emit_block(writer, "{\n", block);
            }
        }
        for method in self.methods.iter().filter(|m| m.is_constructor()) {
            members.next(writer);
            method.emit(writer, &self.name);
        }
        for method in self.methods.iter().filter(|m| !m.is_constructor()) {
            members.next(writer);
            method.emit(writer, &self.name);
        }
        for nested in &self.types {
            members.next(writer);
            nested.emit(writer);
        }

        writer.unindent();
        writer.emit("}\n");
    }
}

/// Tracks whether a blank line is needed before the next member.
#[derive(Default)]
struct Members {
    any: bool,
}

impl Members {
    fn next(&mut self, writer: &mut CodeWriter) {
        if self.any {
            writer.emit("\n");
        }
        self.any = true;
    }
}

fn emit_block(writer: &mut CodeWriter, header: &str, code: &CodeBlock) {
    writer.emit(header);
    writer.indent();
    writer.emit_code(code);
    writer.unindent();
    writer.emit("}\n");
}

impl fmt::Display for TypeSpec {
    /// Renders with fully qualified type names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::default();
        self.emit(&mut writer);
        f.write_str(&writer.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassName, ParameterSpec};

    #[test]
    fn test_empty_class() {
        assert_eq!(TypeSpec::class("Foo").to_string(), "class Foo {\n}\n");
    }

    #[test]
    fn test_header() {
        let spec = TypeSpec::class("Foo")
            .modifiers([Modifier::Final, Modifier::Public])
            .superclass(ClassName::new("a", "Base"))
            .superinterfaces([
                TypeName::from(ClassName::new("a", "One")),
                TypeName::from(ClassName::new("a", "Two")),
            ]);
        assert_eq!(
            spec.to_string(),
            "public final class Foo extends a.Base implements a.One, a.Two {\n}\n"
        );
    }

    #[test]
    fn test_member_order() {
        let spec = TypeSpec::class("Foo")
            .method(MethodSpec::method("run"))
            .field(FieldSpec::new(TypeName::INT, "b"))
            .nested_type(TypeSpec::class("Inner"))
            .method(MethodSpec::constructor().parameter(ParameterSpec::new(TypeName::INT, "b")))
            .initializer_block(CodeBlock::text("b = 1;\n"))
            .static_block(CodeBlock::text("A = 2;\n"))
            .field(FieldSpec::new(TypeName::INT, "A").modifiers([Modifier::Static]));

        assert_eq!(
            spec.to_string(),
            "class Foo {\n  static int A;\n\n  static {\n    A = 2;\n  }\n\n  int b;\n\n  {\n    b = 1;\n  }\n\n  Foo(int b) {\n  }\n\n  void run() {\n  }\n\n  class Inner {\n  }\n}\n"
        );
    }

    #[test]
    fn test_nested_type_names() {
        let spec = TypeSpec::class("A")
            .nested_type(TypeSpec::class("B").nested_type(TypeSpec::class("C")))
            .nested_type(TypeSpec::class("D"));
        assert_eq!(spec.nested_type_names(), ["B", "C", "D"]);
    }
}
