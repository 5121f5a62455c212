//! Method and constructor declarations.

use std::fmt;

use javadsl_core::{Error, Result};

use crate::{
    AnnotationSpec, CodeBlock, CodeWriter, Modifier, Modifiers, ParameterSpec, TypeName,
    annotation::emit_annotations, modifier::emit_modifiers,
};

/// Reserved method name marking a constructor.
const CONSTRUCTOR: &str = "<init>";

/// A method or constructor.
///
/// # Example
///
/// ```
/// use javadsl_poet::{CodeBlock, MethodSpec, Modifier, ParameterSpec, TypeName};
///
/// let method = MethodSpec::method("twice")
///     .returns(TypeName::INT)
///     .modifiers([Modifier::Public])
///     .parameter(ParameterSpec::new(TypeName::INT, "x"))
///     .code(CodeBlock::text("return x * 2;\n"));
///
/// assert_eq!(method.to_string(), "public int twice(int x) {\n  return x * 2;\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    pub name: String,
    pub return_type: TypeName,
    pub parameters: Vec<ParameterSpec>,
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationSpec>,
    pub exceptions: Vec<TypeName>,
    pub varargs: bool,
    pub code: CodeBlock,
}

impl MethodSpec {
    /// Create a method returning `void`.
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: TypeName::VOID,
            parameters: Vec::new(),
            modifiers: Modifiers::new(),
            annotations: Vec::new(),
            exceptions: Vec::new(),
            varargs: false,
            code: CodeBlock::empty(),
        }
    }

    /// Create a constructor.
    pub fn constructor() -> Self {
        Self::method(CONSTRUCTOR)
    }

    /// Check if this is a constructor.
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR
    }

    /// Set the return type.
    pub fn returns(mut self, return_type: impl Into<TypeName>) -> Self {
        self.return_type = return_type.into();
        self
    }

    /// Add a parameter.
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add multiple parameters.
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = ParameterSpec>) -> Self {
        self.parameters.extend(parameters);
        self
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

    /// Add thrown exception types.
    pub fn exceptions(mut self, exceptions: impl IntoIterator<Item = TypeName>) -> Self {
        self.exceptions.extend(exceptions);
        self
    }

    /// Mark the last parameter as varargs.
    pub fn varargs(mut self, varargs: bool) -> Self {
        self.varargs = varargs;
        self
    }

    /// Set the body.
    pub fn code(mut self, code: CodeBlock) -> Self {
        self.code = code;
        self
    }

    /// Check if the method carries a modifier.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Check the declaration is well formed: a varargs method must end with an
    /// array parameter, and an abstract method has no body.
    pub fn validate(&self) -> Result<()> {
        if self.varargs
            && !matches!(
                self.parameters.last(),
                Some(ParameterSpec {
                    type_name: TypeName::Array(_),
                    ..
                })
            )
        {
            return Err(Error::invalid_argument(format!(
                "last parameter of varargs method '{}' must be an array",
                self.name
            )));
        }
        if self.has_modifier(Modifier::Abstract) && !self.code.is_empty() {
            return Err(Error::invalid_argument(format!(
                "abstract method '{}' cannot have code",
                self.name
            )));
        }
        Ok(())
    }

    pub(crate) fn emit(&self, writer: &mut CodeWriter, enclosing_name: &str) {
        emit_annotations(writer, &self.annotations, false);
        emit_modifiers(writer, &self.modifiers);

        if self.is_constructor() {
            writer.emit(enclosing_name);
        } else {
            writer.emit_type(&self.return_type).emit(" ").emit(&self.name);
        }

        writer.emit("(");
        let last = self.parameters.len().saturating_sub(1);
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                writer.emit(", ");
            }
            parameter.emit(writer, self.varargs && i == last);
        }
        writer.emit(")");

        for (i, exception) in self.exceptions.iter().enumerate() {
            writer.emit(if i == 0 { " throws " } else { ", " });
            writer.emit_type(exception);
        }

        if self.has_modifier(Modifier::Abstract) || self.has_modifier(Modifier::Native) {
            writer.emit(";\n");
            return;
        }

        writer.emit(" {\n");
        writer.indent();
        writer.emit_code(&self.code);
        writer.unindent();
        writer.emit("}\n");
    }
}

impl fmt::Display for MethodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::default();
        self.emit(&mut writer, "Constructor");
        f.write_str(&writer.build())
    }
}
