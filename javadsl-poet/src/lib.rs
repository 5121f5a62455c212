//! Indentation-aware Java source emission.
//!
//! This crate models Java type references, code fragments with `$`
//! placeholders and declarations (classes, fields, methods, annotations), and
//! renders them as formatted source text. Whole files are rendered through
//! [`JavaFile`], which computes the import list from the types actually
//! referenced.

mod annotation;
mod code_block;
mod code_writer;
mod field;
mod imports;
mod java_file;
mod method;
mod modifier;
mod parameter;
mod type_name;
mod type_spec;

/// File extension of Java sources.
pub const JAVA_EXTENSION: &str = "java";

pub use annotation::AnnotationSpec;
pub use code_block::{
    CodeBlock, CodeBlockBuilder, Value, java_double_string, java_float_string, string_literal,
};
pub use code_writer::CodeWriter;
pub use field::FieldSpec;
pub use imports::{ImportPlan, ImportPlanBuilder};
pub use java_file::{JavaFile, JavaFileBuilder};
pub use method::MethodSpec;
pub use modifier::{Modifier, Modifiers};
pub use parameter::ParameterSpec;
pub use type_name::{ClassName, Primitive, TypeName};
pub use type_spec::TypeSpec;
