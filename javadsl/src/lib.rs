//! Fluent builder DSL for generating Java source code.
//!
//! Expressions are written as `%` templates (`%L` literal, `%S` string,
//! `%T` type, `%N` name, `%%` percent sign), statements and control flow are
//! appended through a [`CodeBuilder`], and classes are assembled with
//! [`class_spec`]. Type references stay symbolic until a class is rendered as
//! a [`JavaFile`], which computes its imports from the types actually used.
//!
//! # Example
//!
//! ```
//! use javadsl::{
//!     class_spec, e, literal, type_names, ClassName, ClassOptions, FieldOptions, MethodOptions,
//!     Modifier, TypeName,
//! };
//!
//! let counter = class_spec(
//!     ClassName::new("com.example", "Counter"),
//!     ClassOptions::default().modifiers([Modifier::Public, Modifier::Final]),
//!     |b| {
//!         b.field_decl(TypeName::INT, "count", FieldOptions::default().modifiers([Modifier::Private]))?;
//!         b.method_decl("tick", MethodOptions::default().modifiers([Modifier::Public]), |c, _| {
//!             c.if_decl(e!("count == %L", literal(9)), |c| {
//!                 c.s(e!("%T.out.println(%S)", &*type_names::SYSTEM, "wrapped"))?;
//!                 c.s("count = 0")?;
//!                 Ok(())
//!             })?
//!             .else_decl(|c| {
//!                 c.s("count++")?;
//!                 Ok(())
//!             })?;
//!             Ok(())
//!         })?;
//!         Ok(())
//!     },
//! )?;
//!
//! let file = counter.to_java_file(true)?;
//! assert_eq!(
//!     file.render(),
//!     concat!(
//!         "package com.example;\n",
//!         "\n",
//!         "public final class Counter {\n",
//!         "  private int count;\n",
//!         "\n",
//!         "  public void tick() {\n",
//!         "    if (count == 9) {\n",
//!         "      System.out.println(\"wrapped\");\n",
//!         "      count = 0;\n",
//!         "    } else {\n",
//!         "      count++;\n",
//!         "    }\n",
//!         "  }\n",
//!         "}\n",
//!     )
//! );
//! # Ok::<(), Box<javadsl::Error>>(())
//! ```

mod class_spec;
mod code_builder;
mod constructor_spec;
mod expression;
mod field_spec;
mod format;
mod java_file;
mod method_spec;
mod parameter_spec;

pub mod annotations;
pub mod jsr305;
pub mod type_names;

pub use class_spec::{ClassMeta, ClassOptions, ClassSpec, ClassSpecBuilder, class_spec};
pub use code_builder::{CodeBuilder, IfFlow, TryFlow, code_block};
pub use constructor_spec::{ConstructorMeta, ConstructorOptions, constructor_spec};
pub use expression::{
    Expression, ExpressionBuilder, IntoExpression, Operator, ToLiteral, binary_or,
    constructor_invoke, empty_expression, expression_lines, formatted, lambda, lambda_expr,
    literal, literal_null, logical_and, logical_or, method_invoke,
};
pub use field_spec::{FieldOptions, field_spec};
pub use format::{Arg, ToCodeBlock, normalize_format, transform_args};
pub use java_file::{java_file_path, write_java_files};
pub use method_spec::{MethodMeta, MethodOptions, method_spec};
pub use parameter_spec::{ParameterOptions, parameter_spec};

pub use annotations::GeneratedOptions;
pub use javadsl_core::{
    Error, GeneratedFile, Indent, Overwrite, RenderConfig, Result, WriteResult,
};
pub use javadsl_poet::{
    AnnotationSpec, ClassName, CodeBlock, CodeBlockBuilder, FieldSpec, JavaFile, JavaFileBuilder,
    MethodSpec, Modifier, ParameterSpec, Primitive, TypeName, TypeSpec, Value,
};
