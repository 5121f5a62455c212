use javadsl_core::{Result, require_not_blank};
use javadsl_poet::{AnnotationSpec, CodeBlockBuilder, FieldSpec, Modifier, TypeName};

use crate::{Expression, format::ToCodeBlock};

/// Options for [`field_spec`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationSpec>,
    pub initializer: Option<Expression>,
}

impl FieldOptions {
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn annotations(mut self, annotations: impl IntoIterator<Item = AnnotationSpec>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    pub fn initializer(mut self, initializer: Expression) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

/// Declare a field.
///
/// A multi-line initializer is indented one level below the declaration.
///
/// ```
/// use javadsl::{e, field_spec, FieldOptions, Modifier, TypeName};
///
/// let field = field_spec(
///     TypeName::INT,
///     "count",
///     FieldOptions::default()
///         .modifiers([Modifier::Private])
///         .initializer(e!("%L", 0)?),
/// )?;
/// assert_eq!(field.to_string(), "private int count = 0;\n");
/// # Ok::<(), Box<javadsl::Error>>(())
/// ```
pub fn field_spec(
    type_name: impl Into<TypeName>,
    name: &str,
    options: FieldOptions,
) -> Result<FieldSpec> {
    require_not_blank(name, "field name")?;

    let mut field = FieldSpec::new(type_name, name)
        .modifiers(options.modifiers)
        .annotations(options.annotations);

    if let Some(initializer) = options.initializer.filter(|i| !i.is_empty()) {
        let mut code = CodeBlockBuilder::new();
        code.indent()
            .add_block(&initializer.to_code_block())
            .unindent();
        field = field.initializer(code.build());
    }
    Ok(field)
}
