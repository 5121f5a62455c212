//! Translation from `%` templates to emitter templates.
//!
//! Templates in this crate use `%` as the placeholder marker (`%L`, `%S`,
//! `%T`, `%N`, `%%`) so that `$`, which is common in generated Java
//! identifiers, can be written literally.

use javadsl_poet::{ClassName, CodeBlock, TypeName, Value};

use crate::Expression;

/// Anything that renders to a [`CodeBlock`].
pub trait ToCodeBlock {
    fn to_code_block(&self) -> CodeBlock;
}

impl ToCodeBlock for CodeBlock {
    fn to_code_block(&self) -> CodeBlock {
        self.clone()
    }
}

/// Rewrite a `%` template into the emitter's `$` syntax.
///
/// Scanning left to right: `%%` becomes `%`, `%X` becomes `$X`, a lone
/// trailing `%` becomes `$` and every literal `$` is doubled.
///
/// ```
/// use javadsl::normalize_format;
///
/// assert_eq!(normalize_format("%T.out.println(%S)"), "$T.out.println($S)");
/// assert_eq!(normalize_format("a %% b"), "a % b");
/// assert_eq!(normalize_format("this$0"), "this$$0");
/// ```
pub fn normalize_format(format: &str) -> String {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        match c {
            '$' => out.push_str("$$"),
            '%' => match chars.next() {
                Some('%') => out.push('%'),
                Some(code) => {
                    out.push('$');
                    out.push(code);
                }
                None => out.push('$'),
            },
            c => out.push(c),
        }
    }
    out
}

/// A template argument before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A type reference, resolved at render time.
    Type(TypeName),
    /// Rendered code: expressions and code blocks.
    Code(CodeBlock),
    /// Anything else, passed through unchanged.
    Value(Value),
}

/// Coerce arguments into values the emitter accepts.
pub fn transform_args(args: impl IntoIterator<Item = Arg>) -> Vec<Value> {
    args.into_iter()
        .map(|arg| match arg {
            Arg::Type(ty) => Value::Type(ty),
            Arg::Code(block) => Value::Code(block),
            Arg::Value(value) => value,
        })
        .collect()
}

impl From<TypeName> for Arg {
    fn from(ty: TypeName) -> Self {
        Self::Type(ty)
    }
}

impl From<&TypeName> for Arg {
    fn from(ty: &TypeName) -> Self {
        Self::Type(ty.clone())
    }
}

impl From<ClassName> for Arg {
    fn from(name: ClassName) -> Self {
        Self::Type(name.into())
    }
}

impl From<&ClassName> for Arg {
    fn from(name: &ClassName) -> Self {
        Self::Type(name.into())
    }
}

impl From<CodeBlock> for Arg {
    fn from(block: CodeBlock) -> Self {
        Self::Code(block)
    }
}

impl From<&CodeBlock> for Arg {
    fn from(block: &CodeBlock) -> Self {
        Self::Code(block.clone())
    }
}

impl From<Expression> for Arg {
    fn from(expression: Expression) -> Self {
        Self::Code(expression.to_code_block())
    }
}

impl From<&Expression> for Arg {
    fn from(expression: &Expression) -> Self {
        Self::Code(expression.to_code_block())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! value_args {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

value_args!(&str, String, &String, bool, char, i32, i64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatted;

    #[test]
    fn test_normalize_format() {
        let cases = [
            ("", ""),
            ("%", "$"),
            ("%%", "%"),
            ("%L", "$L"),
            ("$", "$$"),
            ("% %L %N %T %% %%L $$ $ %", "$ $L $N $T % %L $$$$ $$ $"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_format(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_trailing_marker_survives_rendering() {
        assert_eq!(formatted("100%", vec![]).unwrap().to_string(), "100$");
        assert_eq!(formatted("%", vec![]).unwrap().to_string(), "$");
        assert_eq!(
            crate::e!("%L%", 100).unwrap().to_string(),
            "100$"
        );
    }

    #[test]
    fn test_transform_args() {
        let block = CodeBlock::text("a");
        let string = ClassName::new("java.lang", "String");
        let expression = formatted("a", vec![]).unwrap();

        assert_eq!(transform_args(Vec::new()), Vec::new());
        assert_eq!(
            transform_args([
                Arg::from(&string),
                Arg::from(expression),
                Arg::from(block.clone()),
                Arg::from("%L"),
                Arg::from(17),
            ]),
            vec![
                Value::Type(string.into()),
                Value::Code(block.clone()),
                Value::Code(block),
                Value::Str("%L".to_string()),
                Value::Int(17),
            ]
        );
    }
}
