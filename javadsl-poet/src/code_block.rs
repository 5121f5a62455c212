//! Code blocks with `$` placeholders.
//!
//! A [`CodeBlock`] is an immutable list of parts produced by parsing a format
//! string against its arguments. Supported placeholders:
//!
//! | Marker | Meaning |
//! |--------|---------|
//! | `$L`   | literal: text, numbers, nested code blocks, types |
//! | `$S`   | string literal, quoted and escaped (`null` for [`Value::Null`]) |
//! | `$T`   | type reference, shortened when imported |
//! | `$N`   | identifier |
//! | `$$`   | a literal dollar sign |
//! | `$>` / `$<` | increase / decrease indentation |
//! | `$[` / `$]` | begin / end a statement (continuation lines are indented) |

use std::fmt;

use javadsl_core::{Error, Indent, Result};

use crate::{ClassName, CodeWriter, TypeName};

/// An argument supplied for a placeholder.
///
/// The placeholder decides how the value is interpreted; a value of the
/// wrong kind for its placeholder is a template mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Str(String),
    Code(CodeBlock),
    Type(TypeName),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
            Self::Code(_) => "code block",
            Self::Type(_) => "type",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Self::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Double(f)
    }
}

impl From<CodeBlock> for Value {
    fn from(block: CodeBlock) -> Self {
        Self::Code(block)
    }
}

impl From<&CodeBlock> for Value {
    fn from(block: &CodeBlock) -> Self {
        Self::Code(block.clone())
    }
}

impl From<TypeName> for Value {
    fn from(ty: TypeName) -> Self {
        Self::Type(ty)
    }
}

impl From<&TypeName> for Value {
    fn from(ty: &TypeName) -> Self {
        Self::Type(ty.clone())
    }
}

impl From<ClassName> for Value {
    fn from(name: ClassName) -> Self {
        Self::Type(TypeName::Class(name))
    }
}

impl From<&ClassName> for Value {
    fn from(name: &ClassName) -> Self {
        Self::Type(TypeName::Class(name.clone()))
    }
}

/// A parsed piece of a code block.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Part {
    Text(String),
    Literal(Value),
    StringLiteral(Option<String>),
    Type(TypeName),
    Name(String),
    Indent,
    Unindent,
    StatementBegin,
    StatementEnd,
}

/// An immutable fragment of Java code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeBlock {
    pub(crate) parts: Vec<Part>,
}

impl CodeBlock {
    /// Parse a format string against its arguments.
    ///
    /// ```
    /// use javadsl_poet::{ClassName, CodeBlock, Value};
    ///
    /// let list = ClassName::new("java.util", "List");
    /// let block = CodeBlock::of("$T<$L> $N", [Value::from(list), "String".into(), "names".into()]).unwrap();
    /// assert_eq!(block.to_string(), "java.util.List<String> names");
    /// ```
    pub fn of(format: &str, args: impl IntoIterator<Item = Value>) -> Result<Self> {
        let mut builder = CodeBlockBuilder::new();
        builder.add(format, args)?;
        Ok(builder.build())
    }

    /// A block containing only plain text, with no placeholders parsed.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        let parts = if text.is_empty() {
            Vec::new()
        } else {
            vec![Part::Text(text)]
        };
        Self { parts }
    }

    /// The empty code block.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if the block contains nothing at all.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Start a builder seeded with this block's contents.
    pub fn to_builder(&self) -> CodeBlockBuilder {
        CodeBlockBuilder {
            parts: self.parts.clone(),
        }
    }

    /// Join blocks with a separator.
    pub fn join(blocks: impl IntoIterator<Item = CodeBlock>, separator: &str) -> CodeBlock {
        let mut builder = CodeBlockBuilder::new();
        for (i, block) in blocks.into_iter().enumerate() {
            if i > 0 {
                builder.add_text(separator);
            }
            builder.add_block(&block);
        }
        builder.build()
    }
}

impl fmt::Display for CodeBlock {
    /// Renders with fully qualified type names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::new(Indent::JAVA);
        writer.emit_code(self);
        f.write_str(&writer.build())
    }
}

/// Mutable accumulator for a [`CodeBlock`].
///
/// # Example
///
/// ```
/// use javadsl_poet::CodeBlockBuilder;
///
/// let mut code = CodeBlockBuilder::new();
/// code.begin_control_flow("if (ready)", []).unwrap();
/// code.add_statement("go()", []).unwrap();
/// code.end_control_flow();
///
/// assert_eq!(code.build().to_string(), "if (ready) {\n  go();\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBlockBuilder {
    parts: Vec<Part>,
}

impl CodeBlockBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parse and append a format string.
    pub fn add(&mut self, format: &str, args: impl IntoIterator<Item = Value>) -> Result<&mut Self> {
        let parts = parse(format, args.into_iter().collect())?;
        self.parts.extend(parts);
        Ok(self)
    }

    /// Append plain text, without parsing placeholders.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.parts.push(Part::Text(text.to_string()));
        }
        self
    }

    /// Append a type reference, as `$T` would.
    pub fn add_type(&mut self, ty: impl Into<TypeName>) -> &mut Self {
        self.parts.push(Part::Type(ty.into()));
        self
    }

    /// Append the contents of another block.
    pub fn add_block(&mut self, block: &CodeBlock) -> &mut Self {
        self.parts.extend(block.parts.iter().cloned());
        self
    }

    /// Append a statement: the formatted code followed by `;` and a line break.
    pub fn add_statement(
        &mut self,
        format: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<&mut Self> {
        let parts = parse(format, args.into_iter().collect())?;
        self.parts.push(Part::StatementBegin);
        self.parts.extend(parts);
        self.parts.push(Part::Text(";\n".to_string()));
        self.parts.push(Part::StatementEnd);
        Ok(self)
    }

    /// Append a prebuilt block as a statement.
    pub fn add_statement_block(&mut self, block: &CodeBlock) -> &mut Self {
        self.parts.push(Part::StatementBegin);
        self.add_block(block);
        self.parts.push(Part::Text(";\n".to_string()));
        self.parts.push(Part::StatementEnd);
        self
    }

    /// Open a control flow: `format {` and one more level of indentation.
    pub fn begin_control_flow(
        &mut self,
        format: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<&mut Self> {
        let parts = parse(format, args.into_iter().collect())?;
        self.parts.extend(parts);
        self.parts.push(Part::Text(" {\n".to_string()));
        self.parts.push(Part::Indent);
        Ok(self)
    }

    /// Continue a control flow: `} format {`, e.g. `} else {`.
    pub fn next_control_flow(
        &mut self,
        format: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<&mut Self> {
        let parts = parse(format, args.into_iter().collect())?;
        self.parts.push(Part::Unindent);
        self.parts.push(Part::Text("} ".to_string()));
        self.parts.extend(parts);
        self.parts.push(Part::Text(" {\n".to_string()));
        self.parts.push(Part::Indent);
        Ok(self)
    }

    /// Close a control flow with `}`.
    pub fn end_control_flow(&mut self) -> &mut Self {
        self.parts.push(Part::Unindent);
        self.parts.push(Part::Text("}\n".to_string()));
        self
    }

    /// Increase indentation for the code that follows.
    pub fn indent(&mut self) -> &mut Self {
        self.parts.push(Part::Indent);
        self
    }

    /// Decrease indentation for the code that follows.
    pub fn unindent(&mut self) -> &mut Self {
        self.parts.push(Part::Unindent);
        self
    }

    /// Finish building.
    pub fn build(&self) -> CodeBlock {
        CodeBlock {
            parts: self.parts.clone(),
        }
    }
}

/// Parse `format` into parts, consuming `args` in order.
fn parse(format: &str, args: Vec<Value>) -> Result<Vec<Part>> {
    let mismatch = |message: String| Error::template_mismatch(format, message);

    let expected = count_placeholders(format);
    if expected != args.len() {
        return Err(mismatch(format!(
            "expected {} argument{}, got {}",
            expected,
            if expected == 1 { "" } else { "s" },
            args.len()
        )));
    }

    let mut parts = Vec::new();
    let mut text = String::new();
    let mut args = args.into_iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            text.push(c);
            continue;
        }

        let Some(code) = chars.next() else {
            // A dangling `$` at the very end is kept as text.
            text.push('$');
            break;
        };

        let marker = match code {
            '$' => {
                text.push('$');
                continue;
            }
            '>' => Part::Indent,
            '<' => Part::Unindent,
            '[' => Part::StatementBegin,
            ']' => Part::StatementEnd,
            'L' | 'S' | 'T' | 'N' => {
                // Counted above, so an argument is always available here.
                let Some(arg) = args.next() else {
                    return Err(mismatch("not enough arguments".to_string()));
                };
                substitution(code, arg).map_err(mismatch)?
            }
            other => {
                return Err(mismatch(format!("unknown placeholder '${other}'")));
            }
        };

        if !text.is_empty() {
            parts.push(Part::Text(std::mem::take(&mut text)));
        }
        parts.push(marker);
    }

    if !text.is_empty() {
        parts.push(Part::Text(text));
    }
    Ok(parts)
}

fn count_placeholders(format: &str) -> usize {
    let mut count = 0;
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c == '$' && matches!(chars.next(), Some('L' | 'S' | 'T' | 'N')) {
            count += 1;
        }
    }
    count
}

/// Interpret one argument according to its placeholder code.
fn substitution(code: char, arg: Value) -> std::result::Result<Part, String> {
    match (code, arg) {
        ('L', value) => Ok(Part::Literal(value)),
        ('S', Value::Null) => Ok(Part::StringLiteral(None)),
        ('S', Value::Str(s)) => Ok(Part::StringLiteral(Some(s))),
        ('S', Value::Char(c)) => Ok(Part::StringLiteral(Some(c.to_string()))),
        ('T', Value::Type(ty)) => Ok(Part::Type(ty)),
        ('N', Value::Str(name)) => Ok(Part::Name(name)),
        (code, value) => Err(format!(
            "${code} does not accept a {} argument",
            value.kind()
        )),
    }
}

/// Quote and escape a string the way `javac` reads it back.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Format a double the way `java.lang.Double.toString` does.
pub fn java_double_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let abs = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&abs) {
        decimal_form(format!("{value}"))
    } else {
        scientific_form(format!("{value:e}"))
    }
}

/// Format a float the way `java.lang.Float.toString` does.
pub fn java_float_string(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let abs = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&abs) {
        decimal_form(format!("{value}"))
    } else {
        scientific_form(format!("{value:e}"))
    }
}

fn decimal_form(s: String) -> String {
    if s.contains('.') { s } else { s + ".0" }
}

fn scientific_form(s: String) -> String {
    match s.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: &str, args: Vec<Value>) -> String {
        CodeBlock::of(format, args).unwrap().to_string()
    }

    #[test]
    fn test_literal_and_name() {
        assert_eq!(render("$L = $N", vec!["int x".into(), "y".into()]), "int x = y");
        assert_eq!(render("$L", vec![17.into()]), "17");
        assert_eq!(render("$L", vec![true.into()]), "true");
        assert_eq!(render("$L", vec![Value::Null]), "null");
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(render("$S", vec!["a \"b\"\n".into()]), "\"a \\\"b\\\"\\n\"");
        assert_eq!(render("$S", vec![Value::Null]), "null");
        assert_eq!(string_literal("\u{1}"), "\"\\u0001\"");
        assert_eq!(string_literal("tab\there"), "\"tab\\there\"");
    }

    #[test]
    fn test_type_placeholder() {
        let ty = ClassName::new("java.io", "File");
        assert_eq!(render("new $T()", vec![ty.into()]), "new java.io.File()");
    }

    #[test]
    fn test_dollar_escape() {
        assert_eq!(render("a$$b", vec![]), "a$b");
        assert_eq!(render("cost $", vec![]), "cost $");
    }

    #[test]
    fn test_nested_code_block() {
        let inner = CodeBlock::of("$L + $L", [1.into(), 2.into()]).unwrap();
        assert_eq!(render("($L)", vec![inner.into()]), "(1 + 2)");
    }

    #[test]
    fn test_argument_count_mismatch() {
        let err = CodeBlock::of("$L $L", ["a".into()]).unwrap_err();
        assert!(matches!(*err, Error::TemplateMismatch { .. }));
        assert_eq!(err.to_string(), "format '$L $L': expected 2 arguments, got 1");

        let err = CodeBlock::of("plain", ["extra".into()]).unwrap_err();
        assert!(matches!(*err, Error::TemplateMismatch { .. }));
    }

    #[test]
    fn test_argument_kind_mismatch() {
        let err = CodeBlock::of("$T", ["String".into()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "format '$T': $T does not accept a string argument"
        );
        assert!(CodeBlock::of("$N", [1.into()]).is_err());
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = CodeBlock::of("$X", []).unwrap_err();
        assert_eq!(err.to_string(), "format '$X': unknown placeholder '$X'");
    }

    #[test]
    fn test_control_flow() {
        let mut code = CodeBlockBuilder::new();
        code.begin_control_flow("if ($L)", ["a".into()]).unwrap();
        code.add_statement("x()", []).unwrap();
        code.next_control_flow("else", []).unwrap();
        code.add_statement("y()", []).unwrap();
        code.end_control_flow();

        assert_eq!(
            code.build().to_string(),
            "if (a) {\n  x();\n} else {\n  y();\n}\n"
        );
    }

    #[test]
    fn test_statement_continuation_indent() {
        let mut code = CodeBlockBuilder::new();
        code.add_statement("foo(\n1)", []).unwrap();
        assert_eq!(code.build().to_string(), "foo(\n    1);\n");
    }

    #[test]
    fn test_empty_and_join() {
        assert!(CodeBlock::empty().is_empty());
        assert!(CodeBlock::text("").is_empty());
        assert!(CodeBlock::of("", []).unwrap().is_empty());

        let joined = CodeBlock::join([CodeBlock::text("a"), CodeBlock::text("b")], ", ");
        assert_eq!(joined.to_string(), "a, b");
    }

    #[test]
    fn test_add_type() {
        let mut code = CodeBlockBuilder::new();
        code.add_type(ClassName::new("java.lang", "Double")).add_text(".NaN");
        assert_eq!(code.build().to_string(), "java.lang.Double.NaN");
    }

    #[test]
    fn test_java_double_string() {
        assert_eq!(java_double_string(0.0), "0.0");
        assert_eq!(java_double_string(-0.1), "-0.1");
        assert_eq!(java_double_string(1.0), "1.0");
        assert_eq!(java_double_string(1234.5), "1234.5");
        assert_eq!(java_double_string(1e7), "1.0E7");
        assert_eq!(java_double_string(1e-4), "1.0E-4");
        assert_eq!(java_double_string(f64::MAX), "1.7976931348623157E308");
    }

    #[test]
    fn test_java_float_string() {
        assert_eq!(java_float_string(0.1), "0.1");
        assert_eq!(java_float_string(0.0), "0.0");
        assert_eq!(java_float_string(f32::MAX), "3.4028235E38");
    }
}
