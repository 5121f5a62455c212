//! Composable Java expressions.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use javadsl_core::{Error, Result};
use javadsl_poet::{
    ClassName, CodeBlock, CodeBlockBuilder, TypeName, java_double_string, java_float_string,
    string_literal,
};

use crate::{
    Arg, CodeBuilder, code_block,
    format::{ToCodeBlock, normalize_format, transform_args},
};

/// Operand count from which combinators put every operator on a new line.
const COMBINATOR_LINE_BREAK: usize = 3;

/// Parameter count above which invocations put every argument on a new line.
const INVOKE_LINE_BREAK: usize = 3;

/// Binary operators used to join expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `|`
    BinaryOr,
}

impl Operator {
    /// The Java operator token.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::BinaryOr => "|",
        }
    }
}

/// An immutable piece of Java code.
///
/// Expressions compare and hash by their rendered text, so two expressions
/// built differently are equal when they produce the same code.
///
/// # Example
///
/// ```
/// use javadsl::{e, logical_and, Expression};
///
/// let check = logical_and([e!("a != null")?, e!("a.isEmpty()")?])?;
/// assert_eq!(check.to_string(), "a != null && a.isEmpty()");
/// # Ok::<(), Box<javadsl::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub enum Expression {
    /// Code produced from a template and its arguments.
    Formatted(CodeBlock),
    /// Renders nothing.
    #[default]
    Empty,
    /// Two or more operands joined by an operator.
    Combinator {
        operator: Operator,
        operands: Vec<Expression>,
    },
}

impl Expression {
    /// True if the expression renders no code at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Formatted(block) => block.is_empty(),
            Self::Empty => true,
            Self::Combinator { .. } => false,
        }
    }

    /// Build an expression line by line.
    ///
    /// ```
    /// use javadsl::Expression;
    ///
    /// let chain = Expression::build(|b| {
    ///     b.writeln("Type.builder()")?;
    ///     b.indent(|b| {
    ///         b.writeln(".name(n)")?;
    ///         b.write(".build()")?;
    ///         Ok(())
    ///     })?;
    ///     Ok(())
    /// })?;
    /// assert_eq!(chain.to_string(), "Type.builder()\n  .name(n)\n  .build()");
    /// # Ok::<(), Box<javadsl::Error>>(())
    /// ```
    pub fn build<F>(body: F) -> Result<Expression>
    where
        F: FnOnce(&mut ExpressionBuilder) -> Result<()>,
    {
        let mut builder = ExpressionBuilder {
            code: CodeBlockBuilder::new(),
        };
        body(&mut builder)?;
        Ok(builder.code.build().into())
    }

    /// Operands of a combinator with nested combinators of the same operator
    /// spliced in.
    fn flatten(operator: Operator, operands: &[Expression]) -> Vec<&Expression> {
        let mut flat = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Self::Combinator {
                    operator: inner,
                    operands: nested,
                } if *inner == operator => flat.extend(Self::flatten(operator, nested)),
                other => flat.push(other),
            }
        }
        flat
    }
}

impl ToCodeBlock for Expression {
    fn to_code_block(&self) -> CodeBlock {
        match self {
            Self::Formatted(block) => block.clone(),
            Self::Empty => CodeBlock::empty(),
            Self::Combinator { operator, operands } => {
                let operands = Self::flatten(*operator, operands);
                let separator = if operands.len() < COMBINATOR_LINE_BREAK {
                    format!(" {} ", operator.symbol())
                } else {
                    format!("\n{} ", operator.symbol())
                };

                let mut code = CodeBlockBuilder::new();
                for (i, operand) in operands.into_iter().enumerate() {
                    if i > 0 {
                        code.add_text(&separator);
                    }
                    match operand {
                        Self::Formatted(block) => {
                            code.add_block(block);
                        }
                        other => {
                            code.add_text("(")
                                .add_block(&other.to_code_block())
                                .add_text(")");
                        }
                    }
                }
                code.build()
            }
        }
    }
}

impl From<CodeBlock> for Expression {
    fn from(block: CodeBlock) -> Self {
        if block.is_empty() {
            Self::Empty
        } else {
            Self::Formatted(block)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_code_block(), f)
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

/// Conversion accepted wherever an expression is expected.
///
/// Strings are parsed as `%` templates without arguments, and a
/// `Result<Expression>` passes its error through, so the output of [`e!`]
/// can be handed over directly.
///
/// [`e!`]: crate::e
pub trait IntoExpression {
    fn into_expression(self) -> Result<Expression>;
}

impl IntoExpression for Expression {
    fn into_expression(self) -> Result<Expression> {
        Ok(self)
    }
}

impl IntoExpression for &Expression {
    fn into_expression(self) -> Result<Expression> {
        Ok(self.clone())
    }
}

impl IntoExpression for Result<Expression> {
    fn into_expression(self) -> Result<Expression> {
        self
    }
}

impl IntoExpression for Option<Expression> {
    fn into_expression(self) -> Result<Expression> {
        Ok(self.unwrap_or_default())
    }
}

impl IntoExpression for &str {
    fn into_expression(self) -> Result<Expression> {
        formatted(self, Vec::new())
    }
}

impl IntoExpression for String {
    fn into_expression(self) -> Result<Expression> {
        formatted(&self, Vec::new())
    }
}

impl IntoExpression for CodeBlock {
    fn into_expression(self) -> Result<Expression> {
        Ok(self.into())
    }
}

/// Format Java code as an expression.
///
/// Returns [`Expression::Empty`] for an empty template without arguments.
/// Prefer the [`e!`](crate::e) macro, which converts each argument for you.
/// Template errors quote `format` as written, with `%` markers.
pub fn formatted(format: &str, args: Vec<Arg>) -> Result<Expression> {
    if format.is_empty() && args.is_empty() {
        return Ok(Expression::Empty);
    }
    let block = CodeBlock::of(&normalize_format(format), transform_args(args)).map_err(|err| {
        match *err {
            Error::TemplateMismatch { message, .. } => {
                Error::template_mismatch(format, message.replace('$', "%"))
            }
            other => Box::new(other),
        }
    })?;
    Ok(Expression::Formatted(block))
}

/// Format Java code as an expression, converting each argument with
/// [`Arg::from`].
///
/// ```
/// use javadsl::{e, type_names};
///
/// let call = e!("%T.out.println(%S)", type_names::SYSTEM.clone(), "hi")?;
/// assert_eq!(call.to_string(), "java.lang.System.out.println(\"hi\")");
/// # Ok::<(), Box<javadsl::Error>>(())
/// ```
#[macro_export]
macro_rules! e {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::formatted($format, vec![$($crate::Arg::from($arg)),*])
    };
}

/// Alias for [`e!`].
#[macro_export]
macro_rules! expr {
    ($($tt:tt)*) => {
        $crate::e!($($tt)*)
    };
}

/// The empty expression.
pub fn empty_expression() -> Expression {
    Expression::Empty
}

/// Incremental construction of a multi-line expression.
#[derive(Debug)]
pub struct ExpressionBuilder {
    code: CodeBlockBuilder,
}

impl ExpressionBuilder {
    /// Append code.
    pub fn write(&mut self, expression: impl IntoExpression) -> Result<&mut Self> {
        let expression = expression.into_expression()?;
        self.code.add_block(&expression.to_code_block());
        Ok(self)
    }

    /// Append code followed by a line break.
    pub fn writeln(&mut self, expression: impl IntoExpression) -> Result<&mut Self> {
        self.write(expression)?;
        Ok(self.newline())
    }

    /// Append a line break.
    pub fn newline(&mut self) -> &mut Self {
        self.code.add_text("\n");
        self
    }

    /// Indent the lines written by `body` one level. The level is restored
    /// even when `body` fails.
    pub fn indent<F>(&mut self, body: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ExpressionBuilder) -> Result<()>,
    {
        self.code.indent();
        let result = body(self);
        self.code.unindent();
        result.map(|()| self)
    }
}

/// Join lines into one expression, indenting every line after the first.
///
/// Useful for fluent call chains.
pub fn expression_lines(lines: impl IntoIterator<Item = Expression>) -> Expression {
    let mut lines = lines.into_iter();
    let Some(first) = lines.next() else {
        return Expression::Empty;
    };
    let rest: Vec<Expression> = lines.collect();
    if rest.is_empty() {
        return first;
    }

    let mut code = CodeBlockBuilder::new();
    code.add_block(&first.to_code_block()).indent();
    for line in &rest {
        code.add_text("\n").add_block(&line.to_code_block());
    }
    code.unindent();
    code.build().into()
}

fn combine(operator: Operator, expressions: impl IntoIterator<Item = Expression>) -> Result<Expression> {
    let mut operands: Vec<Expression> = expressions.into_iter().collect();
    match operands.len() {
        0 => Err(Error::invalid_argument(format!(
            "cannot join an empty list of expressions with '{}'",
            operator.symbol()
        ))),
        1 => Ok(operands.remove(0)),
        _ => Ok(Expression::Combinator { operator, operands }),
    }
}

/// Join expressions with `&&`.
///
/// A single expression is returned unchanged; an empty list is an invalid
/// argument.
pub fn logical_and(expressions: impl IntoIterator<Item = Expression>) -> Result<Expression> {
    combine(Operator::LogicalAnd, expressions)
}

/// Join expressions with `||`.
pub fn logical_or(expressions: impl IntoIterator<Item = Expression>) -> Result<Expression> {
    combine(Operator::LogicalOr, expressions)
}

/// Join expressions with `|`.
pub fn binary_or(expressions: impl IntoIterator<Item = Expression>) -> Result<Expression> {
    combine(Operator::BinaryOr, expressions)
}

/// Invoke a method: `target(a, b)`.
///
/// With more than three parameters each one goes on its own indented line.
pub fn method_invoke(
    target: impl IntoExpression,
    parameters: impl IntoIterator<Item = Expression>,
) -> Result<Expression> {
    let target = target.into_expression()?;
    let parameters: Vec<Expression> = parameters.into_iter().collect();

    let mut code = CodeBlockBuilder::new();
    code.add_block(&target.to_code_block()).add_text("(").indent();

    let separator = if parameters.len() > INVOKE_LINE_BREAK {
        code.add_text("\n");
        ",\n"
    } else {
        ", "
    };
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            code.add_text(separator);
        }
        code.add_block(&parameter.to_code_block());
    }

    code.unindent().add_text(")");
    Ok(code.build().into())
}

/// Invoke a constructor: `new Type(a, b)`.
pub fn constructor_invoke(
    type_name: impl Into<TypeName>,
    parameters: impl IntoIterator<Item = Expression>,
) -> Result<Expression> {
    let mut target = CodeBlockBuilder::new();
    target.add_text("new ").add_type(type_name);
    method_invoke(target.build(), parameters)
}

/// A lambda with a block body: `(a, b) -> { ... }`, without a trailing line
/// break.
pub fn lambda<F>(parameters: &[&str], body: F) -> Result<Expression>
where
    F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
{
    let block = code_block(|c| {
        c.lambda_decl(parameters, body)?;
        Ok(())
    })?;
    Ok(block.into())
}

/// A lambda with an expression body: `(a, b) -> expr`.
pub fn lambda_expr(parameters: &[&str], expression: impl IntoExpression) -> Result<Expression> {
    let expression = expression.into_expression()?;
    let block = code_block(|c| {
        c.lambda_expr_decl(parameters, expression)?;
        Ok(())
    })?;
    Ok(block.into())
}

/// Values that have a Java literal form.
pub trait ToLiteral {
    fn to_literal(&self) -> Expression;
}

/// Render a value as a Java literal.
///
/// ```
/// use javadsl::literal;
///
/// assert_eq!(literal("a\"b").to_string(), "\"a\\\"b\"");
/// assert_eq!(literal(7i64).to_string(), "7L");
/// assert_eq!(literal(0.5).to_string(), "0.5D");
/// assert_eq!(literal('\n').to_string(), "'\\n'");
/// ```
pub fn literal(value: impl ToLiteral) -> Expression {
    value.to_literal()
}

/// The `null` literal.
pub fn literal_null() -> Expression {
    text("null")
}

fn text(code: impl Into<String>) -> Expression {
    CodeBlock::text(code).into()
}

fn constant(owner: &str, name: &str) -> Expression {
    let mut code = CodeBlockBuilder::new();
    code.add_type(ClassName::new("java.lang", owner))
        .add_text(".")
        .add_text(name);
    code.build().into()
}

impl<T: ToLiteral + ?Sized> ToLiteral for &T {
    fn to_literal(&self) -> Expression {
        (**self).to_literal()
    }
}

impl ToLiteral for str {
    fn to_literal(&self) -> Expression {
        text(string_literal(self))
    }
}

impl ToLiteral for String {
    fn to_literal(&self) -> Expression {
        self.as_str().to_literal()
    }
}

impl ToLiteral for char {
    fn to_literal(&self) -> Expression {
        match self {
            '\n' => text("'\\n'"),
            '\r' => text("'\\r'"),
            '\'' => text("'\\''"),
            '\\' => text("'\\\\'"),
            c => text(format!("'{c}'")),
        }
    }
}

impl ToLiteral for bool {
    fn to_literal(&self) -> Expression {
        text(self.to_string())
    }
}

macro_rules! int_literals {
    ($($ty:ty),*) => {
        $(
            impl ToLiteral for $ty {
                fn to_literal(&self) -> Expression {
                    text(self.to_string())
                }
            }
        )*
    };
}

int_literals!(i8, i16, i32);

impl ToLiteral for i64 {
    fn to_literal(&self) -> Expression {
        text(format!("{self}L"))
    }
}

impl ToLiteral for f64 {
    fn to_literal(&self) -> Expression {
        if self.is_nan() {
            constant("Double", "NaN")
        } else if *self == f64::INFINITY {
            constant("Double", "POSITIVE_INFINITY")
        } else if *self == f64::NEG_INFINITY {
            constant("Double", "NEGATIVE_INFINITY")
        } else {
            text(format!("{}D", java_double_string(*self)))
        }
    }
}

impl ToLiteral for f32 {
    fn to_literal(&self) -> Expression {
        if self.is_nan() {
            constant("Float", "NaN")
        } else if *self == f32::INFINITY {
            constant("Float", "POSITIVE_INFINITY")
        } else if *self == f32::NEG_INFINITY {
            constant("Float", "NEGATIVE_INFINITY")
        } else {
            text(format!("{}F", java_float_string(*self)))
        }
    }
}
