//! Statement and control-flow builder.
//!
//! A [`CodeBuilder`] appends statements to a [`CodeBlockBuilder`] and keeps
//! at most one control flow open. An `if` stays open so that `else if` and
//! `else` can extend it, a `try` stays open for `catch` and `finally`. Any
//! other declaration closes the open flow first, and so does the end of the
//! body that opened it.

use javadsl_core::{Error, Result, require_not_blank};
use javadsl_poet::{CodeBlock, CodeBlockBuilder, TypeName, Value};

use crate::{IntoExpression, format::ToCodeBlock};

/// Identity of one opened flow within a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FlowId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowState {
    NoFlow,
    If(FlowId),
    Try(FlowId),
}

/// Generate a block of Java code.
///
/// ```
/// use javadsl::{code_block, e, literal, Primitive};
///
/// let block = code_block(|c| {
///     c.v(Primitive::Int, "counter", literal(1), false)?;
///     c.while_decl(e!("%L < 10", "counter"), |c| {
///         c.s("counter += 1")?;
///         Ok(())
///     })?;
///     Ok(())
/// })?;
///
/// assert_eq!(
///     block.to_string(),
///     "int counter = 1;\nwhile (counter < 10) {\n  counter += 1;\n}\n"
/// );
/// # Ok::<(), Box<javadsl::Error>>(())
/// ```
pub fn code_block<F>(body: F) -> Result<CodeBlock>
where
    F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
{
    let mut code = CodeBlockBuilder::new();
    build_body(&mut code, body)?;
    Ok(code.build())
}

/// Run `body` against a fresh builder over `code`, then close its open flow.
pub(crate) fn build_body<F>(code: &mut CodeBlockBuilder, body: F) -> Result<()>
where
    F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
{
    let mut builder = CodeBuilder::new(code);
    body(&mut builder)?;
    builder.close();
    Ok(())
}

/// Accumulates statements and control flow into a code block.
#[derive(Debug)]
pub struct CodeBuilder<'a> {
    code: &'a mut CodeBlockBuilder,
    flow: FlowState,
    next_flow_id: u32,
}

impl<'a> CodeBuilder<'a> {
    /// Write into `code`, starting with no open flow.
    pub fn new(code: &'a mut CodeBlockBuilder) -> Self {
        Self {
            code,
            flow: FlowState::NoFlow,
            next_flow_id: 0,
        }
    }

    /// Close the open flow, if any.
    pub fn close(&mut self) {
        match self.flow {
            FlowState::NoFlow => {}
            FlowState::If(id) | FlowState::Try(id) => {
                tracing::trace!(flow = id.0, "closing flow");
                self.code.end_control_flow();
            }
        }
        self.flow = FlowState::NoFlow;
    }

    fn open_flow(&mut self, state: fn(FlowId) -> FlowState) -> FlowId {
        let id = FlowId(self.next_flow_id);
        self.next_flow_id += 1;
        self.flow = state(id);
        tracing::trace!(flow = id.0, "opened flow");
        id
    }

    fn require_current(&self, expected: FlowState, construct: &str) -> Result<()> {
        if self.flow == expected {
            Ok(())
        } else {
            Err(Error::invalid_state(format!(
                "'{construct}' must directly follow the flow it extends"
            )))
        }
    }

    /// Render a statement: the expression followed by `;` and a line break.
    pub fn statement(&mut self, expression: impl IntoExpression) -> Result<&mut Self> {
        let expression = expression.into_expression()?;
        self.close();
        self.code.add_statement_block(&expression.to_code_block());
        Ok(self)
    }

    /// Short alias for [`statement`](Self::statement).
    pub fn s(&mut self, expression: impl IntoExpression) -> Result<&mut Self> {
        self.statement(expression)
    }

    /// Declare a local variable.
    ///
    /// An empty initializer (`None` or [`Expression::Empty`]) declares the
    /// variable without assigning it.
    ///
    /// [`Expression::Empty`]: crate::Expression::Empty
    pub fn variable_decl(
        &mut self,
        type_name: impl Into<TypeName>,
        name: &str,
        initializer: impl IntoExpression,
        is_final: bool,
    ) -> Result<&mut Self> {
        require_not_blank(name, "variable name")?;
        let initializer = initializer.into_expression()?;

        let mut declaration = CodeBlockBuilder::new();
        if is_final {
            declaration.add_text("final ");
        }
        declaration.add_type(type_name).add_text(" ").add_text(name);
        if !initializer.is_empty() {
            declaration
                .add_text(" = ")
                .add_block(&initializer.to_code_block());
        }

        self.close();
        self.code.add_statement_block(&declaration.build());
        Ok(self)
    }

    /// Short alias for [`variable_decl`](Self::variable_decl).
    pub fn v(
        &mut self,
        type_name: impl Into<TypeName>,
        name: &str,
        initializer: impl IntoExpression,
        is_final: bool,
    ) -> Result<&mut Self> {
        self.variable_decl(type_name, name, initializer, is_final)
    }

    /// Render an `if` block. Chain `else if` and `else` on the returned flow.
    ///
    /// ```
    /// use javadsl::code_block;
    ///
    /// let block = code_block(|c| {
    ///     c.if_decl("a", |c| { c.s("x()")?; Ok(()) })?
    ///         .else_if_decl("b", |c| { c.s("y()")?; Ok(()) })?
    ///         .else_decl(|c| { c.s("z()")?; Ok(()) })?;
    ///     Ok(())
    /// })?;
    /// assert_eq!(
    ///     block.to_string(),
    ///     "if (a) {\n  x();\n} else if (b) {\n  y();\n} else {\n  z();\n}\n"
    /// );
    /// # Ok::<(), Box<javadsl::Error>>(())
    /// ```
    pub fn if_decl<F>(&mut self, condition: impl IntoExpression, body: F) -> Result<IfFlow<'_, 'a>>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        let condition = condition.into_expression()?;
        self.close();

        let id = self.open_flow(FlowState::If);
        self.code
            .begin_control_flow("if ($L)", [Value::Code(condition.to_code_block())])?;
        build_body(self.code, body)?;

        Ok(IfFlow { builder: self, id })
    }

    /// Render a `try` block. Chain `catch` and `finally` on the returned flow.
    pub fn try_decl<F>(&mut self, body: F) -> Result<TryFlow<'_, 'a>>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        self.close();

        let id = self.open_flow(FlowState::Try);
        self.code.begin_control_flow("try", [])?;
        build_body(self.code, body)?;

        Ok(TryFlow { builder: self, id })
    }

    /// Render a `while` loop.
    pub fn while_decl<F>(&mut self, condition: impl IntoExpression, body: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        let condition = condition.into_expression()?;
        self.close();

        self.code
            .begin_control_flow("while ($L)", [Value::Code(condition.to_code_block())])?;
        build_body(self.code, body)?;
        self.code.end_control_flow();
        Ok(self)
    }

    /// Render an enhanced `for` loop. The element variable is declared `final`.
    pub fn for_each_decl<F>(
        &mut self,
        element_type: impl Into<TypeName>,
        element_name: &str,
        collection: impl IntoExpression,
        body: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        require_not_blank(element_name, "loop variable name")?;
        let collection = collection.into_expression()?;
        self.close();

        self.code.begin_control_flow(
            "for (final $T $N : $L)",
            [
                Value::Type(element_type.into()),
                Value::from(element_name),
                Value::Code(collection.to_code_block()),
            ],
        )?;
        build_body(self.code, body)?;
        self.code.end_control_flow();
        Ok(self)
    }

    /// Render an anonymous `{ ... }` block.
    pub fn block_decl<F>(&mut self, body: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        self.close();

        self.code.add_text("{\n").indent();
        let result = build_body(self.code, body);
        self.code.unindent().add_text("}\n");
        result.map(|()| self)
    }

    /// Render a lambda with a block body:
    ///
    /// ```java
    /// (a, b) -> {
    ///   body
    /// }
    /// ```
    ///
    /// No line break follows the closing brace.
    pub fn lambda_decl<F>(&mut self, parameters: &[&str], body: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        self.close();

        self.code
            .add_text(&lambda_parameters(parameters))
            .add_text(" -> {\n")
            .indent();
        let result = build_body(self.code, body);
        self.code.unindent().add_text("}");
        result.map(|()| self)
    }

    /// Render a lambda with an expression body: `(a, b) -> expression`.
    pub fn lambda_expr_decl(
        &mut self,
        parameters: &[&str],
        expression: impl IntoExpression,
    ) -> Result<&mut Self> {
        let expression = expression.into_expression()?;
        self.close();

        self.code
            .add_text(&lambda_parameters(parameters))
            .add_text(" -> ")
            .add_block(&expression.to_code_block());
        Ok(self)
    }

    /// Indent everything `body` writes by one level.
    ///
    /// The indentation is restored even when `body` fails.
    pub fn indent<F>(&mut self, body: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        self.close();

        self.code.indent();
        let result = build_body(self.code, body);
        self.code.unindent();
        result.map(|()| self)
    }

    /// Append raw expression text.
    pub fn write(&mut self, expression: impl IntoExpression) -> Result<&mut Self> {
        let expression = expression.into_expression()?;
        self.close();
        self.code.add_block(&expression.to_code_block());
        Ok(self)
    }

    /// Append raw expression text followed by a line break.
    pub fn writeln(&mut self, expression: impl IntoExpression) -> Result<&mut Self> {
        self.write(expression)?;
        self.code.add_text("\n");
        Ok(self)
    }

    /// Append a line break.
    pub fn newline(&mut self) -> &mut Self {
        self.close();
        self.code.add_text("\n");
        self
    }
}

fn lambda_parameters(parameters: &[&str]) -> String {
    format!("({})", parameters.join(", "))
}

/// An open `if` chain.
#[derive(Debug)]
pub struct IfFlow<'b, 'a> {
    builder: &'b mut CodeBuilder<'a>,
    id: FlowId,
}

impl IfFlow<'_, '_> {
    /// Render an `else if` block. The chain stays open.
    pub fn else_if_decl<F>(&mut self, condition: impl IntoExpression, body: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        self.builder
            .require_current(FlowState::If(self.id), "else if")?;
        let condition = condition.into_expression()?;

        tracing::trace!(flow = self.id.0, "else if");
        self.builder
            .code
            .next_control_flow("else if ($L)", [Value::Code(condition.to_code_block())])?;
        build_body(self.builder.code, body)?;
        Ok(self)
    }

    /// Render the final `else` block. This ends the chain.
    pub fn else_decl<F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        self.builder.require_current(FlowState::If(self.id), "else")?;

        tracing::trace!(flow = self.id.0, "else");
        self.builder.code.next_control_flow("else", [])?;
        build_body(self.builder.code, body)?;
        self.builder.close();
        Ok(())
    }
}

/// An open `try` statement.
#[derive(Debug)]
pub struct TryFlow<'b, 'a> {
    builder: &'b mut CodeBuilder<'a>,
    id: FlowId,
}

impl TryFlow<'_, '_> {
    /// Render a `catch` block. The exception variable is declared `final`;
    /// more than one type renders a multi-catch. The statement stays open.
    pub fn catch_decl<F>(
        &mut self,
        types: impl IntoIterator<Item = impl Into<TypeName>>,
        variable_name: &str,
        body: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        self.builder.require_current(FlowState::Try(self.id), "catch")?;
        require_not_blank(variable_name, "exception variable name")?;

        let mut args: Vec<Value> = types.into_iter().map(|ty| Value::Type(ty.into())).collect();
        if args.is_empty() {
            return Err(Error::invalid_argument(
                "a catch clause needs at least one exception type",
            ));
        }
        let format = format!("catch (final {} $N)", vec!["$T"; args.len()].join(" | "));
        args.push(Value::from(variable_name));

        tracing::trace!(flow = self.id.0, "catch");
        self.builder.code.next_control_flow(&format, args)?;
        build_body(self.builder.code, body)?;
        Ok(self)
    }

    /// Render the `finally` block. This ends the statement.
    pub fn finally_decl<F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        self.builder
            .require_current(FlowState::Try(self.id), "finally")?;

        tracing::trace!(flow = self.id.0, "finally");
        self.builder.code.next_control_flow("finally", [])?;
        build_body(self.builder.code, body)?;
        self.builder.close();
        Ok(())
    }
}
