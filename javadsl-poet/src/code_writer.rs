//! Indentation-aware emitter for code blocks, types and declarations.

use indexmap::IndexSet;
use javadsl_core::Indent;

use crate::{
    ClassName, CodeBlock, ImportPlan, TypeName,
    code_block::{Part, Value, java_double_string, java_float_string, string_literal},
};

/// Extra indent levels applied to the continuation lines of a statement.
const CONTINUATION_LEVELS: usize = 2;

/// Writes Java source text with indentation tracking.
///
/// Indentation is written lazily, right before the first non-empty text on a
/// line, so blank lines never carry trailing whitespace. Every class name that
/// passes through [`CodeWriter::emit_type`] is recorded; with an
/// [`ImportPlan`] attached, names are spelled the way the plan decides,
/// otherwise they are fully qualified.
///
/// # Example
///
/// ```
/// use javadsl_core::Indent;
/// use javadsl_poet::{CodeBlock, CodeWriter};
///
/// let mut writer = CodeWriter::new(Indent::JAVA);
/// writer.emit("class A {\n").indent();
/// writer.emit_code(&CodeBlock::text("int x;\n"));
/// writer.unindent().emit("}\n");
///
/// assert_eq!(writer.build(), "class A {\n  int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    /// Text written for one indent level
    indent_unit: String,
    indent_level: usize,
    buffer: String,
    at_line_start: bool,
    /// Lines emitted since the outermost open statement began
    statement_line: Option<usize>,
    statement_depth: usize,
    imports: Option<ImportPlan>,
    referenced: IndexSet<ClassName>,
}

impl CodeWriter {
    /// Create a writer that spells every class name fully qualified.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_unit: indent.unit().into_owned(),
            indent_level: 0,
            buffer: String::new(),
            at_line_start: true,
            statement_line: None,
            statement_depth: 0,
            imports: None,
            referenced: IndexSet::new(),
        }
    }

    /// Create a writer that spells class names according to `imports`.
    pub fn with_imports(indent: Indent, imports: ImportPlan) -> Self {
        Self {
            imports: Some(imports),
            ..Self::new(indent)
        }
    }

    /// Emit raw text, indenting each new line.
    pub fn emit(&mut self, text: &str) -> &mut Self {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.buffer.push('\n');
                self.at_line_start = true;
                if let Some(n) = self.statement_line.as_mut() {
                    *n += 1;
                }
            }

            if line.is_empty() {
                continue;
            }
            if self.at_line_start {
                self.write_indent();
                self.at_line_start = false;
            }
            self.buffer.push_str(line);
        }
        self
    }

    /// Emit a code block.
    pub fn emit_code(&mut self, block: &CodeBlock) -> &mut Self {
        for part in &block.parts {
            match part {
                Part::Text(text) => {
                    self.emit(text);
                }
                Part::Literal(value) => self.emit_literal(value),
                Part::StringLiteral(Some(s)) => {
                    self.emit(&string_literal(s));
                }
                Part::StringLiteral(None) => {
                    self.emit("null");
                }
                Part::Type(ty) => {
                    self.emit_type(ty);
                }
                Part::Name(name) => {
                    self.emit(name);
                }
                Part::Indent => {
                    self.indent();
                }
                Part::Unindent => {
                    self.unindent();
                }
                Part::StatementBegin => {
                    if self.statement_depth == 0 {
                        self.statement_line = Some(0);
                    }
                    self.statement_depth += 1;
                }
                Part::StatementEnd => {
                    self.statement_depth = self.statement_depth.saturating_sub(1);
                    if self.statement_depth == 0 {
                        self.statement_line = None;
                    }
                }
            }
        }
        self
    }

    fn emit_literal(&mut self, value: &Value) {
        match value {
            Value::Null => {
                self.emit("null");
            }
            Value::Bool(b) => {
                self.emit(&b.to_string());
            }
            Value::Int(i) => {
                self.emit(&i.to_string());
            }
            Value::Float(f) => {
                self.emit(&java_float_string(*f));
            }
            Value::Double(d) => {
                self.emit(&java_double_string(*d));
            }
            Value::Char(c) => {
                self.emit(&c.to_string());
            }
            Value::Str(s) => {
                self.emit(s);
            }
            Value::Code(block) => {
                self.emit_code(block);
            }
            Value::Type(ty) => {
                self.emit_type(ty);
            }
        }
    }

    /// Emit a type reference.
    pub fn emit_type(&mut self, ty: &TypeName) -> &mut Self {
        match ty {
            TypeName::Primitive(p) => {
                self.emit(p.keyword());
            }
            TypeName::Class(name) => {
                self.emit_class_name(name);
            }
            TypeName::Array(component) => {
                self.emit_type(component).emit("[]");
            }
            TypeName::Parameterized { raw, args } => {
                self.emit_class_name(raw).emit("<");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.emit(", ");
                    }
                    self.emit_type(arg);
                }
                self.emit(">");
            }
            TypeName::Variable(name) => {
                self.emit(name);
            }
        }
        self
    }

    /// Emit a class name and record it as referenced.
    pub fn emit_class_name(&mut self, name: &ClassName) -> &mut Self {
        self.referenced.insert(name.top_level_class_name());
        let spelled = match &self.imports {
            Some(plan) => plan.resolve(name),
            None => name.canonical_name(),
        };
        self.emit(&spelled)
    }

    /// Increase indentation by one level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation by one level.
    pub fn unindent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Top-level classes referenced so far, in first-seen order.
    pub fn referenced(&self) -> impl Iterator<Item = &ClassName> {
        self.referenced.iter()
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let continuation = match self.statement_line {
            Some(n) if n >= 1 => CONTINUATION_LEVELS,
            _ => 0,
        };
        for _ in 0..self.indent_level + continuation {
            self.buffer.push_str(&self.indent_unit);
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(Indent::JAVA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeBlockBuilder;

    #[test]
    fn test_blank_lines_are_not_indented() {
        let mut writer = CodeWriter::default();
        writer.indent().emit("a\n\nb\n");
        assert_eq!(writer.build(), "  a\n\n  b\n");
    }

    #[test]
    fn test_custom_indent() {
        let mut writer = CodeWriter::new(Indent::Tab);
        writer.indent().emit("x;\n");
        assert_eq!(writer.as_str(), "\tx;\n");
    }

    #[test]
    fn test_unindent_saturates() {
        let mut writer = CodeWriter::default();
        writer.unindent().unindent().emit("x");
        assert_eq!(writer.current_indent(), 0);
        assert_eq!(writer.build(), "x");
    }

    #[test]
    fn test_statement_continuation() {
        let mut code = CodeBlockBuilder::new();
        code.add_statement("call(\na,\nb)", []).unwrap();
        code.add_statement("next()", []).unwrap();

        let mut writer = CodeWriter::default();
        writer.indent().emit_code(&code.build());
        assert_eq!(
            writer.build(),
            "  call(\n      a,\n      b);\n  next();\n"
        );
    }

    #[test]
    fn test_nested_statements_share_continuation() {
        let mut inner = CodeBlockBuilder::new();
        inner.add_statement("return 1", []).unwrap();
        let lambda = CodeBlock::of("() -> {\n$>$L$<}", [inner.build().into()]).unwrap();

        let mut code = CodeBlockBuilder::new();
        code.add_statement("run($L)", [lambda.into()]).unwrap();
        code.add_statement("done()", []).unwrap();

        assert_eq!(
            code.build().to_string(),
            "run(() -> {\n      return 1;\n    });\ndone();\n"
        );
    }

    #[test]
    fn test_records_referenced_top_level_classes() {
        let entry = ClassName::get("java.util", "Map", &["Entry"]);
        let file = ClassName::new("java.io", "File");

        let mut writer = CodeWriter::default();
        writer
            .emit_type(&TypeName::parameterized(
                ClassName::new("java.util", "List"),
                [TypeName::from(entry)],
            ))
            .emit_type(&TypeName::array(file.clone()))
            .emit_class_name(&file);

        let referenced: Vec<String> = writer.referenced().map(ClassName::canonical_name).collect();
        assert_eq!(referenced, ["java.util.List", "java.util.Map", "java.io.File"]);
        assert_eq!(
            writer.build(),
            "java.util.List<java.util.Map.Entry>java.io.File[]java.io.File"
        );
    }

    #[test]
    fn test_spells_names_through_import_plan() {
        let list = ClassName::new("java.util", "List");
        let plan = ImportPlan::builder("a.b", [list.clone()]).build();

        let mut writer = CodeWriter::with_imports(Indent::JAVA, plan);
        writer.emit_type(&TypeName::parameterized(list, [TypeName::variable("T")]));
        assert_eq!(writer.build(), "List<T>");
    }

    #[test]
    fn test_literal_values() {
        let block = CodeBlock::of(
            "$L $L $L $L",
            [1.5f64.into(), 2.5f32.into(), 'c'.into(), Value::Null],
        )
        .unwrap();
        assert_eq!(block.to_string(), "1.5 2.5 c null");
    }
}
