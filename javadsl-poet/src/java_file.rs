//! Whole Java source files with computed imports.

use std::path::PathBuf;

use javadsl_core::{GeneratedFile, Indent, Overwrite, RenderConfig};

use crate::{ClassName, CodeWriter, ImportPlan, JAVA_EXTENSION, TypeSpec};

/// A top-level type together with its package, ready to render as a file.
///
/// Rendering runs the emitter twice: the first pass collects every referenced
/// class, the second spells names according to the resulting [`ImportPlan`].
///
/// # Example
///
/// ```
/// use javadsl_poet::{ClassName, FieldSpec, JavaFile, TypeSpec};
///
/// let spec = TypeSpec::class("Holder")
///     .field(FieldSpec::new(ClassName::new("java.util", "List"), "items"));
/// let file = JavaFile::builder("com.example", spec).build();
///
/// assert_eq!(
///     file.render(),
///     "package com.example;\n\nimport java.util.List;\n\nclass Holder {\n  List items;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JavaFile {
    pub package_name: String,
    pub type_spec: TypeSpec,
    pub file_comment: Option<String>,
    pub skip_java_lang_imports: bool,
    pub indent: Indent,
    pub overwrite: Overwrite,
}

impl JavaFile {
    /// Start building a file for `type_spec` in `package_name`.
    pub fn builder(package_name: impl Into<String>, type_spec: TypeSpec) -> JavaFileBuilder {
        JavaFileBuilder {
            file: JavaFile {
                package_name: package_name.into(),
                type_spec,
                file_comment: None,
                skip_java_lang_imports: false,
                indent: Indent::JAVA,
                overwrite: Overwrite::Always,
            },
        }
    }

    /// Name of the declared top-level class.
    pub fn class_name(&self) -> ClassName {
        ClassName::new(self.package_name.clone(), self.type_spec.name.clone())
    }

    /// Compute the imports this file needs.
    pub fn import_plan(&self) -> ImportPlan {
        let mut collector = CodeWriter::new(self.indent);
        self.type_spec.emit(&mut collector);

        ImportPlan::builder(self.package_name.clone(), collector.referenced().cloned())
            .declared_type(self.class_name(), self.type_spec.nested_type_names())
            .skip_java_lang_imports(self.skip_java_lang_imports)
            .build()
    }

    /// Render the file: comment, package, imports, then the type.
    pub fn render(&self) -> String {
        let plan = self.import_plan();
        tracing::debug!(
            package = %self.package_name,
            class = %self.type_spec.name,
            imports = plan.len(),
            "rendering java file"
        );

        let mut writer = CodeWriter::with_imports(self.indent, plan.clone());

        if let Some(comment) = &self.file_comment {
            for line in comment.lines() {
                writer.emit("// ").emit(line).emit("\n");
            }
            writer.emit("\n");
        }

        if !self.package_name.is_empty() {
            writer.emit("package ").emit(&self.package_name).emit(";\n\n");
        }

        for import in plan.imports() {
            writer.emit("import ").emit(import).emit(";\n");
        }
        if !plan.is_empty() {
            writer.emit("\n");
        }

        self.type_spec.emit(&mut writer);
        writer.build()
    }

    /// Relative source path: `a/b/c/Name.java`.
    pub fn file_path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .package_name
            .split('.')
            .filter(|s| !s.is_empty())
            .collect();
        path.push(format!("{}.{}", self.type_spec.name, JAVA_EXTENSION));
        path
    }
}

impl GeneratedFile for JavaFile {
    fn relative_path(&self) -> PathBuf {
        self.file_path()
    }

    fn overwrite(&self) -> Overwrite {
        self.overwrite
    }

    fn render(&self) -> String {
        JavaFile::render(self)
    }
}

/// Builder for [`JavaFile`].
#[derive(Debug, Clone)]
pub struct JavaFileBuilder {
    file: JavaFile,
}

impl JavaFileBuilder {
    /// Reference `java.lang` types by simple name without import statements.
    pub fn skip_java_lang_imports(mut self, skip: bool) -> Self {
        self.file.skip_java_lang_imports = skip;
        self
    }

    /// Set the indentation.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.file.indent = indent;
        self
    }

    /// Set a comment emitted at the top of the file.
    pub fn file_comment(mut self, comment: impl Into<String>) -> Self {
        self.file.file_comment = Some(comment.into());
        self
    }

    /// Keep an existing file on disk instead of replacing it.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.file.overwrite = overwrite;
        self
    }

    /// Apply every option from a render configuration.
    pub fn config(mut self, config: &RenderConfig) -> Self {
        self.file.indent = config.indent;
        self.file.skip_java_lang_imports = config.skip_java_lang_imports;
        self.file.file_comment = config.file_comment.clone();
        self
    }

    /// Finish building.
    pub fn build(self) -> JavaFile {
        self.file
    }
}
