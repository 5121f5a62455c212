use std::path::{Path, PathBuf};

use eyre::WrapErr;
use javadsl_core::{GeneratedFile, RenderConfig, Result, WriteResult};
use javadsl_poet::ClassName;

use crate::ClassSpec;

/// Relative source path of a top-level class: `com/foo/Bar.java`, or
/// `Bar.java` in the default package.
///
/// Nested classes fail with an invalid-structure error.
pub fn java_file_path(class_name: &ClassName) -> Result<PathBuf> {
    class_name.to_file_path()
}

/// Write every class under `output_dir`, laid out according to `config`.
///
/// Returns one [`WriteResult`] per class, in order.
pub fn write_java_files(
    classes: &[ClassSpec],
    output_dir: &Path,
    config: &RenderConfig,
) -> eyre::Result<Vec<WriteResult>> {
    let mut results = Vec::with_capacity(classes.len());
    for class in classes {
        let file = class
            .java_file_builder()
            .map_err(|e| eyre::eyre!(e))?
            .config(config)
            .build();
        let result = file
            .write(output_dir)
            .wrap_err_with(|| format!("failed to write {}", class.class_name))?;
        results.push(result);
    }
    tracing::debug!(count = results.len(), dir = %output_dir.display(), "wrote java files");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use javadsl_core::{Error, Indent};
    use tempfile::TempDir;

    use super::*;
    use crate::{ClassOptions, FieldOptions, class_spec};

    #[test]
    fn test_java_file_path() {
        assert_eq!(
            java_file_path(&ClassName::new("", "Baz")).unwrap(),
            Path::new("Baz.java")
        );
        assert_eq!(
            java_file_path(&ClassName::new("com.foo.bar", "Baz")).unwrap(),
            Path::new("com/foo/bar/Baz.java")
        );

        let err = java_file_path(&ClassName::get("com.foo", "Bar", &["Baz"])).unwrap_err();
        assert!(matches!(*err, Error::InvalidStructure { .. }));
    }

    #[test]
    fn test_write_java_files_uses_config() {
        let dir = TempDir::new().unwrap();
        let holder = class_spec(ClassName::new("com.example", "Holder"), ClassOptions::default(), |b| {
            b.field_decl(ClassName::new("java.lang", "String"), "name", FieldOptions::default())?;
            Ok(())
        })
        .unwrap();
        let config = RenderConfig::default()
            .with_indent(Indent::WIDE)
            .with_skip_java_lang_imports(true);

        let results = write_java_files(&[holder], dir.path(), &config).unwrap();
        assert_eq!(results, [WriteResult::Written]);

        let written = std::fs::read_to_string(dir.path().join("com/example/Holder.java")).unwrap();
        assert_eq!(written, "package com.example;\n\nclass Holder {\n    String name;\n}\n");
    }

    #[test]
    fn test_write_nested_class_fails() {
        let dir = TempDir::new().unwrap();
        let inner = class_spec(
            ClassName::get("com.example", "Outer", &["Inner"]),
            ClassOptions::default(),
            |_| Ok(()),
        )
        .unwrap();
        assert!(write_java_files(&[inner], dir.path(), &RenderConfig::default()).is_err());
    }
}
