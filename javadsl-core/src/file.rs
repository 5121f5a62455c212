use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated source file
pub trait GeneratedFile {
    /// Get the file path relative to the output directory
    fn relative_path(&self) -> PathBuf;

    /// How an existing file at the target path is treated
    fn overwrite(&self) -> Overwrite {
        Overwrite::Always
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Get the absolute file path below `base`
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    /// Write the file below `base`, creating parent directories as needed
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.overwrite() {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    tracing::debug!(path = %path.display(), "skipping existing file");
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote generated file");
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (hand-edited stubs)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct TestFile {
        path: &'static str,
        content: &'static str,
        overwrite: Overwrite,
    }

    impl GeneratedFile for TestFile {
        fn relative_path(&self) -> PathBuf {
            PathBuf::from(self.path)
        }

        fn overwrite(&self) -> Overwrite {
            self.overwrite
        }

        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("Test.java");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Test.java");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let file = TestFile {
            path: "com/foo/Bar.java",
            content: "class Bar {}",
            overwrite: Overwrite::Always,
        };
        let path = file.path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "original").unwrap();

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "class Bar {}");
    }

    #[test]
    fn test_generated_file_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let file = TestFile {
            path: "Bar.java",
            content: "should not write",
            overwrite: Overwrite::IfMissing,
        };
        fs::write(temp.path().join("Bar.java"), "original").unwrap();

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("Bar.java")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_generated_file_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let file = TestFile {
            path: "pkg/New.java",
            content: "new content",
            overwrite: Overwrite::IfMissing,
        };

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("pkg/New.java")).unwrap(),
            "new content"
        );
    }
}
