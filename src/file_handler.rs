use anyhow::{Context, Result};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

const TS_EXTENSIONS: [&str; 4] = ["ts", "tsx", "mts", "cts"];

pub struct FileHandler {
    backup_enabled: bool,
}

impl FileHandler {
    pub fn new(backup_enabled: bool) -> Self {
        Self { backup_enabled }
    }

    /// Expands files, directories, and glob patterns into the list of
    /// TypeScript files to lint. Directories are walked recursively,
    /// skipping node_modules and hidden directories.
    pub fn find_typescript_files(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_file() {
                if is_typescript_file(path) {
                    files.push(path.clone());
                }
            } else if path.is_dir() {
                collect_from_dir(path, &mut files)?;
            } else {
                let pattern = path.to_str().context("Invalid path")?;
                for entry in glob(pattern).context("Failed to read glob pattern")? {
                    let file = entry.context("Failed to process glob entry")?;
                    if is_typescript_file(&file) {
                        files.push(file);
                    }
                }
            }
        }

        Ok(files)
    }

    pub fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    pub fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if self.backup_enabled {
            self.create_backup(path)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    fn create_backup(&self, path: &Path) -> Result<()> {
        let backup_path = path.with_extension(format!(
            "{}.bak",
            path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
        ));

        fs::copy(path, &backup_path)
            .with_context(|| format!("Failed to create backup: {}", backup_path.display()))?;

        Ok(())
    }
}

fn collect_from_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).context("Failed to read directory")? {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if path.is_dir() {
            if let Some(name) = path.file_name() {
                let name = name.to_string_lossy();
                if name != "node_modules" && !name.starts_with('.') {
                    collect_from_dir(&path, files)?;
                }
            }
        } else if is_typescript_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_typescript_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TS_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
