use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a template root populated with `(relative path, source)` pairs.
pub fn template_root(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, source) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, source).unwrap();
    }
    dir
}

/// The template root as a base path string ending in a separator.
pub fn base_path(dir: &Path) -> String {
    format!("{}/", dir.to_str().unwrap())
}
