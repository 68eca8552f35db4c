use std::fs;
use std::path::PathBuf;

pub fn fixture_path(file_name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(file_name);
    path
}

/// Load `tests/fixtures/<name>.yaml`.
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(&format!("{}.yaml", name));

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture '{}' from {:?}: {}", name, path, e))
}
