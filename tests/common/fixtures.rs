//! Test fixtures and constants.

/// Colors written in each supported notation
pub mod colors {
    /// Pure red as hex, upper case
    pub const RED_HEX: &str = "#FF0000";

    /// The rgb() example used throughout the docs
    pub const SAGE_RGB: &str = "rgb(100, 105, 87)";

    /// The hsl() example used throughout the docs
    pub const MINT_HSL: &str = "hsl(110, 80%, 80%)";

    /// Hue out of range
    pub const BAD_HSL: &str = "hsl(400, 80%, 80%)";

    /// Not a color in any notation
    pub const GARBAGE: &str = "not a color";
}

/// Expected palette of `#000000` with five steps
pub const BLACK_PALETTE: [&str; 10] = [
    "#333333", "#666666", "#999999", "#cccccc", "#ffffff", "#000000", "#000000", "#000000",
    "#000000", "#000000",
];

/// Write a config file into a fresh temporary directory.
///
/// The directory is returned so it lives as long as the test needs the file.
pub fn write_config(yaml: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("chromakit.yaml");
    std::fs::write(&path, yaml).expect("Failed to write config");
    (dir, path)
}
