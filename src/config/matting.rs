use crate::matting::MattingParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct MattingToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: MattingParams,
    pub output: MattingOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct MattingOutputConfig {
    /// JSON run report (sizes, nnz, invariant checks, timings).
    pub report_json: PathBuf,
    /// Optional dump of the Laplacian diagonal as a normalized grayscale PNG.
    #[serde(default)]
    pub diagonal_png: Option<PathBuf>,
    /// Optional dump of the un-accumulated coordinate list. Large: `k²` entries
    /// per interior pixel.
    #[serde(default)]
    pub triplets_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<MattingToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<MattingToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default_when_omitted() {
        let cfg = parse_config(
            r#"{ "input": "in.png", "output": { "report_json": "out/report.json" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.params, MattingParams::default());
        assert!(cfg.output.triplets_json.is_none());
        assert_eq!(cfg.input, PathBuf::from("in.png"));
    }

    #[test]
    fn params_are_read_from_json() {
        let cfg = parse_config(
            r#"{
                "input": "in.png",
                "params": { "radius": 2, "epsilon": 1e-7 },
                "output": { "report_json": "r.json", "diagonal_png": "d.png" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.params, MattingParams::new(2, 1e-7));
        assert_eq!(cfg.output.diagonal_png, Some(PathBuf::from("d.png")));
    }
}
