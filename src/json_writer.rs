use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::StrikeFund;

/// Writes funds as a pretty-printed JSON array (2-space indent, UTF-8,
/// non-ASCII left unescaped). The file handle lives as long as the exporter.
pub struct JsonExporter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl JsonExporter {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        info!("Opened {} for writing", path.display());

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn write_funds(&mut self, funds: &[StrikeFund]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, funds)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        info!("Wrote {} funds to {}", funds.len(), self.path.display());
        Ok(())
    }

    pub fn finalize(mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("failed to flush {}", self.path.display()))?;
        Ok(())
    }
}

pub fn export_to_file(funds: &[StrikeFund], path: impl AsRef<Path>) -> Result<()> {
    let mut exporter = JsonExporter::new(path)?;
    exporter.write_funds(funds)?;
    exporter.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funds::build_records;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("temp dir should be created")
    }

    #[rstest]
    fn exported_file_parses_back_to_same_records(temp_dir: TempDir) {
        let funds = build_records();
        let path = temp_dir.path().join("funds.json");

        export_to_file(&funds, &path).expect("export should succeed");

        let text = fs::read_to_string(&path).expect("output should be readable");
        let parsed: Vec<StrikeFund> = serde_json::from_str(&text).expect("output should parse");
        assert_eq!(parsed, funds);
    }

    #[rstest]
    fn non_ascii_is_written_literally(temp_dir: TempDir) {
        let funds = vec![StrikeFund::thematic(
            "Solidarité Lutte FNME CGT – Fédé « Mines »",
            "https://caisse-solidarite.fr/c/parismusées/",
        )];
        let path = temp_dir.path().join("funds.json");

        export_to_file(&funds, &path).expect("export should succeed");

        let text = fs::read_to_string(&path).expect("output should be readable");
        assert!(text.contains("Solidarité Lutte FNME CGT – Fédé « Mines »"));
        assert!(text.contains("parismusées"));
        assert!(!text.contains("\\u"));
    }

    #[rstest]
    fn output_uses_two_space_indentation(temp_dir: TempDir) {
        let funds = vec![
            StrikeFund::located("FSU Jura", "https://example.org/jura", 46.7, 5.6),
            StrikeFund::thematic("CGT", "https://example.org/cgt"),
        ];
        let path = temp_dir.path().join("funds.json");

        export_to_file(&funds, &path).expect("export should succeed");

        let text = fs::read_to_string(&path).expect("output should be readable");
        let expected = r#"[
  {
    "name": "FSU Jura",
    "url": "https://example.org/jura",
    "lat": 46.7,
    "lng": 5.6
  },
  {
    "name": "CGT",
    "url": "https://example.org/cgt",
    "type": "thematic"
  }
]"#;
        assert_eq!(text, expected);
    }

    #[rstest]
    fn empty_list_writes_empty_array(temp_dir: TempDir) {
        let path = temp_dir.path().join("funds.json");

        export_to_file(&[], &path).expect("export should succeed");

        assert_eq!(fs::read_to_string(&path).expect("readable"), "[]");
    }

    #[rstest]
    fn missing_directory_is_reported(temp_dir: TempDir) {
        let path = temp_dir.path().join("missing").join("funds.json");

        let err = export_to_file(&build_records(), &path).expect_err("export should fail");

        let message = format!("{err:#}");
        assert!(message.contains("failed to create"), "unexpected error: {message}");
        assert!(message.contains("funds.json"), "unexpected error: {message}");
    }
}
