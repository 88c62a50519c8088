//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

use crate::quote::totals::Rounding;

/// Header names used to resolve required columns in the sheet export.
///
/// Defaults follow the original sheet vocabulary; deployments whose
/// exports use different header text remap them here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub quote_no: String,
    pub date: String,
    pub company: String,
    pub recipient: String,
    pub item: String,
    pub spec: String,
    pub qty: String,
    pub unit_price: String,
    pub note: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            quote_no: "견적번호".to_string(),
            date: "견적일".to_string(),
            company: "업체명".to_string(),
            recipient: "담당자".to_string(),
            item: "품명".to_string(),
            spec: "공정".to_string(),
            qty: "수량".to_string(),
            unit_price: "단가".to_string(),
            note: "비고".to_string(),
        }
    }
}

/// quotegen configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the sheet export (CSV) holding the quote rows
    pub sheet: Option<PathBuf>,

    /// Path to the supplier settings file (key/value CSV)
    pub settings: Option<PathBuf>,

    /// Directory the output folder is created under
    pub output_root: Option<PathBuf>,

    /// Name of the output folder
    pub folder_name: Option<String>,

    /// File name of the optional seal image inside the output folder
    pub seal_file: Option<String>,

    /// External HTML-to-PDF converter command
    pub pdf_command: Option<String>,

    /// Tax rounding policy
    pub rounding: Option<Rounding>,

    /// Item name marking a row as a discount adjustment
    pub discount_sentinel: Option<String>,

    /// Header-name remapping for required columns
    pub columns: Option<ColumnNames>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/quotegen/quotegen.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Working-directory config (./quotegen.yaml)
        let local_path = PathBuf::from("quotegen.yaml");
        if local_path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&local_path) {
                if let Ok(local) = serde_yml::from_str::<Config>(&contents) {
                    config.merge(local);
                }
            }
        }

        // 4. Environment variables
        if let Ok(sheet) = std::env::var("QUOTEGEN_SHEET") {
            config.sheet = Some(PathBuf::from(sheet));
        }
        if let Ok(output) = std::env::var("QUOTEGEN_OUTPUT") {
            config.output_root = Some(PathBuf::from(output));
        }
        if let Ok(cmd) = std::env::var("QUOTEGEN_PDF_COMMAND") {
            config.pdf_command = Some(cmd);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "quotegen")
            .map(|dirs| dirs.config_dir().join("quotegen.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.sheet.is_some() {
            self.sheet = other.sheet;
        }
        if other.settings.is_some() {
            self.settings = other.settings;
        }
        if other.output_root.is_some() {
            self.output_root = other.output_root;
        }
        if other.folder_name.is_some() {
            self.folder_name = other.folder_name;
        }
        if other.seal_file.is_some() {
            self.seal_file = other.seal_file;
        }
        if other.pdf_command.is_some() {
            self.pdf_command = other.pdf_command;
        }
        if other.rounding.is_some() {
            self.rounding = other.rounding;
        }
        if other.discount_sentinel.is_some() {
            self.discount_sentinel = other.discount_sentinel;
        }
        if other.columns.is_some() {
            self.columns = other.columns;
        }
    }

    pub fn folder_name(&self) -> String {
        self.folder_name
            .clone()
            .unwrap_or_else(|| "견적서".to_string())
    }

    pub fn seal_file(&self) -> String {
        self.seal_file
            .clone()
            .unwrap_or_else(|| "seal.jpeg".to_string())
    }

    pub fn pdf_command(&self) -> String {
        self.pdf_command
            .clone()
            .unwrap_or_else(|| "weasyprint".to_string())
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding.unwrap_or_default()
    }

    pub fn discount_sentinel(&self) -> String {
        self.discount_sentinel
            .clone()
            .unwrap_or_else(|| "할인".to_string())
    }

    pub fn columns(&self) -> ColumnNames {
        self.columns.clone().unwrap_or_default()
    }

    pub fn output_root(&self) -> PathBuf {
        self.output_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.folder_name(), "견적서");
        assert_eq!(config.seal_file(), "seal.jpeg");
        assert_eq!(config.pdf_command(), "weasyprint");
        assert_eq!(config.rounding(), Rounding::HalfUp);
        assert_eq!(config.discount_sentinel(), "할인");
        assert_eq!(config.columns().quote_no, "견적번호");
    }

    #[test]
    fn test_merge_other_takes_precedence() {
        let mut base = Config::default();
        base.folder_name = Some("quotes".to_string());

        let other: Config = serde_yml::from_str("rounding: floor\nfolder_name: out").unwrap();
        base.merge(other);

        assert_eq!(base.folder_name(), "out");
        assert_eq!(base.rounding(), Rounding::Floor);
        // untouched fields keep their defaults
        assert_eq!(base.discount_sentinel(), "할인");
    }

    #[test]
    fn test_column_remap_from_yaml() {
        let config: Config =
            serde_yml::from_str("columns:\n  recipient: 수신자\n  spec: 규격\n").unwrap();
        let columns = config.columns();
        assert_eq!(columns.recipient, "수신자");
        assert_eq!(columns.spec, "규격");
        // unspecified names fall back to the defaults
        assert_eq!(columns.item, "품명");
    }
}
