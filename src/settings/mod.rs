//! Supplier settings - key/value profile plus an optional seal image
//!
//! The settings file is a two-column CSV (key, value). Missing supplier
//! keys read back as empty strings; a missing settings file is fatal.
//! The seal image is the one optional asset: load failure degrades to a
//! warning and an empty value, never an error crossing into rendering.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use console::style;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::core::QuoteError;

/// Static issuer information printed on every generated document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierProfile {
    pub company: String,
    pub ceo: String,
    pub registration_no: String,
    pub address: String,
    pub business_type: String,
    pub business_item: String,
    pub contact: String,
    pub email: String,
    pub fax: String,
    /// data URI of the seal image, empty when absent
    pub seal_image: String,
}

/// Load the supplier profile from a key/value CSV.
///
/// Blank keys are skipped; a duplicated key keeps the last value.
pub fn load_profile(path: &Path) -> Result<SupplierProfile, QuoteError> {
    if !path.exists() {
        return Err(QuoteError::SettingsNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| QuoteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut map = HashMap::new();
    for result in rdr.records() {
        let record = result.map_err(|source| QuoteError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let key = record.get(0).unwrap_or("").trim().to_string();
        if key.is_empty() {
            continue;
        }
        let value = record.get(1).unwrap_or("").trim().to_string();
        map.insert(key, value);
    }

    Ok(profile_from_map(&map))
}

fn profile_from_map(map: &HashMap<String, String>) -> SupplierProfile {
    let get = |key: &str| map.get(key).cloned().unwrap_or_default();
    SupplierProfile {
        company: get("공급자_상호"),
        ceo: get("공급자_대표자"),
        registration_no: get("공급자_등록번호"),
        address: get("공급자_사업장주소"),
        business_type: get("공급자_업태"),
        business_item: get("공급자_종목"),
        contact: get("공급자_연락처"),
        email: get("공급자_이메일"),
        fax: get("공급자_팩스"),
        seal_image: String::new(),
    }
}

/// Load the seal image from the output folder as a data URI.
///
/// Returns an empty string when the file is absent or unreadable; the
/// failure is reported as a warning and generation continues.
pub fn load_seal(folder: &Path, file_name: &str) -> String {
    let path = folder.join(file_name);
    if !path.exists() {
        return String::new();
    }
    match std::fs::read(&path) {
        Ok(bytes) => {
            let mime = mime_for(file_name);
            format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
        }
        Err(e) => {
            eprintln!(
                "{} could not read seal image {}: {}",
                style("!").yellow(),
                style(path.display()).cyan(),
                e
            );
            String::new()
        }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}
