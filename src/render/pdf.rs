//! HTML-to-PDF conversion through an external converter
//!
//! The converter is an opaque collaborator invoked as
//! `<command> <input.html> <output.pdf>`. Anything honouring that
//! calling convention works (weasyprint, wkhtmltopdf wrappers, ...).

use std::path::Path;
use std::process::Command;

use crate::core::QuoteError;

/// Convert a rendered HTML file to a PDF at `pdf_path`.
///
/// `command` may carry its own arguments ("weasyprint --quiet"); it is
/// split on whitespace like a shell word list.
pub fn convert(command: &str, html_path: &Path, pdf_path: &Path) -> Result<(), QuoteError> {
    let parts: Vec<&str> = command.split_whitespace().collect();
    let (program, args) = match parts.split_first() {
        Some(split) => split,
        None => {
            return Err(QuoteError::Converter {
                command: command.to_string(),
                detail: "empty converter command".to_string(),
            })
        }
    };

    let output = Command::new(program)
        .args(args)
        .arg(html_path)
        .arg(pdf_path)
        .output()
        .map_err(|e| QuoteError::Converter {
            command: command.to_string(),
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(QuoteError::Converter {
            command: command.to_string(),
            detail: if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            },
        });
    }

    // A converter that exits 0 without producing the file is still a failure
    if !pdf_path.exists() {
        return Err(QuoteError::Converter {
            command: command.to_string(),
            detail: format!("no output produced at {}", pdf_path.display()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cp_satisfies_the_converter_contract() {
        let dir = tempdir().unwrap();
        let html = dir.path().join("q.html");
        let pdf = dir.path().join("q.pdf");
        std::fs::write(&html, "<html></html>").unwrap();

        convert("cp", &html, &pdf).unwrap();
        assert!(pdf.exists());
    }

    #[test]
    fn test_missing_converter_binary() {
        let dir = tempdir().unwrap();
        let html = dir.path().join("q.html");
        std::fs::write(&html, "<html></html>").unwrap();

        let err = convert(
            "definitely-not-a-real-converter-binary",
            &html,
            &dir.path().join("q.pdf"),
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::Converter { .. }));
    }

    #[test]
    fn test_nonzero_exit_carries_detail() {
        let dir = tempdir().unwrap();
        let html = dir.path().join("q.html");
        std::fs::write(&html, "<html></html>").unwrap();

        let err = convert("false", &html, &dir.path().join("q.pdf")).unwrap_err();
        match err {
            QuoteError::Converter { command, .. } => assert_eq!(command, "false"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_command() {
        let dir = tempdir().unwrap();
        let err = convert("  ", &dir.path().join("a"), &dir.path().join("b")).unwrap_err();
        assert!(matches!(err, QuoteError::Converter { .. }));
    }
}
