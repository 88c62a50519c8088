//! `quotegen init` command - scaffold config and settings files

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

const CONFIG_TEMPLATE: &str = r#"# quotegen configuration
# Every key is optional; the values shown are the defaults.

# Sheet export (CSV) holding the quote rows
# sheet: quotes.csv

# Supplier settings file (default: settings.csv next to the sheet)
# settings: settings.csv

# Where the output folder is created
# output_root: .
# folder_name: 견적서

# Seal image looked up inside the output folder (optional asset)
# seal_file: seal.jpeg

# External HTML-to-PDF converter, invoked as `<command> <in.html> <out.pdf>`
# pdf_command: weasyprint

# Tax rounding policy: half-up or floor
# rounding: half-up

# Item name marking a discount adjustment row
# discount_sentinel: 할인

# Remap required column headers if your export uses different names
# columns:
#   quote_no: 견적번호
#   date: 견적일
#   company: 업체명
#   recipient: 담당자
#   item: 품명
#   spec: 공정
#   qty: 수량
#   unit_price: 단가
#   note: 비고
"#;

const SETTINGS_TEMPLATE: &str = "\
공급자_상호,
공급자_대표자,
공급자_등록번호,
공급자_사업장주소,
공급자_업태,
공급자_종목,
공급자_연락처,
공급자_이메일,
공급자_팩스,
";

pub fn run(args: InitArgs) -> Result<()> {
    let path = if args.path.as_os_str() == "." {
        std::env::current_dir().into_diagnostic()?
    } else {
        args.path.clone()
    };

    if !path.exists() {
        std::fs::create_dir_all(&path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }

    scaffold(&path.join("quotegen.yaml"), CONFIG_TEMPLATE, args.force)?;
    scaffold(&path.join("settings.csv"), SETTINGS_TEMPLATE, args.force)?;

    println!();
    println!("Next steps:");
    println!(
        "  {} Fill in the supplier profile",
        style("settings.csv").yellow()
    );
    println!(
        "  {} See the quotes in your export",
        style("quotegen list --sheet quotes.csv").yellow()
    );
    println!(
        "  {} Generate a quotation",
        style("quotegen generate Q1 --sheet quotes.csv").yellow()
    );
    Ok(())
}

fn scaffold(path: &Path, contents: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!(
            "{} {} already exists (use --force to overwrite)",
            style("!").yellow(),
            style(path.display()).cyan()
        );
        return Ok(());
    }
    std::fs::write(path, contents).into_diagnostic()?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(path.display()).cyan()
    );
    Ok(())
}
