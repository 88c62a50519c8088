//! HTML rendering of the quotation template

use std::collections::HashMap;

use rust_embed::Embed;
use tera::{Context, Tera, Value};

use crate::core::QuoteError;
use crate::quote::RenderModel;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

const QUOTE_TEMPLATE: &str = "quote.html";

/// Renders the render model through the embedded quotation template
pub struct QuoteRenderer {
    tera: Tera,
}

impl QuoteRenderer {
    pub fn new() -> Result<Self, QuoteError> {
        let mut tera = Tera::default();
        tera.register_filter("comma", comma_filter);
        tera.register_filter("qty", qty_filter);

        let raw = EmbeddedTemplates::get(QUOTE_TEMPLATE)
            .expect("quote.html is embedded at build time");
        let source = std::str::from_utf8(raw.data.as_ref())
            .expect("embedded template is UTF-8");
        tera.add_raw_template(QUOTE_TEMPLATE, source)?;

        Ok(Self { tera })
    }

    /// Produce the printable HTML for one quote
    pub fn render_html(&self, model: &RenderModel) -> Result<String, QuoteError> {
        let context = Context::from_serialize(model)?;
        Ok(self.tera.render(QUOTE_TEMPLATE, &context)?)
    }
}

/// `{{ value | comma }}` - thousands separators for monetary values.
/// Floats are reduced to whole units first (unit prices are f64).
fn comma_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let n = if let Some(i) = value.as_i64() {
        i
    } else if let Some(f) = value.as_f64() {
        f.round() as i64
    } else {
        return Err(tera::Error::msg("comma filter expects a number"));
    };
    Ok(Value::String(group_digits(n)))
}

/// `{{ value | qty }}` - whole quantities print without a trailing `.0`
fn qty_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let f = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("qty filter expects a number"))?;
    let text = if f.fract() == 0.0 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    };
    Ok(Value::String(text))
}

fn group_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    let first = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == first % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
