use crate::config::TaxConfig;
use crate::product::Product;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Anchored line grammar: `<quantity> <name> at <euros>.<cents>`, with a
/// greedy name span and exactly two cent digits. The optional sign on the
/// euros group applies to the whole price.
static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+) (.+) at (-?\d+)\.(\d{2})$").unwrap());

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("malformed line: {0:?}")]
    MalformedLine(String),
}

pub struct Parser {}

impl Parser {
    /// Parses one product description line into a [`Product`].
    ///
    /// Whitespace is trimmed and interior runs collapsed before matching.
    /// Any line that does not match the grammar, including an empty line,
    /// is a [`ParseError::MalformedLine`]. No range validation is done on
    /// quantity or price.
    pub fn parse(raw_line: &str, config: &TaxConfig) -> Result<Product, ParseError> {
        let line = normalize_whitespace(raw_line);
        let captures = LINE_RE
            .captures(&line)
            .ok_or_else(|| ParseError::MalformedLine(raw_line.trim().to_string()))?;

        // The groups are all digit runs, so the only way the conversions can
        // fail is a value too large for the type; treat that as malformed too.
        let quantity: u32 = captures[1]
            .parse()
            .map_err(|_| ParseError::MalformedLine(raw_line.trim().to_string()))?;
        let euros: i64 = captures[3]
            .parse()
            .map_err(|_| ParseError::MalformedLine(raw_line.trim().to_string()))?;
        let cents: i64 = captures[4]
            .parse()
            .map_err(|_| ParseError::MalformedLine(raw_line.trim().to_string()))?;

        let negative = captures[3].starts_with('-');
        let unit_price_cents = euros * 100 + if negative { -cents } else { cents };
        if unit_price_cents < 0 {
            log::warn!(
                "accepting negative price {} for {:?}",
                unit_price_cents,
                &captures[2]
            );
        }

        let (name, imported) = relocate_imported(&captures[2]);
        let exempt = config.is_exempt(&name);

        Ok(Product::new(
            quantity,
            name,
            unit_price_cents,
            imported,
            exempt,
        ))
    }
}

fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Detects the "imported" token in a product name. When present, every
/// occurrence is removed (case-insensitively) and a single `imported ` is
/// prepended, so the flag reads first on the receipt line.
fn relocate_imported(name: &str) -> (String, bool) {
    let imported = name
        .split_whitespace()
        .any(|token| token.eq_ignore_ascii_case("imported"));
    if !imported {
        return (normalize_whitespace(name), false);
    }
    let rest = name
        .split_whitespace()
        .filter(|token| !token.eq_ignore_ascii_case("imported"))
        .collect::<Vec<_>>()
        .join(" ");
    (format!("imported {}", rest).trim().to_string(), true)
}
