pub mod analyst;
pub mod company;
pub mod economic;
pub mod history;
pub mod indicators;
pub mod movers;
pub mod news;
pub mod profile;
pub mod quotes;
pub mod status;

use fmp_core::FmpError;

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')
}

/// Trim and uppercase a ticker, rejecting blanks and characters that would
/// change the request path.
pub(crate) fn normalize_symbol(raw: &str) -> Result<String, FmpError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(FmpError::InvalidArg("symbol must not be blank".into()));
    }
    if !s.chars().all(is_symbol_char) {
        return Err(FmpError::InvalidArg(format!("invalid symbol: {s:?}")));
    }
    Ok(s.to_ascii_uppercase())
}
