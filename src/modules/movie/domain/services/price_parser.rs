use regex::Regex;
use std::sync::OnceLock;

/// "1,299.50": comma thousands grouping with an optional dot fraction
static GROUPED: OnceLock<Option<Regex>> = OnceLock::new();
/// "12.50", "12,50", "+5", "5." or ".5": at most one decimal separator
static PLAIN: OnceLock<Option<Regex>> = OnceLock::new();

fn grouped() -> Option<&'static Regex> {
    GROUPED
        .get_or_init(|| Regex::new(r"^\d{1,3}(,\d{3})+(\.\d+)?$").ok())
        .as_ref()
}

fn plain() -> Option<&'static Regex> {
    PLAIN
        .get_or_init(|| Regex::new(r"^\+?(\d+([.,]\d*)?|[.,]\d+)$").ok())
        .as_ref()
}

/// Parses a provider supplied price string.
///
/// Providers are not consistent about separators, so both comma grouping and
/// a comma decimal separator are accepted. Grouping wins when a string could
/// be read either way (`"12,500"` is twelve thousand five hundred). A leading
/// `+` and a bare integer or fraction part (`"5."`, `".5"`) are accepted.
/// Anything that is not a non-negative decimal yields `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if grouped().is_some_and(|re| re.is_match(trimmed)) {
        trimmed.replace(',', "")
    } else if plain().is_some_and(|re| re.is_match(trimmed)) {
        trimmed.trim_start_matches('+').replace(',', ".")
    } else {
        return None;
    };

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
