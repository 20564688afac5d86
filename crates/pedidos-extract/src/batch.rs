//! Batch/lot number extraction from free-text product descriptions.

use std::sync::LazyLock;

use regex::Regex;

use pedidos_model::Cell;

/// Pattern ladder, tried in priority order; the first pattern with any
/// match decides.
static BATCH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"LOTE[:\-]?\s*(\d{7,})",
        r"LOTE\s*:\s*(\d+)",
        r"LOTE\s*[:\-]\s*(\d+)",
        r"LOT\s*:\s*(\d+)",
        r"LOTE\s+(\d+)",
        r"LOTE\s*:\s*(\d{4,})",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static batch pattern"))
    .collect()
});

/// Extracts a batch number from description text.
///
/// Within the winning pattern, the longest digit run of length ≥4 is
/// preferred; when no match reaches 4 digits the first match stands.
pub fn batch_from_description(description: &str) -> Option<String> {
    for pattern in BATCH_PATTERNS.iter() {
        let matches: Vec<&str> = pattern
            .captures_iter(description)
            .filter_map(|captures| captures.get(1))
            .map(|group| group.as_str())
            .collect();
        if matches.is_empty() {
            continue;
        }
        let best = matches
            .iter()
            .filter(|digits| digits.len() >= 4)
            .max_by_key(|digits| digits.len())
            .or_else(|| matches.first());
        return best.map(ToString::to_string);
    }
    None
}

/// Fallback for a dedicated batch column: the cell must be purely
/// numeric (numeric-typed, or text that is all digits).
pub fn batch_from_cell(cell: &Cell) -> Option<String> {
    if cell.is_empty() {
        return None;
    }
    match cell {
        Cell::Number(_) | Cell::Int(_) => Some(cell.to_text()),
        Cell::Text(value) => {
            let trimmed = value.trim();
            if !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit()) {
                Some(trimmed.to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}
