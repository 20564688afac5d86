//! Header matching engine.

use pedidos_model::{ColumnMap, ColumnRef, Field, Table};
use tracing::debug;

use crate::fields::{IDENTIFIER_TOKENS, focused_specs};

/// Normalizes a header or candidate for comparison: trim + uppercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Candidates shorter than this match exactly or normalized only; a
/// one- or two-character substring claims unrelated headers (`CI`
/// appears inside `DESCRIPCION`).
const MIN_PARTIAL_CHARS: usize = 3;

/// Finds the column matching one of `candidates`, tried in priority order.
///
/// For each candidate the rules run in order, first hit wins:
/// 1. exact equality (case-sensitive),
/// 2. normalized equality (trim + uppercase),
/// 3. partial: one normalized string contains the other, headers scanned
///    in original column order; skipped for candidates shorter than
///    [`MIN_PARTIAL_CHARS`].
///
/// Pure function of its inputs; returns `None` when nothing matches.
pub fn resolve_index(headers: &[String], candidates: &[&str]) -> Option<usize> {
    for candidate in candidates {
        if let Some(index) = headers.iter().position(|header| header == candidate) {
            return Some(index);
        }
        let wanted = normalize(candidate);
        if let Some(index) = headers.iter().position(|header| normalize(header) == wanted) {
            return Some(index);
        }
        if wanted.chars().count() >= MIN_PARTIAL_CHARS
            && let Some(index) = headers.iter().position(|header| {
                let normalized = normalize(header);
                normalized.contains(&wanted) || wanted.contains(&normalized)
            })
        {
            return Some(index);
        }
    }
    None
}

/// Like [`resolve_index`] but returns the matched header's original text.
pub fn resolve(headers: &[String], candidates: &[&str]) -> Option<String> {
    resolve_index(headers, candidates).map(|index| headers[index].clone())
}

/// Resolves every focused-mode field against the table's headers, then
/// runs the identifier fallback if the identifier stayed unresolved.
pub fn build_column_map(table: &Table) -> ColumnMap {
    let mut map = ColumnMap::new();
    for spec in focused_specs() {
        if let Some(index) = resolve_index(&table.headers, spec.candidates) {
            map.insert(
                spec.field,
                ColumnRef {
                    header: table.headers[index].clone(),
                    index,
                },
            );
        }
    }

    if map.get(Field::Identifier).is_none()
        && let Some(index) = identifier_fallback(table, &map.claimed_indices())
    {
        debug!(
            column = %table.headers[index],
            "identifier column picked by fallback"
        );
        map.insert(
            Field::Identifier,
            ColumnRef {
                header: table.headers[index].clone(),
                index,
            },
        );
    }

    for spec in focused_specs() {
        if map.get(spec.field).is_none() {
            debug!(field = spec.field.header(), "column unresolved");
        }
    }
    map
}

/// Positional fallback for the identifier column, run only after header
/// resolution failed.
///
/// Scans columns not claimed by other fields; prefers a short name
/// (≤3 characters) or one of the known identifier tokens, and among
/// those prefers a numeric-typed column. Falls back to the first column
/// when it is unclaimed.
fn identifier_fallback(table: &Table, claimed: &[usize]) -> Option<usize> {
    let preferred: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(index, _)| !claimed.contains(index))
        .filter(|(_, header)| {
            let normalized = normalize(header);
            normalized.chars().count() <= 3 || IDENTIFIER_TOKENS.contains(&normalized.as_str())
        })
        .map(|(index, _)| index)
        .collect();

    if let Some(&index) = preferred.iter().find(|&&index| table.column_is_numeric(index)) {
        return Some(index);
    }
    if let Some(&index) = preferred.first() {
        return Some(index);
    }
    if !table.headers.is_empty() && !claimed.contains(&0) {
        return Some(0);
    }
    None
}

/// Columns feeding due-date derivation when no dedicated due-date
/// column resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivationColumns {
    pub order_date: Option<usize>,
    pub credit_terms: Option<usize>,
}

pub fn resolve_derivation_columns(headers: &[String]) -> DerivationColumns {
    DerivationColumns {
        order_date: resolve_index(headers, crate::fields::ORDER_DATE_CANDIDATES),
        credit_terms: resolve_index(headers, crate::fields::CREDIT_TERMS_CANDIDATES),
    }
}

/// Resolved source columns for template mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateColumns {
    pub customer: Option<usize>,
    pub product: Option<usize>,
    pub product_description: Option<usize>,
    pub quantity: Option<usize>,
    pub unit_price: Option<usize>,
    pub order_date: Option<usize>,
    pub payment_terms: Option<usize>,
    pub branch: Option<usize>,
    pub terms: Option<usize>,
    pub payment_mode: Option<usize>,
}

pub fn resolve_template_columns(headers: &[String]) -> TemplateColumns {
    use crate::fields::TemplateColumn;

    let find = |column: TemplateColumn| resolve_index(headers, column.candidates());
    TemplateColumns {
        customer: find(TemplateColumn::Customer),
        product: find(TemplateColumn::Product),
        product_description: find(TemplateColumn::ProductDescription),
        quantity: find(TemplateColumn::Quantity),
        unit_price: find(TemplateColumn::UnitPrice),
        order_date: find(TemplateColumn::OrderDate),
        payment_terms: find(TemplateColumn::PaymentTerms),
        branch: find(TemplateColumn::Branch),
        terms: find(TemplateColumn::Terms),
        payment_mode: find(TemplateColumn::PaymentMode),
    }
}
