use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Logical output fields of the focused extraction schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Identifier,
    Description,
    Detail,
    DueDate,
    Batch,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Identifier,
        Field::Description,
        Field::Detail,
        Field::DueDate,
        Field::Batch,
    ];

    /// Output column header for this field.
    pub fn header(self) -> &'static str {
        match self {
            Self::Identifier => "NIT",
            Self::Description => "DESCRIPCION",
            Self::Detail => "DETALLE",
            Self::DueDate => "FECHA DE VENCIMIENTO",
            Self::Batch => "LOTE",
        }
    }
}

/// A resolved real column: the original header plus its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub header: String,
    pub index: usize,
}

/// Logical-field to actual-column associations for one table.
///
/// Built once per table by the column resolver; read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnMap {
    resolved: BTreeMap<Field, ColumnRef>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, column: ColumnRef) {
        self.resolved.insert(field, column);
    }

    pub fn get(&self, field: Field) -> Option<&ColumnRef> {
        self.resolved.get(&field)
    }

    /// Column indices already claimed by any resolved field.
    pub fn claimed_indices(&self) -> Vec<usize> {
        self.resolved.values().map(|column| column.index).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ColumnRef)> {
        self.resolved.iter().map(|(field, column)| (*field, column))
    }
}

/// One normalized output record of the focused schema.
///
/// All fields are plain text: dates formatted `DD/MM/YYYY`, identifiers
/// de-floated to integer-like strings. Immutable once emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub identifier: String,
    pub description: String,
    pub detail: String,
    pub due_date: String,
    pub batch: String,
}

impl SalesRecord {
    /// True when every field trims to nothing. Such records are never
    /// emitted.
    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|value| value.trim().is_empty())
    }

    /// Field values in output column order.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.identifier,
            &self.description,
            &self.detail,
            &self.due_date,
            &self.batch,
        ]
    }
}

/// One row of the accounting-template schema (template mode).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub invoice_number: String,
    pub invoice_date: String,
    pub order_number: String,
    pub order_date: String,
    pub order_type: String,
    pub customer_code: String,
    pub customer_name: String,
    pub city: String,
    pub item: usize,
    pub product_code: String,
    pub brand: String,
    pub description: String,
    pub active_ingredient: String,
    pub presentation: String,
    pub list_price: f64,
    pub quantity: f64,
    pub order_value: f64,
    pub discount: f64,
    pub net_total: f64,
    pub detail: String,
    pub billing_month: String,
    pub credit_days: i64,
    pub payment_due_date: String,
    pub paid_amount: String,
    pub pending_balance: f64,
    pub effective_payment_date: String,
    pub observations: String,
    pub due_date: String,
    pub batch: String,
}
