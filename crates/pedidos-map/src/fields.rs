//! Static extraction policy: candidate header lists per logical field.
//!
//! Candidates mirror the header variants seen across sales-order exports
//! and are tried in priority order. They are policy data, never derived
//! from the input table.

use pedidos_model::Field;

/// A logical output field with its ordered candidate headers.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub candidates: &'static [&'static str],
}

const IDENTIFIER_CANDIDATES: &[&str] = &[
    "NIT",
    "NIT/CI",
    "CI",
    "RUC",
    "Nro. Documento",
    "Identificación fiscal",
];

const DESCRIPTION_CANDIDATES: &[&str] = &[
    "DESCRIPCION",
    "Descripción",
    "Líneas del pedido/Descripción",
    "Líneas del pedido/Producto",
    "Producto",
];

const DETAIL_CANDIDATES: &[&str] = &[
    "DETALLE",
    "Detalle",
    "Términos y condiciones",
    "Observaciones",
];

const DUE_DATE_CANDIDATES: &[&str] = &[
    "FECHA DE VENCIMIENTO",
    "Fecha de vencimiento del pago",
    "Fecha de vencimiento",
    "Vencimiento",
];

const BATCH_CANDIDATES: &[&str] = &["LOTE", "Lote", "Nro. Lote", "Lote/Serie"];

/// Header tokens that mark an identifier column in the positional
/// fallback, compared after normalization.
pub const IDENTIFIER_TOKENS: &[&str] = &["NIT", "CI", "RUC", "COD", "ID"];

/// Candidates for the order-date column used in due-date derivation.
pub const ORDER_DATE_CANDIDATES: &[&str] = &[
    "Fecha orden",
    "FECHA pedido",
    "Fecha pedido",
    "Fecha de orden",
];

/// Candidates for the credit-terms column used in due-date derivation.
pub const CREDIT_TERMS_CANDIDATES: &[&str] = &[
    "Condiciones de pago",
    "Términos de pago",
    "Plazo de pago",
];

const FOCUSED_SPECS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::Identifier,
        candidates: IDENTIFIER_CANDIDATES,
    },
    FieldSpec {
        field: Field::Description,
        candidates: DESCRIPTION_CANDIDATES,
    },
    FieldSpec {
        field: Field::Detail,
        candidates: DETAIL_CANDIDATES,
    },
    FieldSpec {
        field: Field::DueDate,
        candidates: DUE_DATE_CANDIDATES,
    },
    FieldSpec {
        field: Field::Batch,
        candidates: BATCH_CANDIDATES,
    },
];

/// The focused-mode field specs, one per output column.
pub fn focused_specs() -> &'static [FieldSpec] {
    FOCUSED_SPECS
}

/// Source columns consumed by template mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateColumn {
    Customer,
    Product,
    ProductDescription,
    Quantity,
    UnitPrice,
    OrderDate,
    PaymentTerms,
    Branch,
    Terms,
    PaymentMode,
}

impl TemplateColumn {
    pub const ALL: [TemplateColumn; 10] = [
        Self::Customer,
        Self::Product,
        Self::ProductDescription,
        Self::Quantity,
        Self::UnitPrice,
        Self::OrderDate,
        Self::PaymentTerms,
        Self::Branch,
        Self::Terms,
        Self::PaymentMode,
    ];

    /// Candidate headers, the canonical export header first.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Self::Customer => &["Cliente"],
            Self::Product => &["Líneas del pedido/Producto"],
            Self::ProductDescription => &["Líneas del pedido/Descripción"],
            Self::Quantity => &["Líneas del pedido/Cantidad", "Cantidad"],
            Self::UnitPrice => &["Líneas del pedido/Precio unidad", "Precio unidad"],
            Self::OrderDate => &["Fecha orden", "Fecha de orden"],
            Self::PaymentTerms => &["Condiciones de pago"],
            Self::Branch => &["Sucursal"],
            Self::Terms => &["Términos y condiciones"],
            Self::PaymentMode => &["Modo de pago"],
        }
    }
}
