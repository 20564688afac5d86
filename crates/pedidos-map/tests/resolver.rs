use pedidos_map::{build_column_map, resolve, resolve_template_columns};
use pedidos_model::{Cell, Field, Table};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn resolves_focused_fields_from_export_variant_headers() {
    let mut table = Table::new(headers(&[
        "NIT/CI:",
        "Descripción",
        "Detalle",
        "Fecha de vencimiento",
        "Lote",
    ]));
    table.push_row(vec![
        Cell::Number(123456.0),
        Cell::Text("Producto X".to_string()),
        Cell::Text("detalle".to_string()),
        Cell::Text("01/11/2025".to_string()),
        Cell::Int(2516172),
    ]);

    let map = build_column_map(&table);
    assert_eq!(map.get(Field::Identifier).unwrap().header, "NIT/CI:");
    assert_eq!(map.get(Field::Description).unwrap().header, "Descripción");
    assert_eq!(map.get(Field::Detail).unwrap().header, "Detalle");
    assert_eq!(
        map.get(Field::DueDate).unwrap().header,
        "Fecha de vencimiento"
    );
    assert_eq!(map.get(Field::Batch).unwrap().header, "Lote");
}

#[test]
fn identifier_fallback_picks_unclaimed_numeric_short_column() {
    // No identifier candidate matches by name; "Cod" is short and
    // numeric so the fallback claims it.
    let mut table = Table::new(headers(&["Producto", "Cod", "Detalle"]));
    table.push_row(vec![
        Cell::Text("Producto X".to_string()),
        Cell::Int(4455667),
        Cell::Text("texto".to_string()),
    ]);

    let map = build_column_map(&table);
    let identifier = map.get(Field::Identifier).expect("fallback resolves");
    assert_eq!(identifier.index, 1);
}

#[test]
fn identifier_never_claims_the_description_column() {
    // Without any NIT-like header the identifier must stay unresolved
    // rather than partial-matching "CI" inside DESCRIPCION.
    let mut table = Table::new(headers(&["DESCRIPCION", "DETALLE"]));
    table.push_row(vec![
        Cell::Text("Producto X".to_string()),
        Cell::Text("entrega parcial".to_string()),
    ]);

    let map = build_column_map(&table);
    assert!(map.get(Field::Identifier).is_none());
    assert_eq!(
        map.get(Field::Description).unwrap().header,
        "DESCRIPCION"
    );
    assert_eq!(map.get(Field::Detail).unwrap().header, "DETALLE");
}

#[test]
fn unresolvable_fields_stay_unresolved() {
    let table = Table::new(headers(&["NIT", "Columna misteriosa"]));
    let map = build_column_map(&table);
    assert!(map.get(Field::Identifier).is_some());
    assert!(map.get(Field::Batch).is_none());
    assert!(map.get(Field::DueDate).is_none());
}

#[test]
fn resolve_is_pure_and_repeatable() {
    let headers = headers(&["LOTE NUMERO", "LOTE"]);
    let first = resolve(&headers, &["LOTE"]);
    let second = resolve(&headers, &["LOTE"]);
    assert_eq!(first, second);
    assert_eq!(first, Some("LOTE".to_string()));
}

#[test]
fn template_columns_resolve_against_odoo_headers() {
    let headers = headers(&[
        "Cliente",
        "Fecha orden",
        "Condiciones de pago",
        "Sucursal",
        "Términos y condiciones",
        "Modo de pago",
        "Líneas del pedido/Producto",
        "Líneas del pedido/Descripción",
        "Líneas del pedido/Cantidad",
        "Líneas del pedido/Precio unidad",
    ]);
    let columns = resolve_template_columns(&headers);
    assert_eq!(columns.customer, Some(0));
    assert_eq!(columns.order_date, Some(1));
    assert_eq!(columns.payment_terms, Some(2));
    assert_eq!(columns.branch, Some(3));
    assert_eq!(columns.terms, Some(4));
    assert_eq!(columns.payment_mode, Some(5));
    assert_eq!(columns.product, Some(6));
    assert_eq!(columns.product_description, Some(7));
    assert_eq!(columns.quantity, Some(8));
    assert_eq!(columns.unit_price, Some(9));
}
