use tests::prelude::*;

use pretty_assertions::assert_eq;
use rowmap::stmt::{Row, Type};

#[derive(Debug, PartialEq, Record)]
struct OrderLine {
    order_id: i64,
    line_no: i16,
    sku: String,
    #[field(name = "UnitPriceUSD")]
    unit_price: f64,
    note: Option<String>,
}

#[test]
fn field_names_are_upper_camel_case() {
    let schema = OrderLine::schema();

    assert_eq!(schema.name, "OrderLine");
    assert_eq!(
        schema.field_names(),
        ["LineNo", "Note", "OrderId", "Sku", "UnitPriceUSD"]
    );
}

#[test]
fn column_names_are_snake_case() {
    assert_eq!(
        OrderLine::schema().column_names(),
        ["line_no", "note", "order_id", "sku", "unit_price_u_s_d"]
    );
}

#[test]
fn field_types_and_nullability() {
    let schema = OrderLine::schema();

    let line_no = schema.field_for_column("line_no").unwrap();
    assert_eq!(line_no.ty, Type::I16);
    assert!(!line_no.nullable);

    let note = schema.field_for_column("note").unwrap();
    assert_eq!(note.ty, Type::String);
    assert!(note.nullable);
}

#[test]
fn params_pair_names_with_values() {
    let line = OrderLine {
        order_id: 10,
        line_no: 2,
        sku: "A-1".to_string(),
        unit_price: 9.5,
        note: None,
    };

    let params = line.params();

    assert_eq!(params.len(), 5);
    assert_eq!(params.get("OrderId"), Some(&Value::I64(10)));
    assert_eq!(params.get("LineNo"), Some(&Value::I16(2)));
    assert_eq!(params.get("UnitPriceUSD"), Some(&Value::F64(9.5)));
    assert_eq!(params.get("Note"), Some(&Value::Null));
}

#[test]
fn load_reads_columns_by_name() {
    let row = Row::new(
        vec![
            "sku".into(),
            "order_id".into(),
            "unit_price_u_s_d".into(),
            "line_no".into(),
            "note".into(),
            "ignored".into(),
        ],
        vec![
            Value::from("B-2"),
            Value::I64(11),
            Value::F64(1.25),
            Value::I16(1),
            Value::from("gift"),
            Value::I64(0),
        ],
    );

    assert_eq!(
        OrderLine::load(row).unwrap(),
        OrderLine {
            order_id: 11,
            line_no: 1,
            sku: "B-2".to_string(),
            unit_price: 1.25,
            note: Some("gift".to_string()),
        }
    );
}

#[test]
fn load_without_column_fails() {
    let row = Row::new(vec!["sku".into()], vec![Value::from("B-2")]);

    let err = assert_err!(OrderLine::load(row));
    assert!(err.is_missing_column());
}

#[test]
fn commands_follow_the_schema() {
    assert_eq!(
        rowmap::insert_command::<OrderLine>("order_lines"),
        "INSERT INTO order_lines (line_no, note, order_id, sku, unit_price_u_s_d) \
         VALUES (@LineNo, @Note, @OrderId, @Sku, @UnitPriceUSD)"
    );
    assert_eq!(
        rowmap::update_command::<OrderLine>("order_lines", "OrderId"),
        "UPDATE order_lines SET line_no = @LineNo, note = @Note, order_id = @OrderId, \
         sku = @Sku, unit_price_u_s_d = @UnitPriceUSD WHERE order_id = @OrderId"
    );
}
