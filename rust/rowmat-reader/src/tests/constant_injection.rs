use rowmat_vector::{
    batch::RowBatch,
    column_vector::{BytesColumnVector, LongColumnVector},
};

use super::{CountingReader, reads};
use crate::{
    constants::{IdToConstant, constants_from_json},
    options::Materialization,
    reader::{StructReader, ValueReader},
    row_reader::RowReader,
    schema::{NestedField, StructType},
    value::{Row, Value},
};

fn schema() -> StructType {
    StructType::new(vec![
        NestedField::required(1, "a"),
        NestedField::optional(2, "b"),
    ])
}

fn batch(b: &[Option<&str>]) -> RowBatch {
    RowBatch::try_new(
        vec![
            LongColumnVector::from_values(&[1, 2, 3]).into(),
            BytesColumnVector::from_options(b).into(),
        ],
        3,
    )
    .unwrap()
}

fn expected() -> Vec<Row> {
    (1..=3)
        .map(|a| Row::from_values(vec![Some(Value::Int(a)), Some(Value::from("X"))]))
        .collect()
}

#[test]
fn test_constant_replaces_stored_column() {
    let mut constants = IdToConstant::new();
    constants.insert(2, Value::from("X"));

    for materialization in [Materialization::Fresh, Materialization::Reuse] {
        let reader = StructReader::with_constants(
            vec![ValueReader::ints(), ValueReader::strings()],
            &schema(),
            &constants,
        )
        .unwrap();
        let mut rows = RowReader::new(reader, materialization);
        let decoded = rows
            .read_all(&batch(&[Some("stored"), None, Some("")]))
            .unwrap();
        assert_eq!(decoded, expected());
    }
}

#[test]
fn test_constant_bound_column_is_still_read() {
    let (counted, counter) = CountingReader::wrap(ValueReader::strings());
    let constants = constants_from_json(r#"{"2": {"string": "X"}}"#).unwrap();
    let reader =
        StructReader::with_constants(vec![ValueReader::ints(), counted], &schema(), &constants)
            .unwrap();

    let mut rows = RowReader::new(reader, Materialization::Reuse);
    let mut decoded = Vec::new();
    rows.for_each_row(&batch(&[Some("p"), Some("q"), Some("r")]), |_, row| {
        decoded.push(row.clone());
        Ok(())
    })
    .unwrap();

    assert_eq!(decoded, expected());
    assert_eq!(reads(&counter), 3);
}

#[test]
fn test_null_cells_never_reach_decoder() {
    let (counted, counter) = CountingReader::wrap(ValueReader::strings());
    let reader = StructReader::new(vec![ValueReader::ints(), counted]);
    let decoded = RowReader::new(reader, Materialization::Fresh)
        .read_all(&batch(&[None, Some("q"), None]))
        .unwrap();

    assert_eq!(reads(&counter), 1);
    assert!(decoded[0].is_null(1));
    assert_eq!(decoded[1].get(1), Some(&Value::from("q")));
    assert!(decoded[2].is_null(1));
}

#[test]
fn test_decode_error_in_constant_bound_column_propagates() {
    // The column is read before the constant is applied, so a kind mismatch in
    // it still surfaces.
    let mut constants = IdToConstant::new();
    constants.insert(2, Value::from("X"));
    let reader = StructReader::with_constants(
        vec![ValueReader::ints(), ValueReader::doubles()],
        &schema(),
        &constants,
    )
    .unwrap();
    let err = reader
        .read_batch(&batch(&[Some("p"), None, None]), 0)
        .unwrap_err();
    assert!(err.is_binding_mismatch());
}

#[test]
fn test_every_field_constant_bound() {
    let constants = constants_from_json(r#"{"1": {"int": 7}, "2": {"string": "X"}}"#).unwrap();
    let reader = StructReader::with_constants(
        vec![ValueReader::ints(), ValueReader::strings()],
        &schema(),
        &constants,
    )
    .unwrap();
    assert_eq!(reader.constant_positions(), &[0, 1]);
    let row = reader.read_batch(&batch(&[None, None, None]), 2).unwrap();
    assert_eq!(row.values(), &[Some(Value::Int(7)), Some(Value::from("X"))]);
}

#[test]
fn test_constant_reader_field() {
    // A constant reader yields its value even for null cells.
    let reader = StructReader::new(vec![ValueReader::ints(), ValueReader::constant(5i64)]);
    let row = reader.read_batch(&batch(&[None, None, None]), 0).unwrap();
    assert_eq!(row.values(), &[Some(Value::Int(1)), Some(Value::Long(5))]);
}
