use nvd3_model::{Index, LabeledSeries, Nvd3Error, Scalar, Table, TabularData};

fn ints(values: &[i64]) -> Vec<Option<Scalar>> {
    values.iter().map(|v| Some(Scalar::Int(*v))).collect()
}

#[test]
fn series_rejects_length_mismatch() {
    let err = LabeledSeries::new(Some("price".to_string()), Index::range(3), ints(&[1, 2]))
        .expect_err("lengths differ");
    match err {
        Nvd3Error::LengthMismatch {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "price");
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn series_from_values_uses_positional_index() {
    let series = LabeledSeries::from_values(None, ints(&[5, 6, 7]));
    assert_eq!(series.index(), &Index::range(3));
    assert_eq!(series.name(), None);
    assert_eq!(series.with_name("s").name(), Some("s"));
}

#[test]
fn table_keeps_column_order_and_overwrites_in_place() {
    let mut table = Table::new(Index::range(2));
    table.insert_column("b", ints(&[1, 2])).unwrap();
    table.insert_column("a", ints(&[3, 4])).unwrap();
    table.insert_column("b", ints(&[9, 9])).unwrap();

    let names: Vec<&str> = table.column_names().collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(table.width(), 2);
    assert_eq!(table.height(), 2);

    let b = table.column("b").expect("column b");
    assert_eq!(b.name(), Some("b"));
    assert_eq!(b.values(), ints(&[9, 9]).as_slice());
    assert!(table.column("missing").is_none());
}

#[test]
fn table_rejects_short_column() {
    let err = Table::new(Index::range(3))
        .with_column("a", ints(&[1]))
        .expect_err("short column");
    assert!(matches!(err, Nvd3Error::LengthMismatch { .. }));
    assert!(err.to_string().starts_with("length mismatch for a:"));
}

#[test]
fn tabular_data_conversions() {
    let series = LabeledSeries::from_values(None, Vec::new());
    assert!(matches!(TabularData::from(series), TabularData::Series(_)));
    assert!(matches!(
        TabularData::from(Table::default()),
        TabularData::Table(_)
    ));
}
