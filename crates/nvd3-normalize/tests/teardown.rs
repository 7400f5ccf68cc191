//! Tests for series, table and index teardown.

use nvd3_model::{Index, LabeledSeries, Nvd3Error, PointSet, Scalar, Table, TabularData};
use nvd3_normalize::{Normalized, normalize, normalize_index, normalize_series, normalize_table};

fn ints(values: &[i64]) -> Vec<Option<Scalar>> {
    values.iter().map(|v| Some(Scalar::Int(*v))).collect()
}

#[test]
fn index_converts_x_values() {
    let index = Index::range(10);
    let expected: Vec<Scalar> = (0..10).map(Scalar::Int).collect();
    assert_eq!(normalize_index(&index).unwrap(), expected);
}

#[test]
fn datetime_index_converts_to_millis_after_epoch() {
    // 2000-01-01 through 2000-01-10, one day apart.
    let day_ns = 86_400_000_000_000i64;
    let index = Index::Datetime((0..10).map(|d| 946_684_800_000_000_000 + d * day_ns).collect());
    let expected: Vec<Scalar> = [
        946_684_800_000i64,
        946_771_200_000,
        946_857_600_000,
        946_944_000_000,
        947_030_400_000,
        947_116_800_000,
        947_203_200_000,
        947_289_600_000,
        947_376_000_000,
        947_462_400_000,
    ]
    .into_iter()
    .map(Scalar::Int)
    .collect();

    let result = normalize_index(&index).unwrap();
    assert_eq!(result, expected);
    assert!(result.iter().all(|v| matches!(v, Scalar::Int(_))));
}

#[test]
fn datetime_sub_millisecond_part_is_dropped_not_rounded() {
    let index = Index::Datetime(vec![1_999_999, 999_999, -999_999, -1_000_001]);
    assert_eq!(
        normalize_index(&index).unwrap(),
        vec![Scalar::Int(1), Scalar::Int(0), Scalar::Int(-1), Scalar::Int(-2)]
    );
}

#[test]
fn no_multi_indexes() {
    let index = Index::Multi(vec![
        vec![Scalar::Int(0), Scalar::Int(1)],
        vec![Scalar::Int(1), Scalar::Int(2)],
    ]);
    assert!(matches!(
        normalize_index(&index),
        Err(Nvd3Error::UnsupportedIndex(_))
    ));

    let series = LabeledSeries::new(None, index.clone(), ints(&[1, 2])).unwrap();
    assert!(matches!(
        normalize_series(&series),
        Err(Nvd3Error::UnsupportedIndex(_))
    ));

    let table = Table::new(index).with_column("a", ints(&[1, 2])).unwrap();
    assert!(matches!(
        normalize_table(&table),
        Err(Nvd3Error::UnsupportedIndex(_))
    ));
}

#[test]
fn series_to_point_set() {
    let series = LabeledSeries::from_values(None, ints(&[0, 1]));
    let expected = PointSet::from_pairs(None, [(0i64, 0i64), (1, 1)]);
    assert_eq!(normalize_series(&series).unwrap(), expected);
}

#[test]
fn series_empty() {
    let series = LabeledSeries::from_values(Some("empty".to_string()), Vec::new());
    let points = normalize_series(&series).unwrap();
    assert_eq!(points, PointSet::empty(Some("empty".to_string())));
}

#[test]
fn series_with_nan_and_infinite() {
    let series = LabeledSeries::from_values(
        None,
        vec![
            Some(Scalar::Int(1)),
            Some(Scalar::Float(f64::NAN)),
            Some(Scalar::Float(f64::INFINITY)),
        ],
    );
    let expected = PointSet::from_pairs(None, [(0i64, 1i64)]);
    assert_eq!(normalize_series(&series).unwrap(), expected);
}

#[test]
fn series_all_invalid_keeps_name() {
    let series = LabeledSeries::from_values(
        Some("bad".to_string()),
        vec![
            None,
            Some(Scalar::Float(f64::NEG_INFINITY)),
            Some(Scalar::Float(f64::NAN)),
        ],
    );
    let points = normalize_series(&series).unwrap();
    assert_eq!(points.name(), Some("bad"));
    assert!(points.x().is_empty());
    assert!(points.y().is_empty());
}

#[test]
fn series_keeps_float_index_labels() {
    let series = LabeledSeries::new(
        Some("f".to_string()),
        Index::from(vec![0.5, 1.5, 2.5]),
        vec![Some(Scalar::Float(1.0)), None, Some(Scalar::Float(3.0))],
    )
    .unwrap();
    let points = normalize_series(&series).unwrap();
    assert_eq!(points.x(), &[Scalar::Float(0.5), Scalar::Float(2.5)]);
}

#[test]
fn table_teardown() {
    let table = Table::new(Index::range(2))
        .with_column("a", ints(&[1, 2]))
        .unwrap()
        .with_column("b", ints(&[3, 4]))
        .unwrap();
    let expected = vec![
        PointSet::from_pairs(Some("a".to_string()), [(0i64, 1i64), (1, 2)]),
        PointSet::from_pairs(Some("b".to_string()), [(0i64, 3i64), (1, 4)]),
    ];
    assert_eq!(normalize_table(&table).unwrap(), expected);
}

#[test]
fn table_column_name_overrides_and_order_is_kept() {
    let table = Table::new(Index::range(1))
        .with_column("z", ints(&[1]))
        .unwrap()
        .with_column("a", ints(&[2]))
        .unwrap()
        .with_column("m", ints(&[3]))
        .unwrap();
    let names: Vec<Option<String>> = normalize_table(&table)
        .unwrap()
        .iter()
        .map(|points| points.name().map(str::to_string))
        .collect();
    assert_eq!(
        names,
        vec![
            Some("z".to_string()),
            Some("a".to_string()),
            Some("m".to_string())
        ]
    );
}

#[test]
fn dispatch_by_shape() {
    let series = LabeledSeries::from_values(Some("s".to_string()), ints(&[7]));
    assert_eq!(
        normalize(&TabularData::from(series)).unwrap(),
        Normalized::Series(PointSet::from_pairs(Some("s".to_string()), [(0i64, 7i64)]))
    );

    let table = Table::new(Index::range(1))
        .with_column("a", ints(&[7]))
        .unwrap();
    match normalize(&TabularData::from(table)).unwrap() {
        Normalized::Table(sets) => assert_eq!(sets.len(), 1),
        other => panic!("expected table output, got {other:?}"),
    }
}

#[test]
fn normalized_table_serializes_as_array() {
    let table = Table::new(Index::Datetime(vec![946_684_800_000_000_000]))
        .with_column("price", vec![Some(Scalar::Float(10.5))])
        .unwrap();
    let normalized = normalize(&TabularData::from(table)).unwrap();
    insta::assert_json_snapshot!(normalized, @r###"
    [
      {
        "name": "price",
        "x": [
          946684800000
        ],
        "y": [
          10.5
        ]
      }
    ]
    "###);
}
