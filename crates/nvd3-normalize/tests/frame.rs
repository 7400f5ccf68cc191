//! Tests for building point sets straight from polars data frames.

use nvd3_model::{Nvd3Error, PointSet, Scalar};
use nvd3_normalize::normalize_frame;
use polars::df;
use polars::prelude::{DataFrame, DataType, IntoColumn, NamedFrom, Series, TimeUnit};

#[test]
fn frame_teardown_matches_column_order() {
    let frame = df! {
        "a" => &[1i64, 0],
        "b" => &[2i64, 3],
    }
    .unwrap();
    let expected = vec![
        PointSet::from_pairs(Some("a".to_string()), [(0i64, 1i64), (1, 0)]),
        PointSet::from_pairs(Some("b".to_string()), [(0i64, 2i64), (1, 3)]),
    ];
    assert_eq!(normalize_frame(&frame, None).unwrap(), expected);
}

#[test]
fn frame_with_datetime_index_and_gaps() {
    let dates = Series::new(
        "date".into(),
        &[946_684_800_000_000_000i64, 946_771_200_000_000_000, 946_857_600_000_000_000],
    )
    .cast(&DataType::Datetime(TimeUnit::Nanoseconds, None))
    .unwrap()
    .into_column();
    let close = Series::new("close".into(), &[Some(10.0f64), Some(f64::NAN), None]).into_column();
    let volume = Series::new("volume".into(), &[Some(5i64), None, Some(7)]).into_column();
    let frame = DataFrame::new(vec![dates, close, volume]).unwrap();

    let sets = normalize_frame(&frame, Some("date")).unwrap();
    assert_eq!(sets.len(), 2);

    assert_eq!(sets[0].name(), Some("close"));
    assert_eq!(sets[0].x(), &[Scalar::Int(946_684_800_000)]);
    assert_eq!(sets[0].y(), &[Scalar::Float(10.0)]);

    assert_eq!(sets[1].name(), Some("volume"));
    assert_eq!(
        sets[1].x(),
        &[Scalar::Int(946_684_800_000), Scalar::Int(946_857_600_000)]
    );
    assert_eq!(sets[1].y(), &[Scalar::Int(5), Scalar::Int(7)]);
}

#[test]
fn frame_with_text_column_is_rejected() {
    let frame = df! {
        "v" => &[1.0f64],
        "note" => &["hello"],
    }
    .unwrap();
    let err = normalize_frame(&frame, None).unwrap_err();
    match err {
        Nvd3Error::UnsupportedDtype { column, .. } => assert_eq!(column, "note"),
        other => panic!("unexpected error: {other}"),
    }
}
