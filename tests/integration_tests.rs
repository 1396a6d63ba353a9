use fancy_collections::{
    deep_equal, labeled_dict, labels, AnyItem, EqualOptions, Error, Join, Label, LabeledDict,
    Labels, NoBareLabels, Scalar, Series, StrKeys, Table, Value,
};

fn abc() -> LabeledDict {
    labeled_dict! {
        "a" => Series::filled(11, labels![0, 1]),
        "b" => Series::filled(22, labels![0, 1, 2]),
        "c" => Series::filled(33, labels![1, 4, 7]),
    }
}

#[test]
fn test_flatten_single_table() {
    let frame = Table::from_columns([("c0", vec![1, 1]), ("c1", vec![2, 2])]).unwrap();
    let dict = labeled_dict! { "key0" => frame.clone() };

    let flat = dict.flatten(false).unwrap();
    assert_eq!(flat.columns(), labels!["key0_c0", "key0_c1"]);

    let c0 = flat.get(&"key0_c0".into()).and_then(Value::as_series).unwrap();
    let c1 = flat.get(&"key0_c1".into()).and_then(Value::as_series).unwrap();
    assert_eq!(c0.values(), frame.column_data(0).unwrap());
    assert_eq!(c1.values(), frame.column_data(1).unwrap());
    assert_eq!(c0.index(), frame.index());
}

#[test]
fn test_to_table_fills_gaps() {
    let table = abc().to_table(Join::Outer).unwrap();
    assert_eq!(table.index(), &labels![0, 1, 2, 4, 7]);

    let c = table.column(&"c".into()).unwrap();
    let expected: Vec<Scalar> = vec![Scalar::Null, 33.into(), Scalar::Null, 33.into(), 33.into()];
    assert_eq!(c.values(), expected.as_slice());
}

#[test]
fn test_to_table_inner_keeps_shared_rows() {
    let table = abc().to_table(Join::Inner).unwrap();
    assert_eq!(table.index(), &labels![1]);
    assert_eq!(
        table.column(&"b".into()).unwrap().values(),
        &[Scalar::from(22)]
    );
}

#[test]
fn test_to_table_promotes_labels() {
    let dict = labeled_dict! {
        "s" => Series::filled(0, labels!["x", "y"]),
        "idx" => labels!["y", "z"],
    };
    let table = dict.to_table(Join::Outer).unwrap();
    assert_eq!(table.index(), &labels!["x", "y", "z"]);
    let idx = table.column(&"idx".into()).unwrap();
    assert_eq!(idx.values(), &[Scalar::Null, "y".into(), "z".into()]);
}

#[test]
fn test_select_and_mask() {
    let dict = abc();
    let picked = dict.select(&labels!["c", "a"]).unwrap();
    assert_eq!(picked.columns(), labels!["c", "a"]);
    assert_eq!(picked.get(&"a".into()), dict.get(&"a".into()));

    let err = dict.select(&labels!["a", "nope", "nada"]).unwrap_err();
    assert_eq!(err, Error::Key("['nope', 'nada'] does not exist".to_string()));

    let masked = dict.mask(&[false, true, true]).unwrap();
    assert_eq!(masked.columns(), labels!["b", "c"]);
    assert!(matches!(dict.mask(&[true]), Err(Error::LengthMismatch(_))));

    assert_eq!(dict.slice(1..3).columns(), labels!["b", "c"]);
}

#[test]
fn test_set_many() {
    let mut dict = abc();
    dict.set_many(
        &labels!["d", "a"],
        vec![Value::from(labels![9]), Value::from(Series::from_values([0]))],
    )
    .unwrap();
    assert_eq!(dict.columns(), labels!["a", "b", "c", "d"]);
    assert_eq!(dict.get(&"a".into()).map(Value::len), Some(1));
}

#[test]
fn test_policy_on_set_many() {
    let mut dict: LabeledDict<NoBareLabels> = LabeledDict::new();
    let err = dict
        .set_many(&labels!["x"], vec![Value::from(labels![1])])
        .unwrap_err();
    assert!(matches!(err, Error::ConstraintViolation(_)));
    assert!(dict.is_empty());
}

#[test]
fn test_container_equality() {
    let left = abc();
    let right = labeled_dict! {
        "c" => Series::filled(33, labels![1, 4, 7]),
        "b" => Series::filled(22, labels![0, 1, 2]),
        "a" => Series::filled(11, labels![0, 1]),
    };
    assert_eq!(left, right);
    assert!(deep_equal(&left, &right, &EqualOptions::new()).unwrap());

    let shifted = labeled_dict! {
        "a" => Series::filled(11, labels![1, 2]),
        "b" => Series::filled(22, labels![0, 1, 2]),
        "c" => Series::filled(33, labels![1, 4, 7]),
    };
    assert_ne!(left, shifted);
}

#[test]
fn test_all_empty() {
    assert!(labeled_dict!().all_empty());
    let dict = labeled_dict! {
        "s" => Series::empty(),
        "t" => Table::empty(),
        "l" => Labels::new(),
    };
    assert!(!dict.is_empty());
    assert!(dict.all_empty());
}

#[test]
fn test_serde_roundtrip() {
    let dict = labeled_dict! {
        "s" => Series::filled(1.5, labels![0, 1]),
        7 => Table::from_columns([("c0", vec!["x", "y"])]).unwrap(),
        "l" => labels!["a"],
    };
    let json = serde_json::to_string(&dict).unwrap();
    let back: LabeledDict = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dict);
    assert_eq!(back.columns(), dict.columns());
}

#[test]
fn test_deserialize_applies_policy() {
    let dict = labeled_dict! { 7 => Series::from_values([1]) };
    let json = serde_json::to_string(&dict).unwrap();

    let any: Result<LabeledDict<AnyItem>, _> = serde_json::from_str(&json);
    assert!(any.is_ok());
    let strict: Result<LabeledDict<StrKeys>, _> = serde_json::from_str(&json);
    assert!(strict.is_err());
}

#[test]
fn test_clone_is_independent() {
    let dict = abc();
    let mut copy = dict.clone();
    copy.remove(&Label::from("a"));
    assert_eq!(dict.len(), 3);
    assert_eq!(copy.len(), 2);
}
