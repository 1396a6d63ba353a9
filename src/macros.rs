/// Builds a [`Labels`](crate::Labels) sequence from label-like literals.
///
/// ```rust
/// use fancy_collections::{labels, Label};
///
/// let mixed = labels![0, "a"];
/// assert_eq!(mixed.get(1), Some(&Label::from("a")));
/// assert!(labels![].is_empty());
/// ```
#[macro_export]
macro_rules! labels {
    () => {
        $crate::Labels::new()
    };

    ($($label:expr),+ $(,)?) => {
        $crate::Labels::from(vec![$($crate::Label::from($label)),+])
    };
}

/// Builds a [`LabeledDict`](crate::LabeledDict) from `key => value` pairs.
///
/// Keys are anything convertible into a [`Label`](crate::Label) and values
/// anything convertible into a [`Value`](crate::Value). A repeated key keeps
/// its first position and its last value.
///
/// ```rust
/// use fancy_collections::{labeled_dict, labels, Series};
///
/// let dict = labeled_dict! {
///     "a" => Series::from_values([1, 2]),
///     0 => labels!["x"],
/// };
/// assert_eq!(dict.len(), 2);
/// assert!(labeled_dict!().is_empty());
/// ```
#[macro_export]
macro_rules! labeled_dict {
    () => {
        $crate::LabeledDict::<$crate::AnyItem>::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut dict = $crate::LabeledDict::<$crate::AnyItem>::new();
        $(
            dict.put($key, $value);
        )+
        dict
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Label, Labels, Scalar, Series, Table, Value};

    #[test]
    fn test_labels_macro() {
        assert_eq!(labels![], Labels::new());
        assert_eq!(labels![1, 2, 3], Labels::range(1, 4));
        assert_eq!(
            labels!["a", 2,],
            Labels::from(vec![Label::from("a"), Label::from(2)])
        );
    }

    #[test]
    fn test_labeled_dict_macro_keeps_order() {
        let dict = labeled_dict! {
            "z" => Series::from_values([1]),
            "a" => Table::from_columns([("c0", vec![1])]).unwrap(),
            1 => labels![0],
        };
        assert_eq!(dict.columns(), labels!["z", "a", 1]);
        assert!(matches!(dict.get(&Label::from(1)), Some(Value::Labels(_))));
    }

    #[test]
    fn test_labeled_dict_macro_overwrites() {
        let dict = labeled_dict! {
            "a" => Series::from_values([1]),
            "b" => Series::from_values([2]),
            "a" => Series::from_values([3]),
        };
        assert_eq!(dict.columns(), labels!["a", "b"]);
        let a = dict.get(&Label::from("a")).and_then(Value::as_series).unwrap();
        assert_eq!(a.values()[0], Scalar::from(3));
    }
}
