//! # fancy_collections
//!
//! Ordered dictionaries of labeled arrays, rendered side by side.
//!
//! ## What is a LabeledDict?
//!
//! A [`LabeledDict`] maps keys to labeled-array values: a [`Series`] (one
//! scalar per row label), a [`Table`] (rows and columns) or a bare [`Labels`]
//! sequence. Values keep their own row axes; nothing forces them to line up
//! until you ask for it with [`LabeledDict::to_table`].
//!
//! ## Key Features
//!
//! - **Side-by-side rendering**: every entry becomes a console column, with
//!   overflowing entries elided around a `...` column
//! - **Key axis**: the key set is readable and writable as a [`Labels`]
//!   sequence, with an all-or-nothing rename
//! - **Label algebra**: union and intersection of every value's row axis
//! - **Configurable equality**: [`deep_equal`] with independently toggled facets
//! - **Item policies**: restrict keys or values at the type level
//!   ([`StrKeys`], [`NoBareLabels`])
//! - **Serde Compatible**: containers serialize as ordered `(key, value)` pairs
//!
//! ## Quick Start
//!
//! ```rust
//! use fancy_collections::{labeled_dict, labels, FormatOptions, Series};
//!
//! let dict = labeled_dict! {
//!     "a" => Series::filled(11, labels![0, 1]),
//!     "b" => Series::filled(22, labels![0, 1, 2]),
//!     "c" => Series::filled(33, labels![1, 4, 7]),
//! };
//!
//! let expected = [
//!     "    a |     b |     c | ",
//!     "===== | ===== | ===== | ",
//!     "0  11 | 0  22 | 1  33 | ",
//!     "1  11 | 1  22 | 4  33 | ",
//!     "      | 2  22 | 7  33 | ",
//! ];
//! let text = dict.to_string_with(&FormatOptions::new().with_display_width(80));
//! assert_eq!(text.lines().collect::<Vec<_>>(), expected);
//! ```
//!
//! ### Renaming Keys
//!
//! ```rust
//! use fancy_collections::{labeled_dict, labels, Error, Series};
//!
//! let mut dict = labeled_dict! {
//!     "a" => Series::from_values([1]),
//!     "b" => Series::from_values([2]),
//! };
//! dict.set_columns(labels!["x", "y"]).unwrap();
//! assert_eq!(dict.columns(), labels!["x", "y"]);
//!
//! // Duplicates are refused and nothing changes
//! let err = dict.set_columns(labels!["k", "k"]).unwrap_err();
//! assert!(matches!(err, Error::ConstraintViolation(_)));
//! assert_eq!(dict.columns(), labels!["x", "y"]);
//! ```
//!
//! ### Aligning Values
//!
//! ```rust
//! use fancy_collections::{labeled_dict, labels, Join, RowAxes, Series, Table};
//!
//! let dict = labeled_dict! {
//!     "s" => Series::filled(1, labels![0, 1, 2]),
//!     "t" => Table::from_columns([("c0", vec![5, 6])]).unwrap(),
//! };
//! assert_eq!(dict.union_index(), labels![0, 1, 2]);
//! assert_eq!(dict.shared_index(), labels![0, 1]);
//!
//! let table = dict.to_table(Join::Inner).unwrap();
//! assert_eq!(table.columns(), &labels!["s", "t_c0"]);
//! ```
//!
//! ## Logging
//!
//! Axis renames, flattening and formatter column selection emit `tracing`
//! events at `debug` level; a rolled-back rename is reported at `warn`. No
//! subscriber is installed by this crate.

pub mod algebra;
pub mod axis;
pub mod dict;
pub mod equality;
pub mod error;
pub mod format;
pub mod label;
pub mod macros;
pub mod options;
pub mod render;
pub mod scalar;
pub mod series;
pub mod slice_dict;
pub mod table;
pub mod value;

pub use algebra::{intersection_labels, union_labels, RowAxes};
pub use axis::Axis;
pub use dict::{Join, LabeledDict};
pub use equality::{deep_equal, values_equal, EqualOptions, Facets, Inspect};
pub use error::{Error, Result};
pub use format::{Formatter, KeyFormat};
pub use label::{Freq, Label, Labels};
pub use options::FormatOptions;
pub use scalar::{Dtype, Scalar};
pub use series::Series;
pub use slice_dict::{AnyItem, ItemPolicy, NoBareLabels, SliceDict, StrKeys};
pub use table::Table;
pub use value::Value;
