//! Aligns values with different row axes into one table.
//!
//! Run with `cargo run --example align`. A `tracing` subscriber is installed
//! at debug level so the crate's events are printed alongside the output.

use fancy_collections::{labeled_dict, labels, Join, RowAxes, Series};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let mut dict = labeled_dict! {
        "a" => Series::filled(11, labels![0, 1]),
        "b" => Series::filled(22, labels![0, 1, 2]),
        "c" => Series::filled(33, labels![1, 4, 7]),
    };

    println!("union:  {}", dict.union_index());
    println!("shared: {}", dict.shared_index());

    for join in [Join::Outer, Join::Inner] {
        match dict.to_table(join) {
            Ok(table) => println!("{:?}:\n{}", join, fancy_collections::Value::from(table)),
            Err(e) => eprintln!("{:?} failed: {}", join, e),
        }
    }

    if let Err(e) = dict.set_columns(labels!["x", "x", "y"]) {
        println!("rename refused: {}", e);
    }
    if let Err(e) = dict.set_columns(labels!["x", "y"]) {
        println!("rename refused: {}", e);
    }
    if dict.set_columns(labels!["x", "y", "z"]).is_ok() {
        println!("renamed: {}", dict.columns());
    }
}
