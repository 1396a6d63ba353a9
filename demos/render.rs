//! Renders a few dictionaries to the console.
//!
//! Run with `cargo run --example render`. Set `COLUMNS` to see how entries
//! that do not fit are elided.

use chrono::{TimeZone, Utc};
use fancy_collections::{labeled_dict, labels, FormatOptions, Freq, Labels, Series, Table};

fn main() {
    let dict = labeled_dict! {
        "a" => Series::filled(11, labels![0, 1]),
        "b" => Series::filled(22, labels![0, 1, 2]),
        "c" => Series::filled(33, labels![1, 4, 7]),
    };
    println!("{}", dict);

    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    let frame = Table::from_columns([("c0", vec![1, 1]), ("c1", vec![2, 2])])
        .unwrap_or_default();
    let nested = labeled_dict! {
        "key0" => frame,
        "days" => Labels::date_range(start, 4, Freq::days(1)),
        "empty" => Series::empty(),
    };
    println!("{}", nested);

    match nested.flatten(false) {
        Ok(flat) => println!("{}", flat),
        Err(e) => eprintln!("flatten failed: {}", e),
    }

    let hidden = FormatOptions::console().with_show_table_columns(false);
    println!("{}", nested.to_string_with(&hidden));

    let wide = labeled_dict! { "long" => Series::from_values(0..500) };
    println!("{}", wide);
}
