#![no_main]
use libfuzzer_sys::fuzz_target;
use pt_config::{validate_table, ColumnMapping};

fuzz_target!(|data: &str| {
    // Fuzz the validation kernel over arbitrary CSV text; it must never panic,
    // only return a typed error or a validated dataset.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_bytes());

    let Ok(headers) = rdr.headers().cloned() else {
        return;
    };

    let rows: Vec<_> = rdr.records().filter_map(Result::ok).collect();

    let mapping = ColumnMapping {
        id_col: "id".to_string(),
        result_col: "result".to_string(),
        uncertainty_col: Some("uncertainty".to_string()),
    };

    let _ = validate_table(&headers, rows.into_iter(), &mapping);
});
