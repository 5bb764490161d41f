use serde_json::{Value, json};

/// Latest fixture value of indicator `kind` (the upstream `type` parameter).
#[must_use]
pub fn indicator_value(kind: &str) -> f64 {
    match kind {
        "rsi" => 58.4,
        "sma" => 186.2,
        "ema" => 187.9,
        "adx" => 24.7,
        "williams" => -21.3,
        "standardDeviation" => 3.15,
        _ => 0.0,
    }
}

/// Daily indicator rows, newest first; the value sits under a field named after `kind`.
#[must_use]
pub fn indicator_rows(_symbol: &str, kind: &str) -> Value {
    let latest = indicator_value(kind);
    let mut rows = Vec::with_capacity(3);
    for (date, drift) in [("2024-01-05", 0.0), ("2024-01-04", 0.5), ("2024-01-03", 1.0)] {
        let mut row = json!({
            "date": format!("{date} 00:00:00"),
            "open": 185.0,
            "high": 187.0,
            "low": 183.5,
            "close": 186.0,
            "volume": 48_000_000
        });
        row[kind] = json!(latest - drift);
        rows.push(row);
    }
    Value::Array(rows)
}
