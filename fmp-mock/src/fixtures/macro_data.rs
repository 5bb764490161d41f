use serde_json::{Value, json};

/// Observations for economic series `name`, newest first.
#[must_use]
pub fn economic_series(name: &str) -> Option<Value> {
    let points: &[(&str, f64)] = match name {
        "GDP" => &[("2024-01-01", 28_269.2), ("2023-10-01", 27_956.0)],
        "CPI" => &[("2024-03-01", 312.23), ("2024-02-01", 311.05)],
        "unemploymentRate" => &[("2024-04-01", 3.9), ("2024-03-01", 3.8)],
        "federalFunds" => &[("2024-04-01", 5.33), ("2024-03-01", 5.33)],
        _ => return None,
    };
    Some(Value::Array(
        points
            .iter()
            .map(|(date, value)| json!({ "date": date, "value": value }))
            .collect(),
    ))
}

const HISTORY: [(&str, f64); 5] = [
    ("2024-01-08", 185.56),
    ("2024-01-05", 181.18),
    ("2024-01-04", 181.91),
    ("2024-01-03", 184.25),
    ("2024-01-02", 185.64),
];

/// Daily bars between `from` and `to` inclusive (ISO dates compare lexically).
///
/// Returns `{}` when nothing falls in range, matching the upstream's empty shape.
#[must_use]
pub fn history(symbol: &str, from: Option<&str>, to: Option<&str>) -> Value {
    let rows: Vec<Value> = HISTORY
        .iter()
        .filter(|(date, _)| from.is_none_or(|f| *date >= f) && to.is_none_or(|t| *date <= t))
        .map(|(date, close)| {
            json!({
                "date": date,
                "open": close - 1.0,
                "high": close + 1.5,
                "low": close - 2.0,
                "close": close,
                "adjClose": close,
                "volume": 60_000_000,
                "change": 1.0,
                "changePercent": 0.55,
                "vwap": close - 0.2
            })
        })
        .collect();
    if rows.is_empty() {
        return json!({});
    }
    json!({ "symbol": symbol, "historical": rows })
}

/// Leaderboard for path segment `board` (`gainers`, `losers`, `actives`).
#[must_use]
pub fn movers(board: &str) -> Option<Value> {
    let rows: &[(&str, &str, f64, f64)] = match board {
        "gainers" => &[
            ("SMCI", "Super Micro Computer", 78.1, 12.4),
            ("PLTR", "Palantir Technologies", 2.3, 9.8),
        ],
        "losers" => &[
            ("WBA", "Walgreens Boots Alliance", -2.9, -11.2),
            ("PARA", "Paramount Global", -1.1, -7.5),
        ],
        "actives" => &[
            ("TSLA", "Tesla, Inc.", 3.2, 1.4),
            ("AAPL", "Apple Inc.", 2.0, 1.06),
        ],
        _ => return None,
    };
    Some(Value::Array(
        rows.iter()
            .map(|(symbol, name, change, pct)| {
                json!({
                    "symbol": symbol,
                    "name": name,
                    "change": change,
                    "price": 100.0 + change,
                    "changesPercentage": pct
                })
            })
            .collect(),
    ))
}
