use serde_json::{Value, json};

fn article(symbol: Option<&str>, n: usize) -> Value {
    let subject = symbol.unwrap_or("Markets");
    let mut row = json!({
        "publishedDate": format!("2024-01-05 {:02}:00:00", 16 - (n % 8)),
        "title": format!("{subject} headline #{n}"),
        "image": format!("https://images.example.com/{n}.jpg"),
        "site": "example.com",
        "text": format!("Body of story {n} about {subject}."),
        "url": format!("https://news.example.com/{n}")
    });
    if let Some(sym) = symbol {
        row["symbol"] = json!(sym);
    }
    row
}

/// Ticker news honouring the upstream `limit`; `tickers` may be a comma list.
#[must_use]
pub fn stock_news(tickers: Option<&str>, limit: usize) -> Value {
    let symbols: Vec<&str> = tickers
        .map(|t| t.split(',').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    let rows = (0..limit)
        .map(|n| {
            let sym = if symbols.is_empty() {
                Some("AAPL")
            } else {
                Some(symbols[n % symbols.len()])
            };
            article(sym, n)
        })
        .collect();
    Value::Array(rows)
}

/// A full page of general market news (upstream ignores any limit).
#[must_use]
pub fn general_news() -> Value {
    Value::Array((0..20).map(|n| article(None, n)).collect())
}
