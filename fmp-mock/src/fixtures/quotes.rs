use serde_json::{Value, json};

/// Quote row for a known symbol.
#[must_use]
pub fn quote(symbol: &str) -> Option<Value> {
    let (name, price, prev, exchange) = match symbol {
        "AAPL" => ("Apple Inc.", 190.0, 188.0, "NASDAQ"),
        "MSFT" => ("Microsoft Corporation", 420.0, 418.0, "NASDAQ"),
        "NVDA" => ("NVIDIA Corporation", 1000.0, 990.0, "NASDAQ"),
        "GOOGL" => ("Alphabet Inc.", 150.0, 148.0, "NASDAQ"),
        "KO" => ("The Coca-Cola Company", 60.0, 59.5, "NYSE"),
        _ => return None,
    };
    let change: f64 = price - prev;
    Some(json!({
        "symbol": symbol,
        "name": name,
        "price": price,
        "changesPercentage": change / prev * 100.0,
        "change": change,
        "dayLow": prev,
        "dayHigh": price + 1.0,
        "yearHigh": price * 1.2,
        "yearLow": price * 0.7,
        "marketCap": price * 1.0e10,
        "priceAvg50": price * 0.98,
        "priceAvg200": price * 0.9,
        "exchange": exchange,
        "volume": 50_000_000,
        "avgVolume": 55_000_000,
        "open": prev + 0.5,
        "previousClose": prev,
        "eps": 6.1,
        "pe": price / 6.1,
        "timestamp": 1_700_000_000
    }))
}

/// Batched quote response; unknown symbols are omitted as upstream does.
#[must_use]
pub fn quotes(symbols: &[&str]) -> Value {
    Value::Array(symbols.iter().filter_map(|s| quote(s)).collect())
}
