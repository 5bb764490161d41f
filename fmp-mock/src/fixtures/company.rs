use serde_json::{Value, json};

/// Directory of listed securities.
#[must_use]
pub fn company_list() -> Value {
    json!([
        { "symbol": "AAPL", "name": "Apple Inc.", "price": 190.0, "exchange": "NASDAQ Global Select", "exchangeShortName": "NASDAQ", "type": "stock" },
        { "symbol": "MSFT", "name": "Microsoft Corporation", "price": 420.0, "exchange": "NASDAQ Global Select", "exchangeShortName": "NASDAQ", "type": "stock" },
        { "symbol": "KO", "name": "The Coca-Cola Company", "price": 60.0, "exchange": "New York Stock Exchange", "exchangeShortName": "NYSE", "type": "stock" },
        { "symbol": "SPY", "name": "SPDR S&P 500 ETF Trust", "price": 510.0, "exchange": "NYSE Arca", "exchangeShortName": "AMEX", "type": "etf" }
    ])
}

/// Profile response: a one-element array for known symbols, empty otherwise.
#[must_use]
pub fn profile(symbol: &str) -> Value {
    let row = match symbol {
        "AAPL" => json!({
            "symbol": "AAPL",
            "companyName": "Apple Inc.",
            "price": 190.0,
            "beta": 1.29,
            "volAvg": 55_000_000,
            "mktCap": 2_950_000_000_000_i64,
            "lastDiv": 0.96,
            "range": "164.08-199.62",
            "currency": "USD",
            "exchange": "NASDAQ Global Select",
            "exchangeShortName": "NASDAQ",
            "industry": "Consumer Electronics",
            "sector": "Technology",
            "country": "US",
            "website": "https://www.apple.com",
            "description": "Designs, manufactures, and markets smartphones and personal computers.",
            "ceo": "Timothy D. Cook",
            "image": "https://financialmodelingprep.com/image-stock/AAPL.png",
            "ipoDate": "1980-12-12"
        }),
        "MSFT" => json!({
            "symbol": "MSFT",
            "companyName": "Microsoft Corporation",
            "price": 420.0,
            "currency": "USD",
            "exchangeShortName": "NASDAQ",
            "industry": "Software - Infrastructure",
            "sector": "Technology",
            "country": "US",
            "ipoDate": "1986-03-13"
        }),
        _ => return json!([]),
    };
    Value::Array(vec![row])
}

/// Two forward-looking annual estimates.
#[must_use]
pub fn analyst_estimates(symbol: &str) -> Value {
    json!([
        {
            "symbol": symbol,
            "date": "2025-09-27",
            "estimatedRevenueLow": 400_000_000_000_i64,
            "estimatedRevenueHigh": 420_000_000_000_i64,
            "estimatedRevenueAvg": 410_000_000_000_i64,
            "estimatedEpsLow": 6.9,
            "estimatedEpsHigh": 7.4,
            "estimatedEpsAvg": 7.1,
            "estimatedNetIncomeAvg": 108_000_000_000_i64,
            "numberAnalystEstimatedRevenue": 24,
            "numberAnalystsEstimatedEps": 28
        },
        {
            "symbol": symbol,
            "date": "2024-09-28",
            "estimatedRevenueAvg": 390_000_000_000_i64,
            "estimatedEpsAvg": 6.6,
            "numberAnalystEstimatedRevenue": 26,
            "numberAnalystsEstimatedEps": 30
        }
    ])
}
