mod common;
use chrono::NaiveDate;
use common::{get_service, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let fmp = get_service();

    // 1. Reference data and batched quotes (both cached).
    let companies = fmp.company_list().await?;
    println!("{} listed companies", companies.len());
    let quotes = fmp.stock_quotes(&["MSFT", "AAPL", "aapl"]).await?;
    for q in quotes.iter() {
        println!("{:<6} {:>10.2}", q.symbol, q.price.unwrap_or_default());
    }

    // 2. Per-symbol detail.
    let profile = fmp.company_profile("AAPL").await?;
    println!("{profile:#?}");
    let estimates = fmp.analyst_estimates("AAPL").await?;
    println!("{} analyst estimates", estimates.len());
    let from = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;
    let to = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("bad date")?;
    let history = fmp.historical_prices("AAPL", from, to).await?;
    println!("{} daily bars for {}", history.historical.len(), history.symbol);

    // 3. Composites: partial failures degrade to defaults instead of erroring.
    let indicators = fmp.technical_indicators("AAPL", 14).await?;
    println!("{indicators:#?}");
    let eco = fmp.economic_indicators().await;
    println!("latest GDP: {:?}", eco.gdp.first());
    let movers = fmp.market_movers().await;
    println!(
        "top gainer: {:?}",
        movers.gainers.first().map(|m| m.symbol.as_str())
    );

    // 4. News.
    for article in fmp.stock_news(Some("AAPL"), 3).await? {
        println!("- {}", article.title);
    }
    println!("{} general headlines", fmp.general_news(5).await?.len());

    Ok(())
}
