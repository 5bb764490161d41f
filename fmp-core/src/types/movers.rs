use serde::{Deserialize, Serialize};

/// The leaderboards merged into [`MarketMovers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoverBoard {
    /// Largest percentage gains.
    Gainers,
    /// Largest percentage losses.
    Losers,
    /// Highest volume.
    MostActive,
}

impl MoverBoard {
    /// Every leaderboard, in the order they are requested.
    pub const ALL: [Self; 3] = [Self::Gainers, Self::Losers, Self::MostActive];

    /// Upstream path segment under `/v3/stock_market/`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Gainers => "gainers",
            Self::Losers => "losers",
            Self::MostActive => "actives",
        }
    }
}

impl std::fmt::Display for MoverBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMover {
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Absolute change.
    #[serde(default)]
    pub change: Option<f64>,
    /// Last price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Percent change.
    #[serde(default)]
    pub changes_percentage: Option<f64>,
}

/// The three leaderboards. A board is empty when it could not be fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMovers {
    /// Top gainers.
    pub gainers: Vec<MarketMover>,
    /// Top losers.
    pub losers: Vec<MarketMover>,
    /// Most active by volume.
    pub most_active: Vec<MarketMover>,
}

impl MarketMovers {
    /// Mutable access to the vector backing a leaderboard.
    pub fn board_mut(&mut self, board: MoverBoard) -> &mut Vec<MarketMover> {
        match board {
            MoverBoard::Gainers => &mut self.gainers,
            MoverBoard::Losers => &mut self.losers,
            MoverBoard::MostActive => &mut self.most_active,
        }
    }
}
