use fmp_core::{Endpoint, MarketMover, MarketMovers, MoverBoard};

use crate::FmpApiService;
use crate::fanout::FanOut;

impl FmpApiService {
    /// Top gainers, losers and most active symbols for the session.
    ///
    /// The three leaderboards are fetched concurrently; a board that fails is
    /// returned empty. This call does not fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn market_movers(&self) -> MarketMovers {
        let fan = MoverBoard::ALL.into_iter().fold(FanOut::new(), |fan, board| {
            let endpoint = Endpoint::new(format!("/v3/stock_market/{}", board.path_segment()));
            fan.branch(board, Vec::new(), async move {
                self.fetch::<Vec<MarketMover>>(&endpoint).await
            })
        });

        fan.settle()
            .await
            .merge_into(MarketMovers::default(), |acc, board, rows| {
                *acc.board_mut(board) = rows;
            })
    }
}
