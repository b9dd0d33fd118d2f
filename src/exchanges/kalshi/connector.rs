use crate::core::errors::ExchangeResult;
use crate::core::kernel::RestClient;
use crate::core::traits::{ExchangeConnector, ExchangeInfoSource};
use crate::core::types::{
    Announcements, ExchangeSchedule, ExchangeStatus, SeriesFeeChanges, UserDataTimestamp,
};
use crate::exchanges::kalshi::rest::KalshiRestClient;
use async_trait::async_trait;
use tracing::instrument;

/// Kalshi connector exposing the exchange-information surface
pub struct KalshiConnector<R: RestClient> {
    rest: KalshiRestClient<R>,
}

impl<R: RestClient> KalshiConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: KalshiRestClient::new(rest),
        }
    }
}

#[async_trait]
impl<R: RestClient> ExchangeInfoSource for KalshiConnector<R> {
    #[instrument(skip(self), fields(exchange = "kalshi"))]
    async fn exchange_status(&self) -> ExchangeResult<ExchangeStatus> {
        self.rest.get_exchange_status().await
    }

    #[instrument(skip(self), fields(exchange = "kalshi"))]
    async fn exchange_announcements(&self) -> ExchangeResult<Announcements> {
        self.rest.get_exchange_announcements().await
    }

    #[instrument(skip(self), fields(exchange = "kalshi"))]
    async fn series_fee_changes(
        &self,
        series_ticker: Option<&str>,
        show_historical: bool,
    ) -> ExchangeResult<SeriesFeeChanges> {
        self.rest
            .get_series_fee_changes(series_ticker, show_historical)
            .await
    }

    #[instrument(skip(self), fields(exchange = "kalshi"))]
    async fn exchange_schedule(&self) -> ExchangeResult<ExchangeSchedule> {
        self.rest.get_exchange_schedule().await
    }

    #[instrument(skip(self), fields(exchange = "kalshi"))]
    async fn user_data_timestamp(&self) -> ExchangeResult<UserDataTimestamp> {
        self.rest.get_user_data_timestamp().await
    }
}

impl<R: RestClient> ExchangeConnector for KalshiConnector<R> {}
