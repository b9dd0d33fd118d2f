use crate::core::errors::ExchangeResult;
use crate::core::kernel::RestClient;
use crate::core::types::{
    Announcements, ExchangeSchedule, ExchangeStatus, SeriesFeeChanges, UserDataTimestamp,
};

pub const EXCHANGE_STATUS_PATH: &str = "/exchange/status";
pub const EXCHANGE_ANNOUNCEMENTS_PATH: &str = "/exchange/announcements";
pub const SERIES_FEE_CHANGES_PATH: &str = "/series/fee_changes";
pub const EXCHANGE_SCHEDULE_PATH: &str = "/exchange/schedule";
pub const USER_DATA_TIMESTAMP_PATH: &str = "/exchange/user_data_timestamp";

/// Thin typed wrapper around [`RestClient`] for the Kalshi API
///
/// Every endpoint here requires authentication; the signer attached to the
/// underlying client produces the access headers per request.
pub struct KalshiRestClient<R: RestClient> {
    client: R,
}

impl<R: RestClient> KalshiRestClient<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    /// Get the current exchange status
    pub async fn get_exchange_status(&self) -> ExchangeResult<ExchangeStatus> {
        self.client.get_json(EXCHANGE_STATUS_PATH, &[], true).await
    }

    /// Get exchange-wide announcements
    pub async fn get_exchange_announcements(&self) -> ExchangeResult<Announcements> {
        self.client
            .get_json(EXCHANGE_ANNOUNCEMENTS_PATH, &[], true)
            .await
    }

    /// Get scheduled series fee changes
    pub async fn get_series_fee_changes(
        &self,
        series_ticker: Option<&str>,
        show_historical: bool,
    ) -> ExchangeResult<SeriesFeeChanges> {
        let mut params = Vec::new();

        if let Some(ticker) = series_ticker {
            params.push(("series_ticker", ticker));
        }
        let show_historical = if show_historical { "true" } else { "false" };
        params.push(("show_historical", show_historical));

        self.client
            .get_json(SERIES_FEE_CHANGES_PATH, &params, true)
            .await
    }

    /// Get the trading schedule and maintenance windows
    pub async fn get_exchange_schedule(&self) -> ExchangeResult<ExchangeSchedule> {
        self.client
            .get_json(EXCHANGE_SCHEDULE_PATH, &[], true)
            .await
    }

    /// Get the timestamp of the most recent user-data update
    pub async fn get_user_data_timestamp(&self) -> ExchangeResult<UserDataTimestamp> {
        self.client
            .get_json(USER_DATA_TIMESTAMP_PATH, &[], true)
            .await
    }
}
