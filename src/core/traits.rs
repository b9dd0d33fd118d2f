use crate::core::{
    errors::ExchangeResult,
    types::{Announcements, ExchangeSchedule, ExchangeStatus, SeriesFeeChanges, UserDataTimestamp},
};
use async_trait::async_trait;

/// Read access to exchange-level information endpoints.
#[async_trait]
pub trait ExchangeInfoSource {
    /// Current operating state of the exchange
    async fn exchange_status(&self) -> ExchangeResult<ExchangeStatus>;

    /// Exchange-wide announcements
    async fn exchange_announcements(&self) -> ExchangeResult<Announcements>;

    /// Scheduled fee changes, optionally filtered by series ticker
    async fn series_fee_changes(
        &self,
        series_ticker: Option<&str>,
        show_historical: bool,
    ) -> ExchangeResult<SeriesFeeChanges>;

    /// Trading hours and maintenance windows
    async fn exchange_schedule(&self) -> ExchangeResult<ExchangeSchedule>;

    /// Timestamp of the most recent update to the caller's user data
    async fn user_data_timestamp(&self) -> ExchangeResult<UserDataTimestamp>;
}

// Composite trait for convenience when you need all functionality
pub trait ExchangeConnector: ExchangeInfoSource {}
