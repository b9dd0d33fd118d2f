use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current operating state of the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeStatus {
    pub exchange_active: bool,
    pub trading_active: bool,
    pub exchange_estimated_resume_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub delivery_time: Option<DateTime<Utc>>,
    pub status: AnnouncementStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcements {
    pub announcements: Vec<Announcement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeType {
    Quadratic,
    QuadraticWithMakerFees,
    Flat,
}

/// A scheduled change to the fee structure of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFeeChange {
    pub id: String,
    pub series_ticker: String,
    pub fee_type: FeeType,
    pub fee_multiplier: f64,
    pub scheduled_ts: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFeeChanges {
    pub series_fee_change_arr: Vec<SeriesFeeChange>,
}

/// Daily open/close window, local exchange time as "HH:MM" strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub open_time: String,
    pub close_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardHours {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub monday: Vec<TimeWindow>,
    pub tuesday: Vec<TimeWindow>,
    pub wednesday: Vec<TimeWindow>,
    pub thursday: Vec<TimeWindow>,
    pub friday: Vec<TimeWindow>,
    pub saturday: Vec<TimeWindow>,
    pub sunday: Vec<TimeWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub standard_hours: Vec<StandardHours>,
    pub maintenance_windows: Vec<MaintenanceWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeSchedule {
    pub schedule: Schedule,
}

/// Timestamp of the most recent update to the caller's user data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDataTimestamp {
    pub as_of_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_status_deserializes() {
        let status: ExchangeStatus = serde_json::from_str(
            r#"{
                "exchange_active": true,
                "trading_active": true,
                "exchange_estimated_resume_time": null
            }"#,
        )
        .unwrap();

        assert!(status.exchange_active);
        assert!(status.trading_active);
        assert_eq!(status.exchange_estimated_resume_time, None);
    }

    #[test]
    fn exchange_status_rejects_missing_fields() {
        let result =
            serde_json::from_str::<ExchangeStatus>(r#"{"invalid_field": "invalid"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn announcements_deserialize() {
        let announcements: Announcements = serde_json::from_str(
            r#"{
                "announcements": [
                    {
                        "type": "maintenance",
                        "message": "Scheduled maintenance tonight",
                        "delivery_time": null,
                        "status": "active"
                    },
                    {
                        "type": "update",
                        "message": "New features released",
                        "delivery_time": null,
                        "status": "inactive"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(announcements.announcements.len(), 2);
        assert_eq!(announcements.announcements[0].kind, "maintenance");
        assert_eq!(
            announcements.announcements[0].status,
            AnnouncementStatus::Active
        );
        assert_eq!(
            announcements.announcements[1].status,
            AnnouncementStatus::Inactive
        );
    }

    #[test]
    fn series_fee_changes_deserialize() {
        let changes: SeriesFeeChanges = serde_json::from_str(
            r#"{
                "series_fee_change_arr": [
                    {
                        "id": "fee-001",
                        "series_ticker": "SERIES-001",
                        "fee_type": "quadratic",
                        "fee_multiplier": 1.5,
                        "scheduled_ts": null
                    },
                    {
                        "id": "fee-002",
                        "series_ticker": "SERIES-002",
                        "fee_type": "quadratic_with_maker_fees",
                        "fee_multiplier": 2.0,
                        "scheduled_ts": "2024-06-01T00:00:00Z"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(changes.series_fee_change_arr.len(), 2);
        assert_eq!(changes.series_fee_change_arr[0].fee_type, FeeType::Quadratic);
        assert_eq!(
            changes.series_fee_change_arr[1].fee_type,
            FeeType::QuadraticWithMakerFees
        );
        assert!(changes.series_fee_change_arr[1].scheduled_ts.is_some());
    }

    #[test]
    fn exchange_schedule_deserializes() {
        let schedule: ExchangeSchedule = serde_json::from_str(
            r#"{
                "schedule": {
                    "standard_hours": [
                        {
                            "start_time": "2024-01-01T00:00:00Z",
                            "end_time": "2024-12-31T23:59:59Z",
                            "monday": [{"open_time": "09:00", "close_time": "17:00"}],
                            "tuesday": [],
                            "wednesday": [],
                            "thursday": [],
                            "friday": [],
                            "saturday": [],
                            "sunday": []
                        }
                    ],
                    "maintenance_windows": [
                        {
                            "start_datetime": "2024-06-01T00:00:00Z",
                            "end_datetime": "2024-06-01T04:00:00Z"
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(schedule.schedule.standard_hours.len(), 1);
        assert_eq!(schedule.schedule.maintenance_windows.len(), 1);
        assert_eq!(
            schedule.schedule.standard_hours[0].monday[0].open_time,
            "09:00"
        );
    }

    #[test]
    fn user_data_timestamp_deserializes() {
        let ts: UserDataTimestamp =
            serde_json::from_str(r#"{"as_of_time": null}"#).unwrap();
        assert_eq!(ts.as_of_time, None);

        let ts: UserDataTimestamp =
            serde_json::from_str(r#"{"as_of_time": "2024-03-15T12:30:00Z"}"#).unwrap();
        assert!(ts.as_of_time.is_some());
    }

    #[test]
    fn user_data_timestamp_rejects_non_timestamp() {
        let result =
            serde_json::from_str::<UserDataTimestamp>(r#"{"as_of_time": "not_a_timestamp"}"#);
        assert!(result.is_err());
    }
}
