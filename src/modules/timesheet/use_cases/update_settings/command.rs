use crate::modules::timesheet::core::settings::{Language, OvertimeOption};
use serde::Deserialize;

/// Partial settings change. Absent fields keep their current value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub overtime_option: Option<OvertimeOption>,
    #[serde(default)]
    pub carry_over_vacation_days: Option<f64>,
    #[serde(default)]
    pub carry_over_overtime_hours: Option<f64>,
    #[serde(default)]
    pub language: Option<Language>,
}

impl UpdateSettings {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
