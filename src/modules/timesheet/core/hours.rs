use crate::modules::timesheet::core::clock_time::{ClockTime, MINUTES_PER_DAY};
use serde::{Deserialize, Serialize};

/// Fixed nominal workday that overtime is measured against.
pub const NOMINAL_WORKDAY_HOURS: f64 = 8.0;

const MINUTES_PER_HOUR: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkedHours {
    pub total_hours: f64,
    /// Negative when the day was shorter than the nominal workday.
    pub overtime_hours: f64,
}

impl WorkedHours {
    pub const ZERO: WorkedHours = WorkedHours {
        total_hours: 0.0,
        overtime_hours: 0.0,
    };
}

/// Worked and overtime hours for one shift.
///
/// An end time earlier than the start time is a shift crossing midnight. A pause
/// longer than the shift floors the total at zero.
pub fn calculate_hours(start: ClockTime, end: ClockTime, pause_minutes: u32) -> WorkedHours {
    let mut duration_minutes = end.minutes_since_midnight() - start.minutes_since_midnight();
    if duration_minutes < 0 {
        duration_minutes += MINUTES_PER_DAY;
    }
    let duration_hours = f64::from(duration_minutes) / MINUTES_PER_HOUR;
    let total_hours = (duration_hours - f64::from(pause_minutes) / MINUTES_PER_HOUR).max(0.0);

    WorkedHours {
        total_hours,
        overtime_hours: total_hours - NOMINAL_WORKDAY_HOURS,
    }
}
