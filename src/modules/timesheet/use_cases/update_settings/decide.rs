use crate::modules::timesheet::core::errors::DecideError;
use crate::modules::timesheet::core::events::TimesheetEvent;
use crate::modules::timesheet::core::state::TimesheetState;
use crate::modules::timesheet::use_cases::update_settings::command::UpdateSettings;

pub fn decide_update_settings(
    _state: &TimesheetState,
    command: UpdateSettings,
) -> Result<Vec<TimesheetEvent>, DecideError> {
    let carry_over = [
        command.carry_over_vacation_days,
        command.carry_over_overtime_hours,
    ];
    if carry_over.iter().flatten().any(|value| !value.is_finite()) {
        return Err(DecideError::InvalidCarryOver);
    }

    let mut events = Vec::new();
    if let Some(user_name) = command.user_name {
        events.push(TimesheetEvent::UserNameSet {
            user_name: user_name.trim().to_string(),
        });
    }
    if let Some(overtime_option) = command.overtime_option {
        events.push(TimesheetEvent::OvertimeOptionSet { overtime_option });
    }
    if carry_over.iter().any(Option::is_some) {
        events.push(TimesheetEvent::CarryOverSet {
            vacation_days: command.carry_over_vacation_days,
            overtime_hours: command.carry_over_overtime_hours,
        });
    }
    if let Some(language) = command.language {
        events.push(TimesheetEvent::LanguageSet { language });
    }
    Ok(events)
}
