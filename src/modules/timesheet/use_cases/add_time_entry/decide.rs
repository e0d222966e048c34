use crate::modules::timesheet::core::entry::TimeEntry;
use crate::modules::timesheet::core::errors::DecideError;
use crate::modules::timesheet::core::events::TimesheetEvent;
use crate::modules::timesheet::core::state::TimesheetState;
use crate::modules::timesheet::use_cases::add_time_entry::command::{AddTimeEntry, DayDetails};

pub fn decide_add_time_entry(
    state: &TimesheetState,
    command: AddTimeEntry,
) -> Result<Vec<TimesheetEvent>, DecideError> {
    if !state.settings.has_user_name() {
        return Err(DecideError::MissingUserName);
    }
    if state.entry_on(command.date).is_some() {
        return Err(DecideError::DuplicateDate(command.date));
    }

    let language = state.settings.language;
    let entry = match command.details {
        DayDetails::Worked {
            start,
            end,
            pause_minutes,
            location,
        } => TimeEntry::ordinary(
            command.time_entry_id,
            command.date,
            command.job,
            start,
            end,
            pause_minutes,
            location,
        ),
        DayDetails::Vacation => {
            TimeEntry::vacation(command.time_entry_id, command.date, command.job, language)
        }
        DayDetails::Holiday => {
            TimeEntry::holiday(command.time_entry_id, command.date, command.job, language)
        }
    };

    Ok(vec![TimesheetEvent::TimeEntryAdded(entry)])
}

#[cfg(test)]
mod add_time_entry_decide_tests {
    use super::*;
    use crate::modules::timesheet::core::entry::{EntryKind, Job};
    use crate::modules::timesheet::core::evolve::evolve;
    use crate::modules::timesheet::core::hours::WorkedHours;
    use crate::modules::timesheet::core::settings::Language;
    use crate::tests::fixtures::commands::add_time_entry::AddTimeEntryInputBuilder;
    use crate::tests::fixtures::state::state_for_user;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (TimesheetState, AddTimeEntry) {
        let command = AddTimeEntryInputBuilder::new()
            .build()
            .into_command("te-1")
            .unwrap();
        (state_for_user("Ana Horvat"), command)
    }

    #[rstest]
    fn it_should_accept_a_worked_day(before_each: (TimesheetState, AddTimeEntry)) {
        let (state, command) = before_each;
        let events = decide_add_time_entry(&state, command).unwrap();

        assert_eq!(events.len(), 1);
        let TimesheetEvent::TimeEntryAdded(entry) = &events[0] else {
            panic!("expected TimeEntryAdded, got {:?}", events[0]);
        };
        assert_eq!(entry.id, "te-1");
        assert_eq!(entry.location, "Main Office");
        assert_eq!(entry.hours.total_hours, 8.0);
        assert_eq!(entry.hours.overtime_hours, 0.0);
    }

    #[rstest]
    fn it_should_label_a_vacation_day_in_the_current_language(
        before_each: (TimesheetState, AddTimeEntry),
    ) {
        let (mut state, _) = before_each;
        state.settings.language = Language::De;
        let command = AddTimeEntryInputBuilder::new()
            .date("2024-03-02")
            .vacation()
            .build()
            .into_command("te-2")
            .unwrap();

        let events = decide_add_time_entry(&state, command).unwrap();
        let TimesheetEvent::TimeEntryAdded(entry) = &events[0] else {
            panic!("expected TimeEntryAdded, got {:?}", events[0]);
        };
        assert_eq!(entry.kind, EntryKind::Vacation);
        assert_eq!(entry.location, "Urlaub");
        assert_eq!(entry.hours, WorkedHours::ZERO);
    }

    #[rstest]
    fn it_should_reject_when_the_user_name_is_missing(before_each: (TimesheetState, AddTimeEntry)) {
        let (_, command) = before_each;
        let state = state_for_user("   ");
        assert_eq!(
            decide_add_time_entry(&state, command),
            Err(DecideError::MissingUserName)
        );
    }

    #[rstest]
    fn it_should_reject_a_second_entry_on_the_same_date(
        before_each: (TimesheetState, AddTimeEntry),
    ) {
        let (state, command) = before_each;
        let state = decide_add_time_entry(&state, command.clone())
            .unwrap()
            .into_iter()
            .fold(state, evolve);

        let other_job = AddTimeEntry {
            time_entry_id: "te-other".into(),
            job: Job::Job2,
            details: DayDetails::Holiday,
            ..command
        };
        assert_eq!(
            decide_add_time_entry(&state, other_job),
            Err(DecideError::DuplicateDate(command_date()))
        );
    }

    #[rstest]
    fn it_should_check_the_user_name_before_the_date(before_each: (TimesheetState, AddTimeEntry)) {
        let (state, command) = before_each;
        let mut state = decide_add_time_entry(&state, command.clone())
            .unwrap()
            .into_iter()
            .fold(state, evolve);
        state.settings.user_name.clear();

        assert_eq!(
            decide_add_time_entry(&state, command),
            Err(DecideError::MissingUserName)
        );
    }

    fn command_date() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }
}
