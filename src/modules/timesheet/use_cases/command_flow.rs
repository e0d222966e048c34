// Shared write flow for every timesheet command.
//
// Responsibilities
// - Load the current snapshot and its version from the repository.
// - Call the pure decide function with the state.
// - Fold the emitted events into the next snapshot and save it with the loaded version.
// - Skip the save when the decision emitted nothing.

use crate::modules::timesheet::core::errors::DecideError;
use crate::modules::timesheet::core::events::TimesheetEvent;
use crate::modules::timesheet::core::evolve::evolve;
use crate::modules::timesheet::core::ports::TimesheetRepository;
use crate::modules::timesheet::core::state::TimesheetState;
use crate::modules::timesheet::use_cases::application_error::ApplicationError;

pub struct CommandOutcome {
    pub events: Vec<TimesheetEvent>,
    pub state: TimesheetState,
}

pub async fn execute<TRepository, TDecide>(
    repository: &TRepository,
    decide: TDecide,
) -> Result<CommandOutcome, ApplicationError>
where
    TRepository: TimesheetRepository + ?Sized,
    TDecide: FnOnce(&TimesheetState) -> Result<Vec<TimesheetEvent>, DecideError>,
{
    let loaded = repository.load().await?;
    let events = decide(&loaded.state)?;
    if events.is_empty() {
        return Ok(CommandOutcome {
            events,
            state: loaded.state,
        });
    }

    let state = events.iter().cloned().fold(loaded.state, evolve);
    repository.save(loaded.version, &state).await?;
    Ok(CommandOutcome { events, state })
}
