use crate::modules::timesheet::adapters::outbound::key_value_history_repository::KeyValueHistoryRepository;
use crate::modules::timesheet::adapters::outbound::key_value_timesheet_repository::KeyValueTimesheetRepository;
use crate::modules::timesheet::use_cases::add_time_entry::handler::AddTimeEntryHandler;
use crate::modules::timesheet::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::timesheet::use_cases::download_history::handler::DownloadHistoryHandler;
use crate::modules::timesheet::use_cases::export_timesheet::exporter_port::TimesheetExporter;
use crate::modules::timesheet::use_cases::export_timesheet::handler::ExportTimesheetHandler;
use crate::modules::timesheet::use_cases::suggest_location::handler::SuggestLocationHandler;
use crate::modules::timesheet::use_cases::suggest_location::suggester_port::LocationSuggester;
use crate::modules::timesheet::use_cases::summarize_timesheet::handler::TimesheetQueries;
use crate::modules::timesheet::use_cases::update_settings::handler::UpdateSettingsHandler;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub type Repository = KeyValueTimesheetRepository;
pub type History = KeyValueHistoryRepository;

#[derive(Clone)]
pub struct AppState {
    pub add_time_entry: Arc<AddTimeEntryHandler<Repository>>,
    pub delete_time_entry: Arc<DeleteTimeEntryHandler<Repository>>,
    pub update_settings: Arc<UpdateSettingsHandler<Repository>>,
    pub queries: Arc<TimesheetQueries<Repository>>,
    pub export_timesheet: Arc<ExportTimesheetHandler<Repository, History>>,
    pub download_history: Arc<DownloadHistoryHandler<History>>,
    pub suggest_location: Arc<SuggestLocationHandler>,
}

impl AppState {
    /// Wires every handler over one store. All writers share a single repository
    /// so its version check sees every command.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        exporter: Arc<dyn TimesheetExporter>,
        suggester: Arc<dyn LocationSuggester>,
        calendar_events: impl Into<String>,
    ) -> Self {
        let repository = Arc::new(KeyValueTimesheetRepository::new(store.clone()));
        let history = Arc::new(KeyValueHistoryRepository::new(store));

        Self {
            add_time_entry: Arc::new(AddTimeEntryHandler::new(repository.clone())),
            delete_time_entry: Arc::new(DeleteTimeEntryHandler::new(repository.clone())),
            update_settings: Arc::new(UpdateSettingsHandler::new(repository.clone())),
            queries: Arc::new(TimesheetQueries::new(repository.clone())),
            export_timesheet: Arc::new(ExportTimesheetHandler::new(
                repository,
                history.clone(),
                exporter,
            )),
            download_history: Arc::new(DownloadHistoryHandler::new(history)),
            suggest_location: Arc::new(SuggestLocationHandler::new(suggester, calendar_events)),
        }
    }
}
