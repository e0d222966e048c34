use crate::modules::timesheet::core::ports::TimesheetRepository;
use crate::modules::timesheet::core::settings::Settings;
use crate::modules::timesheet::use_cases::application_error::ApplicationError;
use crate::modules::timesheet::use_cases::command_flow;
use crate::modules::timesheet::use_cases::update_settings::command::UpdateSettings;
use crate::modules::timesheet::use_cases::update_settings::decide::decide_update_settings;
use std::sync::Arc;
use tracing::info;

pub struct UpdateSettingsHandler<TRepository>
where
    TRepository: TimesheetRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UpdateSettingsHandler<TRepository>
where
    TRepository: TimesheetRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Returns the settings after the change.
    pub async fn handle(&self, command: UpdateSettings) -> Result<Settings, ApplicationError> {
        let outcome = command_flow::execute(&*self.repository, |state| {
            decide_update_settings(state, command)
        })
        .await?;
        if !outcome.events.is_empty() {
            info!(changes = outcome.events.len(), "settings updated");
        }
        Ok(outcome.state.settings)
    }
}

#[cfg(test)]
mod update_settings_handler_tests {
    use crate::modules::timesheet::core::errors::DecideError;
    use crate::modules::timesheet::core::ports::TimesheetRepository;
    use crate::modules::timesheet::core::settings::{CarryOver, OvertimeOption};
    use crate::modules::timesheet::use_cases::application_error::ApplicationError;
    use crate::modules::timesheet::use_cases::update_settings::command::UpdateSettings;
    use crate::modules::timesheet::use_cases::update_settings::handler::UpdateSettingsHandler;
    use crate::tests::fixtures::state::seeded_repository;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_save_the_changed_settings() {
        let repository = seeded_repository("Ana Horvat").await;
        let handler = UpdateSettingsHandler::new(repository.clone());

        let settings = handler
            .handle(UpdateSettings {
                overtime_option: Some(OvertimeOption::Payout),
                carry_over_vacation_days: Some(3.0),
                ..UpdateSettings::default()
            })
            .await
            .unwrap();

        assert_eq!(settings.user_name, "Ana Horvat");
        assert_eq!(settings.overtime_option, OvertimeOption::Payout);
        assert_eq!(
            settings.carry_over,
            CarryOver {
                vacation_days: 3.0,
                overtime_hours: 0.0
            }
        );
        assert_eq!(repository.load().await.unwrap().state.settings, settings);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_save_an_empty_patch() {
        let repository = seeded_repository("Ana Horvat").await;
        let version_before = repository.load().await.unwrap().version;

        UpdateSettingsHandler::new(repository.clone())
            .handle(UpdateSettings::default())
            .await
            .unwrap();

        assert_eq!(repository.load().await.unwrap().version, version_before);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_invalid_carry_over() {
        let repository = seeded_repository("Ana Horvat").await;
        let result = UpdateSettingsHandler::new(repository)
            .handle(UpdateSettings {
                carry_over_overtime_hours: Some(f64::NAN),
                ..UpdateSettings::default()
            })
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::InvalidCarryOver))
        ));
    }
}
