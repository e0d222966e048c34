use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::modules::timesheet::core::settings::{OvertimeOption, Settings};
use crate::modules::timesheet::use_cases::update_settings::command::UpdateSettings;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlOvertimeOption {
    Payout,
    Keep,
}

impl From<OvertimeOption> for GqlOvertimeOption {
    fn from(option: OvertimeOption) -> Self {
        match option {
            OvertimeOption::Payout => Self::Payout,
            OvertimeOption::Keep => Self::Keep,
        }
    }
}

impl From<GqlOvertimeOption> for OvertimeOption {
    fn from(option: GqlOvertimeOption) -> Self {
        match option {
            GqlOvertimeOption::Payout => Self::Payout,
            GqlOvertimeOption::Keep => Self::Keep,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlSettings {
    pub user_name: String,
    pub overtime_option: GqlOvertimeOption,
    pub carry_over_vacation_days: f64,
    pub carry_over_overtime_hours: f64,
    pub language: String,
}

impl From<Settings> for GqlSettings {
    fn from(s: Settings) -> Self {
        Self {
            overtime_option: s.overtime_option.into(),
            carry_over_vacation_days: s.carry_over.vacation_days,
            carry_over_overtime_hours: s.carry_over.overtime_hours,
            language: s.language.as_str().to_string(),
            user_name: s.user_name,
        }
    }
}

#[derive(Default)]
pub struct UpdateSettingsMutation;

#[Object]
impl UpdateSettingsMutation {
    async fn set_overtime_option(
        &self,
        context: &Context<'_>,
        overtime_option: GqlOvertimeOption,
    ) -> GqlResult<GqlSettings> {
        let state = context.data_unchecked::<AppState>();
        let settings = state
            .update_settings
            .handle(UpdateSettings {
                overtime_option: Some(overtime_option.into()),
                ..UpdateSettings::default()
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(settings.into())
    }
}
