use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What happens to accumulated overtime: paid out or kept as a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OvertimeOption {
    Payout,
    #[default]
    Keep,
}

impl OvertimeOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            OvertimeOption::Payout => "payout",
            OvertimeOption::Keep => "keep",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OvertimeOption::Payout => "Payout",
            OvertimeOption::Keep => "Keep",
        }
    }
}

impl FromStr for OvertimeOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payout" => Ok(OvertimeOption::Payout),
            "keep" => Ok(OvertimeOption::Keep),
            other => Err(format!("unknown overtime option '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn vacation_label(&self) -> &'static str {
        match self {
            Language::En => "Vacation",
            Language::De => "Urlaub",
        }
    }

    pub fn holiday_label(&self) -> &'static str {
        match self {
            Language::En => "Holiday",
            Language::De => "Feiertag",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            other => Err(format!("unknown language '{other}'")),
        }
    }
}

/// Balances entered by hand for what was left over from the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarryOver {
    pub vacation_days: f64,
    pub overtime_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub user_name: String,
    pub overtime_option: OvertimeOption,
    pub carry_over: CarryOver,
    pub language: Language,
}

impl Settings {
    pub fn has_user_name(&self) -> bool {
        !self.user_name.trim().is_empty()
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_keep_english_and_no_user() {
        let settings = Settings::default();
        assert_eq!(settings.overtime_option, OvertimeOption::Keep);
        assert_eq!(settings.language, Language::En);
        assert!(!settings.has_user_name());
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("Ana Horvat", true)]
    fn it_should_tell_whether_the_user_name_is_set(#[case] name: &str, #[case] expected: bool) {
        let settings = Settings {
            user_name: name.to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.has_user_name(), expected);
    }

    #[rstest]
    #[case("payout", Ok(OvertimeOption::Payout))]
    #[case("keep", Ok(OvertimeOption::Keep))]
    #[case("Payout", Err("unknown overtime option 'Payout'".to_string()))]
    fn it_should_parse_the_stored_overtime_option(
        #[case] raw: &str,
        #[case] expected: Result<OvertimeOption, String>,
    ) {
        assert_eq!(raw.parse::<OvertimeOption>(), expected);
    }

    #[rstest]
    fn it_should_label_special_days_per_language() {
        assert_eq!(Language::En.vacation_label(), "Vacation");
        assert_eq!(Language::De.holiday_label(), "Feiertag");
        assert_eq!("de".parse::<Language>(), Ok(Language::De));
        assert!("hr".parse::<Language>().is_err());
    }
}
