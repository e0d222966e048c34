use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Wall-clock time of day with minute precision, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes_since_midnight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time '{0}', expected HH:MM")]
pub struct ParseClockTimeError(pub String);

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes_since_midnight: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    pub fn hour(&self) -> u8 {
        (self.minutes_since_midnight / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minutes_since_midnight % 60) as u8
    }

    pub fn minutes_since_midnight(&self) -> i32 {
        i32::from(self.minutes_since_midnight)
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    // Accepts `H:MM` and `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseClockTimeError(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
            return Err(invalid());
        }
        let hour = hour.parse::<u8>().map_err(|_| invalid())?;
        let minute = minute.parse::<u8>().map_err(|_| invalid())?;
        ClockTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod clock_time_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("07:00", 7, 0)]
    #[case("7:05", 7, 5)]
    #[case("23:59", 23, 59)]
    #[case("00:00", 0, 0)]
    #[case(" 16:30 ", 16, 30)]
    fn it_should_parse_valid_times(#[case] input: &str, #[case] hour: u8, #[case] minute: u8) {
        let time: ClockTime = input.parse().expect("expected a valid time");
        assert_eq!(time.hour(), hour);
        assert_eq!(time.minute(), minute);
    }

    #[rstest]
    #[case("")]
    #[case("24:00")]
    #[case("12:60")]
    #[case("12:5")]
    #[case("123:00")]
    #[case("12-00")]
    #[case("ab:cd")]
    #[case("+1:00")]
    fn it_should_reject_malformed_times(#[case] input: &str) {
        assert_eq!(
            input.parse::<ClockTime>(),
            Err(ParseClockTimeError(input.to_string()))
        );
    }

    #[rstest]
    fn it_should_display_with_leading_zeros() {
        let time = ClockTime::new(6, 5).unwrap();
        assert_eq!(time.to_string(), "06:05");
        assert_eq!(time.minutes_since_midnight(), 365);
    }

    #[rstest]
    fn it_should_serialize_as_a_string() {
        let time = ClockTime::new(23, 0).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"23:00\"");
        assert_eq!(serde_json::from_str::<ClockTime>("\"23:00\"").unwrap(), time);
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
