use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl ScheduleUnit {
    fn secs(self) -> u64 {
        match self {
            ScheduleUnit::Seconds => 1,
            ScheduleUnit::Minutes => 60,
            ScheduleUnit::Hours => 3_600,
            ScheduleUnit::Days => 86_400,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ScheduleUnit::Seconds => "seconds",
            ScheduleUnit::Minutes => "minutes",
            ScheduleUnit::Hours => "hours",
            ScheduleUnit::Days => "days",
        }
    }
}

impl FromStr for ScheduleUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "second" | "seconds" => Ok(ScheduleUnit::Seconds),
            "minute" | "minutes" => Ok(ScheduleUnit::Minutes),
            "hour" | "hours" => Ok(ScheduleUnit::Hours),
            "day" | "days" => Ok(ScheduleUnit::Days),
            _ => Err(()),
        }
    }
}

/// Fixed-cadence trigger written as `"every <N> <unit>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Schedule {
    amount: u64,
    unit: ScheduleUnit,
}

impl Schedule {
    pub fn daily() -> Self {
        Self {
            amount: 24,
            unit: ScheduleUnit::Hours,
        }
    }

    pub fn period(&self) -> Duration {
        Duration::from_secs(self.amount.saturating_mul(self.unit.secs()))
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::daily()
    }
}

impl FromStr for Schedule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidSchedule(s.to_string());

        let mut parts = s.split_whitespace();
        let (Some(keyword), Some(amount), Some(unit), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if !keyword.eq_ignore_ascii_case("every") {
            return Err(invalid());
        }
        let amount: u64 = amount.parse().map_err(|_| invalid())?;
        if amount == 0 {
            return Err(invalid());
        }
        let unit: ScheduleUnit = unit.parse().map_err(|_| invalid())?;

        Ok(Self { amount, unit })
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "every {} {}", self.amount, self.unit.as_str())
    }
}

impl TryFrom<String> for Schedule {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Schedule> for String {
    fn from(schedule: Schedule) -> Self {
        schedule.to_string()
    }
}
