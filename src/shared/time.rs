use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use serde::Serialize;

/// A time of day in seconds since midnight of the service day.
///
/// Feed times may exceed 24:00:00 for trips running past midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Time(u32);

impl From<u32> for Time {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Sub<Time> for Time {
    type Output = Duration;

    /// Saturates at zero when `rhs` is later than `self`.
    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0.saturating_sub(rhs.0))
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hms_string())
    }
}

impl Time {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub fn to_hms_string(&self) -> String {
        let h = self.0 / 3600;
        let m = (self.0 % 3600) / 60;
        let s = self.0 % 60;
        format!("{:02}:{:02}:{:02}", h, m, s)
    }

    /// Parses `H:MM:SS` or `HH:MM:SS`. Hours are unbounded, minutes and seconds must be below 60.
    pub fn from_hms(time: &str) -> Option<Self> {
        const HOUR_TO_SEC: u32 = 60 * 60;
        const MINUTE_TO_SEC: u32 = 60;
        let mut split = time.trim().split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        let seconds: u32 = split.next()?.parse().ok()?;
        if split.next().is_some() || minutes >= 60 || seconds >= 60 {
            return None;
        }
        let seconds = hours
            .checked_mul(HOUR_TO_SEC)?
            .checked_add(minutes * MINUTE_TO_SEC + seconds)?;
        Some(Self(seconds))
    }
}

/// A span of whole seconds, such as a frequency headway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Duration {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes * 60)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00:00";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_unparse_2() {
    let time = "12:30:30";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_past_midnight() {
    let time = "25:10:00";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(stime.as_seconds(), 25 * 3600 + 600);
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_single_digit_hour() {
    assert_eq!(Time::from_hms("7:05:00").unwrap().as_seconds(), 7 * 3600 + 300);
}

#[test]
fn valid_time_test() {
    assert_eq!(Time::from_hms("01:01:30").unwrap().as_seconds(), 3690);
}

#[test]
fn invalid_time_test_1() {
    assert!(Time::from_hms("00:00:0a").is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(Time::from_hms("00:00").is_none())
}

#[test]
fn invalid_time_test_3() {
    assert!(Time::from_hms("00:61:00").is_none());
    assert!(Time::from_hms("00:00:00:00").is_none());
    assert!(Time::from_hms("").is_none());
}

#[test]
fn time_arithmetic() {
    let start = Time::from_hms("08:00:00").unwrap();
    let end = start + Duration::from_minutes(15);
    assert_eq!(end.to_hms_string(), "08:15:00");
    assert_eq!((end - start).as_seconds(), 900);
}

#[test]
fn time_difference_saturates() {
    let early = Time::from_hms("07:59:00").unwrap();
    let late = Time::from_hms("08:00:00").unwrap();
    assert_eq!(early - late, Duration::from_seconds(0));
    assert_eq!((late - early).as_seconds(), 60);
    assert_eq!(
        Time::from_seconds(u32::MAX) + Duration::from_minutes(1),
        Time::from_seconds(u32::MAX)
    );
}
