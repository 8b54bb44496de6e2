// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Date and time value types as defined in RFC 5545 Section 3.3.

/// Date value defined in RFC 5545 Section 3.3.4.
///
/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date               = date-value
///
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueDate {
    /// Year component.
    pub year: i32,

    /// Month component, 1-12.
    pub month: u8,

    /// Day component, 1-31.
    pub day: u8,
}

impl ValueDate {
    /// Convert to `chrono::NaiveDate`, `None` if the components do not name a
    /// real calendar day.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn naive_date(self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for ValueDate {
    #[expect(clippy::cast_possible_truncation)] // month/day always fit in u8
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

/// Time value defined in RFC 5545 Section 3.3.12.
///
/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// time         = time-hour time-minute time-second [time-utc]
///
/// time-hour    = 2DIGIT        ;00-23
/// time-minute  = 2DIGIT        ;00-59
/// time-second  = 2DIGIT        ;00-60
/// ;The "60" value is used to account for positive "leap" seconds.
///
/// time-utc     = "Z"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueTime {
    /// Hour component, 0-23.
    pub hour: u8,

    /// Minute component, 0-59.
    pub minute: u8,

    /// Second component, 0-59.
    pub second: u8,

    /// Whether the time is in UTC (indicated by a trailing 'Z').
    pub utc: bool,
}

impl ValueTime {
    /// Create a new `ValueTime` from components.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8, utc: bool) -> Self {
        Self {
            hour,
            minute,
            second,
            utc,
        }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveTime> for ValueTime {
    #[expect(clippy::cast_possible_truncation)] // hour/minute/second always fit in u8
    fn from(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
            utc: false,
        }
    }
}

/// Date-Time value defined in RFC 5545 Section 3.3.5.
///
/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date-time  = date "T" time ;As specified in the DATE and TIME
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueDateTime {
    /// Date component.
    pub date: ValueDate,

    /// Time component.
    pub time: ValueTime,
}

impl ValueDateTime {
    /// Create a new `ValueDateTime` from components.
    #[must_use]
    pub const fn new(date: ValueDate, time: ValueTime) -> Self {
        Self { date, time }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for ValueDateTime {
    /// A naive date-time carries no zone, so it maps to floating local time.
    fn from(dt: chrono::NaiveDateTime) -> Self {
        Self {
            date: dt.date().into(),
            time: dt.time().into(),
        }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for ValueDateTime {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        let mut value = Self::from(dt.naive_utc());
        value.time.utc = true;
        value
    }
}
