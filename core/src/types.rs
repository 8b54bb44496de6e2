// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Weekday;

/// Days iterated Sunday first to match the bit layout.
const ALL_DAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A set of weekdays, stored as one bit per day with Sunday as bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The set with no days.
    pub const fn empty() -> Self {
        WeekdaySet(0)
    }

    /// Adds a day to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= bit(day);
    }

    /// Whether the set contains a day.
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Whether the set contains no days.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of days in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the contained days from Sunday through Saturday.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        ALL_DAYS.into_iter().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_sunday()
}
