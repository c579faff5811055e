//! Turn counter and in-game clock/calendar.

use std::fmt;

pub const START_HOUR: u8 = 12;
pub const START_DAY: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Days in the month. The calendar has no leap years.
    pub fn days(self) -> u8 {
        match self {
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Advance by `minutes`; returns how many midnights were crossed.
    pub fn advance(&mut self, minutes: u32) -> u32 {
        let total = u32::from(self.hour) * 60 + u32::from(self.minute) + minutes;
        let days = total / (24 * 60);
        let rest = total % (24 * 60);
        self.hour = (rest / 60) as u8;
        self.minute = (rest % 60) as u8;
        days
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub day: u8,
    pub month: Month,
}

impl CalendarDate {
    pub fn next_day(&mut self) {
        if self.day >= self.month.days() {
            self.day = 1;
            self.month = self.month.next();
        } else {
            self.day += 1;
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameStats {
    pub turn_count: u64,
    pub time: TimeOfDay,
    pub date: CalendarDate,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    pub fn new() -> Self {
        Self {
            turn_count: 0,
            time: TimeOfDay { hour: START_HOUR, minute: 0 },
            date: CalendarDate { day: START_DAY, month: Month::January },
        }
    }

    pub fn advance_turn(&mut self, minutes_per_turn: u32) {
        self.turn_count += 1;
        for _ in 0..self.time.advance(minutes_per_turn) {
            self.date.next_day();
        }
    }
}
