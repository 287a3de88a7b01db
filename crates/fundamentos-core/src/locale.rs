//! Fixed-locale date rendering.
//!
//! Month and weekday names come from an explicit table rather than the host
//! environment, so the output is identical on every machine.

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;

use chrono::{Datelike, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLocale {
    pub tag: &'static str,
    /// Weekday names indexed from Sunday.
    pub weekdays: [&'static str; 7],
    /// Month names indexed from January.
    pub months: [&'static str; 12],
    /// Word joining day, month and year in spelled-out dates.
    pub joiner: &'static str,
}

pub const PT_BR: DateLocale = DateLocale {
    tag: "pt-BR",
    weekdays: [
        "domingo",
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
    ],
    months: [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ],
    joiner: "de",
};

impl Default for DateLocale {
    fn default() -> Self {
        PT_BR
    }
}

impl DateLocale {
    pub fn weekday_name(&self, at: &NaiveDateTime) -> &'static str {
        self.weekdays[at.weekday().num_days_from_sunday() as usize]
    }

    pub fn month_name(&self, at: &NaiveDateTime) -> &'static str {
        self.months[at.month0() as usize]
    }

    /// `segunda-feira, 05 de janeiro de 2026 09:07:03`
    pub fn full(&self, at: &NaiveDateTime) -> String {
        format!(
            "{}, {} {}",
            self.weekday_name(at),
            self.spelled_month(at),
            at.format("%H:%M:%S")
        )
    }

    /// `05/01/2026`
    pub fn date_only(&self, at: &NaiveDateTime) -> String {
        at.format("%d/%m/%Y").to_string()
    }

    /// `09:07`
    pub fn time_only(&self, at: &NaiveDateTime) -> String {
        at.format("%H:%M").to_string()
    }

    /// `05 de janeiro de 2026`
    pub fn spelled_month(&self, at: &NaiveDateTime) -> String {
        format!(
            "{:02} {joiner} {} {joiner} {:04}",
            at.day(),
            self.month_name(at),
            at.year(),
            joiner = self.joiner
        )
    }
}
