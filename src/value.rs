//! Values that can be formatted.

use crate::date::BsDate;
use crate::datetime::BsDateTime;
use crate::tz::Zone;

/// A value that can be rendered through a [`Pattern`](crate::Pattern).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A calendar date; time codes render as midnight.
    Date(BsDate),
    /// A date-time, naive or aware.
    DateTime(BsDateTime),
}

impl From<BsDate> for Value {
    fn from(date: BsDate) -> Self {
        Value::Date(date)
    }
}

impl From<BsDateTime> for Value {
    fn from(dt: BsDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl Value {
    pub fn date(&self) -> BsDate {
        match self {
            Value::Date(date) => *date,
            Value::DateTime(dt) => dt.date(),
        }
    }

    /// Flattens the value into the fields the format codes read.
    pub(crate) fn fields(&self) -> Fields {
        let date = self.date();
        let (hour, minute, second, microsecond, zone) = match self {
            Value::Date(_) => (0, 0, 0, 0, Zone::Naive),
            Value::DateTime(dt) => {
                let (h, m, s, us) = dt.time();
                (h, m, s, us, dt.zone())
            }
        };
        Fields {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            weekday: date.weekday(),
            day_of_year: date.day_of_year(),
            hour,
            minute,
            second,
            microsecond,
            zone,
        }
    }
}

/// Everything a format code may render, computed once per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub weekday: u8,
    pub day_of_year: u16,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
    pub zone: Zone,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tz::NPT;

    #[test]
    fn test_date_fields_are_midnight() {
        let value = Value::from(BsDate::new(2080, 10, 24).unwrap());
        let fields = value.fields();
        assert_eq!((fields.hour, fields.minute, fields.second), (0, 0, 0));
        assert_eq!(fields.zone, Zone::Naive);
        assert_eq!(fields.weekday, 2);
    }

    #[test]
    fn test_datetime_fields() {
        let dt = BsDateTime::new_aware(2080, 10, 24, 14, 5, 9, 7, NPT).unwrap();
        let fields = Value::from(dt).fields();
        assert_eq!(
            (fields.hour, fields.minute, fields.second, fields.microsecond),
            (14, 5, 9, 7)
        );
        assert_eq!(fields.zone, Zone::Aware(NPT));
    }
}
