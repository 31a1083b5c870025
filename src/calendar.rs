use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::coerce;
use crate::enums::ServiceAvailability;
use crate::error::TransitError;
use crate::record::{Extensions, GtfsRecord};
use crate::schema::{FieldClass, FieldSchema};

/// The columns of calendar.txt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CalendarField {
    ServiceId,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    StartDate,
    EndDate,
    Nonstandard,
}

impl FieldSchema for CalendarField {
    const ALL: &'static [Self] = &[
        CalendarField::ServiceId,
        CalendarField::Monday,
        CalendarField::Tuesday,
        CalendarField::Wednesday,
        CalendarField::Thursday,
        CalendarField::Friday,
        CalendarField::Saturday,
        CalendarField::Sunday,
        CalendarField::StartDate,
        CalendarField::EndDate,
    ];
    const NONSTANDARD: Self = CalendarField::Nonstandard;

    fn name(self) -> Option<&'static str> {
        Some(match self {
            CalendarField::ServiceId => "service_id",
            CalendarField::Monday => "monday",
            CalendarField::Tuesday => "tuesday",
            CalendarField::Wednesday => "wednesday",
            CalendarField::Thursday => "thursday",
            CalendarField::Friday => "friday",
            CalendarField::Saturday => "saturday",
            CalendarField::Sunday => "sunday",
            CalendarField::StartDate => "start_date",
            CalendarField::EndDate => "end_date",
            CalendarField::Nonstandard => return None,
        })
    }

    fn class(self) -> FieldClass {
        match self {
            CalendarField::Nonstandard => FieldClass::Nonstandard,
            _ => FieldClass::Required,
        }
    }
}

/// A record of calendar.txt: the weekly pattern of one service between two dates.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct Calendar {
    pub service_id: String,
    pub monday: ServiceAvailability,
    pub tuesday: ServiceAvailability,
    pub wednesday: ServiceAvailability,
    pub thursday: ServiceAvailability,
    pub friday: ServiceAvailability,
    pub saturday: ServiceAvailability,
    pub sunday: ServiceAvailability,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub extensions: Extensions,
}

impl GtfsRecord for Calendar {
    type Field = CalendarField;
    const FILE_NAME: &'static str = "calendar.txt";

    fn assign(&mut self, field: CalendarField, cell: &str) -> Result<(), TransitError> {
        match field {
            CalendarField::ServiceId => self.service_id = coerce::string(cell),
            CalendarField::Monday => self.monday = coerce::enumeration(field, cell)?,
            CalendarField::Tuesday => self.tuesday = coerce::enumeration(field, cell)?,
            CalendarField::Wednesday => self.wednesday = coerce::enumeration(field, cell)?,
            CalendarField::Thursday => self.thursday = coerce::enumeration(field, cell)?,
            CalendarField::Friday => self.friday = coerce::enumeration(field, cell)?,
            CalendarField::Saturday => self.saturday = coerce::enumeration(field, cell)?,
            CalendarField::Sunday => self.sunday = coerce::enumeration(field, cell)?,
            CalendarField::StartDate => self.start_date = coerce::date(field, cell)?,
            CalendarField::EndDate => self.end_date = coerce::date(field, cell)?,
            CalendarField::Nonstandard => {}
        }
        Ok(())
    }

    fn extensions_mut(&mut self) -> Option<&mut Extensions> {
        Some(&mut self.extensions)
    }
}

impl Calendar {
    pub fn availability(&self, weekday: Weekday) -> ServiceAvailability {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// True if the weekly pattern runs on `date` and `date` is within the validity range.
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date
            && date <= self.end_date
            && self.availability(date.weekday()) == ServiceAvailability::Available
    }
}
