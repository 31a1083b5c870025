use serde::Serialize;
use url::Url;

use crate::coerce;
use crate::error::TransitError;
use crate::record::{Extensions, GtfsRecord};
use crate::schema::{FieldClass, FieldSchema};

/// The columns of agency.txt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AgencyField {
    AgencyId,
    Name,
    Url,
    Timezone,
    Lang,
    Phone,
    FareUrl,
    Email,
    Nonstandard,
}

impl FieldSchema for AgencyField {
    const ALL: &'static [Self] = &[
        AgencyField::AgencyId,
        AgencyField::Name,
        AgencyField::Url,
        AgencyField::Timezone,
        AgencyField::Lang,
        AgencyField::Phone,
        AgencyField::FareUrl,
        AgencyField::Email,
    ];
    const NONSTANDARD: Self = AgencyField::Nonstandard;

    fn name(self) -> Option<&'static str> {
        Some(match self {
            AgencyField::AgencyId => "agency_id",
            AgencyField::Name => "agency_name",
            AgencyField::Url => "agency_url",
            AgencyField::Timezone => "agency_timezone",
            AgencyField::Lang => "agency_lang",
            AgencyField::Phone => "agency_phone",
            AgencyField::FareUrl => "agency_fare_url",
            AgencyField::Email => "agency_email",
            AgencyField::Nonstandard => return None,
        })
    }

    fn class(self) -> FieldClass {
        match self {
            AgencyField::Name | AgencyField::Url | AgencyField::Timezone => FieldClass::Required,
            // required when the feed has more than one agency
            AgencyField::AgencyId => FieldClass::ConditionallyRequired,
            AgencyField::Lang | AgencyField::Phone | AgencyField::FareUrl | AgencyField::Email => {
                FieldClass::Optional
            }
            AgencyField::Nonstandard => FieldClass::Nonstandard,
        }
    }
}

/// A record of agency.txt.
///
/// `url` is only `None` on a default-constructed value: parsing rejects a row without it.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct Agency {
    pub agency_id: Option<String>,
    pub name: String,
    pub url: Option<Url>,
    pub timezone: String,
    pub lang: Option<String>,
    pub phone: Option<String>,
    pub fare_url: Option<Url>,
    pub email: Option<String>,
    pub extensions: Extensions,
}

impl GtfsRecord for Agency {
    type Field = AgencyField;
    const FILE_NAME: &'static str = "agency.txt";

    fn assign(&mut self, field: AgencyField, cell: &str) -> Result<(), TransitError> {
        match field {
            AgencyField::AgencyId => self.agency_id = coerce::optional_string(cell),
            AgencyField::Name => self.name = coerce::string(cell),
            AgencyField::Url => self.url = coerce::optional_url(field, cell)?,
            AgencyField::Timezone => self.timezone = coerce::string(cell),
            AgencyField::Lang => self.lang = coerce::optional_string(cell),
            AgencyField::Phone => self.phone = coerce::optional_string(cell),
            AgencyField::FareUrl => self.fare_url = coerce::optional_url(field, cell)?,
            AgencyField::Email => self.email = coerce::optional_string(cell),
            AgencyField::Nonstandard => {}
        }
        Ok(())
    }

    fn extensions_mut(&mut self) -> Option<&mut Extensions> {
        Some(&mut self.extensions)
    }
}
