use serde::Serialize;
use url::Url;

use crate::coerce;
use crate::enums::{Accessibility, LocationType};
use crate::error::TransitError;
use crate::record::{Extensions, GtfsRecord};
use crate::schema::{FieldClass, FieldSchema};
use crate::values::LatLng;

/// The columns of stops.txt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StopField {
    StopId,
    Code,
    Name,
    Description,
    Lat,
    Lon,
    ZoneId,
    Url,
    LocationType,
    ParentStation,
    Timezone,
    WheelchairBoarding,
    LevelId,
    PlatformCode,
    Nonstandard,
}

impl FieldSchema for StopField {
    const ALL: &'static [Self] = &[
        StopField::StopId,
        StopField::Code,
        StopField::Name,
        StopField::Description,
        StopField::Lat,
        StopField::Lon,
        StopField::ZoneId,
        StopField::Url,
        StopField::LocationType,
        StopField::ParentStation,
        StopField::Timezone,
        StopField::WheelchairBoarding,
        StopField::LevelId,
        StopField::PlatformCode,
    ];
    const NONSTANDARD: Self = StopField::Nonstandard;

    fn name(self) -> Option<&'static str> {
        Some(match self {
            StopField::StopId => "stop_id",
            StopField::Code => "stop_code",
            StopField::Name => "stop_name",
            StopField::Description => "stop_desc",
            StopField::Lat => "stop_lat",
            StopField::Lon => "stop_lon",
            StopField::ZoneId => "zone_id",
            StopField::Url => "stop_url",
            StopField::LocationType => "location_type",
            StopField::ParentStation => "parent_station",
            StopField::Timezone => "stop_timezone",
            StopField::WheelchairBoarding => "wheelchair_boarding",
            StopField::LevelId => "level_id",
            StopField::PlatformCode => "platform_code",
            StopField::Nonstandard => return None,
        })
    }

    fn class(self) -> FieldClass {
        match self {
            StopField::StopId => FieldClass::Required,
            StopField::Name
            | StopField::Lat
            | StopField::Lon
            | StopField::ZoneId
            | StopField::ParentStation => FieldClass::ConditionallyRequired,
            StopField::Code
            | StopField::Description
            | StopField::Url
            | StopField::LocationType
            | StopField::Timezone
            | StopField::WheelchairBoarding
            | StopField::LevelId
            | StopField::PlatformCode => FieldClass::Optional,
            StopField::Nonstandard => FieldClass::Nonstandard,
        }
    }
}

/// A record of stops.txt: a stop, a station, or one of the locations inside a station.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct Stop {
    pub stop_id: String,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub zone_id: Option<String>,
    pub url: Option<Url>,
    pub location_type: Option<LocationType>,
    pub parent_station: Option<String>,
    pub timezone: Option<String>,
    pub wheelchair_boarding: Option<Accessibility>,
    pub level_id: Option<String>,
    pub platform_code: Option<String>,
    pub extensions: Extensions,
}

impl GtfsRecord for Stop {
    type Field = StopField;
    const FILE_NAME: &'static str = "stops.txt";

    fn assign(&mut self, field: StopField, cell: &str) -> Result<(), TransitError> {
        match field {
            StopField::StopId => self.stop_id = coerce::string(cell),
            StopField::Code => self.code = coerce::optional_string(cell),
            StopField::Name => self.name = coerce::optional_string(cell),
            StopField::Description => self.description = coerce::optional_string(cell),
            StopField::Lat => self.lat = coerce::optional_double(field, cell)?,
            StopField::Lon => self.lon = coerce::optional_double(field, cell)?,
            StopField::ZoneId => self.zone_id = coerce::optional_string(cell),
            StopField::Url => self.url = coerce::optional_url(field, cell)?,
            StopField::LocationType => {
                self.location_type = coerce::optional_enumeration(field, cell)?
            }
            StopField::ParentStation => self.parent_station = coerce::optional_string(cell),
            StopField::Timezone => self.timezone = coerce::optional_string(cell),
            StopField::WheelchairBoarding => {
                self.wheelchair_boarding = coerce::optional_enumeration(field, cell)?
            }
            StopField::LevelId => self.level_id = coerce::optional_string(cell),
            StopField::PlatformCode => self.platform_code = coerce::optional_string(cell),
            StopField::Nonstandard => {}
        }
        Ok(())
    }

    fn extensions_mut(&mut self) -> Option<&mut Extensions> {
        Some(&mut self.extensions)
    }

    /// Stops, stations and entrances need a name and a position. Entrances, generic
    /// nodes and boarding areas need their parent station.
    fn missing_conditionally_required(&self) -> Vec<&'static str> {
        let location_type = self.location_type();
        let located = matches!(
            location_type,
            LocationType::StopOrPlatform | LocationType::Station | LocationType::EntranceExit
        );
        let parented = matches!(
            location_type,
            LocationType::EntranceExit | LocationType::GenericNode | LocationType::BoardingArea
        );
        [
            (StopField::Name, located && self.name.is_none()),
            (StopField::Lat, located && self.lat.is_none()),
            (StopField::Lon, located && self.lon.is_none()),
            (StopField::ParentStation, parented && self.parent_station.is_none()),
        ]
        .iter()
        .filter(|(_, missing)| *missing)
        .map(|(field, _)| field.label())
        .collect()
    }
}

impl Stop {
    /// The location type, with an absent value read as a stop or platform.
    pub fn location_type(&self) -> LocationType {
        self.location_type.unwrap_or_default()
    }

    pub fn position(&self) -> Option<LatLng> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lng)) => Some(LatLng { lat, lng }),
            _ => None,
        }
    }
}
