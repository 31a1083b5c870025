use serde::Serialize;

use crate::coerce;
use crate::enums::{Accessibility, Direction};
use crate::error::TransitError;
use crate::record::{Extensions, GtfsRecord};
use crate::schema::{FieldClass, FieldSchema};

/// The columns of trips.txt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TripField {
    RouteId,
    ServiceId,
    TripId,
    Headsign,
    ShortName,
    Direction,
    BlockId,
    ShapeId,
    WheelchairAccessible,
    BikesAllowed,
    Nonstandard,
}

impl FieldSchema for TripField {
    const ALL: &'static [Self] = &[
        TripField::RouteId,
        TripField::ServiceId,
        TripField::TripId,
        TripField::Headsign,
        TripField::ShortName,
        TripField::Direction,
        TripField::BlockId,
        TripField::ShapeId,
        TripField::WheelchairAccessible,
        TripField::BikesAllowed,
    ];
    const NONSTANDARD: Self = TripField::Nonstandard;

    fn name(self) -> Option<&'static str> {
        Some(match self {
            TripField::RouteId => "route_id",
            TripField::ServiceId => "service_id",
            TripField::TripId => "trip_id",
            TripField::Headsign => "trip_headsign",
            TripField::ShortName => "trip_short_name",
            TripField::Direction => "direction_id",
            TripField::BlockId => "block_id",
            TripField::ShapeId => "shape_id",
            TripField::WheelchairAccessible => "wheelchair_accessible",
            TripField::BikesAllowed => "bikes_allowed",
            TripField::Nonstandard => return None,
        })
    }

    fn class(self) -> FieldClass {
        match self {
            TripField::RouteId | TripField::ServiceId | TripField::TripId => FieldClass::Required,
            // required when continuous pickup or drop-off is defined for the route
            TripField::ShapeId => FieldClass::ConditionallyRequired,
            TripField::Headsign
            | TripField::ShortName
            | TripField::Direction
            | TripField::BlockId
            | TripField::WheelchairAccessible
            | TripField::BikesAllowed => FieldClass::Optional,
            TripField::Nonstandard => FieldClass::Nonstandard,
        }
    }
}

/// A record of trips.txt.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct Trip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    pub headsign: Option<String>,
    pub short_name: Option<String>,
    pub direction: Option<Direction>,
    pub block_id: Option<String>,
    pub shape_id: Option<String>,
    pub wheelchair_accessible: Option<Accessibility>,
    pub bikes_allowed: Option<Accessibility>,
    pub extensions: Extensions,
}

impl GtfsRecord for Trip {
    type Field = TripField;
    const FILE_NAME: &'static str = "trips.txt";

    fn assign(&mut self, field: TripField, cell: &str) -> Result<(), TransitError> {
        match field {
            TripField::RouteId => self.route_id = coerce::string(cell),
            TripField::ServiceId => self.service_id = coerce::string(cell),
            TripField::TripId => self.trip_id = coerce::string(cell),
            TripField::Headsign => self.headsign = coerce::optional_string(cell),
            TripField::ShortName => self.short_name = coerce::optional_string(cell),
            TripField::Direction => self.direction = coerce::optional_enumeration(field, cell)?,
            TripField::BlockId => self.block_id = coerce::optional_string(cell),
            TripField::ShapeId => self.shape_id = coerce::optional_string(cell),
            TripField::WheelchairAccessible => {
                self.wheelchair_accessible = coerce::optional_enumeration(field, cell)?
            }
            TripField::BikesAllowed => {
                self.bikes_allowed = coerce::optional_enumeration(field, cell)?
            }
            TripField::Nonstandard => {}
        }
        Ok(())
    }

    fn extensions_mut(&mut self) -> Option<&mut Extensions> {
        Some(&mut self.extensions)
    }
}
