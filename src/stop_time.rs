use serde::Serialize;

use crate::coerce;
use crate::enums::{ContinuousPickupDropOff, PickupDropOffType, Timepoint};
use crate::error::TransitError;
use crate::record::{Extensions, GtfsRecord};
use crate::schema::{FieldClass, FieldSchema};
use crate::values::ServiceTime;

/// The columns of stop_times.txt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StopTimeField {
    TripId,
    ArrivalTime,
    DepartureTime,
    StopId,
    StopSequence,
    StopHeadsign,
    PickupType,
    DropOffType,
    ContinuousPickup,
    ContinuousDropOff,
    ShapeDistTraveled,
    Timepoint,
    Nonstandard,
}

impl FieldSchema for StopTimeField {
    const ALL: &'static [Self] = &[
        StopTimeField::TripId,
        StopTimeField::ArrivalTime,
        StopTimeField::DepartureTime,
        StopTimeField::StopId,
        StopTimeField::StopSequence,
        StopTimeField::StopHeadsign,
        StopTimeField::PickupType,
        StopTimeField::DropOffType,
        StopTimeField::ContinuousPickup,
        StopTimeField::ContinuousDropOff,
        StopTimeField::ShapeDistTraveled,
        StopTimeField::Timepoint,
    ];
    const NONSTANDARD: Self = StopTimeField::Nonstandard;

    fn name(self) -> Option<&'static str> {
        Some(match self {
            StopTimeField::TripId => "trip_id",
            StopTimeField::ArrivalTime => "arrival_time",
            StopTimeField::DepartureTime => "departure_time",
            StopTimeField::StopId => "stop_id",
            StopTimeField::StopSequence => "stop_sequence",
            StopTimeField::StopHeadsign => "stop_headsign",
            StopTimeField::PickupType => "pickup_type",
            StopTimeField::DropOffType => "drop_off_type",
            StopTimeField::ContinuousPickup => "continuous_pickup",
            StopTimeField::ContinuousDropOff => "continuous_drop_off",
            StopTimeField::ShapeDistTraveled => "shape_dist_traveled",
            StopTimeField::Timepoint => "timepoint",
            StopTimeField::Nonstandard => return None,
        })
    }

    fn class(self) -> FieldClass {
        match self {
            StopTimeField::TripId | StopTimeField::StopId | StopTimeField::StopSequence => {
                FieldClass::Required
            }
            // first and last stop of a trip, and every timepoint
            StopTimeField::ArrivalTime | StopTimeField::DepartureTime => {
                FieldClass::ConditionallyRequired
            }
            StopTimeField::StopHeadsign
            | StopTimeField::PickupType
            | StopTimeField::DropOffType
            | StopTimeField::ContinuousPickup
            | StopTimeField::ContinuousDropOff
            | StopTimeField::ShapeDistTraveled
            | StopTimeField::Timepoint => FieldClass::Optional,
            StopTimeField::Nonstandard => FieldClass::Nonstandard,
        }
    }
}

/// A record of stop_times.txt.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct StopTime {
    pub trip_id: String,
    pub arrival_time: Option<ServiceTime>,
    pub departure_time: Option<ServiceTime>,
    pub stop_id: String,
    pub stop_sequence: u32,
    pub stop_headsign: Option<String>,
    pub pickup_type: Option<PickupDropOffType>,
    pub drop_off_type: Option<PickupDropOffType>,
    pub continuous_pickup: Option<ContinuousPickupDropOff>,
    pub continuous_drop_off: Option<ContinuousPickupDropOff>,
    pub shape_dist_traveled: Option<f64>,
    pub timepoint: Option<Timepoint>,
    pub extensions: Extensions,
}

impl GtfsRecord for StopTime {
    type Field = StopTimeField;
    const FILE_NAME: &'static str = "stop_times.txt";

    fn assign(&mut self, field: StopTimeField, cell: &str) -> Result<(), TransitError> {
        match field {
            StopTimeField::TripId => self.trip_id = coerce::string(cell),
            StopTimeField::ArrivalTime => self.arrival_time = coerce::optional_time(field, cell)?,
            StopTimeField::DepartureTime => {
                self.departure_time = coerce::optional_time(field, cell)?
            }
            StopTimeField::StopId => self.stop_id = coerce::string(cell),
            StopTimeField::StopSequence => self.stop_sequence = coerce::uint(field, cell)?,
            StopTimeField::StopHeadsign => self.stop_headsign = coerce::optional_string(cell),
            StopTimeField::PickupType => {
                self.pickup_type = coerce::optional_enumeration(field, cell)?
            }
            StopTimeField::DropOffType => {
                self.drop_off_type = coerce::optional_enumeration(field, cell)?
            }
            StopTimeField::ContinuousPickup => {
                self.continuous_pickup = coerce::optional_enumeration(field, cell)?
            }
            StopTimeField::ContinuousDropOff => {
                self.continuous_drop_off = coerce::optional_enumeration(field, cell)?
            }
            StopTimeField::ShapeDistTraveled => {
                self.shape_dist_traveled = coerce::optional_double(field, cell)?
            }
            StopTimeField::Timepoint => self.timepoint = coerce::optional_enumeration(field, cell)?,
            StopTimeField::Nonstandard => {}
        }
        Ok(())
    }

    fn extensions_mut(&mut self) -> Option<&mut Extensions> {
        Some(&mut self.extensions)
    }

    /// An exact timepoint must carry its times.
    fn missing_conditionally_required(&self) -> Vec<&'static str> {
        let mut missing = vec![];
        if self.timepoint == Some(Timepoint::Exact) {
            if self.arrival_time.is_none() {
                missing.push(StopTimeField::ArrivalTime.label());
            }
            if self.departure_time.is_none() {
                missing.push(StopTimeField::DepartureTime.label());
            }
        }
        missing
    }
}

impl StopTime {
    /// Seconds spent at the stop, when both times are known.
    pub fn dwell_time(&self) -> Option<u32> {
        match (self.arrival_time, self.departure_time) {
            (Some(arrival), Some(departure)) => departure.seconds().checked_sub(arrival.seconds()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Header;

    const HEADER: &str =
        "trip_id,arrival_time,departure_time,stop_id,stop_sequence,pickup_type,timepoint";

    fn header() -> Header<StopTimeField> {
        Header::read(HEADER).unwrap()
    }

    #[test]
    fn times_past_midnight() {
        let st = StopTime::from_row("T1,24:59:00,25:01:30,S1,3,0,1", &header()).unwrap();
        assert_eq!(st.arrival_time, Some(ServiceTime::from_hms(24, 59, 0)));
        assert_eq!(st.dwell_time(), Some(150));
        assert_eq!(st.pickup_type, Some(PickupDropOffType::Regular));
        assert!(st.has_conditionally_required_fields());
    }

    #[test]
    fn interpolated_stop() {
        let st = StopTime::from_row("T1,,,S2,4,,0", &header()).unwrap();
        assert_eq!(st.arrival_time, None);
        assert_eq!(st.dwell_time(), None);
        assert!(st.has_conditionally_required_fields());
        let exact = StopTime::from_row("T1,,,S2,4,,1", &header()).unwrap();
        assert_eq!(
            exact.missing_conditionally_required(),
            vec!["arrival_time", "departure_time"]
        );
        let half = StopTime::from_row("T1,08:00:00,,S2,4,,1", &header()).unwrap();
        assert_eq!(half.missing_conditionally_required(), vec!["departure_time"]);
    }

    #[test]
    fn malformed_time_fails() {
        let err = StopTime::from_row("T1,8:5:00,08:05:00,S1,1,,", &header()).unwrap_err();
        assert_eq!(
            err,
            TransitError::InvalidFieldType {
                field: "arrival_time",
                value: "8:5:00".to_string()
            }
        );
    }

    #[test]
    fn stop_sequence_is_required() {
        let err = StopTime::from_row("T1,08:00:00,08:00:00,S1,,,", &header()).unwrap_err();
        assert_eq!(
            err,
            TransitError::InvalidFieldType {
                field: "stop_sequence",
                value: String::new()
            }
        );
    }
}
