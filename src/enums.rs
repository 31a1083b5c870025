//! Closed enumerations decoded from the unsigned integer stored in a cell.
//!
//! A raw value outside the set fails coercion; there is no `Unknown(n)` variant. The row
//! error policy decides whether such a row is fatal.
use serde::Serialize;

/// An enumeration backed by an unsigned raw value.
pub trait RawValue: Sized + Copy {
    fn from_raw(raw: u32) -> Option<Self>;
    fn raw(self) -> u32;
}

/// Describes the kind of vehicle used on a route. See `route_type` in routes.txt.
#[derive(Debug, Default, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RouteType {
    Tram,
    Subway,
    Rail,
    #[default]
    Bus,
    Ferry,
    CableTram,
    AerialLift,
    Funicular,
    Trolleybus,
    Monorail,
}

impl RawValue for RouteType {
    fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => RouteType::Tram,
            1 => RouteType::Subway,
            2 => RouteType::Rail,
            3 => RouteType::Bus,
            4 => RouteType::Ferry,
            5 => RouteType::CableTram,
            6 => RouteType::AerialLift,
            7 => RouteType::Funicular,
            11 => RouteType::Trolleybus,
            12 => RouteType::Monorail,
            _ => return None,
        })
    }

    fn raw(self) -> u32 {
        match self {
            RouteType::Tram => 0,
            RouteType::Subway => 1,
            RouteType::Rail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
            RouteType::CableTram => 5,
            RouteType::AerialLift => 6,
            RouteType::Funicular => 7,
            RouteType::Trolleybus => 11,
            RouteType::Monorail => 12,
        }
    }
}

/// `continuous_pickup` / `continuous_drop_off`
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContinuousPickupDropOff {
    Continuous,
    NotContinuous,
    CoordinateWithAgency,
    CoordinateWithDriver,
}

impl RawValue for ContinuousPickupDropOff {
    fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => ContinuousPickupDropOff::Continuous,
            1 => ContinuousPickupDropOff::NotContinuous,
            2 => ContinuousPickupDropOff::CoordinateWithAgency,
            3 => ContinuousPickupDropOff::CoordinateWithDriver,
            _ => return None,
        })
    }

    fn raw(self) -> u32 {
        self as u32
    }
}

/// `pickup_type` / `drop_off_type` of a stop time
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PickupDropOffType {
    Regular,
    NotAvailable,
    ArrangeByPhone,
    CoordinateWithDriver,
}

impl RawValue for PickupDropOffType {
    fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => PickupDropOffType::Regular,
            1 => PickupDropOffType::NotAvailable,
            2 => PickupDropOffType::ArrangeByPhone,
            3 => PickupDropOffType::CoordinateWithDriver,
            _ => return None,
        })
    }

    fn raw(self) -> u32 {
        self as u32
    }
}

/// `direction_id`. The values only distinguish the two directions of a route; the
/// names follow the customary outbound = 0 reading.
///
/// Some feeds and tools read 0 as inbound instead. Only the raw value is meaningful,
/// so compare against `Direction::from_raw` rather than the variant names when the
/// producer's convention matters.
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Outbound,
    Inbound,
}

impl RawValue for Direction {
    fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Direction::Outbound),
            1 => Some(Direction::Inbound),
            _ => None,
        }
    }

    fn raw(self) -> u32 {
        self as u32
    }
}

/// `wheelchair_accessible`, `bikes_allowed` and `wheelchair_boarding`
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Accessibility {
    NoInformation,
    Available,
    NotAvailable,
}

impl RawValue for Accessibility {
    fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => Accessibility::NoInformation,
            1 => Accessibility::Available,
            2 => Accessibility::NotAvailable,
            _ => return None,
        })
    }

    fn raw(self) -> u32 {
        self as u32
    }
}

/// `location_type` of a stop
#[derive(Debug, Default, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LocationType {
    #[default]
    StopOrPlatform,
    Station,
    EntranceExit,
    GenericNode,
    BoardingArea,
}

impl RawValue for LocationType {
    fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => LocationType::StopOrPlatform,
            1 => LocationType::Station,
            2 => LocationType::EntranceExit,
            3 => LocationType::GenericNode,
            4 => LocationType::BoardingArea,
            _ => return None,
        })
    }

    fn raw(self) -> u32 {
        self as u32
    }
}

/// One weekday column of calendar.txt
#[derive(Debug, Default, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ServiceAvailability {
    #[default]
    NotAvailable,
    Available,
}

impl RawValue for ServiceAvailability {
    fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(ServiceAvailability::NotAvailable),
            1 => Some(ServiceAvailability::Available),
            _ => None,
        }
    }

    fn raw(self) -> u32 {
        self as u32
    }
}

/// `timepoint` of a stop time
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Timepoint {
    Approximate,
    Exact,
}

impl RawValue for Timepoint {
    fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Timepoint::Approximate),
            1 => Some(Timepoint::Exact),
            _ => None,
        }
    }

    fn raw(self) -> u32 {
        self as u32
    }
}
