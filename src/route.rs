use serde::Serialize;
use url::Url;

use crate::coerce;
use crate::enums::{ContinuousPickupDropOff, RouteType};
use crate::error::TransitError;
use crate::record::{Extensions, GtfsRecord};
use crate::schema::{FieldClass, FieldSchema};
use crate::values::Color;

/// The columns of routes.txt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RouteField {
    RouteId,
    AgencyId,
    ShortName,
    LongName,
    Description,
    Type,
    Url,
    Color,
    TextColor,
    SortOrder,
    ContinuousPickup,
    ContinuousDropOff,
    Nonstandard,
}

impl FieldSchema for RouteField {
    const ALL: &'static [Self] = &[
        RouteField::RouteId,
        RouteField::AgencyId,
        RouteField::ShortName,
        RouteField::LongName,
        RouteField::Description,
        RouteField::Type,
        RouteField::Url,
        RouteField::Color,
        RouteField::TextColor,
        RouteField::SortOrder,
        RouteField::ContinuousPickup,
        RouteField::ContinuousDropOff,
    ];
    const NONSTANDARD: Self = RouteField::Nonstandard;

    fn name(self) -> Option<&'static str> {
        Some(match self {
            RouteField::RouteId => "route_id",
            RouteField::AgencyId => "agency_id",
            RouteField::ShortName => "route_short_name",
            RouteField::LongName => "route_long_name",
            RouteField::Description => "route_desc",
            RouteField::Type => "route_type",
            RouteField::Url => "route_url",
            RouteField::Color => "route_color",
            RouteField::TextColor => "route_text_color",
            RouteField::SortOrder => "route_sort_order",
            RouteField::ContinuousPickup => "continuous_pickup",
            RouteField::ContinuousDropOff => "continuous_drop_off",
            RouteField::Nonstandard => return None,
        })
    }

    fn class(self) -> FieldClass {
        match self {
            RouteField::RouteId | RouteField::Type => FieldClass::Required,
            RouteField::AgencyId | RouteField::ShortName | RouteField::LongName => {
                FieldClass::ConditionallyRequired
            }
            RouteField::Description
            | RouteField::Url
            | RouteField::Color
            | RouteField::TextColor
            | RouteField::SortOrder
            | RouteField::ContinuousPickup
            | RouteField::ContinuousDropOff => FieldClass::Optional,
            RouteField::Nonstandard => FieldClass::Nonstandard,
        }
    }
}

/// A record of routes.txt.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct Route {
    pub route_id: String,
    pub agency_id: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub description: Option<String>,
    pub route_type: RouteType,
    pub url: Option<Url>,
    pub color: Option<Color>,
    pub text_color: Option<Color>,
    pub sort_order: Option<u32>,
    pub continuous_pickup: Option<ContinuousPickupDropOff>,
    pub continuous_drop_off: Option<ContinuousPickupDropOff>,
    pub extensions: Extensions,
}

impl GtfsRecord for Route {
    type Field = RouteField;
    const FILE_NAME: &'static str = "routes.txt";

    fn assign(&mut self, field: RouteField, cell: &str) -> Result<(), TransitError> {
        match field {
            RouteField::RouteId => self.route_id = coerce::string(cell),
            RouteField::AgencyId => self.agency_id = coerce::optional_string(cell),
            RouteField::ShortName => self.short_name = coerce::optional_string(cell),
            RouteField::LongName => self.long_name = coerce::optional_string(cell),
            RouteField::Description => self.description = coerce::optional_string(cell),
            RouteField::Type => self.route_type = coerce::enumeration(field, cell)?,
            RouteField::Url => self.url = coerce::optional_url(field, cell)?,
            RouteField::Color => self.color = coerce::optional_color(cell)?,
            RouteField::TextColor => self.text_color = coerce::optional_color(cell)?,
            RouteField::SortOrder => self.sort_order = coerce::optional_uint(field, cell)?,
            RouteField::ContinuousPickup => {
                self.continuous_pickup = coerce::optional_enumeration(field, cell)?
            }
            RouteField::ContinuousDropOff => {
                self.continuous_drop_off = coerce::optional_enumeration(field, cell)?
            }
            RouteField::Nonstandard => {}
        }
        Ok(())
    }

    fn extensions_mut(&mut self) -> Option<&mut Extensions> {
        Some(&mut self.extensions)
    }

    /// A route needs a short name, a long name, or both.
    fn missing_conditionally_required(&self) -> Vec<&'static str> {
        if self.short_name.is_some() || self.long_name.is_some() {
            vec![]
        } else {
            vec![RouteField::ShortName.label(), RouteField::LongName.label()]
        }
    }
}

impl Route {
    /// The name riders see: the short name when there is one.
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .or_else(|| self.long_name.as_deref())
            .unwrap_or(self.route_id.as_str())
    }
}
