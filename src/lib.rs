//! Strictly typed reading of GTFS static feeds.
//!
//! Feed files are tokenized into records and cells, each file's header is resolved
//! into a catalog of fields, and every data record is coerced into a typed struct.
//! Malformed input fails loudly instead of being papered over with defaults.
pub mod agency;
pub mod calendar;
pub mod coerce;
pub mod collection;
pub mod config;
pub mod enums;
pub mod error;
pub mod feed;
pub mod record;
pub mod route;
pub mod schema;
pub mod shape;
pub mod stop;
pub mod stop_time;
pub mod test_utils;
pub mod tokenizer;
pub mod trip;
pub mod values;

pub use agency::Agency;
pub use calendar::Calendar;
pub use collection::{Agencies, Calendars, Collection, Routes, Shapes, StopTimes, Stops, Trips};
pub use config::{LoadOptions, RowErrorPolicy};
pub use error::{FeedError, RowError, TransitError};
pub use feed::{Feed, FeedSummary};
pub use record::{Extensions, GtfsRecord};
pub use route::Route;
pub use schema::{FieldClass, FieldSchema, Header};
pub use shape::Shape;
pub use stop::Stop;
pub use stop_time::StopTime;
pub use trip::Trip;
