//! Loading every supported file of a feed directory.
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use crate::agency::Agency;
use crate::calendar::Calendar;
use crate::collection::{Agencies, Calendars, Collection, Routes, Shapes, StopTimes, Stops, Trips};
use crate::config::LoadOptions;
use crate::error::FeedError;
use crate::record::GtfsRecord;
use crate::route::Route;
use crate::shape::Shape;
use crate::stop::Stop;
use crate::stop_time::StopTime;
use crate::trip::Trip;

type FileResult<R> = Result<Option<Collection<R>>, FeedError>;

/// The typed content of a feed directory. A file that is absent from the directory is `None`.
#[derive(Debug, Default)]
pub struct Feed {
    pub agencies: Option<Agencies>,
    pub routes: Option<Routes>,
    pub stops: Option<Stops>,
    pub trips: Option<Trips>,
    pub stop_times: Option<StopTimes>,
    pub calendars: Option<Calendars>,
    pub shapes: Option<Shapes>,
}

/// Number of records loaded from each file, `None` for absent files.
#[derive(Debug, Default, Serialize, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    pub agencies: Option<usize>,
    pub routes: Option<usize>,
    pub stops: Option<usize>,
    pub trips: Option<usize>,
    pub stop_times: Option<usize>,
    pub calendars: Option<usize>,
    pub shapes: Option<usize>,
    pub skipped_rows: usize,
}

fn load_file<R: GtfsRecord>(dir: &Path, options: &LoadOptions) -> FileResult<R> {
    let path = dir.join(R::FILE_NAME);
    if !path.is_file() {
        debug!("{} not present", R::FILE_NAME);
        return Ok(None);
    }
    Collection::load(&path, options).map(Some)
}

impl Feed {
    /// Loads the files of `dir` concurrently, one task per file.
    ///
    /// The first failing file, in the order of the fields of [`Feed`], fails the whole feed.
    pub fn from_path<P: AsRef<Path>>(dir: P, options: &LoadOptions) -> Result<Feed, FeedError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(FeedError::NotADirectory(dir.display().to_string()));
        }
        let now = Instant::now();

        let mut agencies: FileResult<Agency> = Ok(None);
        let mut routes: FileResult<Route> = Ok(None);
        let mut stops: FileResult<Stop> = Ok(None);
        let mut trips: FileResult<Trip> = Ok(None);
        let mut stop_times: FileResult<StopTime> = Ok(None);
        let mut calendars: FileResult<Calendar> = Ok(None);
        let mut shapes: FileResult<Shape> = Ok(None);
        rayon::scope(|s| {
            s.spawn(|_| agencies = load_file(dir, options));
            s.spawn(|_| routes = load_file(dir, options));
            s.spawn(|_| stops = load_file(dir, options));
            s.spawn(|_| trips = load_file(dir, options));
            s.spawn(|_| stop_times = load_file(dir, options));
            s.spawn(|_| calendars = load_file(dir, options));
            s.spawn(|_| shapes = load_file(dir, options));
        });

        let feed = Feed {
            agencies: agencies?,
            routes: routes?,
            stops: stops?,
            trips: trips?,
            stop_times: stop_times?,
            calendars: calendars?,
            shapes: shapes?,
        };
        info!(
            "{} loaded in {} ms",
            dir.display(),
            now.elapsed().as_millis()
        );
        Ok(feed)
    }

    /// The first agency of the feed.
    pub fn agency(&self) -> Option<&Agency> {
        self.agencies.as_ref().and_then(|a| a.get(0))
    }

    pub fn summary(&self) -> FeedSummary {
        fn count<R: GtfsRecord>(c: &Option<Collection<R>>) -> Option<usize> {
            c.as_ref().map(Collection::len)
        }
        fn skipped<R: GtfsRecord>(c: &Option<Collection<R>>) -> usize {
            c.as_ref().map_or(0, Collection::skipped_rows)
        }
        FeedSummary {
            agencies: count(&self.agencies),
            routes: count(&self.routes),
            stops: count(&self.stops),
            trips: count(&self.trips),
            stop_times: count(&self.stop_times),
            calendars: count(&self.calendars),
            shapes: count(&self.shapes),
            skipped_rows: skipped(&self.agencies)
                + skipped(&self.routes)
                + skipped(&self.stops)
                + skipped(&self.trips)
                + skipped(&self.stop_times)
                + skipped(&self.calendars)
                + skipped(&self.shapes),
        }
    }
}
