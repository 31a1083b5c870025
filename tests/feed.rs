use std::path::Path;

use chrono::NaiveDate;

use strictgtfs::enums::{Direction, LocationType, RouteType};
use strictgtfs::test_utils::{assert_feed_filled, get_test_paths, init_test_logger, sample_feed_path};
use strictgtfs::values::{Color, ServiceTime};
use strictgtfs::{Feed, FeedError, LoadOptions, Routes, TransitError};

#[test]
fn sample_feed_is_fully_loaded() {
    init_test_logger();
    let feed = Feed::from_path(sample_feed_path(), &LoadOptions::default()).unwrap();
    assert_feed_filled(&feed);

    let summary = feed.summary();
    assert_eq!(summary.routes, Some(3));
    assert_eq!(summary.stops, Some(4));
    assert_eq!(summary.stop_times, Some(7));
    assert_eq!(summary.shapes, Some(3));
    assert_eq!(summary.skipped_rows, 0);
}

#[test]
fn bom_prefixed_agency_file() {
    let feed = Feed::from_path(sample_feed_path(), &LoadOptions::default()).unwrap();
    let agency = feed.agency().unwrap();
    assert_eq!(agency.agency_id.as_deref(), Some("ACTV"));
    assert_eq!(agency.phone.as_deref(), Some("041 2424"));
    assert_eq!(agency.timezone, "Europe/Rome");
}

#[test]
fn sample_records_are_typed() {
    let feed = Feed::from_path(sample_feed_path(), &LoadOptions::default()).unwrap();

    let routes = feed.routes.as_ref().unwrap();
    assert_eq!(routes[0].route_type, RouteType::Ferry);
    assert_eq!(routes[0].long_name.as_deref(), Some("Lido, Piazzale Roma"));
    assert_eq!(routes[0].color, Some(Color::new(255, 0, 0)));
    assert_eq!(routes[1].long_name.as_deref(), Some("San Marco \"Vallaresso\""));
    assert_eq!(routes[1].text_color, None);
    assert_eq!(routes[2].extensions.get("vendor_code").map(String::as_str), Some(""));

    let stops = feed.stops.as_ref().unwrap();
    assert_eq!(stops[0].location_type(), LocationType::Station);
    assert_eq!(stops[1].parent_station.as_deref(), Some("ST_RIALTO"));
    assert_eq!(stops[2].location_type, None);

    let trips = feed.trips.as_ref().unwrap();
    assert_eq!(trips[1].direction, Some(Direction::Inbound));
    assert_eq!(trips[2].shape_id, None);

    let stop_times = feed.stop_times.as_ref().unwrap();
    assert_eq!(stop_times[1].arrival_time, None);
    assert_eq!(stop_times[6].arrival_time, Some(ServiceTime::from_hms(25, 5, 0)));

    let calendars = feed.calendars.as_ref().unwrap();
    let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
    assert!(!calendars[0].runs_on(sunday));
    assert!(calendars[1].runs_on(sunday));

    let shapes = feed.shapes.as_ref().unwrap();
    assert_eq!(shapes[1].dist_traveled, Some(1450.5));
    assert_eq!(shapes[2].dist_traveled, None);
}

#[test]
fn conditional_checks_pass_on_the_sample() {
    let options = LoadOptions::new().check_conditionally_required(true);
    let feed = Feed::from_path(sample_feed_path(), &options).unwrap();
    assert_feed_filled(&feed);
}

#[test]
fn absent_files_are_none() {
    let feed = Feed::from_path("./test_data/header_only_feed", &LoadOptions::default()).unwrap();
    assert!(feed.agencies.is_none());
    assert!(feed.agency().is_none());
    assert!(feed.routes.as_ref().unwrap().is_empty());
    assert_eq!(feed.summary().routes, Some(0));
    assert_eq!(feed.summary().trips, None);
}

#[test]
fn malformed_file_names_the_file() {
    init_test_logger();
    let err = Feed::from_path("./test_data/broken_feed", &LoadOptions::default()).unwrap_err();
    assert!(err.file_name().unwrap().ends_with("routes.txt"));
    assert_eq!(
        err.transit_error(),
        Some(&TransitError::InvalidColor("ZZZZZZ".to_string()))
    );
    match err {
        FeedError::Row { source, .. } => assert_eq!(source.row, 3),
        other => panic!("unexpected error {:?}", other),
    }

    let feed = Feed::from_path(
        "./test_data/broken_feed",
        &LoadOptions::new().skip_invalid_rows(),
    )
    .unwrap();
    assert_eq!(feed.summary().routes, Some(2));
    assert_eq!(feed.summary().skipped_rows, 1);
}

#[test]
fn not_a_directory() {
    let file = Path::new(&sample_feed_path()).join("routes.txt");
    match Feed::from_path(&file, &LoadOptions::default()) {
        Err(FeedError::NotADirectory(_)) => {}
        other => panic!("unexpected result {:?}", other.map(|f| f.summary())),
    }
}

#[test]
fn single_files_load_on_their_own() {
    for path in get_test_paths() {
        let file = Path::new(&path).join("routes.txt");
        let result = Routes::load(&file, &LoadOptions::default());
        if path.ends_with("broken_feed") {
            assert!(matches!(result, Err(FeedError::Row { .. })));
        } else {
            assert!(result.is_ok(), "{}", path);
        }
    }
    let missing = Routes::load("./test_data/nowhere/routes.txt", &LoadOptions::default());
    assert!(matches!(missing, Err(FeedError::Io { .. })));
}
