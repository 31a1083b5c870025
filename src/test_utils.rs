use crate::feed::Feed;

pub fn get_test_paths() -> Vec<String> {
    ["sample_feed", "header_only_feed", "broken_feed"]
        .iter()
        .map(|s| format!("./test_data/{}", s))
        .collect::<Vec<String>>()
}

pub fn sample_feed_path() -> String {
    "./test_data/sample_feed".to_string()
}

pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .format_timestamp(None)
        .format_module_path(false)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

pub fn assert_feed_filled(feed: &Feed) {
    let count = |n: Option<usize>| n.unwrap_or(0);
    let summary = feed.summary();
    assert!(count(summary.agencies) > 0, "Agencies empty!");
    assert!(count(summary.routes) > 0, "Routes empty!");
    assert!(count(summary.stops) > 0, "Stops empty!");
    assert!(count(summary.trips) > 0, "Trips empty!");
    assert!(count(summary.stop_times) > 0, "Stop times empty!");
    assert!(count(summary.calendars) > 0, "Calendars empty!");
    assert!(count(summary.shapes) > 0, "Shapes empty!");
}
