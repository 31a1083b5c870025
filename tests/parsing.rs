use strictgtfs::enums::RouteType;
use strictgtfs::route::RouteField;
use strictgtfs::schema::FieldSchema;
use strictgtfs::test_utils::init_test_logger;
use strictgtfs::tokenizer::read_record;
use strictgtfs::values::Color;
use strictgtfs::{
    Collection, GtfsRecord, Header, LoadOptions, Route, Routes, Shape, StopTimes, TransitError,
    Trips,
};

fn route(header: &str, row: &str) -> Result<Route, TransitError> {
    Route::from_row(row, &Header::read(header)?)
}

#[test]
fn bus_route_end_to_end() {
    init_test_logger();
    let routes = Routes::parse("route_id,route_type\nA1,3\n", &LoadOptions::default()).unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].route_id, "A1");
    assert_eq!(routes[0].route_type, RouteType::Bus);
}

#[test]
fn route_color_end_to_end() {
    let red = route("route_id,route_color", "A1,FF0000").unwrap();
    assert_eq!(red.color, Some(Color::new(255, 0, 0)));
    assert_eq!(
        route("route_id,route_color", "A1,ZZZZZZ"),
        Err(TransitError::InvalidColor("ZZZZZZ".to_string()))
    );
}

#[test]
fn route_color_file_without_route_type() {
    let options = LoadOptions::default();
    let err = Routes::parse("route_id,route_color\nA1,ZZZZZZ\n", &options).unwrap_err();
    assert_eq!(err.row, 1);
    assert_eq!(err.source, TransitError::MissingRequiredFields(vec!["route_type"]));

    let err = Routes::parse("route_id,route_type,route_color\nA1,3,ZZZZZZ\n", &options)
        .unwrap_err();
    assert_eq!(err.row, 2);
    assert_eq!(err.source, TransitError::InvalidColor("ZZZZZZ".to_string()));
}

#[test]
fn quoted_comma_is_not_split() {
    let cells = read_record("A1,\"5,000\"").unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1], "5,000");

    let routes = Routes::parse(
        "route_id,route_long_name,route_type\nA1,\"5,000\",3\n",
        &LoadOptions::default(),
    )
    .unwrap();
    assert_eq!(routes[0].long_name.as_deref(), Some("5,000"));
}

#[test]
fn every_row_has_one_cell_per_column() {
    let text = "route_id,route_type\nA1,3\nA2,3,extra\n";
    let err = Routes::parse(text, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.row, 3);
    assert_eq!(
        err.source,
        TransitError::HeaderRecordMismatch {
            header: 2,
            record: 3
        }
    );

    let short = route("route_id,route_type,route_color", "A1,3");
    assert_eq!(
        short,
        Err(TransitError::HeaderRecordMismatch {
            header: 3,
            record: 2
        })
    );
}

#[test]
fn mismatch_is_reported_before_coercion() {
    // the bad route type would fail too, but the cell count is checked first
    assert_eq!(
        route("route_id,route_type", "A1,99,x"),
        Err(TransitError::HeaderRecordMismatch {
            header: 2,
            record: 3
        })
    );
}

#[test]
fn unknown_columns_never_fail_a_file() {
    let text = "route_id,operator_notes,route_type,x\nA1,\"free, text\",3,\n";
    let routes = Routes::parse(text, &LoadOptions::default()).unwrap();
    let nonstandard: Vec<&str> = routes.header().nonstandard_columns().collect();
    assert_eq!(nonstandard, vec!["operator_notes", "x"]);
    assert_eq!(routes.header().fields()[1], RouteField::NONSTANDARD);
    assert_eq!(
        routes[0].extensions.get("operator_notes").map(String::as_str),
        Some("free, text")
    );
    assert_eq!(routes[0].extensions.get("x").map(String::as_str), Some(""));
}

#[test]
fn empty_optional_cells_are_absent() {
    let header = "route_id,route_type,route_short_name,route_url,route_color,route_sort_order";
    let r = route(header, "A1,3,,,,").unwrap();
    assert_eq!(r.short_name, None);
    assert_eq!(r.url, None);
    assert_eq!(r.color, None);
    assert_eq!(r.sort_order, None);
}

#[test]
fn empty_required_cells_fail() {
    assert_eq!(
        route("route_id,route_type", ",3"),
        Err(TransitError::MissingRequiredFields(vec!["route_id"]))
    );
    assert_eq!(
        route("route_id,route_type", "A1,"),
        Err(TransitError::InvalidFieldType {
            field: "route_type",
            value: String::new()
        })
    );
}

#[test]
fn unsigned_integers_are_strict() {
    let header = "route_id,route_type,route_sort_order";
    assert_eq!(route(header, "A1,3,0").unwrap().sort_order, Some(0));
    for bad in &["-1", "1.5", "12a", "+4"] {
        let row = format!("A1,3,{}", bad);
        assert_eq!(
            route(header, &row),
            Err(TransitError::InvalidFieldType {
                field: "route_sort_order",
                value: bad.to_string()
            })
        );
    }
}

#[test]
fn unknown_enumeration_values_fail() {
    let err = route("route_id,route_type", "A1,99").unwrap_err();
    assert_eq!(
        err,
        TransitError::InvalidFieldType {
            field: "route_type",
            value: "99".to_string()
        }
    );
    assert!(err.to_string().contains("route_type"));
}

#[test]
fn header_only_file_is_empty() {
    let trips = Trips::parse(
        "route_id,service_id,trip_id\r\n",
        &LoadOptions::default(),
    )
    .unwrap();
    assert!(trips.is_empty());
    assert_eq!(trips.iter().count(), 0);
}

#[test]
fn blank_lines_do_not_create_records() {
    let text = "shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence\n\nS,1.0,2.0,1\r\n\r\nS,1.5,2.5,2\n\n";
    let shapes = Collection::<Shape>::parse(text, &LoadOptions::default()).unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[1].point_sequence, 2);
}

#[test]
fn skip_policy_reports_every_bad_row() {
    init_test_logger();
    let text = "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
                T1,08:00:00,08:00:00,S1,1\n\
                T1,08:61:00,08:10:00,S2,2\n\
                T1,08:20:00,08:20:00,S3,x\n\
                T1,08:30:00,08:30:00,S4,4\n";
    assert_eq!(
        StopTimes::parse(text, &LoadOptions::default())
            .unwrap_err()
            .row,
        3
    );

    let stop_times = StopTimes::parse(text, &LoadOptions::new().skip_invalid_rows()).unwrap();
    assert_eq!(stop_times.len(), 2);
    assert_eq!(stop_times.skipped_rows(), 2);
    let stops: Vec<&str> = stop_times.iter().map(|st| st.stop_id.as_str()).collect();
    assert_eq!(stops, vec!["S1", "S4"]);
}

#[test]
fn collections_serialize_as_record_lists() {
    let routes = Routes::parse(
        "route_id,route_type,route_color\nA1,3,00ff7f\n",
        &LoadOptions::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&routes).unwrap();
    assert_eq!(json[0]["route_id"], "A1");
    assert_eq!(json[0]["route_type"], "Bus");
    assert_eq!(json[0]["color"], "00FF7F");
}
