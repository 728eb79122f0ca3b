use wayfinder::persistence::{load_from_path, save_to_path};
use wayfinder::{FloorId, GraphDocument, Navigator, NavigatorConfig, Point, Tag};

const BUILDING: &str = r#"{ "nodes": [
    { "GID": 0, "Coords": [0, 0],   "Vectors": [1],    "Type": "waypoint",  "Floor": "1" },
    { "GID": 1, "Coords": [4, 0],   "Vectors": [0, 2], "Type": "waypoint",  "Floor": "1" },
    { "GID": 2, "Coords": [4, 3],   "Vectors": [1],    "Type": "elevation", "Floor": "1" },
    { "GID": 3, "Coords": [4, 3],   "Vectors": [4],    "Type": "elevation", "Floor": "2" },
    { "GID": 4, "Coords": [10, 10], "Vectors": [3],    "Type": "waypoint",  "Floor": "2" }
] }"#;

#[test]
fn test_load_and_navigate_building() {
    let doc: GraphDocument = serde_json::from_str(BUILDING).unwrap();
    let mut nav = Navigator::from_document(&doc, NavigatorConfig::default()).unwrap();

    assert_eq!(nav.store().floors(), vec![FloorId::new("1"), FloorId::new("2")]);
    assert_eq!(nav.store().edge_count(), 3);

    let same_floor: Vec<Point> = nav
        .navigate(Point::new(0.0, 0.0), Point::new(4.0, 3.0))
        .unwrap()
        .iter()
        .map(|n| n.coords)
        .collect();
    assert_eq!(
        same_floor,
        vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 3.0)]
    );

    let cross_floor = nav
        .navigate(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
        .unwrap();
    let last = cross_floor.last().unwrap();
    assert_eq!(last.tag, Tag::elevation());
    assert_eq!(last.floor, FloorId::new("1"));
}

#[test]
fn test_edit_save_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("building.json");

    let doc: GraphDocument = serde_json::from_str(BUILDING).unwrap();
    let mut nav = Navigator::from_document(&doc, NavigatorConfig::default()).unwrap();

    let id = nav.create_point(Point::new(8.0, 0.0), "1", Tag::waypoint()).unwrap();
    assert_eq!(id.as_u64(), 5);
    nav.create_edge(Point::new(4.0, 0.0), Point::new(8.0, 0.0)).unwrap();
    nav.delete_point(Point::new(0.0, 0.0)).unwrap();

    save_to_path(nav.store(), &path).unwrap();
    let reloaded = load_from_path(&path).unwrap();

    assert_eq!(reloaded.node_count(), 5);
    assert_eq!(reloaded.edge_count(), 3);
    assert!(reloaded.find_by_coords(Point::new(0.0, 0.0)).is_err());
    assert!(reloaded.validate().is_ok());
    assert_eq!(
        wayfinder::persistence::save_document(&reloaded),
        nav.to_document()
    );
}

#[test]
fn test_points_created_after_load_keep_existing_nodes() {
    let json = r#"{ "nodes": [
        { "GID": "0",  "Coords": [0, 0], "Vectors": ["41"], "Type": "waypoint", "Floor": "1" },
        { "GID": "41", "Coords": [2, 0], "Vectors": ["0"],  "Type": "waypoint", "Floor": "1" }
    ] }"#;
    let doc: GraphDocument = serde_json::from_str(json).unwrap();
    let mut nav = Navigator::from_document(&doc, NavigatorConfig::default()).unwrap();

    let id = nav.create_point(Point::new(5.0, 0.0), "1", Tag::waypoint()).unwrap();
    assert_eq!(id.as_u64(), 42);
    assert_eq!(nav.store().node_count(), 3);
    assert_eq!(nav.store().edge_count(), 1);
    assert!(nav.store().validate().is_ok());
}
