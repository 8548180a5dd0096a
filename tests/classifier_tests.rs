/// Integration-Tests für die Lane-Klassifizierung
use approx::assert_relative_eq;
use road_mesh_export::demo::DemoNetworkBuilder;
use road_mesh_export::export::ClassifierParams;
use road_mesh_export::{DrawCategory, LaneClassifier, parse_road_network};

fn classify_fixture() -> road_mesh_export::export::ClassifiedLanes {
    let json = include_str!("fixtures/seed_section.json");
    let network = parse_road_network(json).expect("Fixture muss gültig sein");
    LaneClassifier::new(ClassifierParams::default()).classify(&network)
}

#[test]
fn test_seed_cross_section_truth_table() {
    // [BORDER, SIDEWALK, BORDER, DRIVING, BORDER, SIDEWALK, BORDER]
    let classified = classify_fixture();

    assert_eq!(classified.count(DrawCategory::Roadway), 1);
    assert_eq!(classified.count(DrawCategory::Sidewalk), 2);
    assert_eq!(classified.count(DrawCategory::Border), 4);
    assert_eq!(classified.count(DrawCategory::Marking), 2);
    assert_eq!(classified.count(DrawCategory::DirectionIndicator), 1);
    assert_eq!(classified.count(DrawCategory::OrientationIndicator), 2);
    assert_eq!(classified.skipped_sections, 0);
}

#[test]
fn test_seed_edge_markings_sit_inside_roadway() {
    let classified = classify_fixture();
    let params = ClassifierParams::default();

    // Fahrbahn zwischen y = 1.75 und y = -1.75
    let markings: Vec<_> = classified.of_category(DrawCategory::Marking).collect();
    let left = markings[0];
    let right = markings[1];

    for p in &left.left.vertices {
        assert_relative_eq!(p.y, 1.75 - params.edge_marking_shift, epsilon = 1e-5);
    }
    for p in &left.right.vertices {
        assert_relative_eq!(
            p.y,
            1.75 - params.edge_marking_shift - params.marking_width,
            epsilon = 1e-5
        );
    }
    for p in &right.right.vertices {
        assert_relative_eq!(p.y, -1.75 + params.edge_marking_shift, epsilon = 1e-5);
    }
    assert_relative_eq!(left.elevation, params.marking_elevation);
    assert_eq!(left.len(), 5);
}

#[test]
fn test_seed_elevations_per_category() {
    let classified = classify_fixture();
    let params = ClassifierParams::default();

    assert!(classified
        .of_category(DrawCategory::Roadway)
        .all(|l| l.elevation == params.driving_elevation));
    assert!(classified
        .of_category(DrawCategory::Sidewalk)
        .all(|l| l.elevation == params.sidewalk_elevation));
    assert!(classified
        .of_category(DrawCategory::Border)
        .all(|l| l.elevation == params.border_elevation));
}

#[test]
fn test_indicators_flip_in_first_half() {
    let classified = classify_fixture();
    let anchors: Vec<_> = classified
        .of_category(DrawCategory::OrientationIndicator)
        .collect();

    // Gehweg 1 liegt in der ersten Hälfte: gedreht, läuft gegen +X
    let first = anchors[0];
    assert!(first.left.vertices[0].x > first.left.vertices[4].x);
    assert!(first.left.vertices[0].y < first.right.vertices[0].y);

    // Gehweg 5 liegt in der zweiten Hälfte: unverändert
    let second = anchors[1];
    assert!(second.left.vertices[0].x < second.left.vertices[4].x);
    assert!(second.left.vertices[0].y > second.right.vertices[0].y);
}

#[test]
fn test_avenue_center_line_and_direction_flip() {
    let network = DemoNetworkBuilder::straight_avenue(60.0, 13).build();
    let params = ClassifierParams::default();
    let classified = LaneClassifier::new(params).classify(&network);

    assert_eq!(classified.count(DrawCategory::Roadway), 2);
    // 2 Randlinien + 2 Mittellinien-Striche (13 Punkte, Strich 3, Lücke 3)
    assert_eq!(classified.count(DrawCategory::Marking), 4);

    let stripes: Vec<_> = classified
        .of_category(DrawCategory::Marking)
        .filter(|m| m.left.vertices[0].y.abs() < 1.0)
        .collect();
    assert_eq!(stripes.len(), 2);
    for stripe in &stripes {
        assert_eq!(stripe.len(), 4);
        assert_relative_eq!(stripe.left.vertices[0].y, params.marking_width / 2.0, epsilon = 1e-5);
        assert_relative_eq!(stripe.right.vertices[0].y, -params.marking_width / 2.0, epsilon = 1e-5);
    }
    assert_relative_eq!(stripes[1].left.vertices[0].x, 30.0, epsilon = 1e-4);

    let directions: Vec<_> = classified
        .of_category(DrawCategory::DirectionIndicator)
        .collect();
    assert_eq!(directions.len(), 2);
    // Linke Fahrbahn (Index 3 von 8) gedreht, rechte (Index 4) nicht
    assert!(directions[0].left.vertices[0].x > directions[0].left.vertices[12].x);
    assert!(directions[1].left.vertices[0].x < directions[1].left.vertices[12].x);
}

#[test]
fn test_section_without_exported_lanes_is_skipped() {
    use road_mesh_export::LaneType;

    let network = DemoNetworkBuilder::straight("rail", 20.0, 5)
        .lane(LaneType::Rail, 3.0)
        .lane(LaneType::Tram, 3.0)
        .build();
    let classified = LaneClassifier::new(ClassifierParams::default()).classify(&network);
    assert!(classified.lanes.is_empty());
    assert_eq!(classified.skipped_sections, 1);
}
