use phys_sleep::{pick_body_at_point, BoxBody, PickBox, Vector2};

fn overlapping_pair() -> Vec<PickBox> {
    vec![
        PickBox::new("A", Vector2::new(0.0, 0.0), Vector2::new(0.5, 0.5)),
        PickBox::new("B", Vector2::new(0.25, 0.25), Vector2::new(0.5, 0.5)),
    ]
}

#[test]
fn test_pick_returns_first_in_order() {
    let boxes = overlapping_pair();

    let hit = pick_body_at_point(Vector2::new(0.1, 0.1), &boxes);
    assert_eq!(hit.map(|b| b.id.as_str()), Some("A"));

    // Reversing the order flips the winner
    let hit = pick_body_at_point(Vector2::new(0.1, 0.1), boxes.iter().rev());
    assert_eq!(hit.map(|b| b.id.as_str()), Some("B"));
}

#[test]
fn test_pick_misses_return_none() {
    let boxes = overlapping_pair();

    assert!(pick_body_at_point(Vector2::new(0.0, 2.0), &boxes).is_none());
    let empty: Vec<PickBox> = Vec::new();
    assert!(pick_body_at_point(Vector2::new(0.0, 0.0), &empty).is_none());
}

#[test]
fn test_pick_edges_are_inclusive() {
    let boxes = vec![PickBox::new("edge", Vector2::new(1.0, 1.0), Vector2::new(0.5, 0.25))];

    for point in [
        Vector2::new(1.5, 1.0),
        Vector2::new(0.5, 1.0),
        Vector2::new(1.0, 1.25),
        Vector2::new(1.0, 0.75),
        Vector2::new(1.5, 1.25),
    ] {
        assert!(pick_body_at_point(point, &boxes).is_some(), "{} should hit", point);
    }

    assert!(pick_body_at_point(Vector2::new(1.5001, 1.0), &boxes).is_none());
}

#[test]
fn test_pick_only_second_box() {
    let boxes = overlapping_pair();

    let hit = pick_body_at_point(Vector2::new(0.7, 0.7), &boxes);
    assert_eq!(hit.map(|b| b.id.as_str()), Some("B"));
}

#[test]
fn test_pick_from_box_bodies() {
    let bodies = [
        BoxBody::new("floor", Vector2::new(0.0, -1.0), Vector2::new(10.0, 0.5)),
        BoxBody::new("crate", Vector2::new(2.0, 0.0), Vector2::new(0.5, 0.5)),
    ];
    let boxes: Vec<PickBox> = bodies.iter().map(BoxBody::get_pick_box).collect();

    let hit = pick_body_at_point(Vector2::new(2.2, 0.3), &boxes);
    assert_eq!(hit.map(|b| b.id.as_str()), Some("crate"));
}
