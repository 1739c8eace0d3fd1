use super::*;

fn sample_tree() -> VisualNode {
    VisualNode::named_group(
        "card",
        Props::at(100.0, 50.0).opacity(0.5),
        vec![
            VisualNode::rect(Props::rect(0.0, 0.0, 400.0, 120.0), Rgba8::WHITE)
                .with_corner_radius(24.0)
                .with_blur(12.0),
            VisualNode::text(Props::at(24.0, 30.0), "Module 1", 48.0, Rgba8::BLACK)
                .with_font_weight(700),
            VisualNode::image(Props::rect(320.0, 20.0, 64.0, 64.0), "icons/spark.svg"),
        ],
    )
}

#[test]
fn serializes_with_kind_tag_and_flat_props() {
    let v = serde_json::to_value(sample_tree()).unwrap();
    assert_eq!(v["kind"], "group");
    assert_eq!(v["name"], "card");
    assert_eq!(v["x"], 100.0);
    assert_eq!(v["opacity"], 0.5);
    assert_eq!(v["children"][0]["kind"], "rect");
    assert_eq!(v["children"][0]["color"], "#ffffffff");
    assert_eq!(v["children"][1]["kind"], "text");
    assert_eq!(v["children"][1]["content"], "Module 1");
    assert_eq!(v["children"][2]["asset"], "icons/spark.svg");
}

#[test]
fn json_round_trip_preserves_tree() {
    let tree = sample_tree();
    let json = serde_json::to_string(&tree).unwrap();
    let back: VisualNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn props_default_on_deserialize() {
    let n: VisualNode =
        serde_json::from_str(r##"{"kind":"rect","color":"#ff0000","width":10}"##).unwrap();
    let p = n.props();
    assert_eq!(p.opacity, 1.0);
    assert_eq!(p.width, 10.0);
    assert!(p.transform.is_identity());
}

#[test]
fn leaf_count_and_walk_cover_subtree() {
    let tree = VisualNode::group(vec![sample_tree(), sample_tree()]);
    assert_eq!(tree.leaf_count(), 6);
    let mut kinds = Vec::new();
    tree.walk(&mut |n| {
        kinds.push(match n {
            VisualNode::Group(_) => 'g',
            VisualNode::Rect(_) => 'r',
            VisualNode::Text(_) => 't',
            VisualNode::Image(_) => 'i',
        })
    });
    assert_eq!(kinds.iter().collect::<String>(), "ggrtigrti");
}

#[test]
fn fade_multiplies_and_clamps() {
    let n = VisualNode::rect(Props::default().opacity(0.8), Rgba8::WHITE).fade(0.5);
    assert!((n.props().opacity - 0.4).abs() < 1e-12);
    let n = n.fade(-3.0);
    assert_eq!(n.props().opacity, 0.0);
}

#[test]
fn circle_is_centered_and_round() {
    let VisualNode::Rect(r) = VisualNode::circle(50.0, 60.0, 20.0, Rgba8::WHITE) else {
        panic!("circle must be a rect");
    };
    assert_eq!((r.props.x, r.props.y), (40.0, 50.0));
    assert_eq!(r.corner_radius, 10.0);
}

#[test]
fn validate_accepts_well_formed_tree() {
    sample_tree().validate().unwrap();
}

#[test]
fn validate_reports_path_of_non_finite_value() {
    let mut tree = sample_tree();
    if let VisualNode::Group(g) = &mut tree {
        g.children[1].props_mut().y = f64::NAN;
    }
    let err = tree.validate().unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
    let msg = err.to_string();
    assert!(msg.contains("root/card[1]"), "{msg}");
    assert!(msg.contains("y is NaN"), "{msg}");
}

#[test]
fn local_affine_places_then_transforms() {
    let plain = Props::at(10.0, 20.0);
    assert_eq!(plain.local_affine(), Affine::translate(Vec2::new(10.0, 20.0)));

    let scaled = plain.transform(Transform2D::default().with_uniform_scale(2.0));
    let p = scaled.local_affine() * kurbo::Point::new(5.0, 5.0);
    assert_eq!((p.x, p.y), (20.0, 30.0));
}

#[test]
fn validate_rejects_overflowing_world_transform() {
    let huge = Transform2D::default().with_uniform_scale(1e200);
    let leaf = VisualNode::rect(Props::at(1.0, 1.0).transform(huge), Rgba8::WHITE);
    leaf.validate().unwrap();

    let nested = VisualNode::named_group("zoom", Props::default().transform(huge), vec![leaf]);
    let err = nested.validate().unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
    let msg = err.to_string();
    assert!(msg.contains("root/zoom[0]"), "{msg}");
    assert!(msg.contains("world transform"), "{msg}");
}

#[test]
fn validate_rejects_out_of_range_opacity() {
    let mut n = VisualNode::rect(Props::default(), Rgba8::WHITE);
    n.props_mut().opacity = 1.5;
    assert!(n.validate().is_err());
}

#[test]
fn style_builders_ignore_other_kinds() {
    let t = VisualNode::text(Props::default(), "x", 10.0, Rgba8::WHITE).with_blur(5.0);
    let VisualNode::Text(t) = t else {
        panic!("still text");
    };
    assert_eq!(t.font_weight, 400);
}
