use super::*;

fn draw_count_recursive(depth: u32) -> usize {
    if depth == 0 {
        return 0;
    }
    1 + 3 * draw_count_recursive(depth - 1)
}

#[test]
fn draw_counts_follow_the_geometric_series() {
    for d in 0..=8 {
        let stats = walk(TriangleNode::new(Point::ZERO, 64.0, d), |_| {});
        assert_eq!(Some(stats.drawn), expected_draws(d), "depth {d}");
        assert_eq!(stats.drawn, draw_count_recursive(d), "depth {d}");
        assert_eq!(stats.terminal, 3usize.pow(d), "depth {d}");
    }
    assert_eq!(expected_draws(5), Some(121));
}

#[test]
fn expected_draws_reports_overflow_instead_of_panicking() {
    assert_eq!(expected_draws(0), Some(0));
    assert!(expected_draws(40).is_some());
    assert_eq!(expected_draws(41), None);
    assert_eq!(expected_draws(u32::MAX), None);
}

#[test]
fn default_root_draws_121_and_visits_243_leaves() {
    let viewport = Viewport::new(1280, 720).unwrap();
    let params = FractalParams::for_viewport(viewport);
    assert_eq!(params.apex, Point::new(640.0, 100.0));
    assert_eq!(params.size, 300.0);
    assert_eq!(params.depth, 5);

    let mut drawn_depths = Vec::new();
    let stats = walk(params.root(), |n| drawn_depths.push(n.depth));
    assert_eq!(stats.drawn, 121);
    assert_eq!(stats.terminal, 243);
    assert!(drawn_depths.iter().all(|&d| d > 0));
    assert_eq!(stats.max_pending, 11);
}

#[test]
fn children_halve_size_and_decrement_depth() {
    let node = TriangleNode::new(Point::new(10.0, 20.0), 40.0, 3);
    let [a, b, c] = node.children().unwrap();
    for child in [a, b, c] {
        assert_eq!(child.size, 20.0);
        assert_eq!(child.depth, 2);
    }
    assert_eq!(a.apex, Point::new(10.0, 20.0));
    assert_eq!(b.apex, Point::new(0.0, 40.0));
    assert_eq!(c.apex, Point::new(20.0, 40.0));
}

#[test]
fn terminal_nodes_have_no_children() {
    let leaf = TriangleNode::new(Point::new(1.0, 1.0), 8.0, 0);
    assert!(leaf.is_terminal());
    assert!(leaf.children().is_none());
    let stats = walk(leaf, |_| panic!("depth-0 node must not be drawn"));
    assert_eq!(stats, SubdivisionStats { drawn: 0, terminal: 1, max_pending: 0 });
}

#[test]
fn walk_matches_recursive_pre_order() {
    fn recurse(node: TriangleNode, out: &mut Vec<TriangleNode>) {
        let Some(children) = node.children() else {
            return;
        };
        out.push(node);
        for child in children {
            recurse(child, out);
        }
    }

    let root = TriangleNode::new(Point::new(200.0, 100.0), 300.0, 4);
    let mut expected = Vec::new();
    recurse(root, &mut expected);

    let mut actual = Vec::new();
    walk(root, |n| actual.push(*n));
    assert_eq!(actual, expected);
}

#[test]
fn every_parent_child_pair_keeps_the_offsets() {
    let root = FractalParams::for_viewport(Viewport::new(800, 600).unwrap()).root();
    walk(root, |n| {
        let Some([a, b, c]) = n.children() else {
            return;
        };
        let s = n.size;
        assert_eq!(a.apex, n.apex);
        assert_eq!(b.apex, Point::new(n.apex.x - s / 4.0, n.apex.y + s / 2.0));
        assert_eq!(c.apex, Point::new(n.apex.x + s / 4.0, n.apex.y + s / 2.0));
        assert!([a, b, c].iter().all(|ch| ch.size == s / 2.0 && ch.depth + 1 == n.depth));
    });
}

#[test]
fn triangle_path_is_closed_with_apex_first() {
    use kurbo::PathEl;

    let node = TriangleNode::new(Point::new(50.0, 10.0), 20.0, 1);
    let els = node.triangle_path().elements().to_vec();
    assert_eq!(
        els,
        vec![
            PathEl::MoveTo(Point::new(50.0, 10.0)),
            PathEl::LineTo(Point::new(60.0, 30.0)),
            PathEl::LineTo(Point::new(40.0, 30.0)),
            PathEl::ClosePath,
        ]
    );
}
