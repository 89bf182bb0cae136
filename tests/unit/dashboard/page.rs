use super::*;
use crate::{
    foundation::rng::Rng64,
    render::recording::{RecordingSurface, SurfaceOp},
};

#[test]
fn layout_places_three_cards_above_the_chart() {
    let layout = PageLayout::for_viewport(Viewport::new(1024, 768).unwrap(), 3).unwrap();
    assert_eq!(layout.cards.len(), 3);
    let w = (1024.0 - 4.0 * 24.0) / 3.0;
    for (i, r) in layout.cards.iter().enumerate() {
        assert!((r.width() - w).abs() < 1e-9);
        assert_eq!(r.height(), 120.0);
        assert_eq!(r.x0, 24.0 + i as f64 * (w + 24.0));
    }
    assert!((layout.cards[2].x1 - 1000.0).abs() < 1e-9);
    assert_eq!(layout.chart, Rect::new(24.0, 216.0, 1000.0, 744.0));
    assert!(layout.cards.iter().all(|c| c.y1 < layout.chart.y0));
}

#[test]
fn tiny_viewports_are_rejected() {
    assert!(PageLayout::for_viewport(Viewport::new(60, 768).unwrap(), 3).is_err());
    assert!(PageLayout::for_viewport(Viewport::new(1024, 200).unwrap(), 3).is_err());
}

#[test]
fn page_stacks_background_panels_and_chart() {
    let mut surface = RecordingSurface::new(Viewport::new(1024, 768).unwrap());
    let page = DashboardPage::default();
    let mounted = page.render(&mut surface, &mut Rng64::new(11)).unwrap();
    assert_eq!(mounted.stats().drawn, 121);

    let ops = &mounted.surface().ops;
    // clear, 121 triangles, present, 3 panels, frame, series, present
    assert_eq!(ops.len(), 1 + 121 + 1 + 3 + 2 + 1);
    assert_eq!(ops[122], SurfaceOp::Present);
    assert!(ops[123..126].iter().all(|op| matches!(
        op,
        SurfaceOp::Fill { color, .. } if *color == page.panel
    )));
    assert!(matches!(ops[126], SurfaceOp::Stroke { .. }));
    assert!(matches!(ops[127], SurfaceOp::Stroke { .. }));
    assert_eq!(ops.last(), Some(&SurfaceOp::Present));

    drop(mounted);
    assert_eq!(surface.ops.last(), Some(&SurfaceOp::Clear));
}

#[test]
fn layout_failure_happens_before_drawing() {
    let mut surface = RecordingSurface::new(Viewport::new(40, 40).unwrap());
    assert!(
        DashboardPage::default()
            .render(&mut surface, &mut Rng64::new(0))
            .is_err()
    );
    assert!(surface.ops.is_empty());
}
