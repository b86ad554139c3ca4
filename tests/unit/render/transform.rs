use super::*;
use crate::render::surface::alloc_pixmap;
use crate::test_support::CountingGraphic;

#[test]
fn box_starts_at_child_natural_size() {
    let node = TransformNode::new(CountingGraphic::new(40.0, 30.0));
    assert_eq!(node.box_size(), Vec2::new(40.0, 30.0));
    assert_eq!(node.natural_size(), Vec2::new(40.0, 30.0));
    assert_eq!(node.transform(), &TransformAccumulator::new());
}

#[test]
fn render_composes_parent_then_own_transform() {
    let face = CountingGraphic::new(10.0, 10.0);
    let mut node = TransformNode::new(face.clone());
    node.transform_mut().scale(Vec2::new(2.0, 2.0));

    let parent = kurbo::Affine::translate((5.0, 0.0));
    let mut pixmap = alloc_pixmap(4, 4).unwrap();
    node.render(parent, &mut pixmap).unwrap();

    assert_eq!(face.renders(), 1);
    assert_eq!(
        face.last_transform(),
        Some(parent * kurbo::Affine::scale(2.0))
    );
}

#[test]
fn replacing_child_resets_box_only() {
    let mut node = TransformNode::new(CountingGraphic::new(10.0, 10.0));
    node.set_box_size(Vec2::new(64.0, 64.0));
    node.transform_mut().rotate(1.0);

    let old = node.replace_child(CountingGraphic::new(20.0, 8.0));
    assert_eq!(old.natural_size(), Vec2::new(10.0, 10.0));
    assert_eq!(node.child().natural_size(), Vec2::new(20.0, 8.0));
    assert_eq!(node.box_size(), Vec2::new(20.0, 8.0));
    assert_ne!(node.transform().affine(), kurbo::Affine::IDENTITY);
}
