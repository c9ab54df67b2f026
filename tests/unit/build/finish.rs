use super::*;
use crate::scene::widget::{GroupWidget, LabelWidget, ScrollPaneWidget, WidgetKind};
use crate::scene::widget::Align;

fn option() -> OptionDef {
    OptionDef {
        name: "hud".to_string(),
        x: 12.5,
        y: -4.0,
        width: 100.0,
        height: 40.0,
        rotation: 30.0,
        z_order: 3,
        color_r: 255,
        color_g: 0,
        color_b: 51,
        opacity: 102,
        visible: false,
        clip_able: true,
        ..OptionDef::default()
    }
}

fn label() -> Widget {
    Widget::new(WidgetKind::Label(LabelWidget {
        text: String::new(),
        style: None,
        h_align: Align::Start,
        v_align: Align::Start,
    }))
}

#[test]
fn common_properties_match_declared_values() {
    let mut w = Widget::new(WidgetKind::Group(GroupWidget::default()));
    finish_widget(&option(), &mut w);

    assert_eq!(w.name, "hud");
    assert_eq!(w.position, Point::new(12.5, -4.0));
    assert_eq!(w.size, Size::new(100.0, 40.0));
    assert_eq!(w.rotation_deg, 30.0);
    assert_eq!(w.z_order, 3);
    assert!(!w.visible);
    assert!(w.clip);
    assert_eq!(w.color, Color::rgba(1.0, 0.0, 0.2, 0.4));
}

#[test]
fn clip_is_ignored_for_non_containers() {
    let mut w = label();
    finish_widget(&option(), &mut w);
    assert!(!w.clip);
}

#[test]
fn scale_is_left_to_the_builder() {
    let mut w = label();
    w.scale = crate::foundation::core::Vec2::new(2.0, 3.0);
    let o = OptionDef {
        scale_x: 9.0,
        ..OptionDef::default()
    };
    finish_widget(&o, &mut w);
    assert_eq!(w.scale, crate::foundation::core::Vec2::new(2.0, 3.0));
}

#[test]
fn clip_follows_option_for_every_container() {
    let mut pane = Widget::new(WidgetKind::ScrollPane(ScrollPaneWidget::default()));
    finish_widget(&option(), &mut pane);
    assert!(pane.clip);

    let mut group = Widget::new(WidgetKind::Group(GroupWidget::default()));
    group.clip = true;
    finish_widget(&OptionDef::default(), &mut group);
    assert!(!group.clip);
}
