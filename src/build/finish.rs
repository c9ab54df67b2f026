use crate::foundation::core::{Color, Point, Size};
use crate::scene::graph::Widget;
use crate::scene::model::OptionDef;

/// Apply the properties every widget kind shares.
///
/// Order: visibility, rotation, position, clip (containers only), color tint. Name, size and
/// z-order are copied as declared. Scale is left to the type-specific builder, and the position is
/// used as is, without anchor conversion.
pub fn finish_widget(option: &OptionDef, widget: &mut Widget) {
    widget.visible = option.visible;
    widget.rotation_deg = option.rotation;
    widget.position = Point::new(option.x, option.y);
    if widget.kind.is_container() {
        widget.clip = option.clip_able;
    }
    widget.color = Color::from_rgba8(
        option.color_r,
        option.color_g,
        option.color_b,
        option.opacity,
    );

    widget.name.clone_from(&option.name);
    widget.size = Size::new(option.width, option.height);
    widget.z_order = option.z_order;
}

#[cfg(test)]
#[path = "../../tests/unit/build/finish.rs"]
mod tests;
