//! Built-in parsers for the CocoStudio widget vocabulary.

use std::sync::Arc;

use crate::assets::resolver::Resolver;
use crate::build::registry::WidgetParser;
use crate::foundation::core::{Point, Size, Vec2};
use crate::scene::graph::Widget;
use crate::scene::model::{OptionDef, resource_path};
use crate::scene::widget::{
    Align, Background, BitmapLabelWidget, ButtonWidget, CheckBoxWidget, FillDirection,
    GroupWidget, ImageWidget, LabelWidget, LoadingBarWidget, ScrollPaneWidget, TextFieldWidget,
    TextOverlay, WidgetKind,
};

/// One instance of every built-in parser.
pub fn default_parsers() -> Vec<Arc<dyn WidgetParser>> {
    vec![
        Arc::new(PanelParser),
        Arc::new(ButtonParser),
        Arc::new(CheckBoxParser),
        Arc::new(ImageViewParser),
        Arc::new(LabelParser),
        Arc::new(BitmapLabelParser),
        Arc::new(LoadingBarParser),
        Arc::new(ScrollViewParser),
        Arc::new(TextFieldParser),
    ]
}

fn scaled(mut widget: Widget, option: &OptionDef) -> Widget {
    widget.scale = Vec2::new(option.scale_x, option.scale_y);
    widget
}

/// `Panel`: plain container with an optional centered background. Clipping is applied by the
/// finisher.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelParser;

impl WidgetParser for PanelParser {
    fn class_name(&self) -> &str {
        "Panel"
    }

    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget {
        let background = res
            .texture_region(option, resource_path(&option.background_image_data))
            .map(|region| {
                let size = region.size();
                let offset = Point::new(
                    (option.width - size.width) / 2.0,
                    (option.height - size.height) / 2.0,
                );
                Background { region, offset }
            });

        Widget::new(WidgetKind::Group(GroupWidget { background }))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonParser;

impl WidgetParser for ButtonParser {
    fn class_name(&self) -> &str {
        "Button"
    }

    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget {
        let up = res.texture_region(option, resource_path(&option.normal_data));
        let down = res.texture_region(option, resource_path(&option.pressed_data));
        let disabled = res.texture_region(option, resource_path(&option.disabled_data));
        let label = (!option.text.is_empty()).then(|| TextOverlay {
            text: option.text.clone(),
            style: res.font_style(option),
        });

        let kind = WidgetKind::Button(ButtonWidget {
            up,
            down,
            disabled,
            label,
        });
        scaled(Widget::new(kind), option)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CheckBoxParser;

impl WidgetParser for CheckBoxParser {
    fn class_name(&self) -> &str {
        "CheckBox"
    }

    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget {
        let mut region = |path| res.texture_region(option, path);
        let kind = WidgetKind::CheckBox(CheckBoxWidget {
            background: region(resource_path(&option.background_box_data)),
            background_selected: region(resource_path(&option.background_box_selected_data)),
            cross: region(resource_path(&option.front_cross_data)),
            background_disabled: region(resource_path(&option.background_box_disabled_data)),
            cross_disabled: region(resource_path(&option.front_cross_disabled_data)),
            checked: option.selected_state,
        });
        Widget::new(kind)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ImageViewParser;

impl WidgetParser for ImageViewParser {
    fn class_name(&self) -> &str {
        "ImageView"
    }

    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget {
        let region = res.texture_region(option, resource_path(&option.file_name_data));
        scaled(Widget::new(WidgetKind::Image(ImageWidget { region })), option)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LabelParser;

impl WidgetParser for LabelParser {
    fn class_name(&self) -> &str {
        "Label"
    }

    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget {
        Widget::new(WidgetKind::Label(LabelWidget {
            text: option.text.clone(),
            style: res.font_style(option),
            h_align: Align::from_code(option.h_alignment),
            v_align: Align::from_code(option.v_alignment),
        }))
    }
}

/// `LabelBMFont`: text drawn with a pre-rendered bitmap font.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapLabelParser;

impl WidgetParser for BitmapLabelParser {
    fn class_name(&self) -> &str {
        "LabelBMFont"
    }

    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget {
        Widget::new(WidgetKind::BitmapLabel(BitmapLabelWidget {
            text: option.text.clone(),
            face: res.bitmap_font(option),
        }))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LoadingBarParser;

impl WidgetParser for LoadingBarParser {
    fn class_name(&self) -> &str {
        "LoadingBar"
    }

    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget {
        let direction = match option.direction {
            1 => FillDirection::RightToLeft,
            _ => FillDirection::LeftToRight,
        };
        Widget::new(WidgetKind::LoadingBar(LoadingBarWidget {
            background: res.texture_region(option, resource_path(&option.background_image_data)),
            fill: res.texture_region(option, resource_path(&option.texture_data)),
            percent: option.percent.clamp(0.0, 100.0),
            direction,
        }))
    }
}

/// `ScrollView`: container with an inner content size.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollViewParser;

impl WidgetParser for ScrollViewParser {
    fn class_name(&self) -> &str {
        "ScrollView"
    }

    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget {
        // 1 vertical, 2 horizontal, 3 both.
        let (scroll_x, scroll_y) = match option.direction {
            1 => (false, true),
            2 => (true, false),
            3 => (true, true),
            _ => (false, false),
        };
        Widget::new(WidgetKind::ScrollPane(ScrollPaneWidget {
            content_size: Size::new(option.inner_width, option.inner_height),
            scroll_x,
            scroll_y,
            bounce: option.bounce_enable,
            background: res.texture_region(option, resource_path(&option.background_image_data)),
        }))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TextFieldParser;

impl WidgetParser for TextFieldParser {
    fn class_name(&self) -> &str {
        "TextField"
    }

    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget {
        let password_mask = option.password_enable.then(|| {
            if option.password_style_text.is_empty() {
                "*".to_owned()
            } else {
                option.password_style_text.clone()
            }
        });
        Widget::new(WidgetKind::TextField(TextFieldWidget {
            text: option.text.clone(),
            placeholder: option.place_holder.clone(),
            style: res.font_style(option),
            background: res.texture_region(option, resource_path(&option.background_image_data)),
            cursor: res.texture_region(option, resource_path(&option.cursor_image_data)),
            editable: option.touch_able,
            max_length: option.max_length_enable.then_some(option.max_length),
            password_mask,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/builders.rs"]
mod tests;
