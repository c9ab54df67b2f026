use std::collections::HashMap;
use std::path::PathBuf;

use super::*;
use crate::assets::atlas::TextureAtlas;
use crate::assets::font::{FontFace, FontSource, GeneratedFont, GlyphRasterizer};
use crate::assets::region::{Texture, TextureRegion};
use crate::foundation::diag::{CollectingSink, DiagnosticKind};
use crate::foundation::error::UiResult;
use crate::scene::model::ResourceDef;
use crate::session::editor::EditorOpts;

struct EchoRasterizer;

impl GlyphRasterizer for EchoRasterizer {
    fn generate(
        &mut self,
        source: &FontSource,
        size_px: f32,
        glyphs: &str,
    ) -> UiResult<GeneratedFont> {
        Ok(GeneratedFont {
            family: source.name.clone(),
            size_px,
            glyphs: glyphs.to_string(),
            line_height: size_px,
        })
    }
}

fn opts() -> EditorOpts {
    let page = Arc::new(Texture {
        path: PathBuf::from("ui.png"),
        width: 128,
        height: 128,
    });
    let mut atlas = TextureAtlas::new();
    for (i, name) in ["bg", "up", "down", "box", "tick", "fill", "cursor"]
        .into_iter()
        .enumerate()
    {
        atlas.add_region(
            name,
            None,
            TextureRegion {
                texture: Arc::clone(&page),
                x: i as u32 * 16,
                y: 0,
                width: 16,
                height: 8,
                flip_x: false,
                flip_y: false,
            },
        );
    }
    let mut fonts = HashMap::new();
    fonts.insert("Body".to_string(), FontSource::new("Body", vec![0]));
    EditorOpts {
        atlas: Some(Arc::new(atlas)),
        ttf_fonts: Some(fonts),
        ..EditorOpts::default()
    }
}

fn res_path(name: &str) -> Option<ResourceDef> {
    Some(ResourceDef {
        path: format!("ui/{name}.png"),
    })
}

fn build(parser: &dyn WidgetParser, option: &OptionDef) -> (Widget, CollectingSink) {
    let opts = opts();
    let mut r = EchoRasterizer;
    let mut sink = CollectingSink::new();
    let w = {
        let mut res = Resolver::new(&opts, &mut r, &mut sink);
        parser.parse(&mut res, option)
    };
    (w, sink)
}

#[test]
fn panel_centers_background() {
    let option = OptionDef {
        width: 100.0,
        height: 40.0,
        clip_able: true,
        background_image_data: res_path("bg"),
        ..OptionDef::default()
    };
    let (w, sink) = build(&PanelParser, &option);
    let WidgetKind::Group(group) = &w.kind else {
        panic!("expected group");
    };
    let bg = group.background.as_ref().unwrap();
    assert_eq!(bg.offset, Point::new(42.0, 16.0));
    assert!(bg.region.is_shared());
    assert!(sink.diagnostics.is_empty());
}

#[test]
fn panel_without_background() {
    let (w, _) = build(&PanelParser, &OptionDef::default());
    assert_eq!(w.kind, WidgetKind::Group(GroupWidget::default()));
}

#[test]
fn button_states_label_and_scale() {
    let option = OptionDef {
        normal_data: res_path("up"),
        pressed_data: res_path("down"),
        disabled_data: res_path("gone"),
        text: "Play".to_string(),
        font_name: "Body".to_string(),
        scale_x: 2.0,
        scale_y: 0.5,
        ..OptionDef::default()
    };
    let (w, sink) = build(&ButtonParser, &option);
    let WidgetKind::Button(button) = &w.kind else {
        panic!("expected button");
    };
    assert_eq!(button.up.as_ref().unwrap().x, 16);
    assert_eq!(button.down.as_ref().unwrap().x, 32);
    assert!(button.disabled.is_none());
    let label = button.label.as_ref().unwrap();
    assert_eq!(label.text, "Play");
    assert!(matches!(
        label.style.as_ref().unwrap().face,
        FontFace::Generated(_)
    ));
    assert_eq!(w.scale, Vec2::new(2.0, 0.5));
    assert_eq!(sink.of_kind(DiagnosticKind::MissingResource).count(), 1);
}

#[test]
fn button_without_text_has_no_label() {
    let (w, _) = build(&ButtonParser, &OptionDef::default());
    let WidgetKind::Button(button) = &w.kind else {
        panic!("expected button");
    };
    assert!(button.label.is_none());
}

#[test]
fn checkbox_regions_and_state() {
    let option = OptionDef {
        background_box_data: res_path("box"),
        front_cross_data: res_path("tick"),
        selected_state: true,
        ..OptionDef::default()
    };
    let (w, _) = build(&CheckBoxParser, &option);
    let WidgetKind::CheckBox(cb) = &w.kind else {
        panic!("expected check box");
    };
    assert!(cb.checked);
    assert_eq!(cb.background.as_ref().unwrap().x, 48);
    assert_eq!(cb.cross.as_ref().unwrap().x, 64);
    assert!(cb.background_selected.is_none());
    assert!(cb.cross_disabled.is_none());
}

#[test]
fn image_view_flipped_and_scaled() {
    let option = OptionDef {
        file_name_data: res_path("bg"),
        flip_y: true,
        scale_x: 3.0,
        ..OptionDef::default()
    };
    let (w, _) = build(&ImageViewParser, &option);
    let WidgetKind::Image(img) = &w.kind else {
        panic!("expected image");
    };
    let region = img.region.as_ref().unwrap();
    assert!(!region.is_shared());
    assert!(region.flip_y);
    assert_eq!(w.scale, Vec2::new(3.0, 1.0));
}

#[test]
fn label_alignment_and_default_face() {
    let option = OptionDef {
        text: "Score".to_string(),
        font_name: "Missing".to_string(),
        h_alignment: 1,
        v_alignment: 2,
        ..OptionDef::default()
    };
    let (w, _) = build(&LabelParser, &option);
    let WidgetKind::Label(label) = &w.kind else {
        panic!("expected label");
    };
    assert_eq!(label.text, "Score");
    assert_eq!(label.h_align, Align::Center);
    assert_eq!(label.v_align, Align::End);
    assert_eq!(label.style.as_ref().unwrap().face, FontFace::Default);
    assert_eq!(w.scale, Vec2::new(1.0, 1.0));
}

#[test]
fn bitmap_label_missing_font_falls_back() {
    let option = OptionDef {
        text: "123".to_string(),
        file_name_data: Some(ResourceDef {
            path: "fonts/none.fnt".to_string(),
        }),
        ..OptionDef::default()
    };
    let (w, sink) = build(&BitmapLabelParser, &option);
    let WidgetKind::BitmapLabel(label) = &w.kind else {
        panic!("expected bitmap label");
    };
    assert_eq!(label.face, FontFace::Default);
    assert_eq!(sink.of_kind(DiagnosticKind::MissingResource).count(), 1);
}

#[test]
fn loading_bar_clamps_and_direction() {
    let option = OptionDef {
        texture_data: res_path("fill"),
        percent: 140.0,
        direction: 1,
        ..OptionDef::default()
    };
    let (w, _) = build(&LoadingBarParser, &option);
    let WidgetKind::LoadingBar(bar) = &w.kind else {
        panic!("expected loading bar");
    };
    assert_eq!(bar.percent, 100.0);
    assert_eq!(bar.direction, FillDirection::RightToLeft);
    assert!(bar.fill.is_some());
    assert!(bar.background.is_none());

    let (w, _) = build(
        &LoadingBarParser,
        &OptionDef {
            percent: -3.0,
            ..OptionDef::default()
        },
    );
    let WidgetKind::LoadingBar(bar) = &w.kind else {
        panic!("expected loading bar");
    };
    assert_eq!(bar.percent, 0.0);
    assert_eq!(bar.direction, FillDirection::LeftToRight);
}

#[test]
fn scroll_view_direction_flags() {
    let cases = [(0, false, false), (1, false, true), (2, true, false), (3, true, true)];
    for (direction, x, y) in cases {
        let option = OptionDef {
            direction,
            inner_width: 300.0,
            inner_height: 900.0,
            bounce_enable: true,
            ..OptionDef::default()
        };
        let (w, _) = build(&ScrollViewParser, &option);
        let WidgetKind::ScrollPane(pane) = &w.kind else {
            panic!("expected scroll pane");
        };
        assert_eq!((pane.scroll_x, pane.scroll_y), (x, y), "direction {direction}");
        assert_eq!(pane.content_size, Size::new(300.0, 900.0));
        assert!(pane.bounce);
    }
}

#[test]
fn text_field_options() {
    let option = OptionDef {
        text: "bob".to_string(),
        place_holder: "name".to_string(),
        font_name: "Body".to_string(),
        cursor_image_data: res_path("cursor"),
        touch_able: true,
        max_length_enable: true,
        max_length: 12,
        password_enable: true,
        ..OptionDef::default()
    };
    let (w, _) = build(&TextFieldParser, &option);
    let WidgetKind::TextField(field) = &w.kind else {
        panic!("expected text field");
    };
    assert_eq!(field.placeholder, "name");
    assert!(field.editable);
    assert_eq!(field.max_length, Some(12));
    assert_eq!(field.password_mask.as_deref(), Some("*"));
    assert!(field.cursor.is_some());
    assert!(field.background.is_none());

    let (w, _) = build(
        &TextFieldParser,
        &OptionDef {
            max_length: 12,
            ..OptionDef::default()
        },
    );
    let WidgetKind::TextField(field) = &w.kind else {
        panic!("expected text field");
    };
    assert_eq!(field.max_length, None);
    assert_eq!(field.password_mask, None);
    assert!(!field.editable);
}

#[test]
fn every_default_parser_is_distinct() {
    let parsers = default_parsers();
    let mut names: Vec<&str> = parsers.iter().map(|p| p.class_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 9);
}
