use super::*;
use crate::foundation::diag::{CollectingSink, Severity};
use crate::scene::graph::Widget;
use crate::scene::model::OptionDef;
use crate::scene::widget::{ImageWidget, WidgetKind};

const PANEL_WITH_LABEL: &str = r#"{
    "widgetTree": {
        "classname": "Panel",
        "options": { "classname": "Panel", "name": "root", "width": 320, "height": 240 },
        "children": [
            {
                "classname": "Label",
                "options": { "classname": "Label", "name": "title", "text": "Hi", "actiontag": 9 },
                "children": []
            }
        ]
    }
}"#;

fn editor(json: &str) -> UiEditor {
    UiEditor::new(UiExport::from_str(json).unwrap(), EditorOpts::default())
}

#[test]
fn default_opts() {
    let opts = EditorOpts::default();
    assert_eq!(opts.base_dir, PathBuf::from("."));
    assert!(opts.atlas.is_none());
    assert!(opts.ttf_fonts.is_none());
    assert!(opts.bitmap_fonts.is_none());
}

#[test]
fn builds_scene_with_collecting_sink() {
    let ed = editor(PANEL_WITH_LABEL);
    let mut sink = CollectingSink::new();
    let mut r = ParleyRasterizer::new();
    let scene = ed.create_group_with(&mut sink, &mut r);

    let root = scene.root_group().unwrap();
    assert_eq!(scene.graph()[root].children().len(), 1);
    assert_eq!(scene.find_actor("title"), Some(scene.graph()[root].children()[0]));
    assert!(scene.action_names().is_empty());
    assert!(!sink.has_errors());
}

#[test]
fn create_group_uses_tracing_sink() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let scene = editor(PANEL_WITH_LABEL).create_group();
    assert_eq!(scene.graph().len(), 2);
}

#[test]
fn non_container_root_is_reported() {
    let json = r#"{ "widgetTree": { "options": { "classname": "ImageView", "name": "pic" } } }"#;
    let mut sink = CollectingSink::new();
    let scene = editor(json).create_group_with(&mut sink, &mut ParleyRasterizer::new());

    assert!(scene.root().is_some());
    assert!(scene.root_group().is_none());
    let d: Vec<_> = sink.of_kind(DiagnosticKind::RootNotContainer).collect();
    assert_eq!(d.len(), 1);
    assert_eq!(d[0].severity, Severity::Error);
}

struct Sprite;

impl WidgetParser for Sprite {
    fn class_name(&self) -> &str {
        "Sprite"
    }

    fn parse(&self, _res: &mut Resolver<'_>, _option: &OptionDef) -> Widget {
        Widget::new(WidgetKind::Image(ImageWidget::default()))
    }
}

#[test]
fn added_parser_extends_vocabulary() {
    let json = r#"{ "widgetTree": { "options": { "classname": "Panel", "name": "root" },
        "children": [ { "options": { "classname": "Sprite", "name": "hero" } } ] } }"#;
    let mut ed = editor(json);
    let mut sink = CollectingSink::new();
    let before = ed.create_group_with(&mut sink, &mut ParleyRasterizer::new());
    assert!(before.find_actor("hero").is_none());

    ed.add_parser(Sprite);
    let after = ed.create_group_with(&mut sink, &mut ParleyRasterizer::new());
    assert!(after.find_actor("hero").is_some());
    assert!(ed.registry().lookup("Sprite").is_some());
}

#[test]
fn from_path_resolves_base_dir_next_to_export() {
    let dir = std::env::temp_dir().join(format!("cocoui_editor_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ui.json");
    std::fs::write(&path, PANEL_WITH_LABEL).unwrap();

    let ed = UiEditor::from_path(&path, EditorOpts::default()).unwrap();
    assert_eq!(ed.opts().base_dir, dir.join("."));
    assert_eq!(ed.export().def().widget_tree.options.name, "root");

    assert!(UiEditor::from_path(dir.join("missing.json"), EditorOpts::default()).is_err());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn editor_over_in_memory_definition() {
    use crate::scene::model::{ExportDef, WidgetNodeDef};

    let def = ExportDef {
        widget_tree: WidgetNodeDef {
            classname: "Panel".to_string(),
            options: OptionDef {
                name: "root".to_string(),
                ..OptionDef::default()
            },
            children: Vec::new(),
        },
        ..ExportDef::default()
    };
    let ed = UiEditor::new(UiExport::from_def(def), EditorOpts::default());
    assert_eq!(ed.export().def().widget_tree.class_name(), "Panel");
    assert_eq!(ed.registry().len(), 9);

    let mut sink = CollectingSink::new();
    let scene = ed.create_group_with(&mut sink, &mut ParleyRasterizer::new());
    assert_eq!(scene.find_actor("root"), scene.root_group());
    assert!(sink.diagnostics.is_empty());
}
