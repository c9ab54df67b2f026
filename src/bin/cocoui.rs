use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use cocoui::{
    CollectingSink, Diagnostic, EditorOpts, FontSource, ParleyRasterizer, Scene, TextureAtlas,
    UiEditor, WidgetId,
};

#[derive(Parser, Debug)]
#[command(name = "cocoui", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build an export and print its widget tree, actions and diagnostics.
    Inspect(InspectArgs),
    /// Build an export and fail if any error diagnostic was produced.
    Check(BuildArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input UI export JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Packed texture atlas (libGDX pack format).
    #[arg(long)]
    atlas: Option<PathBuf>,

    /// Vector font as NAME=PATH. May be repeated.
    #[arg(long = "ttf", value_parser = parse_font_arg)]
    ttf: Vec<(String, PathBuf)>,

    /// Directory for loose textures and bitmap fonts, relative to the export.
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    build: BuildArgs,

    /// Print a JSON summary instead of an indented tree.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn parse_font_arg(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATH, got '{s}'"))?;
    if name.is_empty() {
        return Err(format!("empty font name in '{s}'"));
    }
    Ok((name.to_owned(), PathBuf::from(path)))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn build(args: &BuildArgs) -> anyhow::Result<(Scene, Vec<Diagnostic>)> {
    let atlas = match &args.atlas {
        Some(path) => Some(Arc::new(
            TextureAtlas::from_path(path)
                .with_context(|| format!("load atlas '{}'", path.display()))?,
        )),
        None => None,
    };

    let ttf_fonts = if args.ttf.is_empty() {
        None
    } else {
        let mut fonts = HashMap::new();
        for (name, path) in &args.ttf {
            let source = FontSource::from_path(name.clone(), path)
                .with_context(|| format!("load font '{}'", path.display()))?;
            fonts.insert(name.clone(), source);
        }
        Some(fonts)
    };

    let opts = EditorOpts {
        base_dir: args.base_dir.clone(),
        atlas,
        ttf_fonts,
        bitmap_fonts: None,
    };
    let editor = UiEditor::from_path(&args.in_path, opts)
        .with_context(|| format!("open export '{}'", args.in_path.display()))?;

    let mut sink = CollectingSink::new();
    let mut rasterizer = ParleyRasterizer::new();
    let scene = editor.create_group_with(&mut sink, &mut rasterizer);
    Ok((scene, sink.diagnostics))
}

#[derive(serde::Serialize)]
struct NodeSummary {
    name: String,
    kind: &'static str,
    position: [f64; 2],
    size: [f64; 2],
    visible: bool,
    children: Vec<NodeSummary>,
}

#[derive(serde::Serialize)]
struct ActionSummary {
    name: String,
    targets: Vec<String>,
    duration: f64,
}

#[derive(serde::Serialize)]
struct SceneSummary {
    root: Option<NodeSummary>,
    actions: Vec<ActionSummary>,
    diagnostics: Vec<Diagnostic>,
}

fn summarize(scene: &Scene, id: WidgetId) -> Option<NodeSummary> {
    let w = scene.widget(id)?;
    Some(NodeSummary {
        name: w.name.clone(),
        kind: w.kind.type_name(),
        position: [w.position.x, w.position.y],
        size: [w.size.width, w.size.height],
        visible: w.visible,
        children: w
            .children()
            .iter()
            .filter_map(|&c| summarize(scene, c))
            .collect(),
    })
}

fn actions(scene: &Scene) -> Vec<ActionSummary> {
    scene
        .action_names()
        .into_iter()
        .map(|name| {
            let targets = scene
                .get_action(name)
                .map(|timelines| {
                    timelines
                        .keys()
                        .filter_map(|&id| scene.widget(id))
                        .map(|w| w.name.clone())
                        .collect()
                })
                .unwrap_or_default();
            ActionSummary {
                name: name.to_owned(),
                targets,
                duration: scene.action_duration(name).unwrap_or(0.0),
            }
        })
        .collect()
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let (scene, diagnostics) = build(&args.build)?;

    if args.json {
        let summary = SceneSummary {
            root: scene.root().and_then(|id| summarize(&scene, id)),
            actions: actions(&scene),
            diagnostics,
        };
        let out = serde_json::to_string_pretty(&summary).context("serialize summary")?;
        println!("{out}");
        return Ok(());
    }

    match scene.root() {
        Some(root) => {
            for (id, depth) in scene.graph().depth_first(root) {
                let w = &scene.graph()[id];
                println!(
                    "{:indent$}{} '{}' at ({}, {}) size {}x{}{}",
                    "",
                    w.kind.type_name(),
                    w.name,
                    w.position.x,
                    w.position.y,
                    w.size.width,
                    w.size.height,
                    if w.visible { "" } else { " hidden" },
                    indent = depth * 2,
                );
            }
        }
        None => println!("(no root widget)"),
    }
    for action in actions(&scene) {
        println!(
            "action '{}' {:.3}s -> {}",
            action.name,
            action.duration,
            action.targets.join(", ")
        );
    }
    for d in &diagnostics {
        eprintln!("{d}");
    }
    Ok(())
}

fn cmd_check(args: BuildArgs) -> anyhow::Result<()> {
    let (scene, diagnostics) = build(&args)?;
    for d in &diagnostics {
        eprintln!("{d}");
    }
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == cocoui::Severity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("{errors} error diagnostic(s)");
    }
    println!(
        "ok: {} widgets, {} actions",
        scene.graph().len(),
        scene.action_names().len()
    );
    Ok(())
}
