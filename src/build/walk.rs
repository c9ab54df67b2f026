use std::collections::HashMap;

use crate::assets::resolver::Resolver;
use crate::build::finish::finish_widget;
use crate::build::registry::ParserRegistry;
use crate::foundation::diag::{Diagnostic, DiagnosticKind};
use crate::scene::graph::{SceneGraph, WidgetId};
use crate::scene::model::WidgetNodeDef;

/// State accumulated by one build: the graph plus the name and tag indices.
#[derive(Debug, Default)]
pub struct BuildSession {
    pub graph: SceneGraph,
    /// Every widget registered under a name, in walk order.
    pub by_name: HashMap<String, Vec<WidgetId>>,
    /// Animation tag to widget; the last widget walked with a tag wins.
    pub by_tag: HashMap<i32, WidgetId>,
}

impl BuildSession {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build `node` and its subtree, attaching the result under `parent`.
///
/// Returns `None` when no parser is registered for the node's class; the subtree is then
/// skipped with a single diagnostic.
pub fn walk(
    session: &mut BuildSession,
    registry: &ParserRegistry,
    res: &mut Resolver<'_>,
    parent: Option<WidgetId>,
    node: &WidgetNodeDef,
) -> Option<WidgetId> {
    let option = &node.options;
    let class_name = node.class_name();
    let Some(parser) = registry.lookup(class_name) else {
        res.report(Diagnostic::debug(
            DiagnosticKind::UnsupportedWidgetType,
            Some(option.name.as_str()),
            format!("no parser for widget class '{class_name}'"),
        ));
        return None;
    };

    let mut widget = parser.parse(res, option);
    finish_widget(option, &mut widget);
    let is_container = widget.kind.is_container();

    let id = session.graph.insert(widget);
    if let Some(parent) = parent {
        session.graph.attach(parent, id);
    }
    session
        .by_name
        .entry(option.name.clone())
        .or_default()
        .push(id);
    session.by_tag.insert(option.action_tag, id);

    if is_container {
        for child in &node.children {
            walk(session, registry, res, Some(id), child);
        }
    } else if !node.children.is_empty() {
        res.report(Diagnostic::debug(
            DiagnosticKind::UnattachedChildren,
            Some(option.name.as_str()),
            format!(
                "'{class_name}' cannot hold children; dropped {}",
                node.children.len()
            ),
        ));
    }

    Some(id)
}

#[cfg(test)]
#[path = "../../tests/unit/build/walk.rs"]
mod tests;
