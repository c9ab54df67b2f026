use std::collections::{BTreeMap, HashMap};

use crate::animation::compile::ActionMap;
use crate::animation::timeline::{Pose, Timeline};
use crate::build::walk::BuildSession;
use crate::scene::graph::{SceneGraph, Widget, WidgetId};

/// Result of one build: the widget graph, its indices and the compiled animations.
#[derive(Clone, Debug)]
pub struct Scene {
    graph: SceneGraph,
    root: Option<WidgetId>,
    by_name: HashMap<String, Vec<WidgetId>>,
    by_tag: HashMap<i32, WidgetId>,
    actions: ActionMap,
    rest: HashMap<WidgetId, Pose>,
}

impl Scene {
    pub(crate) fn new(session: BuildSession, root: Option<WidgetId>, actions: ActionMap) -> Self {
        let BuildSession {
            graph,
            by_name,
            by_tag,
        } = session;
        let rest = actions
            .values()
            .flat_map(|timelines| timelines.keys())
            .filter_map(|&id| graph.get(id).map(|w| (id, w.pose())))
            .collect();
        Self {
            graph,
            root,
            by_name,
            by_tag,
            actions,
            rest,
        }
    }

    /// Root widget, whatever its kind. `None` when the root class is unsupported.
    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    /// Root widget if it is a container.
    pub fn root_group(&self) -> Option<WidgetId> {
        self.root
            .filter(|&id| self.graph.get(id).is_some_and(|w| w.kind.is_container()))
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.graph.get(id)
    }

    /// First widget built under `name`.
    pub fn find_actor(&self, name: &str) -> Option<WidgetId> {
        self.find_actors(name)?.first().copied()
    }

    /// Every widget built under `name`, in build order.
    pub fn find_actors(&self, name: &str) -> Option<&[WidgetId]> {
        self.by_name.get(name).map(Vec::as_slice)
    }

    /// Widget bound to an animation tag.
    pub fn find_by_tag(&self, tag: i32) -> Option<WidgetId> {
        self.by_tag.get(&tag).copied()
    }

    /// Per-widget timelines of the named action.
    pub fn get_action(&self, name: &str) -> Option<&BTreeMap<WidgetId, Timeline>> {
        self.actions.get(name)
    }

    /// Action names, sorted.
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Length of the longest timeline of the named action.
    pub fn action_duration(&self, name: &str) -> Option<f64> {
        let timelines = self.get_action(name)?;
        Some(
            timelines
                .values()
                .map(Timeline::duration)
                .fold(0.0, f64::max),
        )
    }

    /// Pose every widget animated by `name` at `time` seconds, starting from its rest pose.
    ///
    /// Returns `false` when no such action exists.
    pub fn apply_action(&mut self, name: &str, time: f64) -> bool {
        let Some(timelines) = self.actions.get(name) else {
            return false;
        };
        for (&id, timeline) in timelines {
            let Some(rest) = self.rest.get(&id) else {
                continue;
            };
            let pose = timeline.sample(rest, time);
            if let Some(w) = self.graph.get_mut(id) {
                w.set_pose(&pose);
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scene.rs"]
mod tests;
