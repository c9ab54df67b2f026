use std::ops::Index;

use crate::animation::timeline::Pose;
use crate::foundation::core::{Color, Point, Size, Vec2};
use crate::scene::widget::WidgetKind;

/// Handle to a widget inside a [`SceneGraph`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct WidgetId(pub u32);

/// A built widget: common properties plus type-specific content.
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub name: String,
    pub kind: WidgetKind,
    /// Position in parent space, taken verbatim from the export.
    pub position: Point,
    pub size: Size,
    pub rotation_deg: f64,
    pub scale: Vec2,
    pub color: Color,
    pub visible: bool,
    /// Clip children to bounds; only meaningful for containers.
    pub clip: bool,
    pub z_order: i32,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
}

impl Widget {
    /// Bare widget with neutral common properties.
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            name: String::new(),
            kind,
            position: Point::ORIGIN,
            size: Size::ZERO,
            rotation_deg: 0.0,
            scale: Vec2::new(1.0, 1.0),
            color: Color::WHITE,
            visible: true,
            clip: false,
            z_order: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Containing widget, if attached.
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Children in draw order.
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// Current animatable state.
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            scale: self.scale,
            color: self.color,
            rotation_deg: self.rotation_deg,
        }
    }

    /// Overwrite the animatable state.
    pub fn set_pose(&mut self, pose: &Pose) {
        self.position = pose.position;
        self.scale = pose.scale;
        self.color = pose.color;
        self.rotation_deg = pose.rotation_deg;
    }
}

/// Arena owning every widget of one build.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    widgets: Vec<Widget>,
}

impl SceneGraph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached widget.
    pub fn insert(&mut self, widget: Widget) -> WidgetId {
        let id = WidgetId(self.widgets.len() as u32);
        self.widgets.push(widget);
        id
    }

    /// Attach `child` under `parent`, ordered by z-order (document order on ties).
    ///
    /// Returns `false`, leaving both untouched, when `parent` is not a container or either id is
    /// unknown.
    pub fn attach(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        if parent == child || self.get(child).is_none() {
            return false;
        }
        let z = self.widgets[child.0 as usize].z_order;
        let Some(p) = self.widgets.get(parent.0 as usize) else {
            return false;
        };
        if !p.kind.is_container() {
            return false;
        }
        let at = p
            .children
            .iter()
            .position(|c| self.widgets[c.0 as usize].z_order > z)
            .unwrap_or(p.children.len());

        self.widgets[parent.0 as usize].children.insert(at, child);
        self.widgets[child.0 as usize].parent = Some(parent);
        true
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Widgets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &Widget)> {
        self.widgets
            .iter()
            .enumerate()
            .map(|(i, w)| (WidgetId(i as u32), w))
    }

    /// Pre-order traversal from `root` with depths.
    pub fn depth_first(&self, root: WidgetId) -> Vec<(WidgetId, usize)> {
        let mut out = Vec::new();
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(w) = self.get(id) else {
                continue;
            };
            out.push((id, depth));
            for &c in w.children.iter().rev() {
                stack.push((c, depth + 1));
            }
        }
        out
    }
}

impl Index<WidgetId> for SceneGraph {
    type Output = Widget;

    fn index(&self, id: WidgetId) -> &Widget {
        &self.widgets[id.0 as usize]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
