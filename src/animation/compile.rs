use std::collections::{BTreeMap, HashMap};
use std::num::ParseFloatError;

use crate::animation::ease::Ease;
use crate::animation::timeline::{Pose, Timeline, TimelineStep};
use crate::foundation::core::{Color, Point, Vec2};
use crate::foundation::diag::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::scene::graph::WidgetId;
use crate::scene::model::{ActionFrameDef, AnimationDef};

/// Compiled animations: action name to per-widget timeline.
pub type ActionMap = HashMap<String, BTreeMap<WidgetId, Timeline>>;

/// Parse a frame start time, keeping only the text before the first exponent marker.
///
/// `"7.163279E-39"` yields `7.163279`. Exports carry such values where a plain decimal was
/// intended, so the exponent is dropped rather than applied.
pub fn parse_start_time(raw: &str) -> Result<f32, ParseFloatError> {
    let mantissa = raw.find(['E', 'e']).map_or(raw, |at| &raw[..at]);
    mantissa.trim().parse::<f32>()
}

/// Compile every action into per-widget timelines.
///
/// Nodes are bound through `by_tag`; unbound nodes are skipped. A later action with the same
/// name replaces the earlier one. Frames are kept in document order.
#[tracing::instrument(skip_all, fields(actions = def.actionlist.len()))]
pub fn compile_actions(
    def: &AnimationDef,
    by_tag: &HashMap<i32, WidgetId>,
    sink: &mut dyn DiagnosticSink,
) -> ActionMap {
    let mut out = ActionMap::new();
    for action in &def.actionlist {
        let mut timelines = BTreeMap::new();
        for node in &action.actionnodelist {
            let Some(&target) = by_tag.get(&node.action_tag) else {
                sink.emit(Diagnostic::debug(
                    DiagnosticKind::UnboundAnimationTarget,
                    None,
                    format!(
                        "action '{}': no widget with tag {}",
                        action.name, node.action_tag
                    ),
                ));
                continue;
            };

            let mut timeline = Timeline::new();
            let mut last_frame: Option<i32> = None;
            for frame in &node.actionframelist {
                if let Some(prev) = last_frame
                    && frame.frameid < prev
                {
                    sink.emit(Diagnostic::debug(
                        DiagnosticKind::OutOfOrderFrames,
                        None,
                        format!(
                            "action '{}', tag {}: frame {} follows frame {prev}",
                            action.name, node.action_tag, frame.frameid
                        ),
                    ));
                }
                last_frame = Some(frame.frameid);
                timeline.push(frame_step(frame, &action.name, sink));
            }
            timelines.insert(target, timeline);
        }
        if out.insert(action.name.clone(), timelines).is_some() {
            tracing::debug!(action = %action.name, "duplicate action name replaces earlier one");
        }
    }
    out
}

fn frame_step(frame: &ActionFrameDef, action: &str, sink: &mut dyn DiagnosticSink) -> TimelineStep {
    let duration = match parse_start_time(&frame.starttime) {
        Ok(secs) => f64::from(secs),
        Err(e) => {
            sink.emit(Diagnostic::error(
                DiagnosticKind::MalformedReference,
                None,
                format!(
                    "action '{action}', frame {}: bad start time '{}': {e}",
                    frame.frameid, frame.starttime
                ),
            ));
            0.0
        }
    };

    TimelineStep {
        duration,
        ease: Ease::from_tween_type(frame.tween_type),
        target: Pose {
            position: Point::new(frame.positionx, frame.positiony),
            scale: Vec2::new(frame.scalex, frame.scaley),
            color: Color::from_rgba8(frame.colorr, frame.colorg, frame.colorb, frame.opacity),
            rotation_deg: frame.rotation,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/compile.rs"]
mod tests;
