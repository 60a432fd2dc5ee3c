use indexmap::IndexMap;

use crate::core::types::lerp;
use crate::core::{
    LabelDescriptor, RectShape, SectorShape, SeriesKey, ShapeDescriptor, ShapeGeometry,
};

use super::RenderState;

/// Role of a series in one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    /// Only in the next render: grows from a zero-area shape.
    Enter,
    /// In both renders: interpolates component-wise.
    Update,
    /// Only in the previous render: collapses, then is dropped.
    Exit,
}

/// Interpolation of one series shape between two renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedShape {
    pub key: SeriesKey,
    pub phase: TransitionPhase,
    pub from: ShapeDescriptor,
    pub to: ShapeDescriptor,
}

impl AnimatedShape {
    /// Shape at progress `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn at(&self, t: f64) -> ShapeDescriptor {
        let t = t.clamp(0.0, 1.0);
        let geometry = match (self.from.geometry, self.to.geometry) {
            (ShapeGeometry::Rect(from), ShapeGeometry::Rect(to)) => {
                ShapeGeometry::Rect(from.lerp(to, t))
            }
            (ShapeGeometry::Sector(from), ShapeGeometry::Sector(to)) => {
                ShapeGeometry::Sector(from.lerp(to, t))
            }
            (from, to) => {
                if t < 1.0 {
                    from
                } else {
                    to
                }
            }
        };
        ShapeDescriptor::new(self.key, geometry, self.from.fill.lerp(self.to.fill, t))
    }
}

/// Interpolation of one series label between two renders.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedLabel {
    pub key: SeriesKey,
    pub phase: TransitionPhase,
    pub from: LabelDescriptor,
    pub to: LabelDescriptor,
}

impl AnimatedLabel {
    /// Label at progress `t`. Text switches immediately to the target text.
    #[must_use]
    pub fn at(&self, t: f64) -> LabelDescriptor {
        let t = t.clamp(0.0, 1.0);
        LabelDescriptor {
            key: self.key,
            text: self.to.text.clone(),
            anchor: self.from.anchor.lerp(self.to.anchor, t),
            scale: lerp(self.from.scale, self.to.scale, t),
            opacity: lerp(self.from.opacity, self.to.opacity, t),
            fill: self.from.fill.lerp(self.to.fill, t),
        }
    }
}

/// Zero-area start of an entering shape, placed where it will end.
///
/// Bars start with zero size at their final x. Sectors start with zero
/// sweep on their end boundary, so a series appended to a pie grows back
/// from the closing edge while its neighbours shrink toward it. A lone
/// sector starts at angle 0.
fn entering_geometry(to: ShapeGeometry, single_series: bool) -> ShapeGeometry {
    match to {
        ShapeGeometry::Rect(rect) => ShapeGeometry::Rect(RectShape::new(rect.x, 0.0, 0.0, 0.0)),
        ShapeGeometry::Sector(sector) => {
            let boundary = if single_series {
                0.0
            } else {
                sector.end_angle
            };
            ShapeGeometry::Sector(SectorShape::new(
                boundary,
                boundary,
                sector.inner_radius,
                sector.outer_radius,
            ))
        }
    }
}

fn entering(to: ShapeDescriptor, single_series: bool) -> AnimatedShape {
    AnimatedShape {
        key: to.key,
        phase: TransitionPhase::Enter,
        from: ShapeDescriptor::new(
            to.key,
            entering_geometry(to.geometry, single_series),
            to.fill,
        ),
        to,
    }
}

fn exiting(from: ShapeDescriptor) -> AnimatedShape {
    AnimatedShape {
        key: from.key,
        phase: TransitionPhase::Exit,
        from,
        to: ShapeDescriptor::new(from.key, from.geometry.collapsed(), from.fill),
    }
}

/// Matches shapes by series key and builds one interpolation per series.
///
/// Output follows `next` order, followed by exiting series in key order.
/// A key whose primitive kind changed exits and re-enters.
#[must_use]
pub fn transition_shapes(
    previous: &[ShapeDescriptor],
    next: &[ShapeDescriptor],
) -> Vec<AnimatedShape> {
    let mut remaining: IndexMap<SeriesKey, ShapeDescriptor> =
        previous.iter().map(|shape| (shape.key, *shape)).collect();
    let single_series = next.len() == 1;

    let mut animated = Vec::with_capacity(next.len() + previous.len());
    let mut replaced = Vec::new();
    for to in next {
        match remaining.shift_remove(&to.key) {
            Some(from) if from.geometry.same_kind(to.geometry) => animated.push(AnimatedShape {
                key: to.key,
                phase: TransitionPhase::Update,
                from,
                to: *to,
            }),
            Some(from) => {
                replaced.push(exiting(from));
                animated.push(entering(*to, single_series));
            }
            None => animated.push(entering(*to, single_series)),
        }
    }

    let mut exits: Vec<AnimatedShape> = remaining.into_values().map(exiting).collect();
    exits.extend(replaced);
    exits.sort_by_key(|shape| shape.key);
    animated.extend(exits);
    animated
}

/// Matches labels by series key. Entering labels fade in at their final
/// placement; exiting labels fade out in place.
#[must_use]
pub fn transition_labels(
    previous: &[LabelDescriptor],
    next: &[LabelDescriptor],
) -> Vec<AnimatedLabel> {
    let mut remaining: IndexMap<SeriesKey, &LabelDescriptor> =
        previous.iter().map(|label| (label.key, label)).collect();

    let mut animated: Vec<AnimatedLabel> = next
        .iter()
        .map(|to| match remaining.shift_remove(&to.key) {
            Some(from) => AnimatedLabel {
                key: to.key,
                phase: TransitionPhase::Update,
                from: from.clone(),
                to: to.clone(),
            },
            None => AnimatedLabel {
                key: to.key,
                phase: TransitionPhase::Enter,
                from: LabelDescriptor {
                    opacity: 0.0,
                    ..to.clone()
                },
                to: to.clone(),
            },
        })
        .collect();

    let mut exits: Vec<AnimatedLabel> = remaining
        .into_values()
        .map(|from| AnimatedLabel {
            key: from.key,
            phase: TransitionPhase::Exit,
            from: from.clone(),
            to: LabelDescriptor {
                opacity: 0.0,
                ..from.clone()
            },
        })
        .collect();
    exits.sort_by_key(|label| label.key);
    animated.extend(exits);
    animated
}

/// Full interpolation between two render states.
///
/// Origin and guide line snap to the target; opacity, shapes and labels
/// interpolate.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTransition {
    target: RenderState,
    from_opacity: f64,
    shapes: Vec<AnimatedShape>,
    labels: Vec<AnimatedLabel>,
}

impl ChartTransition {
    #[must_use]
    pub fn new(previous: &RenderState, next: RenderState) -> Self {
        Self {
            from_opacity: previous.opacity,
            shapes: transition_shapes(&previous.shapes, &next.shapes),
            labels: transition_labels(&previous.labels, &next.labels),
            target: next,
        }
    }

    #[must_use]
    pub fn shapes(&self) -> &[AnimatedShape] {
        &self.shapes
    }

    #[must_use]
    pub fn labels(&self) -> &[AnimatedLabel] {
        &self.labels
    }

    #[must_use]
    pub fn target(&self) -> &RenderState {
        &self.target
    }

    /// State at progress `t`. Exiting series are dropped once `t >= 1`.
    #[must_use]
    pub fn at(&self, t: f64) -> RenderState {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.target.clone();
        }
        RenderState {
            chart_type: self.target.chart_type,
            origin: self.target.origin,
            opacity: lerp(self.from_opacity, self.target.opacity, t),
            guide_line: self.target.guide_line,
            shapes: self.shapes.iter().map(|shape| shape.at(t)).collect(),
            labels: self.labels.iter().map(|label| label.at(t)).collect(),
        }
    }
}
