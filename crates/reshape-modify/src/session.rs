//! Modify session
//!
//! Per-drag state turning anchor moves into a uniform scale plus rotation of
//! the whole geometry about the pivot. Every frame is derived from the frozen
//! original snapshot, never from the previous frame, so rounding error cannot
//! accumulate across a long drag.

use glam::DVec2;
use reshape_geom::Geometry;

use crate::{ModifyResult, PivotInfo, analyze};

/// State of one interactive modify drag
///
/// Created at drag start, updated on every anchor move, consumed by
/// [`ModifySession::end`] or [`ModifySession::cancel`]. The caller owns the
/// session exclusively for the lifetime of the drag.
#[derive(Debug, Clone)]
pub struct ModifySession {
    /// Snapshot of the geometry at drag start
    original: Geometry,
    /// Pivot computed once from the snapshot
    pivot: PivotInfo,
    /// Where the user grabbed the anchor, fixed by the first move event
    anchor_start: Option<DVec2>,
    /// Geometry derived from the snapshot for the latest move event
    current: Geometry,
}

impl ModifySession {
    /// Start a session: snapshot the geometry and analyze its pivot
    pub fn begin(geometry: &Geometry) -> ModifyResult<Self> {
        let pivot = analyze(geometry)?;
        tracing::debug!(
            kind = geometry.type_name(),
            center = ?pivot.center,
            min_radius = pivot.min_radius,
            "begin modify session"
        );
        Ok(Self {
            original: geometry.clone(),
            pivot,
            anchor_start: None,
            current: geometry.clone(),
        })
    }

    /// Handle one anchor move event
    ///
    /// The first call of a session only records the grabbed position; the
    /// shape is untouched. Later calls recompute the similarity transform
    /// mapping the recorded position to `position` and apply it to the
    /// original snapshot. Two freeze policies apply:
    /// - anchor grabbed inside the deadband: angle and scale are
    ///   ill-conditioned there, so the shape stays equal to the original for
    ///   the whole session;
    /// - anchor dragged exactly onto the pivot: the angle is undefined, so
    ///   this event keeps the previously computed shape.
    pub fn on_anchor_moved(&mut self, position: DVec2) {
        let Some(anchor_start) = self.anchor_start else {
            self.anchor_start = Some(position);
            return;
        };

        let initial = anchor_start - self.pivot.center;
        let initial_radius = initial.length();
        if initial_radius <= self.pivot.min_radius {
            tracing::warn!(
                initial_radius,
                min_radius = self.pivot.min_radius,
                "anchor inside deadband, shape frozen"
            );
            self.current = self.original.clone();
            return;
        }

        let offset = position - self.pivot.center;
        let current_radius = offset.length();
        if current_radius == 0.0 {
            // anchor sits exactly on the pivot, angle undefined
            return;
        }

        let scale = current_radius / initial_radius;
        let rotation = offset.to_angle() - initial.to_angle();
        let mut next = self.original.clone();
        next.scale_about(scale, self.pivot.center);
        next.rotate_about(rotation, self.pivot.center);
        self.current = next;
    }

    /// Commit the drag, yielding the final geometry
    pub fn end(self) -> Geometry {
        tracing::debug!(kind = self.current.type_name(), "commit modify session");
        self.current
    }

    /// Abort the drag, yielding the untouched original geometry
    pub fn cancel(self) -> Geometry {
        tracing::debug!("cancel modify session");
        self.original
    }

    /// Pivot the session transforms about
    pub fn pivot(&self) -> &PivotInfo {
        &self.pivot
    }

    /// Geometry snapshot taken at drag start
    pub fn original(&self) -> &Geometry {
        &self.original
    }

    /// Geometry for the latest move event, for live rendering
    pub fn current(&self) -> &Geometry {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Geometry {
        Geometry::polygon(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 2.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(0.0, 0.0),
        ])
        .unwrap()
    }

    fn assert_ring_eq(geometry: &Geometry, expected: &[DVec2]) {
        let ring = geometry.ring_coordinates().unwrap();
        assert_eq!(ring.len(), expected.len());
        for (point, expected) in ring.iter().zip(expected) {
            assert_relative_eq!(point.x, expected.x, epsilon = 1e-9);
            assert_relative_eq!(point.y, expected.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_first_move_only_fixes_anchor() {
        let geometry = square();
        let mut session = ModifySession::begin(&geometry).unwrap();
        session.on_anchor_moved(DVec2::new(2.0, 2.0));
        assert_eq!(session.current(), &geometry);
    }

    #[test]
    fn test_radial_drag_scales_about_center() {
        // corner (2,2) sits sqrt(2) from the center (1,1); dragging it to
        // (3,3) doubles the distance on the same angle
        let mut session = ModifySession::begin(&square()).unwrap();
        session.on_anchor_moved(DVec2::new(2.0, 2.0));
        session.on_anchor_moved(DVec2::new(3.0, 3.0));
        assert_ring_eq(
            session.current(),
            &[
                DVec2::new(-1.0, -1.0),
                DVec2::new(-1.0, 3.0),
                DVec2::new(3.0, 3.0),
                DVec2::new(3.0, -1.0),
            ],
        );

        // (4,4) sits 3*sqrt(2) out, so the ratio triples the original
        session.on_anchor_moved(DVec2::new(4.0, 4.0));
        assert_ring_eq(
            session.current(),
            &[
                DVec2::new(-2.0, -2.0),
                DVec2::new(-2.0, 4.0),
                DVec2::new(4.0, 4.0),
                DVec2::new(4.0, -2.0),
            ],
        );
    }

    #[test]
    fn test_tangential_drag_rotates_about_center() {
        // (2,2) -> (0,2) keeps the radius and adds a quarter turn
        let mut session = ModifySession::begin(&square()).unwrap();
        session.on_anchor_moved(DVec2::new(2.0, 2.0));
        session.on_anchor_moved(DVec2::new(0.0, 2.0));
        assert_ring_eq(
            session.current(),
            &[
                DVec2::new(2.0, 0.0),
                DVec2::new(0.0, 0.0),
                DVec2::new(0.0, 2.0),
                DVec2::new(2.0, 2.0),
            ],
        );
    }

    #[test]
    fn test_returning_anchor_restores_original() {
        let geometry = square();
        let mut session = ModifySession::begin(&geometry).unwrap();
        session.on_anchor_moved(DVec2::new(2.0, 2.0));
        session.on_anchor_moved(DVec2::new(4.0, -1.0));
        session.on_anchor_moved(DVec2::new(2.0, 2.0));
        assert_ring_eq(
            session.current(),
            &geometry.ring_coordinates().unwrap().to_vec(),
        );
    }

    #[test]
    fn test_drag_onto_pivot_keeps_previous_shape() {
        let mut session = ModifySession::begin(&square()).unwrap();
        session.on_anchor_moved(DVec2::new(2.0, 2.0));
        session.on_anchor_moved(DVec2::new(4.0, 4.0));
        let scaled = session.current().clone();
        // exactly on the pivot: no NaN, no change for this event
        session.on_anchor_moved(DVec2::new(1.0, 1.0));
        assert_eq!(session.current(), &scaled);
        assert!(session.current().is_finite());
    }

    #[test]
    fn test_deadband_freeze_is_idempotent() {
        // min_radius is sqrt(2)/3, so a grab at (1.2, 1.2) is inside the
        // deadband and the session never transforms
        let geometry = square();
        let mut session = ModifySession::begin(&geometry).unwrap();
        session.on_anchor_moved(DVec2::new(1.2, 1.2));
        for position in [
            DVec2::new(5.0, 5.0),
            DVec2::new(-3.0, 1.0),
            DVec2::new(100.0, 0.0),
        ] {
            session.on_anchor_moved(position);
            assert_eq!(session.current(), &geometry);
        }
    }

    #[test]
    fn test_collapsed_geometry_never_transforms() {
        let point = DVec2::new(3.0, 3.0);
        let collapsed = Geometry::polygon(vec![point, point, point]).unwrap();
        let mut session = ModifySession::begin(&collapsed).unwrap();
        session.on_anchor_moved(point);
        session.on_anchor_moved(DVec2::new(10.0, 10.0));
        assert_eq!(session.current(), &collapsed);
    }

    #[test]
    fn test_end_commits_and_cancel_restores() {
        let geometry = square();
        let mut session = ModifySession::begin(&geometry).unwrap();
        session.on_anchor_moved(DVec2::new(2.0, 2.0));
        session.on_anchor_moved(DVec2::new(4.0, 4.0));
        let committed = session.end();
        assert_ne!(committed, geometry);

        let mut session = ModifySession::begin(&geometry).unwrap();
        session.on_anchor_moved(DVec2::new(2.0, 2.0));
        session.on_anchor_moved(DVec2::new(4.0, 4.0));
        assert_eq!(session.cancel(), geometry);
    }

    #[test]
    fn test_line_session_scales_both_endpoints() {
        let line =
            Geometry::line_string(vec![DVec2::new(0.0, 0.0), DVec2::new(4.0, 0.0)]).unwrap();
        let mut session = ModifySession::begin(&line).unwrap();
        // grab the right endpoint, 2 units from the center (2,0)
        session.on_anchor_moved(DVec2::new(4.0, 0.0));
        session.on_anchor_moved(DVec2::new(6.0, 0.0));
        let coordinates = session.current().linear_coordinates().unwrap();
        assert_relative_eq!(coordinates[0].x, -2.0, epsilon = 1e-9);
        assert_relative_eq!(coordinates[1].x, 6.0, epsilon = 1e-9);
    }
}
