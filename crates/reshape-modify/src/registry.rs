//! Session registry
//!
//! Keeps modify sessions in a side map keyed by the id of the feature being
//! edited, so transient drag state never lives on the feature itself.

use std::collections::HashMap;

use glam::DVec2;
use reshape_geom::Geometry;
use uuid::Uuid;

use crate::{ModifyError, ModifyResult, ModifySession};

/// Modify sessions keyed by feature id
///
/// One entry per feature currently being dragged. Hosts editing several
/// features in one gesture (multi-feature modify) hold one session per
/// feature here and route each anchor event to its feature's entry.
#[derive(Debug, Clone, Default)]
pub struct SessionMap {
    sessions: HashMap<Uuid, ModifySession>,
}

impl SessionMap {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for a feature, replacing any previous one
    pub fn begin(&mut self, feature: Uuid, geometry: &Geometry) -> ModifyResult<()> {
        let session = ModifySession::begin(geometry)?;
        self.sessions.insert(feature, session);
        Ok(())
    }

    /// Route an anchor move to the feature's session
    pub fn anchor_moved(&mut self, feature: Uuid, position: DVec2) -> ModifyResult<()> {
        let session = self
            .sessions
            .get_mut(&feature)
            .ok_or(ModifyError::SessionNotFound(feature))?;
        session.on_anchor_moved(position);
        Ok(())
    }

    /// Commit the feature's session, yielding the final geometry
    pub fn end(&mut self, feature: Uuid) -> ModifyResult<Geometry> {
        let session = self
            .sessions
            .remove(&feature)
            .ok_or(ModifyError::SessionNotFound(feature))?;
        Ok(session.end())
    }

    /// Abort the feature's session, yielding the original geometry
    pub fn cancel(&mut self, feature: Uuid) -> ModifyResult<Geometry> {
        let session = self
            .sessions
            .remove(&feature)
            .ok_or(ModifyError::SessionNotFound(feature))?;
        Ok(session.cancel())
    }

    /// Get a feature's live session, for rendering
    pub fn get(&self, feature: Uuid) -> Option<&ModifySession> {
        self.sessions.get(&feature)
    }

    /// Iterate over all live sessions
    pub fn iter(&self) -> impl Iterator<Item = (Uuid, &ModifySession)> {
        self.sessions.iter().map(|(id, session)| (*id, session))
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check whether no drag is in progress
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Geometry {
        Geometry::polygon(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 0.0),
            DVec2::new(0.0, 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_begin_end_round_trip() {
        let mut map = SessionMap::new();
        let feature = Uuid::new_v4();
        let geometry = triangle();

        map.begin(feature, &geometry).unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.get(feature).is_some());

        // anchor fixed, no move yet: commit returns the original
        map.anchor_moved(feature, DVec2::new(3.0, 0.0)).unwrap();
        let committed = map.end(feature).unwrap();
        assert_eq!(committed, geometry);
        assert!(map.is_empty());
    }

    #[test]
    fn test_cancel_restores_original() {
        let mut map = SessionMap::new();
        let feature = Uuid::new_v4();
        let geometry = triangle();

        map.begin(feature, &geometry).unwrap();
        map.anchor_moved(feature, DVec2::new(3.0, 0.0)).unwrap();
        map.anchor_moved(feature, DVec2::new(9.0, 0.0)).unwrap();
        assert_eq!(map.cancel(feature).unwrap(), geometry);
    }

    #[test]
    fn test_unknown_feature_is_an_error() {
        let mut map = SessionMap::new();
        let feature = Uuid::new_v4();
        assert!(matches!(
            map.anchor_moved(feature, DVec2::ZERO),
            Err(ModifyError::SessionNotFound(id)) if id == feature
        ));
        assert!(map.end(feature).is_err());
        assert!(map.cancel(feature).is_err());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut map = SessionMap::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        map.begin(a, &triangle()).unwrap();
        map.begin(b, &triangle()).unwrap();

        map.anchor_moved(a, DVec2::new(3.0, 0.0)).unwrap();
        map.anchor_moved(a, DVec2::new(6.0, 0.0)).unwrap();
        map.anchor_moved(b, DVec2::new(3.0, 0.0)).unwrap();

        assert_ne!(map.end(a).unwrap(), triangle());
        assert_eq!(map.end(b).unwrap(), triangle());
    }
}
