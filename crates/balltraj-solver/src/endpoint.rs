//! Where trajectory endpoints come from.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use balltraj_math::{Point3, Transform};

/// Shared, mutable transform of a scene object.
pub type SceneHandle = Arc<RwLock<Transform>>;

/// Create a scene object at `position`.
pub fn scene_node(position: Point3) -> SceneHandle {
    Arc::new(RwLock::new(Transform::from_translation(position)))
}

/// Source of one trajectory endpoint, chosen when the tracker is built.
#[derive(Debug, Clone)]
pub enum EndpointSource {
    /// A position set by the host.
    Fixed(Point3),
    /// The live position of a scene object. The object may go away.
    Tracked(Weak<RwLock<Transform>>),
}

impl EndpointSource {
    pub fn fixed(position: Point3) -> Self {
        Self::Fixed(position)
    }

    pub fn tracked(node: &SceneHandle) -> Self {
        Self::Tracked(Arc::downgrade(node))
    }

    pub fn is_tracked(&self) -> bool {
        matches!(self, Self::Tracked(_))
    }

    /// Current position, or `None` if the tracked object no longer exists.
    ///
    /// A lock poisoned by a panicking writer still holds the last transform
    /// written, and that is what gets read.
    pub fn position(&self) -> Option<Point3> {
        match self {
            Self::Fixed(p) => Some(*p),
            Self::Tracked(node) => {
                let node = node.upgrade()?;
                let position = node.read().unwrap_or_else(PoisonError::into_inner).position();
                Some(position)
            }
        }
    }
}
