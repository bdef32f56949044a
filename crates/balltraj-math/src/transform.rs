use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// World transform of a scene object (rotation + translation, no shear/scale).
///
/// Endpoints tracked from the scene read their position from the origin of
/// this transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    /// World position of the object's origin.
    pub fn position(&self) -> Point3 {
        self.to_mat4().w_axis.truncate()
    }
}
