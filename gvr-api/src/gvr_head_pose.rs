use bytemuck::{Pod, Zeroable};
use crate::{Mat3f, Mat4f, Vec3f};

/// A snapshot of the head pose.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct HeadPose {
    /// The head's rotation.
    pub rotation: Mat3f,
    /// The head's position.
    pub position: Vec3f,
    /// Transform from the reference space, which `rotation` and `position`
    /// are relative to, to the object space.
    pub object_from_reference_matrix: Mat4f,
}

impl HeadPose {
    /// A pose at the origin looking down the reference space's axes.
    pub const IDENTITY: HeadPose = HeadPose {
        rotation: Mat3f::IDENTITY,
        position: Vec3f { x: 0.0, y: 0.0, z: 0.0 },
        object_from_reference_matrix: Mat4f::IDENTITY,
    };
}
