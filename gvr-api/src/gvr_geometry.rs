use bytemuck::{Pod, Zeroable};

// Equality on every type below is field-wise and exact. No tolerance is
// applied to float fields.

/// An integral 2D size. Used for render target and framebuffer sizes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Sizei {
    pub width: i32,
    pub height: i32,
}

impl Sizei {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width,
            height: height,
        }
    }
}

/// An integral 2D rect. Used for window bounds in pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Recti {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

impl Recti {
    pub fn new(left: i32, right: i32, bottom: i32, top: i32) -> Self {
        Self {
            left: left,
            right: right,
            bottom: bottom,
            top: top,
        }
    }

    /// Widened so that rects spanning the whole `i32` range do not overflow.
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.top) - i64::from(self.bottom)
    }
}

/// A floating point 2D rect. Used for fields of view, in degrees, and for
/// ranges in texture space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Rectf {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Rectf {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left: left,
            right: right,
            bottom: bottom,
            top: top,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x: x, y: y }
    }
}

impl From<[f32; 2]> for Vec2f {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<Vec2f> for [f32; 2] {
    fn from(v: Vec2f) -> Self {
        [v.x, v.y]
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x: x, y: y, z: z }
    }
}

impl From<[f32; 3]> for Vec3f {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3f> for [f32; 3] {
    fn from(v: Vec3f) -> Self {
        [v.x, v.y, v.z]
    }
}

/// A floating point 3x3 matrix, stored as rows.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Mat3f {
    pub m: [[f32; 3]; 3],
}

impl Mat3f {
    pub const IDENTITY: Mat3f = Mat3f {
        m: [[1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0]],
    };

    pub fn transpose(&self) -> Mat3f {
        let mut out = Mat3f::default();
        for i in 0..3 {
            for j in 0..3 {
                out.m[j][i] = self.m[i][j];
            }
        }
        out
    }
}

impl From<[[f32; 3]; 3]> for Mat3f {
    fn from(m: [[f32; 3]; 3]) -> Self {
        Self { m: m }
    }
}

/// A floating point 4x4 matrix, stored as rows.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Mat4f {
    pub m: [[f32; 4]; 4],
}

impl Mat4f {
    pub const IDENTITY: Mat4f = Mat4f {
        m: [[1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0]],
    };

    pub fn transpose(&self) -> Mat4f {
        let mut out = Mat4f::default();
        for i in 0..4 {
            for j in 0..4 {
                out.m[j][i] = self.m[i][j];
            }
        }
        out
    }

    /// Flattens the matrix in column-major order, the layout GL uniforms expect.
    pub fn to_column_major(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = self.m[row][col];
            }
        }
        out
    }
}

impl From<[[f32; 4]; 4]> for Mat4f {
    fn from(m: [[f32; 4]; 4]) -> Self {
        Self { m: m }
    }
}

/// A floating point quaternion, in JPL format: the vector part `(qx, qy, qz)`
/// comes first and the scalar part `qw` last.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Quatf {
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
}

impl Quatf {
    pub const IDENTITY: Quatf = Quatf { qx: 0.0, qy: 0.0, qz: 0.0, qw: 1.0 };

    pub fn new(qx: f32, qy: f32, qz: f32, qw: f32) -> Self {
        Self {
            qx: qx,
            qy: qy,
            qz: qz,
            qw: qw,
        }
    }
}

/// `[qx, qy, qz, qw]`, the same component order as the struct.
impl From<[f32; 4]> for Quatf {
    fn from(q: [f32; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }
}

impl From<Quatf> for [f32; 4] {
    fn from(q: Quatf) -> Self {
        [q.qx, q.qy, q.qz, q.qw]
    }
}
