use glam::DVec3;

pub type Color = [f64; 4];

/// How color and texture/color blend are assigned to each vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributePolicy {
    /// Opaque red everywhere, mostly textured.
    #[default]
    SolidRed,
    /// Opaque white, untextured on the -X half of the cube and half-blended
    /// elsewhere.
    WhiteSplit,
}

impl AttributePolicy {
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

    pub fn color(&self) -> Color {
        match self {
            AttributePolicy::SolidRed => Self::RED,
            AttributePolicy::WhiteSplit => Self::WHITE,
        }
    }

    pub fn blend(&self, position: DVec3) -> f64 {
        match self {
            AttributePolicy::SolidRed => 0.75,
            AttributePolicy::WhiteSplit => {
                if position.x < 0.0 {
                    0.0
                } else {
                    0.5
                }
            }
        }
    }

    pub fn assign(&self, position: DVec3) -> (Color, f64) {
        (self.color(), self.blend(position))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributePolicy::SolidRed => "solid-red",
            AttributePolicy::WhiteSplit => "white-split",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_red_ignores_position() {
        let policy = AttributePolicy::SolidRed;
        for x in [-0.5, 0.5] {
            let (color, blend) = policy.assign(DVec3::new(x, 0.5, -0.5));
            assert_eq!(color, [1.0, 0.0, 0.0, 1.0]);
            assert_eq!(blend, 0.75);
        }
    }

    #[test]
    fn white_split_blends_by_x_sign() {
        let policy = AttributePolicy::WhiteSplit;
        assert_eq!(policy.color(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(policy.blend(DVec3::new(-0.5, 0.5, 0.5)), 0.0);
        assert_eq!(policy.blend(DVec3::new(0.5, -0.5, -0.5)), 0.5);
    }
}
