//! Draw model handed to the client renderer.

use glam::{Mat4, Vec3};

use crate::components::Side;
use crate::params::Params;

/// Sprites the client must provide a texture for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    PaddleLeft,
    PaddleRight,
    BallLeft,
    BallRight,
    BannerLeftWins,
    BannerRightWins,
}

impl TextureId {
    pub const ALL: [TextureId; 6] = [
        TextureId::PaddleLeft,
        TextureId::PaddleRight,
        TextureId::BallLeft,
        TextureId::BallRight,
        TextureId::BannerLeftWins,
        TextureId::BannerRightWins,
    ];

    pub fn paddle(side: Side) -> Self {
        match side {
            Side::Left => TextureId::PaddleLeft,
            Side::Right => TextureId::PaddleRight,
        }
    }

    /// Ball skin for the side that owns it
    pub fn ball(owner: Side) -> Self {
        match owner {
            Side::Left => TextureId::BallLeft,
            Side::Right => TextureId::BallRight,
        }
    }

    pub fn banner(winner: Side) -> Self {
        match winner {
            Side::Left => TextureId::BannerLeftWins,
            Side::Right => TextureId::BannerRightWins,
        }
    }

    /// Image file name under the asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            TextureId::PaddleLeft => "paddle_left.png",
            TextureId::PaddleRight => "paddle_right.png",
            TextureId::BallLeft => "ball_left.png",
            TextureId::BallRight => "ball_right.png",
            TextureId::BannerLeftWins => "banner_left_wins.png",
            TextureId::BannerRightWins => "banner_right_wins.png",
        }
    }
}

/// Anything that can draw a textured unit quad
pub trait DrawSink {
    fn draw(&mut self, transform: Mat4, texture: TextureId);
}

/// Transform for the win banner, centred on the field
pub fn banner_matrix() -> Mat4 {
    Mat4::from_scale(Params::BANNER_SCALE.extend(1.0))
}

/// Collects draw calls in order; handy for tests and batching
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub calls: Vec<(Mat4, TextureId)>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn textures(&self) -> Vec<TextureId> {
        self.calls.iter().map(|(_, t)| *t).collect()
    }

    /// World-space centre of each call
    pub fn centres(&self) -> Vec<Vec3> {
        self.calls
            .iter()
            .map(|(m, _)| m.transform_point3(Vec3::ZERO))
            .collect()
    }
}

impl DrawSink for DrawList {
    fn draw(&mut self, transform: Mat4, texture: TextureId) {
        self.calls.push((transform, texture));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_lookup_by_side() {
        assert_eq!(TextureId::paddle(Side::Left), TextureId::PaddleLeft);
        assert_eq!(TextureId::ball(Side::Right), TextureId::BallRight);
        assert_eq!(TextureId::banner(Side::Left), TextureId::BannerLeftWins);
    }

    #[test]
    fn test_file_names_are_unique() {
        let mut names: Vec<&str> = TextureId::ALL.iter().map(|t| t.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TextureId::ALL.len());
    }

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.draw(Mat4::from_translation(Vec3::new(1.0, 2.0, 0.0)), TextureId::BallLeft);
        list.draw(banner_matrix(), TextureId::BannerRightWins);
        assert_eq!(
            list.textures(),
            vec![TextureId::BallLeft, TextureId::BannerRightWins]
        );
        assert_eq!(list.centres()[0], Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(list.centres()[1], Vec3::ZERO);
    }
}
