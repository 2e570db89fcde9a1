use bevy::prelude::*;

use crate::editor::types::WorldCamera;

/// 初始化世界相机（原点即细胞中心）。
pub fn setup_world(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
        WorldCamera,
    ));
}
