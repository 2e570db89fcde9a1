use bevy::prelude::*;

/// 标记“世界相机”（用于把鼠标位置换算到网格）。
///
/// 注意：UI 可能会创建/使用自己的相机，拾取时必须只取带这个标记的相机。
#[derive(Component)]
pub struct WorldCamera;
