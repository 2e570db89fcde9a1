//! 世界（World）侧逻辑：相机、细胞器放置/删除/移动、右键菜单的打开与请求执行。
//!
//! 关键点：
//! - 鼠标拾取必须把屏幕坐标转换为世界坐标，需要一个明确的“世界相机”。
//! - 菜单 UI 只发出 message；真正修改细胞器和 MP 的逻辑都在这里。

use bevy::prelude::*;

mod camera;
mod constants;
mod move_mode;
mod organelles;
mod popup;

pub use camera::setup_world;
pub use constants::load_editor_constants;
pub use move_mode::move_with_mouse;
pub use organelles::{place_with_keys, spawn_starting_organelles, sync_organelle_transforms};
pub use popup::{apply_popup_requests, popup_clear_consumption, popup_open_close};

/// 鼠标所在的网格坐标。
pub(crate) fn cursor_cell(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    cell_px: f32,
) -> Option<IVec2> {
    let cursor_pos = window.cursor_position()?;
    let world_pos = camera
        .viewport_to_world_2d(camera_transform, cursor_pos)
        .ok()?;
    world_to_cell(world_pos, cell_px)
}

pub(crate) fn world_to_cell(world_pos: Vec2, cell_px: f32) -> Option<IVec2> {
    if cell_px <= 0.0 {
        return None;
    }
    Some(IVec2::new(
        (world_pos.x / cell_px).floor() as i32,
        (world_pos.y / cell_px).floor() as i32,
    ))
}

/// 网格中心的世界坐标。
pub(crate) fn cell_center(cell: IVec2, cell_px: f32) -> Vec2 {
    (cell.as_vec2() + Vec2::splat(0.5)) * cell_px
}
