//! 细胞编辑器（细胞器放置 + 右键弹出菜单）
//!
//! 目标：
//! - 网格上放置/删除/移动细胞器，花费 MP（mutation points）
//! - 右键已放置的细胞器弹出菜单：显示名称，以及“删除/移动”各自的 MP 花费
//! - 菜单点击后通过 Bevy message 通知世界侧执行
//!
//! 说明：
//! - 本 crate 使用 Bevy 0.18。
//! - 菜单文案的计算在 `organelle_core`，这里只负责实体树与输入。

mod paths;
mod persistence;
mod types;
mod ui;
mod world;

mod app;

use bevy::prelude::Color;

/// 网格单元边长（世界坐标，像素）。
pub const CELL_PX: f32 = 40.0;

pub const UI_BG: Color = Color::srgb(0.12, 0.12, 0.12);
pub const UI_PANEL: Color = Color::srgba(0.08, 0.08, 0.09, 0.95);
pub const UI_BUTTON: Color = Color::srgb(0.22, 0.22, 0.22);
pub const UI_BUTTON_HOVER: Color = Color::srgb(0.28, 0.28, 0.28);
pub const UI_BUTTON_PRESS: Color = Color::srgb(0.35, 0.35, 0.35);
pub const UI_BUTTON_DISABLED: Color = Color::srgb(0.18, 0.18, 0.18);

pub use app::run;
