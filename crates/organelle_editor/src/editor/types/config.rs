use bevy::prelude::*;

use crate::editor::CELL_PX;
use crate::editor::paths::workspace_assets_dir;
use crate::editor::persistence::DEFAULT_CONSTANTS_PATH;

/// 编辑器配置。
///
/// - `constants_path`：常量文件的绝对路径（默认 workspace/assets/editor/constants.ron）
/// - 操作花费本身作为独立资源 `ActionCosts` 存在，启动时从常量文件读取
#[derive(Resource)]
pub struct EditorConfig {
    pub cell_px: f32,
    pub constants_path: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_px: CELL_PX,
            constants_path: workspace_assets_dir()
                .join(DEFAULT_CONSTANTS_PATH)
                .to_string_lossy()
                .to_string(),
        }
    }
}
