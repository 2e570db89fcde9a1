#![forbid(unsafe_code)]

// 纯逻辑 crate：细胞编辑器里“已放置细胞器”弹出菜单的数据与文案计算。
//
// 不依赖引擎：
// - 选中细胞器的快照（OrganelleInfo）
// - 删除/移动两项操作的 MP 花费文案
// - ActionMenu：通过注入的控件句柄显示文案，通过监听器通知宿主

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod menu;

pub use menu::{ActionMenu, ButtonSounds, PopupListener, PopupWidgets};

/// 删除一个非本次编辑放置的细胞器所需 MP。
pub const DEFAULT_REMOVE_COST: u32 = 10;
/// 移动一个本次编辑尚未移动过的细胞器所需 MP。
pub const DEFAULT_MOVE_COST: u32 = 5;

/// 弹出菜单选中的细胞器（由宿主提供的快照）。
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganelleInfo {
    pub name: String,
    pub mp_cost: u32,
    /// 本次编辑中新放置的：删除时返还 `mp_cost`。
    pub placed_this_session: bool,
    /// 本次编辑中已移动过的：再次移动不收费。
    pub moved_this_session: bool,
}

/// 宿主提供的固定操作花费。
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionCosts {
    pub remove_cost: u32,
    pub move_cost: u32,
}

impl Default for ActionCosts {
    fn default() -> Self {
        Self {
            remove_cost: DEFAULT_REMOVE_COST,
            move_cost: DEFAULT_MOVE_COST,
        }
    }
}

/// 宿主可以收到的菜单请求。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupRequest {
    Delete,
    Move,
}

/// 名称标签：未选中时为空。
pub fn name_label(selected: Option<&OrganelleInfo>) -> &str {
    selected.map(|o| o.name.as_str()).unwrap_or("")
}

/// 删除按钮的 MP 文案。
///
/// 本次放置的细胞器删除时返还其花费（`+cost`），否则扣除固定的删除费用。
pub fn delete_cost_label(selected: Option<&OrganelleInfo>, costs: &ActionCosts) -> String {
    match selected {
        Some(o) if o.placed_this_session => format!("+{} MP", o.mp_cost),
        _ => format!("-{} MP", costs.remove_cost),
    }
}

/// 移动按钮的 MP 文案。
pub fn move_cost_label(selected: Option<&OrganelleInfo>, costs: &ActionCosts) -> String {
    match selected {
        Some(o) if o.moved_this_session => "-0 MP".to_string(),
        _ => format!("-{} MP", costs.move_cost),
    }
}

/// 弹出菜单要显示的全部内容。只由（选中细胞器，两个开关，花费）决定。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupView {
    pub name: String,
    pub delete_cost: String,
    pub delete_disabled: bool,
    pub move_cost: String,
    pub move_disabled: bool,
}

impl PopupView {
    pub fn compute(
        selected: Option<&OrganelleInfo>,
        enable_delete: bool,
        enable_move: bool,
        costs: &ActionCosts,
    ) -> Self {
        Self {
            name: name_label(selected).to_string(),
            delete_cost: delete_cost_label(selected, costs),
            delete_disabled: !enable_delete,
            move_cost: move_cost_label(selected, costs),
            move_disabled: !enable_move,
        }
    }
}
