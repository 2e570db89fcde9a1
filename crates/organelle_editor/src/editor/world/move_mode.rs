use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use organelle_core::ActionCosts;

use crate::editor::types::{
    EditMode, EditorConfig, MutationPoints, OrganellePopup, PlacedOrganelle, WorldCamera,
};

use super::cursor_cell;

/// 把细胞器移动到 `to`。成功返回 true。
///
/// 本次编辑已移动过的不再收费；原地放下视为完成但不收费、不标记。
pub(super) fn try_move_organelle(
    organelle: &mut PlacedOrganelle,
    to: IVec2,
    occupied: bool,
    mp: &mut MutationPoints,
    costs: &ActionCosts,
) -> bool {
    if organelle.cell == to {
        return true;
    }
    if occupied {
        return false;
    }
    let cost = if organelle.moved_this_session { 0 } else { costs.move_cost };
    if !mp.try_spend(cost) {
        return false;
    }
    organelle.cell = to;
    organelle.moved_this_session = true;
    true
}

/// 移动模式：左键点击目标格子放下，Esc 取消。
pub fn move_with_mouse(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<WorldCamera>>,
    config: Res<EditorConfig>,
    costs: Res<ActionCosts>,
    popup: Res<OrganellePopup>,
    mut mp: ResMut<MutationPoints>,
    mut mode: ResMut<EditMode>,
    mut organelles: Query<(Entity, &mut PlacedOrganelle)>,
) {
    let EditMode::Moving(entity) = *mode else {
        return;
    };

    if keys.just_pressed(KeyCode::Escape) {
        *mode = EditMode::Place;
        info!("move cancelled");
        return;
    }

    if !buttons.just_pressed(MouseButton::Left)
        || popup.consume_left_click
        || popup.menu.is_visible()
    {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_q.single() else {
        return;
    };
    let Some(cell) = cursor_cell(window, camera, camera_transform, config.cell_px) else {
        return;
    };

    let occupied = organelles.iter().any(|(e, o)| e != entity && o.cell == cell);
    let Ok((_, mut organelle)) = organelles.get_mut(entity) else {
        // 目标在移动途中被删除
        *mode = EditMode::Place;
        return;
    };

    if try_move_organelle(&mut organelle, cell, occupied, &mut mp, &costs) {
        *mode = EditMode::Place;
        info!("moved {} to {cell}, mp {}", organelle.kind.name(), mp.0);
    } else {
        info!("move to {cell} refused (occupied={occupied}, mp={})", mp.0);
    }
}
