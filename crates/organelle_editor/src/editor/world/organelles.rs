use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::editor::types::{
    EditMode, EditorConfig, MutationPoints, OrganelleKind, OrganellePopup, PlacedOrganelle,
    WorldCamera,
};

use super::{cell_center, cursor_cell};

const PLACE_KEYS: [KeyCode; 4] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
];

pub(super) fn spawn_organelle(
    commands: &mut Commands,
    organelle: PlacedOrganelle,
    cell_px: f32,
) -> Entity {
    let pos = cell_center(organelle.cell, cell_px);
    commands
        .spawn((
            Sprite::from_color(organelle.kind.color(), Vec2::splat(cell_px - 4.0)),
            Transform::from_translation(pos.extend(0.0)),
            organelle,
        ))
        .id()
}

/// 进入编辑器时已经存在的细胞。
pub fn spawn_starting_organelles(mut commands: Commands, config: Res<EditorConfig>) {
    let starting = [
        (OrganelleKind::Nucleus, IVec2::new(0, 0)),
        (OrganelleKind::Cytoplasm, IVec2::new(-1, 0)),
        (OrganelleKind::Cytoplasm, IVec2::new(1, 0)),
        (OrganelleKind::Mitochondrion, IVec2::new(0, -1)),
    ];
    for (kind, cell) in starting {
        spawn_organelle(&mut commands, PlacedOrganelle::existing(kind, cell), config.cell_px);
    }
}

/// 尝试在 `cell` 放置新的细胞器：格子被占或 MP 不够时返回 `None`。
pub(super) fn try_place(
    kind: OrganelleKind,
    cell: IVec2,
    occupied: bool,
    mp: &mut MutationPoints,
) -> Option<PlacedOrganelle> {
    if occupied {
        return None;
    }
    if !mp.try_spend(kind.mp_cost()) {
        return None;
    }
    Some(PlacedOrganelle {
        kind,
        cell,
        placed_this_session: true,
        moved_this_session: false,
    })
}

/// 数字键 1..=4 在鼠标所在格子放置细胞器。
pub fn place_with_keys(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<WorldCamera>>,
    config: Res<EditorConfig>,
    popup: Res<OrganellePopup>,
    mode: Res<EditMode>,
    mut mp: ResMut<MutationPoints>,
    organelles: Query<&PlacedOrganelle>,
) {
    if popup.menu.is_visible() || *mode != EditMode::Place {
        return;
    }
    let Some(kind) = PLACE_KEYS
        .iter()
        .position(|k| keys.just_pressed(*k))
        .map(|i| OrganelleKind::ALL[i])
    else {
        return;
    };

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_q.single() else {
        return;
    };
    let Some(cell) = cursor_cell(window, camera, camera_transform, config.cell_px) else {
        return;
    };

    let occupied = organelles.iter().any(|o| o.cell == cell);
    let Some(organelle) = try_place(kind, cell, occupied, &mut mp) else {
        info!("place {} at {cell} refused (occupied={occupied}, mp={})", kind.name(), mp.0);
        return;
    };
    spawn_organelle(&mut commands, organelle, config.cell_px);
    info!("placed {} at {cell}, mp left {}", kind.name(), mp.0);
}

/// 细胞器格子变化后同步 Transform。
pub fn sync_organelle_transforms(
    config: Res<EditorConfig>,
    mut q: Query<(&PlacedOrganelle, &mut Transform), Changed<PlacedOrganelle>>,
) {
    for (organelle, mut tf) in q.iter_mut() {
        let pos = cell_center(organelle.cell, config.cell_px);
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;
    }
}
