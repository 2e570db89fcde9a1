//! 左上角 HUD 文案。

use bevy::prelude::*;

use organelle_core::ActionCosts;

use crate::editor::types::{EditMode, HudText, MutationPoints, OrganelleKind, PlacedOrganelle};

/// UI 初始化：HUD 文本。
pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// 更新 HUD（MP、细胞器数量、当前模式与按键提示）。
pub fn update_hud_text(
    mp: Res<MutationPoints>,
    mode: Res<EditMode>,
    costs: Res<ActionCosts>,
    organelles: Query<&PlacedOrganelle>,
    mut hud_q: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = hud_q.single_mut() else {
        return;
    };

    let msg = hud_message(*mp, *mode, &costs, organelles.iter().count());
    if text.0 != msg {
        text.0 = msg;
    }
}

fn hud_message(mp: MutationPoints, mode: EditMode, costs: &ActionCosts, count: usize) -> String {
    let mut msg = format!("MP: {} | 细胞器: {}\n", mp.0, count);

    let keys: Vec<String> = OrganelleKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| format!("{} {}({})", i + 1, kind.name(), kind.mp_cost()))
        .collect();
    msg.push_str(&format!("放置: {}\n", keys.join("  ")));

    match mode {
        EditMode::Place => {
            msg.push_str(&format!(
                "右键细胞器打开菜单（删除 -{} MP / 移动 -{} MP）",
                costs.remove_cost, costs.move_cost
            ));
        }
        EditMode::Moving(_) => {
            msg.push_str("移动中：左键点击空格子放下，Esc 取消");
        }
    }
    msg
}
