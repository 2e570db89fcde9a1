//! 已放置细胞器的右键弹出菜单：名称 + 删除/移动（带 MP 花费）。

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use organelle_core::PopupRequest;

use crate::editor::types::{
    DeleteOrganelleRequested, MoveOrganelleRequested, OrganellePopup, PopupBackdrop,
    PopupCostLabel, PopupItem, PopupItemDisabled, PopupNameLabel, PopupRoot, PopupWidgetIds,
    PopupWidgetTexts, UiSounds,
};
use crate::editor::{UI_BUTTON, UI_BUTTON_DISABLED, UI_BUTTON_HOVER, UI_BUTTON_PRESS, UI_PANEL};

use super::sounds::CommandSounds;

const COST_TEXT: Color = Color::srgb(0.95, 0.85, 0.4);
const COST_TEXT_DISABLED: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);

/// UI 初始化时创建弹出菜单实体树，并把控件绑定到 `ActionMenu`。
pub fn setup_organelle_popup(mut commands: Commands, mut popup: ResMut<OrganellePopup>) {
    // 背景遮罩：用于“点空白关闭菜单”。z-index 要略低于菜单本体。
    commands.spawn((
        Button,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            display: Display::None,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        ZIndex(4999),
        PopupBackdrop,
    ));

    let root = commands
        .spawn((
            // 面板本身也参与 hit-test，防止点击面板空白处穿透到 backdrop。
            Button,
            Node {
                min_width: Val::Px(200.0),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::all(Val::Px(4.0)),
                row_gap: Val::Px(2.0),
                flex_direction: FlexDirection::Column,
                display: Display::None,
                ..default()
            },
            BackgroundColor(UI_PANEL),
            BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.12)),
            ZIndex(5000),
            PopupRoot,
        ))
        .id();

    let name_label = commands
        .spawn((
            Text::new(""),
            TextFont { font_size: 15.0, ..default() },
            TextColor(Color::WHITE),
            Node {
                margin: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                ..default()
            },
            PopupNameLabel,
        ))
        .id();
    commands.entity(root).add_child(name_label);

    let (delete_button, delete_cost) =
        spawn_popup_item(&mut commands, root, "Delete", PopupRequest::Delete);
    let (move_button, move_cost) =
        spawn_popup_item(&mut commands, root, "Move", PopupRequest::Move);

    popup.menu.initialize(PopupWidgetTexts::new(PopupWidgetIds {
        name_label,
        delete_button,
        delete_cost,
        move_button,
        move_cost,
    }));
}

/// 返回（按钮实体，MP 标签实体）。
fn spawn_popup_item(
    commands: &mut Commands,
    parent: Entity,
    label: &str,
    request: PopupRequest,
) -> (Entity, Entity) {
    let button = commands
        .spawn((
            Button,
            Node {
                height: Val::Px(30.0),
                padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                column_gap: Val::Px(16.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
            BackgroundColor(UI_BUTTON),
            PopupItem(request),
        ))
        .id();
    commands.entity(parent).add_child(button);

    let text = commands
        .spawn((
            Text::new(label),
            TextFont { font_size: 14.0, ..default() },
            TextColor(Color::WHITE),
        ))
        .id();
    let cost = commands
        .spawn((
            Text::new(""),
            TextFont { font_size: 13.0, ..default() },
            TextColor(COST_TEXT),
            PopupCostLabel,
        ))
        .id();
    commands.entity(button).add_children(&[text, cost]);

    (button, cost)
}

/// 同步菜单位置/可见性。
pub fn popup_sync(
    windows: Query<&Window, With<PrimaryWindow>>,
    popup: Res<OrganellePopup>,
    mut root_q: Query<&mut Node, (With<PopupRoot>, Without<PopupBackdrop>)>,
    mut backdrop_q: Query<&mut Node, (With<PopupBackdrop>, Without<PopupRoot>)>,
) {
    let Ok(mut node) = root_q.single_mut() else {
        return;
    };
    let Ok(mut backdrop) = backdrop_q.single_mut() else {
        return;
    };

    if !popup.menu.is_visible() {
        node.display = Display::None;
        backdrop.display = Display::None;
        return;
    }

    node.display = Display::Flex;
    backdrop.display = Display::Flex;

    let margin = 6.0;
    let mut pos = popup.screen_pos;
    if let Ok(window) = windows.single() {
        pos.x = pos.x.clamp(0.0, window.width());
        pos.y = pos.y.clamp(0.0, window.height());
    }
    node.left = Val::Px(pos.x.max(margin));
    node.top = Val::Px(pos.y.max(margin));
}

/// 把 `ActionMenu` 算好的文案/禁用状态写回实体。
pub fn popup_apply_widget_texts(
    mut commands: Commands,
    mut popup: ResMut<OrganellePopup>,
    mut text_q: Query<(&mut Text, &mut TextColor)>,
    mut bg_q: Query<&mut BackgroundColor, With<PopupItem>>,
) {
    if !popup.menu.widgets().is_some_and(|w| w.dirty) {
        return;
    }
    let Some(widgets) = popup.menu.widgets_mut() else {
        return;
    };
    widgets.dirty = false;
    let ids = widgets.ids;

    write_text(&mut text_q, ids.name_label, &widgets.name, Color::WHITE);
    let delete_color = cost_color(widgets.delete_disabled);
    let move_color = cost_color(widgets.move_disabled);
    write_text(&mut text_q, ids.delete_cost, &widgets.delete_cost, delete_color);
    write_text(&mut text_q, ids.move_cost, &widgets.move_cost, move_color);

    set_item_disabled(&mut commands, &mut bg_q, ids.delete_button, widgets.delete_disabled);
    set_item_disabled(&mut commands, &mut bg_q, ids.move_button, widgets.move_disabled);
}

fn cost_color(disabled: bool) -> Color {
    if disabled { COST_TEXT_DISABLED } else { COST_TEXT }
}

fn write_text(
    text_q: &mut Query<(&mut Text, &mut TextColor)>,
    entity: Entity,
    value: &str,
    color: Color,
) {
    let Ok((mut text, mut text_color)) = text_q.get_mut(entity) else {
        return;
    };
    if text.0 != value {
        text.0 = value.to_string();
    }
    text_color.0 = color;
}

fn set_item_disabled(
    commands: &mut Commands,
    bg_q: &mut Query<&mut BackgroundColor, With<PopupItem>>,
    entity: Entity,
    disabled: bool,
) {
    if let Ok(mut bg) = bg_q.get_mut(entity) {
        *bg = BackgroundColor(if disabled { UI_BUTTON_DISABLED } else { UI_BUTTON });
    }
    let Ok(mut e) = commands.get_entity(entity) else {
        return;
    };
    if disabled {
        e.insert(PopupItemDisabled);
    } else {
        e.remove::<PopupItemDisabled>();
    }
}

/// 点击遮罩关闭菜单。
pub fn popup_backdrop_click(
    mut popup: ResMut<OrganellePopup>,
    backdrop_q: Query<&Interaction, (Changed<Interaction>, With<PopupBackdrop>)>,
) {
    if !popup.menu.is_visible() {
        return;
    }
    for interaction in backdrop_q.iter() {
        if *interaction == Interaction::Pressed {
            popup.close();
            return;
        }
    }
}

/// 菜单项 hover/pressed 样式。
pub fn popup_item_styles(
    mut q: Query<
        (&Interaction, &mut BackgroundColor, Option<&PopupItemDisabled>),
        (Changed<Interaction>, With<PopupItem>),
    >,
) {
    for (interaction, mut bg, disabled) in q.iter_mut() {
        if disabled.is_some() {
            *bg = BackgroundColor(UI_BUTTON_DISABLED);
            continue;
        }
        *bg = match *interaction {
            Interaction::Pressed => BackgroundColor(UI_BUTTON_PRESS),
            Interaction::Hovered => BackgroundColor(UI_BUTTON_HOVER),
            Interaction::None => BackgroundColor(UI_BUTTON),
        };
    }
}

/// 菜单项点击：交给 `ActionMenu` 处理；菜单监听器收到的请求再以 message 通知世界侧。
pub fn popup_item_click(
    mut commands: Commands,
    mut popup: ResMut<OrganellePopup>,
    sounds: Option<Res<UiSounds>>,
    q: Query<(&Interaction, &PopupItem), Changed<Interaction>>,
    mut delete_requests: MessageWriter<DeleteOrganelleRequested>,
    mut move_requests: MessageWriter<MoveOrganelleRequested>,
) {
    if !popup.menu.is_visible() {
        return;
    }

    let Some(item) = q
        .iter()
        .find(|(interaction, _)| **interaction == Interaction::Pressed)
        .map(|(_, item)| *item)
    else {
        return;
    };
    // 点到禁用项不关闭菜单，但仍然吞掉这次左键。
    popup.consume_left_click = true;

    match item.0 {
        PopupRequest::Delete => {
            let mut player = CommandSounds {
                commands: &mut commands,
                sounds: sounds.as_deref(),
            };
            popup.menu.on_delete_pressed(&mut player);
        }
        PopupRequest::Move => {
            popup.menu.on_move_pressed();
        }
    }

    let requests = popup.drain_requests();
    let Some(entity) = popup.target else {
        return;
    };
    for request in requests {
        match request {
            PopupRequest::Delete => {
                delete_requests.write(DeleteOrganelleRequested { entity });
            }
            PopupRequest::Move => {
                move_requests.write(MoveOrganelleRequested { entity });
            }
        }
    }
}
