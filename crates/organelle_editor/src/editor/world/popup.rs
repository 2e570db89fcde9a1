use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use organelle_core::ActionCosts;

use crate::editor::types::{
    DeleteOrganelleRequested, EditMode, EditorConfig, MoveOrganelleRequested, MutationPoints,
    OrganellePopup, PlacedOrganelle, WorldCamera,
};

use super::cursor_cell;

/// 菜单两项是否可用。
///
/// - 删除：细胞里至少还剩一个细胞器，且本次放置的（会返还）或 MP 足够支付删除费用
/// - 移动：本次已移动过（免费）或 MP 足够支付移动费用
pub(super) fn popup_flags(
    organelle: &PlacedOrganelle,
    organelle_count: usize,
    mp: MutationPoints,
    costs: &ActionCosts,
) -> (bool, bool) {
    let enable_delete =
        organelle_count > 1 && (organelle.placed_this_session || mp.0 >= costs.remove_cost);
    let enable_move = organelle.moved_this_session || mp.0 >= costs.move_cost;
    (enable_delete, enable_move)
}

pub(super) fn open_popup(
    popup: &mut OrganellePopup,
    entity: Entity,
    organelle: &PlacedOrganelle,
    organelle_count: usize,
    mp: MutationPoints,
    costs: &ActionCosts,
    screen_pos: Vec2,
) {
    let (enable_delete, enable_move) = popup_flags(organelle, organelle_count, mp, costs);
    popup.target = Some(entity);
    popup.screen_pos = screen_pos;
    popup.consume_left_click = false;
    popup.menu.set_selected_organelle(Some(organelle.info()));
    popup.menu.set_enable_delete(enable_delete);
    popup.menu.set_enable_move(enable_move);
    popup.menu.show();
}

/// 右键已放置的细胞器打开菜单；右键空格子或按 Esc 关闭。
pub fn popup_open_close(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<WorldCamera>>,
    config: Res<EditorConfig>,
    costs: Res<ActionCosts>,
    mp: Res<MutationPoints>,
    mode: Res<EditMode>,
    organelles: Query<(Entity, &PlacedOrganelle)>,
    mut popup: ResMut<OrganellePopup>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        if popup.menu.is_visible() {
            popup.close();
        }
        return;
    }

    if !buttons.just_pressed(MouseButton::Right) || *mode != EditMode::Place {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_q.single() else {
        return;
    };
    let Some(cell) = cursor_cell(window, camera, camera_transform, config.cell_px) else {
        return;
    };

    let Some((entity, organelle)) = organelles.iter().find(|(_, o)| o.cell == cell) else {
        if popup.menu.is_visible() {
            popup.close();
        }
        return;
    };

    let count = organelles.iter().count();
    open_popup(&mut popup, entity, organelle, count, *mp, &costs, pos);
    info!(
        "organelle popup open at screen ({:.1}, {:.1}) organelle={} cell={cell}",
        pos.x,
        pos.y,
        organelle.kind.name()
    );
}

/// 执行菜单发出的删除/移动请求。
pub fn apply_popup_requests(
    mut commands: Commands,
    mut deletes: MessageReader<DeleteOrganelleRequested>,
    mut moves: MessageReader<MoveOrganelleRequested>,
    costs: Res<ActionCosts>,
    mut mp: ResMut<MutationPoints>,
    mut mode: ResMut<EditMode>,
    mut popup: ResMut<OrganellePopup>,
    organelles: Query<&PlacedOrganelle>,
) {
    // despawn 在命令缓冲里延迟执行，同一帧的重复请求要自己去重。
    let mut removed: Vec<Entity> = Vec::new();
    for req in deletes.read() {
        if removed.contains(&req.entity) {
            continue;
        }
        let Ok(organelle) = organelles.get(req.entity) else {
            continue;
        };
        if organelle.placed_this_session {
            mp.refund(organelle.kind.mp_cost());
        } else if !mp.try_spend(costs.remove_cost) {
            info!(
                "delete {} refused: mp {} < {}",
                organelle.kind.name(),
                mp.0,
                costs.remove_cost
            );
            continue;
        }

        commands.entity(req.entity).despawn();
        removed.push(req.entity);
        if *mode == EditMode::Moving(req.entity) {
            *mode = EditMode::Place;
        }
        if popup.target == Some(req.entity) {
            popup.target = None;
            popup.menu.set_selected_organelle(None);
        }
        info!(
            "popup cmd: delete {} at {}, mp {}",
            organelle.kind.name(),
            organelle.cell,
            mp.0
        );
    }

    for req in moves.read() {
        if removed.contains(&req.entity) {
            continue;
        }
        let Ok(organelle) = organelles.get(req.entity) else {
            continue;
        };
        *mode = EditMode::Moving(req.entity);
        info!("popup cmd: move {} from {}", organelle.kind.name(), organelle.cell);
    }
}

pub fn popup_clear_consumption(
    buttons: Res<ButtonInput<MouseButton>>,
    mut popup: ResMut<OrganellePopup>,
) {
    if popup.consume_left_click && !buttons.pressed(MouseButton::Left) {
        popup.consume_left_click = false;
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use crate::editor::types::OrganelleKind;

    use super::*;

    const COSTS: ActionCosts = ActionCosts {
        remove_cost: 10,
        move_cost: 15,
    };

    fn requests_app(mp: u32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_message::<DeleteOrganelleRequested>();
        app.add_message::<MoveOrganelleRequested>();
        app.insert_resource(COSTS);
        app.insert_resource(MutationPoints(mp));
        app.init_resource::<EditMode>();
        app.insert_resource(OrganellePopup::new(COSTS));
        app.add_systems(Update, apply_popup_requests);
        app
    }

    fn placed(kind: OrganelleKind) -> PlacedOrganelle {
        PlacedOrganelle {
            kind,
            cell: IVec2::new(3, 3),
            placed_this_session: true,
            moved_this_session: false,
        }
    }

    fn request_delete(app: &mut App, entity: Entity) {
        app.world_mut()
            .resource_mut::<Messages<DeleteOrganelleRequested>>()
            .write(DeleteOrganelleRequested { entity });
    }

    #[test]
    fn flags_follow_count_and_mp() {
        let existing = PlacedOrganelle::existing(OrganelleKind::Nucleus, IVec2::ZERO);
        assert_eq!(popup_flags(&existing, 3, MutationPoints(100), &COSTS), (true, true));
        // 最后一个细胞器不能删除
        assert_eq!(popup_flags(&existing, 1, MutationPoints(100), &COSTS), (false, true));
        assert_eq!(popup_flags(&existing, 3, MutationPoints(12), &COSTS), (true, false));
        assert_eq!(popup_flags(&existing, 3, MutationPoints(0), &COSTS), (false, false));

        let mut moved = existing.clone();
        moved.moved_this_session = true;
        assert_eq!(popup_flags(&moved, 3, MutationPoints(0), &COSTS), (false, true));

        let fresh = placed(OrganelleKind::Cytoplasm);
        assert_eq!(popup_flags(&fresh, 2, MutationPoints(0), &COSTS), (true, false));
    }

    #[test]
    fn open_popup_sets_labels_and_target() {
        let mut popup = OrganellePopup::new(COSTS);
        let entity = World::new().spawn_empty().id();
        let organelle = placed(OrganelleKind::Mitochondrion);
        let screen_pos = Vec2::new(12.0, 30.0);
        open_popup(&mut popup, entity, &organelle, 4, MutationPoints(50), &COSTS, screen_pos);

        assert!(popup.menu.is_visible());
        assert_eq!(popup.target, Some(entity));
        assert_eq!(popup.screen_pos, Vec2::new(12.0, 30.0));
        assert_eq!(popup.menu.selected_organelle().unwrap().name, "Mitochondrion");
        assert!(popup.menu.enable_delete());
        assert!(popup.menu.enable_move());
    }

    #[test]
    fn deleting_new_organelle_refunds_cost() {
        let mut app = requests_app(20);
        let e = app.world_mut().spawn(placed(OrganelleKind::Mitochondrion)).id();
        request_delete(&mut app, e);
        app.update();

        assert!(app.world().get_entity(e).is_err());
        assert_eq!(app.world().resource::<MutationPoints>().0, 65);
    }

    #[test]
    fn deleting_existing_organelle_costs_remove_fee() {
        let mut app = requests_app(20);
        let e = app
            .world_mut()
            .spawn(PlacedOrganelle::existing(OrganelleKind::Nucleus, IVec2::ZERO))
            .id();
        request_delete(&mut app, e);
        app.update();

        assert!(app.world().get_entity(e).is_err());
        assert_eq!(app.world().resource::<MutationPoints>().0, 10);
    }

    #[test]
    fn delete_without_mp_keeps_organelle() {
        let mut app = requests_app(5);
        let e = app
            .world_mut()
            .spawn(PlacedOrganelle::existing(OrganelleKind::Nucleus, IVec2::ZERO))
            .id();
        request_delete(&mut app, e);
        app.update();

        assert!(app.world().get_entity(e).is_ok());
        assert_eq!(app.world().resource::<MutationPoints>().0, 5);
    }

    #[test]
    fn move_request_enters_move_mode() {
        let mut app = requests_app(100);
        let e = app.world_mut().spawn(placed(OrganelleKind::Cytoplasm)).id();
        app.world_mut()
            .resource_mut::<Messages<MoveOrganelleRequested>>()
            .write(MoveOrganelleRequested { entity: e });
        app.update();

        assert_eq!(*app.world().resource::<EditMode>(), EditMode::Moving(e));
        assert_eq!(app.world().resource::<MutationPoints>().0, 100);
    }

    #[test]
    fn deleting_popup_target_clears_selection() {
        let mut app = requests_app(20);
        let organelle = placed(OrganelleKind::Chloroplast);
        let e = app.world_mut().spawn(organelle.clone()).id();
        {
            let mut popup = app.world_mut().resource_mut::<OrganellePopup>();
            open_popup(&mut popup, e, &organelle, 3, MutationPoints(20), &COSTS, Vec2::ZERO);
        }
        request_delete(&mut app, e);
        app.update();

        let popup = app.world().resource::<OrganellePopup>();
        assert_eq!(popup.target, None);
        assert!(popup.menu.selected_organelle().is_none());
    }

    #[test]
    fn escape_closes_open_popup() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Escape);
        app.insert_resource(keys);
        app.init_resource::<ButtonInput<MouseButton>>();
        app.insert_resource(EditorConfig::default());
        app.insert_resource(COSTS);
        app.insert_resource(MutationPoints(100));
        app.init_resource::<EditMode>();
        let mut popup = OrganellePopup::new(COSTS);
        popup.menu.show();
        app.insert_resource(popup);
        app.add_systems(Update, popup_open_close);
        app.update();

        let popup = app.world().resource::<OrganellePopup>();
        assert!(!popup.menu.is_visible());
        assert!(popup.consume_left_click);
    }
}
