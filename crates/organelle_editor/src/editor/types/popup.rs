use std::sync::{Arc, Mutex};

use bevy::ecs::message::Message;
use bevy::prelude::*;

use organelle_core::{ActionCosts, ActionMenu, PopupRequest, PopupWidgets};

/// 弹出菜单实体树里需要回写的实体。
#[derive(Clone, Copy, Debug)]
pub struct PopupWidgetIds {
    pub name_label: Entity,
    pub delete_button: Entity,
    pub delete_cost: Entity,
    pub move_button: Entity,
    pub move_cost: Entity,
}

/// `ActionMenu` 的 Bevy 侧控件绑定。
///
/// 菜单在资源里改写文案，`dirty` 置位后由 UI 系统统一写回到实体上的 `Text`。
#[derive(Clone, Debug)]
pub struct PopupWidgetTexts {
    pub ids: PopupWidgetIds,
    pub name: String,
    pub delete_cost: String,
    pub delete_disabled: bool,
    pub move_cost: String,
    pub move_disabled: bool,
    pub dirty: bool,
}

impl PopupWidgetTexts {
    pub fn new(ids: PopupWidgetIds) -> Self {
        Self {
            ids,
            name: String::new(),
            delete_cost: String::new(),
            delete_disabled: false,
            move_cost: String::new(),
            move_disabled: false,
            dirty: true,
        }
    }
}

impl PopupWidgets for PopupWidgetTexts {
    fn set_name_text(&mut self, text: &str) {
        self.name = text.to_string();
        self.dirty = true;
    }

    fn set_delete_cost_text(&mut self, text: &str) {
        self.delete_cost = text.to_string();
        self.dirty = true;
    }

    fn set_delete_disabled(&mut self, disabled: bool) {
        self.delete_disabled = disabled;
        self.dirty = true;
    }

    fn set_move_cost_text(&mut self, text: &str) {
        self.move_cost = text.to_string();
        self.dirty = true;
    }

    fn set_move_disabled(&mut self, disabled: bool) {
        self.move_disabled = disabled;
        self.dirty = true;
    }
}

#[derive(Resource)]
pub struct OrganellePopup {
    pub menu: ActionMenu<PopupWidgetTexts>,
    /// UI 屏幕坐标（原点左上）。
    pub screen_pos: Vec2,
    /// 菜单当前指向的细胞器实体。
    pub target: Option<Entity>,
    /// 用于“点击菜单项/点击空白关闭”时，避免同一帧触发画布左键操作。
    pub consume_left_click: bool,
    /// 菜单监听器收到的请求，等 UI 系统转成 message。
    pending: Arc<Mutex<Vec<PopupRequest>>>,
}

impl OrganellePopup {
    pub fn new(costs: ActionCosts) -> Self {
        let pending = Arc::new(Mutex::new(Vec::new()));
        let mut menu = ActionMenu::new(costs);
        let sink = Arc::clone(&pending);
        menu.subscribe(move |request| {
            if let Ok(mut queue) = sink.lock() {
                queue.push(request);
            }
        });
        Self {
            menu,
            screen_pos: Vec2::ZERO,
            target: None,
            consume_left_click: false,
            pending,
        }
    }

    /// 取出监听器收到的请求（按发出顺序）。
    pub fn drain_requests(&mut self) -> Vec<PopupRequest> {
        match self.pending.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }

    pub fn close(&mut self) {
        self.menu.hide();
        self.consume_left_click = true;
    }
}

impl Default for OrganellePopup {
    fn default() -> Self {
        Self::new(ActionCosts::default())
    }
}

#[derive(Component)]
pub struct PopupRoot;

#[derive(Component)]
pub struct PopupBackdrop;

#[derive(Component)]
pub struct PopupNameLabel;

#[derive(Component)]
pub struct PopupCostLabel;

#[derive(Component, Clone, Copy)]
pub struct PopupItem(pub PopupRequest);

#[derive(Component)]
pub struct PopupItemDisabled;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteOrganelleRequested {
    pub entity: Entity,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOrganelleRequested {
    pub entity: Entity,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl organelle_core::ButtonSounds for Silent {
        fn play_button_press(&mut self) {}
    }

    #[test]
    fn presses_reach_the_queue_through_the_listener() {
        let mut popup = OrganellePopup::default();
        popup.menu.show();
        popup.menu.on_delete_pressed(&mut Silent);
        popup.menu.show();
        popup.menu.on_move_pressed();

        assert_eq!(popup.drain_requests(), vec![PopupRequest::Delete, PopupRequest::Move]);
        assert!(popup.drain_requests().is_empty());
    }

    #[test]
    fn disabled_press_queues_nothing() {
        let mut popup = OrganellePopup::default();
        popup.menu.set_enable_delete(false);
        popup.menu.show();
        popup.menu.on_delete_pressed(&mut Silent);
        assert!(popup.drain_requests().is_empty());
        assert!(popup.menu.is_visible());
    }
}
