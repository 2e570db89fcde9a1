//! ActionMenu：已放置细胞器的弹出菜单（删除 / 移动）。
//!
//! 控件由宿主 UI 树拥有，`initialize` 时注入；菜单只负责把状态映射成文案并推送。

use crate::{
    ActionCosts, OrganelleInfo, PopupRequest, delete_cost_label, move_cost_label, name_label,
};

/// 宿主拥有的三个控件：名称标签、删除按钮（含 MP 标签）、移动按钮（含 MP 标签）。
pub trait PopupWidgets {
    fn set_name_text(&mut self, text: &str);
    fn set_delete_cost_text(&mut self, text: &str);
    fn set_delete_disabled(&mut self, disabled: bool);
    fn set_move_cost_text(&mut self, text: &str);
    fn set_move_disabled(&mut self, disabled: bool);
}

/// 外部音效服务。
pub trait ButtonSounds {
    fn play_button_press(&mut self);
}

pub type PopupListener = Box<dyn FnMut(PopupRequest) + Send + Sync>;

pub struct ActionMenu<W> {
    costs: ActionCosts,
    selected: Option<OrganelleInfo>,
    enable_delete: bool,
    enable_move: bool,
    visible: bool,
    widgets: Option<W>,
    listeners: Vec<PopupListener>,
}

impl<W: PopupWidgets> ActionMenu<W> {
    pub fn new(costs: ActionCosts) -> Self {
        Self {
            costs,
            selected: None,
            enable_delete: true,
            enable_move: true,
            visible: false,
            widgets: None,
            listeners: Vec::new(),
        }
    }

    pub fn costs(&self) -> ActionCosts {
        self.costs
    }

    pub fn selected_organelle(&self) -> Option<&OrganelleInfo> {
        self.selected.as_ref()
    }

    pub fn enable_delete(&self) -> bool {
        self.enable_delete
    }

    pub fn enable_move(&self) -> bool {
        self.enable_move
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn widgets(&self) -> Option<&W> {
        self.widgets.as_ref()
    }

    pub fn widgets_mut(&mut self) -> Option<&mut W> {
        self.widgets.as_mut()
    }

    /// 设置选中的细胞器。
    ///
    /// 两个 MP 文案也依赖选中项，这里一并刷新，保证已绑定的控件不会显示旧值。
    pub fn set_selected_organelle(&mut self, organelle: Option<OrganelleInfo>) {
        self.selected = organelle;
        self.update_name_label();
        self.update_delete_button();
        self.update_move_button();
    }

    pub fn set_enable_delete(&mut self, enabled: bool) {
        self.enable_delete = enabled;
        self.update_delete_button();
    }

    pub fn set_enable_move(&mut self, enabled: bool) {
        self.enable_move = enabled;
        self.update_move_button();
    }

    /// 花费由宿主配置；配置重新加载后同步到已显示的文案。
    pub fn set_costs(&mut self, costs: ActionCosts) {
        self.costs = costs;
        self.update_delete_button();
        self.update_move_button();
    }

    /// 绑定控件并立即刷新，覆盖绑定之前的 setter 调用。
    pub fn initialize(&mut self, widgets: W) {
        self.widgets = Some(widgets);
        self.update_name_label();
        self.update_delete_button();
        self.update_move_button();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(PopupRequest) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// 删除被点击：播放按键音，通知监听器，关闭菜单。
    ///
    /// 按钮禁用时什么也不做（菜单保持打开），返回 `None`。
    pub fn on_delete_pressed(&mut self, sounds: &mut dyn ButtonSounds) -> Option<PopupRequest> {
        if !self.enable_delete {
            return None;
        }
        sounds.play_button_press();
        self.emit(PopupRequest::Delete);
        self.hide();
        Some(PopupRequest::Delete)
    }

    /// 移动被点击：通知监听器，关闭菜单。不播放音效。
    pub fn on_move_pressed(&mut self) -> Option<PopupRequest> {
        if !self.enable_move {
            return None;
        }
        self.emit(PopupRequest::Move);
        self.hide();
        Some(PopupRequest::Move)
    }

    fn emit(&mut self, request: PopupRequest) {
        for listener in self.listeners.iter_mut() {
            listener(request);
        }
    }

    fn update_name_label(&mut self) {
        let Some(widgets) = self.widgets.as_mut() else {
            return;
        };
        widgets.set_name_text(name_label(self.selected.as_ref()));
    }

    fn update_delete_button(&mut self) {
        let Some(widgets) = self.widgets.as_mut() else {
            return;
        };
        let text = delete_cost_label(self.selected.as_ref(), &self.costs);
        widgets.set_delete_cost_text(&text);
        widgets.set_delete_disabled(!self.enable_delete);
    }

    fn update_move_button(&mut self) {
        let Some(widgets) = self.widgets.as_mut() else {
            return;
        };
        let text = move_cost_label(self.selected.as_ref(), &self.costs);
        widgets.set_move_cost_text(&text);
        widgets.set_move_disabled(!self.enable_move);
    }
}
