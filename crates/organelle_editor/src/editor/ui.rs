//! 编辑器 UI：右键弹出菜单 + HUD + UI 音效。

mod hud;
mod popup;
mod sounds;

pub use hud::{setup_hud, update_hud_text};
pub use popup::{
    popup_apply_widget_texts, popup_backdrop_click, popup_item_click, popup_item_styles, popup_sync,
    setup_organelle_popup,
};
pub use sounds::load_ui_sounds;
