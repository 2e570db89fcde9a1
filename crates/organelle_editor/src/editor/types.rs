//! 资源（Resource）、组件（Component）与消息（Message）的集中定义。
//!
//! 该模块采用“门面 + 子模块”结构，跨模块共享的数据类型统一从这里导出。

mod camera;
mod config;
mod organelle;
mod popup;
mod ui;

pub use camera::WorldCamera;
pub use config::EditorConfig;
pub use organelle::{EditMode, MutationPoints, OrganelleKind, PlacedOrganelle};
pub use popup::{
    DeleteOrganelleRequested, MoveOrganelleRequested, OrganellePopup, PopupBackdrop, PopupCostLabel,
    PopupItem, PopupItemDisabled, PopupNameLabel, PopupRoot, PopupWidgetIds, PopupWidgetTexts,
};
pub use ui::{HudText, UiSounds, BUTTON_PRESS_SOUND_PATH};
