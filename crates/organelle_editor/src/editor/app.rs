//! 编辑器应用装配（Bevy App 构建与系统注册）。

use bevy::prelude::*;

use organelle_core::ActionCosts;

use super::{
	paths::workspace_assets_dir,
	types::{
		DeleteOrganelleRequested, EditMode, EditorConfig, MoveOrganelleRequested, MutationPoints,
		OrganellePopup,
	},
	ui,
	world,
	UI_BG,
};

/// 运行编辑器。
pub fn run() {
	let assets_dir = workspace_assets_dir();

	App::new()
		.insert_resource(ClearColor(UI_BG))
		.add_plugins(
			DefaultPlugins
				.set(AssetPlugin {
					// 用绝对路径避免 cwd 差异导致找不到资源
					file_path: assets_dir.to_string_lossy().to_string(),
					..default()
				})
				.set(WindowPlugin {
					primary_window: Some(Window {
						title: "Organelle Editor".to_string(),
						..default()
					}),
					..default()
				}),
		)
		// --- Resources ---
		.init_resource::<EditorConfig>()
		.init_resource::<ActionCosts>()
		.init_resource::<MutationPoints>()
		.init_resource::<EditMode>()
		.init_resource::<OrganellePopup>()
		// --- Messages ---
		.add_message::<DeleteOrganelleRequested>()
		.add_message::<MoveOrganelleRequested>()
		.add_systems(
			Startup,
			(
				// 常量要先于菜单绑定读取，保证第一次显示的文案就是配置值。
				world::load_editor_constants,
				world::setup_world,
				ui::load_ui_sounds,
				ui::setup_hud,
				ui::setup_organelle_popup,
				world::spawn_starting_organelles,
			)
				.chain(),
		)
		.add_systems(
			Update,
			(
				(
					// --- UI: popup ---
					ui::popup_item_styles,
					ui::popup_backdrop_click,
					ui::popup_item_click,
				)
					.chain(),
				(
					// --- World: popup open/close + requests + tools ---
					world::popup_open_close,
					world::apply_popup_requests,
					world::place_with_keys,
					world::move_with_mouse,
					world::sync_organelle_transforms,
					world::popup_clear_consumption,
				)
					.chain(),
				(
					// --- UI: write back ---
					ui::popup_sync,
					ui::popup_apply_widget_texts,
					ui::update_hud_text,
				)
					.chain(),
			)
				.chain(),
		)
		.run();
}
