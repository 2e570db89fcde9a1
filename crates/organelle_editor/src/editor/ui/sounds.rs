//! UI 音效（按钮按下）。

use bevy::prelude::*;

use organelle_core::ButtonSounds;

use crate::editor::types::{UiSounds, BUTTON_PRESS_SOUND_PATH};

/// 启动时加载 UI 音效。
pub fn load_ui_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    let button_press: Handle<AudioSource> = asset_server.load(BUTTON_PRESS_SOUND_PATH);
    commands.insert_resource(UiSounds { button_press });
}

/// 把菜单的按键音转成一次性的 `AudioPlayer` 实体。
pub(super) struct CommandSounds<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub sounds: Option<&'a UiSounds>,
}

impl ButtonSounds for CommandSounds<'_, '_, '_> {
    fn play_button_press(&mut self) {
        let Some(sounds) = self.sounds else {
            return;
        };
        self.commands.spawn((
            AudioPlayer::new(sounds.button_press.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}
