use bevy::prelude::*;

pub const BUTTON_PRESS_SOUND_PATH: &str = "sounds/button_press.ogg";

#[derive(Component)]
pub struct HudText;

/// UI 音效句柄。测试或无音频环境下不存在，此时按钮静音。
#[derive(Resource, Clone)]
pub struct UiSounds {
    pub button_press: Handle<AudioSource>,
}
