use std::path::Path;

use bevy::prelude::*;

use organelle_core::ActionCosts;
use organelle_format::EditorConstants;

use crate::editor::persistence::{load_constants_from_file, save_constants_to_file};
use crate::editor::types::{EditorConfig, MutationPoints, OrganellePopup};

/// 启动时读取编辑器常量。
///
/// 文件不存在时写出一份默认值，方便手动修改；读取失败时使用默认值。
pub fn load_editor_constants(
    config: Res<EditorConfig>,
    mut costs: ResMut<ActionCosts>,
    mut mp: ResMut<MutationPoints>,
    mut popup: ResMut<OrganellePopup>,
) {
    let path = config.constants_path.as_str();
    let constants = if Path::new(path).exists() {
        match load_constants_from_file(path) {
            Ok(c) => {
                info!("loaded editor constants: {path}");
                c
            }
            Err(err) => {
                warn!("load editor constants failed: {err}");
                EditorConstants::default()
            }
        }
    } else {
        let defaults = EditorConstants::default();
        match save_constants_to_file(&defaults, path) {
            Ok(()) => info!("wrote default editor constants: {path}"),
            Err(err) => warn!("write editor constants failed: {err}"),
        }
        defaults
    };

    *costs = constants.costs;
    *mp = MutationPoints(constants.starting_mp);
    popup.menu.set_costs(constants.costs);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use organelle_format::DEFAULT_STARTING_MP;

    use crate::editor::CELL_PX;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("organelle_constants_{}_{name}", std::process::id()))
    }

    fn constants_app(path: &Path) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(EditorConfig {
            cell_px: CELL_PX,
            constants_path: path.to_string_lossy().to_string(),
        });
        app.insert_resource(ActionCosts {
            remove_cost: 1,
            move_cost: 1,
        });
        app.insert_resource(MutationPoints(0));
        app.insert_resource(OrganellePopup::new(ActionCosts {
            remove_cost: 1,
            move_cost: 1,
        }));
        app.add_systems(Startup, load_editor_constants);
        app
    }

    #[test]
    fn missing_file_is_written_with_defaults() {
        let path = temp_path("missing/constants.ron");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        let mut app = constants_app(&path);
        app.update();

        assert!(path.exists());
        assert_eq!(*app.world().resource::<ActionCosts>(), ActionCosts::default());
        assert_eq!(app.world().resource::<MutationPoints>().0, DEFAULT_STARTING_MP);
        let popup = app.world().resource::<OrganellePopup>();
        assert_eq!(popup.menu.costs(), ActionCosts::default());

        let reloaded = load_constants_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(reloaded, EditorConstants::default());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn flat_file_values_reach_resources_and_menu() {
        let path = temp_path("flat.ron");
        std::fs::write(&path, "(remove_cost: 7, move_cost: 3)").unwrap();

        let mut app = constants_app(&path);
        app.update();

        let expected = ActionCosts {
            remove_cost: 7,
            move_cost: 3,
        };
        assert_eq!(*app.world().resource::<ActionCosts>(), expected);
        assert_eq!(app.world().resource::<MutationPoints>().0, DEFAULT_STARTING_MP);
        assert_eq!(app.world().resource::<OrganellePopup>().menu.costs(), expected);
        let _ = std::fs::remove_file(&path);
    }
}
