//! 编辑器常量文件的保存/读取（RON）。

use std::path::PathBuf;

use organelle_format::EditorConstants;

pub const DEFAULT_CONSTANTS_PATH: &str = "editor/constants.ron";

/// 读取编辑器常量。文件不存在时返回默认值。
pub fn load_constants_from_file(path: &str) -> Result<EditorConstants, String> {
    let path = PathBuf::from(path);
    if !path.exists() {
        return Ok(EditorConstants::default());
    }
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    organelle_format::decode_constants_ron(&text)
}

pub fn save_constants_to_file(constants: &EditorConstants, path: &str) -> Result<(), String> {
    let path = PathBuf::from(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    let text = organelle_format::encode_constants_ron_v2(constants)?;
    std::fs::write(path, text).map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use organelle_core::ActionCosts;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("organelle_editor_{}_{name}", std::process::id()))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_path("missing.ron");
        let loaded = load_constants_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, EditorConstants::default());
    }

    #[test]
    fn saved_constants_load_back() {
        let path = temp_path("nested/constants.ron");
        let constants = EditorConstants {
            costs: ActionCosts {
                remove_cost: 10,
                move_cost: 15,
            },
            starting_mp: 60,
        };
        save_constants_to_file(&constants, path.to_str().unwrap()).unwrap();
        let loaded = load_constants_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, constants);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn broken_file_is_reported() {
        let path = temp_path("broken.ron");
        std::fs::write(&path, "(remove_cost: ").unwrap();
        assert!(load_constants_from_file(path.to_str().unwrap()).is_err());
        let _ = std::fs::remove_file(path);
    }
}
