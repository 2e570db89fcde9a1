#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use organelle_core::ActionCosts;

/// 编辑器里没有存档时的初始 MP。
pub const DEFAULT_STARTING_MP: u32 = 100;

/// 编辑器常量（操作花费 + 初始 MP）。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorConstants {
    pub costs: ActionCosts,
    pub starting_mp: u32,
}

impl Default for EditorConstants {
    fn default() -> Self {
        Self {
            costs: ActionCosts::default(),
            starting_mp: DEFAULT_STARTING_MP,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ConstantsFileV1 {
    remove_cost: u32,
    move_cost: u32,
}

#[derive(Serialize, Deserialize)]
struct ConstantsFileV2 {
    /// 文件版本号，便于以后扩展字段时区分。
    version: u32,
    costs: ActionCosts,
    starting_mp: u32,
}

pub fn encode_constants_ron_v2(constants: &EditorConstants) -> Result<String, String> {
    let v2 = ConstantsFileV2 {
        version: 2,
        costs: constants.costs,
        starting_mp: constants.starting_mp,
    };

    ron::ser::to_string_pretty(&v2, ron::ser::PrettyConfig::default()).map_err(|e| e.to_string())
}

pub fn decode_constants_ron(text: &str) -> Result<EditorConstants, String> {
    // 最新版本：V2（含 starting_mp）
    if let Ok(v2) = ron::from_str::<ConstantsFileV2>(text) {
        return Ok(EditorConstants {
            costs: v2.costs,
            starting_mp: v2.starting_mp,
        });
    }

    // 兼容 V1：只有两个花费
    let v1 = ron::from_str::<ConstantsFileV1>(text).map_err(|e| e.to_string())?;
    Ok(EditorConstants {
        costs: ActionCosts {
            remove_cost: v1.remove_cost,
            move_cost: v1.move_cost,
        },
        starting_mp: DEFAULT_STARTING_MP,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_v1_file_with_default_starting_mp() {
        let text = "(remove_cost: 12, move_cost: 4)";
        let c = decode_constants_ron(text).unwrap();
        assert_eq!(c.costs.remove_cost, 12);
        assert_eq!(c.costs.move_cost, 4);
        assert_eq!(c.starting_mp, DEFAULT_STARTING_MP);
    }

    #[test]
    fn reads_v2_file() {
        let text = "(version: 2, costs: (remove_cost: 10, move_cost: 15), starting_mp: 80)";
        let c = decode_constants_ron(text).unwrap();
        assert_eq!(
            c,
            EditorConstants {
                costs: ActionCosts {
                    remove_cost: 10,
                    move_cost: 15
                },
                starting_mp: 80,
            }
        );
    }

    #[test]
    fn written_file_is_v2() {
        let text = encode_constants_ron_v2(&EditorConstants::default()).unwrap();
        assert!(text.contains("version: 2"));
        assert_eq!(decode_constants_ron(&text).unwrap(), EditorConstants::default());
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(decode_constants_ron("not ron at all").is_err());
        assert!(decode_constants_ron("(remove_cost: -1, move_cost: 2)").is_err());
    }
}
