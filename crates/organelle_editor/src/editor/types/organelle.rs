use bevy::prelude::*;

use organelle_core::OrganelleInfo;

/// 可放置的细胞器种类。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrganelleKind {
    Cytoplasm,
    Nucleus,
    Mitochondrion,
    Chloroplast,
}

impl OrganelleKind {
    /// 数字键 1..=4 的放置顺序。
    pub const ALL: [OrganelleKind; 4] = [
        OrganelleKind::Cytoplasm,
        OrganelleKind::Nucleus,
        OrganelleKind::Mitochondrion,
        OrganelleKind::Chloroplast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Cytoplasm => "Cytoplasm",
            Self::Nucleus => "Nucleus",
            Self::Mitochondrion => "Mitochondrion",
            Self::Chloroplast => "Chloroplast",
        }
    }

    pub fn mp_cost(self) -> u32 {
        match self {
            Self::Cytoplasm => 22,
            Self::Nucleus => 70,
            Self::Mitochondrion => 45,
            Self::Chloroplast => 55,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Cytoplasm => Color::srgb(0.55, 0.75, 0.85),
            Self::Nucleus => Color::srgb(0.75, 0.45, 0.85),
            Self::Mitochondrion => Color::srgb(0.9, 0.55, 0.3),
            Self::Chloroplast => Color::srgb(0.35, 0.8, 0.4),
        }
    }
}

/// 网格上一个已放置的细胞器。
#[derive(Component, Clone, Debug)]
pub struct PlacedOrganelle {
    pub kind: OrganelleKind,
    pub cell: IVec2,
    pub placed_this_session: bool,
    pub moved_this_session: bool,
}

impl PlacedOrganelle {
    /// 已有细胞（进入编辑器前就存在）的细胞器。
    pub fn existing(kind: OrganelleKind, cell: IVec2) -> Self {
        Self {
            kind,
            cell,
            placed_this_session: false,
            moved_this_session: false,
        }
    }

    /// 菜单用的快照。
    pub fn info(&self) -> OrganelleInfo {
        OrganelleInfo {
            name: self.kind.name().to_string(),
            mp_cost: self.kind.mp_cost(),
            placed_this_session: self.placed_this_session,
            moved_this_session: self.moved_this_session,
        }
    }
}

/// 本次编辑剩余的 MP。
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MutationPoints(pub u32);

impl MutationPoints {
    /// 扣除 `amount`；不够时不扣并返回 false。
    pub fn try_spend(&mut self, amount: u32) -> bool {
        match self.0.checked_sub(amount) {
            Some(left) => {
                self.0 = left;
                true
            }
            None => false,
        }
    }

    pub fn refund(&mut self, amount: u32) {
        self.0 = self.0.saturating_add(amount);
    }
}

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Place,
    /// 等待左键选择目标格子。
    Moving(Entity),
}
