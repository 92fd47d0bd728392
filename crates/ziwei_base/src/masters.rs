//! Life master (命主) and body master (身主), both keyed by year branch.

use serde::{Deserialize, Serialize};
use ziwei_calendar::Branch;

use crate::star::StarName;

const LIFE_MASTER_TABLE: [StarName; 12] = {
    use StarName::*;
    [
        TanLang, JuMen, LuCun, WenQu, LianZhen, WuQu, PoJun, WuQu, LianZhen, WenQu, LuCun, JuMen,
    ]
};

const BODY_MASTER_TABLE: [StarName; 12] = {
    use StarName::*;
    [
        HuoXing, TianXiang, TianLiang, TianTong, WenChang, TianJi, LingXing, TianXiang, TianLiang,
        TianTong, WenChang, TianJi,
    ]
};

pub const fn life_master(year_branch: Branch) -> StarName {
    LIFE_MASTER_TABLE[year_branch.index() as usize]
}

pub const fn body_master(year_branch: Branch) -> StarName {
    BODY_MASTER_TABLE[year_branch.index() as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Masters {
    pub life: StarName,
    pub body: StarName,
}

impl Masters {
    pub const fn for_year_branch(year_branch: Branch) -> Self {
        Self {
            life: life_master(year_branch),
            body: body_master(year_branch),
        }
    }
}
