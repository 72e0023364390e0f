//! 服务水平（LOS）评级

use std::fmt;

use serde::{Deserialize, Serialize};

/// LOS 等级，A 最好，F 最差；`Ord` 按由好到差排序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LosGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl LosGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LosGrade::A => "A",
            LosGrade::B => "B",
            LosGrade::C => "C",
            LosGrade::D => "D",
            LosGrade::E => "E",
            LosGrade::F => "F",
        }
    }
}

impl fmt::Display for LosGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 人均面积（sqft/pax）；站台为空时取面积本身。
pub fn space_per_pax(count: f64, area_sqft: f64) -> f64 {
    if count > 0.0 { area_sqft / count } else { area_sqft }
}

/// 站台拥挤度评级（输入为人均面积）。
pub fn crowding_grade(space_per_pax: f64) -> LosGrade {
    if space_per_pax > 35.0 {
        LosGrade::A
    } else if space_per_pax > 25.0 {
        LosGrade::B
    } else if space_per_pax > 15.0 {
        LosGrade::C
    } else if space_per_pax > 10.0 {
        LosGrade::D
    } else if space_per_pax > 5.0 {
        LosGrade::E
    } else {
        LosGrade::F
    }
}

/// 上行疏散评级（输入为 pax/ft/min）。
pub fn egress_grade(flow_per_ft_min: f64) -> LosGrade {
    if flow_per_ft_min <= 5.0 {
        LosGrade::A
    } else if flow_per_ft_min <= 7.0 {
        LosGrade::B
    } else if flow_per_ft_min <= 9.5 {
        LosGrade::C
    } else if flow_per_ft_min <= 13.0 {
        LosGrade::D
    } else if flow_per_ft_min <= 17.0 {
        LosGrade::E
    } else {
        LosGrade::F
    }
}
