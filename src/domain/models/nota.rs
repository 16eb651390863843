// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 成绩实体
///
/// 将一个学生和一个科目关联到一个整数分数。
/// 引用的学生与科目必须已存在。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nota {
    /// 成绩唯一标识符
    #[serde(default)]
    pub id: Option<i64>,
    /// 所属学生ID
    pub alumno_id: i64,
    /// 所属科目ID
    pub asignatura_id: i64,
    /// 分数
    pub nota: i32,
}

impl Nota {
    pub fn new(alumno_id: i64, asignatura_id: i64, nota: i32) -> Self {
        Self {
            id: None,
            alumno_id,
            asignatura_id,
            nota,
        }
    }
}
