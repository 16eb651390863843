// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 学生实体
///
/// `id` 在新建时为空，保存后由数据库分配且不可再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alumno {
    /// 学生唯一标识符
    #[serde(default)]
    pub id: Option<i64>,
    /// 学生姓名
    pub nombre: String,
}

impl Alumno {
    /// 创建尚未持久化的学生
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
        }
    }
}
