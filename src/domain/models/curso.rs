// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::asignatura::Asignatura;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 课程实体
///
/// 与科目为多对多关系。保存时只使用 `asignaturas` 中各科目的 ID，
/// 其余字段在读取时由数据库重新填充。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curso {
    /// 课程唯一标识符
    #[serde(default)]
    pub id: Option<i64>,
    /// 课程名称
    pub nombre: String,
    /// 课程包含的科目集合
    #[serde(default)]
    pub asignaturas: Vec<Asignatura>,
}

impl Curso {
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
            asignaturas: Vec::new(),
        }
    }

    /// 关联科目的 ID 集合（去重、有序），忽略没有 ID 的科目
    pub fn asignatura_ids(&self) -> BTreeSet<i64> {
        self.asignaturas.iter().filter_map(|a| a.id).collect()
    }
}
