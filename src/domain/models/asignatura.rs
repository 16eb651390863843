// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 科目实体
///
/// 作为课程的引用出现时只需要 `id`，此时 `nombre` 可以省略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asignatura {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: String,
}

impl Asignatura {
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
        }
    }
}
