// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 服务层直接委托给仓库，仅补充以下逻辑：
/// - 成绩保存前校验引用的学生与科目存在
/// - 课程保存前校验引用的科目存在
/// - 将“未找到”转换为明确的错误
pub mod alumno_service;
pub mod asignatura_service;
pub mod curso_service;
pub mod nota_service;


use crate::domain::repositories::RepositoryError;
use thiserror::Error;

/// 服务层错误类型
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 仓库错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// 请求的实体不存在
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    /// 引用了不存在的实体
    #[error("invalid reference: {0}")]
    InvalidReference(String),
}

impl ServiceError {
    pub(crate) fn not_found(entity: &'static str, id: i64) -> Self {
        ServiceError::NotFound { entity, id }
    }
}
