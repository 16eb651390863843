// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 每个接口提供通用的 CRUD 契约（查询全部、按ID查询、保存、按ID删除），
/// 具体实现由基础设施层基于 SeaORM 提供。
///
/// 包含的仓库接口：
/// - 学生仓库（alumno_repository）
/// - 科目仓库（asignatura_repository）
/// - 课程仓库（curso_repository）：额外管理课程与科目的关联
/// - 成绩仓库（nota_repository）
pub mod alumno_repository;
pub mod asignatura_repository;
pub mod curso_repository;
pub mod nota_repository;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一约束或外键约束冲突
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(SqlErr::UniqueConstraintViolation(msg)) => {
                RepositoryError::ConstraintViolation(msg)
            }
            _ => RepositoryError::Database(err),
        }
    }
}
