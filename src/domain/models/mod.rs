// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 学生（alumno）
/// - 科目（asignatura）
/// - 课程（curso）：与科目多对多
/// - 成绩（nota）：关联学生与科目的分数
///
/// 这些模型同时作为 HTTP 接口的 JSON 表示。
pub mod alumno;
pub mod asignatura;
pub mod curso;
pub mod nota;
