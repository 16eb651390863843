// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于 SeaORM 的领域仓库接口实现
pub mod alumno_repo_impl;
pub mod asignatura_repo_impl;
pub mod curso_repo_impl;
pub mod nota_repo_impl;
