// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器从 Extension 中取得仓库，构造对应的服务并返回 JSON 响应
pub mod alumno_handler;
pub mod asignatura_handler;
pub mod curso_handler;
pub mod nota_handler;
