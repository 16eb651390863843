// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod alumnos_api_test;
pub mod asignaturas_api_test;
pub mod notas_api_test;
