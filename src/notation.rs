// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod item;
mod parser;

pub use item::Item;
pub use parser::NotationParser;
