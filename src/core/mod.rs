// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and state for the shortcut grid:
//! - Shortcut and document types
//! - Input validation and URL normalisation
//! - The ordered collection with stable ids
//! - Mode flags, drag sessions and the `Board` state container
//! - The view model the GTK grid is rebuilt from
//!
//! Nothing here touches the filesystem or GTK, so all of it is unit
//! tested without a display server.

pub mod board;
pub mod collection;
pub mod drag;
pub mod modes;
pub mod types;
pub mod validator;
pub mod view;

pub use board::Board;
pub use collection::{ShortcutError, ShortcutList};
pub use modes::Modes;
pub use types::*;
pub use validator::{validate_shortcut, ValidationError};
pub use view::{build_view, GridView, TileView};

#[cfg(test)]
mod tests;
