// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Tile grid view model
//!
//! The grid is never patched in place. Every change recomputes a complete
//! `GridView` from the collection and mode flags, and the GTK layer throws
//! away its tiles and builds new ones from it.
//!
//! Icons come from a favicon service keyed on the URL's main domain (the
//! last two hostname labels, so `chat.deepseek.com` and `deepseek.com` share
//! an icon). `FALLBACK_ICON` is shown until the favicon loads and stays if
//! it never does.

use url::{Host, Url};

use crate::core::collection::ShortcutList;
use crate::core::modes::Modes;
use crate::core::types::ShortcutId;

/// Favicon service endpoint
pub const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

/// Pixel size requested from the favicon service
pub const FAVICON_SIZE: u32 = 64;

/// Themed icon name used when no favicon is available
pub const FALLBACK_ICON: &str = "web-browser-symbolic";

/// Where a tile's icon comes from
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconSource {
    /// Remote favicon, if the URL has a usable host
    pub favicon_url: Option<String>,
    /// Themed icon name shown before/instead of the favicon
    pub fallback: &'static str,
}

/// One tile of the grid
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TileView {
    pub id: ShortcutId,
    /// Zero-based position at render time
    pub position: usize,
    pub name: String,
    pub url: String,
    pub icon: IconSource,
    /// Delete/edit controls are shown (edit mode)
    pub editable: bool,
}

/// Everything needed to draw the shortcut area
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridView {
    pub tiles: Vec<TileView>,
    pub edit_mode: bool,
    pub add_mode: bool,
    /// Import/export buttons are only offered in edit mode
    pub show_import_export: bool,
    pub edit_button_label: &'static str,
    pub add_button_label: &'static str,
}

/// Main domain of a hostname: its last two labels
///
/// IP addresses and hosts with two or fewer labels are returned unchanged.
pub fn main_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    match parsed.host()? {
        Host::Domain(domain) => {
            let labels: Vec<&str> = domain.split('.').collect();
            if labels.len() > 2 {
                Some(labels[labels.len() - 2..].join("."))
            } else {
                Some(domain.to_string())
            }
        }
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(format!("[{}]", addr)),
    }
}

/// Favicon URL for a shortcut URL
pub fn favicon_url(url: &str) -> Option<String> {
    main_domain(url)
        .map(|domain| format!("{}?domain={}&sz={}", FAVICON_SERVICE, domain, FAVICON_SIZE))
}

/// Recomputes the full view model
pub fn build_view(list: &ShortcutList, modes: Modes) -> GridView {
    let edit_mode = modes.is_editing();

    let tiles = list
        .iter()
        .enumerate()
        .map(|(position, (id, shortcut))| TileView {
            id,
            position,
            name: shortcut.name.clone(),
            url: shortcut.url.clone(),
            icon: IconSource {
                favicon_url: favicon_url(&shortcut.url),
                fallback: FALLBACK_ICON,
            },
            editable: edit_mode,
        })
        .collect();

    GridView {
        tiles,
        edit_mode,
        add_mode: modes.is_adding(),
        show_import_export: edit_mode,
        edit_button_label: modes.edit_button_label(),
        add_button_label: modes.add_button_label(),
    }
}
