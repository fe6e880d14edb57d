#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Selection and hover state for the district map.
//!
//! [`ViewState`] is owned by the top-level view and only changes through
//! its transition methods (or [`ViewState::apply`] with a [`ViewEvent`]).
//! The displayed district is never stored: it is derived from the current
//! fields on every read, so no caller can observe a stale combination.
//!
//! Precedence: a selected district beats a hovered one, and the hovered
//! district only shows while nothing is selected. With neither set, the
//! whole-city aggregate record is displayed.

use oslo_market_district::{Catalog, DistrictRecord};
use serde::{Deserialize, Serialize};

/// Sticky selection plus transient hover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// District the user clicked, if any.
    #[serde(default)]
    pub selected_id: Option<String>,
    /// District under the pointer, if any.
    #[serde(default)]
    pub hovered_id: Option<String>,
}

/// Pointer interactions forwarded by the map or the district list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewEvent {
    /// Click on a district. Clicking the selected district again clears
    /// the selection.
    Select {
        /// Clicked district id.
        id: String,
    },
    /// Click outside every district region.
    SelectNone,
    /// Pointer entered or moved over a district region.
    Hover {
        /// Hovered district id.
        id: String,
    },
    /// Pointer left the district regions.
    HoverEnd,
}

/// Highlight command sent back to the map so it can re-style regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    /// Region drawn as selected.
    pub selected: Option<String>,
    /// Region drawn as hovered.
    pub hovered: Option<String>,
}

impl ViewState {
    /// Creates an empty state: nothing selected, nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected_id: None,
            hovered_id: None,
        }
    }

    /// Toggles selection of `id`.
    pub fn select(&mut self, id: &str) {
        if self.selected_id.as_deref() == Some(id) {
            log::trace!("Deselecting district {id}");
            self.selected_id = None;
        } else {
            log::trace!("Selecting district {id}");
            self.selected_id = Some(id.to_string());
        }
    }

    /// Clears the selection unconditionally.
    pub fn select_none(&mut self) {
        self.selected_id = None;
    }

    /// Marks `id` as hovered.
    pub fn hover(&mut self, id: &str) {
        self.hovered_id = Some(id.to_string());
    }

    /// Clears the hovered district.
    pub fn hover_end(&mut self) {
        self.hovered_id = None;
    }

    /// Applies one event.
    pub fn apply(&mut self, event: &ViewEvent) {
        match event {
            ViewEvent::Select { id } => self.select(id),
            ViewEvent::SelectNone => self.select_none(),
            ViewEvent::Hover { id } => self.hover(id),
            ViewEvent::HoverEnd => self.hover_end(),
        }
    }

    /// Whether a district is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Id that decides what is displayed: the selection if set, else the
    /// hovered district.
    #[must_use]
    pub fn displayed_id(&self) -> Option<&str> {
        self.selected_id
            .as_deref()
            .or(self.hovered_id.as_deref())
    }

    /// Returns the record to render in the stats panel.
    ///
    /// Unknown ids resolve to the aggregate record, as does an empty state.
    #[must_use]
    pub fn displayed<'a>(&self, catalog: &'a Catalog) -> &'a DistrictRecord {
        catalog.resolve(self.displayed_id())
    }

    /// Returns the highlight command for the map.
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        Highlight {
            selected: self.selected_id.clone(),
            hovered: self.hovered_id.clone(),
        }
    }
}
