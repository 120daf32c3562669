// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Option pickers with explicit open/close state.
//!
//! A [`PickerGroup`] owns several pickers (status, priority, assignee, ...)
//! built from injected [`OptionSet`]s. At most one picker is open at a time;
//! an interaction outside every picker dismisses the open one.

use crate::catalog::{OptionItem, OptionSet};
use crate::error::{Error, Result};

/// One picker: its options and current choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker {
    options: OptionSet,
    selected: Option<String>,
}

impl Picker {
    pub fn new(options: OptionSet) -> Self {
        Picker {
            options,
            selected: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn options(&self) -> &[OptionItem] {
        &self.options.options
    }

    /// The chosen option, if any.
    pub fn selected(&self) -> Option<&OptionItem> {
        self.selected
            .as_deref()
            .and_then(|value| self.options.get(value))
    }
}

/// A set of pickers sharing one open slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerGroup {
    pickers: Vec<Picker>,
    open: Option<usize>,
}

impl PickerGroup {
    pub fn new(sets: impl IntoIterator<Item = OptionSet>) -> Self {
        PickerGroup {
            pickers: sets.into_iter().map(Picker::new).collect(),
            open: None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Picker> {
        self.pickers.iter().find(|p| p.name() == name)
    }

    pub fn pickers(&self) -> &[Picker] {
        &self.pickers
    }

    /// Name of the open picker.
    pub fn open_picker(&self) -> Option<&str> {
        self.open
            .and_then(|i| self.pickers.get(i))
            .map(Picker::name)
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open_picker() == Some(name)
    }

    /// Open a picker, closing whichever one was open.
    pub fn open(&mut self, name: &str) -> Result<()> {
        self.open = Some(self.index(name)?);
        Ok(())
    }

    pub fn close(&mut self, name: &str) -> Result<()> {
        let index = self.index(name)?;
        if self.open == Some(index) {
            self.open = None;
        }
        Ok(())
    }

    pub fn toggle(&mut self, name: &str) -> Result<()> {
        let index = self.index(name)?;
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(())
    }

    /// An interaction landed outside every picker.
    pub fn dismiss(&mut self) {
        self.open = None;
    }

    /// Pick `value` in the named picker and close it.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPicker`] for an unknown picker, [`Error::UnknownOption`]
    /// when `value` is not one of its options. The selection is unchanged on
    /// error.
    pub fn choose(&mut self, name: &str, value: &str) -> Result<&OptionItem> {
        let index = self.index(name)?;
        let picker = &mut self.pickers[index];
        picker.options.check(value)?;
        picker.selected = Some(value.to_string());
        if self.open == Some(index) {
            self.open = None;
        }
        tracing::debug!(picker = name, value, "choose option");
        self.pickers[index]
            .selected()
            .ok_or_else(|| Error::UnknownPicker(name.to_string()))
    }

    /// Forget the named picker's selection.
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let index = self.index(name)?;
        self.pickers[index].selected = None;
        Ok(())
    }

    fn index(&self, name: &str) -> Result<usize> {
        self.pickers
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| Error::UnknownPicker(name.to_string()))
    }
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod tests;
