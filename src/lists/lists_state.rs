use uuid::Uuid;

use crate::remote::{ListItem, ShoppingList};

/// A list the user has opened, with its fetched items.
#[derive(Debug, Clone)]
pub struct OpenedList {
    pub list: ShoppingList,
    pub items: Vec<ListItem>,
}

/// Lists fetched from the backend plus the tab-local cursor.
#[derive(Debug, Default)]
pub struct ListsState {
    lists: Vec<ShoppingList>,
    selected: usize,
    opened: Option<OpenedList>,
}

impl ListsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_lists(&mut self, lists: Vec<ShoppingList>) {
        self.lists = lists;
        self.selected = 0;
    }

    pub fn all(&self) -> &[ShoppingList] {
        &self.lists
    }

    /// Lists shown on the current tab: active or archived.
    pub fn visible(&self, archived: bool) -> Vec<&ShoppingList> {
        self.lists
            .iter()
            .filter(|l| l.is_archived == archived)
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, archived: bool) {
        let count = self.visible(archived).len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Reset the cursor when switching tabs, so it never points past the end
    /// of the other tab's shorter list.
    pub fn reset_cursor(&mut self) {
        self.selected = 0;
    }

    pub fn selected_list(&self, archived: bool) -> Option<&ShoppingList> {
        self.visible(archived).get(self.selected).copied()
    }

    pub fn open(&mut self, list: ShoppingList, items: Vec<ListItem>) {
        self.opened = Some(OpenedList { list, items });
    }

    pub fn close(&mut self) {
        self.opened = None;
    }

    pub fn opened(&self) -> Option<&OpenedList> {
        self.opened.as_ref()
    }

    pub fn opened_list_id(&self) -> Option<Uuid> {
        self.opened.as_ref().map(|o| o.list.id)
    }

    /// Append a freshly added item to the open list without refetching.
    pub fn push_item(&mut self, item: ListItem) {
        if let Some(opened) = &mut self.opened {
            opened.items.push(item);
        }
    }
}

#[cfg(test)]
#[path = "lists_state_tests.rs"]
mod lists_state_tests;
