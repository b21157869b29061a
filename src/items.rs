//! Transient item list editor.
//!
//! Holds an ordered list of text items for the lifetime of an authenticated
//! view. Nothing here is persisted. Every operation is total: invalid input
//! (a blank add, an out-of-range index) leaves the editor unchanged.

/// The item currently being edited and its in-progress text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    pub index: usize,
    pub scratch: String,
}

/// Item list plus the two text drafts that feed it.
///
/// At most one item is in edit mode at a time, and the edit cursor never
/// points past the end of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEditor {
    items: Vec<String>,
    draft: String,
    edit: Option<EditCursor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The new-item input changed
    DraftChanged(String),
    /// Append the current draft when it is not blank
    AddItem,
    DeleteItem(usize),
    /// Put the item at this index into edit mode
    BeginEdit(usize),
    /// The edit input changed
    ScratchChanged(String),
    /// Write the scratch back to this index and leave edit mode
    SaveEdit(usize),
}

impl ItemEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit(&self) -> Option<&EditCursor> {
        self.edit.as_ref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_editing(&self, index: usize) -> bool {
        self.edit.as_ref().is_some_and(|edit| edit.index == index)
    }

    fn add_item(&mut self) {
        if self.draft.trim().is_empty() {
            return;
        }
        self.items.push(std::mem::take(&mut self.draft));
    }

    fn delete_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items.remove(index);

        // Keep the edit attached to the same item, or drop it with the item.
        match self.edit.as_ref().map(|edit| edit.index) {
            Some(edited) if edited == index => self.edit = None,
            Some(edited) if edited > index => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.index -= 1;
                }
            }
            _ => {}
        }
    }

    fn begin_edit(&mut self, index: usize) {
        if let Some(item) = self.items.get(index) {
            self.edit = Some(EditCursor {
                index,
                scratch: item.clone(),
            });
        }
    }

    fn save_edit(&mut self, index: usize) {
        if !self.is_editing(index) {
            return;
        }
        if let Some(edit) = self.edit.take() {
            if let Some(item) = self.items.get_mut(index) {
                *item = edit.scratch;
            }
        }
    }
}

/// Apply one event to the editor.
pub fn reduce(mut editor: ItemEditor, event: EditorEvent) -> ItemEditor {
    match event {
        EditorEvent::DraftChanged(text) => editor.draft = text,
        EditorEvent::AddItem => editor.add_item(),
        EditorEvent::DeleteItem(index) => editor.delete_item(index),
        EditorEvent::BeginEdit(index) => editor.begin_edit(index),
        EditorEvent::ScratchChanged(text) => {
            if let Some(edit) = editor.edit.as_mut() {
                edit.scratch = text;
            }
        }
        EditorEvent::SaveEdit(index) => editor.save_edit(index),
    }
    editor
}
