use crate::models::{Language, StudyMode};

/// Cursor over a fixed list of menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuState {
    pub(crate) selected: usize,
    len: usize,
}

impl MenuState {
    pub(crate) fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub(crate) fn with_selected(len: usize, selected: usize) -> Self {
        let mut menu = Self::new(len);
        menu.selected = selected.min(len.saturating_sub(1));
        menu
    }

    /// Move the cursor, stopping at either end of the list.
    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.len == 0 {
            return;
        }
        let last = self.len as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }
}

/// Menu of languages shown at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LanguageMenu {
    pub(crate) menu: MenuState,
}

impl LanguageMenu {
    pub(crate) fn new() -> Self {
        Self {
            menu: MenuState::new(Language::ALL.len()),
        }
    }

    /// Menu with the cursor resting on `language`, used when backing out of
    /// the mode menu.
    pub(crate) fn focused_on(language: Language) -> Self {
        let idx = Language::ALL
            .iter()
            .position(|candidate| *candidate == language)
            .unwrap_or(0);
        Self {
            menu: MenuState::with_selected(Language::ALL.len(), idx),
        }
    }

    pub(crate) fn current(&self) -> Language {
        Language::ALL[self.menu.selected]
    }
}

/// Menu of study modes for an already chosen language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModeMenu {
    pub(crate) language: Language,
    pub(crate) menu: MenuState,
}

impl ModeMenu {
    pub(crate) fn new(language: Language) -> Self {
        Self {
            language,
            menu: MenuState::new(StudyMode::ALL.len()),
        }
    }

    pub(crate) fn focused_on(language: Language, mode: StudyMode) -> Self {
        let idx = StudyMode::ALL
            .iter()
            .position(|candidate| *candidate == mode)
            .unwrap_or(0);
        Self {
            language,
            menu: MenuState::with_selected(StudyMode::ALL.len(), idx),
        }
    }

    pub(crate) fn current(&self) -> StudyMode {
        StudyMode::ALL[self.menu.selected]
    }
}
