use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use reelex_core::CatalogState;
use reelex_model::{MovieRecord, PosterSize, poster_url};

/// Session state owned by the event loop: the catalog plus UI-only bits
/// (selection cursor, quit flag).
#[derive(Debug)]
pub struct App {
    pub catalog: CatalogState,
    image_base: String,
    selected: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(image_base: String) -> Self {
        Self {
            catalog: CatalogState::new(),
            image_base,
            selected: 0,
            should_quit: false,
        }
    }

    /// Selection cursor within the visible page, clamped to the slice.
    pub fn selected(&self) -> usize {
        let len = self.catalog.visible().len();
        self.selected.min(len.saturating_sub(1))
    }

    /// The movie under the selection cursor, if the page is non-empty.
    pub fn selected_movie(&self) -> Option<&MovieRecord> {
        self.catalog.visible().get(self.selected())
    }

    pub fn poster_url_for(&self, movie: &MovieRecord) -> String {
        poster_url(
            &self.image_base,
            PosterSize::W342,
            movie.poster_path.as_deref(),
        )
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') = key.code {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.catalog.set_sort_key(self.catalog.sort_key().next());
                self.selected = 0;
            }
            KeyCode::BackTab => {
                self.catalog.set_sort_key(self.catalog.sort_key().prev());
                self.selected = 0;
            }
            KeyCode::Left => {
                self.catalog.prev_page();
                self.selected = 0;
            }
            KeyCode::Right => {
                self.catalog.next_page();
                self.selected = 0;
            }
            KeyCode::Up => {
                self.selected = self.selected().saturating_sub(1);
            }
            KeyCode::Down => {
                let len = self.catalog.visible().len();
                if self.selected() + 1 < len {
                    self.selected = self.selected() + 1;
                }
            }
            KeyCode::Backspace => {
                let mut term = self.catalog.search_term().to_string();
                if term.pop().is_some() {
                    self.catalog.set_search_term(term);
                    self.selected = 0;
                }
            }
            KeyCode::Char(c) => {
                let mut term = self.catalog.search_term().to_string();
                term.push(c);
                self.catalog.set_search_term(term);
                self.selected = 0;
            }
            _ => {}
        }
    }
}
