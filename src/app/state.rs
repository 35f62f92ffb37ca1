use std::path::PathBuf;
use std::time::Instant;

use uuid::Uuid;

use crate::autocomplete::AutocompleteState;
use crate::config::Config;
use crate::form::{FormField, FormState, SubmitOutcome, parse_price, submit_item};
use crate::layout::LayoutRegions;
use crate::lists::ListsState;
use crate::notification::NotificationState;
use crate::products::ProductsState;
use crate::remote::{Backend, ListItem};
use crate::store::{ProductCache, storage};

/// Which tab is active at the top level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Lists,
    Archived,
    Products,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Lists => Tab::Archived,
            Tab::Archived => Tab::Products,
            Tab::Products => Tab::Lists,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Lists => Tab::Products,
            Tab::Archived => Tab::Lists,
            Tab::Products => Tab::Archived,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Lists => "Listas",
            Tab::Archived => "Archivadas",
            Tab::Products => "Artículos",
        }
    }

    /// Whether this tab shows archived lists (meaningless for Products).
    pub fn shows_archived(self) -> bool {
        self == Tab::Archived
    }
}

/// Application state
pub struct App {
    pub config: Config,
    pub backend: Box<dyn Backend>,
    pub store: ProductCache,
    pub form: FormState,
    pub autocomplete: AutocompleteState,
    pub notification: NotificationState,
    pub lists: ListsState,
    pub products: ProductsState,
    pub tab: Tab,
    pub regions: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, backend: Box<dyn Backend>, store: ProductCache) -> Self {
        Self {
            config,
            backend,
            store,
            form: FormState::new(),
            autocomplete: AutocompleteState::new(),
            notification: NotificationState::new(),
            lists: ListsState::new(),
            products: ProductsState::new(),
            tab: Tab::default(),
            regions: LayoutRegions::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advance the timed pieces of the UI: the delayed dropdown hide and the
    /// notification auto-dismiss.
    pub fn tick(&mut self, now: Instant) {
        self.autocomplete.tick(now);
        self.notification.tick(now);
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if tab != self.tab {
            self.tab = tab;
            self.lists.reset_cursor();
        }
    }

    /// Re-fetch the user's lists from the backend.
    pub fn refresh_lists(&mut self) {
        match self.backend.fetch_lists() {
            Ok(lists) => {
                log::debug!("Fetched {} lists", lists.len());
                self.lists.set_lists(lists);
            }
            Err(e) => self
                .notification
                .error(format!("No se pudieron cargar las listas: {}", e)),
        }
    }

    /// Open the list under the cursor, fetching its items.
    pub fn open_selected_list(&mut self) {
        let Some(list) = self
            .lists
            .selected_list(self.tab.shows_archived())
            .cloned()
        else {
            return;
        };

        match self.backend.fetch_items(&[list.id]) {
            Ok(items) => self.lists.open(list, items),
            Err(e) => self
                .notification
                .error(format!("No se pudieron cargar los artículos: {}", e)),
        }
    }

    /// Leave the list view, dropping form and suggestion state.
    pub fn close_list(&mut self) {
        self.lists.close();
        self.form.clear();
        self.autocomplete.reset();
    }

    /// Move form focus, driving the name field's blur/focus transitions.
    pub fn focus_form_field(&mut self, field: FormField) {
        let old = self.form.focused;
        if old == field {
            return;
        }

        if old == FormField::Name {
            self.autocomplete.on_blur(Instant::now());
        }
        self.form.set_focus(field);
        if field == FormField::Name {
            self.autocomplete.on_focus();
        }
    }

    /// React to the name field's content changing.
    pub fn on_name_changed(&mut self) {
        let text = self.form.name().to_string();
        self.autocomplete.on_text_change(&text, &self.store);
    }

    /// Submit the add-item form against the open list.
    ///
    /// On success the new item is appended to the open list locally and the
    /// product cache is persisted; on failure the form keeps its input so the
    /// user can retry.
    pub fn submit_form(&mut self) {
        let Some(list_id) = self.lists.opened_list_id() else {
            return;
        };

        // Captured before submit_item clears the form on success.
        let pending = PendingItem::from_form(&self.form, list_id);

        match submit_item(
            &mut self.form,
            &mut self.autocomplete,
            &mut self.store,
            self.backend.as_ref(),
            list_id,
        ) {
            Ok(SubmitOutcome::Submitted) => {
                storage::save_cache(&self.store);
                self.lists.push_item(pending.into_item());
                self.notification.success("Artículo añadido");
            }
            Ok(SubmitOutcome::Blocked) => {}
            Err(e) => self
                .notification
                .error(format!("No se pudo añadir el artículo: {}", e)),
        }
    }

    /// Generate the backup CSV, reporting the outcome as a notification.
    pub fn download_backup(&mut self) {
        let directory = self
            .config
            .export
            .directory
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let today = chrono::Local::now().date_naive();

        match crate::export::export_backup(self.backend.as_ref(), &directory, today) {
            Ok(crate::export::ExportOutcome::Saved(path)) => self
                .notification
                .success(format!("Copia de seguridad descargada: {}", path.display())),
            Ok(crate::export::ExportOutcome::Empty) => {
                self.notification.info("No hay listas para exportar")
            }
            Err(e) => self
                .notification
                .error(format!("No se pudo generar la copia: {}", e)),
        }
    }
}

/// Form values captured before a submit, used to show the new item in the
/// open list without a refetch.
struct PendingItem {
    list_id: Uuid,
    name: String,
    price: f64,
    brand: Option<String>,
    model: Option<String>,
}

impl PendingItem {
    fn from_form(form: &FormState, list_id: Uuid) -> Self {
        Self {
            list_id,
            name: form.name().trim().to_string(),
            price: parse_price(form.price_text()),
            brand: form.brand_value(),
            model: form.model_value(),
        }
    }

    fn into_item(self) -> ListItem {
        ListItem {
            id: Uuid::new_v4(),
            list_id: self.list_id,
            name: self.name,
            price: self.price,
            brand: self.brand,
            model: self.model,
            is_purchased: false,
            purchaser_name: None,
            purchaser_phone: None,
            purchase_date: None,
            is_picked_up: false,
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
