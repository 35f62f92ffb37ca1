use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Which form field has focus. Tab order mirrors the form layout:
/// name, brand, model, price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Brand,
    Model,
    Price,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Brand,
            FormField::Brand => FormField::Model,
            FormField::Model => FormField::Price,
            FormField::Price => FormField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Price,
            FormField::Brand => FormField::Name,
            FormField::Model => FormField::Brand,
            FormField::Price => FormField::Model,
        }
    }
}

/// The add-item form: four single-line text fields plus the focus marker.
pub struct FormState {
    pub name: TextArea<'static>,
    pub brand: TextArea<'static>,
    pub model: TextArea<'static>,
    pub price: TextArea<'static>,
    pub focused: FormField,
}

fn field_title(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Producto",
        FormField::Brand => "Marca (opcional)",
        FormField::Model => "Modelo (opcional)",
        FormField::Price => "Precio",
    }
}

fn field_block(field: FormField, focused: bool) -> Block<'static> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field_title(field)))
        .border_style(Style::default().fg(color))
}

fn field_textarea(field: FormField, focused: bool) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(field_block(field, focused));
    textarea.set_cursor_line_style(Style::default());
    textarea
}

fn set_text(textarea: &mut TextArea<'static>, text: &str) {
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea.delete_line_by_head();
    textarea.delete_line_by_end();
    textarea.insert_str(text);
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: field_textarea(FormField::Name, true),
            brand: field_textarea(FormField::Brand, false),
            model: field_textarea(FormField::Model, false),
            price: field_textarea(FormField::Price, false),
            focused: FormField::Name,
        }
    }

    pub fn name(&self) -> &str {
        self.name.lines()[0].as_ref()
    }

    pub fn brand(&self) -> &str {
        self.brand.lines()[0].as_ref()
    }

    pub fn model(&self) -> &str {
        self.model.lines()[0].as_ref()
    }

    pub fn price_text(&self) -> &str {
        self.price.lines()[0].as_ref()
    }

    pub fn set_name(&mut self, text: &str) {
        set_text(&mut self.name, text);
    }

    pub fn set_brand(&mut self, text: &str) {
        set_text(&mut self.brand, text);
    }

    pub fn set_model(&mut self, text: &str) {
        set_text(&mut self.model, text);
    }

    pub fn set_price(&mut self, text: &str) {
        set_text(&mut self.price, text);
    }

    pub fn focus_name(&mut self) {
        self.set_focus(FormField::Name);
    }

    /// Move focus, restyling the borders of the old and new field.
    pub fn set_focus(&mut self, field: FormField) {
        let old = self.focused;
        self.field_mut(old).set_block(field_block(old, false));
        self.field_mut(field).set_block(field_block(field, true));
        self.focused = field;
    }

    pub fn field_ref(&self, field: FormField) -> &TextArea<'static> {
        match field {
            FormField::Name => &self.name,
            FormField::Brand => &self.brand,
            FormField::Model => &self.model,
            FormField::Price => &self.price,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut TextArea<'static> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Brand => &mut self.brand,
            FormField::Model => &mut self.model,
            FormField::Price => &mut self.price,
        }
    }

    /// Brand as submitted: trimmed, empty collapsing to None.
    pub fn brand_value(&self) -> Option<String> {
        let trimmed = self.brand().trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Model as submitted: trimmed, empty collapsing to None.
    pub fn model_value(&self) -> Option<String> {
        let trimmed = self.model().trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn clear(&mut self) {
        set_text(&mut self.name, "");
        set_text(&mut self.brand, "");
        set_text(&mut self.model, "");
        set_text(&mut self.price, "");
        self.focus_name();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the price field. Unparseable or negative text counts as 0, never an
/// error; the user should not be blocked by a bad price.
pub fn parse_price(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
