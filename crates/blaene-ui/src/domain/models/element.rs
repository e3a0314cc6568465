#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

/// Handle to one element on the page.
pub trait Element: Send {
    /// `data-*` attribute, keyed without the prefix (`"price"` for `data-price`).
    fn dataset(&self, key: &str) -> Option<String>;
    /// Current value of an input element.
    fn value(&self) -> Option<String>;
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn style(&self, property: &str) -> Option<String>;
    /// An empty value clears the inline property.
    fn set_style(&mut self, property: &str, value: &str);
    fn set_disabled(&mut self, disabled: bool);
    fn scroll_into_view(&mut self, behavior: ScrollBehavior, block: ScrollBlock);
    /// Restore a form's fields to their initial values.
    fn reset(&mut self);
    /// Detach the element from the page.
    fn remove(&mut self);

    /// Returns `true` when the class is present afterwards.
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            return false;
        }

        self.add_class(class);
        return true;
    }
}

pub type ElementBox = Box<dyn Element>;
