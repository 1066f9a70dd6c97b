//! Single-event dispatcher for "categories changed".

use disaster_core::category::Category;

/// The one thing the legend needs from the event bus.
pub trait SelectionPublisher {
    /// Announce the full current selection. Returns `false` if nobody listened.
    fn publish(&mut self, selected: &[Category]) -> bool;
}

type FilterListener = Box<dyn FnMut(&[Category])>;

/// Synchronous dispatcher with exactly one registration point.
///
/// The listener runs to completion inside [`publish`](SelectionPublisher::publish).
#[derive(Default)]
pub struct CategoryDispatcher {
    listener: Option<FilterListener>,
}

impl CategoryDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the filter listener, replacing any previous one.
    pub fn on_filter_categories(&mut self, listener: impl FnMut(&[Category]) + 'static) {
        if self.listener.is_some() {
            log::warn!("[Disasters] dispatch: replacing existing filterCategories listener");
        }
        self.listener = Some(Box::new(listener));
    }
}

impl SelectionPublisher for CategoryDispatcher {
    fn publish(&mut self, selected: &[Category]) -> bool {
        match self.listener.as_mut() {
            Some(listener) => {
                log::debug!("[Disasters] dispatch: filterCategories {:?}", selected);
                listener(selected);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for CategoryDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryDispatcher")
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
