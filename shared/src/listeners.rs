use std::any::Any;
use std::fmt;

use log::debug;

use crate::error::Result;

/// Event listeners the open modal depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// `keydown` on the window, closes on Escape
    EscapeKey,
    /// `click` on the window, closes when the backdrop itself was clicked
    BackdropClick,
    AddClick,
    RemoveClick,
    CloseClick,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 5] = [
        ListenerKind::EscapeKey,
        ListenerKind::BackdropClick,
        ListenerKind::AddClick,
        ListenerKind::RemoveClick,
        ListenerKind::CloseClick,
    ];

    /// Whether the listener sits on the window rather than inside the
    /// rendered modal content
    pub fn is_global(self) -> bool {
        matches!(self, ListenerKind::EscapeKey | ListenerKind::BackdropClick)
    }
}

/// An attached listener. Dropping the handle detaches it.
pub struct ListenerHandle {
    kind: ListenerKind,
    _guard: Box<dyn Any>,
}

impl ListenerHandle {
    pub fn new<G: 'static>(kind: ListenerKind, guard: G) -> Self {
        Self {
            kind,
            _guard: Box::new(guard),
        }
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle").field("kind", &self.kind).finish()
    }
}

/// Attaches a listener of the given kind to the platform
pub trait ListenerBinder {
    fn bind(&mut self, kind: ListenerKind) -> Result<ListenerHandle>;
}

/// Owns the listeners attached for one open modal
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    handles: Vec<ListenerHandle>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, handle: ListenerHandle) {
        self.handles.push(handle);
    }

    pub fn contains(&self, kind: ListenerKind) -> bool {
        self.handles.iter().any(|handle| handle.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Detaches every listener, returning how many were attached
    pub fn dispose(&mut self) -> usize {
        let count = self.handles.len();
        self.handles.clear();
        if count > 0 {
            debug!("Detached {} modal listeners", count);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountsDrops(Rc<Cell<usize>>);

    impl Drop for CountsDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_dispose_drops_every_guard() {
        let dropped = Rc::new(Cell::new(0));
        let mut registry = ListenerRegistry::new();
        for kind in ListenerKind::ALL {
            registry.attach(ListenerHandle::new(kind, CountsDrops(dropped.clone())));
        }

        assert_eq!(registry.len(), 5);
        assert!(registry.contains(ListenerKind::BackdropClick));
        assert_eq!(registry.dispose(), 5);
        assert_eq!(dropped.get(), 5);
        assert!(registry.is_empty());
        assert!(!registry.contains(ListenerKind::EscapeKey));
        assert_eq!(registry.dispose(), 0);
    }

    #[test]
    fn test_global_listeners() {
        let global: Vec<ListenerKind> = ListenerKind::ALL.into_iter().filter(|k| k.is_global()).collect();
        assert_eq!(global, vec![ListenerKind::EscapeKey, ListenerKind::BackdropClick]);
    }
}
