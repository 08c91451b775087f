use crafto_core::flows::ViewCell;
use dioxus::prelude::*;

/// Lets the core flows drive a screen model held in a signal.
#[derive(Clone, Copy)]
pub struct SignalCell<T: 'static> {
    signal: Signal<T>,
}

impl<T: 'static> SignalCell<T> {
    pub const fn new(signal: Signal<T>) -> Self {
        Self { signal }
    }
}

impl<T: 'static> ViewCell<T> for SignalCell<T> {
    fn read_with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&*self.signal.peek())
    }

    fn update<R>(&self, write: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = self.signal;
        let mut value = signal.write();
        write(&mut *value)
    }
}
