//! Cancellable periodic tasks backed by `setInterval`.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

/// Handle to a running interval
///
/// The handle owns the JavaScript closure. Dropping it, or calling
/// [`PeriodicTask::cancel`], clears the interval; the tick callback can also
/// stop the task by returning `false`.
pub struct PeriodicTask {
    interval_id: Rc<Cell<Option<i32>>>,
    _closure: Closure<dyn FnMut()>,
}

fn clear(interval_id: &Cell<Option<i32>>) {
    if let Some(id) = interval_id.take()
        && let Some(win) = crate::dom::window()
    {
        win.clear_interval_with_handle(id);
    }
}

impl PeriodicTask {
    /// Schedule `tick` every `period_ms` milliseconds.
    ///
    /// Returns `None` when no browser window is available or the interval
    /// cannot be registered.
    pub fn start(period_ms: u32, mut tick: impl FnMut() -> bool + 'static) -> Option<Self> {
        let window = crate::dom::window()?;
        let timeout = i32::try_from(period_ms).ok()?;
        let interval_id = Rc::new(Cell::new(None));
        let own_id = Rc::clone(&interval_id);
        let closure = Closure::wrap(Box::new(move || {
            if !tick() {
                clear(&own_id);
            }
        }) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|err| {
                log::warn!(
                    "Unable to schedule interval: {}",
                    crate::dom::js_error_message(&err)
                );
            })
            .ok()?;
        interval_id.set(Some(id));
        Some(Self {
            interval_id,
            _closure: closure,
        })
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval_id.get().is_some()
    }

    pub fn cancel(&self) {
        clear(&self.interval_id);
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
