use std::borrow::Cow;
use std::fmt::Debug;
use std::rc::Rc;

/// An event delivered to bound handlers by [`Element::dispatch`](crate::Element::dispatch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    name: String,
    value: Option<String>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Attach a payload, such as the current value of a form control.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// A handler bound to an event name.
#[derive(Clone)]
pub struct Listener {
    event: Cow<'static, str>,
    handler: Rc<dyn Fn(&Event)>,
}

impl Listener {
    pub fn new(event: impl Into<Cow<'static, str>>, handler: impl Fn(&Event) + 'static) -> Self {
        Self {
            event: event.into(),
            handler: Rc::new(handler),
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn call(&self, event: &Event) {
        (self.handler)(event)
    }
}

impl Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

// Two listeners are equal when they are the same binding, not merely the same event.
impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.event == other.event
            && std::ptr::addr_eq(Rc::as_ptr(&self.handler), Rc::as_ptr(&other.handler))
    }
}
