use leptos::callback::{Callable, Callback};
use leptos::ev::MouseEvent;
use leptos::prelude::window;

/// Anchor target for links that only run a callback.
pub const HREF_NO_OP: &str = "javascript:void(0)";

/// What a click on a link does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Let the browser follow the anchor.
    Native,
    /// Run the link's own callback.
    Callback,
    /// Ask the host's exit hook first; it decides whether to proceed.
    Deferred,
}

impl Activation {
    pub fn plan(has_on_activate: bool, has_on_exit: bool) -> Self {
        match (has_on_activate, has_on_exit) {
            (_, true) => Activation::Deferred,
            (true, false) => Activation::Callback,
            (false, false) => Activation::Native,
        }
    }

    pub fn prevents_default(&self) -> bool {
        *self != Activation::Native
    }
}

/// The continuation handed to an exit hook.
pub struct ExitAction(Box<dyn FnOnce() + Send>);

impl ExitAction {
    pub fn new(f: impl FnOnce() + Send + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn proceed(self) {
        (self.0)()
    }
}

/// Builds the click handler of a link.
pub fn exit_aware_click(
    href: String,
    on_activate: Option<Callback<()>>,
    on_exit: Option<Callback<ExitAction>>,
) -> impl Fn(MouseEvent) + Clone + 'static {
    move |ev: MouseEvent| {
        let plan = Activation::plan(on_activate.is_some(), on_exit.is_some());
        if plan.prevents_default() {
            ev.prevent_default();
        }

        match (plan, on_exit.as_ref()) {
            (Activation::Deferred, Some(exit)) => {
                let href = href.clone();
                let on_activate = on_activate.clone();
                exit.run(ExitAction::new(move || follow(&href, on_activate.as_ref())));
            }
            (Activation::Callback, _) => {
                if let Some(cb) = on_activate.as_ref() {
                    cb.run(());
                }
            }
            _ => {}
        }
    }
}

/// Runs `on_activate` if given, otherwise sends the browser to `href`.
pub fn follow(href: &str, on_activate: Option<&Callback<()>>) {
    match on_activate {
        Some(cb) => cb.run(()),
        None => navigate(href),
    }
}

fn navigate(href: &str) {
    if href == HREF_NO_OP {
        return;
    }
    if let Err(e) = window().location().assign(href) {
        leptos::logging::warn!("navigation to {href} failed: {e:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn plain_link_navigates_natively() {
        let plan = Activation::plan(false, false);
        assert_eq!(plan, Activation::Native);
        assert!(!plan.prevents_default());
    }

    #[test]
    fn callback_overrides_href() {
        let plan = Activation::plan(true, false);
        assert_eq!(plan, Activation::Callback);
        assert!(plan.prevents_default());
    }

    #[test]
    fn exit_hook_always_goes_first() {
        assert_eq!(Activation::plan(false, true), Activation::Deferred);
        assert_eq!(Activation::plan(true, true), Activation::Deferred);
    }

    #[test]
    fn exit_action_runs_only_when_proceeded() {
        let hits = Arc::new(Mutex::new(0));
        let h = Arc::clone(&hits);
        let action = ExitAction::new(move || *h.lock().unwrap() += 1);

        assert_eq!(*hits.lock().unwrap(), 0);
        action.proceed();
        assert_eq!(*hits.lock().unwrap(), 1);
    }
}
