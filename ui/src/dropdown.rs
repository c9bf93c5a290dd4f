//! Open/close state of one header menu entry.
//!
//! Leaving the trigger or the popup does not close right away: it hands out a
//! [`CloseTicket`] that the caller redeems after [`CLOSE_DELAY`]. Any entry,
//! toggle or dismiss in between invalidates outstanding tickets, so a pointer
//! moving from the trigger into the popup keeps the menu open.

use std::time::Duration;

pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    /// Open, pointer last seen on the trigger.
    OpenViaTrigger,
    /// Open, pointer last seen on the popup.
    OpenViaPopup,
}

/// Permission to close, valid until the next pointer entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownController {
    state: DropdownState,
    epoch: u64,
    has_children: bool,
    /// Opened or confirmed by a click; only then does a click close it.
    pinned: bool,
}

impl DropdownController {
    pub fn new(has_children: bool) -> Self {
        Self {
            has_children,
            ..Default::default()
        }
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != DropdownState::Closed
    }

    /// Whether the expand affordance is shown at all.
    pub fn has_children(&self) -> bool {
        self.has_children
    }

    pub fn enter_trigger(&mut self) {
        if self.has_children {
            self.open(DropdownState::OpenViaTrigger);
        }
    }

    pub fn leave_trigger(&self) -> Option<CloseTicket> {
        self.ticket()
    }

    /// No effect while closed: the popup is not mounted then.
    pub fn enter_popup(&mut self) {
        if self.is_open() {
            self.open(DropdownState::OpenViaPopup);
        }
    }

    pub fn leave_popup(&self) -> Option<CloseTicket> {
        self.ticket()
    }

    /// Click or Enter on the trigger.
    ///
    /// A menu that hovering opened stays open and becomes pinned, so a tap
    /// (mouseenter then click) opens it. A second click closes it.
    pub fn toggle(&mut self) {
        if !self.has_children {
            return;
        }
        if self.is_open() && self.pinned {
            self.close();
        } else {
            self.open(DropdownState::OpenViaTrigger);
            self.pinned = true;
        }
    }

    /// Escape, or a selection inside the popup.
    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.close();
        }
    }

    /// Redeems a ticket once the delay has elapsed. Returns whether it closed.
    pub fn close_elapsed(&mut self, ticket: CloseTicket) -> bool {
        if !self.is_open() || ticket.0 != self.epoch {
            return false;
        }
        self.close();
        true
    }

    fn open(&mut self, via: DropdownState) {
        self.epoch += 1;
        self.state = via;
    }

    fn close(&mut self) {
        self.epoch += 1;
        self.state = DropdownState::Closed;
        self.pinned = false;
    }

    fn ticket(&self) -> Option<CloseTicket> {
        self.is_open().then_some(CloseTicket(self.epoch))
    }
}

/// The one outstanding close timer of an entry.
///
/// Arming drops the previous handle; timer handles that cancel on drop
/// (gloo's `Timeout`) are therefore never stacked up or leaked.
#[derive(Debug)]
pub struct CloseTimer<H>(Option<H>);

impl<H> Default for CloseTimer<H> {
    fn default() -> Self {
        Self(None)
    }
}

impl<H> CloseTimer<H> {
    pub fn arm(&mut self, handle: H) {
        self.0 = Some(handle);
    }

    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: u64 = CLOSE_DELAY.as_millis() as u64;

    /// Deterministic stand-in for browser timeouts.
    #[derive(Default)]
    struct VirtualTimers {
        now: u64,
        pending: Vec<(u64, CloseTicket)>,
    }

    impl VirtualTimers {
        fn schedule(&mut self, ticket: Option<CloseTicket>) {
            if let Some(t) = ticket {
                self.pending.push((self.now + D, t));
            }
        }

        fn advance(&mut self, ms: u64, ctrl: &mut DropdownController) {
            self.now += ms;
            let now = self.now;
            let (due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|(at, _)| *at <= now);
            self.pending = rest;
            for (_, t) in due {
                ctrl.close_elapsed(t);
            }
        }
    }

    #[test]
    fn starts_closed() {
        let ctrl = DropdownController::new(true);
        assert_eq!(ctrl.state(), DropdownState::Closed);
        assert!(!ctrl.is_open());
    }

    #[test]
    fn transit_from_trigger_to_popup_stays_open() {
        let mut ctrl = DropdownController::new(true);
        let mut timers = VirtualTimers::default();

        ctrl.enter_trigger();
        assert_eq!(ctrl.state(), DropdownState::OpenViaTrigger);

        timers.schedule(ctrl.leave_trigger());
        timers.advance(D / 3, &mut ctrl);
        ctrl.enter_popup();
        assert_eq!(ctrl.state(), DropdownState::OpenViaPopup);

        timers.advance(D, &mut ctrl);
        assert!(ctrl.is_open());

        timers.schedule(ctrl.leave_popup());
        timers.advance(D + 1, &mut ctrl);
        assert_eq!(ctrl.state(), DropdownState::Closed);
    }

    #[test]
    fn leaving_without_reentry_closes_after_delay() {
        let mut ctrl = DropdownController::new(true);
        let mut timers = VirtualTimers::default();

        ctrl.enter_trigger();
        timers.schedule(ctrl.leave_trigger());
        timers.advance(D - 1, &mut ctrl);
        assert!(ctrl.is_open());
        timers.advance(1, &mut ctrl);
        assert!(!ctrl.is_open());
    }

    #[test]
    fn stale_close_from_earlier_leave_is_ignored() {
        let mut ctrl = DropdownController::new(true);
        let mut timers = VirtualTimers::default();

        ctrl.enter_trigger();
        timers.schedule(ctrl.leave_trigger());
        timers.advance(D / 2, &mut ctrl);
        ctrl.enter_trigger();

        // first leave's timer fires here
        timers.advance(D / 2 + 1, &mut ctrl);
        assert_eq!(ctrl.state(), DropdownState::OpenViaTrigger);
    }

    #[test]
    fn popup_back_to_trigger_stays_open() {
        let mut ctrl = DropdownController::new(true);
        let mut timers = VirtualTimers::default();

        ctrl.enter_trigger();
        timers.schedule(ctrl.leave_trigger());
        ctrl.enter_popup();
        timers.schedule(ctrl.leave_popup());
        ctrl.enter_trigger();

        timers.advance(2 * D, &mut ctrl);
        assert_eq!(ctrl.state(), DropdownState::OpenViaTrigger);
    }

    #[test]
    fn childless_node_never_opens() {
        let mut ctrl = DropdownController::new(false);
        let mut timers = VirtualTimers::default();

        ctrl.enter_trigger();
        assert!(!ctrl.is_open());
        timers.schedule(ctrl.leave_trigger());
        ctrl.enter_popup();
        ctrl.toggle();
        assert!(!ctrl.is_open());
        timers.advance(D, &mut ctrl);
        assert_eq!(ctrl.state(), DropdownState::Closed);
        assert!(timers.pending.is_empty());
    }

    #[test]
    fn popup_entry_while_closed_is_ignored() {
        let mut ctrl = DropdownController::new(true);
        ctrl.enter_popup();
        assert!(!ctrl.is_open());
        assert_eq!(ctrl.leave_popup(), None);
    }

    #[test]
    fn toggle_and_dismiss() {
        let mut ctrl = DropdownController::new(true);
        ctrl.toggle();
        assert_eq!(ctrl.state(), DropdownState::OpenViaTrigger);
        ctrl.toggle();
        assert!(!ctrl.is_open());

        ctrl.enter_trigger();
        let ticket = ctrl.leave_trigger().unwrap();
        ctrl.dismiss();
        assert!(!ctrl.is_open());

        // reopening invalidates the ticket issued before the dismiss
        ctrl.toggle();
        assert!(!ctrl.close_elapsed(ticket));
        assert!(ctrl.is_open());
    }

    #[test]
    fn siblings_are_independent() {
        let mut a = DropdownController::new(true);
        let mut b = DropdownController::new(true);
        let before = b;

        a.enter_trigger();
        assert!(a.is_open());
        assert_eq!(b, before);

        b.enter_trigger();
        a.dismiss();
        assert!(b.is_open());
    }

    #[test]
    fn tap_opens_menu() {
        let mut ctrl = DropdownController::new(true);
        // touch: mouseenter is followed by click
        ctrl.enter_trigger();
        ctrl.toggle();
        assert!(ctrl.is_open());
    }

    #[test]
    fn click_while_hovering_keeps_open_then_second_click_closes() {
        let mut ctrl = DropdownController::new(true);
        let mut timers = VirtualTimers::default();

        ctrl.enter_trigger();
        timers.advance(D * 2, &mut ctrl);
        ctrl.toggle();
        assert_eq!(ctrl.state(), DropdownState::OpenViaTrigger);

        ctrl.toggle();
        assert!(!ctrl.is_open());
    }

    #[test]
    fn click_cancels_pending_close() {
        let mut ctrl = DropdownController::new(true);
        let mut timers = VirtualTimers::default();

        ctrl.enter_trigger();
        timers.schedule(ctrl.leave_trigger());
        ctrl.toggle();
        timers.advance(D + 1, &mut ctrl);
        assert!(ctrl.is_open());
    }

    #[test]
    fn pin_is_cleared_by_close() {
        let mut ctrl = DropdownController::new(true);
        let mut timers = VirtualTimers::default();

        ctrl.toggle();
        timers.schedule(ctrl.leave_trigger());
        timers.advance(D, &mut ctrl);
        assert!(!ctrl.is_open());

        // hover-opened again, so the next click confirms rather than closes
        ctrl.enter_trigger();
        ctrl.toggle();
        assert!(ctrl.is_open());
    }

    #[test]
    fn leaf_controller_ignores_dismiss() {
        // no Escape listener is wired for leaves; dismissing must be inert anyway
        let mut ctrl = DropdownController::new(false);
        assert!(!ctrl.has_children());
        let before = ctrl;
        ctrl.dismiss();
        assert_eq!(ctrl, before);
    }

    struct CountedHandle(std::rc::Rc<std::cell::Cell<usize>>);

    impl Drop for CountedHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn rearming_drops_the_previous_timer() {
        let dropped = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut timer = CloseTimer::default();
        assert!(!timer.is_armed());

        for _ in 0..3 {
            timer.arm(CountedHandle(dropped.clone()));
        }
        assert!(timer.is_armed());
        assert_eq!(dropped.get(), 2);

        drop(timer);
        assert_eq!(dropped.get(), 3);
    }
}
