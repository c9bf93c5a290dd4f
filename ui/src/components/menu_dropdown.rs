use gloo_timers::callback::Timeout;
use leptos::ev::{KeyboardEvent, MouseEvent, keydown};
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};

use crate::dropdown::{CLOSE_DELAY, CloseTicket, CloseTimer, DropdownController};
use crate::model::MenuNode;
use crate::navigation::{HREF_NO_OP, follow};

/// Popup entries. Deeper levels are listed inline, never auto-expanded.
fn entry_list(nodes: Vec<MenuNode>, ctrl: RwSignal<DropdownController>, depth: usize) -> AnyView {
    nodes
        .into_iter()
        .map(|node| {
            let is_group = node.is_group();
            let nested = node.has_children().then(|| {
                view! {
                    <ul class="pl-3">
                        { entry_list(node.children, ctrl, depth + 1) }
                    </ul>
                }
            });

            let entry = if is_group {
                view! {
                    <span
                        class="block px-3 py-2 text-sm text-neutral-dark"
                        class=("font-semibold", depth == 0)
                    >
                        { node.label }
                    </span>
                }
                .into_any()
            } else {
                let href = node.href.unwrap_or_else(|| HREF_NO_OP.to_owned());
                let on_activate = node.on_activate;
                let target = href.clone();
                view! {
                    <a
                        href=target
                        class="block px-3 py-2 text-sm text-primary hover:bg-neutral-light"
                        class=("font-semibold", depth == 0)
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            follow(&href, on_activate.as_ref());
                            ctrl.try_update(|c| c.dismiss());
                        }
                    >
                        { node.label }
                    </a>
                }
                .into_any()
            };

            view! {
                <li>
                    { entry }
                    { nested }
                </li>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn MenuDropdown(node: MenuNode) -> impl IntoView {
    let has_children = node.has_children();
    let ctrl = RwSignal::new(DropdownController::new(has_children));

    let pending = StoredValue::new_local(CloseTimer::<Timeout>::default());
    let schedule_close = move |ticket: Option<CloseTicket>| {
        let Some(ticket) = ticket else { return };
        let timeout = Timeout::new(CLOSE_DELAY.as_millis() as u32, move || {
            // a no-op once the menu is unmounted
            ctrl.try_update(|c| c.close_elapsed(ticket));
        });
        pending.update_value(|p| p.arm(timeout));
    };

    if has_children {
        let _ = use_event_listener(use_window(), keydown, move |ev: KeyboardEvent| {
            if ev.key() == "Escape" && ctrl.get_untracked().is_open() {
                ctrl.update(|c| c.dismiss());
            }
        });
    }

    let navigable = node.is_navigable();
    let href = node.href.clone().unwrap_or_else(|| HREF_NO_OP.to_owned());
    let on_activate = node.on_activate;
    let activate = move || {
        if navigable {
            follow(&href, on_activate.as_ref());
        } else {
            ctrl.update(|c| c.toggle());
        }
    };
    let activate_on_key = activate.clone();

    let children = node.children;
    let wrapper_class = if node.active {
        "relative py-4 border-b-2 border-primary"
    } else {
        "relative py-4"
    };

    view! {
        <div class=wrapper_class>
            <div
                class="flex flex-row items-center cursor-pointer"
                role="button"
                tabindex="0"
                aria-haspopup=has_children.then_some("true")
                aria-expanded=move || has_children.then(|| ctrl.get().is_open().to_string())
                on:mouseenter=move |_| ctrl.update(|c| c.enter_trigger())
                on:mouseleave=move |_| schedule_close(ctrl.try_with_untracked(|c| c.leave_trigger()).flatten())
                on:click=move |_| activate()
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        ev.prevent_default();
                        activate_on_key();
                    }
                }
            >
                <span class="text-sm font-semibold text-primary">{ node.label }</span>
                { has_children.then(|| view! {
                    <span
                        class="ml-1 text-primary transition-transform duration-200"
                        class=("rotate-180", move || ctrl.get().is_open())
                        aria-hidden="true"
                    >
                        "▾"
                    </span>
                }) }
            </div>

            <Show when=move || ctrl.get().is_open()>
                <ul
                    class="absolute mt-2 w-40 bg-white shadow list-none p-0 z-10"
                    on:mouseenter=move |_| ctrl.update(|c| c.enter_popup())
                    on:mouseleave=move |_| schedule_close(ctrl.try_with_untracked(|c| c.leave_popup()).flatten())
                >
                    { entry_list(children.clone(), ctrl, 0) }
                </ul>
            </Show>
        </div>
    }
}
