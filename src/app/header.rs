use leptos::prelude::*;
use leptos_router::components::A;
use leptos_use::use_window_scroll;

#[cfg(feature = "hydrate")]
use leptos::ev;
#[cfg(feature = "hydrate")]
use leptos_use::use_event_listener;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::use_theme;
use crate::content::{OWNER, NAV_ITEMS};
use crate::theme::{header_surface, is_scrolled};

/// Scrolls smoothly to the section an in-page `#anchor` link points at.
#[cfg(feature = "hydrate")]
fn smooth_scroll(ev: ev::MouseEvent) {
    let Some(anchor) = ev
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a[href^='#']").ok().flatten())
    else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let Some(section) = document().query_selector(&href).ok().flatten() else {
        log::debug!("no section for {href}");
        return;
    };
    ev.prevent_default();
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || is_scrolled(scroll_y.get()));
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    #[cfg(feature = "hydrate")]
    let _ = use_event_listener(document(), ev::click, smooth_scroll);

    let link_class = move || {
        theme
            .get()
            .pick("text-gray-300 hover:text-blue-400", "text-gray-700 hover:text-blue-600")
    };
    let toggle_button = move || {
        view! {
            <button
                on:click=move |_| theme.toggle_dark_mode()
                aria-label="Toggle dark mode"
                class=move || {
                    format!(
                        "w-10 h-10 flex items-center justify-center rounded-lg transition-all duration-300 {}",
                        theme
                            .get()
                            .pick(
                                "bg-gray-800 hover:bg-gray-700 text-yellow-400",
                                "bg-gray-100 hover:bg-gray-200 text-gray-600",
                            ),
                    )
                }
            >
                <i class=move || format!("{} text-lg", theme.get().toggle_icon())></i>
            </button>
        }
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                header_surface(theme.get(), scrolled.get()),
            )
        }>
            <nav class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <A
                        href="/"
                        attr:class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent hover:from-blue-700 hover:to-purple-700 transition-all"
                    >
                        {OWNER}
                    </A>

                    // Desktop
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class=move || {
                                            format!(
                                                "font-medium whitespace-nowrap cursor-pointer transition-colors {}",
                                                link_class(),
                                            )
                                        }
                                    >
                                        {item.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        {toggle_button()}
                    </div>

                    // Mobile
                    <div class="md:hidden flex items-center space-x-4">
                        {toggle_button()}
                        <button
                            aria-label="Toggle menu"
                            aria-expanded=move || mobile_menu_open.get().to_string()
                            class=move || {
                                format!(
                                    "w-10 h-10 flex items-center justify-center cursor-pointer {}",
                                    theme.get().pick("text-white", "text-gray-700"),
                                )
                            }
                            on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                        >
                            <i class=move || {
                                if mobile_menu_open.get() {
                                    "ri-close-line text-xl"
                                } else {
                                    "ri-menu-line text-xl"
                                }
                            }></i>
                        </button>
                    </div>
                </div>

                <Show when=move || mobile_menu_open.get()>
                    <div class=move || {
                        format!(
                            "md:hidden mt-4 py-4 border-t {}",
                            theme.get().pick("border-gray-700", "border-gray-200"),
                        )
                    }>
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class=move || {
                                            format!(
                                                "block py-2 font-medium cursor-pointer transition-colors {}",
                                                link_class(),
                                            )
                                        }
                                        on:click=move |_| set_mobile_menu_open.set(false)
                                    >
                                        {item.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </nav>
        </header>
    }
}
