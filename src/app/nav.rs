use leptos::prelude::*;
use leptos_use::{use_window_size, UseWindowSizeReturn};

use crate::device::is_mobile_width;

const SECTIONS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    // unlike the device tier, the layout breakpoint tracks every resize
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let is_mobile = Memo::new(move |_| is_mobile_width(width.get()));
    let (menu_open, set_menu_open) = signal(false);

    Effect::watch(
        move || is_mobile.get(),
        move |mobile, _, _| {
            if !*mobile {
                set_menu_open(false);
            }
        },
        false,
    );

    let links = SECTIONS
        .iter()
        .map(|(href, text)| {
            view! {
                <li>
                    <a
                        href=*href
                        class="hover:text-cyan transition-colors duration-200"
                        on:click=move |_| set_menu_open(false)
                    >
                        {*text}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-background/70 backdrop-blur-sm shadow">
            <nav class="mx-auto max-w-7xl px-4 py-3 flex items-center justify-between">
                <a href="#about" class="font-bold text-lg text-teal">"~/portfolio"</a>
                <button
                    class="text-2xl"
                    class:hidden=move || !is_mobile.get()
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <ul
                    class="gap-6"
                    class:flex=move || !is_mobile.get()
                    class:mobile-menu=move || is_mobile.get()
                    class:hidden=move || is_mobile.get() && !menu_open.get()
                >
                    {links}
                </ul>
            </nav>
        </header>
    }
}
