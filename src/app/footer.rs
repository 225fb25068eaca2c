use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{EMAIL, FOOTER_SOCIALS, LOCATION, NAV_ITEMS, OWNER, PHONE};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    // Always dark, whatever the theme.
    view! {
        <footer class="py-12 bg-gray-900 text-white" data-build=env!("BUILD_TIME")>
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-4 gap-8">
                    <div class="md:col-span-2">
                        <h3 class="text-2xl font-bold mb-4">{OWNER}</h3>
                        <p class="text-gray-400 mb-6 max-w-md">
                            "Full Stack & Backend Developer passionate about building scalable solutions and exploring AI/ML technologies. Currently pursuing B.Tech in AI & ML, focused on creating innovative applications."
                        </p>
                        <div class="flex space-x-4">
                            {FOOTER_SOCIALS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url
                                            aria-label=social.label
                                            class="w-10 h-10 flex items-center justify-center bg-gray-800 hover:bg-gray-700 rounded-lg transition-colors cursor-pointer"
                                        >
                                            <i class=format!("{} text-lg", social.icon)></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a
                                                href=item.href
                                                class="text-gray-400 hover:text-white transition-colors cursor-pointer"
                                            >
                                                {item.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Contact Info"</h4>
                        <div class="space-y-2">
                            {[("ri-mail-line", EMAIL), ("ri-phone-line", PHONE), ("ri-map-pin-line", LOCATION)]
                                .into_iter()
                                .map(|(icon, value)| {
                                    view! {
                                        <div class="flex items-center text-gray-400">
                                            <i class=format!("{icon} mr-2")></i>
                                            <span>{value}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 mt-8 pt-8 text-center">
                    <p class="text-gray-400">
                        {format!(
                            "{year} {OWNER}. All rights reserved. Built with Leptos, Tailwind CSS & Rust.",
                        )}
                    </p>
                </div>
            </div>
        </footer>
    }
}
