use leptos::{html, prelude::*};

use super::{use_theme, SectionTitle};
use crate::choreography::{skill_bars_timeline, skill_categories_timeline, skill_items_timeline};
use crate::content::{ADDITIONAL_EXPERTISE, SKILLS};
use crate::motion::{bind_scroll, select, Player, ScrollTrigger};

#[component]
pub fn Skills() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let grid_ref = NodeRef::<html::Div>::new();

    let categories = Player::new(skill_categories_timeline());
    let bars = Player::new(skill_bars_timeline());
    let items = Player::new(skill_items_timeline());

    Effect::new(move |_| {
        let Some(grid) = grid_ref.get() else {
            return;
        };
        categories.bind(select(&grid, ".skill-category"));
        bars.bind(select(&grid, ".progress-bar"));
        items.bind(select(&grid, ".skill-item"));
    });
    bind_scroll(categories, ScrollTrigger::default(), move || {
        section_ref.get().map(Into::into)
    });
    for player in [bars, items] {
        bind_scroll(player, ScrollTrigger::default(), move || {
            grid_ref.get().map(Into::into)
        });
    }

    let text = move |dark: &'static str, light: &'static str| theme.get().pick(dark, light);

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class=move || format!("py-20 {}", text("bg-gray-900", "bg-white"))
        >
            <div class="container mx-auto px-6">
                <SectionTitle
                    title="Skills & Technologies"
                    blurb="My technical expertise spans across backend development, frontend technologies, and AI/ML implementations."
                />

                <div node_ref=grid_ref class="grid lg:grid-cols-3 gap-8">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "skill-category p-6 rounded-2xl shadow-lg {}",
                                        text("bg-gray-800", "bg-gray-50"),
                                    )
                                }>
                                    <h3 class=move || {
                                        format!(
                                            "text-xl font-bold mb-6 text-center {}",
                                            text("text-white", "text-gray-900"),
                                        )
                                    }>{category.category}</h3>
                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="skill-item">
                                                        <div class="flex items-center justify-between mb-2">
                                                            <div class="flex items-center">
                                                                <i class=move || {
                                                                    format!(
                                                                        "{} w-5 h-5 flex items-center justify-center mr-3 {}",
                                                                        skill.icon,
                                                                        text("text-blue-400", "text-blue-600"),
                                                                    )
                                                                }></i>
                                                                <span class=move || {
                                                                    format!(
                                                                        "font-medium {}",
                                                                        text("text-white", "text-gray-900"),
                                                                    )
                                                                }>{skill.name}</span>
                                                            </div>
                                                            <span class=move || {
                                                                format!("text-sm {}", text("text-gray-300", "text-gray-600"))
                                                            }>{format!("{}%", skill.level)}</span>
                                                        </div>
                                                        <div class=move || {
                                                            format!(
                                                                "w-full rounded-full h-2 {}",
                                                                text("bg-gray-700", "bg-gray-200"),
                                                            )
                                                        }>
                                                            <div
                                                                class="progress-bar h-2 rounded-full bg-gradient-to-r from-blue-600 to-purple-600"
                                                                data-level=skill.level.to_string()
                                                                style=format!("width: {}%;", skill.level)
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-16 text-center">
                    <div class=move || {
                        format!(
                            "inline-block p-8 rounded-2xl shadow-lg {}",
                            text("bg-gray-800", "bg-gradient-to-r from-blue-50 to-purple-50"),
                        )
                    }>
                        <h3 class=move || {
                            format!("text-2xl font-bold mb-4 {}", text("text-white", "text-gray-900"))
                        }>"Additional Expertise"</h3>
                        <div class="flex flex-wrap justify-center gap-3">
                            {ADDITIONAL_EXPERTISE
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <span class=move || {
                                            format!(
                                                "px-4 py-2 rounded-full text-sm font-medium {}",
                                                text("bg-blue-900/30 text-blue-300", "bg-blue-100 text-blue-600"),
                                            )
                                        }>{*skill}</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
