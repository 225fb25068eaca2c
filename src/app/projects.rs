use leptos::{html, prelude::*};

use super::{use_theme, SectionTitle};
use crate::choreography::project_cards_timeline;
use crate::content::{filter_projects, Project, ProjectFilter, PROJECTS};
use crate::motion::{bind_scroll, select, Player, ScrollTrigger};

#[component]
pub fn Projects() -> impl IntoView {
    let theme = use_theme();
    let (filter, set_filter) = signal(ProjectFilter::default());
    let section_ref = NodeRef::<html::Section>::new();
    let grid_ref = NodeRef::<html::Div>::new();

    let reveal = Player::new(project_cards_timeline(0));

    // The card list is rebuilt on every filter change; pick up the new
    // elements once they are in the document.
    Effect::new(move |_| {
        filter.track();
        let Some(grid) = grid_ref.get() else {
            return;
        };
        request_animation_frame(move || {
            let cards = select(&grid, ".project-card");
            reveal.rebind(project_cards_timeline(cards.len()), cards);
        });
    });
    bind_scroll(reveal, ScrollTrigger::default(), move || {
        section_ref.get().map(Into::into)
    });

    view! {
        <section
            id="projects"
            node_ref=section_ref
            class=move || format!("py-20 {}", theme.get().pick("bg-gray-800", "bg-gray-50"))
        >
            <div class="container mx-auto px-6">
                <SectionTitle
                    title="My Projects"
                    blurb="Here are some of my recent projects showcasing my skills in backend development, desktop applications, and AI/ML implementations."
                />

                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    {ProjectFilter::ALL
                        .iter()
                        .map(|&option| {
                            view! {
                                <button
                                    data-filter=option.id()
                                    on:click=move |_| set_filter.set(option)
                                    class=move || {
                                        let look = if filter.get() == option {
                                            "bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg"
                                        } else {
                                            theme
                                                .get()
                                                .pick(
                                                    "bg-gray-700 text-gray-300 hover:bg-gray-600",
                                                    "bg-white text-gray-700 hover:bg-gray-100",
                                                )
                                        };
                                        format!(
                                            "px-6 py-3 rounded-full font-medium transition-all duration-300 whitespace-nowrap {look}",
                                        )
                                    }
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-2 gap-8">
                    {move || {
                        filter_projects(&PROJECTS, filter.get())
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let theme = use_theme();
    let text = move |dark: &'static str, light: &'static str| theme.get().pick(dark, light);
    let overlay_link = "w-12 h-12 flex items-center justify-center bg-white/20 backdrop-blur-sm rounded-full hover:bg-white/30 transition-colors cursor-pointer";

    // The outer div carries the reveal transform, the inner one the hover lift.
    view! {
        <div class="project-card">
            <div class=move || {
                format!(
                    "group relative h-full overflow-hidden rounded-2xl shadow-lg transition-all duration-300 hover:shadow-2xl hover:-translate-y-2 {}",
                    text("bg-gray-700", "bg-white"),
                )
            }>
                <div class="relative overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-48 object-cover object-top transition-transform duration-300 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                    <div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        <div class="flex space-x-4">
                            <a href=project.github_url aria-label="Source code" class=overlay_link>
                                <i class="ri-github-fill text-white text-xl"></i>
                            </a>
                            <a href=project.live_url aria-label="Live demo" class=overlay_link>
                                <i class="ri-external-link-line text-white text-xl"></i>
                            </a>
                        </div>
                    </div>
                </div>

                <div class="p-6">
                    <span class="text-xs font-semibold uppercase tracking-wide text-purple-500">
                        {project.category.label()}
                    </span>
                    <h3 class=move || {
                        format!("text-xl font-bold mb-3 {}", text("text-white", "text-gray-900"))
                    }>{project.title}</h3>
                    <p class=move || {
                        format!("text-sm mb-4 {}", text("text-gray-300", "text-gray-600"))
                    }>{project.description}</p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class=move || {
                                        format!(
                                            "px-3 py-1 text-xs rounded-full font-medium {}",
                                            text("bg-blue-900/30 text-blue-300", "bg-blue-100 text-blue-600"),
                                        )
                                    }>{*tech}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-wrap gap-2 mt-2">
                        {project
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <span class=move || {
                                        format!(
                                            "px-3 py-1 text-xs rounded-full font-medium {}",
                                            text("bg-green-900/30 text-green-300", "bg-green-100 text-green-600"),
                                        )
                                    }>{*feature}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
