use leptos::{ev::MouseEvent, html, prelude::*};
use web_sys::HtmlElement;

use super::use_theme;
use crate::choreography::{ambient_timeline, intro_timeline, INTRO_START, PARTICLE_OPACITY};
use crate::content::{OWNER, PARTICLE_POSITIONS};
use crate::motion::{select, tilt, Ease, Player, Timeline};

/// Degrees of block rotation across the full width/height of the hero.
const TILT_FACTOR: f64 = 30.0;

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let title_ref = NodeRef::<html::H1>::new();
    let subtitle_ref = NodeRef::<html::P>::new();
    let tagline_ref = NodeRef::<html::P>::new();
    let buttons_ref = NodeRef::<html::Div>::new();
    let floating_ref = NodeRef::<html::Div>::new();
    let block_ref = NodeRef::<html::Div>::new();

    let intro = Player::new(intro_timeline());
    let ambient = Player::new(ambient_timeline());
    let block_tilt = Player::new(Timeline::new());

    Effect::new(move |_| {
        let (Some(title), Some(subtitle), Some(tagline), Some(buttons)) = (
            title_ref.get(),
            subtitle_ref.get(),
            tagline_ref.get(),
            buttons_ref.get(),
        ) else {
            return;
        };
        intro.bind(vec![
            title.into(),
            subtitle.into(),
            tagline.into(),
            buttons.into(),
        ]);
        intro.play();
    });

    Effect::new(move |_| {
        let (Some(section), Some(floating), Some(block)) =
            (section_ref.get(), floating_ref.get(), block_ref.get())
        else {
            return;
        };
        let mut targets: Vec<HtmlElement> = vec![floating.into()];
        targets.extend(select(&section, ".hero-particle"));
        ambient.bind(targets);
        ambient.play();
        block_tilt.bind(vec![block.into()]);
    });

    let on_mouse_move = move |ev: MouseEvent| {
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        let rect = section.get_bounding_client_rect();
        let (rx, ry) = tilt(
            (ev.client_x() as f64, ev.client_y() as f64),
            (rect.left(), rect.top(), rect.width(), rect.height()),
            TILT_FACTOR,
        );
        block_tilt.tween_to(0, |p| p.rotate_x(rx).rotate_y(ry), 0.3, Ease::Power2Out);
    };

    let text = move |dark: &'static str, light: &'static str| theme.get().pick(dark, light);
    // Server and client both start the intro hidden.
    let intro_style = INTRO_START.to_css();

    view! {
        <section
            id="home"
            node_ref=section_ref
            on:mousemove=on_mouse_move
            class=move || {
                format!(
                    "min-h-screen flex items-center justify-center relative overflow-hidden {}",
                    text(
                        "bg-gradient-to-br from-gray-900 via-blue-900 to-purple-900",
                        "bg-gradient-to-br from-blue-50 via-indigo-100 to-purple-50",
                    ),
                )
            }
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class=move || {
                    format!(
                        "absolute top-1/4 left-1/4 w-96 h-96 rounded-full mix-blend-multiply filter blur-xl opacity-30 animate-pulse {}",
                        text("bg-blue-600", "bg-blue-300"),
                    )
                }></div>
                <div class=move || {
                    format!(
                        "absolute top-3/4 right-1/4 w-96 h-96 rounded-full mix-blend-multiply filter blur-xl opacity-30 animate-pulse delay-1000 {}",
                        text("bg-purple-600", "bg-purple-300"),
                    )
                }></div>
                <div class=move || {
                    format!(
                        "absolute bottom-1/4 left-1/3 w-72 h-72 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-pulse delay-2000 {}",
                        text("bg-cyan-600", "bg-cyan-300"),
                    )
                }></div>
            </div>

            <div class="absolute inset-0 pointer-events-none">
                {PARTICLE_POSITIONS
                    .iter()
                    .map(|(left, top)| {
                        view! {
                            <div
                                class=move || {
                                    format!(
                                        "hero-particle absolute w-2 h-2 rounded-full {}",
                                        text("bg-blue-400", "bg-blue-600"),
                                    )
                                }
                                style=format!(
                                    "left: {left}%; top: {top}%; opacity: {PARTICLE_OPACITY};",
                                )
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto px-6 text-center relative z-10">
                <div class="max-w-5xl mx-auto">
                    <h1
                        node_ref=title_ref
                        style=intro_style.clone()
                        class=move || {
                            format!(
                                "text-6xl md:text-8xl font-bold mb-6 {}",
                                text("text-white", "text-gray-900"),
                            )
                        }
                    >
                        "Hi, I'm "
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            {OWNER}
                        </span>
                    </h1>
                    <p
                        node_ref=subtitle_ref
                        style=intro_style.clone()
                        class=move || {
                            format!(
                                "text-2xl md:text-3xl font-semibold mb-4 {}",
                                text("text-blue-300", "text-blue-600"),
                            )
                        }
                    >
                        "Full Stack & Backend Developer"
                    </p>
                    <p
                        node_ref=tagline_ref
                        style=intro_style.clone()
                        class=move || {
                            format!(
                                "text-lg md:text-xl mb-8 max-w-3xl mx-auto leading-relaxed {}",
                                text("text-gray-300", "text-gray-600"),
                            )
                        }
                    >
                        "Proficient in Java & Node.js | AI/ML Enthusiast | Engineering Student | Focused on Building Scalable Solutions"
                    </p>
                    <div node_ref=buttons_ref style=intro_style class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="#projects"
                            class="bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-8 py-4 rounded-full font-medium transition-all duration-300 transform hover:scale-105 shadow-lg hover:shadow-xl whitespace-nowrap cursor-pointer"
                        >
                            "View My Projects"
                        </a>
                        <a
                            href="#contact"
                            class=move || {
                                format!(
                                    "border-2 border-blue-600 px-8 py-4 rounded-full font-medium transition-all duration-300 transform hover:scale-105 shadow-lg hover:shadow-xl whitespace-nowrap cursor-pointer {}",
                                    text(
                                        "text-blue-400 border-blue-400 hover:bg-blue-400 hover:text-gray-900",
                                        "text-blue-600 hover:bg-blue-600 hover:text-white",
                                    ),
                                )
                            }
                        >
                            "Get In Touch"
                        </a>
                    </div>
                </div>

                // 3D block: the outer div floats, the inner one follows the pointer
                <div class="absolute right-10 top-1/2 -translate-y-1/2 hidden xl:block">
                    <div node_ref=floating_ref>
                        <div node_ref=block_ref class="relative">
                            <div class="w-40 h-40 bg-gradient-to-br from-blue-500 to-purple-600 rounded-3xl shadow-2xl transform rotate-12 opacity-80"></div>
                            <div class="absolute top-4 left-4 w-32 h-32 bg-gradient-to-br from-cyan-400 to-blue-500 rounded-2xl shadow-xl transform -rotate-6 opacity-70"></div>
                            <div class="absolute top-8 left-8 w-24 h-24 bg-gradient-to-br from-purple-400 to-pink-500 rounded-xl shadow-lg transform rotate-12 opacity-60"></div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <div class=move || {
                    format!(
                        "w-6 h-12 border-2 rounded-full flex justify-center {}",
                        text("border-gray-400", "border-gray-600"),
                    )
                }>
                    <div class=move || {
                        format!(
                            "w-1 h-4 rounded-full mt-2 animate-bounce {}",
                            text("bg-gray-400", "bg-gray-600"),
                        )
                    }></div>
                </div>
                <p class=move || format!("text-sm mt-2 {}", text("text-gray-400", "text-gray-600"))>
                    "Scroll Down"
                </p>
            </div>
        </section>
    }
}
