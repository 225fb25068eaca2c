use leptos::{ev::MouseEvent, html, prelude::*};

use super::use_theme;
use crate::choreography::about_timeline;
use crate::content::RESUME_PATH;
use crate::motion::{bind_scroll, tilt, Ease, Player, ScrollTrigger, Timeline};

const PORTRAIT: &str = "https://readdy.ai/api/search-image?query=Advanced%20robotics%20laboratory%20with%20humanoid%20robots%2C%20robotic%20arms%2C%20AI%20research%20equipment%2C%20futuristic%20technology%2C%20modern%20clean%20lab%20environment%2C%20blue%20LED%20lighting%2C%20circuit%20boards%2C%20sensors%2C%20mechanical%20engineering%2C%20artificial%20intelligence%20development%2C%20high-tech%20workspace%2C%20innovative%20robotics%20design%2C%20automated%20systems&width=500&height=600&seq=about-robotics&orientation=portrait";

const PARAGRAPHS: [&str; 3] = [
    "I'm Sourav Das, an aspiring Full Stack & Backend Developer with a strong foundation in Java, Spring Boot, Node.js, and a deep interest in building scalable and efficient web applications. Currently pursuing my B.Tech in Artificial Intelligence and Machine Learning, I'm focused on strengthening my real-world development skills by working on personal projects and learning from open-source communities.",
    "My core strengths lie in backend logic, RESTful API design, and handling data with relational databases like MySQL. I'm also expanding my frontend capabilities with JavaScript and frameworks like React. Apart from full stack development, I'm fascinated by AI/ML and actively exploring how to integrate intelligent features into applications.",
    "I enjoy solving problems, learning new technologies, and continuously improving my code structure and efficiency. I'm open to internships, collaborative projects, and opportunities where I can grow as a developer, contribute meaningfully to real-world systems, and learn from experienced mentors in the field.",
];

const TILT_FACTOR: f64 = 15.0;

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let image_ref = NodeRef::<html::Div>::new();
    let frame_ref = NodeRef::<html::Div>::new();
    let content_ref = NodeRef::<html::Div>::new();

    let reveal = Player::new(about_timeline());
    let image_tilt = Player::new(Timeline::new());

    Effect::new(move |_| {
        let (Some(image), Some(frame), Some(content)) =
            (image_ref.get(), frame_ref.get(), content_ref.get())
        else {
            return;
        };
        reveal.bind(vec![image.into(), content.into()]);
        image_tilt.bind(vec![frame.into()]);
    });
    bind_scroll(reveal, ScrollTrigger::default(), move || {
        section_ref.get().map(Into::into)
    });

    let on_mouse_move = move |ev: MouseEvent| {
        let Some(frame) = frame_ref.get_untracked() else {
            return;
        };
        let rect = frame.get_bounding_client_rect();
        let (rx, ry) = tilt(
            (ev.client_x() as f64, ev.client_y() as f64),
            (rect.left(), rect.top(), rect.width(), rect.height()),
            TILT_FACTOR,
        );
        image_tilt.tween_to(0, |p| p.rotate_x(rx).rotate_y(ry), 0.3, Ease::Power2Out);
    };
    let on_mouse_leave = move |_: MouseEvent| {
        image_tilt.tween_to(0, |p| p.rotate_x(0.0).rotate_y(0.0), 0.5, Ease::Power2Out);
    };

    let text = move |dark: &'static str, light: &'static str| theme.get().pick(dark, light);

    view! {
        <section
            id="about"
            node_ref=section_ref
            class=move || format!("py-20 {}", text("bg-gray-900", "bg-white"))
        >
            <div class="container mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div node_ref=image_ref class="relative">
                        <div
                            node_ref=frame_ref
                            on:mousemove=on_mouse_move
                            on:mouseleave=on_mouse_leave
                            class="relative overflow-hidden rounded-2xl shadow-2xl"
                        >
                            <img
                                src=PORTRAIT
                                alt="Advanced Robotics Laboratory"
                                class="w-full h-auto object-cover object-top"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-blue-600/20 to-transparent"></div>
                        </div>
                    </div>

                    <div node_ref=content_ref class="space-y-6">
                        <div>
                            <h2 class=move || {
                                format!("text-4xl font-bold mb-4 {}", text("text-white", "text-gray-900"))
                            }>"About Me"</h2>
                            <div class="w-20 h-1 bg-gradient-to-r from-blue-600 to-purple-600 rounded-full"></div>
                        </div>

                        {PARAGRAPHS
                            .iter()
                            .map(|paragraph| {
                                view! {
                                    <p class=move || {
                                        format!(
                                            "text-lg leading-relaxed {}",
                                            text("text-gray-300", "text-gray-600"),
                                        )
                                    }>{*paragraph}</p>
                                }
                            })
                            .collect_view()}

                        <div class="grid grid-cols-2 gap-6 mt-8">
                            <div class=move || {
                                format!("text-center p-4 rounded-lg {}", text("bg-blue-900/30", "bg-blue-50"))
                            }>
                                <div class="text-3xl font-bold text-blue-600">"B.Tech"</div>
                                <div class=move || text("text-gray-300", "text-gray-600")>
                                    "AI & ML Student"
                                </div>
                            </div>
                            <div class=move || {
                                format!(
                                    "text-center p-4 rounded-lg {}",
                                    text("bg-purple-900/30", "bg-purple-50"),
                                )
                            }>
                                <div class="text-3xl font-bold text-purple-600">"20+"</div>
                                <div class=move || text("text-gray-300", "text-gray-600")>
                                    "Projects Built"
                                </div>
                            </div>
                        </div>

                        <div class="flex flex-wrap gap-4 mt-8">
                            <a
                                href="#contact"
                                class="bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-6 py-3 rounded-lg font-medium transition-all duration-300 transform hover:scale-105 whitespace-nowrap cursor-pointer shadow-lg"
                            >
                                "Let's Work Together"
                            </a>
                            <a
                                href=RESUME_PATH
                                class=move || {
                                    format!(
                                        "border-2 border-blue-600 px-6 py-3 rounded-lg font-medium transition-all duration-300 transform hover:scale-105 whitespace-nowrap cursor-pointer {}",
                                        text(
                                            "text-blue-400 border-blue-400 hover:bg-blue-400 hover:text-gray-900",
                                            "text-blue-600 hover:bg-blue-600 hover:text-white",
                                        ),
                                    )
                                }
                            >
                                "Download Resume"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
