use gloo_timers::future::sleep;
use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

use super::{use_theme, SectionTitle, ThemeContext};
use crate::contact::{
    deliver, ContactError, ContactState, Field, SubmitStatus, MESSAGE_MAX_LEN,
    STATUS_RESET_DELAY,
};
use crate::choreography::contact_cards_timeline;
use crate::content::{CONTACT_INFO, CONTACT_SOCIALS};
use crate::motion::{bind_scroll, select, Player, ScrollTrigger};

/// Clears the status message after [`STATUS_RESET_DELAY`], unless something
/// newer than `generation` has happened to the form by then.
fn schedule_reset(state: RwSignal<ContactState>, generation: u64) {
    spawn_local(async move {
        sleep(STATUS_RESET_DELAY).await;
        state.try_update(|s| s.reset_status(generation));
    });
}

fn submit(state: RwSignal<ContactState>) {
    match state.try_update(|s| s.begin_submit()) {
        Some(Ok(submission)) => spawn_local(async move {
            let outcome = deliver(&submission.message).await;
            match &outcome {
                Ok(()) => log::info!("message from {} sent", submission.message.email),
                Err(e) => log::warn!("message delivery failed: {e}"),
            }
            state.try_update(|s| s.finish(&submission, outcome));
            schedule_reset(state, submission.generation());
        }),
        Some(Err(ContactError::AlreadySubmitting)) => {
            log::debug!("submit ignored, a message is already in flight");
        }
        Some(Err(e)) => {
            log::debug!("contact form rejected: {e}");
            if let Some(generation) = state.try_with_untracked(|s| s.generation()) {
                schedule_reset(state, generation);
            }
        }
        None => {}
    }
}

fn input_class(theme: ThemeContext) -> String {
    format!(
        "w-full px-4 py-3 rounded-lg border transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500 {}",
        theme.get().pick(
            "bg-gray-600 border-gray-500 text-white placeholder-gray-400",
            "bg-white border-gray-300 text-gray-900 placeholder-gray-500",
        ),
    )
}

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let state = RwSignal::new(ContactState::default());

    let cards = Player::new(contact_cards_timeline());
    Effect::new(move |_| {
        if let Some(section) = section_ref.get() {
            cards.bind(select(&section, ".contact-card"));
        }
    });
    bind_scroll(cards, ScrollTrigger::default(), move || {
        section_ref.get().map(Into::into)
    });

    let text = move |dark: &'static str, light: &'static str| theme.get().pick(dark, light);
    let field_value = move |field: Field| state.with(|s| s.form.get(field).to_string());
    let set_field = move |field: Field, value: String| {
        state.update(|s| s.form.update_field(field, &value));
    };
    let label_class = move || {
        format!("block text-sm font-medium mb-2 {}", text("text-gray-300", "text-gray-700"))
    };

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class=move || format!("py-20 {}", text("bg-gray-800", "bg-gray-50"))
        >
            <div class="container mx-auto px-6">
                <SectionTitle
                    title="Get In Touch"
                    blurb="I'm always open to discussing new opportunities, collaborations, or just having a chat about technology and development."
                />

                <div class="grid lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class=move || {
                            format!("text-2xl font-bold mb-8 {}", text("text-white", "text-gray-900"))
                        }>"Let's Connect"</h3>
                        <div class="space-y-6">
                            {CONTACT_INFO
                                .iter()
                                .map(|info| {
                                    view! {
                                        <div class="contact-card">
                                            <div class=move || {
                                                format!(
                                                    "flex items-center p-6 rounded-2xl shadow-lg transition-all duration-300 hover:shadow-xl hover:-translate-y-1 {}",
                                                    text("bg-gray-700", "bg-white"),
                                                )
                                            }>
                                                <div class="w-12 h-12 flex items-center justify-center bg-gradient-to-r from-blue-600 to-purple-600 rounded-lg mr-4">
                                                    <i class=format!("{} text-white text-xl", info.icon)></i>
                                                </div>
                                                <div>
                                                    <h4 class=move || {
                                                        format!("font-semibold {}", text("text-white", "text-gray-900"))
                                                    }>{info.title}</h4>
                                                    <a
                                                        href=info.link
                                                        class=move || {
                                                            format!(
                                                                "hover:text-blue-600 transition-colors {}",
                                                                text("text-gray-300", "text-gray-600"),
                                                            )
                                                        }
                                                    >
                                                        {info.value}
                                                    </a>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-8">
                            <h4 class=move || {
                                format!("text-lg font-semibold mb-4 {}", text("text-white", "text-gray-900"))
                            }>"Follow Me"</h4>
                            <div class="flex space-x-4">
                                {CONTACT_SOCIALS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.url
                                                aria-label=social.label
                                                class=move || {
                                                    format!(
                                                        "w-12 h-12 flex items-center justify-center rounded-lg transition-all duration-300 hover:scale-110 {}",
                                                        text(
                                                            "bg-gray-700 hover:bg-gray-600 text-gray-300",
                                                            "bg-white hover:bg-gray-50 text-gray-600",
                                                        ),
                                                    )
                                                }
                                            >
                                                <i class=format!("{} text-xl", social.icon)></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="contact-card">
                        <div class=move || {
                            format!("p-8 rounded-2xl shadow-lg {}", text("bg-gray-700", "bg-white"))
                        }>
                            <h3 class=move || {
                                format!("text-2xl font-bold mb-6 {}", text("text-white", "text-gray-900"))
                            }>"Send Message"</h3>
                            <form
                                id="contact-form"
                                class="space-y-6"
                                on:submit=move |ev: SubmitEvent| {
                                    ev.prevent_default();
                                    submit(state);
                                }
                            >
                                <div>
                                    <label for="name" class=label_class>"Your Name"</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required
                                        placeholder="Enter your name"
                                        class=move || input_class(theme)
                                        prop:value=move || field_value(Field::Name)
                                        on:input=move |ev| set_field(Field::Name, event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label for="email" class=label_class>"Your Email"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        required
                                        placeholder="Enter your email"
                                        class=move || input_class(theme)
                                        prop:value=move || field_value(Field::Email)
                                        on:input=move |ev| set_field(Field::Email, event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label for="message" class=label_class>"Your Message"</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        required
                                        rows="5"
                                        maxlength=MESSAGE_MAX_LEN.to_string()
                                        placeholder="Enter your message (max 500 characters)"
                                        class=move || format!("{} resize-none", input_class(theme))
                                        prop:value=move || field_value(Field::Message)
                                        on:input=move |ev| set_field(Field::Message, event_target_value(&ev))
                                    ></textarea>
                                    <div class=move || {
                                        format!("text-right text-sm mt-1 {}", text("text-gray-400", "text-gray-500"))
                                    }>{move || state.with(|s| s.form.message_counter())}</div>
                                </div>
                                <button
                                    type="submit"
                                    disabled=move || state.with(|s| s.is_submitting())
                                    class="w-full bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white py-3 px-6 rounded-lg font-medium transition-all duration-300 transform hover:scale-105 disabled:opacity-50 disabled:cursor-not-allowed disabled:transform-none whitespace-nowrap"
                                >
                                    {move || {
                                        if state.with(|s| s.is_submitting()) {
                                            "Sending..."
                                        } else {
                                            "Send Message"
                                        }
                                    }}
                                </button>
                                {move || match state.with(|s| s.status) {
                                    SubmitStatus::Idle => None,
                                    SubmitStatus::Success => Some(view! {
                                        <div role="status" class="text-green-600 text-center font-medium">
                                            "Message sent successfully! I'll get back to you soon."
                                        </div>
                                    }.into_any()),
                                    SubmitStatus::Error => {
                                        let detail = state
                                            .with(|s| s.error.as_ref().map(ToString::to_string))
                                            .unwrap_or_default();
                                        Some(view! {
                                            <div role="alert" class="text-red-600 text-center font-medium">
                                                <p>"Something went wrong. Please try again."</p>
                                                <p class="text-sm">{detail}</p>
                                            </div>
                                        }.into_any())
                                    }
                                }}
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
