use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::social::SocialLinks;
use crate::{
    content::{Profile, SocialLink},
    typewriter::{Typewriter, TICK_MS},
};

#[component]
pub fn Hero(profile: &'static Profile, social_links: &'static [SocialLink]) -> impl IntoView {
    let typewriter = StoredValue::new(Typewriter::new(profile.phrases.clone()));
    let (text, set_text) = signal(String::new());

    // no-op during SSR; the interval is cleared when the hero is disposed
    let _ = use_interval_fn(
        move || {
            typewriter.update_value(|tw| {
                tw.tick();
                if text.with_untracked(|t| t != tw.text()) {
                    set_text(tw.text().to_string());
                }
            });
        },
        TICK_MS,
    );

    view! {
        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-6">{profile.greeting.as_str()}</h1>
                <p class="text-2xl md:text-3xl text-gray-700 mb-6 min-h-10" aria-live="polite">
                    "I'm "
                    <span class="font-semibold text-gray-900">{text}</span>
                    <span class="typewriter-cursor" aria-hidden="true">
                        "|"
                    </span>
                </p>
                <p class="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                    {profile.tagline.as_str()}
                </p>
                <SocialLinks links=social_links class="justify-center" />
            </div>
        </section>
    }
}
