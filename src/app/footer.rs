use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::social::SocialLinks;
use crate::content::SocialLink;

#[component]
pub fn Footer(owner: &'static str, links: &'static [SocialLink]) -> impl IntoView {
    let year = Utc::now().year();
    view! {
        <footer id="contact" class="bg-gray-800 text-white py-8">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <p>{format!("© {year} {owner}. All rights reserved.")}</p>
                    <SocialLinks links dark=true class="mt-4 md:mt-0" />
                </div>
            </div>
        </footer>
    }
}
