use leptos::{either::EitherOf4, prelude::*};

use crate::content::{SocialIcon, SocialLink};

#[component]
pub fn SocialLinks(
    links: &'static [SocialLink],
    #[prop(optional)] dark: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let link_class = if dark {
        "text-gray-300 hover:text-white hover:bg-gray-700"
    } else {
        "text-gray-600 hover:text-gray-900 hover:bg-gray-100"
    };
    view! {
        <div class=format!("flex items-center space-x-6 {class}")>
            {links
                .iter()
                .map(|link| {
                    view! {
                        <div class="relative group">
                            // noopener keeps the new page from reaching back into this one
                            <a
                                href=link.url.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class=format!(
                                    "{link_class} transition-all duration-300 transform hover:scale-110 hover:-translate-y-1 block p-2 rounded-lg",
                                )
                                aria-label=link.name.as_str()
                            >
                                <Icon icon=link.icon />
                            </a>
                            <div class="absolute bottom-full left-1/2 transform -translate-x-1/2 mb-2 px-3 py-1 bg-gray-800 text-white text-sm rounded-lg opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none whitespace-nowrap z-10">
                                {link.tooltip.as_str()}
                                <div class="absolute top-full left-1/2 transform -translate-x-1/2 w-0 h-0 border-l-4 border-r-4 border-t-4 border-transparent border-t-gray-800"></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Icon(icon: SocialIcon) -> impl IntoView {
    let shapes = match icon {
        SocialIcon::Github => EitherOf4::A(view! {
            <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path>
        }),
        SocialIcon::School => EitherOf4::B(view! {
            <path d="M22 10v6M2 10l10-5 10 5-10 5z"></path>
            <path d="M6 12v5c3 3 9 3 12 0v-5"></path>
        }),
        SocialIcon::Linkedin => EitherOf4::C(view! {
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
            <rect x="2" y="9" width="4" height="12"></rect>
            <circle cx="4" cy="4" r="2"></circle>
        }),
        SocialIcon::Mail => EitherOf4::D(view! {
            <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path>
            <polyline points="22,6 12,13 2,6"></polyline>
        }),
    };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="w-6 h-6"
        >
            {shapes}
        </svg>
    }
}
