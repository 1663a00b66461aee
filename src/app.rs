mod about;
mod footer;
mod header;
mod hero;
mod projects;
mod social;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site_content, SiteContent};
use about::AboutSection;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::ProjectsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased text-gray-900 scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner_name = site_content()
        .map(|c| c.profile.name.as_str())
        .unwrap_or("Portfolio");

    view! {
        <Title formatter=move |title| format!("{owner_name} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match site_content() {
        Ok(content) => Either::Left(view! { <Portfolio content /> }),
        Err(e) => {
            log::error!("couldn't load site content: {e}");
            Either::Right(
                view! {
                    <Title text="Unavailable" />
                    <div class="flex min-h-screen items-center justify-center text-gray-600">
                        "This page is temporarily unavailable."
                    </div>
                },
            )
        }
    }
}

#[component]
fn Portfolio(content: &'static SiteContent) -> impl IntoView {
    let profile = &content.profile;
    view! {
        <Title text="Portfolio" />
        <Meta name="description" content=profile.tagline.as_str() />
        <div class="min-h-screen bg-white">
            <Header title=profile.site_title.as_str() />
            <main>
                <Hero profile social_links=content.social_links.as_slice() />
                <AboutSection about=&content.about avatar_url=profile.avatar_url.as_str() />
                <ProjectsSection projects=content.projects.as_slice() />
            </main>
            <Footer owner=profile.name.as_str() links=content.social_links.as_slice() />
        </div>
    }
}
