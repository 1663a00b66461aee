use leptos::prelude::*;

use crate::{content::Project, gallery::GalleryState};

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    // selection lives as long as the section and is never persisted
    let gallery = RwSignal::new(GalleryState::new());

    view! {
        <section id="projects" class="py-16 bg-gray-50">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"My Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .iter()
                        .map(|project| view! { <ProjectCard project gallery /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, gallery: RwSignal<GalleryState>) -> impl IntoView {
    // memos keep a click on one card from touching any other card
    let image = Memo::new(move |_| gallery.with(|g| g.display_image(project)));
    let counter = Memo::new(move |_| gallery.with(|g| g.counter(project)));
    let has_thumbnails = project.image_urls.len() > 1;

    view! {
        <div class="bg-white rounded-lg overflow-hidden shadow-md hover:shadow-xl transition-shadow duration-300">
            <div class="relative h-48 bg-gray-100">
                <img
                    src=move || image.get()
                    alt=project.title.as_str()
                    class="w-full h-full object-contain"
                />
                {move || {
                    counter
                        .get()
                        .map(|c| {
                            view! {
                                <div class="absolute top-2 right-2 bg-black/50 text-white text-xs px-2 py-1 rounded">
                                    {c}
                                </div>
                            }
                        })
                }}
            </div>
            {has_thumbnails.then(|| view! { <Thumbnails project gallery /> })}
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title.as_str()}</h3>
                <p class="text-gray-600 mb-4 line-clamp-5">{project.description.as_str()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 bg-gray-100 text-gray-600 text-sm rounded-full">
                                    {tag.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.link.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block px-4 py-2 bg-gray-800 text-white rounded hover:bg-gray-700 transition-colors duration-300"
                >
                    "View Project"
                </a>
            </div>
        </div>
    }
}

#[component]
fn Thumbnails(project: &'static Project, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let select = move |index: usize| {
        gallery.maybe_update(|g| match g.try_select(project, index) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("ignoring thumbnail click: {e}");
                false
            }
        });
    };
    let count = project.image_urls.len();

    view! {
        <div class="px-4 py-2 bg-gray-50 border-b">
            <div class="flex gap-2 overflow-x-auto">
                {project
                    .image_urls
                    .iter()
                    .enumerate()
                    .map(|(index, url)| {
                        let active = Memo::new(move |_| {
                            gallery.with(|g| g.is_selected(project, index))
                        });
                        view! {
                            <button
                                type="button"
                                on:click=move |_| select(index)
                                aria-label=format!("Show image {} of {}", index + 1, count)
                                aria-pressed=move || active.get().to_string()
                                class=move || thumbnail_class(active.get())
                            >
                                <img
                                    src=url.as_str()
                                    alt=format!("{} preview {}", project.title, index + 1)
                                    class="w-full h-full object-cover"
                                />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn thumbnail_class(active: bool) -> &'static str {
    if active {
        "flex-shrink-0 w-12 h-12 rounded border-2 overflow-hidden transition-all duration-200 border-gray-800 ring-2 ring-gray-300"
    } else {
        "flex-shrink-0 w-12 h-12 rounded border-2 overflow-hidden transition-all duration-200 border-gray-200 hover:border-gray-400"
    }
}
