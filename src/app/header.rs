use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "#"),
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header(title: &'static str) -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm sticky top-0 z-10">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <h1 class="text-xl font-bold">{title}</h1>
                <nav>
                    <ul class="flex space-x-6">
                        {NAV_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <li>
                                        <a
                                            href=*href
                                            rel="external"
                                            class="text-gray-600 hover:text-gray-900"
                                        >
                                            {*label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
