use leptos::prelude::*;

use crate::content::{About, Education, Experience, Skill, SkillCategory};

#[component]
pub fn AboutSection(about: &'static About, avatar_url: &'static str) -> impl IntoView {
    view! {
        <section id="about" class="py-16 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"About Me"</h2>
                <Bio bio=about.bio.as_str() avatar_url />
                <Skills categories=about.skill_categories.as_slice() />
                <Timeline experiences=about.experiences.as_slice() />
                <EducationList education=about.education.as_slice() />
            </div>
        </section>
    }
}

#[component]
fn Bio(bio: &'static str, avatar_url: &'static str) -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto mb-16">
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 items-center">
                <div class="lg:col-span-1">
                    <img
                        src=avatar_url
                        alt="Profile"
                        class="w-64 h-64 rounded-full mx-auto object-cover shadow-lg"
                    />
                </div>
                <div class="lg:col-span-2 space-y-4">
                    {bio
                        .split("\n\n")
                        .map(|para| {
                            view! { <p class="text-lg text-gray-700 leading-relaxed">{para}</p> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillLevel(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="flex space-x-1" title=format!("{} / 5", skill.level)>
            {skill
                .dots()
                .into_iter()
                .map(|filled| {
                    view! {
                        <div class=if filled {
                            "w-2 h-2 rounded-full bg-gray-800"
                        } else {
                            "w-2 h-2 rounded-full bg-gray-300"
                        }></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Skills(categories: &'static [SkillCategory]) -> impl IntoView {
    view! {
        <div class="mb-16">
            <h3 class="text-2xl font-bold mb-8 text-center">"Skills & Technologies"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {categories
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="bg-gray-50 p-6 rounded-lg">
                                <h4 class="text-xl font-semibold mb-4">{category.title.as_str()}</h4>
                                <div class="space-y-3">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <div class="flex justify-between items-center">
                                                    <span class="text-gray-700">{skill.name.as_str()}</span>
                                                    <SkillLevel skill />
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Timeline(experiences: &'static [Experience]) -> impl IntoView {
    view! {
        <div class="mb-16">
            <h3 class="text-2xl font-bold mb-8 text-center text-gray-900">"Work Experience"</h3>
            <div class="max-w-4xl mx-auto">
                <div class="relative">
                    <div class="absolute left-6 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-500 to-purple-500"></div>
                    {experiences
                        .iter()
                        .map(|exp| view! { <TimelineEntry exp /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn TimelineEntry(exp: &'static Experience) -> impl IntoView {
    view! {
        <div class="relative flex items-start mb-8 last:mb-0">
            <div class="relative z-10 flex-shrink-0 w-12 h-12 bg-gradient-to-br from-blue-500 to-purple-500 rounded-full flex items-center justify-center shadow-lg">
                <div class="w-6 h-6 bg-white rounded-full flex items-center justify-center">
                    <div class="w-2 h-2 bg-gradient-to-br from-blue-500 to-purple-500 rounded-full"></div>
                </div>
            </div>
            <div class="ml-6 flex-1 bg-white p-6 rounded-xl shadow-lg border border-gray-200 hover:shadow-xl transition-all duration-300 transform hover:-translate-y-1">
                <div class="flex flex-col lg:flex-row lg:justify-between lg:items-start mb-3">
                    <div class="flex-1">
                        <h4 class="text-xl font-bold text-gray-900 mb-1">{exp.title.as_str()}</h4>
                        <p class="text-blue-600 font-semibold text-lg">{exp.company.as_str()}</p>
                    </div>
                    <div class="mt-2 lg:mt-0 lg:ml-4">
                        <span class="inline-flex items-center px-3 py-1 bg-gradient-to-r from-blue-50 to-purple-50 text-blue-700 text-sm font-medium rounded-full border border-blue-200">
                            <svg
                                class="w-4 h-4 mr-1"
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z"
                                ></path>
                            </svg>
                            {exp.period.as_str()}
                        </span>
                    </div>
                </div>
                <ul class="space-y-2 mb-4">
                    {exp
                        .description
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="flex items-start text-gray-700">
                                    <svg
                                        class="w-5 h-5 text-green-500 mr-2 mt-0.5 flex-shrink-0"
                                        fill="currentColor"
                                        viewBox="0 0 20 20"
                                    >
                                        <path
                                            fill-rule="evenodd"
                                            d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z"
                                            clip-rule="evenodd"
                                        ></path>
                                    </svg>
                                    <span class="leading-relaxed">{item.as_str()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2">
                    {exp
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-gradient-to-r from-gray-100 to-gray-200 text-gray-700 text-sm rounded-full border border-gray-300 hover:scale-105 transition-transform duration-200 font-medium">
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn EducationList(education: &'static [Education]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-2xl font-bold mb-8 text-center">"Education"</h3>
            <div class="max-w-4xl mx-auto">
                {education
                    .iter()
                    .map(|edu| {
                        view! {
                            <div class="bg-gray-50 p-6 rounded-lg mb-4">
                                <div class="flex flex-col md:flex-row md:justify-between md:items-start">
                                    <div>
                                        <h4 class="text-xl font-semibold">{edu.degree.as_str()}</h4>
                                        <p class="text-gray-600 font-medium">{edu.school.as_str()}</p>
                                        {edu
                                            .description
                                            .as_deref()
                                            .map(|d| {
                                                view! {
                                                    <p class="text-gray-700 mt-2 whitespace-pre-line">{d}</p>
                                                }
                                            })}
                                    </div>
                                    <span class="text-gray-500 text-sm mt-1 md:mt-0 shrink-0">
                                        {edu.period.as_str()}
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
