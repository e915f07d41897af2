use leptos::prelude::*;

use crate::app::components::{Badge, SectionTitle};
use crate::content::{Project, PROJECTS};
use crate::tilt::TiltHandle;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="mx-auto max-w-6xl px-4 py-16">
            <SectionTitle
                title="Featured Projects"
                subtitle="High-impact, engineering-focused work with measurable outcomes."
            />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let tilt = TiltHandle::new();
    view! {
        <div
            node_ref=tilt.surface()
            on:mousemove=tilt.on_mouse_move()
            on:mouseleave=tilt.on_mouse_leave()
            class="group relative rounded-2xl border border-[#1E2633] bg-[#0F141B] p-5 transition will-change-transform hover:shadow-[0_0_40px_rgba(72,183,255,0.10)]"
        >
            // media placeholder panel until projects ship screenshots
            <div class="aspect-video w-full rounded-xl bg-gradient-to-tr from-[#0E1A2A] to-[#101826] mb-4 border border-[#1E2633]"></div>
            <h3 class="text-lg font-semibold text-[#E9EDF7]">{project.title}</h3>
            <p class="mt-2 text-sm text-[#A6B1C2] min-h-[56px]">{project.blurb}</p>
            <div class="mt-3 flex flex-wrap gap-2">
                {project
                    .impact
                    .iter()
                    .map(|metric| view! { <Badge>{*metric}</Badge> })
                    .collect_view()}
            </div>
            <div class="mt-4 flex flex-wrap gap-2">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! { <span class="text-xs text-[#7D8AA3]">"#"{*tag}</span> }
                    })
                    .collect_view()}
            </div>
            <div class="mt-5 flex items-center gap-3">
                {project.links.code.map(|href| view! { <CardLink href label="Code" /> })}
                {project.links.demo.map(|href| view! { <CardLink href label="Demo" /> })}
            </div>
            <div
                aria-hidden="true"
                class="pointer-events-none absolute inset-0 rounded-2xl opacity-0 transition-opacity group-hover:opacity-100"
                style="background: radial-gradient(600px 200px at 0% 0%, rgba(72,183,255,0.08), transparent), radial-gradient(600px 200px at 100% 100%, rgba(34,211,238,0.06), transparent)"
            ></div>
        </div>
    }
}

#[component]
fn CardLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href class="text-sm inline-flex items-center gap-2 text-[#48B7FF] hover:underline">
            {label}
            <i class="extra-link"></i>
        </a>
    }
}
