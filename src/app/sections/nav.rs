use leptos::prelude::*;

use crate::app::components::{IconLink, ResumeButton};
use crate::content::LINKS;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Projects", "#projects"),
    ("Experience", "#experience"),
    ("Skills", "#skills"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 backdrop-blur supports-[backdrop-filter]:bg-[#0B0F14]/70 border-b border-[#1E2633]">
            <div class="mx-auto max-w-6xl px-4 py-3 flex items-center justify-between">
                <a
                    href="#home"
                    class="text-sm font-semibold tracking-wider text-[#A6B1C2] hover:text-[#E9EDF7]"
                >
                    "AP"
                </a>
                <nav class="hidden md:flex items-center gap-6 text-sm text-[#A6B1C2]">
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href class="hover:text-[#E9EDF7] transition-colors">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-3">
                    <IconLink href=LINKS.github icon="devicon-github-plain" label="GitHub" />
                    <IconLink href=LINKS.linkedin icon="devicon-linkedin-plain" label="LinkedIn" />
                    <ResumeButton />
                </div>
            </div>
        </header>
    }
}
