use leptos::prelude::*;

use crate::app::components::LinkButton;
use crate::content::LINKS;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="mx-auto max-w-6xl px-4 py-16">
            <div class="rounded-3xl border border-[#1E2633] bg-gradient-to-br from-[#0E1A2A] via-[#0B0F14] to-[#0F141B] p-8 text-center shadow-[0_0_60px_rgba(72,183,255,0.08)]">
                <h3 class="text-2xl md:text-3xl font-semibold text-[#E9EDF7]">
                    "Let’s build something great"
                </h3>
                <p class="mt-2 text-sm text-[#A6B1C2]">
                    "Open to SWE/ML/Data roles, internships, and collaborations."
                </p>
                <div class="mt-6 flex flex-wrap justify-center gap-3">
                    <LinkButton href=LINKS.email icon="extra-email" filled=true>
                        "Email me"
                    </LinkButton>
                    <LinkButton href=LINKS.linkedin icon="devicon-linkedin-plain">
                        "LinkedIn"
                    </LinkButton>
                    <LinkButton href=LINKS.github icon="devicon-github-plain">
                        "GitHub"
                    </LinkButton>
                </div>
            </div>
        </section>
    }
}
