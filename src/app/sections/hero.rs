use leptos::prelude::*;

use crate::app::components::{LinkButton, ResumeButton};
use crate::content::LINKS;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative overflow-hidden">
            // Background texture & orbs
            <div aria-hidden="true" class="pointer-events-none absolute inset-0">
                <div
                    class="absolute -top-24 -right-24 h-80 w-80 rounded-full blur-3xl"
                    style="background: radial-gradient(closest-side, rgba(72,183,255,0.35), transparent 70%)"
                ></div>
                <div
                    class="absolute bottom-[-12rem] left-[-8rem] h-96 w-96 rounded-full blur-3xl"
                    style="background: radial-gradient(closest-side, rgba(34,211,238,0.25), transparent 70%)"
                ></div>
                <div
                    class="absolute inset-0 opacity-[0.05]"
                    style="background-image: radial-gradient(#ffffff 1px, transparent 1px); background-size: 20px 20px"
                ></div>
            </div>

            <div class="mx-auto max-w-6xl px-4 pt-16 pb-20">
                <div class="grid md:grid-cols-2 items-center gap-10">
                    <div>
                        <p class="text-xs tracking-[0.25em] text-[#7D8AA3] uppercase">
                            "Software Engineer • Data Scientist"
                        </p>
                        <h1 class="mt-3 text-4xl md:text-5xl font-semibold leading-tight text-[#E9EDF7]">
                            "Avinash Pushparaj"
                        </h1>
                        <p class="mt-4 text-[#A6B1C2] max-w-xl">
                            "Building scalable software & data systems — backend APIs, ML pipelines, and real-time analytics."
                        </p>
                        <div class="mt-6 flex flex-wrap items-center gap-3">
                            <ResumeButton />
                            <LinkButton href=LINKS.github icon="devicon-github-plain">
                                "GitHub"
                            </LinkButton>
                            <LinkButton href=LINKS.linkedin icon="devicon-linkedin-plain">
                                "LinkedIn"
                            </LinkButton>
                        </div>
                    </div>
                    <div class="relative">
                        <div class="mx-auto h-64 w-64 md:h-80 md:w-80 rounded-3xl border border-[#1E2633] bg-gradient-to-br from-[#0E1A2A] via-[#0B0F14] to-[#0F141B] shadow-[0_0_40px_rgba(72,183,255,0.08)] backdrop-blur flex items-center justify-center">
                            <img
                                src="/profile.jpg"
                                alt="Avinash Pushparaj"
                                width="320"
                                height="320"
                                class="object-cover"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
