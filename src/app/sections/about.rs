use leptos::prelude::*;

use crate::app::components::SectionTitle;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="mx-auto max-w-6xl px-4 py-16">
            <SectionTitle
                title="About"
                subtitle="CS & Data Science @ Rutgers (GPA 3.9). I enjoy building backend systems, ML pipelines, and practical AI tools."
            />
            <div class="grid md:grid-cols-[240px,1fr] gap-6 items-start">
                <div class="h-40 w-40 rounded-2xl border border-[#1E2633] bg-gradient-to-br from-[#0E1A2A] to-[#101826] overflow-hidden">
                    <img
                        src="/profile.jpg"
                        alt="Avinash Pushparaj"
                        width="240"
                        height="240"
                        class="h-full w-full object-cover"
                    />
                </div>
                <div class="text-[#A6B1C2] space-y-3 text-sm leading-relaxed">
                    <p>
                        "I focus on pragmatic engineering: shipping secure APIs, instrumented data processing, and measurable model improvements. Recent work spans Spring Boot services, Spark/ML workflows, and real-time dashboards."
                    </p>
                    <p>
                        "I like clear problem statements, fast iteration, and clean documentation. When I’m not coding, I’m probably watching the NBA or exploring new food spots."
                    </p>
                </div>
            </div>
        </section>
    }
}
