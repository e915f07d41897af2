use leptos::prelude::*;

use crate::app::components::SectionTitle;
use crate::content::{ExperienceEntry, EXPERIENCE};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="mx-auto max-w-6xl px-4 py-16">
            <SectionTitle
                title="Experience"
                subtitle="Professional roles with ownership across backend, data, and AI."
            />
            <div class="relative">
                // vertical timeline rail behind the entry markers
                <div
                    aria-hidden="true"
                    class="absolute left-4 md:left-6 top-0 bottom-0 w-px bg-gradient-to-b from-transparent via-[#1E2633] to-transparent"
                ></div>
                <div class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .map(|entry| view! { <ExperienceCard entry /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class="relative pl-12 md:pl-16">
            <div
                aria-hidden="true"
                class="absolute left-2.5 md:left-4 top-1.5 h-3 w-3 rounded-full bg-[#48B7FF] shadow-[0_0_0_4px_rgba(72,183,255,0.15)]"
            ></div>
            <div class="rounded-2xl border border-[#1E2633] bg-[#0F141B] p-5">
                <div class="flex flex-wrap items-center justify-between gap-2">
                    <div class="flex items-center gap-3">
                        {entry
                            .logo_src
                            .map(|src| {
                                view! {
                                    <img
                                        src=src
                                        alt=entry.org
                                        class="h-6 w-6 rounded-sm object-contain"
                                    />
                                }
                            })}
                        <h3 class="text-base md:text-lg font-semibold text-[#E9EDF7]">
                            {entry.role} " · " {entry.org}
                        </h3>
                    </div>
                    <span class="text-xs text-[#7D8AA3]">{entry.time}</span>
                </div>
                <ul class="mt-3 list-disc pl-5 text-sm text-[#A6B1C2] space-y-2">
                    {entry
                        .bullets
                        .iter()
                        .map(|bullet| view! { <li>{*bullet}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    // SSR escapes text nodes, so "&" in content renders as "&amp;"
    fn escaped(s: &str) -> String {
        s.replace('&', "&amp;")
    }

    #[test]
    fn entries_render_in_content_order_with_role_and_time() {
        let html = view! { <Experience /> }.to_html();
        let mut last = 0;
        for entry in EXPERIENCE {
            let pos = html
                .find(entry.org)
                .unwrap_or_else(|| panic!("missing entry for {}", entry.org));
            assert!(pos > last, "{} out of order", entry.org);
            last = pos;
            assert!(html.contains(&escaped(entry.role)));
            assert!(html.contains(entry.time));
        }
    }

    #[test]
    fn entry_with_no_bullets_keeps_marker_and_empty_list() {
        let entry: &'static ExperienceEntry = Box::leak(Box::new(ExperienceEntry {
            org: "Quietco",
            role: "Engineer",
            time: "2023",
            bullets: &[],
            logo_src: None,
        }));
        let html = view! { <ExperienceCard entry /> }.to_html();
        assert!(html.contains("rounded-full"), "timeline marker missing");
        assert!(html.contains("Quietco"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("2023"));
        assert!(html.contains("<ul"), "bullet list element missing");
        assert!(!html.contains("<li"));
    }
}
