use leptos::prelude::*;

use crate::app::components::{SectionTitle, SkillLogo};
use crate::content::{SkillGroup, SKILLS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="mx-auto max-w-6xl px-4 py-16">
            <SectionTitle
                title="Skills"
                subtitle="A quick snapshot of the tools and technologies I use most."
            />
            <div class="grid md:grid-cols-3 gap-6">
                {SKILLS
                    .iter()
                    .map(|group| view! { <SkillGroupCard group /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillGroupCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-[#1E2633] bg-[#0F141B] p-5">
            <h4 class="text-sm font-semibold text-[#E9EDF7]">{group.group}</h4>
            <div class="mt-4 grid grid-cols-2 gap-2">
                {group
                    .items
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="group flex items-center gap-3 rounded-xl border border-[#233043] bg-[#101826] px-3 py-2">
                                <SkillLogo name=*skill />
                                <span class="text-sm text-[#B9C4D6] group-hover:text-[#E9EDF7] transition-colors">
                                    {*skill}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
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
    fn every_skill_group_renders_all_items() {
        let html = view! { <Skills /> }.to_html();
        for group in SKILLS {
            assert!(html.contains(&escaped(group.group)));
            for skill in group.items {
                assert!(html.contains(skill), "missing skill {skill}");
            }
        }
    }

    #[test]
    fn unmapped_skills_show_the_placeholder_not_a_broken_icon() {
        // "REST APIs" and "OpenShift" have no devicon glyph
        let html = view! { <Skills /> }.to_html();
        assert!(html.contains("shadow-inner"));
    }
}
