use leptos::{either::Either, prelude::*};

use crate::content::icon_for;

/// Heading block shared by every titled section.
#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h2 class="text-3xl md:text-4xl font-semibold tracking-tight text-[#E9EDF7]">
                {title}
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="mt-2 text-sm md:text-base text-[#A6B1C2] max-w-2xl">{s}</p> }
                })}
        </div>
    }
}

/// Small pill used for project impact callouts.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full border border-[#233043] bg-[#0F141B] px-2.5 py-1 text-xs text-[#B9C4D6]">
            {children()}
        </span>
    }
}

/// Bordered call-to-action anchor with an icon-font glyph.
#[component]
pub fn LinkButton(
    href: &'static str,
    icon: &'static str,
    #[prop(optional)] filled: bool,
    children: Children,
) -> impl IntoView {
    let class = if filled {
        "inline-flex items-center gap-2 rounded-xl border border-[#1E2633] bg-[#101826] px-4 py-2 text-sm text-[#E9EDF7] hover:scale-[1.02] transition"
    } else {
        "inline-flex items-center gap-2 rounded-xl border border-[#1E2633] px-4 py-2 text-sm text-[#E9EDF7] hover:scale-[1.02] transition"
    };
    view! {
        <a href=href class=class>
            <i class=icon></i>
            {children()}
        </a>
    }
}

/// Square icon-only link used in the navigation bar.
#[component]
pub fn IconLink(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="p-2 rounded-lg border border-[#1E2633] text-[#B9C4D6] hover:text-[#E9EDF7] hover:border-[#2A3A52] transition"
            aria-label=label
        >
            <i class=format!("{icon} text-xl")></i>
        </a>
    }
}

/// The resume download is not live yet: the control renders in a muted
/// disabled style and swallows its own clicks.
#[component]
pub fn ResumeButton() -> impl IntoView {
    view! {
        <a
            href="#"
            class="hidden sm:inline-flex items-center gap-2 rounded-xl border border-[#1E2633] bg-[#101826] px-3 py-2 text-sm text-[#7D8AA3] cursor-not-allowed"
            on:click=move |ev| ev.prevent_default()
        >
            <i class="extra-file"></i>
            " Resume (soon)"
        </a>
    }
}

/// Icon for one skill entry. Skills without a devicon glyph get a plain
/// gradient placeholder tile.
#[component]
pub fn SkillLogo(name: &'static str) -> impl IntoView {
    match icon_for(name) {
        Some(icon) => Either::Left(view! { <i class=format!("{icon} colored text-2xl shrink-0")></i> }),
        None => Either::Right(
            view! {
                <span class="h-6 w-6 rounded-md bg-gradient-to-br from-[#0E1A2A] to-[#13263C] border border-[#1E2633] shadow-inner shrink-0"></span>
            },
        ),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn mapped_skill_renders_its_devicon_glyph() {
        let html = view! { <SkillLogo name="Python" /> }.to_html();
        assert!(html.contains("devicon-python-plain"));
        assert!(!html.contains("shadow-inner"));
    }

    #[test]
    fn unmapped_skill_falls_back_to_placeholder_tile() {
        let html = view! { <SkillLogo name="REST APIs" /> }.to_html();
        assert!(!html.contains("devicon-"));
        assert!(html.contains("shadow-inner"));
    }

    #[test]
    fn section_title_subtitle_is_optional() {
        let html = view! { <SectionTitle title="Skills" /> }.to_html();
        assert!(html.contains("Skills"));
        assert!(!html.contains("<p"));

        let html = view! { <SectionTitle title="Skills" subtitle="A snapshot." /> }.to_html();
        assert!(html.contains("A snapshot."));
    }

    #[test]
    fn resume_control_renders_disabled() {
        let html = view! { <ResumeButton /> }.to_html();
        assert!(html.contains("cursor-not-allowed"));
        assert!(html.contains("Resume (soon)"));
    }
}
