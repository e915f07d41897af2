use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-[#1E2633]">
            <div class="mx-auto max-w-6xl px-4 py-10 text-xs text-[#7D8AA3] flex flex-wrap items-center justify-between gap-4">
                <p>
                    {format!(
                        "© {} Avinash Pushparaj. All rights reserved.",
                        env!("BUILD_YEAR"),
                    )}
                </p>
                <p>"Built with Rust & Leptos. Dark theme • Subtle neon accents."</p>
            </div>
        </footer>
    }
}
