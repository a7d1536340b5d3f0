//! UI Components

use leptos::prelude::*;

/// Scroll offset (px) past which the navbar condenses
const SCROLL_THRESHOLD: f64 = 50.0;

/// Footer copyright line
pub const COPYRIGHT: &str = "© 2025. Crafted by Gemini.";

/// Navbar classes for the current scroll position
pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 w-full z-50 transition-all duration-500 py-4 bg-black/50 backdrop-blur-md border-b border-white/5"
    } else {
        "fixed top-0 w-full z-50 transition-all duration-500 py-8 bg-transparent"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);

    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > SCROLL_THRESHOLD);
    });

    view! {
        <nav class=move || nav_class(scrolled.get())>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <div class="serif text-2xl font-bold tracking-widest text-white">
                    "CENTI"<span class="text-gray-500">"-"</span>"TENKA"
                </div>
                <div class="hidden md:flex space-x-8 text-sm uppercase tracking-widest text-gray-400">
                    <a href="#philosophy" class="hover:text-white transition-colors">"Philosophy"</a>
                    <a href="#gallery" class="hover:text-white transition-colors">"Works"</a>
                    <a href="#oracle" class="hover:text-white transition-colors">"Oracle"</a>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/5 bg-black text-center">
            <div class="serif text-lg text-white mb-4">"CENTI-TENKA"</div>
            <p class="text-xs text-gray-600 uppercase tracking-widest">
                {COPYRIGHT}
            </p>
        </footer>
    }
}

// Icons

#[component]
pub fn ArrowRight(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </svg>
    }
}

#[component]
pub fn Star() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="1" stroke-linecap="round" stroke-linejoin="round">
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
        </svg>
    }
}

#[component]
pub fn Sparkles(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
            <path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" />
            <path d="M5 3v4" />
            <path d="M9 5H5" />
            <path d="M19 17v4" />
            <path d="M15 19h4" />
        </svg>
    }
}

/// Spinning busy indicator
#[component]
pub fn Loader(#[prop(optional)] class: &'static str) -> impl IntoView {
    let class = format!("animate-spin {class}");

    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M21 12a9 9 0 1 1-6.219-8.56" />
        </svg>
    }
}
