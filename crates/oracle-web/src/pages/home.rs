//! Home Page

use leptos::prelude::*;

use crate::components::{ArrowRight, Star};
use crate::pages::OracleSection;

struct Work {
    title: &'static str,
    category: &'static str,
    color: &'static str,
}

static WORKS: [Work; 3] = [
    Work { title: "Mono", category: "Interface", color: "bg-stone-800" },
    Work { title: "Nebula", category: "Experiential", color: "bg-slate-800" },
    Work { title: "Void", category: "Architecture", color: "bg-zinc-800" },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Philosophy />
        <Gallery />
        <OracleSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="relative h-screen flex flex-col justify-center items-center text-center px-4 overflow-hidden">
            <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-purple-900/20 rounded-full blur-3xl opacity-50 animate-pulse"></div>
            <div class="absolute bottom-1/4 right-1/4 w-[500px] h-[500px] bg-blue-900/10 rounded-full blur-3xl opacity-50"></div>

            <div class="relative z-10 space-y-8 max-w-4xl">
                <p class="text-gray-400 uppercase tracking-[0.3em] text-sm fade-in-up">"Digital Sanctuary"</p>
                <h1 class="text-5xl md:text-8xl font-thin serif leading-tight text-white fade-in-up delay-100">
                    "Weaving Logic " <br />
                    <span class="italic text-gray-400">"into"</span> " Aesthetics"
                </h1>
                <p class="text-gray-400 max-w-lg mx-auto leading-relaxed fade-in-up delay-200">
                    "A minimalistic exploration of code, design, and artificial intelligence. "
                    "Where the digital void meets human creativity."
                </p>
                <div class="pt-8 fade-in-up delay-300">
                    <a href="#oracle" class="inline-flex items-center gap-2 px-8 py-3 border border-white/20 hover:border-white hover:bg-white hover:text-black transition-all duration-300 rounded-full uppercase text-xs tracking-widest group">
                        "Consult the Oracle" <ArrowRight class="w-4 h-4 group-hover:translate-x-1 transition-transform" />
                    </a>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Philosophy() -> impl IntoView {
    view! {
        <section id="philosophy" class="py-24 bg-neutral-900/50">
            <div class="container mx-auto px-6 grid md:grid-cols-2 gap-16 items-center">
                <div class="space-y-6">
                    <h2 class="serif text-4xl text-white">"The Concept"</h2>
                    <div class="w-12 h-px bg-white/30"></div>
                    <p class="text-gray-400 leading-loose">
                        "\"Tenka\" (天下) implies all under heaven. \"Centi\" represents a fraction. "
                        "This space is a fraction of the world, curated and distilled. "
                        "UI is not just about buttons and inputs, but about the silent rhythm between elements."
                    </p>
                    <p class="text-gray-400 leading-loose">
                        "Less noise. More signal. Every pixel serves a purpose, or it vanishes."
                    </p>
                </div>
                <div class="relative h-96 w-full glass rounded-sm overflow-hidden flex items-center justify-center group">
                    <div class="absolute inset-0 bg-gradient-to-tr from-black via-transparent to-white/5 opacity-50"></div>
                    <Star />
                    <span class="absolute bottom-4 right-4 text-xs text-gray-600 uppercase tracking-widest group-hover:text-white transition-colors">
                        "Figure 01. Essence"
                    </span>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Gallery() -> impl IntoView {
    let works = WORKS
        .iter()
        .map(|work| {
            view! {
                <div class="group cursor-pointer">
                    <div class=format!("h-[400px] w-full {} relative overflow-hidden transition-transform duration-700 group-hover:scale-[1.02]", work.color)>
                        <div class="absolute inset-0 bg-black/20 group-hover:bg-transparent transition-colors duration-500"></div>
                        <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-32 h-32 border border-white/10 rounded-full group-hover:scale-150 transition-transform duration-700 opacity-50"></div>
                    </div>
                    <div class="mt-6 flex justify-between items-center border-t border-white/10 pt-4">
                        <h3 class="serif text-xl text-white group-hover:text-gray-300 transition-colors">{work.title}</h3>
                        <span class="text-xs text-gray-500 uppercase tracking-widest">{work.category}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="gallery" class="py-24">
            <div class="container mx-auto px-6">
                <div class="flex justify-between items-end mb-16">
                    <h2 class="serif text-4xl text-white">"Selected Works"</h2>
                    <span class="text-xs text-gray-500 uppercase tracking-widest">"2024 - 2025"</span>
                </div>
                <div class="grid md:grid-cols-3 gap-8">{works}</div>
            </div>
        </section>
    }
}
