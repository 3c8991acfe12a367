//! FAQ accordion

use leptos::prelude::*;

use crate::core::accordion::Accordion;
use crate::core::content::FaqEntry;
use crate::ui::icon::{Icon, icons};

/// Question list where opening one answer closes the others
#[component]
pub fn FaqAccordion(
    entries: &'static [FaqEntry],
    /// Entry open on first render
    #[prop(optional)]
    initially_open: Option<usize>,
) -> impl IntoView {
    let state = RwSignal::new(match initially_open {
        Some(index) => Accordion::with_open(entries.len(), index),
        None => Accordion::new(entries.len()),
    });

    view! {
        <div class="space-y-4">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let is_open = Signal::derive(move || state.with(|s| s.is_open(index)));
                    view! {
                        <FaqItem
                            entry=*entry
                            index=index
                            is_open=is_open
                            on_toggle=Callback::new(move |i: usize| state.update(|s| s.toggle(i)))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FaqItem(
    entry: FaqEntry,
    index: usize,
    is_open: Signal<bool>,
    on_toggle: Callback<usize>,
) -> impl IntoView {
    let panel_id = format!("faq-panel-{}", index);

    view! {
        <div class="scroll-reveal border border-theme rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-theme-secondary/30 transition-colors"
                on:click=move |_| on_toggle.run(index)
                aria-expanded=move || is_open.get().to_string()
                aria-controls=panel_id.clone()
            >
                <span class="font-semibold">{entry.question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                id=panel_id
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 leading-relaxed">{entry.answer}</div>
            </div>
        </div>
    }
}
