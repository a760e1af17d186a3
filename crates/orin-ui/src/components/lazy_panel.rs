//! Deferred panel mounting
//!
//! Each non-hero panel shows a lightweight placeholder for its first frame and
//! swaps in its content on the next animation frame, so the hero paints
//! first. The section element only exists once the content is in; until then
//! the probe reports no geometry, so the controller treats the panel as
//! fitting the viewport and navigation proceeds normally.

use leptos::prelude::*;
use orin_core::SectionId;

use crate::dom::{self, FrameRequest};
use crate::perf::use_dev_perf;

#[component]
pub fn LazyPanel(
    section: SectionId,
    #[prop(optional)] class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let ready = RwSignal::new(false);
    let perf = use_dev_perf();
    let requested_at = dom::now_ms();

    let pending = StoredValue::new_local(None::<FrameRequest>);
    let request = FrameRequest::new(move |_| {
        let _ = ready.try_set(true);
        perf.record_component_load(section.as_str(), dom::now_ms() - requested_at);
    });
    match request {
        Ok(request) => pending.set_value(Some(request)),
        Err(e) => {
            e.log("lazy panel");
            ready.set(true);
        }
    }

    on_cleanup(move || {
        pending.try_update_value(Option::take);
    });

    let classes = panel_classes(class);

    view! {
        <Show
            when=move || ready.get()
            fallback=move || {
                view! {
                    <div class="panel panel-placeholder" aria-busy="true">
                        <div class="spinner"></div>
                    </div>
                }
            }
        >
            <section id=section.as_str() class=classes.clone()>
                {children()}
            </section>
        </Show>
    }
}

fn panel_classes(extra: &str) -> String {
    if extra.is_empty() {
        "panel".to_string()
    } else {
        format!("panel {extra}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_classes() {
        assert_eq!(panel_classes(""), "panel");
        assert_eq!(panel_classes("panel-trailing"), "panel panel-trailing");
    }
}
