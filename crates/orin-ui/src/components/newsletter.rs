use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use orin_core::newsletter::{RESET_DELAY_MS, SubscriptionForm};
use tracing::debug;

use super::icons::{Icon, IconKind};
use crate::content::NEWSLETTER_PERKS;

/// Email signup. Nothing leaves the page: a valid address shows the success
/// message, which clears itself after `RESET_DELAY_MS`.
#[component]
pub fn Newsletter() -> impl IntoView {
    let form = RwSignal::new(SubscriptionForm::new());
    let reset = StoredValue::new_local(None::<Timeout>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(SubscriptionForm::submit) {
            Some(Ok(())) => {
                let timeout = Timeout::new(RESET_DELAY_MS, move || {
                    form.try_update(SubscriptionForm::reset);
                });
                reset.set_value(Some(timeout));
            }
            Some(Err(e)) => debug!("signup rejected: {e}"),
            None => {}
        }
    };

    on_cleanup(move || {
        reset.try_update_value(Option::take);
    });

    view! {
        <div class="newsletter container">
            <div class="newsletter-content fade-up">
                <div class="newsletter-header">
                    <Icon kind=IconKind::Sparkles size=48 class="newsletter-icon" />
                    <h2>"Stay in the Loop"</h2>
                    <p>
                        "Get exclusive updates, early access to features, and insider tips \
                         delivered to your inbox"
                    </p>
                </div>

                <Show
                    when=move || !form.with(SubscriptionForm::is_subscribed)
                    fallback=|| {
                        view! {
                            <div class="success-message pop-in">
                                <Icon kind=IconKind::CheckCircle size=48 />
                                <h3>"Welcome aboard!"</h3>
                                <p>"Check your inbox for a confirmation email"</p>
                            </div>
                        }
                    }
                >
                    <form class="newsletter-form" on:submit=on_submit>
                        <div class="input-group">
                            <Icon kind=IconKind::Mail size=20 class="input-icon" />
                            <input
                                type="email"
                                placeholder="Enter your email address"
                                required=true
                                prop:value=move || form.with(|f| f.email().to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.set_email(event_target_value(&ev)));
                                }
                            />
                            <button type="submit" class="btn-subscribe">
                                "Subscribe"
                            </button>
                        </div>
                        <p class="newsletter-privacy">
                            "We respect your privacy. Unsubscribe at any time."
                        </p>
                    </form>
                </Show>

                <div class="newsletter-features">
                    {NEWSLETTER_PERKS
                        .iter()
                        .map(|(icon, label)| {
                            view! {
                                <div class="feature">
                                    <span class="feature-icon">{*icon}</span>
                                    <span>{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
